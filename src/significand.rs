use crate::error::{DecodeError, DecodeResult};
use crate::field::{KeyReader, KeyWriter, DECIMAL};
use crate::MAX_PRECISION;

/// Normalized mantissa: exactly [`MAX_PRECISION`] decimal digits, leading digit non-zero
pub type Significand = [u8; MAX_PRECISION];

/// Normalize the magnitude digits of a non-zero value to [`MAX_PRECISION`] digits.
///
/// Shorter inputs are padded with trailing zeros; longer inputs are truncated
/// (never rounded). Leading zeros must already be absent.
#[must_use]
pub fn normalize(digits: &[u8]) -> Significand {
    debug_assert!(digits.first().is_some_and(|&d| d != 0));

    if digits.len() > MAX_PRECISION {
        tracing::trace!(
            digits = digits.len(),
            kept = MAX_PRECISION,
            "truncating significand beyond maximum precision"
        );
    }

    let mut significand = [0u8; MAX_PRECISION];
    let kept = digits.len().min(MAX_PRECISION);
    significand[..kept].copy_from_slice(&digits[..kept]);
    significand
}

/// Write the leading digit followed by the remaining `MAX_PRECISION - 1` digits.
///
/// For negative values the writer complements each digit (`9 - d`).
pub fn write_significand(writer: &mut KeyWriter, significand: &Significand) {
    let (leading, rest) = significand.split_at(1);
    writer.write_digit(leading[0], DECIMAL);
    for &digit in rest {
        writer.write_digit(digit, DECIMAL);
    }
}

/// Read the mantissa field written by [`write_significand`].
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] on a non-digit, or
/// [`DecodeError::LeadingZero`] if the (un-complemented) leading digit is zero.
pub fn read_significand(reader: &mut KeyReader) -> DecodeResult<Significand> {
    let mut significand = [0u8; MAX_PRECISION];
    for digit in &mut significand {
        *digit = reader.read_digit(DECIMAL, "decimal digit")?;
    }

    if significand[0] == 0 {
        return Err(DecodeError::LeadingZero);
    }

    Ok(significand)
}

/// Number of trailing zero digits
#[must_use]
pub fn trailing_zeros(digits: &[u8]) -> usize {
    digits.iter().rev().take_while(|&&d| d == 0).count()
}
