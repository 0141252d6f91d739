//! Decoding logic for the sortable-string format

use crate::decimal::Decimal;
use crate::encoder::{canonical_zero, NEGATIVE, POSITIVE, SEPARATOR, ZERO};
use crate::error::{DecodeError, DecodeResult};
use crate::exponent::read_exponent;
use crate::field::KeyReader;
use crate::significand::{read_significand, trailing_zeros, Significand};
use crate::{MAX_PRECISION, STRING_SIZE};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Decoded decimal with semantic fields (for when field access is needed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDecimal {
    pub negative: bool,
    /// Scientific exponent: the value is `±d1.d2… × 10^exponent`
    pub exponent: i64,
    /// Normalized mantissa, leading digit non-zero, zero padded
    pub significand: Significand,
}

/// Represents either the canonical zero or a decoded non-zero decimal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Zero,
    Regular(DecodedDecimal),
}

/// Decode a sortable string to semantic parts
///
/// # Errors
///
/// Returns [`DecodeError`] if the string has the wrong length, contains an
/// illegal character at any offset, lacks the separator, or is a malformed zero.
pub fn decode_to_parts(s: &str) -> DecodeResult<DecodedValue> {
    if !s.is_ascii() {
        return Err(DecodeError::NonAscii);
    }
    if s.len() != STRING_SIZE {
        return Err(DecodeError::InvalidLength {
            expected: STRING_SIZE,
            actual: s.len(),
        });
    }

    let mut reader = KeyReader::new(s.as_bytes());
    let negative = match reader.read_raw()? {
        NEGATIVE => true,
        POSITIVE => false,
        ZERO => {
            return if s == canonical_zero() {
                Ok(DecodedValue::Zero)
            } else {
                Err(DecodeError::NonCanonicalZero)
            };
        }
        other => return Err(DecodeError::InvalidSign(char::from(other))),
    };

    // Every digit after the sign was complemented for negative values
    reader.set_complement(negative);
    let exponent = read_exponent(&mut reader)?;
    reader.expect_separator(SEPARATOR)?;
    let significand = read_significand(&mut reader)?;
    debug_assert!(!reader.has_remaining());

    Ok(DecodedValue::Regular(DecodedDecimal {
        negative,
        exponent,
        significand,
    }))
}

/// Largest number of zeros appended to the mantissa when the value sits below
/// the smallest 32-bit scale. Reaching it takes an encoded input with more than
/// `MAX_PRECISION + MAX_SCALE_PADDING` digits.
pub const MAX_SCALE_PADDING: u32 = 1 << 16;

impl DecodedDecimal {
    /// Materialize the value as `unscaled × 10^(-scale)`.
    ///
    /// Trailing zeros of the mantissa are dropped, but a positive scale is never
    /// pushed below zero, so `1` comes back with scale 0 rather than as `1E+0`
    /// padded with zeros, and `100` comes back as `100`.
    ///
    /// Values truncated from wide inputs near `i32::MIN` need a scale below
    /// `i32::MIN`. They come back with scale `i32::MIN` and the missing powers
    /// of ten appended to the unscaled value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ScaleOutOfRange`] when the scale would exceed
    /// `i32::MAX`, or would need more than [`MAX_SCALE_PADDING`] appended zeros.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_decimal(&self) -> DecodeResult<Decimal> {
        let raw_scale = (MAX_PRECISION as i64 - 1) - self.exponent;
        let floor = if raw_scale > 0 {
            0
        } else {
            i64::from(i32::MIN)
        };
        let strip = usize::try_from(raw_scale - floor)
            .map_or(0, |room| room.min(trailing_zeros(&self.significand)));

        let scale = raw_scale - strip as i64;
        let padding = u32::try_from(i64::from(i32::MIN) - scale).unwrap_or(0);
        if padding > MAX_SCALE_PADDING {
            return Err(DecodeError::ScaleOutOfRange(scale));
        }
        let padded_scale = scale + i64::from(padding);
        let padded_scale =
            i32::try_from(padded_scale).map_err(|_| DecodeError::ScaleOutOfRange(padded_scale))?;

        let mut magnitude = self.significand[..MAX_PRECISION - strip]
            .iter()
            .fold(BigUint::zero(), |acc, &digit| acc * 10u32 + u32::from(digit));
        if padding > 0 {
            tracing::trace!(padding, "padding mantissa to reach the smallest scale");
            magnitude *= BigUint::from(10u32).pow(padding);
        }
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };

        Ok(Decimal::new(BigInt::from_biguint(sign, magnitude), padded_scale))
    }
}

/// Decode a sortable string into a [`Decimal`]
///
/// # Errors
///
/// Returns [`DecodeError`] if the string is not a valid encoding.
pub fn decode_decimal(s: &str) -> DecodeResult<Decimal> {
    match decode_to_parts(s)? {
        DecodedValue::Zero => Ok(Decimal::zero()),
        DecodedValue::Regular(parts) => parts.to_decimal(),
    }
}
