//! Exponent field: a sign sentinel followed by a fixed-width hexadecimal field.
//!
//! The sentinel splits exponents into `e < 0` and `e >= 0`; the hex field then
//! stores `e mod 2^32`, which is monotonic inside each bucket. Together they
//! cover `[-2^32, 2^32 - 1]`.

use crate::error::DecodeResult;
use crate::field::{KeyReader, KeyWriter, EXPONENT_SIGN, HEX};

/// Number of hex digits in the exponent field
pub const EXPONENT_DIGITS: usize = 8;

/// Smallest exponent the field can hold
pub const EXPONENT_MIN: i64 = -(1 << 32);

/// Largest exponent the field can hold
pub const EXPONENT_MAX: i64 = (1 << 32) - 1;

/// Write the sentinel and hex digits for `exponent`.
///
/// Exponents outside [`EXPONENT_MIN`]..=[`EXPONENT_MAX`] are clamped; they only
/// arise from magnitudes with billions of digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn write_exponent(writer: &mut KeyWriter, exponent: i64) {
    let clamped = exponent.clamp(EXPONENT_MIN, EXPONENT_MAX);
    if clamped != exponent {
        tracing::warn!(exponent, clamped, "exponent outside encodable range, clamping");
    }

    writer.write_digit(u8::from(clamped >= 0), EXPONENT_SIGN);

    // Two's complement low 32 bits: e for e >= 0, e + 2^32 for e < 0
    let bits = clamped as u32;
    for shift in (0..EXPONENT_DIGITS).rev() {
        let nibble = ((bits >> (shift * 4)) & 0xf) as u8;
        writer.write_digit(nibble, HEX);
    }
}

/// Read the sentinel and hex digits written by [`write_exponent`].
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`](crate::DecodeError::InvalidCharacter)
/// if the sentinel or any hex digit is outside its alphabet.
pub fn read_exponent(reader: &mut KeyReader) -> DecodeResult<i64> {
    let non_negative = reader.read_digit(EXPONENT_SIGN, "exponent sentinel '-' or '_'")? == 1;

    let mut bits = 0u32;
    for _ in 0..EXPONENT_DIGITS {
        let nibble = reader.read_digit(HEX, "lowercase hex digit")?;
        bits = (bits << 4) | u32::from(nibble);
    }

    let exponent = i64::from(bits);
    Ok(if non_negative {
        exponent
    } else {
        exponent + EXPONENT_MIN
    })
}
