//! Encoding logic for the sortable-string format
//!
//! Layout: sign sentinel, exponent sentinel, hex exponent, separator, mantissa.
//! Negative values complement every digit after the sign so that larger
//! magnitudes sort first inside the negative bucket.

use crate::decimal::{scientific_exponent, Decimal};
use crate::exponent::write_exponent;
use crate::field::KeyWriter;
use crate::significand::{normalize, write_significand, Significand};
use crate::{MAX_PRECISION, STRING_SIZE};

/// Sign sentinel of negative values
pub const NEGATIVE: u8 = b'-';

/// Sign sentinel of the canonical zero
pub const ZERO: u8 = b'=';

/// Sign sentinel of positive values
pub const POSITIVE: u8 = b'_';

/// Separator between the exponent and the mantissa
pub const SEPARATOR: u8 = b',';

/// Encode a decimal value into its sortable string
#[must_use]
pub fn encode_decimal(value: &Decimal) -> String {
    if value.is_zero() {
        return canonical_zero();
    }

    let digits = value.magnitude_digits();
    let exponent = scientific_exponent(digits.len(), value.scale());
    encode_from_parts(value.is_negative(), exponent, &normalize(&digits))
}

/// The single encoding shared by every representation of zero
#[must_use]
pub fn canonical_zero() -> String {
    assemble(ZERO, false, 0, &[0; MAX_PRECISION])
}

/// Encode from semantic parts: sign, scientific exponent and normalized mantissa
#[must_use]
pub fn encode_from_parts(negative: bool, exponent: i64, significand: &Significand) -> String {
    let sign = if negative { NEGATIVE } else { POSITIVE };
    assemble(sign, negative, exponent, significand)
}

fn assemble(sign: u8, complement: bool, exponent: i64, significand: &Significand) -> String {
    let mut writer = KeyWriter::with_capacity(STRING_SIZE, complement);

    writer.write_raw(sign);
    write_exponent(&mut writer, exponent);
    writer.write_raw(SEPARATOR);
    write_significand(&mut writer, significand);

    debug_assert_eq!(writer.written(), STRING_SIZE);
    writer.into_string()
}
