//! # sortdec
//!
//! A fixed-width, order-preserving textual encoding for arbitrary-precision
//! signed decimal numbers.
//!
//! Key-value datastores that can only order index entries by comparing
//! strings byte by byte still need range queries and sorting over decimal
//! fields. This crate maps every decimal to a string of exactly
//! [`STRING_SIZE`] ASCII characters such that:
//!
//! - **Order preservation**: `x1 < x2` if and only if `encode(x1) < encode(x2)`
//! - **Round trip**: `decode(encode(x)) == x` numerically, for up to
//!   [`MAX_PRECISION`] significant digits
//! - **Fixed length**: every encoding is [`STRING_SIZE`] characters long
//! - **Canonical zero**: zero encodes identically whatever its scale
//!
//! Digits beyond [`MAX_PRECISION`] are truncated, never rounded.
//!
//! ## Examples
//!
//! ```rust
//! use sortdec::{decode, encode, Decimal, STRING_SIZE};
//!
//! let price: Decimal = "123.456".parse().unwrap();
//! let key = encode(&price);
//! assert_eq!(key.len(), STRING_SIZE);
//! assert_eq!(decode(&key).unwrap(), price);
//!
//! // Lexicographic string comparison = numerical comparison
//! let a = encode(&"-1.5".parse().unwrap());
//! let b = encode(&"0.25".parse().unwrap());
//! assert!(a < b);
//!
//! // Scale does not matter: 1 and 1.0000 share one encoding
//! assert_eq!(encode(&Decimal::new(1, 0)), encode(&Decimal::new(10_000, 4)));
//! ```
//!
//! ## Format Overview
//!
//! | offset | width | field                                                        |
//! |--------|-------|--------------------------------------------------------------|
//! | 0      | 1     | sign: `-` negative, `=` zero, `_` positive                   |
//! | 1      | 1     | exponent sign: `-` below zero, `_` zero or above             |
//! | 2      | 8     | exponent, lowercase hex, `e mod 2^32`                        |
//! | 10     | 1     | separator `,`                                                |
//! | 11     | 100   | mantissa digits, leading digit first                         |
//!
//! The exponent is the scientific one: the value is `±d1.d2… × 10^e`. For
//! negative values every digit after the sign (exponent sign included) is
//! replaced by its complement in its own radix, which reverses the order
//! inside the negative bucket.

pub(crate) mod decimal;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod exponent;
pub(crate) mod field;
pub(crate) mod significand;
pub(crate) mod sortable;

// Re-export main types and functions
pub use decimal::Decimal;
pub use decoder::{decode_to_parts, DecodedDecimal, DecodedValue, MAX_SCALE_PADDING};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use sortable::SortableDecimal;

/// Maximum number of significant decimal digits retained by the encoding
pub const MAX_PRECISION: usize = 100;

/// Length in characters of every encoded string
pub const STRING_SIZE: usize = 1 + 1 + exponent::EXPONENT_DIGITS + 1 + MAX_PRECISION;

/// Encode a decimal into its sortable string.
///
/// Never fails; significant digits beyond [`MAX_PRECISION`] are truncated.
#[must_use]
pub fn encode(value: &Decimal) -> String {
    encoder::encode_decimal(value)
}

/// Decode a sortable string produced by [`encode`].
///
/// # Errors
///
/// Returns [`DecodeError`] if the string has the wrong length, an illegal
/// character at any offset, or no separator.
pub fn decode(s: &str) -> DecodeResult<Decimal> {
    decoder::decode_decimal(s)
}
