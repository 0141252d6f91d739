use thiserror::Error;

/// Errors that can occur while decoding a sortable string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid encoding: input contains non-ASCII characters")]
    NonAscii,

    #[error("Invalid sign sentinel {0:?}: expected '-', '=' or '_'")]
    InvalidSign(char),

    #[error("Invalid character {found:?} at offset {position}: expected {expected}")]
    InvalidCharacter {
        position: usize,
        found: char,
        expected: &'static str,
    },

    #[error("Missing separator at offset {position}: found {found:?}")]
    MissingSeparator { position: usize, found: char },

    #[error("Invalid significand: leading digit is zero")]
    LeadingZero,

    #[error("Invalid zero encoding: zero must use the canonical form")]
    NonCanonicalZero,

    #[error("Scale out of range: {0} does not fit in a 32-bit scale")]
    ScaleOutOfRange(i64),
}

/// Errors that can occur while building a [`Decimal`](crate::Decimal) from text or floats
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid decimal format: {0}")]
    InvalidFormat(String),

    #[error("Scale out of range: {0} does not fit in a 32-bit scale")]
    ScaleOutOfRange(i64),

    #[error("Non-finite value: NaN and infinities have no decimal representation")]
    NonFinite,
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;
