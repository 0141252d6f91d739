use crate::decimal::Decimal;
use crate::decoder::decode_decimal;
use crate::encoder::{encode_decimal, NEGATIVE, ZERO};
use crate::error::{DecodeError, DecodeResult};
use std::fmt;
use std::str::FromStr;

/// A decimal held in its pre-encoded sortable form
///
/// This struct stores only the encoded string, providing:
/// - Zero-copy access via `as_str()`
/// - Direct string comparison for Ord (order-preserving)
/// - A value that can be written to an index as-is
///
/// To get the numeric value back, use `decode()`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortableDecimal {
    encoded: String,
}

impl SortableDecimal {
    /// Encode a decimal
    #[must_use]
    pub fn from_decimal(value: &Decimal) -> Self {
        Self {
            encoded: encode_decimal(value),
        }
    }

    /// Get the encoded string (zero-copy)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Consume and return the encoded string
    #[must_use]
    pub fn into_string(self) -> String {
        self.encoded
    }

    /// Decode back to a [`Decimal`].
    ///
    /// # Errors
    ///
    /// [`DecodeError::ScaleOutOfRange`] when the key was built from a value
    /// with more than `MAX_PRECISION + MAX_SCALE_PADDING` digits at a scale
    /// near `i32::MIN`.
    pub fn decode(&self) -> DecodeResult<Decimal> {
        decode_decimal(&self.encoded)
    }

    /// Check if this is the canonical zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.encoded.as_bytes()[0] == ZERO
    }

    /// Check if this encodes a negative value
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.encoded.as_bytes()[0] == NEGATIVE
    }
}

impl From<&Decimal> for SortableDecimal {
    fn from(value: &Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Decimal> for SortableDecimal {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(&value)
    }
}

impl FromStr for SortableDecimal {
    type Err = DecodeError;

    /// Validate an encoded string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Full decode: also rejects values with no 32-bit scale
        decode_decimal(s).map_err(|e| {
            tracing::debug!(error = %e, "rejecting malformed sortable decimal");
            e
        })?;

        Ok(Self {
            encoded: s.to_string(),
        })
    }
}

impl AsRef<str> for SortableDecimal {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for SortableDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
