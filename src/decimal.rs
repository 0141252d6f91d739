use crate::error::{EncodeError, EncodeResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// An arbitrary-precision signed decimal: `unscaled × 10^(-scale)`.
///
/// The unscaled magnitude is unbounded; the scale spans the full 32-bit
/// signed range. Equality and ordering are numeric, so `1` and `1.0000`
/// (`10000` with scale 4) compare equal even though their fields differ.
/// Comparison never rescales either operand, so values whose scales are
/// billions apart compare in time proportional to their digit counts.
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i32,
}

impl Decimal {
    /// Create a decimal equal to `unscaled × 10^(-scale)`
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// Zero with scale 0
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// The unscaled integer
    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The power-of-ten scale
    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Check if this is numerically zero (any scale)
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if this is strictly negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Number of decimal digits in the unscaled magnitude (1 for zero)
    #[must_use]
    pub fn precision(&self) -> usize {
        if self.is_zero() {
            1
        } else {
            self.magnitude_digits().len()
        }
    }

    /// Decimal digits of the unscaled magnitude, most significant first
    #[must_use]
    pub fn magnitude_digits(&self) -> Vec<u8> {
        self.unscaled.magnitude().to_radix_be(10)
    }

    /// Exponent of the value in scientific notation: `d1.d2… × 10^e`.
    ///
    /// Meaningless for zero, which has no leading digit.
    #[must_use]
    pub fn adjusted_exponent(&self) -> i64 {
        scientific_exponent(self.precision(), self.scale)
    }

    /// Lossy conversion to the nearest `f64`.
    ///
    /// Magnitudes beyond the `f64` range become infinities; tiny ones become zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.unscaled, -i64::from(self.scale))
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Parse a decimal literal (internal helper)
    fn parse_literal(s: &str) -> EncodeResult<Self> {
        let s = s.trim();

        #[allow(clippy::option_if_let_else)]
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = s.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, s)
        };

        // Split off an exponent suffix
        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => {
                let exponent = &s[pos + 1..];
                let exponent: i64 = exponent.parse().map_err(|_| {
                    EncodeError::InvalidFormat(format!("invalid exponent: {exponent:?}"))
                })?;
                (&s[..pos], exponent)
            }
            None => (s, 0),
        };

        let (integer_part, fractional_part) = match mantissa.split_once('.') {
            Some((int, frac)) => {
                if frac.contains('.') {
                    return Err(EncodeError::InvalidFormat(
                        "multiple decimal points".to_string(),
                    ));
                }
                (int, frac)
            }
            None => (mantissa, ""),
        };

        if integer_part.is_empty() && fractional_part.is_empty() {
            return Err(EncodeError::InvalidFormat(
                "input contains no digits".to_string(),
            ));
        }

        let mut digits = Vec::with_capacity(integer_part.len() + fractional_part.len());
        for b in integer_part.bytes().chain(fractional_part.bytes()) {
            if !b.is_ascii_digit() {
                return Err(EncodeError::InvalidFormat(format!(
                    "invalid digit: {}",
                    char::from(b)
                )));
            }
            digits.push(b - b'0');
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let unscaled = BigInt::from_radix_be(sign, &digits, 10)
            .ok_or_else(|| EncodeError::InvalidFormat("invalid digits".to_string()))?;

        let fraction_len = i64::try_from(fractional_part.len())
            .map_err(|_| EncodeError::InvalidFormat("fraction too long".to_string()))?;
        let scale = fraction_len
            .checked_sub(exponent)
            .ok_or(EncodeError::ScaleOutOfRange(i64::MAX))?;
        let scale = i32::try_from(scale).map_err(|_| EncodeError::ScaleOutOfRange(scale))?;

        Ok(Self::new(unscaled, scale))
    }

    /// Bounds on the scientific exponent derived from the bit length alone
    fn exponent_bounds(&self) -> (i64, i64) {
        let bits = u128::from(self.unscaled.magnitude().bits());
        // 0.30102999 < log10(2) < 0.30103
        let low = bits.saturating_sub(1) * 30_102_999 / 100_000_000;
        let high = bits * 30_103_000 / 100_000_000;
        let bound = |digits: u128| {
            i64::try_from(digits)
                .unwrap_or(i64::MAX)
                .saturating_sub(i64::from(self.scale))
        };
        (bound(low), bound(high))
    }

    /// Compare absolute values
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let (left_low, left_high) = self.exponent_bounds();
        let (right_low, right_high) = other.exponent_bounds();
        if left_high < right_low {
            return Ordering::Less;
        }
        if left_low > right_high {
            return Ordering::Greater;
        }

        let left = self.magnitude_digits();
        let right = other.magnitude_digits();

        scientific_exponent(left.len(), self.scale)
            .cmp(&scientific_exponent(right.len(), other.scale))
            .then_with(|| {
                // Same exponent: compare significant digits, trailing zeros ignored
                let left = &left[..left.len() - crate::significand::trailing_zeros(&left)];
                let right = &right[..right.len() - crate::significand::trailing_zeros(&right)];
                left.cmp(right)
            })
    }
}

/// `e` such that a value with `digit_count` unscaled digits and `scale` is `d1.d2… × 10^e`
#[must_use]
pub fn scientific_exponent(digit_count: usize, scale: i32) -> i64 {
    let digit_count = i64::try_from(digit_count).unwrap_or(i64::MAX);
    (digit_count - 1).saturating_sub(i64::from(scale))
}

impl FromStr for Decimal {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl fmt::Display for Decimal {
    /// Canonical text: plain notation when the scale is non-negative and the
    /// value is not tiny, otherwise `d.ddd…E±n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.unscaled.magnitude().to_str_radix(10);
        let len = i64::try_from(coefficient.len()).map_err(|_| fmt::Error)?;
        let scale = i64::from(self.scale);
        let adjusted = len - 1 - scale;

        if self.is_negative() {
            f.write_str("-")?;
        }

        if scale >= 0 && adjusted >= -6 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scale = scale as usize;
            if scale == 0 {
                return f.write_str(&coefficient);
            }
            if coefficient.len() > scale {
                let (int, frac) = coefficient.split_at(coefficient.len() - scale);
                return write!(f, "{int}.{frac}");
            }
            f.write_str("0.")?;
            for _ in 0..scale - coefficient.len() {
                f.write_str("0")?;
            }
            return f.write_str(&coefficient);
        }

        let (leading, rest) = coefficient.split_at(1);
        f.write_str(leading)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        if adjusted != 0 {
            write!(f, "E{}{adjusted}", if adjusted > 0 { "+" } else { "" })?;
        }
        Ok(())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.unscaled.sign();
        match sign.cmp(&other.unscaled.sign()) {
            Ordering::Equal => match sign {
                Sign::NoSign => Ordering::Equal,
                Sign::Plus => self.cmp_magnitude(other),
                Sign::Minus => other.cmp_magnitude(self),
            },
            ordering => ordering,
        }
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.unscaled, self.scale)
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = EncodeError;

    /// Convert using the shortest representation that round-trips the float.
    ///
    /// Negative zero becomes plain zero.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }
        // LowerExp yields the shortest round-trip digits, e.g. "1.2345e-7"
        format!("{value:e}").parse()
    }
}
