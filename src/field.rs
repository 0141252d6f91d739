use crate::error::{DecodeError, DecodeResult};

/// Two-symbol alphabet of the exponent sentinel: index 0 sorts first.
pub const EXPONENT_SIGN: &[u8] = b"-_";

/// Lowercase hexadecimal digits
pub const HEX: &[u8] = b"0123456789abcdef";

/// Decimal digits
pub const DECIMAL: &[u8] = b"0123456789";

/// Diminished radix complement of a single digit: `radix - 1 - value`.
///
/// Applying this to every digit of a fixed-width field reverses the
/// lexicographic order of that field, which is exactly what negative values
/// need. It is its own inverse.
#[inline]
#[must_use]
pub const fn complement(value: u8, radix: u8) -> u8 {
    radix - 1 - value
}

/// Writes the fixed-width fields of a sortable string.
///
/// When `complement` is set every digit written through [`write_digit`](Self::write_digit)
/// is complemented in its alphabet; raw characters (sign, separator) are not.
pub struct KeyWriter {
    buf: String,
    complement: bool,
}

impl KeyWriter {
    /// Create a [`KeyWriter`](Self) with pre-allocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize, complement: bool) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            complement,
        }
    }

    /// Write a structural character verbatim
    pub fn write_raw(&mut self, symbol: u8) {
        debug_assert!(symbol.is_ascii());
        self.buf.push(char::from(symbol));
    }

    /// Write one digit `value` drawn from `alphabet` (radix = alphabet length)
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_digit(&mut self, value: u8, alphabet: &[u8]) {
        let radix = alphabet.len() as u8;
        debug_assert!(value < radix);
        let value = if self.complement {
            complement(value, radix)
        } else {
            value
        };
        self.buf.push(char::from(alphabet[usize::from(value)]));
    }

    /// Number of characters written so far
    #[must_use]
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    /// Get the resulting string
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Reads the fixed-width fields of a sortable string, undoing the complement
/// applied by [`KeyWriter`].
pub struct KeyReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    complement: bool,
}

impl<'a> KeyReader<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        KeyReader {
            bytes,
            pos: 0,
            complement: false,
        }
    }

    /// Toggle complementing for every digit read from now on
    pub fn set_complement(&mut self, complement: bool) {
        self.complement = complement;
    }

    /// Read a structural character verbatim
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidLength`] if the input is exhausted.
    pub fn read_raw(&mut self) -> DecodeResult<u8> {
        let symbol = self.peek()?;
        self.pos += 1;
        Ok(symbol)
    }

    /// Read one digit from `alphabet` and return its (un-complemented) value
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidCharacter`] if the character is not in
    /// `alphabet`, or [`DecodeError::InvalidLength`] if the input is exhausted.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_digit(&mut self, alphabet: &[u8], expected: &'static str) -> DecodeResult<u8> {
        let position = self.pos;
        let symbol = self.read_raw()?;
        let Some(index) = alphabet.iter().position(|&a| a == symbol) else {
            return Err(DecodeError::InvalidCharacter {
                position,
                found: char::from(symbol),
                expected,
            });
        };
        let radix = alphabet.len() as u8;
        let value = index as u8;
        Ok(if self.complement {
            complement(value, radix)
        } else {
            value
        })
    }

    /// Consume the separator, failing if anything else is found
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingSeparator`] if the next character is not `separator`.
    pub fn expect_separator(&mut self, separator: u8) -> DecodeResult<()> {
        let position = self.pos;
        let symbol = self.read_raw()?;
        if symbol == separator {
            Ok(())
        } else {
            Err(DecodeError::MissingSeparator {
                position,
                found: char::from(symbol),
            })
        }
    }

    fn peek(&self) -> DecodeResult<u8> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::InvalidLength {
                expected: self.pos + 1,
                actual: self.bytes.len(),
            })
    }

    /// Check if there are more characters to read
    #[must_use]
    pub const fn has_remaining(&self) -> bool {
        self.pos < self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_is_involution() {
        for radix in [2u8, 10, 16] {
            for value in 0..radix {
                assert_eq!(complement(complement(value, radix), radix), value);
            }
        }
        assert_eq!(complement(0, 16), 15);
        assert_eq!(complement(3, 10), 6);
        assert_eq!(complement(1, 2), 0);
    }

    #[test]
    fn test_writer_complements_digits_only() {
        let mut writer = KeyWriter::with_capacity(4, true);
        writer.write_raw(b'-');
        writer.write_digit(1, EXPONENT_SIGN);
        writer.write_digit(0xa, HEX);
        writer.write_digit(2, DECIMAL);
        assert_eq!(writer.written(), 4);
        assert_eq!(writer.into_string(), "--57");
    }

    #[test]
    fn test_reader_roundtrip() {
        let mut writer = KeyWriter::with_capacity(3, true);
        writer.write_digit(7, HEX);
        writer.write_raw(b',');
        writer.write_digit(9, DECIMAL);
        let encoded = writer.into_string();

        let mut reader = KeyReader::new(encoded.as_bytes());
        reader.set_complement(true);
        assert_eq!(reader.read_digit(HEX, "hex digit").unwrap(), 7);
        reader.expect_separator(b',').unwrap();
        assert_eq!(reader.read_digit(DECIMAL, "decimal digit").unwrap(), 9);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn test_reader_rejects_foreign_characters() {
        let mut reader = KeyReader::new(b"G");
        assert_eq!(
            reader.read_digit(HEX, "hex digit"),
            Err(DecodeError::InvalidCharacter {
                position: 0,
                found: 'G',
                expected: "hex digit",
            })
        );

        let mut reader = KeyReader::new(b";");
        assert_eq!(
            reader.expect_separator(b','),
            Err(DecodeError::MissingSeparator {
                position: 0,
                found: ';',
            })
        );
    }

    #[test]
    fn test_reader_exhausted() {
        let mut reader = KeyReader::new(b"");
        assert!(matches!(
            reader.read_raw(),
            Err(DecodeError::InvalidLength { .. })
        ));
    }
}
