use crate::errors::Error;

/// Location of a fixed-width field inside an AIS message, in bits from the
/// start of the message. Declared as `const` tables in each message module
/// and consumed generically by [`BitVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub width: usize,
}

impl Field {
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }
}

/// Big-endian bit sequence.
///
/// Bits are stored MSB-first inside each backing byte. The sequence grows by
/// appending; once a message is finalized its length is fixed and fields are
/// written in place with [`BitVec::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {
    data: Vec<u8>,
    len: usize,
}

impl BitVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence of `len` zero bits, used as the encode buffer for
    /// fixed-size messages.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len.div_ceil(8)],
            len,
        }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bit_at(&self, index: usize) -> bool {
        (self.data[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    fn set_bit(&mut self, index: usize, bit: bool) {
        let mask = 1u8 << (7 - index % 8);
        if bit {
            self.data[index / 8] |= mask;
        } else {
            self.data[index / 8] &= !mask;
        }
    }

    /// Append the low `width` bits of `value`, most significant bit first.
    /// A value wider than `width` is truncated silently.
    pub fn append(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64);
        for i in (0..width).rev() {
            let bit = (value >> i) & 1 == 1;
            if self.len % 8 == 0 {
                self.data.push(0);
            }
            let index = self.len;
            self.len += 1;
            self.set_bit(index, bit);
        }
    }

    /// Write the low `field.width` bits of `value` at `field.offset`,
    /// most significant bit first. The field must lie within the sequence.
    pub fn set(&mut self, field: Field, value: u64) {
        debug_assert!(field.offset + field.width <= self.len);
        for i in 0..field.width {
            let bit = (value >> (field.width - 1 - i)) & 1 == 1;
            self.set_bit(field.offset + i, bit);
        }
    }

    /// Write a signed value in two's complement representation.
    pub fn set_signed(&mut self, field: Field, value: i64) {
        self.set(field, value as u64);
    }

    /// Read `field.width` bits at `field.offset` as an unsigned value.
    /// Reading past the end of the sequence is a hard error.
    pub fn get(&self, field: Field) -> Result<u64, Error> {
        debug_assert!(field.width <= 64);
        if field.offset + field.width > self.len {
            return Err(Error::InsufficientBits {
                offset: field.offset,
                width: field.width,
                available: self.len,
            });
        }
        let mut value = 0u64;
        for i in 0..field.width {
            value = (value << 1) | self.bit_at(field.offset + i) as u64;
        }
        Ok(value)
    }

    /// Read a signed field, sign-extending from the stored width.
    pub fn get_signed(&self, field: Field) -> Result<i64, Error> {
        let raw = self.get(field)?;
        if field.width == 0 || field.width == 64 {
            return Ok(raw as i64);
        }
        let sign = 1u64 << (field.width - 1);
        if raw & sign != 0 {
            Ok((raw | !(sign | (sign - 1))) as i64)
        } else {
            Ok(raw as i64)
        }
    }

    /// Read a 6-bit coded text field. The field width must be a multiple of
    /// six; trailing `@` padding is trimmed.
    pub fn get_text(&self, field: Field) -> Result<String, Error> {
        Ok(self.get_text_raw(field)?.trim_end_matches('@').to_string())
    }

    /// Read a 6-bit coded text field without trimming the `@` padding, for
    /// variable-width fields whose transmitted length must survive a
    /// re-encode.
    pub fn get_text_raw(&self, field: Field) -> Result<String, Error> {
        debug_assert!(field.width % 6 == 0);
        let mut s = String::with_capacity(field.width / 6);
        for i in 0..field.width / 6 {
            let code = self.get(Field::new(field.offset + i * 6, 6))? as u8;
            s.push(sixbit_to_char(code));
        }
        Ok(s)
    }

    /// Write a 6-bit coded text field, padding with `@`. Text longer than
    /// the field or containing characters outside the 6-bit alphabet is a
    /// value-range error.
    pub fn set_text(&mut self, field: Field, text: &str) -> Result<(), Error> {
        debug_assert!(field.width % 6 == 0);
        let capacity = field.width / 6;
        if text.len() > capacity {
            return Err(Error::ValueRange(format!(
                "text '{}' exceeds field capacity of {} characters",
                text, capacity
            )));
        }
        for (i, c) in text.chars().enumerate() {
            let code = char_to_sixbit(c)?;
            self.set(Field::new(field.offset + i * 6, 6), code as u64);
        }
        for i in text.len()..capacity {
            self.set(Field::new(field.offset + i * 6, 6), 0); // '@' padding
        }
        Ok(())
    }

    /// Copy a sub-range of another sequence onto the end of this one.
    pub fn append_bits(&mut self, other: &BitVec, offset: usize, width: usize) -> Result<(), Error> {
        if offset + width > other.len {
            return Err(Error::InsufficientBits {
                offset,
                width,
                available: other.len,
            });
        }
        for i in 0..width {
            let bit = other.bit_at(offset + i);
            if self.len % 8 == 0 {
                self.data.push(0);
            }
            let index = self.len;
            self.len += 1;
            self.set_bit(index, bit);
        }
        Ok(())
    }

    /// Extract a sub-range as a new sequence.
    pub fn slice(&self, offset: usize, width: usize) -> Result<BitVec, Error> {
        let mut out = BitVec::new();
        out.append_bits(self, offset, width)?;
        Ok(out)
    }

    /// Drop `n` bits from the end. Used to strip armor fill bits.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
            self.data.truncate(new_len.div_ceil(8));
            // clear bits beyond the new length in the last byte
            if new_len % 8 != 0 {
                if let Some(last) = self.data.last_mut() {
                    *last &= !(0xFFu8 >> (new_len % 8));
                }
            }
        }
    }
}

/// 6-bit AIS text alphabet: codes 0..=31 map to `@A..Z[\]^_`, codes
/// 32..=63 map to ASCII space through `?`.
fn sixbit_to_char(code: u8) -> char {
    let code = code & 0x3F;
    if code < 32 {
        (code + 64) as char
    } else {
        code as char
    }
}

fn char_to_sixbit(c: char) -> Result<u8, Error> {
    match c {
        '@'..='_' => Ok(c as u8 - 64),
        ' '..='?' => Ok(c as u8),
        _ => Err(Error::ValueRange(format!(
            "character '{}' not representable in 6-bit text",
            c
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_get() {
        let mut bits = BitVec::new();
        bits.append(0b101, 3);
        bits.append(0xFF, 8);
        bits.append(0, 5);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.get(Field::new(0, 3)).unwrap(), 0b101);
        assert_eq!(bits.get(Field::new(3, 8)).unwrap(), 0xFF);
        assert_eq!(bits.get(Field::new(11, 5)).unwrap(), 0);
        // non-aligned read across byte boundary
        assert_eq!(bits.get(Field::new(2, 10)).unwrap(), 0b1111111110);
    }

    #[test]
    fn test_set_in_place() {
        let mut bits = BitVec::zeroed(24);
        bits.set(Field::new(5, 9), 0x1FF);
        assert_eq!(bits.get(Field::new(5, 9)).unwrap(), 0x1FF);
        assert_eq!(bits.get(Field::new(0, 5)).unwrap(), 0);
        assert_eq!(bits.get(Field::new(14, 10)).unwrap(), 0);
        bits.set(Field::new(5, 9), 0);
        assert_eq!(bits.get(Field::new(0, 24)).unwrap(), 0);
    }

    #[test]
    fn test_wide_value_truncates() {
        let mut bits = BitVec::zeroed(8);
        bits.set(Field::new(0, 4), 0xAB);
        assert_eq!(bits.get(Field::new(0, 4)).unwrap(), 0xB);
    }

    #[test]
    fn test_signed_sign_extension() {
        let mut bits = BitVec::zeroed(16);
        bits.set_signed(Field::new(0, 8), -128);
        assert_eq!(bits.get_signed(Field::new(0, 8)).unwrap(), -128);
        bits.set_signed(Field::new(8, 8), -1);
        assert_eq!(bits.get_signed(Field::new(8, 8)).unwrap(), -1);
        bits.set_signed(Field::new(8, 8), 127);
        assert_eq!(bits.get_signed(Field::new(8, 8)).unwrap(), 127);
    }

    #[test]
    fn test_read_past_end_is_error() {
        let bits = BitVec::zeroed(10);
        let err = bits.get(Field::new(8, 4)).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientBits {
                offset: 8,
                width: 4,
                available: 10
            }
        );
    }

    #[test]
    fn test_text_roundtrip() {
        let mut bits = BitVec::zeroed(120);
        bits.set_text(Field::new(0, 120), "MT.MITCHELL").unwrap();
        assert_eq!(bits.get_text(Field::new(0, 120)).unwrap(), "MT.MITCHELL");
    }

    #[test]
    fn test_text_raw_keeps_padding() {
        let mut bits = BitVec::zeroed(120);
        bits.set_text(Field::new(0, 120), "MT.MITCHELL").unwrap();
        assert_eq!(
            bits.get_text_raw(Field::new(0, 120)).unwrap(),
            "MT.MITCHELL@@@@@@@@@"
        );
    }

    #[test]
    fn test_text_too_long_is_error() {
        let mut bits = BitVec::zeroed(12);
        assert!(matches!(
            bits.set_text(Field::new(0, 12), "ABC"),
            Err(Error::ValueRange(_))
        ));
    }

    #[test]
    fn test_text_invalid_character() {
        let mut bits = BitVec::zeroed(12);
        assert!(matches!(
            bits.set_text(Field::new(0, 12), "ab"),
            Err(Error::ValueRange(_))
        ));
    }

    #[test]
    fn test_truncate_clears_tail() {
        let mut bits = BitVec::new();
        bits.append(0x3F, 6);
        bits.truncate(4);
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(Field::new(0, 4)).unwrap(), 0xF);
        let mut other = BitVec::new();
        other.append(0xF, 4);
        assert_eq!(bits, other);
    }

    #[test]
    fn test_slice_and_append_bits() {
        let mut bits = BitVec::new();
        bits.append(0b1011001110, 10);
        let slice = bits.slice(3, 5).unwrap();
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.get(Field::new(0, 5)).unwrap(), 0b10011);
        assert!(bits.slice(8, 4).is_err());
    }
}
