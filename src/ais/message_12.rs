use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::message_05::check_text;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const SEQUENCE_NUMBER: Field = Field::new(38, 2);
const DEST_MMSI: Field = Field::new(40, 30);
const RETRANSMIT: Field = Field::new(70, 1);

const HEADER_BITS: usize = 72;
const MAX_TEXT_CHARS: usize = 156;

/// Addressed safety related message, AIS type 12.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressedSafety {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub sequence_number: u8,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    text: String,
}

impl AddressedSafety {
    pub const ID: u8 = 12;
    pub const SIZE_BITS_MIN: usize = HEADER_BITS;
    pub const SIZE_BITS_MAX: usize = HEADER_BITS + MAX_TEXT_CHARS * 6;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if len < Self::SIZE_BITS_MIN || len > Self::SIZE_BITS_MAX {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        if (len - HEADER_BITS) % 6 != 0 {
            return Err(Error::Format(format!(
                "safety message text of {} bits is not a whole number of characters",
                len - HEADER_BITS
            )));
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            sequence_number: bits.get(SEQUENCE_NUMBER)? as u8,
            dest_mmsi: bits.get(DEST_MMSI)? as u32,
            retransmit: bits.get(RETRANSMIT)? == 1,
            text: bits.get_text_raw(Field::new(HEADER_BITS, len - HEADER_BITS))?,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(HEADER_BITS + self.text.len() * 6);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(SEQUENCE_NUMBER, self.sequence_number as u64);
        bits.set(DEST_MMSI, self.dest_mmsi as u64);
        bits.set(RETRANSMIT, self.retransmit as u64);
        let _ = bits.set_text(
            Field::new(HEADER_BITS, self.text.len() * 6),
            &self.text,
        );
        bits
    }

    /// The safety text, with the transmitted `@` padding trimmed.
    pub fn text(&self) -> &str {
        self.text.trim_end_matches('@')
    }

    /// Set the safety text, at most 156 six-bit characters.
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        check_text(text, MAX_TEXT_CHARS)?;
        self.text = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut m = AddressedSafety::default();
        m.mmsi = 227006760;
        m.dest_mmsi = 271002099;
        m.sequence_number = 0;
        m.set_text("MSG FROM 227006760").unwrap();

        let bits = m.to_bits();
        assert_eq!(bits.len(), 72 + 18 * 6);
        let m1 = AddressedSafety::from_bits(&bits).unwrap();
        assert_eq!(m1, m);
        assert_eq!(m1.text(), "MSG FROM 227006760");
    }

    #[test]
    fn test_empty_text_is_header_only() {
        let m = AddressedSafety::default();
        assert_eq!(m.to_bits().len(), 72);
    }

    #[test]
    fn test_text_length_bound() {
        let mut m = AddressedSafety::default();
        assert!(m.set_text(&"A".repeat(156)).is_ok());
        assert!(m.set_text(&"A".repeat(157)).is_err());
    }

    #[test]
    fn test_transmitted_padding_survives_reencode() {
        let mut bits = BitVec::zeroed(72 + 8 * 6);
        bits.set(Field::new(0, 6), 12);
        bits.set(Field::new(8, 30), 227006760);
        bits.set_text(Field::new(72, 48), "OK").unwrap();

        let m = AddressedSafety::from_bits(&bits).unwrap();
        assert_eq!(m.text(), "OK");
        assert_eq!(m.to_bits(), bits);
    }

    #[test]
    fn test_partial_character_is_format_error() {
        assert!(matches!(
            AddressedSafety::from_bits(&BitVec::zeroed(75)),
            Err(Error::Format(_))
        ));
    }
}
