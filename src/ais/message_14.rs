use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::message_05::check_text;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);

const HEADER_BITS: usize = 40;
const MAX_TEXT_CHARS: usize = 161;

/// Safety related broadcast message, AIS type 14.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SafetyBroadcast {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    text: String,
}

impl SafetyBroadcast {
    pub const ID: u8 = 14;
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
                "safety broadcast text of {} bits is not a whole number of characters",
                len - HEADER_BITS
            )));
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            text: bits.get_text_raw(Field::new(HEADER_BITS, len - HEADER_BITS))?,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(HEADER_BITS + self.text.len() * 6);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        let _ = bits.set_text(
            Field::new(HEADER_BITS, self.text.len() * 6),
            &self.text,
        );
        bits
    }

    /// The broadcast text, with the transmitted `@` padding trimmed.
    pub fn text(&self) -> &str {
        self.text.trim_end_matches('@')
    }

    /// Set the broadcast text, at most 161 six-bit characters.
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        check_text(text, MAX_TEXT_CHARS)?;
        self.text = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;

    #[test]
    fn test_parse_sart_test_broadcast() {
        let bits = armor::decode(">5?Per18=HB1U:1@E=B0m<L", 2).unwrap();
        let m = SafetyBroadcast::from_bits(&bits).unwrap();
        assert_eq!(m.mmsi, 351809000);
        assert_eq!(m.text(), "RCVD YR TEST MSG");
        assert_eq!(m.to_bits(), bits);
    }

    #[test]
    fn test_roundtrip() {
        let mut m = SafetyBroadcast::default();
        m.mmsi = 2633030;
        m.set_text("SART TEST").unwrap();
        assert_eq!(SafetyBroadcast::from_bits(&m.to_bits()).unwrap(), m);
    }

    #[test]
    fn test_transmitted_padding_survives_reencode() {
        let mut bits = BitVec::zeroed(40 + 10 * 6);
        bits.set(Field::new(0, 6), 14);
        bits.set(Field::new(8, 30), 2633030);
        bits.set_text(Field::new(40, 60), "SART TEST").unwrap();

        let m = SafetyBroadcast::from_bits(&bits).unwrap();
        assert_eq!(m.text(), "SART TEST");
        assert_eq!(m.to_bits(), bits);
    }

    #[test]
    fn test_size_bounds() {
        assert!(matches!(
            SafetyBroadcast::from_bits(&BitVec::zeroed(39)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(SafetyBroadcast::from_bits(&BitVec::zeroed(40)).is_ok());
    }
}
