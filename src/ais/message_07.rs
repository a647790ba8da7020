use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);

const ENTRY_BITS: usize = 32;
const FIRST_ENTRY: usize = 40;

/// One acknowledged message: destination MMSI and the sequence number it
/// carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub mmsi: u32,
    pub sequence_number: u8,
}

/// Binary acknowledge (type 7) and safety acknowledge (type 13).
///
/// Both types share one layout: a header followed by one to four
/// acknowledgement slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryAck {
    msg_type: u8,
    pub repeat_indicator: u8,
    pub mmsi: u32,
    acks: Vec<Acknowledgement>,
}

impl Default for BinaryAck {
    fn default() -> Self {
        Self {
            msg_type: 7,
            repeat_indicator: 0,
            mmsi: 0,
            acks: vec![Acknowledgement {
                mmsi: 0,
                sequence_number: 0,
            }],
        }
    }
}

impl BinaryAck {
    pub const SIZE_BITS_MIN: usize = 72;
    pub const SIZE_BITS_MAX: usize = 168;

    /// Create a default-valued acknowledge with the given type ID (7 or 13).
    pub fn new(msg_type: u8) -> Result<Self, Error> {
        if msg_type != 7 && msg_type != 13 {
            return Err(Error::ValueRange(format!(
                "{} is not an acknowledge type",
                msg_type
            )));
        }
        Ok(Self {
            msg_type,
            ..Self::default()
        })
    }

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let msg_type = bits.get(MESSAGE_TYPE)? as u8;
        if msg_type != 7 && msg_type != 13 {
            return Err(Error::ValueRange(format!(
                "{} is not an acknowledge type",
                msg_type
            )));
        }
        let len = bits.len();
        if len < Self::SIZE_BITS_MIN
            || len > Self::SIZE_BITS_MAX
            || (len - FIRST_ENTRY) % ENTRY_BITS != 0
        {
            return Err(Error::SizeMismatch {
                msg_type,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let mut acks = Vec::new();
        for i in 0..(len - FIRST_ENTRY) / ENTRY_BITS {
            let offset = FIRST_ENTRY + i * ENTRY_BITS;
            acks.push(Acknowledgement {
                mmsi: bits.get(Field::new(offset, 30))? as u32,
                sequence_number: bits.get(Field::new(offset + 30, 2))? as u8,
            });
        }
        Ok(Self {
            msg_type,
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            acks,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(FIRST_ENTRY + self.acks.len() * ENTRY_BITS);
        bits.set(MESSAGE_TYPE, self.msg_type as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        for (i, ack) in self.acks.iter().enumerate() {
            let offset = FIRST_ENTRY + i * ENTRY_BITS;
            bits.set(Field::new(offset, 30), ack.mmsi as u64);
            bits.set(Field::new(offset + 30, 2), ack.sequence_number as u64);
        }
        bits
    }

    pub fn message_type(&self) -> u8 {
        self.msg_type
    }

    pub fn acknowledgements(&self) -> &[Acknowledgement] {
        &self.acks
    }

    pub fn set_acknowledgements(&mut self, acks: Vec<Acknowledgement>) -> Result<(), Error> {
        if acks.is_empty() || acks.len() > 4 {
            return Err(Error::ValueRange(format!(
                "{} acknowledgements, expected 1..=4",
                acks.len()
            )));
        }
        self.acks = acks;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_multiple_entries() {
        let mut m = BinaryAck::new(7).unwrap();
        m.mmsi = 2655651;
        m.set_acknowledgements(vec![
            Acknowledgement {
                mmsi: 265538450,
                sequence_number: 2,
            },
            Acknowledgement {
                mmsi: 230123456,
                sequence_number: 0,
            },
        ])
        .unwrap();

        let bits = m.to_bits();
        assert_eq!(bits.len(), 104);
        assert_eq!(BinaryAck::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_safety_ack_keeps_type_13() {
        let m = BinaryAck::new(13).unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 72);
        assert_eq!(BinaryAck::from_bits(&bits).unwrap().message_type(), 13);
    }

    fn zeroed_ack_frame(len: usize) -> BitVec {
        let mut bits = BitVec::zeroed(len);
        bits.set(Field::new(0, 6), 7);
        bits
    }

    #[test]
    fn test_size_must_land_on_entry_boundary() {
        assert!(matches!(
            BinaryAck::from_bits(&zeroed_ack_frame(80)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(matches!(
            BinaryAck::from_bits(&zeroed_ack_frame(71)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(matches!(
            BinaryAck::from_bits(&zeroed_ack_frame(169)),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_foreign_type_id_is_rejected() {
        let mut bits = BinaryAck::new(7).unwrap().to_bits();
        bits.set(Field::new(0, 6), 9);
        assert!(matches!(
            BinaryAck::from_bits(&bits),
            Err(Error::ValueRange(_))
        ));
    }

    #[test]
    fn test_entry_count_bounds() {
        let mut m = BinaryAck::default();
        assert!(m.set_acknowledgements(vec![]).is_err());
        let five = vec![
            Acknowledgement {
                mmsi: 0,
                sequence_number: 0
            };
            5
        ];
        assert!(m.set_acknowledgements(five).is_err());
    }
}
