use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const DEST_MMSI: Field = Field::new(40, 30);

/// UTC and date inquiry, AIS type 10. Answered by a type 11 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UtcInquiry {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub dest_mmsi: u32,
}

impl UtcInquiry {
    pub const ID: u8 = 10;
    pub const SIZE_BITS: usize = 72;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        if bits.len() != Self::SIZE_BITS {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Exact(Self::SIZE_BITS),
                actual: bits.len(),
            });
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            dest_mmsi: bits.get(DEST_MMSI)? as u32,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(DEST_MMSI, self.dest_mmsi as u64);
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let m = UtcInquiry {
            repeat_indicator: 0,
            mmsi: 440882000,
            dest_mmsi: 366972000,
        };
        let bits = m.to_bits();
        assert_eq!(bits.len(), 72);
        assert_eq!(bits.get(Field::new(0, 6)).unwrap(), 10);
        assert_eq!(UtcInquiry::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_size_is_strict() {
        assert!(matches!(
            UtcInquiry::from_bits(&BitVec::zeroed(73)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
