use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const SEQUENCE_NUMBER: Field = Field::new(38, 2);
const DEST_MMSI: Field = Field::new(40, 30);
const RETRANSMIT: Field = Field::new(70, 1);
const DAC: Field = Field::new(72, 10);
const FID: Field = Field::new(82, 6);

const HEADER_BITS: usize = 88;

/// Addressed binary message, AIS type 6.
///
/// The application payload is kept as a raw bit sequence; its interpretation
/// depends on the DAC/FID pair and is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BinaryAddressed {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub sequence_number: u8,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    /// Designated area code.
    pub dac: u16,
    /// Functional ID within the DAC.
    pub fid: u8,
    #[serde(skip)]
    data: BitVec,
}

impl BinaryAddressed {
    pub const ID: u8 = 6;
    pub const SIZE_BITS_MIN: usize = HEADER_BITS;
    pub const SIZE_BITS_MAX: usize = 1008;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        if bits.len() < Self::SIZE_BITS_MIN || bits.len() > Self::SIZE_BITS_MAX {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: bits.len(),
            });
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            sequence_number: bits.get(SEQUENCE_NUMBER)? as u8,
            dest_mmsi: bits.get(DEST_MMSI)? as u32,
            retransmit: bits.get(RETRANSMIT)? == 1,
            dac: bits.get(DAC)? as u16,
            fid: bits.get(FID)? as u8,
            data: bits.slice(HEADER_BITS, bits.len() - HEADER_BITS)?,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(HEADER_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(SEQUENCE_NUMBER, self.sequence_number as u64);
        bits.set(DEST_MMSI, self.dest_mmsi as u64);
        bits.set(RETRANSMIT, self.retransmit as u64);
        bits.set(DAC, self.dac as u64);
        bits.set(FID, self.fid as u64);
        // data lies within bounds, enforced by set_data/from_bits
        let _ = bits.append_bits(&self.data, 0, self.data.len());
        bits
    }

    /// Application payload following the DAC/FID header.
    pub fn data(&self) -> &BitVec {
        &self.data
    }

    pub fn set_data(&mut self, data: BitVec) -> Result<(), Error> {
        if data.len() > Self::SIZE_BITS_MAX - HEADER_BITS {
            return Err(Error::ValueRange(format!(
                "binary payload of {} bits exceeds maximum of {}",
                data.len(),
                Self::SIZE_BITS_MAX - HEADER_BITS
            )));
        }
        self.data = data;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut m = BinaryAddressed::default();
        m.mmsi = 265547250;
        m.dest_mmsi = 230123456;
        m.sequence_number = 1;
        m.dac = 1;
        m.fid = 12;
        let mut data = BitVec::new();
        data.append(0xDEADBEEF, 32);
        m.set_data(data).unwrap();

        let bits = m.to_bits();
        assert_eq!(bits.len(), 120);
        assert_eq!(BinaryAddressed::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_size_bounds() {
        assert!(matches!(
            BinaryAddressed::from_bits(&BitVec::zeroed(87)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(matches!(
            BinaryAddressed::from_bits(&BitVec::zeroed(1009)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(BinaryAddressed::from_bits(&BitVec::zeroed(88)).is_ok());
    }

    #[test]
    fn test_payload_too_long() {
        let mut m = BinaryAddressed::default();
        assert!(m.set_data(BitVec::zeroed(921)).is_err());
        assert!(m.set_data(BitVec::zeroed(920)).is_ok());
    }
}
