use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const DAC: Field = Field::new(40, 10);
const FID: Field = Field::new(50, 6);

const HEADER_BITS: usize = 56;

/// Binary broadcast message, AIS type 8.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BinaryBroadcast {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub dac: u16,
    pub fid: u8,
    #[serde(skip)]
    data: BitVec,
}

impl BinaryBroadcast {
    pub const ID: u8 = 8;
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
        bits.set(DAC, self.dac as u64);
        bits.set(FID, self.fid as u64);
        let _ = bits.append_bits(&self.data, 0, self.data.len());
        bits
    }

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
