use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const MMSI_1: Field = Field::new(40, 30);
const OFFSET_1: Field = Field::new(70, 12);
const INCREMENT_1: Field = Field::new(82, 10);
const MMSI_2: Field = Field::new(92, 30);
const OFFSET_2: Field = Field::new(122, 12);
const INCREMENT_2: Field = Field::new(134, 10);

/// Slot assignment for one station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub mmsi: u32,
    pub slot_offset: u16,
    pub increment: u16,
}

/// Assignment mode command, AIS type 16: 96 bits for one station, 144 bits
/// for two.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentCommand {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub assignment_1: Assignment,
    pub assignment_2: Option<Assignment>,
}

impl AssignmentCommand {
    pub const ID: u8 = 16;
    pub const SIZE_BITS_MIN: usize = 96;
    pub const SIZE_BITS_MAX: usize = 144;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if len != 96 && len != 144 {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let assignment_2 = if len == 144 {
            Some(Assignment {
                mmsi: bits.get(MMSI_2)? as u32,
                slot_offset: bits.get(OFFSET_2)? as u16,
                increment: bits.get(INCREMENT_2)? as u16,
            })
        } else {
            None
        };
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            assignment_1: Assignment {
                mmsi: bits.get(MMSI_1)? as u32,
                slot_offset: bits.get(OFFSET_1)? as u16,
                increment: bits.get(INCREMENT_1)? as u16,
            },
            assignment_2,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let len = if self.assignment_2.is_some() { 144 } else { 96 };
        let mut bits = BitVec::zeroed(len);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(MMSI_1, self.assignment_1.mmsi as u64);
        bits.set(OFFSET_1, self.assignment_1.slot_offset as u64);
        bits.set(INCREMENT_1, self.assignment_1.increment as u64);
        if let Some(a) = self.assignment_2 {
            bits.set(MMSI_2, a.mmsi as u64);
            bits.set(OFFSET_2, a.slot_offset as u64);
            bits.set(INCREMENT_2, a.increment as u64);
        }
        bits
    }
}
