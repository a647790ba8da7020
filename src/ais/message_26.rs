use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const ADDRESSED: Field = Field::new(38, 1);
const STRUCTURED: Field = Field::new(39, 1);

const HEADER_BITS: usize = 40;
const DEST_MMSI_BITS: usize = 30;
const APP_ID_BITS: usize = 16;
const RADIO_BITS: usize = 20;
const SIZE_BITS_MAX: usize = 1064;

/// Multiple slot binary message, AIS type 26. Same optional header as
/// type 25, with a 20 bit radio status trailing the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiSlotBinary {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub dest_mmsi: Option<u32>,
    /// DAC and FID packed as transmitted, when the payload is structured.
    pub app_id: Option<u16>,
    #[serde(skip)]
    data: BitVec,
    pub radio_status: u32,
}

impl MultiSlotBinary {
    pub const ID: u8 = 26;
    pub const SIZE_BITS_MIN: usize = HEADER_BITS + RADIO_BITS;
    pub const SIZE_BITS_MAX: usize = SIZE_BITS_MAX;

    fn data_offset(&self) -> usize {
        let mut offset = HEADER_BITS;
        if self.dest_mmsi.is_some() {
            offset += DEST_MMSI_BITS;
        }
        if self.app_id.is_some() {
            offset += APP_ID_BITS;
        }
        offset
    }

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if len < Self::SIZE_BITS_MIN || len > Self::SIZE_BITS_MAX {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let addressed = bits.get(ADDRESSED)? == 1;
        let structured = bits.get(STRUCTURED)? == 1;
        let mut header = HEADER_BITS;
        if addressed {
            header += DEST_MMSI_BITS;
        }
        if structured {
            header += APP_ID_BITS;
        }
        if len < header + RADIO_BITS {
            return Err(Error::Format(format!(
                "multi slot binary of {} bits is too short for its header",
                len
            )));
        }
        let mut offset = HEADER_BITS;
        let dest_mmsi = if addressed {
            let mmsi = bits.get(Field::new(offset, DEST_MMSI_BITS))? as u32;
            offset += DEST_MMSI_BITS;
            Some(mmsi)
        } else {
            None
        };
        let app_id = if structured {
            let id = bits.get(Field::new(offset, APP_ID_BITS))? as u16;
            offset += APP_ID_BITS;
            Some(id)
        } else {
            None
        };
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            dest_mmsi,
            app_id,
            data: bits.slice(offset, len - offset - RADIO_BITS)?,
            radio_status: bits.get(Field::new(len - RADIO_BITS, RADIO_BITS))? as u32,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(HEADER_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(ADDRESSED, self.dest_mmsi.is_some() as u64);
        bits.set(STRUCTURED, self.app_id.is_some() as u64);
        if let Some(mmsi) = self.dest_mmsi {
            bits.append(mmsi as u64, DEST_MMSI_BITS);
        }
        if let Some(id) = self.app_id {
            bits.append(id as u64, APP_ID_BITS);
        }
        let _ = bits.append_bits(&self.data, 0, self.data.len());
        bits.append(self.radio_status as u64, RADIO_BITS);
        bits
    }

    pub fn data(&self) -> &BitVec {
        &self.data
    }

    pub fn set_data(&mut self, data: BitVec) -> Result<(), Error> {
        let capacity = Self::SIZE_BITS_MAX - RADIO_BITS - self.data_offset();
        if data.len() > capacity {
            return Err(Error::ValueRange(format!(
                "payload of {} bits exceeds {} bit capacity",
                data.len(),
                capacity
            )));
        }
        self.data = data;
        Ok(())
    }
}
