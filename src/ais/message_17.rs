use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const LONGITUDE: Field = Field::new(40, 18);
const LATITUDE: Field = Field::new(58, 17);

const DATA_OFFSET: usize = 80;
const DATA_MAX_BITS: usize = 736;

/// DGNSS broadcast binary message, AIS type 17. Carries differential
/// corrections plus the reference station position in 1/10 minute units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DgnssBroadcast {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    lon_raw: i32,
    lat_raw: i32,
    #[serde(skip)]
    data: BitVec,
}

impl Default for DgnssBroadcast {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            lon_raw: values::LON_NOT_AVAILABLE_SHORT,
            lat_raw: values::LAT_NOT_AVAILABLE_SHORT,
            data: BitVec::new(),
        }
    }
}

impl DgnssBroadcast {
    pub const ID: u8 = 17;
    pub const SIZE_BITS_MIN: usize = 80;
    pub const SIZE_BITS_MAX: usize = 816;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if len < Self::SIZE_BITS_MIN || len > Self::SIZE_BITS_MAX {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            data: bits.slice(DATA_OFFSET, len - DATA_OFFSET)?,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(DATA_OFFSET);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        let _ = bits.append_bits(&self.data, 0, self.data.len());
        bits
    }

    /// Reference station longitude in degrees, positive east.
    pub fn lon(&self) -> Option<f64> {
        values::lon_from_raw_short(self.lon_raw)
    }

    pub fn set_lon(&mut self, degrees: f64) -> Result<(), Error> {
        self.lon_raw = values::lon_to_raw_short(degrees)?;
        Ok(())
    }

    /// Reference station latitude in degrees, positive north.
    pub fn lat(&self) -> Option<f64> {
        values::lat_from_raw_short(self.lat_raw)
    }

    pub fn set_lat(&mut self, degrees: f64) -> Result<(), Error> {
        self.lat_raw = values::lat_to_raw_short(degrees)?;
        Ok(())
    }

    pub fn data(&self) -> &BitVec {
        &self.data
    }

    pub fn set_data(&mut self, data: BitVec) -> Result<(), Error> {
        if data.len() > DATA_MAX_BITS {
            return Err(Error::ValueRange(format!(
                "correction data of {} bits exceeds {} bit capacity",
                data.len(),
                DATA_MAX_BITS
            )));
        }
        self.data = data;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        let mut m = DgnssBroadcast::default();
        m.mmsi = 2734450;
        m.set_lon(17.4).unwrap();
        m.set_lat(58.9).unwrap();
        let mut data = BitVec::new();
        data.append(0x7b0a, 16);
        data.append(0x2dd3, 16);
        m.set_data(data).unwrap();

        let bits = m.to_bits();
        assert_eq!(bits.len(), 112);
        let back = DgnssBroadcast::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        assert_abs_diff_eq!(back.lon().unwrap(), 17.4, epsilon = 1e-3);
        assert_abs_diff_eq!(back.lat().unwrap(), 58.9, epsilon = 1e-3);
    }

    #[test]
    fn test_position_not_available_by_default() {
        let m = DgnssBroadcast::default();
        assert!(m.lon().is_none());
        assert!(m.lat().is_none());
    }

    #[test]
    fn test_data_too_long() {
        let mut m = DgnssBroadcast::default();
        assert!(m.set_data(BitVec::zeroed(DATA_MAX_BITS + 1)).is_err());
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(
            DgnssBroadcast::from_bits(&BitVec::zeroed(79)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
