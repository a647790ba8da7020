use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const NE_LON: Field = Field::new(40, 18);
const NE_LAT: Field = Field::new(58, 17);
const SW_LON: Field = Field::new(75, 18);
const SW_LAT: Field = Field::new(93, 17);
const STATION_TYPE: Field = Field::new(110, 4);
const SHIP_TYPE: Field = Field::new(114, 8);
const TXRX_MODE: Field = Field::new(144, 2);
const INTERVAL: Field = Field::new(146, 4);
const QUIET_TIME: Field = Field::new(150, 4);

/// Group assignment command, AIS type 23. A base station commands all
/// stations of a given type inside a rectangle to a reporting regime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAssignment {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    ne_lon_raw: i32,
    ne_lat_raw: i32,
    sw_lon_raw: i32,
    sw_lat_raw: i32,
    pub station_type: u8,
    pub ship_type: u8,
    pub txrx_mode: u8,
    /// Reporting interval code.
    pub interval: u8,
    /// Quiet time in minutes, 0 for none.
    pub quiet_time: u8,
}

impl Default for GroupAssignment {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            ne_lon_raw: values::LON_NOT_AVAILABLE_SHORT,
            ne_lat_raw: values::LAT_NOT_AVAILABLE_SHORT,
            sw_lon_raw: values::LON_NOT_AVAILABLE_SHORT,
            sw_lat_raw: values::LAT_NOT_AVAILABLE_SHORT,
            station_type: 0,
            ship_type: 0,
            txrx_mode: 0,
            interval: 0,
            quiet_time: 0,
        }
    }
}

impl GroupAssignment {
    pub const ID: u8 = 23;
    pub const SIZE_BITS: usize = 160;

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
            ne_lon_raw: bits.get_signed(NE_LON)? as i32,
            ne_lat_raw: bits.get_signed(NE_LAT)? as i32,
            sw_lon_raw: bits.get_signed(SW_LON)? as i32,
            sw_lat_raw: bits.get_signed(SW_LAT)? as i32,
            station_type: bits.get(STATION_TYPE)? as u8,
            ship_type: bits.get(SHIP_TYPE)? as u8,
            txrx_mode: bits.get(TXRX_MODE)? as u8,
            interval: bits.get(INTERVAL)? as u8,
            quiet_time: bits.get(QUIET_TIME)? as u8,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set_signed(NE_LON, self.ne_lon_raw as i64);
        bits.set_signed(NE_LAT, self.ne_lat_raw as i64);
        bits.set_signed(SW_LON, self.sw_lon_raw as i64);
        bits.set_signed(SW_LAT, self.sw_lat_raw as i64);
        bits.set(STATION_TYPE, self.station_type as u64);
        bits.set(SHIP_TYPE, self.ship_type as u64);
        bits.set(TXRX_MODE, self.txrx_mode as u64);
        bits.set(INTERVAL, self.interval as u64);
        bits.set(QUIET_TIME, self.quiet_time as u64);
        bits
    }

    /// North-east corner of the zone in degrees.
    pub fn ne_corner(&self) -> Option<(f64, f64)> {
        let lon = values::lon_from_raw_short(self.ne_lon_raw)?;
        let lat = values::lat_from_raw_short(self.ne_lat_raw)?;
        Some((lon, lat))
    }

    pub fn set_ne_corner(&mut self, lon: f64, lat: f64) -> Result<(), Error> {
        self.ne_lon_raw = values::lon_to_raw_short(lon)?;
        self.ne_lat_raw = values::lat_to_raw_short(lat)?;
        Ok(())
    }

    /// South-west corner of the zone in degrees.
    pub fn sw_corner(&self) -> Option<(f64, f64)> {
        let lon = values::lon_from_raw_short(self.sw_lon_raw)?;
        let lat = values::lat_from_raw_short(self.sw_lat_raw)?;
        Some((lon, lat))
    }

    pub fn set_sw_corner(&mut self, lon: f64, lat: f64) -> Result<(), Error> {
        self.sw_lon_raw = values::lon_to_raw_short(lon)?;
        self.sw_lat_raw = values::lat_to_raw_short(lat)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        let mut m = GroupAssignment::default();
        m.mmsi = 2268120;
        m.set_ne_corner(3.5, 51.6).unwrap();
        m.set_sw_corner(2.1, 50.9).unwrap();
        m.station_type = 6;
        m.ship_type = 30;
        m.txrx_mode = 1;
        m.interval = 9;
        m.quiet_time = 15;

        let bits = m.to_bits();
        assert_eq!(bits.len(), 160);
        let back = GroupAssignment::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        let (lon, lat) = back.sw_corner().unwrap();
        assert_abs_diff_eq!(lon, 2.1, epsilon = 1e-3);
        assert_abs_diff_eq!(lat, 50.9, epsilon = 1e-3);
    }

    #[test]
    fn test_default_corners_not_available() {
        let m = GroupAssignment::default();
        assert!(m.ne_corner().is_none());
        assert!(m.sw_corner().is_none());
    }

    #[test]
    fn test_wrong_number_of_bits() {
        assert!(matches!(
            GroupAssignment::from_bits(&BitVec::zeroed(168)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
