use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values::{self, NavigationStatus};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const POSITION_ACCURACY: Field = Field::new(38, 1);
const RAIM: Field = Field::new(39, 1);
const NAV_STATUS: Field = Field::new(40, 4);
const LONGITUDE: Field = Field::new(44, 18);
const LATITUDE: Field = Field::new(62, 17);
const SOG: Field = Field::new(79, 6);
const COG: Field = Field::new(85, 9);
const GNSS: Field = Field::new(94, 1);
const SPARE: Field = Field::new(95, 1);

const SOG_NOT_AVAILABLE: u8 = 63;
const COG_NOT_AVAILABLE: u16 = 511;

/// Long range position report, AIS type 27, received via satellite.
/// Position, speed and course are carried at reduced precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRangePosition {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub position_accuracy: bool,
    pub raim: bool,
    pub nav_status: NavigationStatus,
    lon_raw: i32,
    lat_raw: i32,
    sog_raw: u8,
    cog_raw: u16,
    /// False when the position is the current GNSS fix, true when it is
    /// older than the report.
    pub gnss_delayed: bool,
}

impl Default for LongRangePosition {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            position_accuracy: false,
            raim: false,
            nav_status: NavigationStatus::NotDefined,
            lon_raw: values::LON_NOT_AVAILABLE_SHORT,
            lat_raw: values::LAT_NOT_AVAILABLE_SHORT,
            sog_raw: SOG_NOT_AVAILABLE,
            cog_raw: COG_NOT_AVAILABLE,
            gnss_delayed: false,
        }
    }
}

impl LongRangePosition {
    pub const ID: u8 = 27;
    pub const SIZE_BITS: usize = 96;

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
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            raim: bits.get(RAIM)? == 1,
            nav_status: NavigationStatus::from_code(bits.get(NAV_STATUS)? as u8),
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            sog_raw: bits.get(SOG)? as u8,
            cog_raw: bits.get(COG)? as u16,
            gnss_delayed: bits.get(GNSS)? == 1,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(NAV_STATUS, self.nav_status.code() as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(SOG, self.sog_raw as u64);
        bits.set(COG, self.cog_raw as u64);
        bits.set(GNSS, self.gnss_delayed as u64);
        bits.set(SPARE, 0);
        bits
    }

    /// Longitude in degrees, positive east, 1/10 minute resolution.
    pub fn lon(&self) -> Option<f64> {
        values::lon_from_raw_short(self.lon_raw)
    }

    pub fn set_lon(&mut self, degrees: f64) -> Result<(), Error> {
        self.lon_raw = values::lon_to_raw_short(degrees)?;
        Ok(())
    }

    /// Latitude in degrees, positive north, 1/10 minute resolution.
    pub fn lat(&self) -> Option<f64> {
        values::lat_from_raw_short(self.lat_raw)
    }

    pub fn set_lat(&mut self, degrees: f64) -> Result<(), Error> {
        self.lat_raw = values::lat_to_raw_short(degrees)?;
        Ok(())
    }

    /// Speed over ground in whole knots, up to 62.
    pub fn sog(&self) -> Option<u8> {
        if self.sog_raw == SOG_NOT_AVAILABLE {
            None
        } else {
            Some(self.sog_raw)
        }
    }

    pub fn set_sog(&mut self, knots: u8) -> Result<(), Error> {
        if knots >= SOG_NOT_AVAILABLE {
            return Err(Error::ValueRange(format!(
                "speed of {} knots exceeds the 62 knot maximum",
                knots
            )));
        }
        self.sog_raw = knots;
        Ok(())
    }

    /// Course over ground in whole degrees.
    pub fn cog(&self) -> Option<u16> {
        if self.cog_raw == COG_NOT_AVAILABLE {
            None
        } else {
            Some(self.cog_raw)
        }
    }

    pub fn set_cog(&mut self, degrees: u16) -> Result<(), Error> {
        if degrees >= 360 {
            return Err(Error::ValueRange(format!(
                "course of {} degrees is out of range",
                degrees
            )));
        }
        self.cog_raw = degrees;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse() {
        let bits = armor::decode("KC5E2b@U19PFdLbMuc5=ROv62<7m", 0).unwrap();
        // 168 bits on the wire, the receiver keeps the first 96
        let bits = bits.slice(0, 96).unwrap();
        let m = LongRangePosition::from_bits(&bits).unwrap();
        assert_eq!(m.repeat_indicator, 1);
        assert_eq!(m.mmsi, 206914217);
        assert!(!m.position_accuracy);
        assert!(!m.raim);
        assert_eq!(m.nav_status, NavigationStatus::NotUnderCommand);
        assert_abs_diff_eq!(m.lon().unwrap(), 137.023333, epsilon = 1e-3);
        assert_abs_diff_eq!(m.lat().unwrap(), 4.84, epsilon = 1e-3);
        assert_eq!(m.sog(), Some(57));
        assert_eq!(m.cog(), Some(167));
        assert!(!m.gnss_delayed);
    }

    #[test]
    fn test_roundtrip_from_setters() {
        let mut m = LongRangePosition::default();
        m.mmsi = 236091959;
        m.nav_status = NavigationStatus::UnderWayUsingEngine;
        m.set_lon(-7.3).unwrap();
        m.set_lat(62.1).unwrap();
        m.set_sog(12).unwrap();
        m.set_cog(291).unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 96);
        assert_eq!(LongRangePosition::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_defaults_not_available() {
        let m = LongRangePosition::default();
        assert!(m.lon().is_none());
        assert!(m.lat().is_none());
        assert!(m.sog().is_none());
        assert!(m.cog().is_none());
    }

    #[test]
    fn test_value_ranges() {
        let mut m = LongRangePosition::default();
        assert!(m.set_sog(63).is_err());
        assert!(m.set_cog(360).is_err());
    }

    #[test]
    fn test_wrong_number_of_bits() {
        assert!(matches!(
            LongRangePosition::from_bits(&BitVec::zeroed(95)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
