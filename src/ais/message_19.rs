use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::message_05::check_text;
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const RESERVED: Field = Field::new(38, 8);
const SOG: Field = Field::new(46, 10);
const POSITION_ACCURACY: Field = Field::new(56, 1);
const LONGITUDE: Field = Field::new(57, 28);
const LATITUDE: Field = Field::new(85, 27);
const COG: Field = Field::new(112, 12);
const HEADING: Field = Field::new(124, 9);
const TIMESTAMP: Field = Field::new(133, 6);
const REGIONAL: Field = Field::new(139, 4);
const SHIPNAME: Field = Field::new(143, 120);
const SHIP_TYPE: Field = Field::new(263, 8);
const TO_BOW: Field = Field::new(271, 9);
const TO_STERN: Field = Field::new(280, 9);
const TO_PORT: Field = Field::new(289, 6);
const TO_STARBOARD: Field = Field::new(295, 6);
const EPFD_TYPE: Field = Field::new(301, 4);
const RAIM: Field = Field::new(305, 1);
const DTE: Field = Field::new(306, 1);
const ASSIGNED: Field = Field::new(307, 1);
const SPARE: Field = Field::new(308, 4);

/// Extended class B equipment position report, AIS type 19. Carries the
/// class B position fields plus a subset of the static data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedClassBReport {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub reserved: u8,
    sog_raw: u16,
    pub position_accuracy: bool,
    lon_raw: i32,
    lat_raw: i32,
    cog_raw: u16,
    hdg_raw: u16,
    /// UTC second of the position fix, 60 if not available.
    pub timestamp: u8,
    pub regional: u8,
    shipname: String,
    /// Ship and cargo type code.
    pub ship_type: u8,
    /// Distances from the reference point in meters.
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
    pub epfd_type: u8,
    pub raim: bool,
    pub dte: bool,
    pub assigned: bool,
    pub spare: u8,
}

impl Default for ExtendedClassBReport {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            reserved: 0,
            sog_raw: values::SOG_NOT_AVAILABLE,
            position_accuracy: false,
            lon_raw: values::LON_NOT_AVAILABLE,
            lat_raw: values::LAT_NOT_AVAILABLE,
            cog_raw: values::COG_NOT_AVAILABLE,
            hdg_raw: values::HEADING_NOT_AVAILABLE,
            timestamp: values::TIMESTAMP_NOT_AVAILABLE,
            regional: 0,
            shipname: String::new(),
            ship_type: 0,
            to_bow: 0,
            to_stern: 0,
            to_port: 0,
            to_starboard: 0,
            epfd_type: 0,
            raim: false,
            dte: true,
            assigned: false,
            spare: 0,
        }
    }
}

impl ExtendedClassBReport {
    pub const ID: u8 = 19;
    pub const SIZE_BITS: usize = 312;

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
            reserved: bits.get(RESERVED)? as u8,
            sog_raw: bits.get(SOG)? as u16,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            cog_raw: bits.get(COG)? as u16,
            hdg_raw: bits.get(HEADING)? as u16,
            timestamp: bits.get(TIMESTAMP)? as u8,
            regional: bits.get(REGIONAL)? as u8,
            shipname: bits.get_text(SHIPNAME)?,
            ship_type: bits.get(SHIP_TYPE)? as u8,
            to_bow: bits.get(TO_BOW)? as u16,
            to_stern: bits.get(TO_STERN)? as u16,
            to_port: bits.get(TO_PORT)? as u8,
            to_starboard: bits.get(TO_STARBOARD)? as u8,
            epfd_type: bits.get(EPFD_TYPE)? as u8,
            raim: bits.get(RAIM)? == 1,
            dte: bits.get(DTE)? == 1,
            assigned: bits.get(ASSIGNED)? == 1,
            spare: bits.get(SPARE)? as u8,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(RESERVED, self.reserved as u64);
        bits.set(SOG, self.sog_raw as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(COG, self.cog_raw as u64);
        bits.set(HEADING, self.hdg_raw as u64);
        bits.set(TIMESTAMP, self.timestamp as u64);
        bits.set(REGIONAL, self.regional as u64);
        // validated by the setter or the decoder
        let _ = bits.set_text(SHIPNAME, &self.shipname);
        bits.set(SHIP_TYPE, self.ship_type as u64);
        bits.set(TO_BOW, self.to_bow as u64);
        bits.set(TO_STERN, self.to_stern as u64);
        bits.set(TO_PORT, self.to_port as u64);
        bits.set(TO_STARBOARD, self.to_starboard as u64);
        bits.set(EPFD_TYPE, self.epfd_type as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(DTE, self.dte as u64);
        bits.set(ASSIGNED, self.assigned as u64);
        bits.set(SPARE, self.spare as u64);
        bits
    }

    pub fn shipname(&self) -> &str {
        &self.shipname
    }

    /// Set the ship name, at most 20 six-bit characters.
    pub fn set_shipname(&mut self, name: &str) -> Result<(), Error> {
        check_text(name, SHIPNAME.width / 6)?;
        self.shipname = name.to_string();
        Ok(())
    }

    /// Speed over ground in knots.
    pub fn sog(&self) -> Option<f64> {
        values::sog_from_raw(self.sog_raw)
    }

    pub fn set_sog(&mut self, knots: f64) -> Result<(), Error> {
        self.sog_raw = values::sog_to_raw(knots)?;
        Ok(())
    }

    /// Longitude in degrees, positive east.
    pub fn lon(&self) -> Option<f64> {
        values::lon_from_raw(self.lon_raw)
    }

    pub fn set_lon(&mut self, degrees: f64) -> Result<(), Error> {
        self.lon_raw = values::lon_to_raw(degrees)?;
        Ok(())
    }

    /// Latitude in degrees, positive north.
    pub fn lat(&self) -> Option<f64> {
        values::lat_from_raw(self.lat_raw)
    }

    pub fn set_lat(&mut self, degrees: f64) -> Result<(), Error> {
        self.lat_raw = values::lat_to_raw(degrees)?;
        Ok(())
    }

    /// Course over ground in degrees.
    pub fn cog(&self) -> Option<f64> {
        values::cog_from_raw(self.cog_raw)
    }

    pub fn set_cog(&mut self, degrees: f64) -> Result<(), Error> {
        self.cog_raw = values::cog_to_raw(degrees)?;
        Ok(())
    }

    /// True heading in degrees.
    pub fn heading(&self) -> Option<u16> {
        values::heading_from_raw(self.hdg_raw)
    }

    pub fn set_heading(&mut self, degrees: u16) -> Result<(), Error> {
        self.hdg_raw = values::heading_to_raw(degrees)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip_from_setters() {
        let mut m = ExtendedClassBReport::default();
        m.mmsi = 413801925;
        m.set_sog(0.1).unwrap();
        m.set_lon(120.204773).unwrap();
        m.set_lat(31.941388).unwrap();
        m.set_cog(67.4).unwrap();
        m.timestamp = 30;
        m.set_shipname("SUYANG 19008").unwrap();
        m.ship_type = 70;
        m.to_bow = 28;
        m.to_stern = 20;
        m.to_port = 4;
        m.to_starboard = 4;

        let bits = m.to_bits();
        assert_eq!(bits.len(), 312);
        let back = ExtendedClassBReport::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.shipname(), "SUYANG 19008");
        assert_abs_diff_eq!(back.lon().unwrap(), 120.204773, epsilon = 1e-5);
        assert_abs_diff_eq!(back.lat().unwrap(), 31.941388, epsilon = 1e-5);
    }

    #[test]
    fn test_defaults_report_nothing_available() {
        let m = ExtendedClassBReport::default();
        assert!(m.sog().is_none());
        assert!(m.lon().is_none());
        assert!(m.lat().is_none());
        assert!(m.cog().is_none());
        assert!(m.heading().is_none());
        assert_eq!(m.timestamp, 60);
    }

    #[test]
    fn test_wrong_number_of_bits() {
        assert!(matches!(
            ExtendedClassBReport::from_bits(&BitVec::zeroed(168)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
