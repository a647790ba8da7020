use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values::{self, NavigationStatus};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const NAV_STATUS: Field = Field::new(38, 4);
const RATE_OF_TURN: Field = Field::new(42, 8);
const SOG: Field = Field::new(50, 10);
const POSITION_ACCURACY: Field = Field::new(60, 1);
const LONGITUDE: Field = Field::new(61, 28);
const LATITUDE: Field = Field::new(89, 27);
const COG: Field = Field::new(116, 12);
const HEADING: Field = Field::new(128, 9);
const TIMESTAMP: Field = Field::new(137, 6);
const MANEUVER_INDICATOR: Field = Field::new(143, 2);
const RAIM: Field = Field::new(148, 1);
const RADIO_STATUS: Field = Field::new(149, 19);

/// Position report, AIS types 1, 2 and 3.
///
/// The three types share one bit layout; they differ only in the channel
/// access scheme the transponder used, which is carried by the type ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    msg_type: u8,
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub nav_status: NavigationStatus,
    rot_raw: i8,
    sog_raw: u16,
    pub position_accuracy: bool,
    lon_raw: i32,
    lat_raw: i32,
    cog_raw: u16,
    hdg_raw: u16,
    /// UTC second of the position fix, 60 if not available.
    pub timestamp: u8,
    /// Maneuver indicator code, 0 if not available.
    pub maneuver_indicator: u8,
    pub raim: bool,
    pub radio_status: u32,
}

impl Default for PositionReport {
    fn default() -> Self {
        Self {
            msg_type: 1,
            repeat_indicator: 0,
            mmsi: 0,
            nav_status: NavigationStatus::NotDefined,
            rot_raw: values::ROT_NOT_AVAILABLE,
            sog_raw: values::SOG_NOT_AVAILABLE,
            position_accuracy: false,
            lon_raw: values::LON_NOT_AVAILABLE,
            lat_raw: values::LAT_NOT_AVAILABLE,
            cog_raw: values::COG_NOT_AVAILABLE,
            hdg_raw: values::HEADING_NOT_AVAILABLE,
            timestamp: values::TIMESTAMP_NOT_AVAILABLE,
            maneuver_indicator: 0,
            raim: false,
            radio_status: 0,
        }
    }
}

impl PositionReport {
    pub const SIZE_BITS: usize = 168;

    /// Create a default-valued report with the given type ID (1, 2 or 3).
    pub fn new(msg_type: u8) -> Result<Self, Error> {
        if !(1..=3).contains(&msg_type) {
            return Err(Error::ValueRange(format!(
                "{} is not a position report type",
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
        if !(1..=3).contains(&msg_type) {
            return Err(Error::ValueRange(format!(
                "{} is not a position report type",
                msg_type
            )));
        }
        if bits.len() != Self::SIZE_BITS {
            return Err(Error::SizeMismatch {
                msg_type,
                expected: SizeConstraint::Exact(Self::SIZE_BITS),
                actual: bits.len(),
            });
        }
        Ok(Self {
            msg_type,
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            nav_status: NavigationStatus::from_code(bits.get(NAV_STATUS)? as u8),
            rot_raw: bits.get_signed(RATE_OF_TURN)? as i8,
            sog_raw: bits.get(SOG)? as u16,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            cog_raw: bits.get(COG)? as u16,
            hdg_raw: bits.get(HEADING)? as u16,
            timestamp: bits.get(TIMESTAMP)? as u8,
            maneuver_indicator: bits.get(MANEUVER_INDICATOR)? as u8,
            raim: bits.get(RAIM)? == 1,
            radio_status: bits.get(RADIO_STATUS)? as u32,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, self.msg_type as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(NAV_STATUS, self.nav_status.code() as u64);
        bits.set_signed(RATE_OF_TURN, self.rot_raw as i64);
        bits.set(SOG, self.sog_raw as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(COG, self.cog_raw as u64);
        bits.set(HEADING, self.hdg_raw as u64);
        bits.set(TIMESTAMP, self.timestamp as u64);
        bits.set(MANEUVER_INDICATOR, self.maneuver_indicator as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(RADIO_STATUS, self.radio_status as u64);
        bits
    }

    pub fn message_type(&self) -> u8 {
        self.msg_type
    }

    /// Speed over ground in knots.
    pub fn sog(&self) -> Option<f64> {
        values::sog_from_raw(self.sog_raw)
    }

    /// Set the speed over ground. Negative values are rejected; values above
    /// 102.2 knots clamp to the maximum code.
    pub fn set_sog(&mut self, knots: f64) -> Result<(), Error> {
        self.sog_raw = values::sog_to_raw(knots)?;
        Ok(())
    }

    pub fn set_sog_unavailable(&mut self) {
        self.sog_raw = values::SOG_NOT_AVAILABLE;
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

    pub fn set_heading_unavailable(&mut self) {
        self.hdg_raw = values::HEADING_NOT_AVAILABLE;
    }

    /// Raw 8-bit rate of turn code, -128 if not available.
    pub fn rot_raw(&self) -> i8 {
        self.rot_raw
    }

    pub fn set_rot_raw(&mut self, raw: i8) {
        self.rot_raw = raw;
    }

    /// Rate of turn in degrees per minute, if the code carries a value.
    pub fn rate_of_turn(&self) -> Option<f64> {
        values::rot_from_raw(self.rot_raw)
    }
}
