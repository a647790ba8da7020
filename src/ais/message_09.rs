use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const ALTITUDE: Field = Field::new(38, 12);
const SPEED: Field = Field::new(50, 10);
const POSITION_ACCURACY: Field = Field::new(60, 1);
const LONGITUDE: Field = Field::new(61, 28);
const LATITUDE: Field = Field::new(89, 27);
const COG: Field = Field::new(116, 12);
const TIMESTAMP: Field = Field::new(128, 6);
const REGIONAL: Field = Field::new(134, 8);
const DTE: Field = Field::new(142, 1);
const ASSIGNED: Field = Field::new(146, 1);
const RAIM: Field = Field::new(147, 1);
const RADIO_STATUS: Field = Field::new(148, 20);

/// Standard search and rescue aircraft position report, AIS type 9.
///
/// Unlike the vessel position reports, speed over ground is coded in whole
/// knots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SarAircraftPosition {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    altitude_raw: u16,
    speed_raw: u16,
    pub position_accuracy: bool,
    lon_raw: i32,
    lat_raw: i32,
    cog_raw: u16,
    pub timestamp: u8,
    pub regional: u8,
    pub dte: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio_status: u32,
}

impl Default for SarAircraftPosition {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            altitude_raw: values::ALTITUDE_NOT_AVAILABLE,
            speed_raw: 1023,
            position_accuracy: false,
            lon_raw: values::LON_NOT_AVAILABLE,
            lat_raw: values::LAT_NOT_AVAILABLE,
            cog_raw: values::COG_NOT_AVAILABLE,
            timestamp: values::TIMESTAMP_NOT_AVAILABLE,
            regional: 0,
            dte: true,
            assigned: false,
            raim: false,
            radio_status: 0,
        }
    }
}

impl SarAircraftPosition {
    pub const ID: u8 = 9;
    pub const SIZE_BITS: usize = 168;

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
            altitude_raw: bits.get(ALTITUDE)? as u16,
            speed_raw: bits.get(SPEED)? as u16,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            cog_raw: bits.get(COG)? as u16,
            timestamp: bits.get(TIMESTAMP)? as u8,
            regional: bits.get(REGIONAL)? as u8,
            dte: bits.get(DTE)? == 1,
            assigned: bits.get(ASSIGNED)? == 1,
            raim: bits.get(RAIM)? == 1,
            radio_status: bits.get(RADIO_STATUS)? as u32,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(ALTITUDE, self.altitude_raw as u64);
        bits.set(SPEED, self.speed_raw as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(COG, self.cog_raw as u64);
        bits.set(TIMESTAMP, self.timestamp as u64);
        bits.set(REGIONAL, self.regional as u64);
        bits.set(DTE, self.dte as u64);
        bits.set(ASSIGNED, self.assigned as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(RADIO_STATUS, self.radio_status as u64);
        bits
    }

    /// Altitude in meters, 4094 meaning 4094 meters or higher.
    pub fn altitude(&self) -> Option<u16> {
        if self.altitude_raw == values::ALTITUDE_NOT_AVAILABLE {
            None
        } else {
            Some(self.altitude_raw)
        }
    }

    pub fn set_altitude(&mut self, meters: u16) {
        self.altitude_raw = meters.min(4094);
    }

    pub fn set_altitude_unavailable(&mut self) {
        self.altitude_raw = values::ALTITUDE_NOT_AVAILABLE;
    }

    /// Speed over ground in whole knots, 1022 meaning 1022 knots or more.
    pub fn speed(&self) -> Option<u16> {
        if self.speed_raw == 1023 {
            None
        } else {
            Some(self.speed_raw)
        }
    }

    pub fn set_speed(&mut self, knots: u16) {
        self.speed_raw = knots.min(1022);
    }

    pub fn lon(&self) -> Option<f64> {
        values::lon_from_raw(self.lon_raw)
    }

    pub fn set_lon(&mut self, degrees: f64) -> Result<(), Error> {
        self.lon_raw = values::lon_to_raw(degrees)?;
        Ok(())
    }

    pub fn lat(&self) -> Option<f64> {
        values::lat_from_raw(self.lat_raw)
    }

    pub fn set_lat(&mut self, degrees: f64) -> Result<(), Error> {
        self.lat_raw = values::lat_to_raw(degrees)?;
        Ok(())
    }

    pub fn cog(&self) -> Option<f64> {
        values::cog_from_raw(self.cog_raw)
    }

    pub fn set_cog(&mut self, degrees: f64) -> Result<(), Error> {
        self.cog_raw = values::cog_to_raw(degrees)?;
        Ok(())
    }
}
