use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const YEAR: Field = Field::new(38, 14);
const MONTH: Field = Field::new(52, 4);
const DAY: Field = Field::new(56, 5);
const HOUR: Field = Field::new(61, 5);
const MINUTE: Field = Field::new(66, 6);
const SECOND: Field = Field::new(72, 6);
const POSITION_ACCURACY: Field = Field::new(78, 1);
const LONGITUDE: Field = Field::new(79, 28);
const LATITUDE: Field = Field::new(107, 27);
const EPFD_TYPE: Field = Field::new(134, 4);
const SPARE: Field = Field::new(138, 10);
const RAIM: Field = Field::new(148, 1);
const RADIO_STATUS: Field = Field::new(149, 19);

/// Base station report (type 4) and UTC/date response (type 11).
///
/// Type 11 reuses the type 4 layout; it is transmitted in response to a UTC
/// inquiry (type 10).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStationReport {
    msg_type: u8,
    pub repeat_indicator: u8,
    pub mmsi: u32,
    /// UTC year 1..=9999, 0 if not available.
    pub year: u16,
    /// UTC month 1..=12, 0 if not available.
    pub month: u8,
    /// UTC day 1..=31, 0 if not available.
    pub day: u8,
    /// UTC hour 0..=23, 24 if not available.
    pub hour: u8,
    /// UTC minute 0..=59, 60 if not available.
    pub minute: u8,
    /// UTC second 0..=59, 60 if not available.
    pub second: u8,
    pub position_accuracy: bool,
    lon_raw: i32,
    lat_raw: i32,
    /// Electronic position fixing device type code.
    pub epfd_type: u8,
    pub raim: bool,
    pub radio_status: u32,
}

impl Default for BaseStationReport {
    fn default() -> Self {
        Self {
            msg_type: 4,
            repeat_indicator: 0,
            mmsi: 0,
            year: 0,
            month: 0,
            day: 0,
            hour: 24,
            minute: 60,
            second: 60,
            position_accuracy: false,
            lon_raw: values::LON_NOT_AVAILABLE,
            lat_raw: values::LAT_NOT_AVAILABLE,
            epfd_type: 0,
            raim: false,
            radio_status: 0,
        }
    }
}

impl BaseStationReport {
    pub const SIZE_BITS: usize = 168;

    /// Create a default-valued report with the given type ID (4 or 11).
    pub fn new(msg_type: u8) -> Result<Self, Error> {
        if msg_type != 4 && msg_type != 11 {
            return Err(Error::ValueRange(format!(
                "{} is not a base station report type",
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
        if msg_type != 4 && msg_type != 11 {
            return Err(Error::ValueRange(format!(
                "{} is not a base station report type",
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
            year: bits.get(YEAR)? as u16,
            month: bits.get(MONTH)? as u8,
            day: bits.get(DAY)? as u8,
            hour: bits.get(HOUR)? as u8,
            minute: bits.get(MINUTE)? as u8,
            second: bits.get(SECOND)? as u8,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            epfd_type: bits.get(EPFD_TYPE)? as u8,
            raim: bits.get(RAIM)? == 1,
            radio_status: bits.get(RADIO_STATUS)? as u32,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, self.msg_type as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(YEAR, self.year as u64);
        bits.set(MONTH, self.month as u64);
        bits.set(DAY, self.day as u64);
        bits.set(HOUR, self.hour as u64);
        bits.set(MINUTE, self.minute as u64);
        bits.set(SECOND, self.second as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(EPFD_TYPE, self.epfd_type as u64);
        bits.set(SPARE, 0);
        bits.set(RAIM, self.raim as u64);
        bits.set(RADIO_STATUS, self.radio_status as u64);
        bits
    }

    pub fn message_type(&self) -> u8 {
        self.msg_type
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

    /// The station's UTC date and time, when all components are available.
    pub fn utc_datetime(&self) -> Option<NaiveDateTime> {
        if self.year == 0 || self.month == 0 || self.day == 0 {
            return None;
        }
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?
            .and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
    }
}
