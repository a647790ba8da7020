use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
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
const REGIONAL: Field = Field::new(139, 2);
const CS_UNIT: Field = Field::new(141, 1);
const DISPLAY: Field = Field::new(142, 1);
const DSC: Field = Field::new(143, 1);
const BAND: Field = Field::new(144, 1);
const MESSAGE_22: Field = Field::new(145, 1);
const ASSIGNED: Field = Field::new(146, 1);
const RAIM: Field = Field::new(147, 1);
const RADIO_STATUS: Field = Field::new(148, 20);

/// Standard class B equipment position report, AIS type 18.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardClassBReport {
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
    /// True for carrier sense units, false for SOTDMA.
    pub cs_unit: bool,
    pub display: bool,
    pub dsc: bool,
    pub band: bool,
    pub message_22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio_status: u32,
}

impl Default for StandardClassBReport {
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
            cs_unit: false,
            display: false,
            dsc: false,
            band: false,
            message_22: false,
            assigned: false,
            raim: false,
            radio_status: 0,
        }
    }
}

impl StandardClassBReport {
    pub const ID: u8 = 18;
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
            reserved: bits.get(RESERVED)? as u8,
            sog_raw: bits.get(SOG)? as u16,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            cog_raw: bits.get(COG)? as u16,
            hdg_raw: bits.get(HEADING)? as u16,
            timestamp: bits.get(TIMESTAMP)? as u8,
            regional: bits.get(REGIONAL)? as u8,
            cs_unit: bits.get(CS_UNIT)? == 1,
            display: bits.get(DISPLAY)? == 1,
            dsc: bits.get(DSC)? == 1,
            band: bits.get(BAND)? == 1,
            message_22: bits.get(MESSAGE_22)? == 1,
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
        bits.set(RESERVED, self.reserved as u64);
        bits.set(SOG, self.sog_raw as u64);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(COG, self.cog_raw as u64);
        bits.set(HEADING, self.hdg_raw as u64);
        bits.set(TIMESTAMP, self.timestamp as u64);
        bits.set(REGIONAL, self.regional as u64);
        bits.set(CS_UNIT, self.cs_unit as u64);
        bits.set(DISPLAY, self.display as u64);
        bits.set(DSC, self.dsc as u64);
        bits.set(BAND, self.band as u64);
        bits.set(MESSAGE_22, self.message_22 as u64);
        bits.set(ASSIGNED, self.assigned as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(RADIO_STATUS, self.radio_status as u64);
        bits
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
