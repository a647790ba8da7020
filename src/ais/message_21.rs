use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::message_05::check_text;
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const AID_TYPE: Field = Field::new(38, 5);
const NAME: Field = Field::new(43, 120);
const POSITION_ACCURACY: Field = Field::new(163, 1);
const LONGITUDE: Field = Field::new(164, 28);
const LATITUDE: Field = Field::new(192, 27);
const TO_BOW: Field = Field::new(219, 9);
const TO_STERN: Field = Field::new(228, 9);
const TO_PORT: Field = Field::new(237, 6);
const TO_STARBOARD: Field = Field::new(243, 6);
const EPFD_TYPE: Field = Field::new(249, 4);
const TIMESTAMP: Field = Field::new(253, 6);
const OFF_POSITION: Field = Field::new(259, 1);
const REGIONAL: Field = Field::new(260, 8);
const RAIM: Field = Field::new(268, 1);
const VIRTUAL_AID: Field = Field::new(269, 1);
const ASSIGNED: Field = Field::new(270, 1);
const SPARE: Field = Field::new(271, 1);

const EXTENSION_OFFSET: usize = 272;
const EXTENSION_MAX_CHARS: usize = 14;

/// Aid-to-navigation report, AIS type 21. 272 bits, plus up to 14 six-bit
/// characters of name extension when the name does not fit in 20.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AidToNavigationReport {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    /// Aid type code per the IALA table, 0 if not specified.
    pub aid_type: u8,
    name: String,
    pub position_accuracy: bool,
    lon_raw: i32,
    lat_raw: i32,
    /// Distances from the reference point in meters.
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
    pub epfd_type: u8,
    /// UTC second of the position fix, 60 if not available.
    pub timestamp: u8,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
    name_extension: String,
}

impl Default for AidToNavigationReport {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            aid_type: 0,
            name: String::new(),
            position_accuracy: false,
            lon_raw: values::LON_NOT_AVAILABLE,
            lat_raw: values::LAT_NOT_AVAILABLE,
            to_bow: 0,
            to_stern: 0,
            to_port: 0,
            to_starboard: 0,
            epfd_type: 0,
            timestamp: values::TIMESTAMP_NOT_AVAILABLE,
            off_position: false,
            regional: 0,
            raim: false,
            virtual_aid: false,
            assigned: false,
            name_extension: String::new(),
        }
    }
}

impl AidToNavigationReport {
    pub const ID: u8 = 21;
    pub const SIZE_BITS_MIN: usize = 272;
    pub const SIZE_BITS_MAX: usize = 360;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if len < Self::SIZE_BITS_MIN || len > Self::SIZE_BITS_MAX {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let ext_bits = len - EXTENSION_OFFSET;
        if ext_bits % 6 != 0 {
            return Err(Error::Format(format!(
                "name extension of {} bits is not a whole number of characters",
                ext_bits
            )));
        }
        let name_extension = if ext_bits > 0 {
            bits.get_text(Field::new(EXTENSION_OFFSET, ext_bits))?
        } else {
            String::new()
        };
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            aid_type: bits.get(AID_TYPE)? as u8,
            name: bits.get_text(NAME)?,
            position_accuracy: bits.get(POSITION_ACCURACY)? == 1,
            lon_raw: bits.get_signed(LONGITUDE)? as i32,
            lat_raw: bits.get_signed(LATITUDE)? as i32,
            to_bow: bits.get(TO_BOW)? as u16,
            to_stern: bits.get(TO_STERN)? as u16,
            to_port: bits.get(TO_PORT)? as u8,
            to_starboard: bits.get(TO_STARBOARD)? as u8,
            epfd_type: bits.get(EPFD_TYPE)? as u8,
            timestamp: bits.get(TIMESTAMP)? as u8,
            off_position: bits.get(OFF_POSITION)? == 1,
            regional: bits.get(REGIONAL)? as u8,
            raim: bits.get(RAIM)? == 1,
            virtual_aid: bits.get(VIRTUAL_AID)? == 1,
            assigned: bits.get(ASSIGNED)? == 1,
            name_extension,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let len = EXTENSION_OFFSET + self.name_extension.len() * 6;
        let mut bits = BitVec::zeroed(len);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(AID_TYPE, self.aid_type as u64);
        // validated by the setter or the decoder
        let _ = bits.set_text(NAME, &self.name);
        bits.set(POSITION_ACCURACY, self.position_accuracy as u64);
        bits.set_signed(LONGITUDE, self.lon_raw as i64);
        bits.set_signed(LATITUDE, self.lat_raw as i64);
        bits.set(TO_BOW, self.to_bow as u64);
        bits.set(TO_STERN, self.to_stern as u64);
        bits.set(TO_PORT, self.to_port as u64);
        bits.set(TO_STARBOARD, self.to_starboard as u64);
        bits.set(EPFD_TYPE, self.epfd_type as u64);
        bits.set(TIMESTAMP, self.timestamp as u64);
        bits.set(OFF_POSITION, self.off_position as u64);
        bits.set(REGIONAL, self.regional as u64);
        bits.set(RAIM, self.raim as u64);
        bits.set(VIRTUAL_AID, self.virtual_aid as u64);
        bits.set(ASSIGNED, self.assigned as u64);
        bits.set(SPARE, 0);
        if !self.name_extension.is_empty() {
            let _ = bits.set_text(
                Field::new(EXTENSION_OFFSET, self.name_extension.len() * 6),
                &self.name_extension,
            );
        }
        bits
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the aid name, at most 20 six-bit characters.
    pub fn set_name(&mut self, name: &str) -> Result<(), Error> {
        check_text(name, NAME.width / 6)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn name_extension(&self) -> &str {
        &self.name_extension
    }

    /// Set the name extension, at most 14 six-bit characters. The encoded
    /// message grows by six bits per character.
    pub fn set_name_extension(&mut self, extension: &str) -> Result<(), Error> {
        check_text(extension, EXTENSION_MAX_CHARS)?;
        self.name_extension = extension.to_string();
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip_without_extension() {
        let mut m = AidToNavigationReport::default();
        m.mmsi = 992351149;
        m.aid_type = 14;
        m.set_name("SANDETTIE SW").unwrap();
        m.set_lon(1.951667).unwrap();
        m.set_lat(51.160833).unwrap();
        m.virtual_aid = false;
        m.off_position = true;

        let bits = m.to_bits();
        assert_eq!(bits.len(), 272);
        let back = AidToNavigationReport::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.name(), "SANDETTIE SW");
        assert_abs_diff_eq!(back.lon().unwrap(), 1.951667, epsilon = 1e-5);
        assert_abs_diff_eq!(back.lat().unwrap(), 51.160833, epsilon = 1e-5);
    }

    #[test]
    fn test_roundtrip_with_extension() {
        let mut m = AidToNavigationReport::default();
        m.mmsi = 995031014;
        m.aid_type = 30;
        m.set_name("CORK HOLE OUTER MARK").unwrap();
        m.set_name_extension("NO 2").unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 272 + 4 * 6);
        let back = AidToNavigationReport::from_bits(&bits).unwrap();
        assert_eq!(back.name_extension(), "NO 2");
        assert_eq!(back, m);
    }

    #[test]
    fn test_extension_too_long() {
        let mut m = AidToNavigationReport::default();
        assert!(m.set_name_extension("FIFTEEN CHARSXX").is_err());
    }

    #[test]
    fn test_ragged_extension_rejected() {
        assert!(matches!(
            AidToNavigationReport::from_bits(&BitVec::zeroed(275)),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_invalid_length() {
        for len in [271usize, 361] {
            assert!(matches!(
                AidToNavigationReport::from_bits(&BitVec::zeroed(len)),
                Err(Error::SizeMismatch { .. })
            ));
        }
    }
}
