use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const AIS_VERSION: Field = Field::new(38, 2);
const IMO_NUMBER: Field = Field::new(40, 30);
const CALLSIGN: Field = Field::new(70, 42);
const SHIPNAME: Field = Field::new(112, 120);
const SHIP_TYPE: Field = Field::new(232, 8);
const TO_BOW: Field = Field::new(240, 9);
const TO_STERN: Field = Field::new(249, 9);
const TO_PORT: Field = Field::new(258, 6);
const TO_STARBOARD: Field = Field::new(264, 6);
const EPFD_TYPE: Field = Field::new(270, 4);
const ETA_MONTH: Field = Field::new(274, 4);
const ETA_DAY: Field = Field::new(278, 5);
const ETA_HOUR: Field = Field::new(283, 5);
const ETA_MINUTE: Field = Field::new(288, 6);
const DRAUGHT: Field = Field::new(294, 8);
const DESTINATION: Field = Field::new(302, 120);
const DTE: Field = Field::new(422, 1);

/// Static and voyage related data, AIS type 5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticAndVoyageData {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub ais_version: u8,
    pub imo_number: u32,
    callsign: String,
    shipname: String,
    /// Ship and cargo type code.
    pub ship_type: u8,
    /// Distances from the reference point in meters.
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
    pub epfd_type: u8,
    /// ETA month 1..=12, 0 if not available.
    pub eta_month: u8,
    /// ETA day 1..=31, 0 if not available.
    pub eta_day: u8,
    /// ETA hour 0..=23, 24 if not available.
    pub eta_hour: u8,
    /// ETA minute 0..=59, 60 if not available.
    pub eta_minute: u8,
    draught_raw: u8,
    destination: String,
    /// Data terminal equipment flag, true if not ready.
    pub dte: bool,
}

impl Default for StaticAndVoyageData {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            ais_version: 0,
            imo_number: 0,
            callsign: String::new(),
            shipname: String::new(),
            ship_type: 0,
            to_bow: 0,
            to_stern: 0,
            to_port: 0,
            to_starboard: 0,
            epfd_type: 0,
            eta_month: 0,
            eta_day: 0,
            eta_hour: 24,
            eta_minute: 60,
            draught_raw: 0,
            destination: String::new(),
            dte: false,
        }
    }
}

impl StaticAndVoyageData {
    pub const ID: u8 = 5;
    pub const SIZE_BITS: usize = 424;

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
            ais_version: bits.get(AIS_VERSION)? as u8,
            imo_number: bits.get(IMO_NUMBER)? as u32,
            callsign: bits.get_text(CALLSIGN)?,
            shipname: bits.get_text(SHIPNAME)?,
            ship_type: bits.get(SHIP_TYPE)? as u8,
            to_bow: bits.get(TO_BOW)? as u16,
            to_stern: bits.get(TO_STERN)? as u16,
            to_port: bits.get(TO_PORT)? as u8,
            to_starboard: bits.get(TO_STARBOARD)? as u8,
            epfd_type: bits.get(EPFD_TYPE)? as u8,
            eta_month: bits.get(ETA_MONTH)? as u8,
            eta_day: bits.get(ETA_DAY)? as u8,
            eta_hour: bits.get(ETA_HOUR)? as u8,
            eta_minute: bits.get(ETA_MINUTE)? as u8,
            draught_raw: bits.get(DRAUGHT)? as u8,
            destination: bits.get_text(DESTINATION)?,
            dte: bits.get(DTE)? == 1,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(AIS_VERSION, self.ais_version as u64);
        bits.set(IMO_NUMBER, self.imo_number as u64);
        // the stored strings went through the validating setters or decoder
        let _ = bits.set_text(CALLSIGN, &self.callsign);
        let _ = bits.set_text(SHIPNAME, &self.shipname);
        bits.set(SHIP_TYPE, self.ship_type as u64);
        bits.set(TO_BOW, self.to_bow as u64);
        bits.set(TO_STERN, self.to_stern as u64);
        bits.set(TO_PORT, self.to_port as u64);
        bits.set(TO_STARBOARD, self.to_starboard as u64);
        bits.set(EPFD_TYPE, self.epfd_type as u64);
        bits.set(ETA_MONTH, self.eta_month as u64);
        bits.set(ETA_DAY, self.eta_day as u64);
        bits.set(ETA_HOUR, self.eta_hour as u64);
        bits.set(ETA_MINUTE, self.eta_minute as u64);
        bits.set(DRAUGHT, self.draught_raw as u64);
        let _ = bits.set_text(DESTINATION, &self.destination);
        bits.set(DTE, self.dte as u64);
        bits
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// Set the callsign, at most 7 six-bit characters.
    pub fn set_callsign(&mut self, callsign: &str) -> Result<(), Error> {
        check_text(callsign, CALLSIGN.width / 6)?;
        self.callsign = callsign.to_string();
        Ok(())
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

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Set the destination, at most 20 six-bit characters.
    pub fn set_destination(&mut self, destination: &str) -> Result<(), Error> {
        check_text(destination, DESTINATION.width / 6)?;
        self.destination = destination.to_string();
        Ok(())
    }

    /// Estimated time of arrival in the given year. The wire format omits
    /// the year; the month, day, hour and minute fields must all carry
    /// available values.
    pub fn eta(&self, year: i32) -> Option<NaiveDateTime> {
        if self.eta_hour > 23 || self.eta_minute > 59 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, self.eta_month as u32, self.eta_day as u32)?
            .and_hms_opt(self.eta_hour as u32, self.eta_minute as u32, 0)
    }

    /// Maximum present static draught in meters.
    pub fn draught(&self) -> f64 {
        self.draught_raw as f64 / 10.0
    }

    /// Set the draught. Negative values are rejected; values of 25.5 meters
    /// and above clamp to the maximum code.
    pub fn set_draught(&mut self, meters: f64) -> Result<(), Error> {
        if meters < 0.0 {
            return Err(Error::ValueRange(format!(
                "draught {} is negative",
                meters
            )));
        }
        self.draught_raw = ((meters * 10.0).round() as u64).min(255) as u8;
        Ok(())
    }
}

pub(crate) fn check_text(text: &str, capacity: usize) -> Result<(), Error> {
    if text.len() > capacity {
        return Err(Error::ValueRange(format!(
            "text '{}' exceeds field capacity of {} characters",
            text, capacity
        )));
    }
    for c in text.chars() {
        if !matches!(c, ' '..='_') {
            return Err(Error::ValueRange(format!(
                "character '{}' not representable in 6-bit text",
                c
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;

    const PART_1: &str = "55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53";
    const PART_2: &str = "1@0000000000000";

    fn assembled() -> BitVec {
        armor::decode(&format!("{}{}", PART_1, PART_2), 2).unwrap()
    }

    #[test]
    fn test_parse_assembled_fragments() {
        let bits = assembled();
        assert_eq!(bits.len(), 424);
        let m = StaticAndVoyageData::from_bits(&bits).unwrap();
        assert_eq!(m.repeat_indicator, 0);
        assert_eq!(m.mmsi, 369190000);
        assert_eq!(m.ais_version, 0);
        assert_eq!(m.imo_number, 6710932);
        assert_eq!(m.callsign(), "WDA9674");
        assert_eq!(m.shipname(), "MT.MITCHELL");
        assert_eq!(m.ship_type, 99);
        assert_eq!(m.to_bow, 90);
        assert_eq!(m.to_stern, 90);
        assert_eq!(m.to_port, 10);
        assert_eq!(m.to_starboard, 10);
        assert_eq!(m.epfd_type, 1);
        assert_eq!(m.draught(), 6.0);
        assert_eq!(m.destination(), "SEATTLE");
        assert!(!m.dte);
    }

    #[test]
    fn test_reencode_is_bit_exact() {
        let bits = assembled();
        let m = StaticAndVoyageData::from_bits(&bits).unwrap();
        assert_eq!(m.to_bits(), bits);
        let (text, fill) = armor::encode(&m.to_bits());
        assert_eq!(text, format!("{}{}", PART_1, PART_2));
        assert_eq!(fill, 2);
    }

    #[test]
    fn test_size_is_strict() {
        assert!(matches!(
            StaticAndVoyageData::from_bits(&BitVec::zeroed(423)),
            Err(Error::SizeMismatch { .. })
        ));
        assert!(matches!(
            StaticAndVoyageData::from_bits(&BitVec::zeroed(425)),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_text_setters_validate_length() {
        let mut m = StaticAndVoyageData::default();
        assert!(m.set_callsign("WDA9674").is_ok());
        assert!(m.set_callsign("TOOLONGCALL").is_err());
        assert!(m.set_shipname("MT.MITCHELL").is_ok());
        assert!(m.set_destination("SEATTLE").is_ok());
        assert!(m
            .set_destination("A DESTINATION FAR TOO LONG")
            .is_err());
    }

    #[test]
    fn test_setter_roundtrip() {
        let mut m = StaticAndVoyageData::default();
        m.mmsi = 369190000;
        m.imo_number = 6710932;
        m.set_callsign("WDA9674").unwrap();
        m.set_shipname("MT.MITCHELL").unwrap();
        m.ship_type = 99;
        m.set_draught(6.0).unwrap();
        m.set_destination("SEATTLE").unwrap();

        let m1 = StaticAndVoyageData::from_bits(&m.to_bits()).unwrap();
        assert_eq!(m1, m);
    }

    #[test]
    fn test_draught_clamps() {
        let mut m = StaticAndVoyageData::default();
        m.set_draught(99.0).unwrap();
        assert_eq!(m.draught(), 25.5);
        assert!(m.set_draught(-0.1).is_err());
    }

    #[test]
    fn test_eta() {
        let mut m = StaticAndVoyageData::default();
        assert!(m.eta(2024).is_none()); // hour 24, minute 60
        m.eta_month = 3;
        m.eta_day = 14;
        m.eta_hour = 12;
        m.eta_minute = 30;
        assert_eq!(
            m.eta(2024),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(12, 30, 0)
        );
        m.eta_month = 0; // not available
        assert!(m.eta(2024).is_none());
    }

    #[test]
    fn test_text_rejects_unencodable_characters() {
        let mut m = StaticAndVoyageData::default();
        assert!(m.set_shipname("lowercase").is_err());
    }
}
