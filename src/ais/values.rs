//! Scaling, sentinel codes and shared value types for AIS message fields.
//!
//! Quantized fields are stored in messages as the raw wire codes and only
//! converted to physical units in getters, so re-encoding a decoded message
//! is bit-exact by construction.

use serde::Serialize;

use crate::errors::Error;

/// Longitude/latitude in 1/10000 minute (types 1-4, 9, 11, 18, 19, 21).
pub const LON_SCALE: f64 = 600_000.0;
pub const LON_NOT_AVAILABLE: i32 = 181 * 600_000; // 0x6791AC0
pub const LAT_NOT_AVAILABLE: i32 = 91 * 600_000; // 0x3412140

/// Longitude/latitude in 1/10 minute (types 17, 22, 23, 27).
pub const LON_SCALE_SHORT: f64 = 600.0;
pub const LON_NOT_AVAILABLE_SHORT: i32 = 181 * 600;
pub const LAT_NOT_AVAILABLE_SHORT: i32 = 91 * 600;

pub const SOG_NOT_AVAILABLE: u16 = 1023;
pub const SOG_MAX: u16 = 1022; // 102.2 knots and above
pub const COG_NOT_AVAILABLE: u16 = 3600;
pub const HEADING_NOT_AVAILABLE: u16 = 511;
pub const TIMESTAMP_NOT_AVAILABLE: u8 = 60;
pub const ROT_NOT_AVAILABLE: i8 = -128;
pub const ALTITUDE_NOT_AVAILABLE: u16 = 4095;

/// Navigation status codes of the position report (4-bit field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManeuverability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    ReservedHsc,
    ReservedWig,
    TowingAstern,
    PushingAhead,
    Reserved,
    AisSartActive,
    NotDefined,
}

impl NavigationStatus {
    pub fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0 => NavigationStatus::UnderWayUsingEngine,
            1 => NavigationStatus::AtAnchor,
            2 => NavigationStatus::NotUnderCommand,
            3 => NavigationStatus::RestrictedManeuverability,
            4 => NavigationStatus::ConstrainedByDraught,
            5 => NavigationStatus::Moored,
            6 => NavigationStatus::Aground,
            7 => NavigationStatus::EngagedInFishing,
            8 => NavigationStatus::UnderWaySailing,
            9 => NavigationStatus::ReservedHsc,
            10 => NavigationStatus::ReservedWig,
            11 => NavigationStatus::TowingAstern,
            12 => NavigationStatus::PushingAhead,
            13 => NavigationStatus::Reserved,
            14 => NavigationStatus::AisSartActive,
            _ => NavigationStatus::NotDefined,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            NavigationStatus::UnderWayUsingEngine => 0,
            NavigationStatus::AtAnchor => 1,
            NavigationStatus::NotUnderCommand => 2,
            NavigationStatus::RestrictedManeuverability => 3,
            NavigationStatus::ConstrainedByDraught => 4,
            NavigationStatus::Moored => 5,
            NavigationStatus::Aground => 6,
            NavigationStatus::EngagedInFishing => 7,
            NavigationStatus::UnderWaySailing => 8,
            NavigationStatus::ReservedHsc => 9,
            NavigationStatus::ReservedWig => 10,
            NavigationStatus::TowingAstern => 11,
            NavigationStatus::PushingAhead => 12,
            NavigationStatus::Reserved => 13,
            NavigationStatus::AisSartActive => 14,
            NavigationStatus::NotDefined => 15,
        }
    }
}

pub fn lon_from_raw(raw: i32) -> Option<f64> {
    if raw == LON_NOT_AVAILABLE {
        None
    } else {
        Some(raw as f64 / LON_SCALE)
    }
}

pub fn lon_to_raw(degrees: f64) -> Result<i32, Error> {
    if !(-180.0..=180.0).contains(&degrees) {
        return Err(Error::ValueRange(format!(
            "longitude {} out of range",
            degrees
        )));
    }
    Ok((degrees * LON_SCALE).round() as i32)
}

pub fn lat_from_raw(raw: i32) -> Option<f64> {
    if raw == LAT_NOT_AVAILABLE {
        None
    } else {
        Some(raw as f64 / LON_SCALE)
    }
}

pub fn lat_to_raw(degrees: f64) -> Result<i32, Error> {
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(Error::ValueRange(format!(
            "latitude {} out of range",
            degrees
        )));
    }
    Ok((degrees * LON_SCALE).round() as i32)
}

pub fn lon_from_raw_short(raw: i32) -> Option<f64> {
    if raw == LON_NOT_AVAILABLE_SHORT {
        None
    } else {
        Some(raw as f64 / LON_SCALE_SHORT)
    }
}

pub fn lon_to_raw_short(degrees: f64) -> Result<i32, Error> {
    if !(-180.0..=180.0).contains(&degrees) {
        return Err(Error::ValueRange(format!(
            "longitude {} out of range",
            degrees
        )));
    }
    Ok((degrees * LON_SCALE_SHORT).round() as i32)
}

pub fn lat_from_raw_short(raw: i32) -> Option<f64> {
    if raw == LAT_NOT_AVAILABLE_SHORT {
        None
    } else {
        Some(raw as f64 / LON_SCALE_SHORT)
    }
}

pub fn lat_to_raw_short(degrees: f64) -> Result<i32, Error> {
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(Error::ValueRange(format!(
            "latitude {} out of range",
            degrees
        )));
    }
    Ok((degrees * LON_SCALE_SHORT).round() as i32)
}

/// Speed over ground in 0.1 knot steps. Values above the representable
/// maximum clamp to the maximum code, they do not wrap.
pub fn sog_from_raw(raw: u16) -> Option<f64> {
    if raw == SOG_NOT_AVAILABLE {
        None
    } else {
        Some(raw as f64 / 10.0)
    }
}

pub fn sog_to_raw(knots: f64) -> Result<u16, Error> {
    if knots < 0.0 {
        return Err(Error::ValueRange(format!(
            "speed over ground {} is negative",
            knots
        )));
    }
    let raw = (knots * 10.0).round() as u64;
    Ok(raw.min(SOG_MAX as u64) as u16)
}

/// Course over ground in 0.1 degree steps.
pub fn cog_from_raw(raw: u16) -> Option<f64> {
    if raw == COG_NOT_AVAILABLE {
        None
    } else {
        Some(raw as f64 / 10.0)
    }
}

pub fn cog_to_raw(degrees: f64) -> Result<u16, Error> {
    if !(0.0..360.0).contains(&degrees) {
        return Err(Error::ValueRange(format!(
            "course over ground {} out of range",
            degrees
        )));
    }
    Ok((degrees * 10.0).round() as u16)
}

pub fn heading_from_raw(raw: u16) -> Option<u16> {
    if raw == HEADING_NOT_AVAILABLE {
        None
    } else {
        Some(raw)
    }
}

pub fn heading_to_raw(degrees: u16) -> Result<u16, Error> {
    if degrees >= 360 {
        return Err(Error::ValueRange(format!(
            "heading {} out of range",
            degrees
        )));
    }
    Ok(degrees)
}

/// Rate of turn in degrees per minute, decoded from the 8-bit ROT code.
/// `-128` means not available; codes of magnitude 127 only indicate a turn
/// faster than 5 degrees per 30 seconds without a quantitative value.
pub fn rot_from_raw(raw: i8) -> Option<f64> {
    if raw == ROT_NOT_AVAILABLE || raw == 127 || raw == -127 {
        return None;
    }
    let value = (raw as f64 / 4.733).powi(2);
    Some(if raw < 0 { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_lat_sentinels() {
        assert_eq!(LON_NOT_AVAILABLE, 0x6791AC0);
        assert_eq!(LAT_NOT_AVAILABLE, 0x3412140);
        assert!(lon_from_raw(LON_NOT_AVAILABLE).is_none());
        assert!(lat_from_raw(LAT_NOT_AVAILABLE).is_none());
        assert_eq!(lon_from_raw(600_000), Some(1.0));
        assert_eq!(lat_from_raw(-600_000), Some(-1.0));
    }

    #[test]
    fn test_lon_lat_quantization_roundtrip() {
        let raw = lon_to_raw(-123.395382).unwrap();
        assert_eq!(raw, -74_037_229);
        let deg = lon_from_raw(raw).unwrap();
        assert_eq!(lon_to_raw(deg).unwrap(), raw);
    }

    #[test]
    fn test_lon_lat_range() {
        assert!(lon_to_raw(180.5).is_err());
        assert!(lat_to_raw(-90.1).is_err());
        assert!(lon_to_raw_short(181.0).is_err());
        assert!(lat_to_raw_short(91.0).is_err());
    }

    #[test]
    fn test_sog_clamps_to_max() {
        assert_eq!(sog_to_raw(10000.0).unwrap(), SOG_MAX);
        assert_eq!(sog_from_raw(SOG_MAX), Some(102.2));
        assert_eq!(sog_to_raw(12.3).unwrap(), 123);
        assert!(sog_to_raw(-1.0).is_err());
        assert!(sog_from_raw(SOG_NOT_AVAILABLE).is_none());
    }

    #[test]
    fn test_cog() {
        assert_eq!(cog_to_raw(110.7).unwrap(), 1107);
        assert!(cog_to_raw(360.0).is_err());
        assert!(cog_from_raw(COG_NOT_AVAILABLE).is_none());
    }

    #[test]
    fn test_navigation_status_codes() {
        for code in 0..16u8 {
            assert_eq!(NavigationStatus::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_rot() {
        assert!(rot_from_raw(ROT_NOT_AVAILABLE).is_none());
        assert!(rot_from_raw(127).is_none());
        assert_eq!(rot_from_raw(0), Some(0.0));
        let rot = rot_from_raw(-20).unwrap();
        assert!(rot < 0.0);
    }
}
