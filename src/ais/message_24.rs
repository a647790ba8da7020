use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::message_05::check_text;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const PART_NUMBER: Field = Field::new(38, 2);

// part A
const SHIPNAME: Field = Field::new(40, 120);

// part B
const SHIP_TYPE: Field = Field::new(40, 8);
const VENDOR_ID: Field = Field::new(48, 18);
const MODEL: Field = Field::new(66, 4);
const SERIAL: Field = Field::new(70, 20);
const CALLSIGN: Field = Field::new(90, 42);
const TO_BOW: Field = Field::new(132, 9);
const TO_STERN: Field = Field::new(141, 9);
const TO_PORT: Field = Field::new(150, 6);
const TO_STARBOARD: Field = Field::new(156, 6);

const SIZE_BITS_A: usize = 160;
const SIZE_BITS_B: usize = 168;

/// Payload of one part of a type 24 report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StaticDataPart {
    /// Part A carries only the ship name.
    A { shipname: String },
    /// Part B carries the remaining class B static data. For an auxiliary
    /// craft the dimension fields hold the mothership MMSI instead.
    B {
        ship_type: u8,
        vendor_id: String,
        model: u8,
        serial: u32,
        callsign: String,
        to_bow: u16,
        to_stern: u16,
        to_port: u8,
        to_starboard: u8,
    },
}

/// Class B static data report, AIS type 24, sent in two parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataReport {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    part: StaticDataPart,
}

impl Default for StaticDataReport {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            part: StaticDataPart::A {
                shipname: String::new(),
            },
        }
    }
}

impl StaticDataReport {
    pub const ID: u8 = 24;
    pub const SIZE_BITS_MIN: usize = SIZE_BITS_A;
    pub const SIZE_BITS_MAX: usize = SIZE_BITS_B;

    pub fn new_part_a(mmsi: u32, shipname: &str) -> Result<Self, Error> {
        check_text(shipname, SHIPNAME.width / 6)?;
        Ok(Self {
            repeat_indicator: 0,
            mmsi,
            part: StaticDataPart::A {
                shipname: shipname.to_string(),
            },
        })
    }

    pub fn new_part_b(mmsi: u32, part: StaticDataPart) -> Result<Self, Error> {
        match &part {
            StaticDataPart::B {
                vendor_id,
                callsign,
                ..
            } => {
                check_text(vendor_id, VENDOR_ID.width / 6)?;
                check_text(callsign, CALLSIGN.width / 6)?;
            }
            StaticDataPart::A { .. } => {
                return Err(Error::ValueRange(
                    "part B constructor given a part A payload".to_string(),
                ));
            }
        }
        Ok(Self {
            repeat_indicator: 0,
            mmsi,
            part,
        })
    }

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        let part_number = if len > PART_NUMBER.offset + PART_NUMBER.width {
            bits.get(PART_NUMBER)? as u8
        } else {
            0
        };
        let part = match part_number {
            0 => {
                if len != SIZE_BITS_A {
                    return Err(Error::SizeMismatch {
                        msg_type: Self::ID,
                        expected: SizeConstraint::Exact(SIZE_BITS_A),
                        actual: len,
                    });
                }
                StaticDataPart::A {
                    shipname: bits.get_text(SHIPNAME)?,
                }
            }
            1 => {
                if len != SIZE_BITS_B {
                    return Err(Error::SizeMismatch {
                        msg_type: Self::ID,
                        expected: SizeConstraint::Exact(SIZE_BITS_B),
                        actual: len,
                    });
                }
                StaticDataPart::B {
                    ship_type: bits.get(SHIP_TYPE)? as u8,
                    vendor_id: bits.get_text(VENDOR_ID)?,
                    model: bits.get(MODEL)? as u8,
                    serial: bits.get(SERIAL)? as u32,
                    callsign: bits.get_text(CALLSIGN)?,
                    to_bow: bits.get(TO_BOW)? as u16,
                    to_stern: bits.get(TO_STERN)? as u16,
                    to_port: bits.get(TO_PORT)? as u8,
                    to_starboard: bits.get(TO_STARBOARD)? as u8,
                }
            }
            n => {
                return Err(Error::Format(format!(
                    "static data report part number {} is reserved",
                    n
                )));
            }
        };
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            part,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let len = match self.part {
            StaticDataPart::A { .. } => SIZE_BITS_A,
            StaticDataPart::B { .. } => SIZE_BITS_B,
        };
        let mut bits = BitVec::zeroed(len);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        match &self.part {
            StaticDataPart::A { shipname } => {
                bits.set(PART_NUMBER, 0);
                // validated by the constructor or the decoder
                let _ = bits.set_text(SHIPNAME, shipname);
            }
            StaticDataPart::B {
                ship_type,
                vendor_id,
                model,
                serial,
                callsign,
                to_bow,
                to_stern,
                to_port,
                to_starboard,
            } => {
                bits.set(PART_NUMBER, 1);
                bits.set(SHIP_TYPE, *ship_type as u64);
                let _ = bits.set_text(VENDOR_ID, vendor_id);
                bits.set(MODEL, *model as u64);
                bits.set(SERIAL, *serial as u64);
                let _ = bits.set_text(CALLSIGN, callsign);
                bits.set(TO_BOW, *to_bow as u64);
                bits.set(TO_STERN, *to_stern as u64);
                bits.set(TO_PORT, *to_port as u64);
                bits.set(TO_STARBOARD, *to_starboard as u64);
            }
        }
        bits
    }

    pub fn part(&self) -> &StaticDataPart {
        &self.part
    }

    /// Mothership MMSI, packed into the dimension fields of part B. Only
    /// meaningful when the reporting MMSI marks an auxiliary craft
    /// (98xxxxxxx).
    pub fn mothership_mmsi(&self) -> Option<u32> {
        match &self.part {
            StaticDataPart::B {
                to_bow,
                to_stern,
                to_port,
                to_starboard,
                ..
            } if self.mmsi / 10_000_000 == 98 => Some(
                ((*to_bow as u32) << 21)
                    | ((*to_stern as u32) << 12)
                    | ((*to_port as u32) << 6)
                    | *to_starboard as u32,
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;

    #[test]
    fn test_parse_part_a() {
        // part A, shipname "PROGUY"
        let bits = armor::decode("H42O55i18tMET00000000000000", 2).unwrap();
        let m = StaticDataReport::from_bits(&bits).unwrap();
        assert_eq!(m.mmsi, 271041815);
        assert_eq!(
            m.part(),
            &StaticDataPart::A {
                shipname: "PROGUY".to_string()
            }
        );
    }

    #[test]
    fn test_roundtrip_part_b() {
        let part = StaticDataPart::B {
            ship_type: 36,
            vendor_id: "SRT".to_string(),
            model: 1,
            serial: 743700,
            callsign: "2FWB6".to_string(),
            to_bow: 4,
            to_stern: 8,
            to_port: 2,
            to_starboard: 2,
        };
        let m = StaticDataReport::new_part_b(235084755, part).unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 168);
        let back = StaticDataReport::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        assert!(back.mothership_mmsi().is_none());
    }

    #[test]
    fn test_mothership_mmsi() {
        let part = StaticDataPart::B {
            ship_type: 36,
            vendor_id: String::new(),
            model: 0,
            serial: 0,
            callsign: String::new(),
            to_bow: ((123456789u32 >> 21) & 0x1ff) as u16,
            to_stern: ((123456789u32 >> 12) & 0x1ff) as u16,
            to_port: ((123456789u32 >> 6) & 0x3f) as u8,
            to_starboard: (123456789u32 & 0x3f) as u8,
        };
        let m = StaticDataReport::new_part_b(980123456, part).unwrap();
        assert_eq!(m.mothership_mmsi(), Some(123456789));
    }

    #[test]
    fn test_part_sizes_are_strict() {
        // part number 0 in a 168 bit frame
        let mut bits = BitVec::zeroed(168);
        bits.set(MESSAGE_TYPE, 24);
        assert!(matches!(
            StaticDataReport::from_bits(&bits),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_reserved_part_number() {
        let mut bits = BitVec::zeroed(160);
        bits.set(MESSAGE_TYPE, 24);
        bits.set(PART_NUMBER, 2);
        assert!(matches!(
            StaticDataReport::from_bits(&bits),
            Err(Error::Format(_))
        ));
    }
}
