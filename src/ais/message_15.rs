use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const MMSI_1: Field = Field::new(40, 30);
const TYPE_1_1: Field = Field::new(70, 6);
const OFFSET_1_1: Field = Field::new(76, 12);
const TYPE_1_2: Field = Field::new(90, 6);
const OFFSET_1_2: Field = Field::new(96, 12);
const MMSI_2: Field = Field::new(110, 30);
const TYPE_2_1: Field = Field::new(140, 6);
const OFFSET_2_1: Field = Field::new(146, 12);

/// A single interrogation request: the message type asked for and the reply
/// slot offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterrogationRequest {
    pub msg_type: u8,
    pub slot_offset: u16,
}

/// Interrogation, AIS type 15.
///
/// One station may be asked for one or two message types; a second station
/// may be asked for one more. The three valid layouts are 88, 110 and 160
/// bits long.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interrogation {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub mmsi_1: u32,
    pub request_1_1: InterrogationRequest,
    request_1_2: Option<InterrogationRequest>,
    station_2: Option<(u32, InterrogationRequest)>,
}

impl Default for InterrogationRequest {
    fn default() -> Self {
        Self {
            msg_type: 0,
            slot_offset: 0,
        }
    }
}

impl Interrogation {
    pub const ID: u8 = 15;
    pub const SIZE_BITS_MIN: usize = 88;
    pub const SIZE_BITS_MAX: usize = 160;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        if !matches!(len, 88 | 110 | 160) {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let request_1_2 = if len >= 110 {
            Some(InterrogationRequest {
                msg_type: bits.get(TYPE_1_2)? as u8,
                slot_offset: bits.get(OFFSET_1_2)? as u16,
            })
        } else {
            None
        };
        let station_2 = if len == 160 {
            Some((
                bits.get(MMSI_2)? as u32,
                InterrogationRequest {
                    msg_type: bits.get(TYPE_2_1)? as u8,
                    slot_offset: bits.get(OFFSET_2_1)? as u16,
                },
            ))
        } else {
            None
        };
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            mmsi_1: bits.get(MMSI_1)? as u32,
            request_1_1: InterrogationRequest {
                msg_type: bits.get(TYPE_1_1)? as u8,
                slot_offset: bits.get(OFFSET_1_1)? as u16,
            },
            request_1_2,
            station_2,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let len = if self.station_2.is_some() {
            160
        } else if self.request_1_2.is_some() {
            110
        } else {
            88
        };
        let mut bits = BitVec::zeroed(len);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(MMSI_1, self.mmsi_1 as u64);
        bits.set(TYPE_1_1, self.request_1_1.msg_type as u64);
        bits.set(OFFSET_1_1, self.request_1_1.slot_offset as u64);
        if let Some(request) = self.request_1_2 {
            bits.set(TYPE_1_2, request.msg_type as u64);
            bits.set(OFFSET_1_2, request.slot_offset as u64);
        }
        if let Some((mmsi, request)) = self.station_2 {
            bits.set(MMSI_2, mmsi as u64);
            bits.set(TYPE_2_1, request.msg_type as u64);
            bits.set(OFFSET_2_1, request.slot_offset as u64);
        }
        bits
    }

    pub fn request_1_2(&self) -> Option<InterrogationRequest> {
        self.request_1_2
    }

    pub fn set_request_1_2(&mut self, request: Option<InterrogationRequest>) -> Result<(), Error> {
        if request.is_none() && self.station_2.is_some() {
            return Err(Error::ValueRange(
                "the 160 bit layout has no form without a second request for station 1".to_string(),
            ));
        }
        self.request_1_2 = request;
        Ok(())
    }

    pub fn station_2(&self) -> Option<(u32, InterrogationRequest)> {
        self.station_2
    }

    pub fn set_station_2(&mut self, station: Option<(u32, InterrogationRequest)>) -> Result<(), Error> {
        if station.is_some() && self.request_1_2.is_none() {
            return Err(Error::ValueRange(
                "a second station requires the second request slot for station 1".to_string(),
            ));
        }
        self.station_2 = station;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_short_form() {
        let mut m = Interrogation::default();
        m.mmsi = 3669987;
        m.mmsi_1 = 367014320;
        m.request_1_1 = InterrogationRequest {
            msg_type: 3,
            slot_offset: 516,
        };
        let bits = m.to_bits();
        assert_eq!(bits.len(), 88);
        assert_eq!(Interrogation::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_roundtrip_two_stations() {
        let mut m = Interrogation::default();
        m.mmsi = 3669987;
        m.mmsi_1 = 367014320;
        m.request_1_1 = InterrogationRequest {
            msg_type: 5,
            slot_offset: 0,
        };
        m.set_request_1_2(Some(InterrogationRequest {
            msg_type: 24,
            slot_offset: 200,
        }))
        .unwrap();
        m.set_station_2(Some((
            338097344,
            InterrogationRequest {
                msg_type: 18,
                slot_offset: 0,
            },
        )))
        .unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 160);
        assert_eq!(Interrogation::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_second_station_requires_second_request() {
        let mut m = Interrogation::default();
        let station = (338097344, InterrogationRequest::default());
        assert!(m.set_station_2(Some(station)).is_err());

        m.set_request_1_2(Some(InterrogationRequest::default())).unwrap();
        m.set_station_2(Some(station)).unwrap();
        assert!(m.set_request_1_2(None).is_err());

        let bits = m.to_bits();
        assert_eq!(bits.len(), 160);
        assert_eq!(Interrogation::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_invalid_lengths() {
        for len in [87usize, 89, 120, 161] {
            assert!(matches!(
                Interrogation::from_bits(&BitVec::zeroed(len)),
                Err(Error::SizeMismatch { .. })
            ));
        }
    }
}
