use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::ais::values;
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);
const CHANNEL_A: Field = Field::new(40, 12);
const CHANNEL_B: Field = Field::new(52, 12);
const TXRX_MODE: Field = Field::new(64, 4);
const POWER: Field = Field::new(68, 1);
const NE_LON: Field = Field::new(69, 18);
const NE_LAT: Field = Field::new(87, 17);
const SW_LON: Field = Field::new(104, 18);
const SW_LAT: Field = Field::new(122, 17);
const ADDRESSED: Field = Field::new(139, 1);
const BAND_A: Field = Field::new(140, 1);
const BAND_B: Field = Field::new(141, 1);
const ZONE_SIZE: Field = Field::new(142, 3);

/// Channel management, AIS type 22. The four corner fields double as two
/// destination MMSIs when the message is addressed, so they are kept raw
/// and interpreted on access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelManagement {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub channel_a: u16,
    pub channel_b: u16,
    pub txrx_mode: u8,
    pub power: bool,
    ne_lon_raw: u32,
    ne_lat_raw: u32,
    sw_lon_raw: u32,
    sw_lat_raw: u32,
    pub addressed: bool,
    pub band_a: bool,
    pub band_b: bool,
    pub zone_size: u8,
}

impl Default for ChannelManagement {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            channel_a: 0,
            channel_b: 0,
            txrx_mode: 0,
            power: false,
            ne_lon_raw: 0,
            ne_lat_raw: 0,
            sw_lon_raw: 0,
            sw_lat_raw: 0,
            addressed: false,
            band_a: false,
            band_b: false,
            zone_size: 0,
        }
    }
}

fn sign_extend(raw: u32, width: usize) -> i32 {
    let shift = 32 - width;
    ((raw << shift) as i32) >> shift
}

impl ChannelManagement {
    pub const ID: u8 = 22;
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
            channel_a: bits.get(CHANNEL_A)? as u16,
            channel_b: bits.get(CHANNEL_B)? as u16,
            txrx_mode: bits.get(TXRX_MODE)? as u8,
            power: bits.get(POWER)? == 1,
            ne_lon_raw: bits.get(NE_LON)? as u32,
            ne_lat_raw: bits.get(NE_LAT)? as u32,
            sw_lon_raw: bits.get(SW_LON)? as u32,
            sw_lat_raw: bits.get(SW_LAT)? as u32,
            addressed: bits.get(ADDRESSED)? == 1,
            band_a: bits.get(BAND_A)? == 1,
            band_b: bits.get(BAND_B)? == 1,
            zone_size: bits.get(ZONE_SIZE)? as u8,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let mut bits = BitVec::zeroed(Self::SIZE_BITS);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        bits.set(CHANNEL_A, self.channel_a as u64);
        bits.set(CHANNEL_B, self.channel_b as u64);
        bits.set(TXRX_MODE, self.txrx_mode as u64);
        bits.set(POWER, self.power as u64);
        bits.set(NE_LON, self.ne_lon_raw as u64);
        bits.set(NE_LAT, self.ne_lat_raw as u64);
        bits.set(SW_LON, self.sw_lon_raw as u64);
        bits.set(SW_LAT, self.sw_lat_raw as u64);
        bits.set(ADDRESSED, self.addressed as u64);
        bits.set(BAND_A, self.band_a as u64);
        bits.set(BAND_B, self.band_b as u64);
        bits.set(ZONE_SIZE, self.zone_size as u64);
        bits
    }

    /// North-east corner of the zone in degrees, when broadcast.
    pub fn ne_corner(&self) -> Option<(f64, f64)> {
        if self.addressed {
            return None;
        }
        let lon = values::lon_from_raw_short(sign_extend(self.ne_lon_raw, NE_LON.width))?;
        let lat = values::lat_from_raw_short(sign_extend(self.ne_lat_raw, NE_LAT.width))?;
        Some((lon, lat))
    }

    pub fn set_ne_corner(&mut self, lon: f64, lat: f64) -> Result<(), Error> {
        let lon_raw = values::lon_to_raw_short(lon)?;
        let lat_raw = values::lat_to_raw_short(lat)?;
        self.ne_lon_raw = (lon_raw as u32) & ((1 << NE_LON.width) - 1);
        self.ne_lat_raw = (lat_raw as u32) & ((1 << NE_LAT.width) - 1);
        self.addressed = false;
        Ok(())
    }

    /// South-west corner of the zone in degrees, when broadcast.
    pub fn sw_corner(&self) -> Option<(f64, f64)> {
        if self.addressed {
            return None;
        }
        let lon = values::lon_from_raw_short(sign_extend(self.sw_lon_raw, SW_LON.width))?;
        let lat = values::lat_from_raw_short(sign_extend(self.sw_lat_raw, SW_LAT.width))?;
        Some((lon, lat))
    }

    pub fn set_sw_corner(&mut self, lon: f64, lat: f64) -> Result<(), Error> {
        let lon_raw = values::lon_to_raw_short(lon)?;
        let lat_raw = values::lat_to_raw_short(lat)?;
        self.sw_lon_raw = (lon_raw as u32) & ((1 << SW_LON.width) - 1);
        self.sw_lat_raw = (lat_raw as u32) & ((1 << SW_LAT.width) - 1);
        self.addressed = false;
        Ok(())
    }

    /// First destination MMSI, when addressed. It spans the NE corner
    /// fields, left aligned.
    pub fn dest_mmsi_1(&self) -> Option<u32> {
        if !self.addressed {
            return None;
        }
        Some((self.ne_lon_raw << 12) | (self.ne_lat_raw >> 5))
    }

    pub fn set_dest_mmsi_1(&mut self, mmsi: u32) {
        self.ne_lon_raw = mmsi >> 12;
        self.ne_lat_raw = (mmsi & 0xfff) << 5;
        self.addressed = true;
    }

    /// Second destination MMSI, when addressed.
    pub fn dest_mmsi_2(&self) -> Option<u32> {
        if !self.addressed {
            return None;
        }
        Some((self.sw_lon_raw << 12) | (self.sw_lat_raw >> 5))
    }

    pub fn set_dest_mmsi_2(&mut self, mmsi: u32) {
        self.sw_lon_raw = mmsi >> 12;
        self.sw_lat_raw = (mmsi & 0xfff) << 5;
        self.addressed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_broadcast_roundtrip() {
        let mut m = ChannelManagement::default();
        m.mmsi = 3160097;
        m.channel_a = 2087;
        m.channel_b = 2088;
        m.txrx_mode = 0;
        m.set_ne_corner(-7.1, 55.4).unwrap();
        m.set_sw_corner(-9.8, 53.2).unwrap();
        m.zone_size = 4;

        let bits = m.to_bits();
        assert_eq!(bits.len(), 168);
        let back = ChannelManagement::from_bits(&bits).unwrap();
        assert_eq!(back, m);
        let (lon, lat) = back.ne_corner().unwrap();
        assert_abs_diff_eq!(lon, -7.1, epsilon = 1e-3);
        assert_abs_diff_eq!(lat, 55.4, epsilon = 1e-3);
        assert!(back.dest_mmsi_1().is_none());
    }

    #[test]
    fn test_addressed_roundtrip() {
        let mut m = ChannelManagement::default();
        m.mmsi = 3160097;
        m.channel_a = 2087;
        m.channel_b = 2088;
        m.set_dest_mmsi_1(244010001);
        m.set_dest_mmsi_2(367004370);

        let back = ChannelManagement::from_bits(&m.to_bits()).unwrap();
        assert!(back.addressed);
        assert_eq!(back.dest_mmsi_1(), Some(244010001));
        assert_eq!(back.dest_mmsi_2(), Some(367004370));
        assert!(back.ne_corner().is_none());
        assert!(back.sw_corner().is_none());
    }

    #[test]
    fn test_wrong_number_of_bits() {
        assert!(matches!(
            ChannelManagement::from_bits(&BitVec::zeroed(167)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
