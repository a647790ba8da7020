use serde::Serialize;

use crate::ais::bits::{BitVec, Field};
use crate::errors::{Error, SizeConstraint};

const MESSAGE_TYPE: Field = Field::new(0, 6);
const REPEAT_INDICATOR: Field = Field::new(6, 2);
const MMSI: Field = Field::new(8, 30);

const ENTRIES_OFFSET: usize = 40;
const ENTRY_BITS: usize = 30;
const MAX_ENTRIES: usize = 4;

/// One reserved slot block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotReservation {
    pub offset: u16,
    pub slots: u8,
    /// Timeout in minutes.
    pub timeout: u8,
    pub increment: u16,
}

/// Data link management message, AIS type 20. Reserves 1 to 4 slot blocks
/// for a base station; trailing pad bits round the message to a byte
/// boundary and are kept so re-encoding reproduces the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLinkManagement {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    reservations: Vec<SlotReservation>,
    pad_bits: usize,
}

impl Default for DataLinkManagement {
    fn default() -> Self {
        Self {
            repeat_indicator: 0,
            mmsi: 0,
            reservations: vec![SlotReservation::default()],
            pad_bits: 2,
        }
    }
}

impl DataLinkManagement {
    pub const ID: u8 = 20;
    pub const SIZE_BITS_MIN: usize = 72;
    pub const SIZE_BITS_MAX: usize = 160;

    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let len = bits.len();
        let n_entries = if len >= ENTRIES_OFFSET + ENTRY_BITS {
            (len - ENTRIES_OFFSET) / ENTRY_BITS
        } else {
            0
        };
        if len < Self::SIZE_BITS_MIN || len > Self::SIZE_BITS_MAX || n_entries == 0 {
            return Err(Error::SizeMismatch {
                msg_type: Self::ID,
                expected: SizeConstraint::Range(Self::SIZE_BITS_MIN, Self::SIZE_BITS_MAX),
                actual: len,
            });
        }
        let n_entries = n_entries.min(MAX_ENTRIES);
        let mut reservations = Vec::with_capacity(n_entries);
        for i in 0..n_entries {
            let base = ENTRIES_OFFSET + i * ENTRY_BITS;
            reservations.push(SlotReservation {
                offset: bits.get(Field::new(base, 12))? as u16,
                slots: bits.get(Field::new(base + 12, 4))? as u8,
                timeout: bits.get(Field::new(base + 16, 3))? as u8,
                increment: bits.get(Field::new(base + 19, 11))? as u16,
            });
        }
        Ok(Self {
            repeat_indicator: bits.get(REPEAT_INDICATOR)? as u8,
            mmsi: bits.get(MMSI)? as u32,
            reservations,
            pad_bits: len - ENTRIES_OFFSET - n_entries * ENTRY_BITS,
        })
    }

    pub fn to_bits(&self) -> BitVec {
        let len = ENTRIES_OFFSET + self.reservations.len() * ENTRY_BITS + self.pad_bits;
        let mut bits = BitVec::zeroed(len);
        bits.set(MESSAGE_TYPE, Self::ID as u64);
        bits.set(REPEAT_INDICATOR, self.repeat_indicator as u64);
        bits.set(MMSI, self.mmsi as u64);
        for (i, r) in self.reservations.iter().enumerate() {
            let base = ENTRIES_OFFSET + i * ENTRY_BITS;
            bits.set(Field::new(base, 12), r.offset as u64);
            bits.set(Field::new(base + 12, 4), r.slots as u64);
            bits.set(Field::new(base + 16, 3), r.timeout as u64);
            bits.set(Field::new(base + 19, 11), r.increment as u64);
        }
        bits
    }

    pub fn reservations(&self) -> &[SlotReservation] {
        &self.reservations
    }

    /// Replace the reserved blocks, 1 to 4 of them.
    pub fn set_reservations(&mut self, reservations: Vec<SlotReservation>) -> Result<(), Error> {
        if reservations.is_empty() || reservations.len() > MAX_ENTRIES {
            return Err(Error::ValueRange(format!(
                "{} slot reservations, expected 1 to {}",
                reservations.len(),
                MAX_ENTRIES
            )));
        }
        self.reservations = reservations;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;

    #[test]
    fn test_parse() {
        // one reservation plus two pad bits
        let bits = armor::decode("D028rqP<QNfp000000000000000", 2).unwrap();
        assert_eq!(bits.len(), 160);
        let m = DataLinkManagement::from_bits(&bits).unwrap();
        assert_eq!(m.mmsi, 2243302);
        assert_eq!(m.reservations().len(), 4);
        assert_eq!(
            m.reservations()[0],
            SlotReservation {
                offset: 200,
                slots: 5,
                timeout: 7,
                increment: 750,
            }
        );
    }

    #[test]
    fn test_reencode_is_bit_exact() {
        let bits = armor::decode("D028rqP<QNfp000000000000000", 2).unwrap();
        let m = DataLinkManagement::from_bits(&bits).unwrap();
        let (text, fill) = armor::encode(&m.to_bits());
        assert_eq!(text, "D028rqP<QNfp000000000000000");
        assert_eq!(fill, 2);
    }

    #[test]
    fn test_roundtrip_two_entries() {
        let mut m = DataLinkManagement::default();
        m.mmsi = 3669705;
        m.set_reservations(vec![
            SlotReservation {
                offset: 1,
                slots: 2,
                timeout: 3,
                increment: 4,
            },
            SlotReservation {
                offset: 100,
                slots: 1,
                timeout: 7,
                increment: 1125,
            },
        ])
        .unwrap();
        let bits = m.to_bits();
        assert_eq!(bits.len(), 102);
        assert_eq!(DataLinkManagement::from_bits(&bits).unwrap(), m);
    }

    #[test]
    fn test_reservation_count_limits() {
        let mut m = DataLinkManagement::default();
        assert!(m.set_reservations(vec![]).is_err());
        assert!(m
            .set_reservations(vec![SlotReservation::default(); 5])
            .is_err());
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            DataLinkManagement::from_bits(&BitVec::zeroed(70)),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
