use serde::Serialize;

use super::dpt::Dpt;
use super::hdt::Hdt;
use super::mtw::Mtw;
use super::vdm::Vdm;

/// Any parsed NMEA sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sentence {
    /// AIS payload received from another station.
    Vdm(Vdm),
    /// AIS payload reporting own ship.
    Vdo(Vdm),
    Mtw(Mtw),
    Dpt(Dpt),
    Hdt(Hdt),
}

impl Sentence {
    pub fn tag(&self) -> &'static str {
        match self {
            Sentence::Vdm(_) => "VDM",
            Sentence::Vdo(_) => "VDO",
            Sentence::Mtw(_) => "MTW",
            Sentence::Dpt(_) => "DPT",
            Sentence::Hdt(_) => "HDT",
        }
    }

    /// `!` marks carriers of armored binary payload, `$` plain text.
    pub fn start_token(&self) -> char {
        match self {
            Sentence::Vdm(_) | Sentence::Vdo(_) => '!',
            _ => '$',
        }
    }

    pub fn talker(&self) -> &str {
        match self {
            Sentence::Vdm(v) | Sentence::Vdo(v) => &v.talker,
            Sentence::Mtw(m) => &m.talker,
            Sentence::Dpt(d) => &d.talker,
            Sentence::Hdt(h) => &h.talker,
        }
    }

    pub fn fields(&self) -> Vec<String> {
        match self {
            Sentence::Vdm(v) | Sentence::Vdo(v) => v.fields(),
            Sentence::Mtw(m) => m.fields(),
            Sentence::Dpt(d) => d.fields(),
            Sentence::Hdt(h) => h.fields(),
        }
    }

    pub fn as_vdm(&self) -> Option<&Vdm> {
        match self {
            Sentence::Vdm(v) | Sentence::Vdo(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_tokens() {
        assert_eq!(Sentence::Vdm(Vdm::default()).start_token(), '!');
        assert_eq!(Sentence::Vdo(Vdm::default()).start_token(), '!');
        assert_eq!(Sentence::Mtw(Mtw::default()).start_token(), '$');
    }

    #[test]
    fn test_vdm_accessor_covers_own_ship() {
        assert!(Sentence::Vdo(Vdm::default()).as_vdm().is_some());
        assert!(Sentence::Dpt(Dpt::default()).as_vdm().is_none());
    }
}
