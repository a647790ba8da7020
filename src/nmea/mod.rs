//! NMEA 0183 sentence envelope: checksum, address split and the tag
//! registry mapping known sentence types to their field parsers.

pub mod ais_helper;
pub mod checksum;
pub mod dpt;
pub mod hdt;
pub mod mtw;
pub mod sentence;
pub mod vdm;

pub use dpt::Dpt;
pub use hdt::Hdt;
pub use mtw::Mtw;
pub use sentence::Sentence;
pub use vdm::{AisChannel, Vdm};

use tracing::debug;

use crate::errors::Error;

/// Parse one line, without its terminator, into a typed sentence.
pub fn parse_sentence(line: &str) -> Result<Sentence, Error> {
    let start = match line.chars().next() {
        Some(c @ ('$' | '!')) => c,
        _ => {
            return Err(Error::Format(format!(
                "sentence does not start with '$' or '!': '{}'",
                line
            )));
        }
    };
    let body = &line[1..];
    let star = body
        .rfind('*')
        .ok_or_else(|| Error::Format(format!("no checksum delimiter in '{}'", line)))?;
    let (span, trailer) = body.split_at(star);
    let expected = checksum::from_hex(&trailer[1..])?;
    let computed = checksum::compute(span.as_bytes());
    if computed != expected {
        return Err(Error::Checksum { expected, computed });
    }

    let mut fields = span.split(',');
    // split always yields at least one item
    let address = fields.next().unwrap_or_default();
    let fields: Vec<&str> = fields.collect();
    let (talker, tag) = parse_address(address)?;
    debug!("parsed sentence address {}{}", talker, tag);

    let is_carrier = matches!(tag, "VDM" | "VDO");
    if is_carrier != (start == '!') {
        return Err(Error::Format(format!(
            "start token '{}' does not match sentence {}",
            start, tag
        )));
    }
    match tag {
        "VDM" => Vdm::from_fields(talker, &fields).map(Sentence::Vdm),
        "VDO" => Vdm::from_fields(talker, &fields).map(Sentence::Vdo),
        "MTW" => Mtw::from_fields(talker, &fields).map(Sentence::Mtw),
        "DPT" => Dpt::from_fields(talker, &fields).map(Sentence::Dpt),
        "HDT" => Hdt::from_fields(talker, &fields).map(Sentence::Hdt),
        _ => Err(Error::UnknownSentence(format!("{}{}", talker, tag))),
    }
}

/// Split the address field into talker and tag. A leading `P` marks a
/// proprietary sentence whose whole address acts as the tag.
fn parse_address(address: &str) -> Result<(&str, &str), Error> {
    if address.starts_with('P') {
        return Ok(("", address));
    }
    if address.len() != 5 {
        return Err(Error::Format(format!(
            "address '{}' is not talker plus tag",
            address
        )));
    }
    Ok(address.split_at(2))
}

/// Render a sentence as one line, without a terminator.
pub fn render_sentence(sentence: &Sentence) -> String {
    let mut span = String::new();
    span.push_str(sentence.talker());
    span.push_str(sentence.tag());
    for field in sentence.fields() {
        span.push(',');
        span.push_str(&field);
    }
    let sum = checksum::compute(span.as_bytes());
    format!(
        "{}{}*{}",
        sentence.start_token(),
        span,
        checksum::to_hex(sum)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vdm() {
        let s = parse_sentence("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").unwrap();
        let vdm = s.as_vdm().unwrap();
        assert_eq!(vdm.talker, "AI");
        assert_eq!(vdm.n_fragments, 1);
        assert_eq!(vdm.fragment, 1);
        assert_eq!(vdm.sequence_id, None);
        assert_eq!(vdm.channel, Some(AisChannel::B));
        assert_eq!(vdm.payload, "177KQJ5000G?tO`K>RA1wUbN0TKH");
        assert_eq!(vdm.fill_bits, 0);
    }

    #[test]
    fn test_parse_mtw() {
        let s = parse_sentence("$IIMTW,22.5,C*16").unwrap();
        match s {
            Sentence::Mtw(m) => assert_eq!(m.temperature, Some(22.5)),
            other => panic!("parsed as {:?}", other),
        }
    }

    #[test]
    fn test_checksum_mismatch_carries_both_values() {
        let err = parse_sentence("$IIMTW,22.6,C*16").unwrap_err();
        assert_eq!(
            err,
            Error::Checksum {
                expected: 0x16,
                computed: 0x15,
            }
        );
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            parse_sentence("$GPZZZ,1*50").unwrap_err(),
            Error::UnknownSentence("GPZZZ".to_string())
        );
    }

    #[test]
    fn test_proprietary_address() {
        // proprietary sentences have no separate talker id
        let err = parse_sentence("$PGRME,15.0,M,45.0,M,25.0,M*1C").unwrap_err();
        assert_eq!(err, Error::UnknownSentence("PGRME".to_string()));
    }

    #[test]
    fn test_malformed_envelopes() {
        assert!(matches!(
            parse_sentence("AIVDM,1,1,,B,177KQJ,0*5C"),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            parse_sentence("$IIMTW,22.5,C"),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            parse_sentence("$IIMTW,22.5,C*1"),
            Err(Error::Format(_))
        ));
        assert!(matches!(parse_sentence(""), Err(Error::Format(_))));
        // four character address
        assert!(matches!(
            parse_sentence("$IMTW,22.5,C*5F"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_start_token_must_match_tag() {
        assert!(matches!(
            parse_sentence("$AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_render_default_vdm() {
        let line = render_sentence(&Sentence::Vdm(Vdm::default()));
        assert_eq!(line, "!AIVDM,0,0,,,,0*67");
    }

    #[test]
    fn test_parse_render_roundtrip() {
        for line in [
            "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C",
            "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E",
            "!AIVDM,2,2,3,B,1@0000000000000,2*55",
            "$IIMTW,22.5,C*16",
        ] {
            let sentence = parse_sentence(line).unwrap();
            assert_eq!(render_sentence(&sentence), line);
        }
    }
}
