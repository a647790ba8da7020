//! AIS payload codec: six-bit armoring, the bit-level field engine and the
//! per-type message layouts.

pub mod armor;
pub mod bits;
pub mod message;
pub mod message_01;
pub mod message_04;
pub mod message_05;
pub mod message_06;
pub mod message_07;
pub mod message_08;
pub mod message_09;
pub mod message_10;
pub mod message_12;
pub mod message_14;
pub mod message_15;
pub mod message_16;
pub mod message_17;
pub mod message_18;
pub mod message_19;
pub mod message_20;
pub mod message_21;
pub mod message_22;
pub mod message_23;
pub mod message_24;
pub mod message_25;
pub mod message_26;
pub mod message_27;
pub mod values;

// Re-export commonly used types
pub use bits::{BitVec, Field};
pub use message::Message;
pub use message_01::PositionReport;
pub use message_04::BaseStationReport;
pub use message_05::StaticAndVoyageData;
pub use message_14::SafetyBroadcast;
pub use message_18::StandardClassBReport;
pub use message_19::ExtendedClassBReport;
pub use message_21::AidToNavigationReport;
pub use message_24::StaticDataReport;
pub use message_27::LongRangePosition;
pub use values::NavigationStatus;

use tracing::debug;

use crate::errors::Error;

/// Longest armored fragment emitted per sentence. Keeps the rendered
/// sentence within the 82 character NMEA line limit.
const FRAGMENT_CHARS: usize = 56;

/// Decode a message from its unarmored bits.
pub fn decode_message(bits: &BitVec) -> Result<Message, Error> {
    Message::from_bits(bits)
}

/// Encode a message into its wire bit sequence.
pub fn encode_message(message: &Message) -> BitVec {
    message.to_bits()
}

/// Decode a message from reassembled payload fragments, each an armored
/// text with its fill bit count. Fragments must be given in transmission
/// order; only the fill bits of the last fragment apply.
pub fn decode_payload(fragments: &[(String, u8)]) -> Result<Message, Error> {
    let (text, fill_bits) = match fragments {
        [] => return Err(Error::Format("no payload fragments".to_string())),
        [init @ .., (last_text, fill)] => {
            let mut text = String::with_capacity((init.len() + 1) * FRAGMENT_CHARS);
            for (t, _) in init {
                text.push_str(t);
            }
            text.push_str(last_text);
            (text, *fill)
        }
    };
    let bits = armor::decode(&text, fill_bits)?;
    debug!("decoded {} armored chars into {} bits", text.len(), bits.len());
    Message::from_bits(&bits)
}

/// Encode a message into armored payload fragments ready to be wrapped in
/// VDM or VDO sentences. All fragments except the last carry zero fill
/// bits.
pub fn encode_payload(message: &Message) -> Vec<(String, u8)> {
    let (text, fill_bits) = armor::encode(&message.to_bits());
    let mut fragments: Vec<(String, u8)> = text
        .as_bytes()
        .chunks(FRAGMENT_CHARS)
        .map(|chunk| {
            // armored text is pure ASCII
            (String::from_utf8_lossy(chunk).into_owned(), 0u8)
        })
        .collect();
    if let Some(last) = fragments.last_mut() {
        last.1 = fill_bits;
    } else {
        fragments.push((String::new(), fill_bits));
    }
    debug!(
        "encoded type {} message into {} fragment(s)",
        message.type_id(),
        fragments.len()
    );
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    const PART_1: &str = "55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53";
    const PART_2: &str = "1@0000000000000";

    #[test]
    fn test_decode_single_fragment() {
        let msg =
            decode_payload(&[("133m@ogP00PD;88MD5MTDww@2D7k".to_string(), 0)]).unwrap();
        assert_eq!(msg.type_id(), 1);
        assert_eq!(msg.as_position_report().unwrap().mmsi, 205344990);
    }

    #[test]
    fn test_decode_two_fragments() {
        let msg = decode_payload(&[(PART_1.to_string(), 0), (PART_2.to_string(), 2)]).unwrap();
        let data = msg.as_static_and_voyage_data().unwrap();
        assert_eq!(data.mmsi, 369190000);
        assert_eq!(data.shipname(), "MT.MITCHELL");
    }

    #[test]
    fn test_encode_splits_long_payloads() {
        let msg = decode_payload(&[(PART_1.to_string(), 0), (PART_2.to_string(), 2)]).unwrap();
        let fragments = encode_payload(&msg);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], (PART_1.to_string(), 0));
        assert_eq!(fragments[1], (PART_2.to_string(), 2));
    }

    #[test]
    fn test_encode_single_fragment() {
        let msg = decode_payload(&[("133m@ogP00PD;88MD5MTDww@2D7k".to_string(), 0)]).unwrap();
        let fragments = encode_payload(&msg);
        assert_eq!(
            fragments,
            vec![("133m@ogP00PD;88MD5MTDww@2D7k".to_string(), 0)]
        );
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode_payload(&[]), Err(Error::Format(_))));
    }
}
