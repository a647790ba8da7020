use tracing::debug;

use super::sentence::Sentence;
use super::vdm::{AisChannel, Vdm};
use crate::errors::Error;

/// Extract the armored text and fill bits of each carrier sentence, in the
/// order given. Fails if any sentence is not a VDM or VDO.
pub fn collect_payload(sentences: &[Sentence]) -> Result<Vec<(String, u8)>, Error> {
    sentences
        .iter()
        .map(|s| match s.as_vdm() {
            Some(vdm) => Ok((vdm.payload.clone(), vdm.fill_bits)),
            None => Err(Error::Format(format!(
                "sentence {} does not carry AIS payload",
                s.tag()
            ))),
        })
        .collect()
}

/// Concatenate carrier sentence payloads into one armored text. The input
/// order is kept as-is; the caller presents fragments in transmission
/// order. Only the last fragment's fill bits apply, intermediate fragments
/// carry zero by protocol convention.
pub fn reassemble(sentences: &[Sentence]) -> Result<(String, u8), Error> {
    let fragments = collect_payload(sentences)?;
    let fill_bits = match fragments.last() {
        Some((_, fill)) => *fill,
        None => return Err(Error::Format("no payload fragments".to_string())),
    };
    let text: String = fragments.into_iter().map(|(t, _)| t).collect();
    debug!("reassembled {} fragment(s), {} chars", sentences.len(), text.len());
    Ok((text, fill_bits))
}

/// Wrap armored payload fragments in VDM sentences. The sequence ID should
/// be given for multi-fragment payloads so receivers can group them.
pub fn make_vdms(
    fragments: &[(String, u8)],
    sequence_id: Option<u32>,
    channel: Option<AisChannel>,
) -> Vec<Sentence> {
    let n_fragments = fragments.len() as u8;
    fragments
        .iter()
        .enumerate()
        .map(|(i, (payload, fill_bits))| {
            Sentence::Vdm(Vdm {
                talker: "AI".to_string(),
                n_fragments,
                fragment: i as u8 + 1,
                sequence_id,
                channel,
                payload: payload.clone(),
                fill_bits: *fill_bits,
            })
        })
        .collect()
}
