//! 6-bit ASCII armoring of AIS payloads.
//!
//! Each 6-bit group of the message bit sequence maps to one printable
//! character: values 0..=39 to `'0'..='W'`, values 40..=63 to `` '`'..='w' ``.
//! The sequence is padded on the right with zero bits up to a multiple of
//! six; the pad count (0..=5) travels separately as the sentence's fill-bits
//! field and is not part of the armored text.

use crate::ais::bits::{BitVec, Field};
use crate::errors::Error;

/// Armor a bit sequence. Returns the armored text together with the number
/// of fill bits that were appended.
pub fn encode(bits: &BitVec) -> (String, u8) {
    let fill = (6 - bits.len() % 6) % 6;
    let mut padded;
    let bits = if fill > 0 {
        padded = bits.clone();
        padded.append(0, fill);
        &padded
    } else {
        bits
    };
    let mut out = String::with_capacity(bits.len() / 6);
    for i in 0..bits.len() / 6 {
        // length is a multiple of six, the read cannot fail
        let value = bits.get(Field::new(i * 6, 6)).unwrap_or(0) as u8;
        out.push(armor_char(value));
    }
    (out, fill as u8)
}

/// Decode armored text back into the original bit sequence, trimming exactly
/// `fill_bits` padding bits from the end.
pub fn decode(text: &str, fill_bits: u8) -> Result<BitVec, Error> {
    if fill_bits > 5 {
        return Err(Error::Format(format!(
            "fill bits out of range: {}",
            fill_bits
        )));
    }
    let mut bits = BitVec::new();
    for c in text.chars() {
        bits.append(armor_value(c)? as u64, 6);
    }
    if (fill_bits as usize) > bits.len() {
        return Err(Error::Format(
            "fill bits exceed payload length".to_string(),
        ));
    }
    bits.truncate(bits.len() - fill_bits as usize);
    Ok(bits)
}

fn armor_char(value: u8) -> char {
    debug_assert!(value < 64);
    if value < 40 {
        (value + 48) as char
    } else {
        (value + 56) as char
    }
}

fn armor_value(c: char) -> Result<u8, Error> {
    match c {
        '0'..='W' => Ok(c as u8 - 48),
        '`'..='w' => Ok(c as u8 - 56),
        _ => Err(Error::Format(format!("invalid armor character '{}'", c))),
    }
}
