use crate::errors::Error;

/// XOR of all bytes between the start token and the `*` delimiter.
pub fn compute(span: &[u8]) -> u8 {
    span.iter().fold(0, |acc, b| acc ^ b)
}

/// Render a checksum as two uppercase hex digits.
pub fn to_hex(sum: u8) -> String {
    format!("{:02X}", sum)
}

/// Parse the two hex digits trailing the `*` delimiter.
pub fn from_hex(digits: &str) -> Result<u8, Error> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Format(format!(
            "checksum '{}' is not two hex digits",
            digits
        )));
    }
    u8::from_str_radix(digits, 16)
        .map_err(|_| Error::Format(format!("checksum '{}' is not two hex digits", digits)))
}
