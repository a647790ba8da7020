use thiserror::Error;

/// Errors reported by the sentence and message codecs.
///
/// Every recoverable condition surfaces as a distinct variant; the library
/// never retries internally and never aborts the process. Retry and
/// partial-message timeout policy belong to the calling transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed envelope or payload: missing start token, short checksum
    /// window, wrong field count for a known tag, invalid armor character.
    #[error("format error: {0}")]
    Format(String),

    /// The checksum trailing the sentence does not match the one computed
    /// over the span between the start token and the `*` delimiter.
    #[error("checksum mismatch: expected {expected:02X}, computed {computed:02X}")]
    Checksum { expected: u8, computed: u8 },

    /// The sentence tag is not in the registry.
    #[error("unknown sentence: {0}")]
    UnknownSentence(String),

    /// The AIS message type ID is not in the registry.
    #[error("unknown AIS message type: {0}")]
    UnknownMessage(u8),

    /// The bit sequence length does not match the declared size of the
    /// message type being unpacked.
    #[error("size mismatch for message type {msg_type}: expected {expected} bits, got {actual}")]
    SizeMismatch {
        msg_type: u8,
        expected: SizeConstraint,
        actual: usize,
    },

    /// A read past the end of a bit sequence.
    #[error("insufficient bits: read of {width} bits at offset {offset}, only {available} available")]
    InsufficientBits {
        offset: usize,
        width: usize,
        available: usize,
    },

    /// An application-provided value is outside the domain of a field,
    /// e.g. a negative speed or text exceeding a field's maximum length.
    #[error("value out of range: {0}")]
    ValueRange(String),
}

/// Declared size of a message type, used in size-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    Exact(usize),
    Range(usize, usize),
}

impl std::fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SizeConstraint::Exact(n) => write!(f, "{}", n),
            SizeConstraint::Range(min, max) => write!(f, "{}..={}", min, max),
        }
    }
}
