//! Incremental strict UTF-8 decoding, one byte at a time.
//!
//! [Utf8Accumulator] collects the raw bytes of a single character and, after
//! every byte, reports whether they form a complete character, a valid but
//! incomplete prefix, or a sequence that can never become valid.

/// Maximum number of bytes in a UTF-8 encoded character.
pub const MAX_SEQUENCE_LEN: usize = 4;

// =#========================================================================#=
// DECODE STEP
// =#========================================================================€=
/// Outcome of pushing one byte into a [Utf8Accumulator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// The accumulated bytes encode exactly this character.
    Complete(char),
    /// The accumulated bytes are a valid prefix; more bytes are required.
    Incomplete,
    /// The accumulated bytes are not a prefix of any valid UTF-8 character
    /// (stray continuation byte, overlong form, surrogate, beyond U+10FFFF).
    Invalid,
}

// =#========================================================================#=
// UTF-8 ACCUMULATOR
// =#========================================================================$=
/// Accumulates the bytes of one UTF-8 encoded character.
///
/// Decoding is strict: nothing is ever replaced by U+FFFD. Since a `char` is
/// a full Unicode scalar value, four byte sequences (outside the Basic
/// Multilingual Plane) complete like any other.
///
/// # Example
/// ```
/// # use utf8_char_reader::reader::decoder::{DecodeStep, Utf8Accumulator};
/// let mut acc = Utf8Accumulator::new();
/// assert_eq!(acc.push(0xC3), DecodeStep::Incomplete);
/// assert_eq!(acc.push(0xA9), DecodeStep::Complete('é'));
///
/// let mut acc = Utf8Accumulator::new();
/// assert_eq!(acc.push(0x80), DecodeStep::Invalid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Utf8Accumulator {
    bytes: [u8; MAX_SEQUENCE_LEN],
    len: usize,
}

impl Utf8Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `byte` and attempts to decode the accumulated bytes.
    ///
    /// An accumulator holds one character only: once a push returned
    /// [DecodeStep::Complete] or [DecodeStep::Invalid], every further push
    /// returns [DecodeStep::Invalid].
    pub fn push(&mut self, byte: u8) -> DecodeStep {
        if self.len == MAX_SEQUENCE_LEN {
            return DecodeStep::Invalid;
        }
        self.bytes[self.len] = byte;
        self.len += 1;

        match std::str::from_utf8(self.as_bytes()) {
            Ok(decoded) => {
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => DecodeStep::Complete(ch),
                    _ => DecodeStep::Invalid,
                }
            }
            // No error length means the input ended inside a valid sequence
            Err(err)
                if err.valid_up_to() == 0
                    && err.error_len().is_none()
                    && self.len < MAX_SEQUENCE_LEN =>
            {
                DecodeStep::Incomplete
            }
            Err(_) => DecodeStep::Invalid,
        }
    }

    /// The bytes accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no byte has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
