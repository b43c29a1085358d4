//! Error type for character reading.
//!
//! This module provides [ReadError], returned by
//! [read_next_char()](crate::reader::CharReader::read_next_char).

// =#========================================================================#=
// READ ERROR
// =#========================================================================$=
/// Errors that can occur while reading the next character.
///
/// A read either yields exactly one character or fails with one of these;
/// invalid bytes are never skipped silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// No further bytes are available, either because the reader was already
    /// at the end or because the source ended in the middle of a sequence.
    ///
    /// This is the normal termination condition of a read loop.
    #[error("end of stream reached at position {position}")]
    EndOfStream {
        /// Byte offset at which the source ran out.
        position: usize,
    },

    /// The bytes read cannot form a valid UTF-8 character.
    #[error("invalid UTF-8 byte sequence {bytes:02X?} at position {position}")]
    InvalidEncoding {
        /// The offending bytes (at most 4).
        bytes: Vec<u8>,
        /// Byte offset where the offending sequence starts.
        position: usize,
    },
}

impl ReadError {
    /// Returns `true` for [ReadError::EndOfStream].
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadError::EndOfStream { .. })
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        match self {
            ReadError::EndOfStream { position } | ReadError::InvalidEncoding { position, .. } => {
                *position
            }
        }
    }
}
