//! The incremental UTF-8 character reader.
//!
//! This module provides [Utf8CharReader], which decodes one character per
//! request from any [ByteSource], pulling bytes one at a time.

use crate::reader::CharReader;
use crate::reader::decoder::{DecodeStep, Utf8Accumulator};
use crate::reader::read_error::ReadError;
use crate::source::{BufferedByteSource, ByteSource, InMemoryByteSource};
use std::path::Path;

// =#========================================================================#=
// UTF-8 CHAR READER
// =#========================================================================$=
/// Reads UTF-8 encoded characters one at a time from a [ByteSource].
///
/// Each call to [read_next_char()](CharReader::read_next_char) consumes
/// exactly the bytes of one character, so the source is never loaded
/// beyond what the source itself buffers. The end-of-stream flag is
/// recomputed after every successful decode from the source position.
///
/// The source is released when the reader is [closed](CharReader::close)
/// or dropped, whichever happens first.
///
/// # States
/// * Ready: [is_eof()](CharReader::is_eof) is `false`
/// * Exhausted: the last decode consumed the final byte; further reads
///   fail with [ReadError::EndOfStream]
/// * Closed: the source is released; reads fail with
///   [ReadError::EndOfStream] and no reset can revive the reader
///
/// # Example
/// ```
/// use utf8_char_reader::{CharReader, Utf8CharReader};
///
/// let mut reader = Utf8CharReader::from_str("né");
/// assert_eq!(reader.read_next_char(), Ok('n'));
/// assert_eq!(reader.read_next_char(), Ok('é'));
/// assert!(reader.is_eof());
///
/// reader.reset_position_to_start();
/// assert_eq!(reader.read_next_char(), Ok('n'));
/// ```
pub struct Utf8CharReader<S: ByteSource> {
    /// The byte source, `None` once closed
    source: Option<S>,
    /// Whether the previous decode reached the end of the source
    is_eof: bool,
}

impl Utf8CharReader<InMemoryByteSource> {
    /// Creates a reader over a copy of the given string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_str(input))
    }

    /// Creates a reader over a copy of the given bytes.
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a reader over the whole file, loaded into memory upfront.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn from_file_in_memory<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl Utf8CharReader<BufferedByteSource> {
    /// Creates a reader streaming the file through a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file_buffered<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(BufferedByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> Utf8CharReader<S> {
    /// Creates a new reader bound to `source`, starting at the source's
    /// current position.
    ///
    /// # Arguments
    /// * `source` - The byte source to decode; pass `&mut source` to keep
    ///   ownership of it. The borrowed source is still
    ///   [released](ByteSource::release) when the reader is closed or
    ///   dropped, so an [InMemoryByteSource] is left empty afterwards.
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            is_eof: false,
        }
    }

    /// Returns the current byte position, or 0 once closed.
    pub fn position(&self) -> usize {
        self.source.as_ref().map_or(0, |source| source.position())
    }

    /// Returns `true` once the reader has been closed.
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }
}

impl<S: ByteSource> CharReader for Utf8CharReader<S> {
    fn read_next_char(&mut self) -> Result<char, ReadError> {
        if self.is_eof {
            return Err(ReadError::EndOfStream {
                position: self.position(),
            });
        }
        let Some(source) = self.source.as_mut() else {
            self.is_eof = true;
            return Err(ReadError::EndOfStream { position: 0 });
        };

        let start = source.position();
        let mut acc = Utf8Accumulator::new();
        loop {
            let Some(byte) = source.read_byte() else {
                self.is_eof = true;
                if !acc.is_empty() {
                    log::debug!(
                        "Source ended inside a sequence {:02X?} at position {start}",
                        acc.as_bytes()
                    );
                }
                return Err(ReadError::EndOfStream {
                    position: source.position(),
                });
            };

            match acc.push(byte) {
                DecodeStep::Complete(ch) => {
                    self.is_eof = source.is_eof();
                    log::trace!("Decoded {ch:?} ({} bytes) at position {start}", acc.len());
                    return Ok(ch);
                }
                DecodeStep::Incomplete => {}
                DecodeStep::Invalid => {
                    return Err(ReadError::InvalidEncoding {
                        bytes: acc.as_bytes().to_vec(),
                        position: start,
                    });
                }
            }
        }
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.is_eof
    }

    fn reset_position_to_start(&mut self) {
        match self.source.as_mut() {
            Some(source) => {
                source.set_position(0);
                // A source that failed to seek is treated as exhausted
                self.is_eof = source.position() != 0;
                if self.is_eof {
                    log::warn!("Could not reset reader, still at byte {}", source.position());
                } else {
                    log::debug!("Reset reader to start");
                }
            }
            None => self.is_eof = true,
        }
    }

    fn close(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
            log::debug!("Closed reader");
        }
        self.is_eof = true;
    }
}

impl<S: ByteSource> Drop for Utf8CharReader<S> {
    fn drop(&mut self) {
        self.close();
    }
}
