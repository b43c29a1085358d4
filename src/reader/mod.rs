//! Character readers over byte sources.
//!
//! This module provides the [CharReader] trait, its UTF-8 implementation
//! [Utf8CharReader], the [Utf8ReaderBuilder] to configure a reader for a
//! file, and the [Chars] iterator adapter.

pub mod builder;
pub mod decoder;
pub mod read_error;
pub mod utf8_char_reader;

pub use builder::{FileCharReader, ReadStrategy, Utf8ReaderBuilder};
pub use read_error::ReadError;
pub use utf8_char_reader::Utf8CharReader;

// =#========================================================================#=
// CHAR READER (Trait)
// =#========================================================================T=
/// Sequential, read-only, character-at-a-time access to a stream.
///
/// A reader is not meant to be shared between threads; all mutating
/// operations take `&mut self`.
pub trait CharReader {
    /// Reads the next character, advancing the position by its encoded length.
    ///
    /// # Errors
    /// * [ReadError::EndOfStream] - No more bytes, either because
    ///   [is_eof()](Self::is_eof) was already `true` (nothing is consumed then)
    ///   or because the source ended in the middle of a character
    /// * [ReadError::InvalidEncoding] - The bytes cannot form a valid character
    fn read_next_char(&mut self) -> Result<char, ReadError>;

    /// Returns whether the end of the stream has been reached.
    ///
    /// When `true`, the next [read_next_char()](Self::read_next_char) is
    /// guaranteed to fail with [ReadError::EndOfStream].
    fn is_eof(&self) -> bool;

    /// Moves back to the first byte of the stream and clears the
    /// end-of-stream flag. On a closed reader this only sets the flag.
    fn reset_position_to_start(&mut self);

    /// Releases the underlying source. Repeated calls are no-ops.
    fn close(&mut self);

    /// Returns an iterator over the remaining characters.
    ///
    /// The iterator ends at the end of the stream. An
    /// [InvalidEncoding](ReadError::InvalidEncoding) error is yielded once,
    /// after which the iterator ends as well.
    ///
    /// # Example
    /// ```
    /// use utf8_char_reader::{CharReader, Utf8CharReader};
    ///
    /// let mut reader = Utf8CharReader::from_str("kea");
    /// let word: Result<String, _> = reader.chars().collect();
    /// assert_eq!(word.unwrap(), "kea");
    /// ```
    fn chars(&mut self) -> Chars<'_, Self>
    where
        Self: Sized,
    {
        Chars {
            reader: self,
            done: false,
        }
    }
}

// =#========================================================================#=
// CHARS ITERATOR
// =#========================================================================$=
/// Iterator over the characters of a [CharReader], created by
/// [CharReader::chars].
pub struct Chars<'a, R: CharReader> {
    reader: &'a mut R,
    done: bool,
}

impl<R: CharReader> Iterator for Chars<'_, R> {
    type Item = Result<char, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_next_char() {
            Ok(ch) => Some(Ok(ch)),
            Err(err) if err.is_end_of_stream() => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
