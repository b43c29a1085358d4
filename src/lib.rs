//! Incremental, character-at-a-time reading of UTF-8 encoded data.
//!
//! This crate decodes UTF-8 one character per request directly from a byte
//! source, without loading the whole source first. Core functionality provided:
//! - [CharReader]: read the next character, query end-of-stream, rewind to
//!   the start, close.
//! - [Utf8CharReader]: strict incremental decoder over any [ByteSource].
//!   Bytes are accumulated one at a time; an incomplete sequence waits for
//!   more bytes, an invalid one fails immediately (never more than 4 bytes).
//! - Byte sources:
//!   - [InMemoryByteSource]: owns the full data
//!   - [BufferedByteSource]: streams a file (or any `Read + Seek`)
//! - [Utf8ReaderBuilder]: choose how a file is read (buffered, in memory,
//!   or automatically by file size).
//!
//! Resources are released deterministically: closing a reader releases its
//! source, and dropping a reader closes it.
//!
//! # Usage patterns
//!
//! Read a string:
//! ```
//! use utf8_char_reader::{CharReader, ReadError, Utf8CharReader};
//!
//! let mut reader = Utf8CharReader::from_str("Tūī");
//! assert_eq!(reader.read_next_char(), Ok('T'));
//! assert_eq!(reader.read_next_char(), Ok('ū'));
//! assert_eq!(reader.read_next_char(), Ok('ī'));
//! assert!(reader.is_eof());
//! assert!(matches!(reader.read_next_char(), Err(ReadError::EndOfStream { .. })));
//! ```
//!
//! Read a file with default settings:
//! ```no_run
//! use utf8_char_reader::{CharReader, open_file};
//!
//! let mut reader = open_file("birds.txt")?;
//! let mut count = 0;
//! for ch in reader.chars() {
//!     ch?;
//!     count += 1;
//! }
//! println!("{count} characters");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod reader;
pub mod source;

pub use reader::{
    CharReader, Chars, FileCharReader, ReadError, ReadStrategy, Utf8CharReader, Utf8ReaderBuilder,
};
pub use source::{BufferedByteSource, ByteSource, InMemoryByteSource};

use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Opens a character reader for the file at `path` using default settings
/// (read strategy chosen by file size).
///
/// See [Utf8ReaderBuilder] for configuration.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn open_file<P: AsRef<Path>>(path: P) -> std::io::Result<FileCharReader> {
    Utf8ReaderBuilder::for_file(path).build()
}
