//! Configuration of a character reader for a file.
//!
//! This module provides the [Utf8ReaderBuilder], which decides how a file is
//! read (streamed or loaded into memory), and [FileCharReader], the reader
//! it builds.

use crate::reader::CharReader;
use crate::reader::read_error::ReadError;
use crate::reader::utf8_char_reader::Utf8CharReader;
use crate::source::{BufferedByteSource, InMemoryByteSource};
use std::path::{Path, PathBuf};

/// File size threshold (in bytes) for automatic read strategy.
/// Files smaller than this are read into memory; larger files use buffered I/O.
pub const AUTO_IN_MEMORY_THRESHOLD: u64 = 16 * 1024 * 1024; // 16 MB

// =#========================================================================#=
// BYTE SOURCE SETTING
// =#========================================================================€=
/// Controls how the file is read.
///
/// By default, the [Utf8ReaderBuilder] uses [ReadStrategy::Automatic], which
/// picks a strategy based on file size. Use
/// [with_buffered_source()](Utf8ReaderBuilder::with_buffered_source) or
/// [with_in_memory_source()](Utf8ReaderBuilder::with_in_memory_source)
/// to override this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrategy {
    /// Read the file in chunks through a buffered I/O reader.
    Buffered,

    /// Load the entire file into a contiguous byte buffer before reading.
    InMemory,

    /// Automatically choose between [ReadStrategy::Buffered] and
    /// [ReadStrategy::InMemory] based on file size.
    /// This is the default.
    #[default]
    Automatic,
}

// =#========================================================================#=
// READER BUILDER
// =#========================================================================$=
/// Builder for configuring and creating a [FileCharReader].
///
/// # Configuration Options
/// * **Read strategy**: [`with_buffered_source()`](Self::with_buffered_source),
///   [`with_in_memory_source()`](Self::with_in_memory_source), or automatic
///   (default)
/// * **Buffer capacity**: [`with_buffer_capacity()`](Self::with_buffer_capacity)
///   for the buffered strategy
///
/// # Example
/// ```no_run
/// use utf8_char_reader::{CharReader, Utf8ReaderBuilder};
///
/// let mut reader = Utf8ReaderBuilder::for_file("kakapo.txt")
///     .with_buffered_source()
///     .with_buffer_capacity(64 * 1024)
///     .build()?;
///
/// while !reader.is_eof() {
///     print!("{}", reader.read_next_char()?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Utf8ReaderBuilder {
    path: PathBuf,
    read_strategy: ReadStrategy,
    buffer_capacity: Option<usize>,
}

impl Utf8ReaderBuilder {
    /// Starts configuring a reader for the file at `path`.
    ///
    /// The file is only opened by [build()](Self::build).
    pub fn for_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            read_strategy: ReadStrategy::default(),
            buffer_capacity: None,
        }
    }

    /// Configure the reader to read the file using a **buffered reader**.
    ///
    /// The file is read in chunks through a buffered I/O reader, keeping
    /// memory usage low regardless of file size.
    ///
    /// See also [with_in_memory_source()](Self::with_in_memory_source).
    pub fn with_buffered_source(mut self) -> Self {
        self.read_strategy = ReadStrategy::Buffered;
        self
    }

    /// Configure the reader to read the **entire file into memory** upfront.
    ///
    /// See also [with_buffered_source()](Self::with_buffered_source).
    pub fn with_in_memory_source(mut self) -> Self {
        self.read_strategy = ReadStrategy::InMemory;
        self
    }

    /// Sets the read strategy explicitly.
    pub fn with_read_strategy(mut self, read_strategy: ReadStrategy) -> Self {
        self.read_strategy = read_strategy;
        self
    }

    /// Sets the capacity (in bytes) of the I/O buffer used when the file
    /// is streamed. Ignored when the file is loaded into memory.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }

    /// Returns the configured read strategy.
    pub fn read_strategy(&self) -> ReadStrategy {
        self.read_strategy
    }

    /// Opens the file and builds the reader with the configured settings.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, or read when loading
    /// it into memory.
    pub fn build(self) -> std::io::Result<FileCharReader> {
        let use_buffered = match self.read_strategy {
            ReadStrategy::Buffered => true,
            ReadStrategy::InMemory => false,
            ReadStrategy::Automatic => {
                let file_size = std::fs::metadata(&self.path)?.len();
                file_size >= AUTO_IN_MEMORY_THRESHOLD
            }
        };
        log::debug!(
            "Opening {} ({})",
            self.path.display(),
            if use_buffered { "buffered" } else { "in memory" }
        );

        if use_buffered {
            let source = match self.buffer_capacity {
                Some(capacity) => {
                    BufferedByteSource::from_file_with_capacity(&self.path, capacity)?
                }
                None => BufferedByteSource::from_file(&self.path)?,
            };
            Ok(FileCharReader::Buffered(Utf8CharReader::new(source)))
        } else {
            let source = InMemoryByteSource::from_file(&self.path)?;
            Ok(FileCharReader::InMemory(Utf8CharReader::new(source)))
        }
    }
}

// =#========================================================================#=
// FILE CHAR READER
// =#========================================================================$=
/// A character reader over a file, created by [Utf8ReaderBuilder].
///
/// Wraps a [Utf8CharReader] over whichever byte source was chosen and
/// forwards all [CharReader] operations to it. The file is released when
/// the reader is closed or dropped.
pub enum FileCharReader {
    /// Reader streaming the file through a buffered reader
    Buffered(Utf8CharReader<BufferedByteSource>),
    /// Reader over the file contents loaded into memory
    InMemory(Utf8CharReader<InMemoryByteSource>),
}

impl FileCharReader {
    /// Returns the current byte position, or 0 once closed.
    pub fn position(&self) -> usize {
        match self {
            FileCharReader::Buffered(reader) => reader.position(),
            FileCharReader::InMemory(reader) => reader.position(),
        }
    }

    /// Returns the strategy the file is actually read with.
    pub fn read_strategy(&self) -> ReadStrategy {
        match self {
            FileCharReader::Buffered(_) => ReadStrategy::Buffered,
            FileCharReader::InMemory(_) => ReadStrategy::InMemory,
        }
    }
}

impl CharReader for FileCharReader {
    fn read_next_char(&mut self) -> Result<char, ReadError> {
        match self {
            FileCharReader::Buffered(reader) => reader.read_next_char(),
            FileCharReader::InMemory(reader) => reader.read_next_char(),
        }
    }

    fn is_eof(&self) -> bool {
        match self {
            FileCharReader::Buffered(reader) => reader.is_eof(),
            FileCharReader::InMemory(reader) => reader.is_eof(),
        }
    }

    fn reset_position_to_start(&mut self) {
        match self {
            FileCharReader::Buffered(reader) => reader.reset_position_to_start(),
            FileCharReader::InMemory(reader) => reader.reset_position_to_start(),
        }
    }

    fn close(&mut self) {
        match self {
            FileCharReader::Buffered(reader) => reader.close(),
            FileCharReader::InMemory(reader) => reader.close(),
        }
    }
}
