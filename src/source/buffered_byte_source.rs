//! Buffered reader implementation of byte source for the reader.
//!
//! This module provides [BufferedByteSource], which wraps a file (or any other
//! seekable reader) in a [BufReader] for efficient streaming I/O. Use this for
//! large files where loading everything into memory would be impractical.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::source::byte_source::ByteSource;

// =#========================================================================#=
// BUFFERED BYTE SOURCE
// =#========================================================================$=
/// A buffered byte source for streaming large files.
///
/// Uses [BufReader] for efficient disk I/O. The total length is determined
/// once on construction by seeking to the end of the underlying reader.
///
/// Interrupted reads are retried. Any other I/O error while reading is
/// treated as exhaustion of the source and logged with [log::warn!].
pub struct BufferedByteSource<R: Read + Seek = File> {
    /// Underlying reader, `None` once released
    reader: Option<BufReader<R>>,

    /// Current absolute position in the stream
    pos: usize,

    /// Total number of bytes in the stream
    len: usize,
}

impl BufferedByteSource<File> {
    /// Creates a new buffered byte source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its length determined.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<BufferedByteSource> {
        Self::from_reader(File::open(path)?)
    }

    /// Creates a new buffered byte source from a file path with the given
    /// buffer capacity.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its length determined.
    pub fn from_file_with_capacity<P: AsRef<Path>>(
        path: P,
        capacity: usize,
    ) -> std::io::Result<BufferedByteSource> {
        Self::with_capacity(capacity, File::open(path)?)
    }
}

impl<R: Read + Seek> BufferedByteSource<R> {
    /// Creates a new buffered byte source over any seekable reader,
    /// using the default [BufReader] capacity.
    ///
    /// The reader is rewound to its start.
    ///
    /// # Errors
    /// Returns an error if seeking the reader fails.
    pub fn from_reader(reader: R) -> std::io::Result<Self> {
        Self::init(BufReader::new(reader))
    }

    /// Creates a new buffered byte source over any seekable reader,
    /// with the given buffer capacity in bytes.
    ///
    /// # Errors
    /// Returns an error if seeking the reader fails.
    pub fn with_capacity(capacity: usize, reader: R) -> std::io::Result<Self> {
        Self::init(BufReader::with_capacity(capacity, reader))
    }

    fn init(mut reader: BufReader<R>) -> std::io::Result<Self> {
        let len = reader.seek(SeekFrom::End(0))? as usize;
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader: Some(reader),
            pos: 0,
            len,
        })
    }

    /// Returns `true` once [release()](ByteSource::release) has been called.
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: Read + Seek> ByteSource for BufferedByteSource<R> {
    fn read_byte(&mut self) -> Option<u8> {
        let reader = self.reader.as_mut()?;
        let byte = loop {
            match reader.fill_buf() {
                Ok(buf) => break *buf.first()?,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("I/O error at byte {}, treating as end of stream: {err}", self.pos);
                    return None;
                }
            }
        };
        reader.consume(1);
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn length(&self) -> usize {
        self.len
    }

    fn set_position(&mut self, pos: usize) {
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        match reader.seek(SeekFrom::Start(pos as u64)) {
            Ok(_) => self.pos = pos,
            Err(err) => log::warn!("Failed to seek to byte {pos}: {err}"),
        }
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            log::debug!("Released buffered byte source ({} bytes)", self.len);
        }
    }
}

// =#========================================================================#=
// TESTS - BUFFERED BYTE SOURCE
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{CharReader, ReadError, Utf8CharReader};
    use std::io::{self, Cursor};

    /// Reader that misbehaves at a given offset.
    struct FaultyReader {
        inner: Cursor<Vec<u8>>,
        /// Offset at which a single `Interrupted` error is returned
        interrupt_at: Option<u64>,
        /// Offset from which every read fails
        fail_from: Option<u64>,
        /// Number of seeks that still succeed
        seeks_left: usize,
    }

    impl FaultyReader {
        fn new(data: &[u8]) -> Self {
            Self {
                inner: Cursor::new(data.to_vec()),
                interrupt_at: None,
                fail_from: None,
                seeks_left: usize::MAX,
            }
        }
    }

    impl Read for FaultyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let pos = self.inner.position();
            if self.interrupt_at == Some(pos) {
                self.interrupt_at = None;
                return Err(io::Error::new(ErrorKind::Interrupted, "interrupted"));
            }
            if self.fail_from.is_some_and(|from| pos >= from) {
                return Err(io::Error::other("disk on fire"));
            }
            self.inner.read(buf)
        }
    }

    impl Seek for FaultyReader {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            if self.seeks_left == 0 {
                return Err(io::Error::other("seek not supported anymore"));
            }
            self.seeks_left -= 1;
            self.inner.seek(pos)
        }
    }

    #[test]
    fn test_buffered_read_and_seek() {
        let mut source = BufferedByteSource::from_reader(Cursor::new(b"xyz".to_vec())).unwrap();
        assert_eq!(source.length(), 3);
        assert_eq!(source.read_byte(), Some(b'x'));
        assert_eq!(source.read_byte(), Some(b'y'));
        assert_eq!(source.position(), 2);

        source.set_position(0);
        assert_eq!(source.position(), 0);
        assert_eq!(source.read_byte(), Some(b'x'));
    }

    #[test]
    fn test_small_capacity_crosses_buffer_boundaries() {
        let data = b"abcdefghij".to_vec();
        let mut source = BufferedByteSource::with_capacity(3, Cursor::new(data.clone())).unwrap();
        let mut read = Vec::new();
        while let Some(b) = source.read_byte() {
            read.push(b);
        }
        assert_eq!(read, data);
        assert!(source.is_eof());
    }

    #[test]
    fn test_released_source_yields_nothing() {
        let mut source = BufferedByteSource::from_reader(Cursor::new(vec![0x41])).unwrap();
        source.release();
        assert!(source.is_released());
        assert_eq!(source.read_byte(), None);
        source.set_position(0);
        assert_eq!(source.read_byte(), None);
        source.release();
    }

    #[test]
    fn test_buffered_from_fixture_file() {
        let mut source = BufferedByteSource::from_file("tests/fixtures/ascii.txt").unwrap();
        assert_eq!(source.length(), 12);
        assert_eq!(source.read_byte(), Some(b'H'));
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let mut faulty = FaultyReader::new(b"ab");
        faulty.interrupt_at = Some(1);
        let source = BufferedByteSource::with_capacity(1, faulty).unwrap();
        let mut reader = Utf8CharReader::new(source);

        assert_eq!(reader.read_next_char(), Ok('a'));
        assert!(!reader.is_eof());
        assert_eq!(reader.read_next_char(), Ok('b'));
        assert!(reader.is_eof());
    }

    #[test]
    fn test_read_error_ends_stream() {
        let mut faulty = FaultyReader::new("aé".as_bytes());
        faulty.fail_from = Some(1);
        let source = BufferedByteSource::with_capacity(1, faulty).unwrap();
        assert_eq!(source.length(), 3);
        let mut reader = Utf8CharReader::new(source);

        assert_eq!(reader.read_next_char(), Ok('a'));
        assert_eq!(reader.read_next_char(), Err(ReadError::EndOfStream { position: 1 }));
        assert!(reader.is_eof());
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_failed_seek_keeps_position() {
        let mut faulty = FaultyReader::new(b"xyz");
        // construction seeks to the end and back
        faulty.seeks_left = 2;
        let mut source = BufferedByteSource::from_reader(faulty).unwrap();
        source.read_byte();
        source.set_position(0);
        assert_eq!(source.position(), 1);
    }

    #[test]
    fn test_reset_with_failed_seek_stays_at_end() {
        let mut faulty = FaultyReader::new(b"xy");
        faulty.seeks_left = 2;
        let source = BufferedByteSource::from_reader(faulty).unwrap();
        let mut reader = Utf8CharReader::new(source);
        assert_eq!(reader.read_next_char(), Ok('x'));

        reader.reset_position_to_start();
        assert!(reader.is_eof());
        assert!(reader.read_next_char().unwrap_err().is_end_of_stream());
        assert_eq!(reader.position(), 1);
    }
}
