//! Byte source abstractions for the character reader.
//!
//! This module provides the [ByteSource] trait, the capability the
//! [Utf8CharReader](crate::reader::Utf8CharReader) consumes to pull raw bytes.

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for different byte sources used by the reader.
///
/// This trait abstracts over different ways of accessing byte data:
/// - In-memory byte vectors ([InMemoryByteSource](crate::source::InMemoryByteSource))
/// - Buffered reading from files or any seekable reader
///   ([BufferedByteSource](crate::source::BufferedByteSource))
///
/// By using this trait, the same decoding logic can work with both small files
/// loaded entirely into memory and large files streamed from disk.
pub trait ByteSource {
    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF) or the source was released
    fn read_byte(&mut self) -> Option<u8>;

    /// Returns the current position in the byte stream.
    ///
    /// # Returns
    /// The current byte offset
    fn position(&self) -> usize;

    /// Returns the total number of bytes in the source.
    fn length(&self) -> usize;

    /// Sets the position in the byte stream.
    ///
    /// # Arguments
    /// * `pos` - The byte offset to seek to
    fn set_position(&mut self, pos: usize);

    /// Releases the resources held by the source (file handle, buffer).
    ///
    /// After this, [read_byte()](Self::read_byte) returns `None`.
    /// Calling it more than once is a no-op.
    fn release(&mut self);

    /// Check if at end of data.
    ///
    /// # Returns
    /// `true` if at or beyond the end of data, `false` otherwise
    fn is_eof(&self) -> bool {
        self.position() >= self.length()
    }
}

/// A borrowed source behaves like the source itself, so a caller can keep
/// ownership and hand the reader `&mut source`.
impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline(always)]
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }

    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }

    #[inline]
    fn set_position(&mut self, pos: usize) {
        (**self).set_position(pos)
    }

    fn release(&mut self) {
        (**self).release()
    }
}
