//! Byte sources the character reader pulls from.
pub mod buffered_byte_source;
pub mod byte_source;
pub mod in_memory_byte_source;

pub use buffered_byte_source::BufferedByteSource;
pub use byte_source::ByteSource;
pub use in_memory_byte_source::InMemoryByteSource;
