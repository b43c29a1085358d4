use std::io::Cursor;
use utf8_char_reader::source::{BufferedByteSource, ByteSource};
use utf8_char_reader::{
    CharReader, ReadError, ReadStrategy, Utf8CharReader, Utf8ReaderBuilder, open_file,
};

const MIXED: &str = "Grüße, 世界! 🦀";

fn collect_string<R: CharReader>(reader: &mut R) -> String {
    reader.chars().collect::<Result<String, ReadError>>().unwrap()
}

// --- TESTS BUILDER ---
#[test]
fn test_open_file_defaults_to_in_memory_for_small_files() {
    let mut reader = open_file("tests/fixtures/ascii.txt").unwrap();
    assert_eq!(reader.read_strategy(), ReadStrategy::InMemory);
    assert_eq!(collect_string(&mut reader), "Hello World!");
    assert!(reader.is_eof());
}

#[test]
fn test_builder_strategies_read_the_same() {
    let buffered = Utf8ReaderBuilder::for_file("tests/fixtures/mixed.txt").with_buffered_source();
    assert_eq!(buffered.read_strategy(), ReadStrategy::Buffered);
    let in_memory = Utf8ReaderBuilder::for_file("tests/fixtures/mixed.txt").with_in_memory_source();
    let tiny_buffer = Utf8ReaderBuilder::for_file("tests/fixtures/mixed.txt")
        .with_read_strategy(ReadStrategy::Buffered)
        .with_buffer_capacity(2);

    for builder in [buffered, in_memory, tiny_buffer] {
        let mut reader = builder.build().unwrap();
        assert_eq!(collect_string(&mut reader), MIXED);
        assert_eq!(reader.position(), MIXED.len());
    }
}

#[test]
fn test_builder_missing_file() {
    let result = Utf8ReaderBuilder::for_file("tests/fixtures/does_not_exist.txt").build();
    assert!(result.is_err());
    assert!(open_file("tests/fixtures/does_not_exist.txt").is_err());
}

// --- TESTS FILE CONTENTS ---
#[test]
fn test_empty_file() {
    for builder in [
        Utf8ReaderBuilder::for_file("tests/fixtures/empty.txt").with_buffered_source(),
        Utf8ReaderBuilder::for_file("tests/fixtures/empty.txt").with_in_memory_source(),
    ] {
        let mut reader = builder.build().unwrap();
        assert_eq!(reader.read_next_char(), Err(ReadError::EndOfStream { position: 0 }));
        assert!(reader.is_eof());
    }
}

#[test]
fn test_truncated_file_ends_with_end_of_stream() {
    let mut reader = Utf8ReaderBuilder::for_file("tests/fixtures/truncated.txt")
        .with_buffered_source()
        .build()
        .unwrap();
    for expected in ['c', 'a', 'f'] {
        assert_eq!(reader.read_next_char(), Ok(expected));
    }
    assert!(!reader.is_eof());
    assert_eq!(reader.read_next_char(), Err(ReadError::EndOfStream { position: 4 }));
}

#[test]
fn test_invalid_file_reports_invalid_encoding() {
    let mut reader = Utf8ReaderBuilder::for_file("tests/fixtures/invalid.txt")
        .with_buffered_source()
        .build()
        .unwrap();
    assert_eq!(reader.read_next_char(), Ok('o'));
    assert_eq!(reader.read_next_char(), Ok('k'));
    assert_eq!(
        reader.read_next_char(),
        Err(ReadError::InvalidEncoding { bytes: vec![0x80], position: 2 })
    );
}

#[test]
fn test_reset_buffered_file() {
    let mut reader = Utf8CharReader::from_file_buffered("tests/fixtures/mixed.txt").unwrap();
    let first = collect_string(&mut reader);
    reader.reset_position_to_start();
    assert!(!reader.is_eof());
    assert_eq!(collect_string(&mut reader), first);
    assert_eq!(first.chars().count(), 12);
}

#[test]
fn test_close_file_reader() {
    let mut reader = Utf8CharReader::from_file_in_memory("tests/fixtures/ascii.txt").unwrap();
    assert_eq!(reader.read_next_char(), Ok('H'));
    reader.close();
    reader.close();
    assert!(reader.is_eof());
    assert!(reader.read_next_char().unwrap_err().is_end_of_stream());
    reader.reset_position_to_start();
    assert!(reader.is_eof());
}

// --- TESTS BUFFERED SOURCE OVER READERS ---
#[test]
fn test_buffered_cursor_source() {
    let data = MIXED.as_bytes().to_vec();
    let source = BufferedByteSource::with_capacity(3, Cursor::new(data)).unwrap();
    assert_eq!(source.length(), MIXED.len());
    let mut reader = Utf8CharReader::new(source);
    assert_eq!(collect_string(&mut reader), MIXED);
}

#[test]
fn test_dropping_reader_releases_buffered_source() {
    let mut source = BufferedByteSource::from_reader(Cursor::new(b"abc".to_vec())).unwrap();
    {
        let mut reader = Utf8CharReader::new(&mut source);
        assert_eq!(reader.read_next_char(), Ok('a'));
    }
    assert!(source.is_released());
    assert_eq!(source.read_byte(), None);
}
