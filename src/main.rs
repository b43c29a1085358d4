use std::error::Error;
use utf8_char_reader::{CharReader, open_file};

/// Counts all and non-ASCII characters in the file.
fn count_chars(file: &str) -> Result<(usize, usize), Box<dyn Error>> {
    let mut reader = open_file(file)?;
    let mut num_chars = 0;
    let mut num_non_ascii = 0;
    for ch in reader.chars() {
        num_chars += 1;
        if !ch?.is_ascii() {
            num_non_ascii += 1;
        }
    }
    Ok((num_chars, num_non_ascii))
}

fn main() {
    env_logger::init();

    let Some(file) = std::env::args().nth(1) else {
        eprintln!("usage: utf8_char_reader <file>");
        std::process::exit(2);
    };

    match count_chars(&file) {
        Ok((num_chars, num_non_ascii)) => {
            println!("{file}: {num_chars} characters ({num_non_ascii} non-ASCII)")
        }
        Err(err) => {
            eprintln!("{file}: {err}");
            std::process::exit(1);
        }
    }
}
