use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
}

pub type InputResult<T> = Result<T, InputError>;

/// Reads a single line from `reader`.
///
/// One trailing `\n` is stripped, together with a `\r` right before it.
/// Reaching EOF before any byte yields an empty line. Bytes that are not
/// valid UTF-8 are replaced rather than rejected; they can never be part
/// of a word anyway.
pub fn read_line<R: BufRead>(mut reader: R) -> InputResult<String> {
    let mut bytes = Vec::new();
    reader.read_until(b'\n', &mut bytes)?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    let line = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!("Read line of {} bytes", line.len());
    Ok(line)
}

/// Reads the first line of the file at `path`.
pub fn read_line_from_file<P: AsRef<Path>>(path: P) -> InputResult<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_line(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_strips_trailing_newline() {
        let line = read_line(Cursor::new("the quick brown fox\n")).unwrap();
        assert_eq!(line, "the quick brown fox");
    }

    #[test]
    fn test_strips_crlf() {
        let line = read_line(Cursor::new("a,b,c\r\n")).unwrap();
        assert_eq!(line, "a,b,c");
    }

    #[test]
    fn test_reads_only_first_line() {
        let line = read_line(Cursor::new("first\nsecond\n")).unwrap();
        assert_eq!(line, "first");
    }

    #[test]
    fn test_eof_is_empty_line() {
        assert_eq!(read_line(Cursor::new("")).unwrap(), "");
        assert_eq!(read_line(Cursor::new("\n")).unwrap(), "");
    }

    #[test]
    fn test_line_without_newline() {
        assert_eq!(read_line(Cursor::new("no newline")).unwrap(), "no newline");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let line = read_line(Cursor::new(b"ab\xffcd\n".to_vec())).unwrap();
        assert_eq!(line, "ab\u{fffd}cd");
    }

    #[test]
    fn test_keeps_embedded_nul() {
        let line = read_line(Cursor::new("x\0y\n")).unwrap();
        assert_eq!(line, "x\0y");
    }

    #[test]
    fn test_read_line_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello there").unwrap();
        writeln!(file, "ignored").unwrap();
        assert_eq!(read_line_from_file(file.path()).unwrap(), "hello there");
    }

    #[test]
    fn test_missing_file() {
        let result = read_line_from_file("no/such/input.txt");
        match result {
            Err(InputError::Open { path, .. }) => {
                assert_eq!(path, PathBuf::from("no/such/input.txt"))
            }
            other => panic!("Expected Open error, got {:?}", other),
        }
    }
}
