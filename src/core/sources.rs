use crate::utils::error::{Result, StreamsError};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

pub fn from_slice<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().cloned().collect()
}

pub fn from_array<T, const N: usize>(items: [T; N]) -> Vec<T> {
    items.into_iter().collect()
}

pub fn from_values<I: IntoIterator>(values: I) -> Vec<I::Item> {
    values.into_iter().collect()
}

pub fn int_array(values: &[i32]) -> Box<[i32]> {
    values.iter().copied().collect()
}

/// Reads a text file into its lines, without line terminators.
///
/// A nonexistent file is reported as [`StreamsError::MissingInput`]. The
/// handle lives only for the duration of this call.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    tracing::debug!("Reading lines from {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StreamsError::MissingInput {
            path: path.display().to_string(),
        },
        _ => StreamsError::IoError(e),
    })?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()?;

    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::letters;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_slice() {
        assert_eq!(from_slice(&letters()), letters());
    }

    #[test]
    fn test_from_array() {
        let collected = from_array(["a", "b", "c"].map(String::from));
        assert_eq!(collected, letters());
    }

    #[test]
    fn test_from_values() {
        let collected = from_values(["a", "b", "c"].iter().map(|s| s.to_string()));
        assert_eq!(collected, letters());
    }

    #[test]
    fn test_int_array() {
        assert_eq!(&*int_array(&[1, 2, 3]), &[1, 2, 3]);
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "x\r\ny\nz").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_lines(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        match read_lines(&missing) {
            Err(StreamsError::MissingInput { path }) => assert!(path.ends_with("nope.txt")),
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }
}
