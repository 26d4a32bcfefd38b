//! File access for conversion input and output

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Open a file for reading
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Create a file for writing, truncating it if it already exists
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateConvError;
    use std::fs;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_input() {
        let temp = TempDir::new().unwrap();
        let result = open_input(&temp.path().join("missing.txt"));

        match result.unwrap_err() {
            DateConvError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_input_reads_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.txt");
        fs::write(&path, "12/21/2023").unwrap();

        let mut content = String::new();
        open_input(&path).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "12/21/2023");
    }

    #[test]
    fn test_create_output_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        let mut writer = create_output(&path).unwrap();
        writer.write_all(b"short").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }
}
