//! File conversion use case
//!
//! Reads a whole input, converts every date in it and writes the result.

use crate::domain::{Conversion, DateConverter};
use crate::error::Result;
use crate::infrastructure::files;
use std::io::{Read, Write};
use std::path::Path;

/// Service for converting dates in files and streams
pub struct ConvertFileService {
    converter: DateConverter,
}

impl ConvertFileService {
    /// Create new convert file service
    pub fn new(converter: DateConverter) -> Self {
        ConvertFileService { converter }
    }

    /// Read all of `reader`, convert it and write the result to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if the input is not
    /// valid UTF-8.
    pub fn convert<R: Read, W: Write>(&self, mut reader: R, writer: W) -> Result<Conversion> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.write_converted(&text, writer)
    }

    /// Convert `input_path` into `output_path`.
    ///
    /// The input is read completely before the output is created, so both
    /// paths may name the same file.
    pub fn execute(&self, input_path: &Path, output_path: &Path) -> Result<Conversion> {
        let mut text = String::new();
        files::open_input(input_path)?.read_to_string(&mut text)?;

        let conversion = self.write_converted(&text, files::create_output(output_path)?)?;

        log::info!(
            "Wrote {} ({} date(s) converted, {} left unchanged)",
            output_path.display(),
            conversion.replaced,
            conversion.skipped.len()
        );

        Ok(conversion)
    }

    fn write_converted<W: Write>(&self, text: &str, mut writer: W) -> Result<Conversion> {
        let conversion = self.converter.convert_with_report(text);

        writer.write_all(conversion.text.as_bytes())?;
        writer.flush()?;

        Ok(conversion)
    }
}
