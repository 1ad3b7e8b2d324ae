use std::fs;
use std::path::Path;

use crate::transcript::domain::transcript_reader::TranscriptReader;

/// Reads recognition JSON from the filesystem, UTF-8 decoded.
pub struct JsonFileReader;

impl TranscriptReader for JsonFileReader {
    fn read_text(&self, path: &Path) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(path)?)
    }
}
