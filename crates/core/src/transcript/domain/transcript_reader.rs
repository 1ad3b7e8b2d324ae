use std::path::Path;

/// Domain interface for loading raw recognition JSON text.
///
/// Shells own the file handling; the pipeline only ever sees the text.
pub trait TranscriptReader: Send {
    fn read_text(&self, path: &Path) -> Result<String, Box<dyn std::error::Error>>;
}
