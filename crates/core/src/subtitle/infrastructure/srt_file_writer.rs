use std::fs;
use std::path::Path;

use crate::subtitle::domain::entry::SubtitleEntry;
use crate::subtitle::domain::subtitle_writer::SubtitleWriter;

use super::srt_renderer;

/// Writes SubRip files to disk, UTF-8 encoded.
pub struct SrtFileWriter;

impl SubtitleWriter for SrtFileWriter {
    fn write(
        &self,
        path: &Path,
        entries: &[SubtitleEntry],
    ) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, srt_renderer::render(entries))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::time_code::TimeCode;
    use tempfile::TempDir;

    #[test]
    fn test_writes_rendered_track_to_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.srt");
        let entries = vec![SubtitleEntry {
            index: 1,
            start: TimeCode::ZERO,
            end: TimeCode::from_millis(320),
            text: "Blæst på dansk".to_string(),
            speaker: None,
        }];

        SrtFileWriter.write(&path, &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("1\n00:00:00,000 --> 00:00:00,320\n"));
        assert!(written.contains("Blæst på dansk"));
    }

    #[test]
    fn test_write_to_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("out.srt");
        assert!(SrtFileWriter.write(&path, &[]).is_err());
    }
}
