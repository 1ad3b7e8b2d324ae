use std::path::Path;

use super::entry::SubtitleEntry;

/// Domain interface for persisting a finished subtitle track.
pub trait SubtitleWriter: Send {
    fn write(
        &self,
        path: &Path,
        entries: &[SubtitleEntry],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
