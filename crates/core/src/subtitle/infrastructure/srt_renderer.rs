use crate::subtitle::domain::entry::SubtitleEntry;

/// Render entries to SubRip text: per entry the index, the
/// `start --> end` timing line, the cue text, then a blank line.
pub fn render(entries: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            entry.index, entry.start, entry.end, entry.text
        ));
    }
    out
}
