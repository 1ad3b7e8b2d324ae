use crate::shared::time_code::TimeCode;

/// One subtitle cue.
///
/// `speaker` is the dominant-speaker label the block merger compares on; it
/// is a first-class field and never serialized into the cue text. The
/// synthetic header entry carries no speaker. Indices are 1-based and
/// contiguous after merging.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    pub index: usize,
    pub start: TimeCode,
    pub end: TimeCode,
    pub text: String,
    pub speaker: Option<String>,
}

impl SubtitleEntry {
    pub fn duration(&self) -> TimeCode {
        self.end - self.start
    }
}
