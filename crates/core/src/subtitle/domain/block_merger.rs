use crate::shared::constants::DEFAULT_MAX_MERGED_SPAN_SECS;

use super::entry::SubtitleEntry;

/// Block merge tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeConfig {
    pub enabled: bool,
    pub max_merged_span_secs: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_merged_span_secs: DEFAULT_MAX_MERGED_SPAN_SECS,
        }
    }
}

/// Merges consecutive same-speaker entries while the combined span stays
/// within the configured threshold.
///
/// Speaker labels are compared on the entries themselves, never parsed out
/// of cue text, so merging is independent of text content. The header entry
/// carries no speaker and therefore never participates in a merge.
pub struct BlockMerger {
    config: MergeConfig,
}

impl BlockMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Fold the entry list and renumber contiguously from 1.
    ///
    /// The span check measures from the surviving entry's start to the
    /// candidate's end, so a chain of merges cannot grow past the threshold.
    pub fn merge(&self, entries: Vec<SubtitleEntry>) -> Vec<SubtitleEntry> {
        if !self.config.enabled {
            return renumber(entries);
        }

        let mut merged: Vec<SubtitleEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            match merged.last_mut() {
                Some(prev) if self.can_merge(prev, &entry) => {
                    prev.text.push(' ');
                    prev.text.push_str(&entry.text);
                    prev.end = entry.end;
                }
                _ => merged.push(entry),
            }
        }

        renumber(merged)
    }

    fn can_merge(&self, prev: &SubtitleEntry, candidate: &SubtitleEntry) -> bool {
        let same_speaker = match (&prev.speaker, &candidate.speaker) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        let span_secs = (candidate.end - prev.start).as_seconds();
        same_speaker && span_secs <= self.config.max_merged_span_secs
    }
}

fn renumber(mut entries: Vec<SubtitleEntry>) -> Vec<SubtitleEntry> {
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.index = position + 1;
    }
    entries
}
