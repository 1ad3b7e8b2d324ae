use crate::shared::constants::UNKNOWN_LABEL;
use crate::shared::time_code::TimeCode;
use crate::transcript::domain::punctuation::attach_punctuation;
use crate::transcript::domain::recognition::ResultItem;
use crate::transcript::domain::speaker_tally::SpeakerTally;
use crate::transcript::domain::token::Token;

use super::entry::SubtitleEntry;

/// Accumulates recognition tokens into sentence blocks and emits one
/// subtitle entry per closed block.
///
/// A block opens on the first word of a sentence (recording that word's
/// start time) and closes on an item carrying the end-of-sentence flag,
/// taking that item's end time. The closed block's text is rebuilt through
/// the punctuation attacher and attributed to the dominant speaker of the
/// block's tally. Entries are numbered from 2; index 1 is reserved for the
/// synthetic header.
///
/// A trailing block never closed by an end-of-sentence marker is dropped,
/// matching the upstream guarantee that every sentence is terminated.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    tokens: Vec<Token>,
    tally: SpeakerTally,
    block_start: Option<f64>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the result items and emit the body entries (indices 2..).
    pub fn build(mut self, items: &[ResultItem]) -> Vec<SubtitleEntry> {
        let mut entries = Vec::new();
        let mut index = 2;

        for item in items {
            if let Some(token) = Token::classify(item, !self.tokens.is_empty()) {
                if let Token::Word {
                    speaker,
                    start_time,
                    ..
                } = &token
                {
                    if self.block_start.is_none() {
                        self.block_start = Some(start_time.unwrap_or(0.0));
                    }
                    self.tally.record(speaker);
                }
                self.tokens.push(token);
            }

            // The boundary flag closes the block whatever the item's kind.
            if item.is_eos && !self.tokens.is_empty() {
                entries.push(self.close_block(index, item.end_time.unwrap_or(0.0)));
                index += 1;
            }
        }

        entries
    }

    fn close_block(&mut self, index: usize, end_time: f64) -> SubtitleEntry {
        let words = attach_punctuation(self.tokens.iter().map(|t| (t.text(), t.attachment())));
        let speaker = self.tally.dominant().unwrap_or(UNKNOWN_LABEL).to_string();

        let entry = SubtitleEntry {
            index,
            start: TimeCode::from_seconds(self.block_start.unwrap_or(0.0)),
            end: TimeCode::from_seconds(end_time),
            text: words.join(" "),
            speaker: Some(speaker),
        };

        self.tokens.clear();
        self.tally.clear();
        self.block_start = None;
        entry
    }
}
