use crate::subtitle::domain::block_builder::BlockBuilder;
use crate::subtitle::domain::block_merger::{BlockMerger, MergeConfig};
use crate::subtitle::domain::entry::SubtitleEntry;
use crate::subtitle::domain::header;
use crate::transcript::domain::confidence::confidence_score;
use crate::transcript::domain::recognition::{ParseError, RecognitionOutput};

/// The result of one conversion run: the finished track plus the aggregate
/// confidence reported alongside it. Owned by the caller; the pipeline keeps
/// no reference across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub entries: Vec<SubtitleEntry>,
    pub confidence: f64,
}

/// Convert one raw recognition JSON document into a subtitle track.
///
/// Fails fast on undecodable input; missing optional fields resolve to
/// documented defaults and never fail. No partial output is produced on
/// error.
pub fn convert(json: &str, config: &MergeConfig) -> Result<Conversion, ParseError> {
    let document = RecognitionOutput::from_json(json)?;
    Ok(convert_document(&document, config))
}

/// Run the pipeline over an already-decoded document.
pub fn convert_document(document: &RecognitionOutput, config: &MergeConfig) -> Conversion {
    let confidence = confidence_score(document.results());

    let mut entries = vec![header::header_entry(document, confidence)];
    entries.extend(BlockBuilder::new().build(document.results()));

    let entries = BlockMerger::new(*config).merge(entries);

    log::debug!(
        "converted {} result items into {} entries (confidence {confidence:.3})",
        document.results().len(),
        entries.len()
    );

    Conversion {
        entries,
        confidence,
    }
}
