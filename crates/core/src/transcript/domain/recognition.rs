use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid recognition JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("recognition document has no results array")]
    MissingResults,
}

/// One decoded speech-recognition output document.
///
/// Only the fields the pipeline consumes are modeled; everything else in the
/// document is ignored on decode. `job` and `metadata` are entirely optional
/// and fall back to placeholder text in the header entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognitionOutput {
    #[serde(default)]
    pub job: JobInfo,
    #[serde(default)]
    pub metadata: RecognitionMetadata,
    results: Option<Vec<ResultItem>>,
}

impl RecognitionOutput {
    /// Decode a raw JSON document, failing fast on shape errors.
    ///
    /// Missing *optional* fields are never errors; a document that does not
    /// decode, or decodes without a top-level `results` array, is.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let document: RecognitionOutput = serde_json::from_str(text)?;
        if document.results.is_none() {
            return Err(ParseError::MissingResults);
        }
        Ok(document)
    }

    pub fn results(&self) -> &[ResultItem] {
        self.results.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobInfo {
    pub data_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognitionMetadata {
    #[serde(default)]
    pub language_identification: LanguageIdentification,
    #[serde(default)]
    pub transcription_config: TranscriptionConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageIdentification {
    pub predicted_language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptionConfig {
    pub operating_point: Option<String>,
}

/// One recognition result item: a word, a punctuation mark, or something
/// this pipeline does not understand (skipped, never an error).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultItem {
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    #[serde(default)]
    pub is_eos: bool,
    pub attaches_to: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl ResultItem {
    /// Top-ranked recognition alternative, if the recognizer provided any.
    pub fn top_alternative(&self) -> Option<&Alternative> {
        self.alternatives.first()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Word,
    Punctuation,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub content: String,
    pub confidence: Option<f32>,
    pub speaker: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Document decoding ────────────────────────────────────────────

    #[test]
    fn test_decodes_minimal_document() {
        let doc = RecognitionOutput::from_json(r#"{"results": []}"#).unwrap();
        assert!(doc.results().is_empty());
        assert!(doc.job.data_name.is_none());
    }

    #[test]
    fn test_decodes_full_metadata() {
        let json = r#"{
            "job": {"data_name": "interview.wav"},
            "metadata": {
                "language_identification": {"predicted_language": "da"},
                "transcription_config": {"operating_point": "enhanced"}
            },
            "results": []
        }"#;
        let doc = RecognitionOutput::from_json(json).unwrap();
        assert_eq!(doc.job.data_name.as_deref(), Some("interview.wav"));
        assert_eq!(
            doc.metadata
                .language_identification
                .predicted_language
                .as_deref(),
            Some("da")
        );
        assert_eq!(
            doc.metadata.transcription_config.operating_point.as_deref(),
            Some("enhanced")
        );
    }

    #[test]
    fn test_decodes_word_item() {
        let json = r#"{"results": [{
            "type": "word",
            "start_time": 1.0,
            "end_time": 1.4,
            "is_eos": true,
            "alternatives": [{"content": "hello", "confidence": 0.93, "speaker": "S1"}]
        }]}"#;
        let doc = RecognitionOutput::from_json(json).unwrap();
        let item = &doc.results()[0];
        assert_eq!(item.kind, ItemKind::Word);
        assert!(item.is_eos);
        let top = item.top_alternative().unwrap();
        assert_eq!(top.content, "hello");
        assert_eq!(top.confidence, Some(0.93));
        assert_eq!(top.speaker.as_deref(), Some("S1"));
    }

    #[test]
    fn test_unrecognized_item_kind_decodes_as_unknown() {
        let json = r#"{"results": [{"type": "entity", "alternatives": []}]}"#;
        let doc = RecognitionOutput::from_json(json).unwrap();
        assert_eq!(doc.results()[0].kind, ItemKind::Unknown);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"results": [{"type": "word", "alternatives": [{"content": "hi"}]}]}"#;
        let doc = RecognitionOutput::from_json(json).unwrap();
        let item = &doc.results()[0];
        assert!(item.start_time.is_none());
        assert!(item.end_time.is_none());
        assert!(!item.is_eos);
        assert!(item.attaches_to.is_none());
        let top = item.top_alternative().unwrap();
        assert!(top.confidence.is_none());
        assert!(top.speaker.is_none());
    }

    // ── Failure modes ────────────────────────────────────────────────

    #[test]
    fn test_rejects_non_json_input() {
        let result = RecognitionOutput::from_json("not json at all");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_rejects_document_without_results() {
        let result = RecognitionOutput::from_json(r#"{"job": {}}"#);
        assert!(matches!(result, Err(ParseError::MissingResults)));
    }

    #[test]
    fn test_rejects_results_that_is_not_a_sequence() {
        let result = RecognitionOutput::from_json(r#"{"results": "oops"}"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_error_message_carries_decode_detail() {
        let message = RecognitionOutput::from_json("{").unwrap_err().to_string();
        assert!(message.starts_with("invalid recognition JSON"));
    }
}
