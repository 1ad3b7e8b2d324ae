use crate::shared::constants::{HEADER_DURATION_MS, UNKNOWN_LABEL};
use crate::shared::time_code::TimeCode;
use crate::transcript::domain::recognition::RecognitionOutput;

use super::entry::SubtitleEntry;

/// Builds the synthetic metadata entry flashed before the first cue.
///
/// Index 1, zero start, fixed 320 ms duration (8 frames at 25 fps). The text
/// lists the job name, predicted language, recognition operating point, and
/// the aggregate confidence score to three decimal places; absent document
/// fields print as "Unknown".
pub fn header_entry(document: &RecognitionOutput, confidence: f64) -> SubtitleEntry {
    let job_name = document.job.data_name.as_deref().unwrap_or(UNKNOWN_LABEL);
    let language = document
        .metadata
        .language_identification
        .predicted_language
        .as_deref()
        .unwrap_or(UNKNOWN_LABEL);
    let operating_point = document
        .metadata
        .transcription_config
        .operating_point
        .as_deref()
        .unwrap_or(UNKNOWN_LABEL);

    let text = [
        format!("File: {job_name}"),
        format!("Language: {language}"),
        format!("Configuration: {operating_point}"),
        format!("Confidence Score: {confidence:.3}"),
    ]
    .join("\n");

    SubtitleEntry {
        index: 1,
        start: TimeCode::ZERO,
        end: TimeCode::from_millis(HEADER_DURATION_MS),
        text,
        speaker: None,
    }
}
