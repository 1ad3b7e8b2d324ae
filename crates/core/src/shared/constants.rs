/// Duration of the synthetic metadata header entry (an 8-frame flash at 25 fps).
pub const HEADER_DURATION_MS: u64 = 320;

/// Longest combined span (seconds) two same-speaker blocks may merge into.
pub const DEFAULT_MAX_MERGED_SPAN_SECS: f64 = 7.0;

/// Label used when the recognizer omits a speaker or metadata field.
pub const UNKNOWN_LABEL: &str = "Unknown";
