pub mod convert;
pub mod convert_transcript_use_case;
