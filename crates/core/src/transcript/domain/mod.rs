pub mod confidence;
pub mod punctuation;
pub mod recognition;
pub mod speaker_tally;
pub mod token;
pub mod transcript_reader;
