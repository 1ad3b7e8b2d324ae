//! Speech-recognition transcript to subtitle conversion.
//!
//! The pipeline decodes one recognition JSON document, rebuilds
//! punctuation-correct sentence blocks with speaker attribution, scores
//! aggregate confidence, optionally merges same-speaker blocks, and emits
//! numbered SubRip entries. It is synchronous and stateless: one call in,
//! one finished entry list out.

pub mod pipeline;
pub mod shared;
pub mod subtitle;
pub mod transcript;
