use crate::shared::constants::UNKNOWN_LABEL;

use super::recognition::{ItemKind, ResultItem};

/// How a token joins the sentence text being rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// Concatenate directly onto the preceding word, no space.
    Previous,
    /// Start a new space-separated word.
    Standalone,
}

/// One classified recognition token, immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word {
        text: String,
        confidence: f32,
        speaker: String,
        start_time: Option<f64>,
        end_time: Option<f64>,
        is_end_of_sentence: bool,
    },
    Punctuation {
        text: String,
        attaches_to_previous: bool,
        is_end_of_sentence: bool,
    },
}

impl Token {
    /// Classify one result item.
    ///
    /// `block_has_content` decides whether a punctuation mark attaches to the
    /// preceding word or stands alone (a leading mark with no word before it
    /// has nothing to attach to). Returns `None` for unrecognized kinds.
    pub fn classify(item: &ResultItem, block_has_content: bool) -> Option<Token> {
        let top = item.top_alternative();
        match item.kind {
            ItemKind::Word => Some(Token::Word {
                text: top.map(|a| a.content.clone()).unwrap_or_default(),
                confidence: top.and_then(|a| a.confidence).unwrap_or(1.0),
                speaker: top
                    .and_then(|a| a.speaker.clone())
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                start_time: item.start_time,
                end_time: item.end_time,
                is_end_of_sentence: item.is_eos,
            }),
            ItemKind::Punctuation => Some(Token::Punctuation {
                text: top.map(|a| a.content.clone()).unwrap_or_default(),
                attaches_to_previous: block_has_content,
                is_end_of_sentence: item.is_eos,
            }),
            ItemKind::Unknown => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Token::Word { text, .. } | Token::Punctuation { text, .. } => text,
        }
    }

    pub fn attachment(&self) -> Attachment {
        match self {
            Token::Word { .. } => Attachment::Standalone,
            Token::Punctuation {
                attaches_to_previous: true,
                ..
            } => Attachment::Previous,
            Token::Punctuation { .. } => Attachment::Standalone,
        }
    }
}
