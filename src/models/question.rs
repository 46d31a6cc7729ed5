use crate::models::IdiomRecord;
use crate::quiz::text;

/// Marker shown in place of the hidden word.
pub const PLACEHOLDER: &str = "_____";

/// A fill-in-the-blank round built from one idiom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    idiom: IdiomRecord,
    display_parts: Vec<String>,
    missing_index: usize,
    hidden_token: String,
    answer: String,
}

impl Question {
    /// Blank out the token at `index` of the idiom's English phrase.
    ///
    /// Returns `None` if the phrase has no token at `index`.
    pub fn blank(idiom: IdiomRecord, index: usize) -> Option<Self> {
        let tokens = text::tokenize(&idiom.english);
        if index >= tokens.len() {
            return None;
        }
        Some(Self::from_tokens(idiom, tokens, index))
    }

    /// `index` must be in bounds for `tokens`.
    pub(crate) fn from_tokens(idiom: IdiomRecord, mut tokens: Vec<String>, index: usize) -> Self {
        let hidden_token = std::mem::replace(&mut tokens[index], PLACEHOLDER.to_string());
        let answer = text::answer_form(&hidden_token);

        Self {
            idiom,
            display_parts: tokens,
            missing_index: index,
            hidden_token,
            answer,
        }
    }

    pub fn idiom(&self) -> &IdiomRecord {
        &self.idiom
    }

    /// Phrase tokens with the hidden one replaced by [`PLACEHOLDER`].
    pub fn display_parts(&self) -> &[String] {
        &self.display_parts
    }

    pub fn missing_index(&self) -> usize {
        self.missing_index
    }

    /// The token exactly as it appears in the phrase, punctuation included.
    pub fn hidden_token(&self) -> &str {
        &self.hidden_token
    }

    /// Expected answer: the hidden token stripped of everything except
    /// letters, digits, apostrophes and hyphens.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether `submitted` matches the expected answer.
    ///
    /// Only surrounding whitespace is trimmed; comparison ignores case and
    /// apostrophe style, nothing else.
    pub fn is_match(&self, submitted: &str) -> bool {
        let submitted = text::normalize_apostrophes(submitted.trim());
        submitted.to_lowercase() == self.answer.to_lowercase()
    }

    /// The original phrase, with the hidden token put back.
    pub fn reconstruct(&self) -> String {
        self.display_parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                if index == self.missing_index {
                    self.hidden_token.as_str()
                } else {
                    part.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
