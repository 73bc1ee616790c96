use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A playable word with its category and hint.
///
/// `word` and `category` are stored lowercase; two entries are the
/// same entry when they share the same word, regardless of category
/// or hint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordEntry {
    pub word: String,
    pub category: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(category: &str, word: &str, hint: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            category: category.to_lowercase(),
            hint: hint.to_string(),
        }
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word.eq_ignore_ascii_case(&other.word)
    }
}

impl Eq for WordEntry {}
