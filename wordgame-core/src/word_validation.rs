use wordgame_types::WordEntry;

pub struct WordValidator;

impl WordValidator {
    /// Non-empty ascii lowercase letters, the shape every playable
    /// word and every category name must have.
    pub fn is_lowercase_word(text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase())
    }

    pub fn is_valid_hint(hint: &str) -> bool {
        !hint.trim().is_empty()
    }

    /// Whether a word record is acceptable for the word catalog.
    pub fn is_valid_entry(entry: &WordEntry) -> bool {
        Self::is_lowercase_word(&entry.word)
            && Self::is_lowercase_word(&entry.category)
            && Self::is_valid_hint(&entry.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_word_check() {
        assert!(WordValidator::is_lowercase_word("penguin"));
        assert!(WordValidator::is_lowercase_word("a"));

        assert!(!WordValidator::is_lowercase_word(""));
        assert!(!WordValidator::is_lowercase_word("Penguin"));
        assert!(!WordValidator::is_lowercase_word("pen guin"));
        assert!(!WordValidator::is_lowercase_word("pengu1n"));
        assert!(!WordValidator::is_lowercase_word("pingüin"));
        assert!(!WordValidator::is_lowercase_word("two-part"));
    }

    #[test]
    fn test_hint_must_not_be_blank() {
        assert!(WordValidator::is_valid_hint("Black and white bird"));
        assert!(!WordValidator::is_valid_hint(""));
        assert!(!WordValidator::is_valid_hint("   \t"));
    }

    #[test]
    fn test_entry_validation_covers_all_fields() {
        let good = WordEntry::new("animals", "penguin", "Flightless bird");
        assert!(WordValidator::is_valid_entry(&good));

        let mut bad_word = good.clone();
        bad_word.word = "peng uin".to_string();
        assert!(!WordValidator::is_valid_entry(&bad_word));

        let mut bad_category = good.clone();
        bad_category.category = "sea animals".to_string();
        assert!(!WordValidator::is_valid_entry(&bad_category));

        let mut bad_hint = good.clone();
        bad_hint.hint = "  ".to_string();
        assert!(!WordValidator::is_valid_entry(&bad_hint));
    }

    #[test]
    fn test_constructor_normalization_passes_validation() {
        // WordEntry::new lowercases, so mixed-case input ends up valid.
        let entry = WordEntry::new("Animals", "Penguin", "Flightless bird");
        assert!(WordValidator::is_valid_entry(&entry));
    }
}
