//! Word-level string helpers used to pick and check blanks.

/// Short function words never chosen as the blank.
const STOP_WORDS: [&str; 10] = [
    "the", "and", "for", "with", "one", "you", "was", "were", "his", "her",
];

/// Shortest letter count a word needs to be worth blanking.
const MIN_CONTENT_LETTERS: usize = 3;

pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(str::to_string).collect()
}

/// Rewrite typographic apostrophes as `'`.
pub fn normalize_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' | '`' => '\'',
            other => other,
        })
        .collect()
}

/// Keep only letters, digits, apostrophes and hyphens.
pub fn answer_form(token: &str) -> String {
    normalize_apostrophes(token)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
        .collect()
}

/// A token carries content if its letters, lower-cased, are at least three
/// long and not a stop word.
pub fn is_content_word(token: &str) -> bool {
    let letters: String = token
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    letters.chars().count() >= MIN_CONTENT_LETTERS && !STOP_WORDS.contains(&letters.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_content_word() {
        assert!(is_content_word("kick"));
        assert!(is_content_word("Bucket."));
        assert!(is_content_word("o'clock"));
        assert!(!is_content_word("the"));
        assert!(!is_content_word("The"));
        assert!(!is_content_word("With,"));
        assert!(!is_content_word("it"));
        assert!(!is_content_word("a"));
        assert!(!is_content_word("42"));
    }

    #[test]
    fn test_answer_form() {
        assert_eq!(answer_form("leg!"), "leg");
        assert_eq!(answer_form("\"dozen\""), "dozen");
        assert_eq!(answer_form("you're"), "you're");
        assert_eq!(answer_form("you\u{2019}re,"), "you're");
        assert_eq!(answer_form("twenty-four/seven"), "twenty-fourseven");
        assert_eq!(answer_form("?!"), "");
    }

    #[test]
    fn test_tokenize_preserves_punctuation() {
        assert_eq!(
            tokenize("no pain, no gain"),
            ["no", "pain,", "no", "gain"]
        );
    }
}
