fn is_sentence_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Number of whitespace-delimited, non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of Unicode scalar values, whitespace included.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Splits on runs of `.`, `!` and `?`, returning trimmed, non-empty fragments.
///
/// Text with no terminal punctuation is a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminal)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Lowercased words made only of ASCII letters; anything else is dropped
/// before splitting, so `don't` becomes `dont` and `42` disappears.
pub(crate) fn lexical_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lexical_words_strip_digits_and_punctuation() {
        assert_eq!(
            lexical_words("Don't panic: 42 TIMES!"),
            vec!["dont".to_string(), "panic".to_string(), "times".to_string()]
        );
    }

    #[test]
    fn lexical_words_of_symbols_only_is_empty() {
        assert!(lexical_words("123 -- ... 456").is_empty());
    }
}
