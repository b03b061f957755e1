//! Text tokenization and stemming shared by indexing and querying.

use rust_stemmers::{Algorithm, Stemmer};

/// Common English stop words to filter out from indexing.
/// These high-frequency words add little value to search relevance.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

/// Splits text into lower-cased, stemmed terms.
///
/// Words are broken on camelCase, snake_case and hyphen-case boundaries. The
/// parts are emitted individually and, when there is more than one, the
/// joined compound is emitted too, so `useState` yields `use`, `state` and
/// `usestat`.
pub(crate) struct Tokenizer {
    stemmer: Stemmer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Tokenizer(english)")
    }
}

impl Tokenizer {
    pub(crate) fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text
            .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
            .filter(|w| !w.is_empty())
        {
            let parts = split_compound(word);
            for part in &parts {
                self.push(part, &mut tokens);
            }
            if parts.len() > 1 {
                self.push(&parts.concat(), &mut tokens);
            }
        }

        tokens
    }

    fn push(&self, token: &str, tokens: &mut Vec<String>) {
        let lowercase = token.to_lowercase();
        if lowercase.is_empty() || STOP_WORDS.contains(&lowercase.as_str()) {
            return;
        }
        tokens.push(self.stemmer.stem(&lowercase).into_owned());
    }
}

/// Breaks a word on `_`, `-` and lowercase→uppercase transitions.
fn split_compound(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_lower = false;

    for (i, c) in word.char_indices() {
        if c == '_' || c == '-' {
            if i > start {
                parts.push(&word[start..i]);
            }
            start = i + c.len_utf8();
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() && i > start {
            parts.push(&word[start..i]);
            start = i;
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    if start < word.len() {
        parts.push(&word[start..]);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("useState", &["use", "state"])]
    #[case("render_to_string", &["render", "string"])]
    #[case("preact-iso", &["preact", "iso"])]
    #[case("Hooks and signals", &["hook", "signal"])]
    fn test_tokens_contain(#[case] input: &str, #[case] expected: &[&str]) {
        let tokens = Tokenizer::default().tokenize(input);
        for token in expected {
            check!(tokens.contains(&token.to_string()), "{:?} missing {}", tokens, token);
        }
    }

    #[test]
    fn test_compound_is_kept_alongside_parts() {
        let tokens = Tokenizer::default().tokenize("useEffect");
        check!(tokens.len() == 3);
        check!(tokens[0] == "use");
        check!(tokens[1] == "effect");
    }

    #[rstest]
    #[case("the state of the app", &["state", "app"])]
    #[case("is it a component", &["compon"])]
    fn test_stop_words_filtered(#[case] input: &str, #[case] expected: &[&str]) {
        let tokens = Tokenizer::default().tokenize(input);
        check!(tokens == expected.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t")]
    #[case("--- __ ***")]
    fn test_empty_input(#[case] input: &str) {
        check!(Tokenizer::default().tokenize(input).is_empty());
    }

    #[test]
    fn test_unicode_does_not_panic() {
        let _ = Tokenizer::default().tokenize("Москва 日本 🦀 naïveÉtat");
    }
}
