//! Word/punctuation tokenizer
//!
//! Splits text into maximal runs of word characters and maximal runs of
//! punctuation (anything that is neither a word character nor whitespace).
//! Whitespace separates tokens and is dropped. Word characters follow the
//! Unicode `\w` class of the `regex` crate.

use regex::Regex;
use std::sync::OnceLock;

const TOKEN_PATTERN: &str = r"\w+|[^\w\s]+";

fn token_regex() -> Option<&'static Regex> {
    static TOKEN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TOKEN_REGEX
        .get_or_init(|| Regex::new(TOKEN_PATTERN).ok())
        .as_ref()
}

/// Tokenizes text into word and punctuation tokens
///
/// # Examples
///
/// ```
/// use site_harvest::text::tokenize;
///
/// assert_eq!(tokenize("Don't stop!"), vec!["Don", "'", "t", "stop", "!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    match token_regex() {
        Some(regex) => regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Returns true if the token is non-empty and entirely alphabetic
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
