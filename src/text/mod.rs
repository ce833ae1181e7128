//! Text analysis module
//!
//! This module turns the page text into vocabulary, noun and verb sets:
//! - Word/punctuation tokenization
//! - Stop-word and non-alphabetic token removal
//! - Part-of-speech tagging and noun/verb bucketing
//! - Loading the language data the above depends on

mod data;
mod stopwords;
mod tagger;
mod tokenizer;

pub use data::{ensure_stopwords, load_tagger, stopwords_path};
pub use stopwords::StopWords;
pub use tagger::{LexiconTagger, PosTagger, Tag};
pub use tokenizer::{is_alphabetic_token, tokenize};

use std::collections::BTreeSet;

/// Vocabulary, nouns and verbs derived from a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    /// Every distinct token that survived filtering, case preserved
    pub vocabulary: BTreeSet<String>,
    /// Tokens tagged `NN*` on at least one occurrence
    pub nouns: BTreeSet<String>,
    /// Tokens tagged `VB*` on at least one occurrence
    pub verbs: BTreeSet<String>,
}

/// Tokenizes, filters, tags and buckets a text
///
/// Tokens are kept when they are purely alphabetic and not a stop word
/// (case-insensitive). Tagging runs over the filtered token list with
/// repeats and order intact, so a word tagged differently on two
/// occurrences can appear in both `nouns` and `verbs`.
///
/// # Example
///
/// ```
/// use site_harvest::text::{analyze_text, LexiconTagger, StopWords};
///
/// let analysis = analyze_text("the quick Fox jumps", &StopWords::english(), &LexiconTagger::new());
/// assert!(!analysis.vocabulary.contains("the"));
/// assert!(analysis.nouns.contains("Fox"));
/// ```
pub fn analyze_text(text: &str, stopwords: &StopWords, tagger: &dyn PosTagger) -> TextAnalysis {
    let filtered: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|token| is_alphabetic_token(token) && !stopwords.contains(token))
        .collect();

    let tags = tagger.tag(&filtered);

    let mut analysis = TextAnalysis {
        vocabulary: filtered.iter().cloned().collect(),
        ..TextAnalysis::default()
    };

    for (token, tag) in filtered.iter().zip(tags.iter()) {
        if tag.is_noun() {
            analysis.nouns.insert(token.clone());
        } else if tag.is_verb() {
            analysis.verbs.insert(token.clone());
        }
    }

    tracing::debug!(
        "Analyzed {} tokens: {} vocabulary, {} nouns, {} verbs",
        filtered.len(),
        analysis.vocabulary.len(),
        analysis.nouns.len(),
        analysis.verbs.len()
    );

    analysis
}
