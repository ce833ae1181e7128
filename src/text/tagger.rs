//! Part-of-speech tagging
//!
//! Tags use the Penn Treebank tag set. Only the `NN` and `VB` prefixes
//! matter to the analyzer, but the tagger assigns the full tag so a custom
//! lexicon can be checked against its output.

use crate::{HarvestError, Result};
use std::collections::HashMap;
use std::path::Path;

/// A Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `NN`, `NNS`, `NNP`, `NNPS`
    pub fn is_noun(&self) -> bool {
        self.0.starts_with("NN")
    }

    /// `VB`, `VBD`, `VBG`, `VBN`, `VBP`, `VBZ`
    pub fn is_verb(&self) -> bool {
        self.0.starts_with("VB")
    }
}

/// Assigns one tag per token
///
/// Implementations may look at neighbouring tokens, so the same word can
/// receive different tags at different positions.
pub trait PosTagger {
    /// Returns exactly one tag for each input token, in order
    fn tag(&self, tokens: &[String]) -> Vec<Tag>;
}

const BASE_VERBS: &[&str] = &[
    "accept", "add", "allow", "apply", "ask", "become", "begin", "believe", "bring", "build",
    "buy", "call", "change", "check", "choose", "click", "come", "consider", "contact",
    "continue", "create", "cut", "decide", "deliver", "discover", "download", "drive", "eat",
    "enjoy", "enter", "expect", "explain", "explore", "fall", "feel", "fill", "find", "follow",
    "forget", "get", "give", "go", "grow", "happen", "hear", "help", "hold", "improve",
    "include", "join", "jump", "keep", "know", "learn", "leave", "let", "like", "listen",
    "live", "look", "lose", "love", "make", "manage", "mean", "meet", "move", "need", "offer",
    "pay", "play", "protect", "provide", "pull", "put", "reach", "read", "receive", "register",
    "remain", "remember", "report", "require", "run", "say", "see", "seem", "sell", "send",
    "serve", "share", "show", "sign", "sit", "speak", "spend", "stand", "start", "stay",
    "submit", "subscribe", "suggest", "take", "talk", "teach", "tell", "think", "try", "turn",
    "understand", "use", "visit", "wait", "walk", "want", "watch", "win", "work", "write",
];

const PAST_TENSE: &[&str] = &[
    "ate", "began", "bought", "brought", "built", "came", "chose", "drove", "fell", "felt",
    "found", "gave", "got", "grew", "heard", "held", "kept", "knew", "left", "lost", "made",
    "meant", "met", "paid", "ran", "read", "said", "sat", "saw", "sent", "sold", "spoke",
    "spent", "stood", "taught", "thought", "told", "took", "understood", "went", "won", "wrote",
];

const PAST_PARTICIPLES: &[&str] = &[
    "begun", "chosen", "driven", "eaten", "fallen", "forgotten", "given", "gone", "grown",
    "known", "seen", "shown", "spoken", "taken", "written",
];

const THIRD_PERSON: &[&str] = &["says", "goes", "gets", "makes", "takes", "gives", "seems"];

const MODALS: &[&str] = &["could", "would", "might", "must", "may", "shall"];

const ADJECTIVES: &[&str] = &[
    "able", "bad", "best", "better", "big", "black", "blue", "brown", "clear", "close",
    "common", "current", "dark", "different", "early", "easy", "fast", "fine", "free", "full",
    "good", "great", "green", "happy", "hard", "high", "important", "large", "last", "late",
    "lazy", "little", "local", "long", "low", "main", "major", "new", "next", "nice", "old",
    "open", "possible", "private", "public", "quick", "real", "recent", "red", "right", "safe",
    "short", "simple", "slow", "small", "social", "special", "strong", "sure", "true", "white",
    "whole", "wide", "wrong", "young",
];

const ADVERBS: &[&str] = &[
    "almost", "already", "also", "always", "anywhere", "away", "back", "even", "ever",
    "everywhere", "however", "instead", "later", "maybe", "never", "often", "perhaps", "quite",
    "rather", "soon", "still", "together", "well", "yet",
];

const NUMBERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "hundred", "thousand", "million", "billion",
];

const PREPOSITIONS: &[&str] = &[
    "across", "along", "among", "around", "behind", "beside", "beyond", "despite", "except",
    "inside", "near", "onto", "outside", "since", "toward", "towards", "upon", "via", "within",
    "without",
];

const DETERMINERS: &[&str] = &["another", "either", "every", "neither"];

const PRONOUNS: &[&str] = &["us", "one's"];

const INTERJECTIONS: &[&str] = &["hello", "hi", "oh", "ok", "okay", "thanks", "wow", "yes"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ish"];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "ure", "age",
    "ery", "er", "or",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Lexicon and suffix-rule tagger
///
/// Each token is tagged by the first rule that applies:
///
/// 1. lexicon lookup on the lowercase form
/// 2. capitalized words are proper nouns (`NNP`)
/// 3. suffix rules: `-ing` VBG, `-ed` VBD, `-ly` RB, adjective suffixes JJ,
///    verb suffixes VB
/// 4. plural `-s`: `VBZ` when the stem is a known verb and the previous
///    token was tagged as a noun or pronoun, otherwise `NNS`
/// 5. noun suffixes NN
/// 6. `NN`
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<String, Tag>,
}

impl LexiconTagger {
    /// Creates a tagger with the built-in lexicon
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        let groups: [(&[&str], &str); 12] = [
            (BASE_VERBS, "VB"),
            (PAST_TENSE, "VBD"),
            (PAST_PARTICIPLES, "VBN"),
            (THIRD_PERSON, "VBZ"),
            (MODALS, "MD"),
            (ADJECTIVES, "JJ"),
            (ADVERBS, "RB"),
            (NUMBERS, "CD"),
            (PREPOSITIONS, "IN"),
            (DETERMINERS, "DT"),
            (PRONOUNS, "PRP"),
            (INTERJECTIONS, "UH"),
        ];

        for (words, tag) in groups {
            for word in words {
                lexicon.entry(word.to_string()).or_insert_with(|| Tag::new(tag));
            }
        }

        Self { lexicon }
    }

    /// Adds or replaces lexicon entries
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Tag)>,
    {
        for (word, tag) in entries {
            self.lexicon.insert(word.to_lowercase(), tag);
        }
        self
    }

    /// Extends the built-in lexicon with a `word<TAB>TAG` file
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn with_lexicon_file(self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries = parse_lexicon(&content).map_err(|message| {
            HarvestError::LanguageData(format!("{}: {}", path.display(), message))
        })?;
        Ok(self.with_entries(entries))
    }

    /// Number of words in the lexicon
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    fn is_known_verb(&self, word: &str) -> bool {
        self.lexicon.get(word).is_some_and(|tag| tag.as_str() == "VB")
    }

    fn tag_word(&self, word: &str, previous: Option<&Tag>) -> Tag {
        let lower = word.to_lowercase();

        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }

        if word.chars().next().is_some_and(char::is_uppercase) {
            return Tag::new("NNP");
        }

        let len = lower.chars().count();

        if len >= 5 && lower.ends_with("ing") {
            return Tag::new("VBG");
        }
        if len >= 4 && lower.ends_with("ed") {
            return Tag::new("VBD");
        }
        if len >= 4 && lower.ends_with("ly") {
            return Tag::new("RB");
        }
        if len >= 5 && ends_with_any(&lower, ADJECTIVE_SUFFIXES) {
            return Tag::new("JJ");
        }
        if len >= 5 && ends_with_any(&lower, VERB_SUFFIXES) {
            return Tag::new("VB");
        }

        if let Some(stem) = plural_stem(&lower) {
            let after_subject = previous.is_some_and(|tag| tag.is_noun() || tag.as_str() == "PRP");
            if after_subject && self.is_known_verb(&stem) {
                return Tag::new("VBZ");
            }
            return Tag::new("NNS");
        }

        if len >= 4 && ends_with_any(&lower, NOUN_SUFFIXES) {
            return Tag::new("NN");
        }

        Tag::new("NN")
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<Tag> {
        let mut tags: Vec<Tag> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let tag = self.tag_word(token, tags.last());
            tags.push(tag);
        }
        tags
    }
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

/// Returns the singular stem of a regular `-s` plural
fn plural_stem(word: &str) -> Option<String> {
    if word.chars().count() < 4
        || !word.ends_with('s')
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return None;
    }

    for sibilant in ["ches", "shes", "xes", "zes", "sses"] {
        if word.ends_with(sibilant) {
            return Some(word[..word.len() - 2].to_string());
        }
    }

    Some(word[..word.len() - 1].to_string())
}

/// Parses `word<TAB>TAG` lines into lexicon entries
fn parse_lexicon(content: &str) -> std::result::Result<Vec<(String, Tag)>, String> {
    let mut entries = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t').map(str::trim);
        let (Some(word), Some(tag), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(format!("line {}: expected 'word<TAB>TAG'", index + 1));
        };

        if word.is_empty() || tag.is_empty() {
            return Err(format!("line {}: empty word or tag", index + 1));
        }

        if !tag.chars().all(|c| c.is_ascii_uppercase() || c == '$') {
            return Err(format!("line {}: invalid tag '{}'", index + 1, tag));
        }

        entries.push((word.to_string(), Tag::new(tag)));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tag_strings(tagger: &LexiconTagger, words: &[&str]) -> Vec<String> {
        tagger
            .tag(&tokens(words))
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_one_tag_per_token() {
        let tagger = LexiconTagger::new();
        let input = tokens(&["quick", "Fox", "jumps", "lazy", "dog"]);
        assert_eq!(tagger.tag(&input).len(), input.len());
        assert!(tagger.tag(&[]).is_empty());
    }

    #[test]
    fn test_quick_fox_jumps() {
        let tagger = LexiconTagger::new();
        assert_eq!(
            tag_strings(&tagger, &["quick", "Fox", "jumps"]),
            vec!["JJ", "NNP", "VBZ"]
        );
    }

    #[test]
    fn test_verb_stem_without_subject_is_plural_noun() {
        let tagger = LexiconTagger::new();
        assert_eq!(tag_strings(&tagger, &["quick", "jumps"]), vec!["JJ", "NNS"]);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = LexiconTagger::new();
        assert_eq!(
            tag_strings(
                &tagger,
                &["running", "visited", "quickly", "famous", "organize", "information"]
            ),
            vec!["VBG", "VBD", "RB", "JJ", "VB", "NN"]
        );
    }

    #[test]
    fn test_page_sentence() {
        let tagger = LexiconTagger::new();
        // "Visitors explore the cyber range, learning defensive skills.
        // Students compete in challenges and visit the lab." minus stop words
        let words = [
            "Visitors", "explore", "cyber", "range", "learning", "defensive", "skills",
            "Students", "compete", "challenges", "visit", "lab",
        ];
        assert_eq!(
            tag_strings(&tagger, &words),
            vec!["NNP", "VB", "NN", "NN", "VBG", "JJ", "NNS", "NNP", "NN", "NNS", "VB", "NN"]
        );
    }

    #[test]
    fn test_plural_stems() {
        assert_eq!(plural_stem("dogs"), Some("dog".to_string()));
        assert_eq!(plural_stem("watches"), Some("watch".to_string()));
        assert_eq!(plural_stem("class"), None);
        assert_eq!(plural_stem("campus"), None);
        assert_eq!(plural_stem("bus"), None);
    }

    #[test]
    fn test_lexicon_before_capitalization() {
        let tagger = LexiconTagger::new();
        assert_eq!(tag_strings(&tagger, &["Contact", "Visit"]), vec!["VB", "VB"]);
    }

    #[test]
    fn test_default_is_noun() {
        let tagger = LexiconTagger::new();
        assert_eq!(tag_strings(&tagger, &["dog"]), vec!["NN"]);
    }

    #[test]
    fn test_tag_prefixes() {
        assert!(Tag::new("NNPS").is_noun());
        assert!(Tag::new("VBZ").is_verb());
        assert!(!Tag::new("JJ").is_noun());
        assert!(!Tag::new("JJ").is_verb());
    }

    #[test]
    fn test_custom_entries_override() {
        let tagger = LexiconTagger::new().with_entries(vec![("Dog".to_string(), Tag::new("VB"))]);
        assert_eq!(tag_strings(&tagger, &["dog"]), vec!["VB"]);
    }

    #[test]
    fn test_lexicon_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom entries").unwrap();
        writeln!(file, "cyber\tJJ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "hack\tVB").unwrap();
        file.flush().unwrap();

        let tagger = LexiconTagger::new().with_lexicon_file(file.path()).unwrap();
        assert_eq!(tag_strings(&tagger, &["cyber", "hack"]), vec!["JJ", "VB"]);
    }

    #[test]
    fn test_invalid_lexicon_lines() {
        assert!(parse_lexicon("word").is_err());
        assert!(parse_lexicon("word\tnn").is_err());
        assert!(parse_lexicon("word\tNN\textra").is_err());
        assert_eq!(parse_lexicon("word\tPRP$\n").unwrap().len(), 1);
    }
}
