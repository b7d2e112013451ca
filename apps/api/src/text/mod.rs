//! Text Analyzer — the linguistic capability the extractor depends on.
//!
//! Extraction and scoring only ever see `dyn TextAnalyzer`. The bundled
//! `RuleBasedAnalyzer` is the default backend; a tagger binding can replace it
//! without touching the matching code.
//!
//! `AppState` holds an `Arc<dyn TextAnalyzer>`, shared read-only across requests.

pub mod rule_based;

use serde::{Deserialize, Serialize};

pub use rule_based::RuleBasedAnalyzer;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A single token and its byte offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// True when the token is a single non-alphanumeric character.
    pub fn is_punctuation(&self) -> bool {
        let mut chars = self.text.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphanumeric())
    }
}

/// Coarse part-of-speech tags. Enough to drive noun-phrase chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Number,
    Determiner,
    Preposition,
    Conjunction,
    Pronoun,
    Punctuation,
}

impl PartOfSpeech {
    /// Tags that may appear inside a noun phrase.
    pub fn is_nominal_modifier(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::ProperNoun
                | PartOfSpeech::Adjective
                | PartOfSpeech::Number
        )
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub pos: PartOfSpeech,
}

/// A contiguous noun phrase. `start..end` indexes into the tagged token slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPhrase {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProperNounClass {
    Person,
    Place,
    Organization,
    Other,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Linguistic annotation over plain text. Implementations must be pure:
/// identical input always yields identical output.
pub trait TextAnalyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn tag_parts_of_speech(&self, tokens: &[Token]) -> Vec<TaggedToken>;

    fn find_noun_phrases(&self, tagged: &[TaggedToken]) -> Vec<NounPhrase>;

    /// Classifies the proper noun at `index` using its surrounding tokens.
    fn classify_proper_noun(&self, tagged: &[TaggedToken], index: usize) -> ProperNounClass;

    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Tokenize + tag in one call.
    fn annotate(&self, text: &str) -> Vec<TaggedToken> {
        self.tag_parts_of_speech(&self.tokenize(text))
    }
}
