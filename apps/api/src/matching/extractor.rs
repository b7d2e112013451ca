//! Profile Extractor — turns free-form resume text into a structured `Profile`.
//!
//! Three independent skill heuristics feed one set:
//! 1. dictionary match on whitespace/comma/period-split lower-cased tokens
//! 2. noun phrases that contain (or are immediately followed by) a cue word
//! 3. proper nouns that are not people, places or organizations, checked against the dictionary
//!
//! Experience and education mentions are independent sentence filters.
//! Never fails: any input, including the empty string, yields a profile.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::matching::lexicon::SkillLexicon;
use crate::models::Profile;
use crate::text::{PartOfSpeech, ProperNounClass, TaggedToken, TextAnalyzer};

const EXPERIENCE_WORD: &str = "experience";

const EDUCATION_TERMS: &[&str] = &["degree", "bachelor", "master", "phd", "diploma"];

/// Longest cue-word phrase kept, counted back from the cue word.
const MAX_PHRASE_TOKENS: usize = 4;

pub struct ProfileExtractor {
    analyzer: Arc<dyn TextAnalyzer>,
    lexicon: Arc<SkillLexicon>,
}

impl ProfileExtractor {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, lexicon: Arc<SkillLexicon>) -> Self {
        Self { analyzer, lexicon }
    }

    pub fn lexicon(&self) -> &SkillLexicon {
        &self.lexicon
    }

    pub fn extract(&self, content: &str) -> Profile {
        let tagged = self.analyzer.annotate(content);

        let mut skills = BTreeSet::new();
        skills.extend(self.dictionary_skills(content));
        skills.extend(self.cue_phrase_skills(&tagged));
        skills.extend(self.proper_noun_skills(&tagged));

        let mut experience_mentions = Vec::new();
        let mut education_mentions = Vec::new();
        for sentence in self.analyzer.split_sentences(content) {
            if self.mentions_experience(&sentence) {
                experience_mentions.push(sentence.clone());
            }
            if mentions_education(&sentence) {
                education_mentions.push(sentence);
            }
        }

        debug!(
            skills = skills.len(),
            experience = experience_mentions.len(),
            education = education_mentions.len(),
            "profile extracted"
        );

        Profile {
            skills,
            experience_mentions,
            education_mentions,
        }
    }

    fn dictionary_skills(&self, content: &str) -> Vec<String> {
        content
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
            .filter(|t| !t.is_empty() && self.lexicon.contains_term(t))
            .map(str::to_string)
            .collect()
    }

    fn cue_phrase_skills(&self, tagged: &[TaggedToken]) -> Vec<String> {
        let mut found = Vec::new();

        for phrase in self.analyzer.find_noun_phrases(tagged) {
            let words: Vec<String> = tagged[phrase.start..phrase.end]
                .iter()
                .map(|t| t.token.text.to_lowercase())
                .collect();

            let last_cue = words.iter().rposition(|w| self.lexicon.is_cue_word(w));
            let candidate = match last_cue {
                Some(cue) => {
                    let from = (cue + 1).saturating_sub(MAX_PHRASE_TOKENS);
                    words[from..=cue].to_vec()
                }
                None => {
                    let follower = tagged
                        .get(phrase.end)
                        .map(|t| t.token.text.to_lowercase())
                        .filter(|w| self.lexicon.is_cue_word(w));
                    match follower {
                        Some(cue) => {
                            let from = (words.len() + 1).saturating_sub(MAX_PHRASE_TOKENS);
                            let mut kept = words[from..].to_vec();
                            kept.push(cue);
                            kept
                        }
                        None => continue,
                    }
                }
            };

            // A bare cue word ("platform") says nothing about the candidate.
            if candidate.iter().all(|w| self.lexicon.is_cue_word(w)) {
                continue;
            }
            found.push(candidate.join(" "));
        }

        found
    }

    fn proper_noun_skills(&self, tagged: &[TaggedToken]) -> Vec<String> {
        // Capitalization decides candidacy, not the tag: "Ansible" after a colon
        // is suffix-tagged as an adjective but is still a brand name.
        tagged
            .iter()
            .enumerate()
            .filter(|(_, t)| t.token.text.chars().next().is_some_and(char::is_uppercase))
            .filter(|(i, _)| {
                self.analyzer.classify_proper_noun(tagged, *i) == ProperNounClass::Other
            })
            .map(|(_, t)| t.token.text.to_lowercase())
            .filter(|term| self.lexicon.contains_term(term))
            .collect()
    }

    fn mentions_experience(&self, sentence: &str) -> bool {
        let tagged = self.analyzer.annotate(sentence);
        // "5-year" and "10+yrs" carry letters, so the tagger does not call them numbers.
        let has_number = tagged.iter().any(|t| {
            t.pos == PartOfSpeech::Number
                || t.token.text.chars().next().is_some_and(|c| c.is_ascii_digit())
        });
        let has_word = tagged
            .iter()
            .any(|t| t.token.text.eq_ignore_ascii_case(EXPERIENCE_WORD));
        has_number && has_word
    }
}

fn mentions_education(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    EDUCATION_TERMS.iter().any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::RuleBasedAnalyzer;

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::new(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(SkillLexicon::default()),
        )
    }

    fn small_extractor(dictionary: &[&str]) -> ProfileExtractor {
        ProfileExtractor::new(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(SkillLexicon::new(
                dictionary.iter().copied(),
                ["platform", "api", "service", "database"],
            )),
        )
    }

    #[test]
    fn test_empty_content_yields_empty_profile() {
        let profile = extractor().extract("");
        assert!(profile.is_empty());
    }

    #[test]
    fn test_dictionary_match_is_case_insensitive() {
        let profile = extractor().extract("Experienced JavaScript and React developer.");
        assert!(profile.has_skill("javascript"));
        assert!(profile.has_skill("react"));
    }

    #[test]
    fn test_dictionary_split_on_commas_and_periods() {
        let profile = small_extractor(&["rust", "go"]).extract("Skills: Rust,Go.rust");
        assert_eq!(
            profile.skills.iter().cloned().collect::<Vec<_>>(),
            vec!["go", "rust"]
        );
    }

    #[test]
    fn test_cue_word_phrase_added_even_outside_dictionary() {
        let profile = small_extractor(&[]).extract("Maintained the internal billing platform.");
        assert!(profile.has_skill("internal billing platform"));
    }

    #[test]
    fn test_bare_cue_word_is_not_a_skill() {
        let profile = small_extractor(&[]).extract("Owned the platform.");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_cue_phrase_trimmed_to_window_ending_at_cue() {
        let profile =
            small_extractor(&[]).extract("Built a scalable secure payment ledger api gateway.");
        assert!(profile.has_skill("secure payment ledger api"));
    }

    #[test]
    fn test_proper_noun_recovers_dotted_brand_names() {
        // "Node.js" is split by the plain tokenizer; the proper-noun path keeps it whole.
        let profile = small_extractor(&["node.js"]).extract("Shipped services on Node.js daily");
        assert!(profile.has_skill("node.js"));
    }

    #[test]
    fn test_proper_noun_filter_skips_organizations() {
        let profile = small_extractor(&["oracle", "acme"]).extract("Consultant at Acme Inc");
        // "acme" still matches via the plain dictionary token path.
        assert!(profile.has_skill("acme"));
        let tagged = RuleBasedAnalyzer::new().annotate("Consultant at Acme Inc");
        let e = small_extractor(&["acme"]);
        assert!(e.proper_noun_skills(&tagged).is_empty());
    }

    #[test]
    fn test_experience_requires_number_and_word() {
        let profile = extractor().extract(
            "5 years experience in javascript. Experience in react. Worked 3 years at Acme.",
        );
        assert_eq!(
            profile.experience_mentions,
            vec!["5 years experience in javascript."]
        );
    }

    #[test]
    fn test_experience_accepts_hyphenated_and_suffixed_numbers() {
        let profile =
            extractor().extract("Over 5-year experience in Java. 10+yrs experience in Go.");
        assert_eq!(
            profile.experience_mentions,
            vec!["Over 5-year experience in Java.", "10+yrs experience in Go."]
        );
    }

    #[test]
    fn test_capitalized_terms_after_punctuation_reach_dictionary() {
        let profile = extractor().extract("Skills: Ansible; Terraform; Kubernetes;");
        assert!(profile.has_skill("ansible"));
        assert!(profile.has_skill("terraform"));
        assert!(profile.has_skill("kubernetes"));
    }

    #[test]
    fn test_plural_cue_words_flag_phrases() {
        let profile = small_extractor(&[]).extract(
            "Designed payment APIs and internal billing services. Maintained legacy databases.",
        );
        assert!(profile.has_skill("payment apis"));
        assert!(profile.has_skill("internal billing services"));
        assert!(profile.has_skill("legacy databases"));
    }

    #[test]
    fn test_experienced_is_not_the_word_experience() {
        let profile = extractor().extract("Experienced engineer with 7 years.");
        assert!(profile.experience_mentions.is_empty());
    }

    #[test]
    fn test_education_mentions_in_document_order() {
        let profile = extractor().extract(
            "Master of Science in CS.\nLed migrations.\nBachelor's degree in Physics.",
        );
        assert_eq!(
            profile.education_mentions,
            vec!["Master of Science in CS.", "Bachelor's degree in Physics."]
        );
    }

    #[test]
    fn test_sentence_can_qualify_for_both_filters() {
        let profile = extractor().extract("PhD with 4 years experience in research.");
        assert_eq!(profile.experience_mentions.len(), 1);
        assert_eq!(profile.education_mentions.len(), 1);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Python and AWS cloud services. 6 years experience in Python. BSc degree.";
        let e = extractor();
        assert_eq!(e.extract(text), e.extract(text));
    }
}
