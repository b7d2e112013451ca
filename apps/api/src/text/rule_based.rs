//! Rule-based analyzer — closed-class word lists, suffix rules and small gazetteers.
//!
//! Pure Rust, deterministic, no model files. Good enough for resume prose,
//! which is mostly noun-heavy bullet points.

use tracing::trace;

use crate::text::{
    NounPhrase, PartOfSpeech, ProperNounClass, TaggedToken, TextAnalyzer, Token,
};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "my", "our", "your", "his", "their", "its",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "about", "over", "under", "into",
    "through", "during", "across", "within", "without", "between", "among", "via", "per", "as",
    "after", "before", "since", "until", "like",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "while", "whereas", "although", "because", "if",
    "than",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "we", "us", "you", "he", "him", "she", "her", "they", "them", "it", "who", "whom",
    "which", "what", "myself", "ourselves",
];

/// Auxiliaries and inflected verbs that the suffix rules would mis-tag.
const VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall", "got",
    "made", "built", "led", "ran", "wrote", "grew", "drove", "won", "taught", "seeking",
    "looking", "working", "using", "building", "leading", "developing", "managing",
];

const ADVERBS: &[&str] = &["also", "very", "well", "not", "too", "highly", "currently"];

const ADJECTIVES: &[&str] = &[
    "senior", "junior", "lead", "principal", "strong", "good", "excellent", "new", "large",
    "small", "scalable", "full", "modern", "native", "open", "big", "real", "high", "low",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "al", "ic", "less"];

const PERSON_TITLES: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "sir"];

const GIVEN_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "daniel", "matthew", "mark", "paul", "steven", "andrew", "kevin", "brian",
    "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica",
    "sarah", "karen", "emily", "anna", "maria", "laura", "priya", "rahul", "amit", "wei",
    "li", "mohammed", "ahmed", "fatima", "carlos", "jose", "juan", "sofia", "alex", "sam",
];

const PLACES: &[&str] = &[
    "london", "paris", "berlin", "munich", "tokyo", "york", "california", "texas", "florida",
    "washington", "india", "germany", "france", "canada", "usa", "uk", "china", "japan",
    "brazil", "spain", "italy", "australia", "seattle", "boston", "chicago", "austin",
    "bangalore", "bengaluru", "mumbai", "delhi", "hyderabad", "pune", "singapore", "sydney",
    "toronto", "vancouver", "amsterdam", "dublin", "madrid", "europe", "asia", "africa",
    "america", "remote",
];

/// Words that turn the preceding (or containing) proper noun into an organization.
const ORGANIZATION_MARKERS: &[&str] = &[
    "inc", "corp", "corporation", "llc", "ltd", "gmbh", "plc", "co", "university", "college",
    "institute", "school", "academy", "labs", "technologies", "solutions", "systems",
    "company", "group", "bank", "foundation",
];

const ORGANIZATIONS: &[&str] = &[
    "google", "microsoft", "amazon", "apple", "ibm", "netflix", "facebook", "meta", "infosys",
    "accenture", "deloitte", "tcs", "wipro", "intel", "nvidia", "samsung", "uber", "airbnb",
];

/// Characters allowed inside a word token after its first character.
fn is_word_inner(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '/' | '-' | '\'' | '_')
}

/// Characters stripped off the end of a word token and re-emitted as punctuation.
fn is_trailing_strip(c: char) -> bool {
    matches!(c, '.' | '/' | '-' | '\'' | '_')
}

fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, token: &Token, sentence_initial: bool) -> PartOfSpeech {
        let text = token.text.as_str();
        if token.is_punctuation() {
            return PartOfSpeech::Punctuation;
        }

        let first = text.chars().next().unwrap_or(' ');
        if first.is_ascii_digit() && !text.chars().any(char::is_alphabetic) {
            return PartOfSpeech::Number;
        }

        let lower = normalize(text);
        let word = lower.as_str();
        if contains(DETERMINERS, word) {
            return PartOfSpeech::Determiner;
        }
        if contains(PREPOSITIONS, word) {
            return PartOfSpeech::Preposition;
        }
        if contains(CONJUNCTIONS, word) {
            return PartOfSpeech::Conjunction;
        }
        if contains(PRONOUNS, word) {
            return PartOfSpeech::Pronoun;
        }
        if contains(VERBS, word) {
            return PartOfSpeech::Verb;
        }
        if contains(ADVERBS, word) {
            return PartOfSpeech::Adverb;
        }
        if contains(ADJECTIVES, word) {
            return PartOfSpeech::Adjective;
        }

        let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        let all_caps = letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase());
        let capitalized = first.is_uppercase();

        if all_caps || (capitalized && !sentence_initial) {
            return PartOfSpeech::ProperNoun;
        }

        let by_suffix = tag_by_suffix(word);
        match by_suffix {
            PartOfSpeech::Noun if capitalized => PartOfSpeech::ProperNoun,
            other => other,
        }
    }
}

fn tag_by_suffix(word: &str) -> PartOfSpeech {
    let len = word.chars().count();
    if len > 4 && word.ends_with("ly") {
        return PartOfSpeech::Adverb;
    }
    if len > 4 && word.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PartOfSpeech::Adjective;
    }
    PartOfSpeech::Noun
}

fn ends_sentence(token: &Token) -> bool {
    matches!(
        token.text.as_str(),
        "." | "!" | "?" | ":" | ";" | "•" | "*" | "-" | "|" | "(" | "\""
    )
}

impl TextAnalyzer for RuleBasedAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            if !c.is_alphanumeric() {
                tokens.push(Token::new(c.to_string(), start));
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !is_word_inner(next) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            let word = &text[start..end];
            let trimmed = word.trim_end_matches(is_trailing_strip);
            tokens.push(Token::new(trimmed, start));
            for (idx, stripped) in word[trimmed.len()..].char_indices() {
                tokens.push(Token::new(stripped.to_string(), start + trimmed.len() + idx));
            }
        }

        tokens
    }

    fn tag_parts_of_speech(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let sentence_initial = i == 0 || ends_sentence(&tokens[i - 1]);
                TaggedToken {
                    token: token.clone(),
                    pos: self.tag_word(token, sentence_initial),
                }
            })
            .collect()
    }

    fn find_noun_phrases(&self, tagged: &[TaggedToken]) -> Vec<NounPhrase> {
        let mut phrases = Vec::new();
        let mut i = 0;

        while i < tagged.len() {
            if !tagged[i].pos.is_nominal_modifier() {
                i += 1;
                continue;
            }
            let start = i;
            while i < tagged.len() && tagged[i].pos.is_nominal_modifier() {
                i += 1;
            }
            let span = &tagged[start..i];
            if span.iter().any(|t| t.pos.is_noun()) {
                let text = span
                    .iter()
                    .map(|t| t.token.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                phrases.push(NounPhrase {
                    text,
                    start,
                    end: i,
                });
            }
        }

        trace!(count = phrases.len(), "noun phrases found");
        phrases
    }

    fn classify_proper_noun(&self, tagged: &[TaggedToken], index: usize) -> ProperNounClass {
        let Some(current) = tagged.get(index) else {
            return ProperNounClass::Other;
        };
        let word = normalize(&current.token.text);

        // Previous word, skipping a single abbreviation period ("Dr. Smith").
        let previous = index
            .checked_sub(1)
            .and_then(|p| tagged.get(p))
            .and_then(|t| {
                if t.token.text == "." {
                    index.checked_sub(2).and_then(|p| tagged.get(p))
                } else {
                    Some(t)
                }
            })
            .map(|t| (normalize(&t.token.text), t.pos));
        let next = tagged.get(index + 1).map(|t| normalize(&t.token.text));

        if let Some((prev, _)) = &previous {
            if contains(PERSON_TITLES, prev) {
                return ProperNounClass::Person;
            }
        }
        if contains(GIVEN_NAMES, &word) {
            return ProperNounClass::Person;
        }
        if let Some((prev, PartOfSpeech::ProperNoun)) = &previous {
            if contains(GIVEN_NAMES, prev) {
                return ProperNounClass::Person;
            }
        }

        let org_marker_follows = next
            .as_deref()
            .is_some_and(|n| contains(ORGANIZATION_MARKERS, n));
        // "University of X"
        let org_marker_precedes = index >= 2
            && normalize(&tagged[index - 1].token.text) == "of"
            && contains(ORGANIZATION_MARKERS, &normalize(&tagged[index - 2].token.text));
        if contains(ORGANIZATIONS, &word)
            || contains(ORGANIZATION_MARKERS, &word)
            || org_marker_follows
            || org_marker_precedes
        {
            return ProperNounClass::Organization;
        }

        if contains(PLACES, &word) {
            return ProperNounClass::Place;
        }

        ProperNounClass::Other
    }

    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            let boundary = match c {
                '\n' | '\r' => Some(idx),
                '.' | '!' | '?' => match chars.peek() {
                    None => Some(idx + c.len_utf8()),
                    Some(&(_, next)) if next.is_whitespace() => Some(idx + c.len_utf8()),
                    _ => None,
                },
                _ => None,
            };

            if let Some(end) = boundary {
                push_sentence(&mut sentences, &text[start..end]);
                start = idx + c.len_utf8();
            }
        }
        push_sentence(&mut sentences, &text[start..]);

        sentences
    }
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn tag_of(tagged: &[TaggedToken], word: &str) -> PartOfSpeech {
        tagged
            .iter()
            .find(|t| t.token.text == word)
            .map(|t| t.pos)
            .unwrap()
    }

    #[test]
    fn test_tokenize_keeps_symbol_languages_and_dotted_names() {
        let a = RuleBasedAnalyzer::new();
        let tokens = a.tokenize("C++, C# and Node.js.");
        assert_eq!(texts(&tokens), vec!["C++", ",", "C#", "and", "Node.js", "."]);
    }

    #[test]
    fn test_tokenize_records_byte_offsets() {
        let a = RuleBasedAnalyzer::new();
        let tokens = a.tokenize("Go  developer");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 4);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(RuleBasedAnalyzer::new().tokenize("").is_empty());
        assert!(RuleBasedAnalyzer::new().tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_tag_numbers_and_closed_classes() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("I have 5 years of experience with the cloud");
        assert_eq!(tag_of(&tagged, "I"), PartOfSpeech::Pronoun);
        assert_eq!(tag_of(&tagged, "have"), PartOfSpeech::Verb);
        assert_eq!(tag_of(&tagged, "5"), PartOfSpeech::Number);
        assert_eq!(tag_of(&tagged, "of"), PartOfSpeech::Preposition);
        assert_eq!(tag_of(&tagged, "the"), PartOfSpeech::Determiner);
        assert_eq!(tag_of(&tagged, "experience"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_tag_capitalized_mid_sentence_is_proper_noun() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("deployed services on Kubernetes and AWS");
        assert_eq!(tag_of(&tagged, "Kubernetes"), PartOfSpeech::ProperNoun);
        assert_eq!(tag_of(&tagged, "AWS"), PartOfSpeech::ProperNoun);
        assert_eq!(tag_of(&tagged, "deployed"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_sentence_initial_verb_is_not_proper_noun() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("Designed APIs. Experienced engineer");
        assert_eq!(tag_of(&tagged, "Designed"), PartOfSpeech::Verb);
        assert_eq!(tag_of(&tagged, "Experienced"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_noun_phrases_break_on_function_words_and_punctuation() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("Built a scalable cloud platform, using the Django framework");
        let phrases: Vec<String> = a
            .find_noun_phrases(&tagged)
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(phrases, vec!["scalable cloud platform", "Django framework"]);
    }

    #[test]
    fn test_noun_phrase_requires_a_noun() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("was highly scalable");
        assert!(a.find_noun_phrases(&tagged).is_empty());
    }

    #[test]
    fn test_classify_person_place_organization() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("Worked with Sarah Connor at Google in Berlin for Acme Inc");
        let idx = |w: &str| tagged.iter().position(|t| t.token.text == w).unwrap();
        assert_eq!(a.classify_proper_noun(&tagged, idx("Sarah")), ProperNounClass::Person);
        assert_eq!(a.classify_proper_noun(&tagged, idx("Connor")), ProperNounClass::Person);
        assert_eq!(
            a.classify_proper_noun(&tagged, idx("Google")),
            ProperNounClass::Organization
        );
        assert_eq!(a.classify_proper_noun(&tagged, idx("Berlin")), ProperNounClass::Place);
        assert_eq!(
            a.classify_proper_noun(&tagged, idx("Acme")),
            ProperNounClass::Organization
        );
    }

    #[test]
    fn test_classify_title_and_university_of() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("Supervised by Dr. Knuth at University of Texas");
        let idx = |w: &str| tagged.iter().position(|t| t.token.text == w).unwrap();
        assert_eq!(a.classify_proper_noun(&tagged, idx("Knuth")), ProperNounClass::Person);
        assert_eq!(
            a.classify_proper_noun(&tagged, idx("Texas")),
            ProperNounClass::Organization
        );
    }

    #[test]
    fn test_classify_tech_term_is_other() {
        let a = RuleBasedAnalyzer::new();
        let tagged = a.annotate("shipped features in TypeScript");
        let idx = tagged
            .iter()
            .position(|t| t.token.text == "TypeScript")
            .unwrap();
        assert_eq!(a.classify_proper_noun(&tagged, idx), ProperNounClass::Other);
        assert_eq!(a.classify_proper_noun(&tagged, 99), ProperNounClass::Other);
    }

    #[test]
    fn test_split_sentences_on_terminators_and_lines() {
        let a = RuleBasedAnalyzer::new();
        let sentences = a.split_sentences("Built Node.js APIs. Led a team!\nBSc degree\n\nDone?");
        assert_eq!(
            sentences,
            vec!["Built Node.js APIs.", "Led a team!", "BSc degree", "Done?"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_decimals_together() {
        let a = RuleBasedAnalyzer::new();
        let sentences = a.split_sentences("Over 3.5 years experience");
        assert_eq!(sentences, vec!["Over 3.5 years experience"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(RuleBasedAnalyzer::new().split_sentences("").is_empty());
    }
}
