//! Skill lexicon — the technology-term dictionary and domain cue words.
//!
//! Built once at startup, then shared read-only behind an `Arc`.

use std::collections::BTreeSet;

use serde::Serialize;

const DEFAULT_DICTIONARY: &[&str] = &[
    // Languages
    "javascript", "typescript", "python", "java", "c++", "c#", "go", "golang", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "perl", "haskell", "elixir", "dart", "matlab", "sql",
    "html", "css", "bash",
    // Frameworks & libraries
    "react", "angular", "vue", "svelte", "node", "node.js", "nodejs", "express", "next.js",
    "django", "flask", "fastapi", "spring", "rails", "laravel", "asp.net", "jquery", "redux",
    "graphql", "tensorflow", "pytorch", "keras", "pandas", "numpy", "scikit-learn", "spark",
    "hadoop", "selenium", "jest", "junit",
    // Platforms & infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins", "linux",
    "unix", "git", "github", "gitlab", "heroku", "nginx", "kafka", "rabbitmq", "airflow",
    // Databases
    "mysql", "postgresql", "postgres", "mongodb", "redis", "elasticsearch", "oracle", "sqlite",
    "cassandra", "dynamodb", "snowflake",
    // Practices & domains
    "devops", "agile", "scrum", "kanban", "ci/cd", "microservices", "rest", "tdd", "ml", "ai",
    "nlp", "etl", "jira", "figma", "tableau", "excel",
];

const DEFAULT_CUE_WORDS: &[&str] = &[
    "cloud", "stack", "framework", "language", "database", "platform", "system", "api",
    "service",
];

/// Fixed technology-term dictionary plus the cue words that flag skill-like noun phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLexicon {
    dictionary: BTreeSet<String>,
    cue_words: BTreeSet<String>,
}

impl Default for SkillLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY.iter().copied(), DEFAULT_CUE_WORDS.iter().copied())
    }
}

impl SkillLexicon {
    /// Builds a lexicon from arbitrary term lists. Terms are trimmed and lower-cased;
    /// blanks are dropped.
    pub fn new<D, C, S, T>(dictionary: D, cue_words: C) -> Self
    where
        D: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            dictionary: normalize_terms(dictionary),
            cue_words: normalize_terms(cue_words),
        }
    }

    /// Returns a copy with `terms` added to the dictionary.
    pub fn with_extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.extend(normalize_terms(terms));
        self
    }

    /// `term` must already be lower-cased.
    pub fn contains_term(&self, term: &str) -> bool {
        self.dictionary.contains(term)
    }

    /// `word` must already be lower-cased. A trailing plural `s` is ignored
    /// ("apis", "services").
    pub fn is_cue_word(&self, word: &str) -> bool {
        self.cue_words.contains(word)
            || word
                .strip_suffix('s')
                .is_some_and(|singular| self.cue_words.contains(singular))
    }

    pub fn dictionary(&self) -> &BTreeSet<String> {
        &self.dictionary
    }

    pub fn cue_words(&self) -> &BTreeSet<String> {
        &self.cue_words
    }
}

fn normalize_terms<I, S>(terms: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parses a term list: one or more terms per line, comma separated.
/// Lines starting with `#` are comments.
pub fn parse_term_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
