use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::matching::lexicon::{parse_term_list, SkillLexicon};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional file of extra dictionary terms, merged into the built-in lexicon.
    pub skill_dictionary_path: Option<PathBuf>,
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_batch_size = std::env::var("MAX_BATCH_SIZE")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<usize>()
            .context("MAX_BATCH_SIZE must be a positive integer")?;
        if max_batch_size == 0 {
            bail!("MAX_BATCH_SIZE must be at least 1");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_dictionary_path: std::env::var_os("SKILL_DICTIONARY_PATH").map(PathBuf::from),
            max_batch_size,
        })
    }

    /// Builds the process-wide lexicon: built-in terms plus the optional dictionary file.
    pub fn load_lexicon(&self) -> Result<SkillLexicon> {
        let lexicon = SkillLexicon::default();
        match &self.skill_dictionary_path {
            Some(path) => Ok(lexicon.with_extra_terms(read_term_file(path)?)),
            None => Ok(lexicon),
        }
    }
}

fn read_term_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skill dictionary '{}'", path.display()))?;
    Ok(parse_term_list(&text))
}
