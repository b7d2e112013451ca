//! Scoring Engine — additive point system over a job's required skills.
//!
//! score = min(round1(7·ratio + 0.2·repeated + 0.3·explicit), 10)
//!
//! A required skill counts as matched when it is in the extracted profile OR
//! appears as a raw substring of the lower-cased content. Repetition and
//! explicit "experience in <skill>" bonuses are applied per required skill.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::job::normalize_skills;
use crate::models::Profile;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points for a full match ratio of 1.0.
    pub match_points: f64,
    pub repetition_bonus: f64,
    pub experience_bonus: f64,
    pub max_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            match_points: 7.0,
            repetition_bonus: 0.2,
            experience_bonus: 0.3,
            max_score: 10.0,
        }
    }
}

/// Per-term contributions behind a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_ratio: f64,
    pub base_points: f64,
    pub repetition_bonus: f64,
    pub experience_bonus: f64,
    /// Rounded to one decimal, capped at `max_score`.
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn score<S: AsRef<str>>(
        &self,
        content: &str,
        profile: &Profile,
        required_skills: &[S],
    ) -> Result<f64, ScoringError> {
        self.breakdown(content, profile, required_skills)
            .map(|b| b.score)
    }

    pub fn breakdown<S: AsRef<str>>(
        &self,
        content: &str,
        profile: &Profile,
        required_skills: &[S],
    ) -> Result<ScoreBreakdown, ScoringError> {
        let required = normalize_skills(required_skills);
        if required.is_empty() {
            return Err(ScoringError::Configuration(
                "required skills must not be empty".to_string(),
            ));
        }

        let content_lower = content.to_lowercase();
        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        let mut repetition_bonus = 0.0;
        let mut experience_bonus = 0.0;

        for skill in &required {
            if profile.skills.contains(skill) || content_lower.contains(skill.as_str()) {
                matched_skills.push(skill.clone());
            } else {
                missing_skills.push(skill.clone());
            }

            if count_occurrences(content, skill) > 1 {
                repetition_bonus += self.weights.repetition_bonus;
            }
            if content_lower.contains(&format!("experience in {skill}")) {
                experience_bonus += self.weights.experience_bonus;
            }
        }

        let match_ratio = matched_skills.len() as f64 / required.len() as f64;
        let base_points = match_ratio * self.weights.match_points;
        let total = base_points + repetition_bonus + experience_bonus;
        let score = round_one_decimal(total).min(self.weights.max_score);

        debug!(
            matched = matched_skills.len(),
            required = required.len(),
            score,
            "resume scored"
        );

        Ok(ScoreBreakdown {
            matched_skills,
            missing_skills,
            match_ratio,
            base_points,
            repetition_bonus,
            experience_bonus,
            score,
        })
    }
}

/// Case-insensitive, non-overlapping occurrences of `needle` as a literal.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(haystack).count(),
        Err(e) => {
            warn!("falling back to literal count for '{needle}': {e}");
            haystack.to_lowercase().matches(needle).count()
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
