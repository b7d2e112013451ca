//! Suitability Analyzer — strengths, gaps and a recommendation for one resume.
//!
//! Pure function of (content, profile, required skills, score). Never fails; degenerate
//! input yields empty lists and the lowest recommendation tier.

use serde::{Deserialize, Serialize};

use crate::models::job::normalize_skills;
use crate::models::Profile;

pub const HIGHLY_RECOMMENDED: &str =
    "Highly recommended: the candidate's skills and experience closely match the job requirements.";
pub const CONSIDER_FOR_INTERVIEW: &str =
    "Consider for interview: the candidate meets several requirements, but the gaps should be explored.";
pub const NOT_RECOMMENDED: &str =
    "Not recommended: the candidate's profile does not sufficiently match the job requirements.";

pub const STRONG_EXPERIENCE: &str = "Strong industry experience";
pub const RELEVANT_EXPERIENCE: &str = "Relevant experience";
pub const LIMITED_EXPERIENCE: &str = "Limited professional experience";
pub const ADVANCED_EDUCATION: &str = "Advanced academic qualifications";
pub const RELEVANT_EDUCATION: &str = "Relevant academic background";
pub const NO_EDUCATION: &str = "No formal education details found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    HighlyRecommended,
    ConsiderForInterview,
    NotRecommended,
}

impl RecommendationTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            RecommendationTier::HighlyRecommended
        } else if score >= 5.0 {
            RecommendationTier::ConsiderForInterview
        } else {
            RecommendationTier::NotRecommended
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RecommendationTier::HighlyRecommended => HIGHLY_RECOMMENDED,
            RecommendationTier::ConsiderForInterview => CONSIDER_FOR_INTERVIEW,
            RecommendationTier::NotRecommended => NOT_RECOMMENDED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityVerdict {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: String,
    pub tier: RecommendationTier,
    /// Largest leading integer across experience mentions; 0 when none.
    pub experience_years: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SuitabilityAnalyzer;

impl SuitabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `_content` is accepted for parity with the scoring call. Every rule here reads
    /// the extracted profile, never the raw text.
    pub fn analyze<S: AsRef<str>>(
        &self,
        _content: &str,
        profile: &Profile,
        required_skills: &[S],
        score: f64,
    ) -> SuitabilityVerdict {
        let mut strengths = Vec::new();
        let mut gaps = Vec::new();

        let (matched, missing): (Vec<String>, Vec<String>) = normalize_skills(required_skills)
            .into_iter()
            .partition(|skill| profile.skills.contains(skill));
        if !matched.is_empty() {
            strengths.push(format!("Matches required skills: {}", matched.join(", ")));
        }
        if !missing.is_empty() {
            gaps.push(format!("Missing required skills: {}", missing.join(", ")));
        }

        let experience_years = max_experience_years(&profile.experience_mentions);
        match experience_years {
            y if y >= 5 => strengths.push(STRONG_EXPERIENCE.to_string()),
            2..=4 => strengths.push(RELEVANT_EXPERIENCE.to_string()),
            _ => gaps.push(LIMITED_EXPERIENCE.to_string()),
        }

        if profile.education_mentions.is_empty() {
            gaps.push(NO_EDUCATION.to_string());
        } else {
            let education = profile.education_mentions.join(" ").to_lowercase();
            if education.contains("master") || education.contains("phd") {
                strengths.push(ADVANCED_EDUCATION.to_string());
            } else if education.contains("bachelor") {
                strengths.push(RELEVANT_EDUCATION.to_string());
            }
        }

        let tier = RecommendationTier::from_score(score);
        SuitabilityVerdict {
            strengths,
            gaps,
            recommendation: tier.message().to_string(),
            tier,
            experience_years,
        }
    }
}

/// First run of ASCII digits in each mention, maximum across mentions.
// TODO: ranges ("3-5 years") and calendar years ("since 2015") are read as-is;
// decide whether to disambiguate once real resumes show how often it misfires.
fn max_experience_years(mentions: &[String]) -> u32 {
    mentions
        .iter()
        .filter_map(|m| first_integer(m))
        .max()
        .unwrap_or(0)
}

fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    // Saturate absurdly long digit runs instead of dropping the mention.
    Some(digits.parse().unwrap_or(u32::MAX))
}
