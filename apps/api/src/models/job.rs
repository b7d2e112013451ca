use serde::{Deserialize, Serialize};

/// The job a batch of resumes is screened against. Captured once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl JobRequirement {
    pub fn new<I, S>(title: impl Into<String>, required_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            description: String::new(),
        }
    }

    /// Required skills as a set: trimmed, lower-cased, blanks dropped,
    /// first occurrence order kept.
    pub fn normalized_skills(&self) -> Vec<String> {
        normalize_skills(&self.required_skills)
    }
}

pub fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.as_ref().trim().to_lowercase();
        if !skill.is_empty() && !seen.contains(&skill) {
            seen.push(skill);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_skills_dedupes_case_insensitively() {
        let job = JobRequirement::new("Backend", ["Rust", " rust", "Docker", "", "  "]);
        assert_eq!(job.normalized_skills(), vec!["rust", "docker"]);
    }

    #[test]
    fn test_description_defaults_when_missing() {
        let job: JobRequirement =
            serde_json::from_str(r#"{"title": "SRE", "required_skills": ["linux"]}"#).unwrap();
        assert!(job.description.is_empty());
        assert_eq!(job.required_skills, vec!["linux"]);
    }
}
