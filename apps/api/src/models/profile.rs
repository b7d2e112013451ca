use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured extraction result for one resume text.
///
/// `skills` is ordered so that serialization and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub skills: BTreeSet<String>,
    pub experience_mentions: Vec<String>,
    pub education_mentions: Vec<String>,
}

impl Profile {
    /// `skill` is compared lower-cased.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(&skill.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.experience_mentions.is_empty()
            && self.education_mentions.is_empty()
    }
}
