use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::suitability::SuitabilityVerdict;

/// Display record for one screened upload. Assembled by the screening pipeline,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub file_name: Option<String>,
    pub content: String,
    pub score: f64,
    pub skills: BTreeSet<String>,
    pub experience_mentions: Vec<String>,
    pub education_mentions: Vec<String>,
    pub job_title: String,
    pub suitability: SuitabilityVerdict,
    pub screened_at: DateTime<Utc>,
}
