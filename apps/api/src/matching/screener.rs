//! Resume Screener — runs extractor → scorer → analyzer and assembles `Resume` records.
//!
//! Each resume is independent, so batches fan out one blocking task per resume
//! and are merged back in input order.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::extractor::ProfileExtractor;
use crate::matching::scoring::{ScoringEngine, ScoringError};
use crate::matching::suitability::SuitabilityAnalyzer;
use crate::models::{JobRequirement, Resume};

/// One uploaded resume, already decoded to plain text.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeUpload {
    pub content: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

pub struct ResumeScreener {
    extractor: ProfileExtractor,
    scorer: ScoringEngine,
    analyzer: SuitabilityAnalyzer,
}

impl ResumeScreener {
    pub fn new(
        extractor: ProfileExtractor,
        scorer: ScoringEngine,
        analyzer: SuitabilityAnalyzer,
    ) -> Self {
        Self {
            extractor,
            scorer,
            analyzer,
        }
    }

    pub fn extractor(&self) -> &ProfileExtractor {
        &self.extractor
    }

    pub fn scorer(&self) -> &ScoringEngine {
        &self.scorer
    }

    pub fn screen(
        &self,
        upload: ResumeUpload,
        job: &JobRequirement,
    ) -> Result<Resume, ScoringError> {
        let profile = self.extractor.extract(&upload.content);
        let score = self
            .scorer
            .score(&upload.content, &profile, &job.required_skills)?;
        let suitability = self
            .analyzer
            .analyze(&upload.content, &profile, &job.required_skills, score);

        info!(
            file = upload.file_name.as_deref().unwrap_or("<inline>"),
            job = %job.title,
            score,
            tier = ?suitability.tier,
            "resume screened"
        );

        Ok(Resume {
            id: Uuid::new_v4(),
            file_name: upload.file_name,
            content: upload.content,
            score,
            skills: profile.skills,
            experience_mentions: profile.experience_mentions,
            education_mentions: profile.education_mentions,
            job_title: job.title.clone(),
            suitability,
            screened_at: Utc::now(),
        })
    }

    /// Screens every upload against `job` concurrently. Results keep input order.
    ///
    /// Fails fast on an empty requirement before spawning anything.
    pub async fn screen_batch(
        self: &Arc<Self>,
        uploads: Vec<ResumeUpload>,
        job: Arc<JobRequirement>,
    ) -> Result<Vec<Resume>, AppError> {
        if job.normalized_skills().is_empty() {
            return Err(ScoringError::Configuration(
                "required skills must not be empty".to_string(),
            )
            .into());
        }

        let handles: Vec<_> = uploads
            .into_iter()
            .map(|upload| {
                let screener = Arc::clone(self);
                let job = Arc::clone(&job);
                tokio::task::spawn_blocking(move || screener.screen(upload, &job))
            })
            .collect();

        let mut resumes = Vec::with_capacity(handles.len());
        for handle in handles {
            resumes.push(handle.await.context("screening task panicked")??);
        }
        Ok(resumes)
    }
}

/// Orders resumes best-first. Ties keep their original order.
pub fn rank(resumes: &mut [Resume]) {
    resumes.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::lexicon::SkillLexicon;
    use crate::matching::suitability::RecommendationTier;
    use crate::text::RuleBasedAnalyzer;

    fn screener() -> Arc<ResumeScreener> {
        let extractor = ProfileExtractor::new(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(SkillLexicon::default()),
        );
        Arc::new(ResumeScreener::new(
            extractor,
            ScoringEngine::default(),
            SuitabilityAnalyzer::new(),
        ))
    }

    fn upload(content: &str, name: &str) -> ResumeUpload {
        ResumeUpload {
            content: content.to_string(),
            file_name: Some(name.to_string()),
        }
    }

    fn frontend_job() -> JobRequirement {
        JobRequirement::new("Frontend Engineer", ["javascript", "react", "docker"])
    }

    #[test]
    fn test_screen_end_to_end_scenario() {
        let content = "Experienced JavaScript and React developer. 5 years experience in javascript. Experience in javascript experience in javascript.";
        let resume = screener()
            .screen(upload(content, "jane.txt"), &frontend_job())
            .unwrap();

        assert_eq!(resume.score, 5.2);
        assert!(resume.skills.contains("javascript"));
        assert!(resume.skills.contains("react"));
        assert_eq!(resume.job_title, "Frontend Engineer");
        assert_eq!(resume.file_name.as_deref(), Some("jane.txt"));
        assert_eq!(
            resume.suitability.tier,
            RecommendationTier::ConsiderForInterview
        );
        assert!(resume
            .suitability
            .gaps
            .contains(&"Missing required skills: docker".to_string()));
    }

    #[test]
    fn test_screen_rejects_empty_requirements() {
        let job = JobRequirement::new("Anything", Vec::<String>::new());
        let err = screener().screen(upload("rust", "a.txt"), &job).unwrap_err();
        assert!(matches!(err, ScoringError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_screen_batch_preserves_input_order() {
        let uploads = vec![
            upload("Gardener.", "first.txt"),
            upload("React and Docker with javascript.", "second.txt"),
            upload("", "third.txt"),
        ];
        let resumes = screener()
            .screen_batch(uploads, Arc::new(frontend_job()))
            .await
            .unwrap();

        let names: Vec<_> = resumes
            .iter()
            .map(|r| r.file_name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["first.txt", "second.txt", "third.txt"]);
        assert_eq!(resumes[0].score, 0.0);
        assert_eq!(resumes[1].score, 7.0);
    }

    #[tokio::test]
    async fn test_screen_batch_empty_requirements_is_configuration_error() {
        let job = Arc::new(JobRequirement::new("None", [" "]));
        let result = screener()
            .screen_batch(vec![upload("rust", "a.txt")], job)
            .await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_rank_orders_by_score_descending_and_is_stable() {
        let s = screener();
        let job = frontend_job();
        let mut resumes = vec![
            s.screen(upload("javascript", "low.txt"), &job).unwrap(),
            s.screen(upload("javascript react docker", "top.txt"), &job).unwrap(),
            s.screen(upload("javascript again", "low2.txt"), &job).unwrap(),
        ];
        rank(&mut resumes);
        let names: Vec<_> = resumes
            .iter()
            .map(|r| r.file_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["top.txt", "low.txt", "low2.txt"]);
    }
}
