// Resume matching engine.
// Implements: profile extraction, skill scoring, suitability verdicts, batch screening.
// The core is synchronous and I/O free; handlers move batch work onto blocking tasks.

pub mod extractor;
pub mod handlers;
pub mod lexicon;
pub mod scoring;
pub mod screener;
pub mod suitability;

use std::sync::Arc;

use crate::text::TextAnalyzer;

pub use extractor::ProfileExtractor;
pub use lexicon::SkillLexicon;
pub use scoring::ScoringEngine;
pub use screener::ResumeScreener;
pub use suitability::SuitabilityAnalyzer;

/// Wires the default pipeline over a given analyzer and lexicon.
pub fn build_screener(analyzer: Arc<dyn TextAnalyzer>, lexicon: Arc<SkillLexicon>) -> ResumeScreener {
    ResumeScreener::new(
        ProfileExtractor::new(analyzer, lexicon),
        ScoringEngine::default(),
        SuitabilityAnalyzer::new(),
    )
}
