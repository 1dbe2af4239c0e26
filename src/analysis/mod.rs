//! Deterministic text-analysis engine: keyword extraction from job
//! postings, resume/job keyword matching, and ATS compatibility scoring.

pub mod extractor;
pub mod flatten;
pub mod matcher;
pub(crate) mod patterns;
pub mod scorer;

pub use extractor::KeywordExtractor;
pub use flatten::flatten_resume;
pub use matcher::{analyze_keywords, KeywordAnalysis};
pub use scorer::{AtsScore, AtsScorer};
