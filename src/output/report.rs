//! Report structure combining keyword analysis and ATS scoring

use crate::analysis::{AtsScore, KeywordAnalysis};
use crate::model::JobDescription;
use serde::{Deserialize, Serialize};

/// Everything one analysis run produces, ready for formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailorReport {
    pub job_title: String,
    pub company_name: String,
    pub keywords: KeywordAnalysis,
    pub score: AtsScore,
}

impl TailorReport {
    pub fn new(job: &JobDescription, keywords: KeywordAnalysis, score: AtsScore) -> Self {
        Self {
            job_title: job.job_title.clone(),
            company_name: job.company_name.clone(),
            keywords,
            score,
        }
    }

    /// One-line verdict for the overall score.
    pub fn verdict(&self) -> &'static str {
        match self.score.overall {
            90..=100 => "Excellent ATS compatibility; minor polish at most",
            75..=89 => "Strong match; a few targeted edits would help",
            60..=74 => "Decent foundation; address the suggestions below",
            40..=59 => "Significant gaps; rework keywords and content",
            _ => "Poor match; consider whether this role fits your background",
        }
    }

    /// Fraction of job keywords the resume covers, as a percentage.
    pub fn coverage_percentage(&self) -> u8 {
        if self.keywords.all_keywords.is_empty() {
            return 0;
        }
        let pct = self.keywords.matched_keywords.len() as f64
            / self.keywords.all_keywords.len() as f64
            * 100.0;
        pct.round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_overall(overall: u8) -> TailorReport {
        TailorReport {
            job_title: "Data Engineer".to_string(),
            company_name: "Acme".to_string(),
            keywords: KeywordAnalysis {
                all_keywords: vec!["python".to_string(), "sql".to_string()],
                matched_keywords: vec!["python".to_string()],
                missing_keywords: vec!["sql".to_string()],
                suggested_competencies: vec!["Python".to_string()],
            },
            score: AtsScore {
                overall,
                keyword_match: overall,
                format_compatibility: overall,
                section_completeness: overall,
                content_quality: overall,
                suggestions: Vec::new(),
            },
        }
    }

    #[test]
    fn test_verdict_tiers() {
        assert!(report_with_overall(95).verdict().starts_with("Excellent"));
        assert!(report_with_overall(80).verdict().starts_with("Strong"));
        assert!(report_with_overall(30).verdict().starts_with("Poor"));
    }

    #[test]
    fn test_coverage_percentage() {
        assert_eq!(report_with_overall(80).coverage_percentage(), 50);
    }
}
