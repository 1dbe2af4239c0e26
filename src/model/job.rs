//! Structured job description produced by the keyword extractor

use serde::{Deserialize, Serialize};

/// Fallback title when no pattern matches.
pub const DEFAULT_JOB_TITLE: &str = "Position";

/// Fallback company name when no pattern matches.
pub const DEFAULT_COMPANY_NAME: &str = "Company";

/// Cap on the general keyword list.
pub const MAX_EXTRACTED_KEYWORDS: usize = 25;

/// Cap on the required skills list.
pub const MAX_REQUIRED_SKILLS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    /// Original posting text, preserved verbatim for re-extraction and audit.
    pub text: String,

    pub job_title: String,
    pub company_name: String,

    /// Deduplicated, order-preserving, lower-cased; required skills first.
    pub extracted_keywords: Vec<String>,

    /// Keywords drawn from requirements/qualifications sections. Higher
    /// priority than the general list.
    pub required_skills: Vec<String>,
}

impl JobDescription {
    /// Empty description with placeholder title and company.
    pub fn empty(text: &str) -> Self {
        Self {
            text: text.to_string(),
            job_title: DEFAULT_JOB_TITLE.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            extracted_keywords: Vec::new(),
            required_skills: Vec::new(),
        }
    }

    /// Union of extracted keywords and required skills, order-preserving,
    /// required skills first.
    pub fn all_keywords(&self) -> Vec<String> {
        let mut keywords = Vec::new();
        for kw in self.required_skills.iter().chain(&self.extracted_keywords) {
            if !keywords.contains(kw) {
                keywords.push(kw.clone());
            }
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_placeholders() {
        let job = JobDescription::empty("");
        assert_eq!(job.job_title, "Position");
        assert_eq!(job.company_name, "Company");
        assert!(job.extracted_keywords.is_empty());
        assert!(job.required_skills.is_empty());
    }

    #[test]
    fn test_all_keywords_puts_required_first_and_dedupes() {
        let job = JobDescription {
            text: String::new(),
            job_title: "Position".to_string(),
            company_name: "Company".to_string(),
            extracted_keywords: vec!["python".to_string(), "docker".to_string()],
            required_skills: vec!["python".to_string(), "aws".to_string()],
        };
        assert_eq!(job.all_keywords(), vec!["python", "aws", "docker"]);
    }
}
