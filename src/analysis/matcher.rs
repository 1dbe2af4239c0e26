//! Resume/job keyword matching
//!
//! Partitions a job description's keywords into matched and missing against
//! the flattened resume text and derives a prioritized competency list.
//! Matching is literal substring containment: short keywords matching inside
//! longer tokens ("sql" inside "postgresql") is accepted heuristic behavior,
//! not a defect — switching to word-boundary matching would materially change
//! scoring outcomes.

use crate::analysis::flatten::flatten_resume;
use crate::analysis::patterns;
use crate::model::{JobDescription, ResumeRecord};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cap on the suggested competency list.
const MAX_COMPETENCIES: usize = 10;
/// How many matched keywords feed the competency list.
const MAX_MATCHED_COMPETENCIES: usize = 6;
/// How many missing keywords feed the competency list.
const MAX_MISSING_COMPETENCIES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Union of extracted keywords and required skills, order-preserving.
    pub all_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Display-ready competencies: matched first, acronym-aware capitalized.
    pub suggested_competencies: Vec<String>,
}

/// Analyze which job keywords a resume covers.
pub fn analyze_keywords(resume: &ResumeRecord, job: &JobDescription) -> KeywordAnalysis {
    let resume_text = flatten_resume(resume).to_lowercase();

    let mut all_keywords: Vec<String> = Vec::new();
    for kw in job.all_keywords() {
        if kw.chars().count() > 2 && !all_keywords.contains(&kw) {
            all_keywords.push(kw);
        }
    }

    let found: HashSet<usize> = match AhoCorasick::new(&all_keywords) {
        Ok(ac) => ac
            .find_overlapping_iter(&resume_text)
            .map(|m| m.pattern().as_usize())
            .collect(),
        // The automaton only fails on pathological pattern sets; fall back
        // to per-keyword scanning so the contract stays total.
        Err(_) => all_keywords
            .iter()
            .enumerate()
            .filter(|(_, kw)| resume_text.contains(kw.as_str()))
            .map(|(i, _)| i)
            .collect(),
    };

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    for (i, kw) in all_keywords.iter().enumerate() {
        if found.contains(&i) {
            matched_keywords.push(kw.clone());
        } else {
            missing_keywords.push(kw.clone());
        }
    }

    let suggested_competencies = build_competencies(&matched_keywords, &missing_keywords);

    log::debug!(
        "keyword match: {}/{} matched, {} competencies suggested",
        matched_keywords.len(),
        all_keywords.len(),
        suggested_competencies.len()
    );

    KeywordAnalysis {
        all_keywords,
        matched_keywords,
        missing_keywords,
        suggested_competencies,
    }
}

/// Matched keywords first (stronger evidence), then missing ones worth
/// adding, capitalized for display.
fn build_competencies(matched: &[String], missing: &[String]) -> Vec<String> {
    let blacklist = patterns::competency_blacklist();
    let years = patterns::years_of_experience_pattern();
    let articles = patterns::article_prefix_pattern();

    let is_valid = |kw: &str| -> bool {
        if kw.chars().count() < 3 {
            return false;
        }
        if kw.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '.' || c == ' ') {
            return false;
        }
        if years.is_match(kw) {
            return false;
        }
        if articles.is_match(kw) {
            return false;
        }
        if blacklist.contains(kw) {
            return false;
        }
        true
    };

    let mut competencies: Vec<String> = Vec::new();
    for kw in matched
        .iter()
        .filter(|kw| is_valid(kw))
        .take(MAX_MATCHED_COMPETENCIES)
        .chain(
            missing
                .iter()
                .filter(|kw| is_valid(kw))
                .take(MAX_MISSING_COMPETENCIES),
        )
    {
        let display = capitalize_competency(kw);
        if !competencies.contains(&display) {
            competencies.push(display);
        }
    }
    competencies.truncate(MAX_COMPETENCIES);
    competencies
}

/// Title-case each word, keeping known acronyms fully upper-case.
fn capitalize_competency(keyword: &str) -> String {
    let acronyms = patterns::display_acronyms();
    keyword
        .split_whitespace()
        .map(|word| {
            if acronyms.contains(word) {
                word.to_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
