//! ATS compatibility scoring
//!
//! Computes four independent sub-scores over a (resume, job description)
//! pair — keyword match, format compatibility, section completeness, and
//! content quality — combines them with fixed weights, and emits a ranked
//! list of actionable suggestions. Pure and deterministic: identical input
//! always yields identical output, so the score doubles as an acceptance
//! oracle for externally generated resume content.

use crate::analysis::flatten::flatten_resume;
use crate::analysis::patterns;
use crate::config::ScoringConfig;
use crate::model::{JobDescription, ResumeRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Bonus applied when core competencies overlap enough job keywords.
const COMPETENCY_BONUS: f64 = 5.0;
/// Job-keyword overlap needed for the competency bonus.
const COMPETENCY_OVERLAP_MIN: usize = 4;
/// Content quality for a resume with no experience bullets at all.
const NO_BULLET_CONTENT_SCORE: u8 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    /// Weighted combination of the four sub-scores.
    pub overall: u8,
    pub keyword_match: u8,
    pub format_compatibility: u8,
    pub section_completeness: u8,
    pub content_quality: u8,
    /// Remediation tips, most diagnostic-specific first, capped.
    pub suggestions: Vec<String>,
}

pub struct AtsScorer {
    scoring: ScoringConfig,
    strong_verbs: HashSet<&'static str>,
    weak_verbs: HashSet<&'static str>,
    metric_patterns: Vec<Regex>,
}

/// Intermediate format diagnostics, reused for suggestion rules.
struct FormatStats {
    dash_present: bool,
    empty_sections: Vec<&'static str>,
}

/// Intermediate content diagnostics, reused for suggestion rules.
struct ContentStats {
    bullet_count: usize,
    metric_ratio: f64,
    weak_examples: Vec<String>,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            strong_verbs: patterns::strong_action_verbs(),
            weak_verbs: patterns::weak_verbs(),
            metric_patterns: patterns::metric_patterns(),
        }
    }

    /// Score a resume against a job description.
    pub fn analyze(&self, resume: &ResumeRecord, job: &JobDescription) -> AtsScore {
        let resume_text = flatten_resume(resume);
        let resume_lower = resume_text.to_lowercase();
        let job_keywords = job.all_keywords();

        let keyword_match = self.score_keyword_match(&resume_lower, resume, job);
        let (format_compatibility, format_stats) = self.score_format(&resume_text, resume);
        let section_completeness = self.score_sections(resume);
        let (content_quality, content_stats) = self.score_content(resume, &job_keywords);

        let overall = self.combine(
            keyword_match,
            format_compatibility,
            section_completeness,
            content_quality,
        );

        let suggestions = self.build_suggestions(
            resume,
            job,
            &resume_lower,
            keyword_match,
            format_compatibility,
            section_completeness,
            content_quality,
            &format_stats,
            &content_stats,
        );

        log::debug!(
            "ats score: overall={overall} kw={keyword_match} fmt={format_compatibility} \
             sect={section_completeness} content={content_quality}"
        );

        AtsScore {
            overall,
            keyword_match,
            format_compatibility,
            section_completeness,
            content_quality,
            suggestions,
        }
    }

    /// Weighted keyword coverage. Required skills count double; a keyword
    /// absent from the resume still earns half credit when a containing or
    /// contained keyword is present (fuzzy partial match).
    fn score_keyword_match(
        &self,
        resume_lower: &str,
        resume: &ResumeRecord,
        job: &JobDescription,
    ) -> u8 {
        let mut entries: Vec<(&str, f64)> = Vec::new();
        for kw in &job.required_skills {
            entries.push((kw.as_str(), 2.0));
        }
        for kw in &job.extracted_keywords {
            if !job.required_skills.contains(kw) {
                entries.push((kw.as_str(), 1.0));
            }
        }
        if entries.is_empty() {
            return 0;
        }

        let union: Vec<&str> = entries.iter().map(|(kw, _)| *kw).collect();
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        let mut earned = 0.0;
        for (kw, weight) in &entries {
            if resume_lower.contains(kw) {
                earned += weight;
            } else if union.iter().any(|other| {
                other != kw
                    && (other.contains(kw) || kw.contains(other))
                    && resume_lower.contains(other)
            }) {
                earned += weight / 2.0;
            }
        }

        let mut score = earned / total * 100.0;

        if let Some(competencies) = &resume.core_competencies {
            let lower: Vec<String> = competencies.iter().map(|c| c.to_lowercase()).collect();
            let overlap = union
                .iter()
                .filter(|kw| lower.iter().any(|c| c.contains(*kw)))
                .count();
            if overlap >= COMPETENCY_OVERLAP_MIN {
                score += COMPETENCY_BONUS;
            }
        }

        score.clamp(0.0, 100.0).round() as u8
    }

    /// Deductions for formatting that trips ATS parsers. Em/en dashes have
    /// their own rule and are excluded from the special-character class.
    fn score_format(&self, resume_text: &str, resume: &ResumeRecord) -> (u8, FormatStats) {
        let mut score: i32 = 100;

        let dash_present = resume_text.contains('—') || resume_text.contains('–');
        if dash_present {
            score -= 8;
        }

        let mut empty_sections = Vec::new();
        if resume.experience.is_empty() {
            empty_sections.push("experience");
        }
        if resume.education.is_empty() {
            empty_sections.push("education");
        }
        if resume.skill_count() == 0 {
            empty_sections.push("skills");
        }
        if !empty_sections.is_empty() {
            score -= 12;
        }

        if resume
            .skill_categories
            .as_ref()
            .is_some_and(|c| !c.is_empty())
        {
            score += 5;
        }

        let allowed = ".,;:!?()'\"-/&@#%+$*[]|";
        let special_count = resume_text
            .chars()
            .filter(|c| {
                !c.is_alphanumeric()
                    && !c.is_whitespace()
                    && !allowed.contains(*c)
                    && *c != '—'
                    && *c != '–'
            })
            .count();
        if special_count > 15 {
            score -= 8;
        } else if special_count > 5 {
            score -= 4;
        }

        if resume
            .experience
            .iter()
            .any(|e| e.end_date.trim().is_empty() && !e.current)
        {
            score -= 5;
        }

        let email_ok = resume.personal.email.contains('@');
        let phone_digits = resume
            .personal
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if !email_ok || phone_digits < 10 {
            score -= 5;
        }

        (
            score.clamp(0, 100) as u8,
            FormatStats {
                dash_present,
                empty_sections,
            },
        )
    }

    /// 100 points distributed across six weighted section checks, with small
    /// bonuses for a contact link and bullet-rich roles.
    fn score_sections(&self, resume: &ResumeRecord) -> u8 {
        let mut score = 0.0_f64;

        if !resume.personal.name.trim().is_empty() {
            score += 5.0;
        }
        if !resume.personal.email.trim().is_empty() {
            score += 5.0;
        }
        if !resume.personal.phone.trim().is_empty() {
            score += 5.0;
        }
        if resume
            .personal
            .link
            .as_ref()
            .is_some_and(|l| !l.trim().is_empty())
        {
            score += 2.0;
        }

        let summary_len = resume.summary.chars().count();
        score += if summary_len >= 150 {
            20.0
        } else if summary_len >= 100 {
            16.0
        } else if summary_len >= 50 {
            10.0
        } else {
            0.0
        };

        let roles = resume.experience.len();
        score += match roles {
            0 => 0.0,
            1 => 12.5,
            2 => 20.0,
            _ => 25.0,
        };
        if roles > 0 {
            let total_bullets: usize = resume.experience.iter().map(|e| e.bullets.len()).sum();
            if total_bullets as f64 / roles as f64 >= 4.0 {
                score += 3.0;
            }
        }

        if !resume.education.is_empty() {
            score += 15.0;
        }

        let skills = resume.skill_count();
        score += if skills >= 10 {
            15.0
        } else if skills >= 5 {
            12.0
        } else if skills >= 3 {
            7.5
        } else {
            0.0
        };

        let competencies = resume
            .core_competencies
            .as_ref()
            .map(|c| c.len())
            .unwrap_or(0);
        score += if competencies >= 5 {
            10.0
        } else if competencies >= 3 {
            6.0
        } else {
            0.0
        };

        score.round().min(100.0) as u8
    }

    /// Tiered bonuses and penalties over verb strength, quantified metrics,
    /// keyword usage, and bullet length across all experience bullets.
    fn score_content(&self, resume: &ResumeRecord, job_keywords: &[String]) -> (u8, ContentStats) {
        let bullets: Vec<String> = resume
            .experience
            .iter()
            .flat_map(|e| &e.bullets)
            .map(|b| b.replace("**", "").trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();

        if bullets.is_empty() {
            return (
                NO_BULLET_CONTENT_SCORE,
                ContentStats {
                    bullet_count: 0,
                    metric_ratio: 0.0,
                    weak_examples: Vec::new(),
                },
            );
        }

        let n = bullets.len() as f64;
        let mut strong = 0usize;
        let mut weak = 0usize;
        let mut with_metric = 0usize;
        let mut with_keyword = 0usize;
        let mut weak_examples = Vec::new();

        for bullet in &bullets {
            let lower = bullet.to_lowercase();
            if let Some(verb) = first_word(&lower) {
                if self.strong_verbs.contains(verb.as_str()) {
                    strong += 1;
                } else if self.weak_verbs.contains(verb.as_str()) {
                    weak += 1;
                    if !weak_examples.contains(&verb) && weak_examples.len() < 3 {
                        weak_examples.push(verb);
                    }
                }
            }
            if self.metric_patterns.iter().any(|re| re.is_match(&lower)) {
                with_metric += 1;
            }
            if job_keywords.iter().any(|kw| lower.contains(kw)) {
                with_keyword += 1;
            }
        }

        let strong_ratio = strong as f64 / n;
        let weak_ratio = weak as f64 / n;
        let metric_ratio = with_metric as f64 / n;
        let keyword_ratio = with_keyword as f64 / n;
        let avg_len = bullets.iter().map(|b| b.chars().count()).sum::<usize>() as f64 / n;

        let mut score: i32 = 100;

        if strong_ratio >= 0.8 {
            score += 10;
        } else if strong_ratio >= 0.6 {
            score += 5;
        } else if strong_ratio < 0.4 {
            score -= 15;
        }

        if weak_ratio > 0.3 {
            score -= 10;
        } else if weak_ratio > 0.15 {
            score -= 5;
        }

        if metric_ratio >= 0.6 {
            score += 10;
        } else if metric_ratio >= 0.4 {
            score += 5;
        } else if metric_ratio < 0.2 {
            score -= 12;
        }

        if keyword_ratio >= 0.7 {
            score += 8;
        } else if keyword_ratio < 0.3 {
            score -= 8;
        }

        if (80.0..=180.0).contains(&avg_len) {
            score += 5;
        } else if avg_len < 50.0 {
            score -= 8;
        } else if avg_len > 250.0 {
            score -= 5;
        }

        let summary_lower = resume.summary.to_lowercase();
        let summary_hits = job_keywords
            .iter()
            .filter(|kw| summary_lower.contains(kw.as_str()))
            .count();
        if summary_hits >= 3 {
            score += 5;
        }

        (
            score.clamp(0, 100) as u8,
            ContentStats {
                bullet_count: bullets.len(),
                metric_ratio,
                weak_examples,
            },
        )
    }

    /// Weighted overall score, rounded to the nearest integer.
    fn combine(&self, keyword: u8, format: u8, sections: u8, content: u8) -> u8 {
        let overall = keyword as f64 * self.scoring.keyword_weight
            + format as f64 * self.scoring.format_weight
            + sections as f64 * self.scoring.section_weight
            + content as f64 * self.scoring.content_weight;
        overall.round().clamp(0.0, 100.0) as u8
    }

    /// Deterministic suggestion rules: each appends at most one tip; keyword
    /// gaps lead because they move the score most.
    #[allow(clippy::too_many_arguments)]
    fn build_suggestions(
        &self,
        resume: &ResumeRecord,
        job: &JobDescription,
        resume_lower: &str,
        keyword_match: u8,
        format_compatibility: u8,
        section_completeness: u8,
        content_quality: u8,
        format_stats: &FormatStats,
        content_stats: &ContentStats,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        let missing_required: Vec<&str> = job
            .required_skills
            .iter()
            .filter(|kw| !resume_lower.contains(kw.as_str()))
            .map(|kw| kw.as_str())
            .take(5)
            .collect();
        if keyword_match < 85 && !missing_required.is_empty() {
            suggestions.push(format!(
                "Add these required skills from the job posting: {}",
                missing_required.join(", ")
            ));
        }

        let missing_general: Vec<&str> = job
            .extracted_keywords
            .iter()
            .filter(|kw| {
                !job.required_skills.contains(kw) && !resume_lower.contains(kw.as_str())
            })
            .map(|kw| kw.as_str())
            .take(3)
            .collect();
        if keyword_match < 70 && !missing_general.is_empty() {
            suggestions.push(format!(
                "Weave more of the job's keywords into your summary and bullets (e.g. {})",
                missing_general.join(", ")
            ));
        }

        if format_compatibility < 95 && format_stats.dash_present {
            suggestions.push(
                "Replace em/en dashes with plain hyphens; many ATS parsers mishandle them"
                    .to_string(),
            );
        }

        if format_compatibility < 95 {
            if let Some(section) = format_stats.empty_sections.first() {
                suggestions.push(format!(
                    "Add content to your {section} section; an empty core section reads as a parsing failure"
                ));
            }
        }

        if section_completeness < 85 && resume.summary.chars().count() < 100 {
            suggestions.push(
                "Expand your professional summary to at least 100 characters with role-specific keywords"
                    .to_string(),
            );
        }

        if content_quality < 85 && !content_stats.weak_examples.is_empty() {
            suggestions.push(format!(
                "Rewrite bullets that start with weak verbs ({}) using strong action verbs",
                content_stats.weak_examples.join(", ")
            ));
        }

        if content_quality < 85 && content_stats.bullet_count > 0 && content_stats.metric_ratio < 0.4
        {
            suggestions.push(
                "Quantify more bullets with percentages, dollar amounts, or counts".to_string(),
            );
        }

        suggestions.truncate(self.scoring.max_suggestions);
        suggestions
    }
}

/// First word of a bullet with list markers and punctuation stripped.
fn first_word(bullet: &str) -> Option<String> {
    bullet
        .trim_start_matches(['-', '•', '*', ' '])
        .split_whitespace()
        .next()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|w| !w.is_empty())
}
