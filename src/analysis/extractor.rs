//! Job description keyword extraction
//!
//! Parses free-form job posting text into a structured [`JobDescription`].
//! Extraction is total: any input, including the empty string, produces a
//! best-effort result with placeholder title/company and possibly empty
//! keyword lists. It never fails.

use crate::analysis::patterns;
use crate::model::job::{JobDescription, MAX_EXTRACTED_KEYWORDS, MAX_REQUIRED_SKILLS};
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Longest keyword accepted by the validity filter.
const MAX_KEYWORD_CHARS: usize = 40;

/// Longest span (in chars) scanned after a requirements heading when no
/// terminating section follows.
const MAX_SECTION_SPAN: usize = 1500;

pub struct KeywordExtractor {
    pattern_table: Vec<(&'static str, Regex)>,
    title_patterns: Vec<Regex>,
    company_patterns: Vec<Regex>,
    heading_line: Regex,
    acronym: Regex,
    whitespace: Regex,
    edge_trim: Regex,
    requirements_heading: Regex,
    section_terminator: Regex,
    bullet_split: Regex,
    years_of_experience: Regex,
    degree_requirement: Regex,
    job_title: Regex,
    seniority_prefix: Regex,
    article_prefix: Regex,
    short_acronyms: HashSet<&'static str>,
    filler_words: HashSet<&'static str>,
    blacklist: HashSet<&'static str>,
    title_compounds: HashSet<&'static str>,
    acronym_stopwords: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        let title_patterns = vec![
            // Explicit label: "Position: Senior Data Engineer"
            patterns::compile(r"(?im)^\s*(?:position|role|job title|title)\s*[:\-]\s*(.+)$"),
            // "We are seeking a Senior Data Engineer to ...". The capture
            // must start with a capital so lower-case prose after "hiring"
            // falls through to the later patterns.
            patterns::compile(
                r"(?:[Hh]iring|[Ss]eeking|[Ll]ooking for)\s+(?:an?\s+)?([A-Z][A-Za-z/&+ ]{2,60}?)(?:\s+(?:to|who|at|in|for)\b|[.,;\n]|$)",
            ),
            // A line ending in a recognized role suffix
            patterns::compile(
                r"(?m)^\s*((?:[A-Z][\w&/+.-]*\s+){0,4}(?:Engineer|Developer|Manager|Analyst|Architect|Lead|Director|Specialist|Scientist|Designer|Officer|Coordinator|Associate|Consultant))\b",
            ),
        ];

        let company_patterns = vec![
            patterns::compile(r"(?im)^\s*(?:company|employer|organization)\s*[:\-]\s*(.+)$"),
            // "Acme Robotics is a|an|the|seeking|hiring ..."
            patterns::compile(
                r"(?m)([A-Z][A-Za-z0-9&.']+(?:\s+[A-Z][A-Za-z0-9&.']+){0,3})\s+is\s+(?:a|an|the|seeking|hiring|looking)\b",
            ),
            // "About Acme", "Join Acme", "at Acme"
            patterns::compile(
                r"\b(?:About|Join|at|At)\s+([A-Z][A-Za-z0-9&.']+(?:\s+[A-Z][A-Za-z0-9&.']+){0,3})",
            ),
        ];

        Self {
            pattern_table: patterns::keyword_pattern_table(),
            title_patterns,
            company_patterns,
            heading_line: patterns::compile(r"^[A-Z][A-Za-z ,&/'-]{2,60}$"),
            acronym: patterns::compile(r"\b[A-Z]{2,}\b"),
            whitespace: patterns::compile(r"\s+"),
            edge_trim: patterns::compile(r"^\W+|\W+$"),
            requirements_heading: patterns::requirements_heading_pattern(),
            section_terminator: patterns::section_terminator_pattern(),
            bullet_split: patterns::bullet_split_pattern(),
            years_of_experience: patterns::years_of_experience_pattern(),
            degree_requirement: patterns::degree_requirement_pattern(),
            job_title: patterns::job_title_pattern(),
            seniority_prefix: patterns::seniority_prefix_pattern(),
            article_prefix: patterns::article_prefix_pattern(),
            short_acronyms: patterns::short_acronym_whitelist(),
            filler_words: patterns::filler_words(),
            blacklist: patterns::generic_blacklist(),
            title_compounds: patterns::title_compound_whitelist(),
            acronym_stopwords: patterns::acronym_stopwords(),
        }
    }

    /// Extract a structured job description from raw posting text.
    pub fn extract(&self, raw_text: &str) -> JobDescription {
        if raw_text.trim().is_empty() {
            return JobDescription::empty(raw_text);
        }

        let lower = raw_text.to_lowercase();

        let job_title = self.extract_title(raw_text);
        let company_name = self.extract_company(raw_text);

        let mut required_skills = self.extract_required_skills(raw_text);
        required_skills.retain(|kw| self.is_valid_keyword(kw));
        required_skills.truncate(MAX_REQUIRED_SKILLS);

        let mut general = self.run_pattern_battery(&lower);
        for acronym in self.scan_acronyms(raw_text) {
            push_unique(&mut general, acronym);
        }
        general.retain(|kw| self.is_valid_keyword(kw));

        // Required skills carry higher priority, so they lead the list.
        let mut extracted_keywords = required_skills.clone();
        for kw in general {
            push_unique(&mut extracted_keywords, kw);
        }
        extracted_keywords.truncate(MAX_EXTRACTED_KEYWORDS);

        log::debug!(
            "extracted {} keywords ({} required) from {} chars of posting text",
            extracted_keywords.len(),
            required_skills.len(),
            raw_text.len()
        );

        JobDescription {
            text: raw_text.to_string(),
            job_title,
            company_name,
            extracted_keywords,
            required_skills,
        }
    }

    fn extract_title(&self, text: &str) -> String {
        for pattern in &self.title_patterns {
            if let Some(cap) = pattern.captures(text) {
                if let Some(m) = cap.get(1) {
                    let cleaned = self.clean_capture(m.as_str());
                    if !cleaned.is_empty() {
                        return cleaned;
                    }
                }
            }
        }

        // Fall back to a standalone capitalized heading line.
        for line in text.lines().take(5) {
            let trimmed = line.trim();
            if self.heading_line.is_match(trimmed)
                && trimmed.unicode_words().count() <= 6
                && !trimmed.contains('@')
            {
                return self.clean_capture(trimmed);
            }
        }

        crate::model::job::DEFAULT_JOB_TITLE.to_string()
    }

    fn extract_company(&self, text: &str) -> String {
        for pattern in &self.company_patterns {
            if let Some(cap) = pattern.captures(text) {
                if let Some(m) = cap.get(1) {
                    let cleaned = self.clean_capture(m.as_str());
                    if !cleaned.is_empty() {
                        return cleaned;
                    }
                }
            }
        }
        crate::model::job::DEFAULT_COMPANY_NAME.to_string()
    }

    /// Trim whitespace, strip non-word edge characters, and collapse runs of
    /// whitespace in a captured title/company string.
    fn clean_capture(&self, capture: &str) -> String {
        let stripped = self.edge_trim.replace_all(capture.trim(), "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        let mut cleaned = collapsed.into_owned();
        cleaned.truncate(floor_char_boundary(&cleaned, 80));
        cleaned
    }

    /// Run the declarative pattern table over lower-cased text, accumulating
    /// normalized matches with insertion-order deduplication.
    fn run_pattern_battery(&self, lower_text: &str) -> Vec<String> {
        let mut keywords = Vec::new();
        for (_category, pattern) in &self.pattern_table {
            for m in pattern.find_iter(lower_text) {
                let normalized = self
                    .whitespace
                    .replace_all(m.as_str().trim(), " ")
                    .into_owned();
                push_unique(&mut keywords, normalized);
            }
        }
        keywords
    }

    /// Collect ALL-CAPS acronym tokens from original-case text.
    fn scan_acronyms(&self, text: &str) -> Vec<String> {
        let mut acronyms = Vec::new();
        for m in self.acronym.find_iter(text) {
            let token = m.as_str().to_lowercase();
            if token.len() <= 10 && !self.acronym_stopwords.contains(token.as_str()) {
                push_unique(&mut acronyms, token);
            }
        }
        acronyms
    }

    /// Locate requirements/qualifications sections and extract skills from
    /// their bullet items.
    fn extract_required_skills(&self, text: &str) -> Vec<String> {
        let mut skills = Vec::new();

        for heading in self.requirements_heading.find_iter(text) {
            let start = heading.end();
            let rest = &text[start..];
            let end = self
                .section_terminator
                .find(rest)
                .map(|m| m.start())
                .unwrap_or_else(|| rest.len().min(MAX_SECTION_SPAN));
            let section = &rest[..floor_char_boundary(rest, end)];

            for item in self.bullet_split.split(section) {
                let item = item.trim();
                if item.is_empty() {
                    continue;
                }

                // Years-of-experience and degree phrases are requirements
                // about the candidate, not skills; strip them before
                // scanning the remainder.
                let stripped = self.years_of_experience.replace_all(item, " ");
                let stripped = self.degree_requirement.replace_all(&stripped, " ");

                for kw in self.run_pattern_battery(&stripped.to_lowercase()) {
                    push_unique(&mut skills, kw);
                }
                for acronym in self.scan_acronyms(&stripped) {
                    push_unique(&mut skills, acronym);
                }
            }
        }

        skills
    }

    /// Validity filter applied to every candidate keyword. Expects a
    /// lower-cased, whitespace-normalized token.
    fn is_valid_keyword(&self, keyword: &str) -> bool {
        let len = keyword.chars().count();
        if len > MAX_KEYWORD_CHARS {
            return false;
        }
        if len < 4 && !self.short_acronyms.contains(keyword) {
            return false;
        }
        if keyword.unicode_words().count() > 4 {
            return false;
        }
        if keyword
            .split_whitespace()
            .any(|w| self.filler_words.contains(w))
        {
            return false;
        }
        if self.blacklist.contains(keyword) {
            return false;
        }
        if self.job_title.is_match(keyword) && !self.title_compounds.contains(keyword) {
            return false;
        }
        if self.seniority_prefix.is_match(keyword) {
            return false;
        }
        if self.article_prefix.is_match(keyword) {
            return false;
        }
        true
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_ENGINEER_JD: &str = "Seeking a Senior Data Engineer. \
        Requirements: - 5+ years Python - Experience with AWS and Spark - Strong SQL skills";

    const MARKETING_JD: &str = "\
Digital Marketing Manager
About Brightwave: we build analytics for retail brands.

Responsibilities:
- Own paid acquisition across channels

Requirements:
- 3+ years in digital marketing
- Hands-on with Google Analytics, SEO and PPC
- Experience with HubSpot or Salesforce

Benefits: unlimited PTO";

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new()
    }

    #[test]
    fn test_empty_input_yields_placeholders() {
        let job = extractor().extract("");
        assert_eq!(job.job_title, "Position");
        assert_eq!(job.company_name, "Company");
        assert!(job.extracted_keywords.is_empty());
        assert!(job.required_skills.is_empty());
    }

    #[test]
    fn test_garbage_input_never_panics() {
        let job = extractor().extract("@@@@ ???? \u{1F600} ---- 12345");
        assert_eq!(job.job_title, "Position");
        assert_eq!(job.company_name, "Company");
    }

    #[test]
    fn test_seeking_phrase_title_extraction() {
        let job = extractor().extract(DATA_ENGINEER_JD);
        assert!(job.job_title.contains("Data Engineer"), "got {}", job.job_title);
    }

    #[test]
    fn test_explicit_label_title_wins() {
        let job = extractor().extract("Position: Regulatory Affairs Specialist\nWe are hiring.");
        assert_eq!(job.job_title, "Regulatory Affairs Specialist");
    }

    #[test]
    fn test_lowercase_prose_after_hiring_is_not_a_title() {
        let job = extractor().extract("we are hiring across all teams this quarter.");
        assert_eq!(job.job_title, "Position");
    }

    #[test]
    fn test_symbol_edged_skills_are_extracted() {
        let job = extractor().extract(
            "Requirements:\n- Strong C++ and C# skills\n- Experience with .NET and Python",
        );
        for skill in ["c++", "c#", ".net", "python"] {
            assert!(
                job.required_skills.contains(&skill.to_string()),
                "missing {skill} in {:?}",
                job.required_skills
            );
            assert!(job.extracted_keywords.contains(&skill.to_string()));
        }
    }

    #[test]
    fn test_required_skills_from_inline_bullets() {
        let job = extractor().extract(DATA_ENGINEER_JD);
        for skill in ["python", "aws", "spark", "sql"] {
            assert!(job.required_skills.contains(&skill.to_string()), "missing {skill}");
        }
    }

    #[test]
    fn test_no_years_fragments_in_keywords() {
        let job = extractor().extract(DATA_ENGINEER_JD);
        for kw in job.extracted_keywords.iter().chain(&job.required_skills) {
            assert!(
                !kw.contains("years") && !kw.contains("5+"),
                "numeric fragment leaked: {kw}"
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase_and_deduplicated() {
        let job = extractor().extract(MARKETING_JD);
        let mut seen = std::collections::HashSet::new();
        for kw in &job.extracted_keywords {
            assert_eq!(kw, &kw.to_lowercase());
            assert!(seen.insert(kw.clone()), "duplicate keyword: {kw}");
        }
    }

    #[test]
    fn test_company_from_about_phrase() {
        let job = extractor().extract(MARKETING_JD);
        assert!(job.company_name.contains("Brightwave"), "got {}", job.company_name);
    }

    #[test]
    fn test_requirements_section_stops_at_benefits() {
        let job = extractor().extract(MARKETING_JD);
        assert!(job.required_skills.contains(&"google analytics".to_string()));
        assert!(job.required_skills.contains(&"seo".to_string()));
        assert!(job.required_skills.contains(&"ppc".to_string()));
        assert!(job.required_skills.contains(&"hubspot".to_string()));
        // PTO appears only after the Benefits heading
        assert!(!job.required_skills.contains(&"pto".to_string()));
    }

    #[test]
    fn test_required_skills_lead_extracted_keywords() {
        let job = extractor().extract(MARKETING_JD);
        assert!(!job.required_skills.is_empty());
        assert_eq!(job.extracted_keywords[0], job.required_skills[0]);
    }

    #[test]
    fn test_caps_are_enforced() {
        let job = extractor().extract(MARKETING_JD);
        assert!(job.extracted_keywords.len() <= MAX_EXTRACTED_KEYWORDS);
        assert!(job.required_skills.len() <= MAX_REQUIRED_SKILLS);
    }

    #[test]
    fn test_validity_filter_rejects_noise() {
        let ex = extractor();
        assert!(!ex.is_valid_keyword("ab"));
        assert!(ex.is_valid_keyword("sql"));
        assert!(ex.is_valid_keyword("aws"));
        assert!(!ex.is_valid_keyword("leadership"));
        assert!(!ex.is_valid_keyword("excel"));
        assert!(!ex.is_valid_keyword("marketing manager"));
        assert!(ex.is_valid_keyword("project management"));
        assert!(!ex.is_valid_keyword("senior python"));
        assert!(!ex.is_valid_keyword("the cloud platform"));
        assert!(!ex.is_valid_keyword("experience with distributed systems"));
        assert!(!ex.is_valid_keyword("a very long keyword phrase spanning way too many words"));
    }

    #[test]
    fn test_acronym_scan_respects_stopwords() {
        let ex = extractor();
        let acronyms = ex.scan_acronyms("WE USE GXP AND FDA GUIDELINES");
        assert!(acronyms.contains(&"gxp".to_string()));
        assert!(acronyms.contains(&"fda".to_string()));
        assert!(!acronyms.contains(&"and".to_string()));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let ex = extractor();
        assert_eq!(ex.extract(MARKETING_JD), ex.extract(MARKETING_JD));
    }
}
