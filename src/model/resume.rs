//! Structured resume records supplied by the caller
//!
//! The analysis engine treats these as read-only input. Every list field
//! defaults to an empty list on deserialization, so an absent section is an
//! empty collection rather than a missing key.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub personal: PersonalInfo,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    /// Flat skill list. Insertion order matters for display, not matching.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Grouped skills. When present, supersedes the flat list for display;
    /// both feed text flattening.
    #[serde(default)]
    pub skill_categories: Option<Vec<SkillCategory>>,

    #[serde(default)]
    pub certifications: Vec<String>,

    /// Derived from keyword matching output; the scorer reads it as a bonus
    /// signal when present.
    #[serde(default)]
    pub core_competencies: Option<Vec<String>>,

    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    /// Bullet strings may carry inline `**bold**` markup.
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl ResumeRecord {
    /// Total skill count, preferring category groupings when present.
    pub fn skill_count(&self) -> usize {
        match &self.skill_categories {
            Some(categories) if !categories.is_empty() => {
                categories.iter().map(|c| c.skills.len()).sum()
            }
            _ => self.skills.len(),
        }
    }
}
