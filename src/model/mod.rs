//! Data structures shared across the analysis engine

pub mod job;
pub mod resume;

pub use job::JobDescription;
pub use resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeRecord, SkillCategory,
};
