//! Resume text flattening
//!
//! Serializes a structured resume into one space-joined string used for
//! substring search by the matcher and scorer. Field order is fixed so test
//! fixtures stay reproducible; separators carry no meaning beyond that.

use crate::model::ResumeRecord;

/// Flatten a resume into a single searchable string. Inline `**bold**`
/// markers are stripped so marked-up bullets match plain keywords.
pub fn flatten_resume(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(&resume.personal.name);
    parts.push(&resume.summary);

    for entry in &resume.experience {
        parts.push(&entry.title);
        parts.push(&entry.company);
        for bullet in &entry.bullets {
            parts.push(bullet);
        }
    }

    for entry in &resume.education {
        parts.push(&entry.degree);
        parts.push(&entry.institution);
    }

    for project in &resume.projects {
        parts.push(&project.name);
        parts.push(&project.description);
        for bullet in &project.bullets {
            parts.push(bullet);
        }
    }

    for skill in &resume.skills {
        parts.push(skill);
    }

    if let Some(categories) = &resume.skill_categories {
        for category in categories {
            parts.push(&category.name);
            for skill in &category.skills {
                parts.push(skill);
            }
        }
    }

    if let Some(competencies) = &resume.core_competencies {
        for competency in competencies {
            parts.push(competency);
        }
    }

    for certification in &resume.certifications {
        parts.push(certification);
    }

    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.replace("**", ""))
        .collect::<Vec<_>>()
        .join(" ")
}
