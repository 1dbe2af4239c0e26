//! Integration tests for the resume tailor

use resume_tailor::analysis::{analyze_keywords, AtsScorer, KeywordExtractor};
use resume_tailor::config::ScoringConfig;
use resume_tailor::model::ResumeRecord;
use resume_tailor::output::{JsonFormatter, OutputFormatter, TailorReport};

fn load_fixture_resume() -> ResumeRecord {
    let json = std::fs::read_to_string("tests/fixtures/sample_resume.json").unwrap();
    serde_json::from_str(&json).unwrap()
}

fn load_fixture_job_text() -> String {
    std::fs::read_to_string("tests/fixtures/sample_job.txt").unwrap()
}

#[test]
fn test_end_to_end_analysis_pipeline() {
    let resume = load_fixture_resume();
    let job_text = load_fixture_job_text();

    let job = KeywordExtractor::new().extract(&job_text);
    assert!(job.job_title.contains("Data Engineer"), "got {}", job.job_title);
    assert!(job.company_name.contains("DataFlow"), "got {}", job.company_name);
    for skill in ["python", "aws", "spark", "sql", "airflow", "kafka"] {
        assert!(
            job.required_skills.contains(&skill.to_string()),
            "missing required skill {skill}"
        );
    }

    let keywords = analyze_keywords(&resume, &job);
    assert!(keywords.matched_keywords.contains(&"python".to_string()));
    assert!(keywords.matched_keywords.contains(&"spark".to_string()));

    let score = AtsScorer::new().analyze(&resume, &job);
    assert!(score.overall > 50, "strong fixture scored {}", score.overall);
    for s in [
        score.overall,
        score.keyword_match,
        score.format_compatibility,
        score.section_completeness,
        score.content_quality,
    ] {
        assert!(s <= 100);
    }
}

#[test]
fn test_inline_bullet_requirements_extraction() {
    let text = "Seeking a Senior Data Engineer. \
        Requirements: - 5+ years Python - Experience with AWS and Spark - Strong SQL skills";
    let job = KeywordExtractor::new().extract(text);
    assert_eq!(job.job_title, "Senior Data Engineer");
    for skill in ["python", "aws", "spark", "sql"] {
        assert!(
            job.required_skills.contains(&skill.to_string()),
            "missing {skill} in {:?}",
            job.required_skills
        );
    }
}

#[test]
fn test_extraction_never_fails_on_degenerate_input() {
    let extractor = KeywordExtractor::new();
    for text in ["", "   \n\t  ", "!!!???", "a", &"x".repeat(100_000)] {
        let job = extractor.extract(text);
        assert!(!job.job_title.is_empty());
        assert!(!job.company_name.is_empty());
        assert!(job.extracted_keywords.len() <= 25);
        assert!(job.required_skills.len() <= 15);
    }
}

#[test]
fn test_keywords_are_lowercase_unique_and_partitioned() {
    let resume = load_fixture_resume();
    let job = KeywordExtractor::new().extract(&load_fixture_job_text());

    let mut seen = std::collections::HashSet::new();
    for kw in &job.extracted_keywords {
        assert_eq!(kw, &kw.to_lowercase());
        assert!(seen.insert(kw.clone()), "duplicate keyword {kw}");
    }

    let analysis = analyze_keywords(&resume, &job);
    for kw in &analysis.matched_keywords {
        assert!(!analysis.missing_keywords.contains(kw));
    }
    assert_eq!(
        analysis.matched_keywords.len() + analysis.missing_keywords.len(),
        analysis.all_keywords.len()
    );
}

#[test]
fn test_generic_buzzwords_never_surface_as_keywords() {
    let text = "Requirements:\n\
        - Leadership and communication\n\
        - Excel and Word proficiency\n\
        - Experience with Python";
    let job = KeywordExtractor::new().extract(text);
    for noise in ["leadership", "communication", "excel", "word", "teamwork"] {
        assert!(
            !job.extracted_keywords.contains(&noise.to_string()),
            "buzzword leaked: {noise}"
        );
    }
    assert!(job.extracted_keywords.contains(&"python".to_string()));
}

#[test]
fn test_overall_score_matches_component_weighting() {
    let resume = load_fixture_resume();
    let job = KeywordExtractor::new().extract(&load_fixture_job_text());
    let weights = ScoringConfig::default();
    let score = AtsScorer::with_config(weights.clone()).analyze(&resume, &job);

    let expected = (score.keyword_match as f64 * weights.keyword_weight
        + score.format_compatibility as f64 * weights.format_weight
        + score.section_completeness as f64 * weights.section_weight
        + score.content_quality as f64 * weights.content_weight)
        .round() as u8;
    assert_eq!(score.overall, expected);
}

#[test]
fn test_full_pipeline_is_deterministic() {
    let resume = load_fixture_resume();
    let job_text = load_fixture_job_text();
    let extractor = KeywordExtractor::new();
    let scorer = AtsScorer::new();

    let job_a = extractor.extract(&job_text);
    let job_b = extractor.extract(&job_text);
    assert_eq!(job_a, job_b);
    assert_eq!(
        analyze_keywords(&resume, &job_a),
        analyze_keywords(&resume, &job_b)
    );
    assert_eq!(scorer.analyze(&resume, &job_a), scorer.analyze(&resume, &job_b));
}

#[test]
fn test_report_serializes_and_round_trips() {
    let resume = load_fixture_resume();
    let job = KeywordExtractor::new().extract(&load_fixture_job_text());
    let keywords = analyze_keywords(&resume, &job);
    let score = AtsScorer::new().analyze(&resume, &job);
    let report = TailorReport::new(&job, keywords, score);

    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let parsed: TailorReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.job_title, report.job_title);
    assert_eq!(parsed.score, report.score);
    assert_eq!(parsed.keywords, report.keywords);
}

#[test]
fn test_suggested_competencies_are_display_ready() {
    let resume = load_fixture_resume();
    let job = KeywordExtractor::new().extract(&load_fixture_job_text());
    let analysis = analyze_keywords(&resume, &job);

    assert!(!analysis.suggested_competencies.is_empty());
    assert!(analysis.suggested_competencies.len() <= 10);
    for competency in &analysis.suggested_competencies {
        // Capitalized for display, not raw lower-case match tokens.
        let first = competency.chars().next().unwrap();
        assert!(first.is_uppercase() || first.is_numeric(), "raw token: {competency}");
    }
}
