//! Output formatters for analysis reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::TailorReport;
use colored::{Color, Colorize};

/// Trait for rendering a report into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &TailorReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Pick the formatter the output configuration asks for.
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(config.color_output, config.detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {title}\n")
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("FAIR", Color::Yellow),
            40..=59 => ("WEAK", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };
        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{badge}]")
        }
    }

    fn format_score_line(&self, label: &str, score: u8) -> String {
        format!("  {label:<22} {score:>3}% {}\n", self.format_score_badge(score))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &TailorReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY ANALYSIS"));
        output.push_str(&format!(
            "{} at {}\n",
            self.colorize(&report.job_title, Color::Cyan),
            self.colorize(&report.company_name, Color::Cyan)
        ));

        output.push_str(&self.format_header("Overall Score"));
        output.push_str(&format!(
            "  {}% {}\n  {}\n",
            report.score.overall,
            self.format_score_badge(report.score.overall),
            self.colorize(report.verdict(), Color::Cyan)
        ));

        output.push_str(&self.format_header("Score Breakdown"));
        output.push_str(&self.format_score_line("Keyword Match", report.score.keyword_match));
        output.push_str(&self.format_score_line(
            "Format Compatibility",
            report.score.format_compatibility,
        ));
        output.push_str(&self.format_score_line(
            "Section Completeness",
            report.score.section_completeness,
        ));
        output.push_str(&self.format_score_line("Content Quality", report.score.content_quality));

        output.push_str(&self.format_header("Keyword Coverage"));
        output.push_str(&format!(
            "  {} of {} job keywords found ({}%)\n",
            report.keywords.matched_keywords.len(),
            report.keywords.all_keywords.len(),
            report.coverage_percentage()
        ));
        if !report.keywords.missing_keywords.is_empty() {
            let shown = if self.detailed {
                report.keywords.missing_keywords.clone()
            } else {
                report.keywords.missing_keywords.iter().take(8).cloned().collect()
            };
            output.push_str(&format!(
                "  Missing: {}\n",
                self.colorize(&shown.join(", "), Color::Yellow)
            ));
        }
        if self.detailed && !report.keywords.matched_keywords.is_empty() {
            output.push_str(&format!(
                "  Matched: {}\n",
                self.colorize(&report.keywords.matched_keywords.join(", "), Color::Green)
            ));
        }

        if !report.keywords.suggested_competencies.is_empty() {
            output.push_str(&self.format_header("Suggested Core Competencies"));
            for competency in &report.keywords.suggested_competencies {
                output.push_str(&format!("  • {}\n", self.colorize(competency, Color::Green)));
            }
        }

        if !report.score.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions"));
            for (i, suggestion) in report.score.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {suggestion}\n", i + 1));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &TailorReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
