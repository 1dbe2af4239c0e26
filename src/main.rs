//! Resume tailor: deterministic resume and job description analysis tool

use clap::Parser;
use log::{error, info};
use resume_tailor::analysis::{analyze_keywords, AtsScorer, KeywordExtractor};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::config::Config;
use resume_tailor::error::{Result, TailorError};
use resume_tailor::model::ResumeRecord;
use resume_tailor::output::{formatter_for, TailorReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {e}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| TailorError::InvalidInput(format!("Resume file: {e}")))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| TailorError::InvalidInput(format!("Job description file: {e}")))?;

            config.output.format =
                cli::parse_output_format(&output).map_err(TailorError::InvalidInput)?;
            config.output.detailed = detailed;

            info!("Analyzing {} against {}", resume.display(), job.display());

            let resume_json = std::fs::read_to_string(&resume)?;
            let resume_record: ResumeRecord = serde_json::from_str(&resume_json)?;
            let job_text = std::fs::read_to_string(&job)?;

            let extractor = KeywordExtractor::new();
            let job_description = extractor.extract(&job_text);

            let keywords = analyze_keywords(&resume_record, &job_description);
            let score =
                AtsScorer::with_config(config.scoring.clone()).analyze(&resume_record, &job_description);
            let report = TailorReport::new(&job_description, keywords, score);

            let rendered = formatter_for(&config.output).format_report(&report)?;
            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Extract { job, output } => {
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| TailorError::InvalidInput(format!("Job description file: {e}")))?;
            let format = cli::parse_output_format(&output).map_err(TailorError::InvalidInput)?;

            let job_text = std::fs::read_to_string(&job)?;
            let job_description = KeywordExtractor::new().extract(&job_text);

            match format {
                resume_tailor::config::OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&job_description)?);
                }
                resume_tailor::config::OutputFormat::Console => {
                    println!("Title:   {}", job_description.job_title);
                    println!("Company: {}", job_description.company_name);
                    if !job_description.required_skills.is_empty() {
                        println!("\nRequired skills:");
                        for skill in &job_description.required_skills {
                            println!("  • {skill}");
                        }
                    }
                    if !job_description.extracted_keywords.is_empty() {
                        println!("\nKeywords:");
                        for keyword in &job_description.extracted_keywords {
                            println!("  • {keyword}");
                        }
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Scoring weights:");
                println!("  Keyword match:        {:.0}%", config.scoring.keyword_weight * 100.0);
                println!("  Format compatibility: {:.0}%", config.scoring.format_weight * 100.0);
                println!("  Section completeness: {:.0}%", config.scoring.section_weight * 100.0);
                println!("  Content quality:      {:.0}%", config.scoring.content_weight * 100.0);
                println!("Max suggestions: {}", config.scoring.max_suggestions);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
