//! Resume tailor library
//!
//! Deterministic text analysis for resume tailoring: job description keyword
//! extraction, resume/job keyword matching, and ATS compatibility scoring.
//! All analysis functions are pure and synchronous; identical input always
//! produces identical output.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;

pub use config::Config;
pub use error::{Result, TailorError};
