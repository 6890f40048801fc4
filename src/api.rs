//! Library API for dartmap.
//!
//! Unlike the CLI commands, which print and return exit codes, these
//! functions return `Result`s and never write to the terminal.
//!
//! # Example
//!
//! ```no_run
//! use dartmap::{analyze, AnalysisOptions};
//! use std::path::Path;
//!
//! let result = analyze(Path::new("."), AnalysisOptions::default())?;
//! println!("{} files, {} cycles", result.registry.len(), result.cycles.len());
//! for issue in &result.issues {
//!     println!("{}: {}", issue.severity, issue.message);
//! }
//! # Ok::<(), dartmap::DartmapError>(())
//! ```

use crate::analysis;
use crate::config::{Config, ConfigError};
use crate::fs::default_fs;
use crate::ignore_rules::IgnoreRules;
use crate::model::AnalysisResult;
use crate::project::{Project, ProjectError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while setting up an analysis.
#[derive(Debug, Error)]
pub enum DartmapError {
    /// The specified path could not be found or resolved.
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The path is not a Flutter/Dart package.
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error while reading project settings.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for the `analyze` function.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Files to report, relative to the project root or absolute. Empty
    /// reports the whole project.
    pub target_files: Vec<String>,

    /// Extra file-name suffix patterns to skip, on top of the defaults and
    /// the project's `.analyseignore`.
    pub ignore_patterns: Vec<String>,
}

/// Analyze the Flutter/Dart package at `path`.
///
/// # Errors
///
/// Fails if the path does not exist, is not a package with a `lib/`
/// folder, or has a broken `.dartmap.toml` or unreadable `.analyseignore`.
pub fn analyze(path: &Path, options: AnalysisOptions) -> Result<AnalysisResult, DartmapError> {
    let resolved_path = path
        .canonicalize()
        .map_err(|_| DartmapError::PathNotFound(path.to_path_buf()))?;

    let fs = default_fs();
    let project = Project::open(&resolved_path, fs)?;
    let config = Config::load(&project.root, fs)?;

    let mut rules = IgnoreRules::load(&project.root, fs)?;
    rules.extend_from_str(&options.ignore_patterns.join("\n"));

    Ok(analysis::analyze(
        project,
        &config,
        &rules,
        fs,
        &options.target_files,
    ))
}
