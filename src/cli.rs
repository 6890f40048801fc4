use crate::model::IssueSeverity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_NAME: &str = "ARCHITECTURE_REPORT";

#[derive(Parser, Debug)]
#[command(name = "dartmap")]
#[command(about = "Map the dependency graph and architecture of a Flutter/Dart project")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root (defaults to current directory)
    /// Used when no subcommand is specified
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze the project and print or save a report (default behavior)
    Analyze(AnalyzeArgs),

    /// Generate a starter .dartmap.toml configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Project root containing pubspec.yaml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Only report these files (paths relative to the project root).
    /// Usage is still computed over the whole project.
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub files: Vec<String>,

    /// Where the report goes
    #[arg(long, default_value = "stdout")]
    pub output: OutputTarget,

    /// Report file name without extension, used with --output file
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OUTPUT_NAME)]
    pub output_file: String,

    /// Minimum severity to report
    #[arg(long, default_value = "info")]
    pub min_severity: IssueSeverity,

    /// Exit with status 1 when a reported cycle exists
    #[arg(long)]
    pub fail_on_cycles: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            format: OutputFormat::Json,
            files: Vec::new(),
            output: OutputTarget::Stdout,
            output_file: DEFAULT_OUTPUT_NAME.to_string(),
            min_severity: IssueSeverity::Info,
            fail_on_cycles: false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Project root (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Md,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File,
}
