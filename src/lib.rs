pub mod analysis;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod graph;
pub mod ignore_rules;
pub mod logger;
pub mod model;
pub mod output;
pub mod parser;
pub mod project;
pub mod style;

pub use api::{AnalysisOptions, DartmapError, analyze};
pub use cli::Cli;
pub use commands::{cmd_analyze, cmd_init};
pub use config::Config;
pub use model::AnalysisResult;
