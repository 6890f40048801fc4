mod analyze;
mod init;

pub use analyze::{cmd_analyze, run_analysis};
pub use init::{cmd_init, cmd_init_with_fs};

use crate::config::Config;
use crate::fs::FileSystem;
use crate::ignore_rules::IgnoreRules;
use crate::project::Project;
use crate::style;
use std::path::Path;

/// Shared context for command execution: the opened project plus its
/// configuration and ignore rules.
pub struct CommandContext {
    pub project: Project,
    pub config: Config,
    pub ignore_rules: IgnoreRules,
}

impl CommandContext {
    /// Resolve the path, open the project and load its configuration.
    /// Returns Err(exit_code) if setup fails; broken config files only warn.
    pub fn new(path: &Path, fs: &dyn FileSystem) -> Result<Self, i32> {
        let resolved_path = match path.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                style::error(&format!("Could not resolve path: {}", style::path(path)));
                return Err(1);
            }
        };

        let project = match Project::open(&resolved_path, fs) {
            Ok(project) => project,
            Err(e) => {
                style::error(&e.to_string());
                return Err(1);
            }
        };

        let config = Config::load(&project.root, fs).unwrap_or_else(|e| {
            style::warning(&format!("Failed to load config: {}. Using defaults.", e));
            Config::default()
        });

        let ignore_rules = IgnoreRules::load(&project.root, fs).unwrap_or_else(|e| {
            style::warning(&format!(
                "Failed to read ignore file: {}. Using default patterns.",
                e
            ));
            IgnoreRules::default()
        });

        Ok(Self {
            project,
            config,
            ignore_rules,
        })
    }
}
