use crate::fs::FileSystem;
use crate::model::Layer;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".dartmap.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: Thresholds,
    pub layers: LayerRules,
    /// File names that are expected to have no importers.
    pub entrypoints: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Thresholds {
    pub high_complexity: usize,
    pub large_file_lines: usize,
    pub coupling_used_by: usize,
    pub hotspot_risk: usize,
    pub god_class_methods: usize,
    pub god_class_classes: usize,
}

/// A presentation file importing a data file directly is a layer violation.
#[derive(Debug, Clone)]
pub struct LayerRules {
    pub presentation: Layer,
    pub data: Layer,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    thresholds: Option<RawThresholds>,
    layers: Option<RawLayers>,
    entrypoints: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawThresholds {
    high_complexity: Option<usize>,
    large_file_lines: Option<usize>,
    coupling_used_by: Option<usize>,
    hotspot_risk: Option<usize>,
    god_class_methods: Option<usize>,
    god_class_classes: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawLayers {
    presentation: Option<Vec<String>>,
    data: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            layers: LayerRules::default(),
            entrypoints: default_entrypoints(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_complexity: 50,
            large_file_lines: 300,
            coupling_used_by: 10,
            hotspot_risk: 100,
            god_class_methods: 20,
            god_class_classes: 5,
        }
    }
}

impl Default for LayerRules {
    fn default() -> Self {
        Self {
            presentation: Layer::presentation(),
            data: Layer::data(),
        }
    }
}

fn default_entrypoints() -> Vec<String> {
    vec![
        "main.dart".to_string(),
        "firebase_options.dart".to_string(),
        "bootstrap.dart".to_string(),
    ]
}

impl Config {
    pub fn load(project_path: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let config_path = project_path.join(CONFIG_FILE);

        if !fs.exists(&config_path) {
            return Ok(Self::default());
        }

        let content = fs.read_to_string(&config_path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Thresholds::default();

        let thresholds = match raw.thresholds {
            Some(t) => Thresholds {
                high_complexity: t.high_complexity.unwrap_or(defaults.high_complexity),
                large_file_lines: t.large_file_lines.unwrap_or(defaults.large_file_lines),
                coupling_used_by: t.coupling_used_by.unwrap_or(defaults.coupling_used_by),
                hotspot_risk: t.hotspot_risk.unwrap_or(defaults.hotspot_risk),
                god_class_methods: t.god_class_methods.unwrap_or(defaults.god_class_methods),
                god_class_classes: t.god_class_classes.unwrap_or(defaults.god_class_classes),
            },
            None => defaults,
        };

        let layers = match raw.layers {
            Some(l) => {
                let mut rules = LayerRules::default();
                if let Some(patterns) = l.presentation {
                    rules.presentation.patterns = patterns;
                }
                if let Some(patterns) = l.data {
                    rules.data.patterns = patterns;
                }
                rules
            }
            None => LayerRules::default(),
        };

        Ok(Self {
            thresholds,
            layers,
            entrypoints: raw.entrypoints.unwrap_or_else(default_entrypoints),
        })
    }
}

/// Starter `.dartmap.toml` written by `dartmap init`.
pub fn generate_config_template() -> String {
    let t = Thresholds::default();
    let quote = |patterns: &[String]| {
        patterns
            .iter()
            .map(|p| format!("\"{}\"", p))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"# dartmap configuration

# Files expected to have no importers (never reported as dead code)
entrypoints = [{entrypoints}]

[thresholds]
# Cyclomatic complexity above which a file counts as complex
high_complexity = {high_complexity}
# Lines of code above which a file counts as large
large_file_lines = {large_file_lines}
# Number of importing files above which a file counts as highly coupled
coupling_used_by = {coupling_used_by}
# used_by x complexity above which a file is a hotspot
hotspot_risk = {hotspot_risk}
# Method and class counts used by god-class detection
god_class_methods = {god_class_methods}
god_class_classes = {god_class_classes}

[layers]
# Globs relative to the project root
presentation = [{presentation}]
data = [{data}]
"#,
        entrypoints = quote(&default_entrypoints()),
        high_complexity = t.high_complexity,
        large_file_lines = t.large_file_lines,
        coupling_used_by = t.coupling_used_by,
        hotspot_risk = t.hotspot_risk,
        god_class_methods = t.god_class_methods,
        god_class_classes = t.god_class_classes,
        presentation = quote(&Layer::presentation().patterns),
        data = quote(&Layer::data().patterns),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    #[test]
    fn test_missing_config_uses_defaults() {
        let fs = MockFs::new();
        let config = Config::load(Path::new("/app"), &fs).unwrap();
        assert_eq!(config.thresholds.high_complexity, 50);
        assert!(config.entrypoints.contains(&"main.dart".to_string()));
    }

    #[test]
    fn test_partial_thresholds_keep_defaults() {
        let config = Config::parse("[thresholds]\ncoupling_used_by = 3\n").unwrap();
        assert_eq!(config.thresholds.coupling_used_by, 3);
        assert_eq!(config.thresholds.large_file_lines, 300);
        assert_eq!(config.layers.data.patterns, Layer::data().patterns);
    }

    #[test]
    fn test_layer_override() {
        let config = Config::parse("[layers]\ndata = [\"**/infra/**\"]\n").unwrap();
        assert!(config.layers.data.contains("lib/infra/http.dart"));
        assert!(!config.layers.data.contains("lib/data/http.dart"));
        assert_eq!(config.layers.presentation, Layer::presentation());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(matches!(
            Config::parse("[thresholds\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_template_round_trips() {
        let config = Config::parse(&generate_config_template()).unwrap();
        assert_eq!(config.thresholds.hotspot_risk, 100);
        assert_eq!(config.layers.presentation, Layer::presentation());
        assert_eq!(config.entrypoints, default_entrypoints());
    }
}
