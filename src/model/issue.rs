use super::FileId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub locations: Vec<Location>,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    CircularDependency,
    HighCoupling { used_by: usize },
    GodClass { reasons: Vec<String> },
    LayerViolation { layer: String },
    DeadCode,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub file: FileId,
    pub context: Option<String>,
}

impl Location {
    pub fn file(file: FileId) -> Self {
        Self {
            file,
            context: None,
        }
    }
}

impl Issue {
    pub fn circular_dependency(cycle: &[FileId]) -> Self {
        let locations = cycle.iter().cloned().map(Location::file).collect();

        let cycle_str: Vec<_> = cycle.iter().map(|id| id.file_name()).collect();

        Self {
            kind: IssueKind::CircularDependency,
            severity: IssueSeverity::Error,
            locations,
            message: format!("Circular dependency: {}", cycle_str.join(" → ")),
            suggestion: Some(
                "Break the cycle by extracting shared types or inverting one import".to_string(),
            ),
        }
    }

    pub fn high_coupling(file: FileId, used_by: usize) -> Self {
        Self {
            kind: IssueKind::HighCoupling { used_by },
            severity: IssueSeverity::Warn,
            locations: vec![Location::file(file)],
            message: format!("Used by {} other files", used_by),
            suggestion: Some(
                "Changes here ripple widely. Consider splitting it or depending on an abstraction"
                    .to_string(),
            ),
        }
    }

    pub fn god_class(file: FileId, reasons: Vec<String>) -> Self {
        Self {
            message: format!("Doing too much: {}", reasons.join(", ")),
            kind: IssueKind::GodClass { reasons },
            severity: IssueSeverity::Warn,
            locations: vec![Location::file(file)],
            suggestion: Some(
                "Consider splitting widgets, state and logic into focused files".to_string(),
            ),
        }
    }

    pub fn layer_violation(layer: String, importer: FileId, imported: FileId) -> Self {
        let message = format!(
            "{} imports {} directly",
            importer.file_name(),
            imported.file_name()
        );
        Self {
            kind: IssueKind::LayerViolation {
                layer: layer.clone(),
            },
            severity: IssueSeverity::Warn,
            locations: vec![
                Location::file(importer),
                Location {
                    file: imported,
                    context: Some(layer),
                },
            ],
            message,
            suggestion: Some(
                "Depend on a domain abstraction (repository interface, use case) instead"
                    .to_string(),
            ),
        }
    }

    pub fn dead_code(file: FileId) -> Self {
        Self {
            kind: IssueKind::DeadCode,
            severity: IssueSeverity::Info,
            locations: vec![Location::file(file)],
            message: "Not imported by any file in the project".to_string(),
            suggestion: Some("Remove it, or add it to `entrypoints` if it is one".to_string()),
        }
    }

    pub fn primary_file(&self) -> Option<&FileId> {
        self.locations.first().map(|l| &l.file)
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Info => write!(f, "info"),
            IssueSeverity::Warn => write!(f, "warn"),
            IssueSeverity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for IssueSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(IssueSeverity::Info),
            "warn" | "warning" => Ok(IssueSeverity::Warn),
            "error" => Ok(IssueSeverity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}
