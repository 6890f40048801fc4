use crate::model::{AnalysisResult, CodeHealth, FileMetrics, Hotspot, IssueKind, IssueSeverity, Summary};
use crate::output::{GENERATOR, OutputFormatter, relative_path, visible_issues};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

pub struct JsonOutput {
    pub min_severity: IssueSeverity,
    pub generated_at: DateTime<Local>,
}

impl JsonOutput {
    pub fn new(min_severity: IssueSeverity) -> Self {
        Self {
            min_severity,
            generated_at: Local::now(),
        }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new(IssueSeverity::Info)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    meta: JsonMeta<'a>,
    summary_kpis: &'a Summary,
    code_health: &'a CodeHealth,
    hotspots_top_10: &'a [Hotspot],
    cycles: Vec<Vec<String>>,
    issues: Vec<JsonIssue<'a>>,
    files_inventory: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonMeta<'a> {
    project: &'a str,
    analysis_date: String,
    generator: &'static str,
    scope: &'static str,
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    kind: &'a IssueKind,
    severity: IssueSeverity,
    message: &'a str,
    locations: Vec<JsonLocation<'a>>,
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonLocation<'a> {
    path: String,
    context: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    metrics: FileMetrics,
    dependency_graph: JsonDependencies,
}

#[derive(Serialize)]
struct JsonDependencies {
    imports_count: usize,
    used_by_count: usize,
    used_by: Vec<String>,
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()> {
        let report = JsonReport {
            meta: JsonMeta {
                project: &result.project.package_name,
                analysis_date: self.generated_at.to_rfc3339(),
                generator: GENERATOR,
                scope: result.scope.label(),
            },
            summary_kpis: &result.summary,
            code_health: &result.health,
            hotspots_top_10: &result.hotspots,
            cycles: result
                .reported_cycles()
                .iter()
                .map(|cycle| {
                    cycle
                        .path()
                        .iter()
                        .map(|id| relative_path(result, id))
                        .collect()
                })
                .collect(),
            issues: visible_issues(result, self.min_severity)
                .map(|issue| JsonIssue {
                    kind: &issue.kind,
                    severity: issue.severity,
                    message: &issue.message,
                    locations: issue
                        .locations
                        .iter()
                        .map(|l| JsonLocation {
                            path: relative_path(result, &l.file),
                            context: l.context.as_deref(),
                        })
                        .collect(),
                    suggestion: issue.suggestion.as_deref(),
                })
                .collect(),
            files_inventory: result
                .reported_files()
                .into_iter()
                .map(|file| JsonFile {
                    path: file.relative_path.clone(),
                    metrics: file.metrics,
                    dependency_graph: JsonDependencies {
                        imports_count: file.resolved_imports().len(),
                        used_by_count: file.used_by().len(),
                        used_by: file
                            .used_by()
                            .iter()
                            .map(|id| relative_path(result, id))
                            .collect(),
                    },
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::shop_result;
    use serde_json::Value;

    fn render(output: &JsonOutput, targets: &[&str]) -> Value {
        let (_dir, result) = shop_result(targets);
        let mut buffer = Vec::new();
        output.format(&result, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_report_shape() {
        let json = render(&JsonOutput::default(), &[]);

        assert_eq!(json["meta"]["project"], "shop");
        assert_eq!(json["meta"]["scope"], "Full Project");
        assert_eq!(json["summary_kpis"]["reported_files"], 6);
        assert_eq!(json["summary_kpis"]["ignored_files"], 1);
        assert!(json["code_health"]["health_score"].is_u64());
        assert!(json["hotspots_top_10"].as_array().unwrap().is_empty());

        let cycles = json["cycles"].as_array().unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(
            cycles[0],
            serde_json::json!(["lib/app.dart", "lib/state/cart.dart", "lib/app.dart"])
        );

        let files = json["files_inventory"].as_array().unwrap();
        let button = files
            .iter()
            .find(|f| f["path"] == "lib/widgets/button.dart")
            .unwrap();
        assert_eq!(button["dependency_graph"]["used_by_count"], 1);
        assert_eq!(
            button["dependency_graph"]["used_by"],
            serde_json::json!(["lib/app.dart"])
        );
        assert_eq!(button["metrics"]["classes"], 1);
    }

    #[test]
    fn test_issue_kinds_are_tagged() {
        let json = render(&JsonOutput::default(), &[]);
        let issues = json["issues"].as_array().unwrap();

        assert!(issues.iter().any(|i| i["kind"]["type"] == "circular_dependency"
            && i["severity"] == "error"));
        assert!(issues.iter().any(|i| i["kind"]["type"] == "dead_code"
            && i["locations"][0]["path"] == "lib/legacy.dart"));
    }

    #[test]
    fn test_min_severity_filters_issues() {
        let json = render(&JsonOutput::new(IssueSeverity::Error), &[]);
        let issues = json["issues"].as_array().unwrap();

        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i["severity"] == "error"));
    }

    #[test]
    fn test_partial_scope() {
        let json = render(&JsonOutput::default(), &["lib/legacy.dart"]);

        assert_eq!(json["meta"]["scope"], "Partial (Selected Files)");
        assert_eq!(json["files_inventory"].as_array().unwrap().len(), 1);
        // the app/cart cycle has no member in scope
        assert!(json["cycles"].as_array().unwrap().is_empty());
    }
}
