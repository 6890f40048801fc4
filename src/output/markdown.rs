use crate::model::{AnalysisResult, Issue, IssueKind, IssueSeverity, SourceFile};
use crate::output::{OutputFormatter, relative_path, visible_issues};
use chrono::{DateTime, Local};
use std::cmp::Reverse;
use std::io::Write;

const CRITICAL_FILES: usize = 15;
const CONSUMERS_PER_FILE: usize = 10;

pub struct MarkdownOutput {
    pub min_severity: IssueSeverity,
    pub generated_at: DateTime<Local>,
}

impl MarkdownOutput {
    pub fn new(min_severity: IssueSeverity) -> Self {
        Self {
            min_severity,
            generated_at: Local::now(),
        }
    }

    fn write_issue_group<W: Write>(
        &self,
        writer: &mut W,
        result: &AnalysisResult,
        title: &str,
        issues: &[&Issue],
    ) -> std::io::Result<()> {
        if issues.is_empty() {
            return Ok(());
        }

        writeln!(writer, "### {}\n", title)?;
        for issue in issues {
            match issue.primary_file() {
                Some(file) => writeln!(
                    writer,
                    "- `{}` - {}",
                    relative_path(result, file),
                    issue.message
                )?,
                None => writeln!(writer, "- {}", issue.message)?,
            }
            if let Some(ref suggestion) = issue.suggestion {
                writeln!(writer, "  → {}", suggestion)?;
            }
        }
        writeln!(writer)
    }

    fn write_file_detail<W: Write>(
        &self,
        writer: &mut W,
        result: &AnalysisResult,
        file: &SourceFile,
    ) -> std::io::Result<()> {
        let metrics = &file.metrics;
        writeln!(writer, "### `{}`\n", file.relative_path)?;
        writeln!(
            writer,
            "- **Metrics:** LOC: {} | Cyclomatic: {} | Cognitive: {}",
            metrics.loc, metrics.complexity, metrics.cognitive_complexity
        )?;

        let usage = file.used_by().len();
        if usage == 0 {
            writeln!(writer, "- _No direct references._")?;
        } else {
            writeln!(writer, "- **Used by ({}):**", usage)?;
            for consumer in file.used_by().iter().take(CONSUMERS_PER_FILE) {
                writeln!(writer, "  - `{}`", relative_path(result, consumer))?;
            }
            if usage > CONSUMERS_PER_FILE {
                writeln!(writer, "  - ... and {} more", usage - CONSUMERS_PER_FILE)?;
            }
        }
        writeln!(writer)
    }
}

impl Default for MarkdownOutput {
    fn default() -> Self {
        Self::new(IssueSeverity::Info)
    }
}

impl OutputFormatter for MarkdownOutput {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "# Architecture Report: {}\n",
            result.project.package_name
        )?;
        writeln!(
            writer,
            "**Date:** {}  ",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(writer, "**Scope:** {}\n", result.scope.label())?;

        writeln!(writer, "## Context\n")?;
        writeln!(
            writer,
            "Only the requested files are listed, but references are computed over the whole project.\n"
        )?;

        let files = result.reported_files();

        // Critical files
        writeln!(writer, "## 🔥 Critical Files\n")?;
        let mut by_usage = files.clone();
        by_usage.sort_by_key(|f| Reverse(f.used_by().len()));
        if by_usage.is_empty() {
            writeln!(writer, "No files in scope.")?;
        }
        for file in by_usage.iter().take(CRITICAL_FILES) {
            writeln!(
                writer,
                "- `{}` (**{}** refs | Complexity: {})",
                file.relative_path,
                file.used_by().len(),
                file.metrics.complexity
            )?;
        }
        writeln!(writer)?;

        // Code health
        let health = &result.health;
        writeln!(writer, "## Code Health\n")?;
        writeln!(writer, "- **Score:** {}/100", health.health_score)?;
        writeln!(
            writer,
            "- High complexity: {} | Large files: {} | Highly coupled: {}",
            health.high_complexity_files, health.large_files_count, health.highly_coupled_files
        )?;
        writeln!(
            writer,
            "- {} files, {} lines, average complexity {:.1}\n",
            result.summary.reported_files, result.summary.total_loc, result.summary.avg_complexity
        )?;

        if !result.hotspots.is_empty() {
            writeln!(writer, "## Hotspots\n")?;
            for hotspot in &result.hotspots {
                writeln!(
                    writer,
                    "- `{}` risk {} ({})",
                    hotspot.path, hotspot.risk_score, hotspot.reason
                )?;
            }
            writeln!(writer)?;
        }

        // Issues
        let issues: Vec<&Issue> = visible_issues(result, self.min_severity).collect();
        if issues.is_empty() {
            writeln!(writer, "## No Issues Found\n")?;
        } else {
            writeln!(writer, "## Issues Found\n")?;

            let circular: Vec<_> = issues
                .iter()
                .copied()
                .filter(|i| matches!(i.kind, IssueKind::CircularDependency))
                .collect();
            if !circular.is_empty() {
                writeln!(writer, "### 🔴 Circular Dependencies\n")?;
                for issue in circular {
                    let walk: Vec<_> = issue
                        .locations
                        .iter()
                        .map(|l| format!("`{}`", relative_path(result, &l.file)))
                        .collect();
                    writeln!(writer, "- {}", walk.join(" → "))?;
                }
                writeln!(writer)?;
            }

            let groups: [(&str, fn(&IssueKind) -> bool); 4] = [
                ("🟡 God Classes", |k| matches!(k, IssueKind::GodClass { .. })),
                ("🟡 High Coupling", |k| matches!(k, IssueKind::HighCoupling { .. })),
                ("🟡 Layer Violations", |k| {
                    matches!(k, IssueKind::LayerViolation { .. })
                }),
                ("🔵 Unused Files", |k| matches!(k, IssueKind::DeadCode)),
            ];
            for (title, belongs) in groups {
                let group: Vec<_> = issues.iter().copied().filter(|i| belongs(&i.kind)).collect();
                self.write_issue_group(writer, result, title, &group)?;
            }
        }

        // Per-file detail
        let mut alphabetical = files;
        alphabetical.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        writeln!(writer, "## 📑 Details ({} files)\n", alphabetical.len())?;
        for file in alphabetical {
            self.write_file_detail(writer, result, file)?;
        }

        Ok(())
    }
}
