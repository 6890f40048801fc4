use crate::cli::{AnalyzeArgs, OutputFormat, OutputTarget};
use crate::fs::{FileSystem, default_fs};
use crate::output::{JsonOutput, MarkdownOutput, OutputFormatter};
use crate::style;
use std::io::{self, Write};

use super::CommandContext;

pub fn cmd_analyze(args: AnalyzeArgs) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_analysis(&args, default_fs(), &mut out)
}

/// Analyze `args.path` and deliver the report. Anything that is not the
/// report itself goes to stderr.
pub fn run_analysis(args: &AnalyzeArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> i32 {
    let ctx = match CommandContext::new(&args.path, fs) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let root = ctx.project.root.clone();

    style::status(&format!(
        "Analyzing {} in {}...",
        ctx.project.package_name,
        style::path(&root)
    ));
    if !args.files.is_empty() {
        style::status(&format!("Filtering output to {} files...", args.files.len()));
    }

    let result = crate::analysis::analyze(
        ctx.project,
        &ctx.config,
        &ctx.ignore_rules,
        fs,
        &args.files,
    );

    for missing in &result.missing_targets {
        style::warning(&format!(
            "Requested file not found or ignored: {}",
            style::path(missing)
        ));
    }

    let mut buffer = Vec::new();
    let format_result = match args.format {
        OutputFormat::Md => MarkdownOutput::new(args.min_severity).format(&result, &mut buffer),
        OutputFormat::Json => JsonOutput::new(args.min_severity).format(&result, &mut buffer),
    };
    if let Err(e) = format_result {
        style::error(&format!("Failed to format report: {}", e));
        return 1;
    }
    let report = String::from_utf8_lossy(&buffer);

    match args.output {
        OutputTarget::Stdout => {
            let write_result = if args.format == OutputFormat::Md {
                style::render_markdown(&report, out)
            } else {
                write!(out, "{}", report)
            };
            if let Err(e) = write_result {
                style::error(&format!("Failed to write report: {}", e));
                return 1;
            }
        }
        OutputTarget::File => {
            let report_path =
                root.join(format!("{}.{}", args.output_file, args.format.extension()));
            if let Err(e) = fs.write(&report_path, &report) {
                style::error(&format!("Could not write {}: {}", style::path(&report_path), e));
                return 1;
            }
            style::success(&format!("Report written to {}", style::path(&report_path)));
        }
    }

    let cycles = result.reported_cycles().len();
    if args.fail_on_cycles && cycles > 0 {
        style::error(&format!("{} circular dependencies found", cycles));
        return 1;
    }
    0
}
