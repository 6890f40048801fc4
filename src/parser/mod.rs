//! Pattern-based extraction of directives and text metrics from Dart source.
//!
//! This is deliberately not a real parser: conditional imports, string
//! interpolation and directives inside comments are not understood.

mod directives;
mod metrics;

pub use directives::{extract_exports, extract_imports};
pub use metrics::compute_metrics;

use crate::model::FileMetrics;

/// Everything the graph engine needs from one file's content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSource {
    pub imports: Vec<String>,
    pub exports: Vec<String>,
    pub metrics: FileMetrics,
}

pub fn parse_source(source: &str) -> ParsedSource {
    ParsedSource {
        imports: extract_imports(source),
        exports: extract_exports(source),
        metrics: compute_metrics(source),
    }
}
