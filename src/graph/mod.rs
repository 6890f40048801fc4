//! Dependency graph construction.
//!
//! The pipeline is discover -> resolve -> link -> detect cycles, and each step
//! consumes the registry produced by the one before it.

mod cycles;
mod discovery;
mod exports;
mod import_graph;
mod registry;
mod resolver;
mod scope;
mod usage;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cycles::detect_cycles;
pub use discovery::{Discovery, collect_source_files, discover, parse_files};
pub use exports::ExportClosure;
pub use import_graph::ImportGraph;
pub use registry::{Linked, Parsed, Registry, Resolved};
pub use resolver::PathResolver;
pub use scope::{ReportScope, select_scope};
