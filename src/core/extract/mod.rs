//! Module traversal and style reference detection.

pub mod analyzer;
pub mod references;

pub use analyzer::{ImportFailure, ModuleAnalysis, ModuleAnalyzer, analyze_module};
pub use references::{collect_references, reference_from_member};
