//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `parsers`: JS/TS/JSX parsing via swc
//! - `collect`: Style sheet declarations, imports and exports of one module
//! - `extract`: Per-module analysis (registry + references)
//! - `resolve`: Cross-module resolution of imported style sheets
//! - `components`: React component detection
//! - `registry`: Declared style entries and recorded references
//! - `context`: Per-run state shared by the rules

pub mod collect;
pub mod components;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod registry;
pub mod resolve;

pub use context::CheckContext;
pub use data::{SourceContext, SourceLocation};
