//! Collection of style declarations, import bindings and export tables.
//!
//! Everything here is a pure function of one module's syntax tree. Cross-module
//! lookups live in `crate::core::resolve`.

pub mod declarations;
pub mod exports;
pub mod helpers;
pub mod imports;

pub use declarations::{ExtractedEntry, ExtractedSheet, StyleSheetMatcher, extract_style_sheet};
pub use exports::{ExportSource, ExportTable, collect_exports};
pub use imports::{ImportBinding, collect_import};
