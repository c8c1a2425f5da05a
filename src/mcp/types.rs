use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{ImportResolutionIssue, Report, UnusedStyleIssue};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnusedStylesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub style_sheet_object_names: Vec<String>,
    pub enable_imports_check: bool,
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub source_root: String,
    pub ignore_test_files: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            style_sheet_object_names: c.style_sheet_object_names,
            enable_imports_check: c.enable_imports_check,
            ignores: c.ignores,
            includes: c.includes,
            source_root: c.source_root,
            ignore_test_files: c.ignore_test_files,
        }
    }
}

// ============================================================
// Scan Types (scan_unused_styles)
// ============================================================

/// Result of scan_unused_styles operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedStylesScanResult {
    /// Unused styles across all files, before pagination
    pub total_count: usize,
    /// Files containing at least one unused style
    pub total_file_count: usize,
    pub items: Vec<UnusedStyleItem>,
    /// Imports that could not be resolved (only with imports checking)
    pub import_issues: Vec<ImportIssueItem>,
    /// Files that failed to parse
    pub parse_error_count: usize,
    pub pagination: Pagination,
}

/// A single unused style entry
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnusedStyleItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub sheet: String,
    pub key: String,
    pub message: String,
    pub source_line: String,
}

impl From<&UnusedStyleIssue> for UnusedStyleItem {
    fn from(issue: &UnusedStyleIssue) -> Self {
        Self {
            file_path: issue.context.file_path().to_string(),
            line: issue.context.line(),
            col: issue.context.col(),
            sheet: issue.sheet.clone(),
            key: issue.key.clone(),
            message: issue.message(),
            source_line: issue.context.source_line.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportIssueItem {
    pub file_path: String,
    pub line: usize,
    pub specifier: String,
    pub error: String,
    pub is_cycle: bool,
}

impl From<&ImportResolutionIssue> for ImportIssueItem {
    fn from(issue: &ImportResolutionIssue) -> Self {
        Self {
            file_path: issue.context.file_path().to_string(),
            line: issue.context.line(),
            specifier: issue.specifier.clone(),
            error: issue.error.clone(),
            is_cycle: issue.is_cycle,
        }
    }
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
