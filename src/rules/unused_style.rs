//! Unused style detection rule.
//!
//! Cross-references a finished [`ModuleAnalysis`]: every declaration of a
//! non-opaque sheet with no matching reference becomes one issue, in
//! declaration order. Modules without a UI component are skipped; failed
//! imports are reported either way.

use crate::{
    core::{CheckContext, extract::ModuleAnalysis},
    issues::{ImportResolutionIssue, Issue, UnusedStyleIssue},
};

pub fn check_unused_style_issues(ctx: &CheckContext) -> Vec<Issue> {
    ctx.analyses().iter().flat_map(check_module).collect()
}

/// Import failures followed by unused styles for one module.
pub fn check_module(analysis: &ModuleAnalysis) -> Vec<Issue> {
    let imports = check_import_resolution(analysis).into_iter().map(Issue::from);
    let unused = check_unused_styles(analysis).into_iter().map(Issue::from);
    imports.chain(unused).collect()
}

/// Check for declared but unreferenced style entries.
///
/// Returns nothing when the module defines no UI component.
pub fn check_unused_styles(analysis: &ModuleAnalysis) -> Vec<UnusedStyleIssue> {
    if !analysis.has_components {
        return Vec::new();
    }

    analysis
        .registry
        .unused(&analysis.references)
        .into_iter()
        .map(|declaration| UnusedStyleIssue {
            context: declaration.location.clone(),
            sheet: declaration.sheet_name.clone(),
            key: declaration.key.clone(),
        })
        .collect()
}

pub fn check_import_resolution(analysis: &ModuleAnalysis) -> Vec<ImportResolutionIssue> {
    analysis
        .import_issues
        .iter()
        .map(|failure| ImportResolutionIssue {
            context: failure.location.clone(),
            specifier: failure.specifier.clone(),
            error: failure.error.to_string(),
            is_cycle: failure.error.is_cycle(),
        })
        .collect()
}
