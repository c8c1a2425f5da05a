//! Import binding collection.

use swc_common::Span;
use swc_ecma_ast::{ImportDecl, ImportSpecifier};

use crate::core::collect::helpers::module_export_name;

/// Exported name recorded for default imports.
pub const DEFAULT_EXPORT: &str = "default";

/// Exported name recorded for namespace imports.
pub const NAMESPACE_IMPORT: &str = "*";

/// How one local name was imported.
///
/// ```typescript
/// import { styles as shared } from "./styles";
/// // local_name: "shared", exported_name: "styles", module_specifier: "./styles"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub local_name: String,
    pub module_specifier: String,
    /// "default" for default imports, "*" for namespace imports.
    pub exported_name: String,
    /// Span of the import specifier.
    pub span: Span,
}

impl ImportBinding {
    pub fn is_namespace(&self) -> bool {
        self.exported_name == NAMESPACE_IMPORT
    }
}

/// Collect the bindings introduced by one import declaration.
///
/// Type-only imports (`import type { X }` and `import { type X }`) are skipped.
pub fn collect_import(node: &ImportDecl) -> Vec<ImportBinding> {
    if node.type_only {
        return Vec::new();
    }
    let Some(module_specifier) = node.src.value.as_str() else {
        return Vec::new();
    };

    node.specifiers
        .iter()
        .filter_map(|specifier| match specifier {
            ImportSpecifier::Named(named) if named.is_type_only => None,
            ImportSpecifier::Named(named) => {
                let local_name = named.local.sym.to_string();
                let exported_name = named
                    .imported
                    .as_ref()
                    .map(module_export_name)
                    .unwrap_or_else(|| local_name.clone());
                Some(ImportBinding {
                    local_name,
                    module_specifier: module_specifier.to_string(),
                    exported_name,
                    span: named.span,
                })
            }
            ImportSpecifier::Default(default) => Some(ImportBinding {
                local_name: default.local.sym.to_string(),
                module_specifier: module_specifier.to_string(),
                exported_name: DEFAULT_EXPORT.to_string(),
                span: default.span,
            }),
            ImportSpecifier::Namespace(ns) => Some(ImportBinding {
                local_name: ns.local.sym.to_string(),
                module_specifier: module_specifier.to_string(),
                exported_name: NAMESPACE_IMPORT.to_string(),
                span: ns.span,
            }),
        })
        .collect()
}
