//! Export-binding pass.
//!
//! Lists what a module exports under each name, without resolving anything.
//! The resolver decides later which of these names carry a style sheet.

use indexmap::IndexMap;
use swc_ecma_ast::{
    Decl, ExportSpecifier, Expr, Module, ModuleDecl, ModuleItem, Pat,
};

use crate::core::collect::{
    declarations::{ExtractedSheet, StyleSheetMatcher, extract_from_expr},
    helpers::{module_export_name, unwrap_ts_expr},
    imports::DEFAULT_EXPORT,
};

/// Where the value behind one exported name comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSource {
    /// A module-level binding (`export const x`, `export { x }`, `export default x`).
    /// The binding may itself be imported from another module.
    Local(String),
    /// A factory call exported directly (`export default StyleSheet.create({...})`).
    Sheet(ExtractedSheet),
    /// `export { imported as exported } from "specifier"`.
    Reexport { specifier: String, imported: String },
}

/// The export table of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    /// Exported name to its source, in declaration order. First export of a name wins.
    pub entries: IndexMap<String, ExportSource>,
    /// Specifiers of `export * from "specifier"` declarations.
    pub star_sources: Vec<String>,
}

impl ExportTable {
    pub fn get(&self, exported_name: &str) -> Option<&ExportSource> {
        self.entries.get(exported_name)
    }

    fn insert(&mut self, exported_name: String, source: ExportSource) {
        self.entries.entry(exported_name).or_insert(source);
    }
}

/// Build the export table from the module's top-level items.
pub fn collect_exports(module: &Module, matcher: &StyleSheetMatcher) -> ExportTable {
    let mut table = ExportTable::default();

    for item in &module.body {
        let ModuleItem::ModuleDecl(decl) = item else {
            continue;
        };
        match decl {
            ModuleDecl::ExportDecl(export) => {
                if let Decl::Var(var) = &export.decl {
                    for declarator in &var.decls {
                        if let Pat::Ident(binding) = &declarator.name {
                            let name = binding.id.sym.to_string();
                            table.insert(name.clone(), ExportSource::Local(name));
                        }
                    }
                }
            }
            ModuleDecl::ExportDefaultExpr(export) => {
                if let Expr::Ident(ident) = unwrap_ts_expr(&export.expr) {
                    table.insert(
                        DEFAULT_EXPORT.to_string(),
                        ExportSource::Local(ident.sym.to_string()),
                    );
                } else if let Some(sheet) = extract_from_expr(matcher, &export.expr) {
                    table.insert(DEFAULT_EXPORT.to_string(), ExportSource::Sheet(sheet));
                }
            }
            ModuleDecl::ExportNamed(named) => {
                if named.type_only {
                    continue;
                }
                let specifier = named.src.as_ref().and_then(|src| src.value.as_str());
                for spec in &named.specifiers {
                    let ExportSpecifier::Named(spec) = spec else {
                        continue;
                    };
                    if spec.is_type_only {
                        continue;
                    }
                    let orig = module_export_name(&spec.orig);
                    let exported = spec
                        .exported
                        .as_ref()
                        .map(module_export_name)
                        .unwrap_or_else(|| orig.clone());
                    let source = match specifier {
                        Some(specifier) => ExportSource::Reexport {
                            specifier: specifier.to_string(),
                            imported: orig,
                        },
                        None => ExportSource::Local(orig),
                    };
                    table.insert(exported, source);
                }
            }
            ModuleDecl::ExportAll(all) => {
                if !all.type_only
                    && let Some(specifier) = all.src.value.as_str()
                {
                    table.star_sources.push(specifier.to_string());
                }
            }
            _ => {}
        }
    }

    table
}
