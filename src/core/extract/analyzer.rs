//! Single-pass module traversal.
//!
//! One [`ModuleAnalyzer`] walks one module and dispatches:
//! - variable declarators initialized with a factory call to the declaration extractor,
//! - member expressions and JSX attribute values to the reference detector,
//! - import declarations to binding collection and, when a resolution session
//!   is attached, to the cross-module resolver.
//!
//! Nothing is reported here; [`ModuleAnalysis`] is cross-referenced afterwards
//! by the unused style rule.

use std::path::Path;

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{
    ImportDecl, JSXAttr, JSXAttrValue, JSXExpr, MemberExpr, Module, Pat, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use crate::core::{
    SourceContext,
    collect::{
        ImportBinding, StyleSheetMatcher, collect_import,
        declarations::{ExtractedSheet, extract_from_expr},
    },
    components::ComponentDetector,
    extract::references::{collect_references, reference_from_member},
    parsers::jsx::{ParsedModule, source_context_at},
    registry::{ReferenceSet, StyleDeclaration, StyleRegistry},
    resolve::{CrossModuleResolver, ExportedSheet, ResolutionSession, ResolveError},
};

/// An import that could not be resolved, located at the import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub location: SourceContext,
    pub specifier: String,
    pub error: ResolveError,
}

/// Everything one module traversal produces.
#[derive(Debug, Clone, Default)]
pub struct ModuleAnalysis {
    pub file_path: String,
    pub registry: StyleRegistry,
    pub references: ReferenceSet,
    pub imports: Vec<ImportBinding>,
    pub import_issues: Vec<ImportFailure>,
    /// Whether the module defines at least one UI component.
    pub has_components: bool,
}

pub struct ModuleAnalyzer<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    matcher: &'a StyleSheetMatcher,
    /// Present only when imported sheets should be resolved.
    session: Option<ResolutionSession<'a>>,
    registry: StyleRegistry,
    references: ReferenceSet,
    imports: Vec<ImportBinding>,
    import_issues: Vec<ImportFailure>,
}

impl<'a> ModuleAnalyzer<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, matcher: &'a StyleSheetMatcher) -> Self {
        Self {
            file_path,
            source_map,
            matcher,
            session: None,
            registry: StyleRegistry::new(),
            references: ReferenceSet::new(),
            imports: Vec::new(),
            import_issues: Vec::new(),
        }
    }

    /// Resolve imported sheets through `session` while traversing.
    pub fn with_resolution(mut self, session: ResolutionSession<'a>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn analyze(mut self, module: &Module) -> ModuleAnalysis {
        module.visit_with(&mut self);
        ModuleAnalysis {
            file_path: self.file_path.to_string(),
            registry: self.registry,
            references: self.references,
            imports: self.imports,
            import_issues: self.import_issues,
            has_components: false,
        }
    }

    fn context_at(&self, span: Span) -> SourceContext {
        source_context_at(self.source_map, self.file_path, span.lo)
    }

    fn register_local_sheet(&mut self, sheet_name: &str, sheet: ExtractedSheet) {
        let declarations: Vec<_> = sheet
            .entries
            .iter()
            .map(|entry| StyleDeclaration::new(sheet_name, &entry.key, self.context_at(entry.span)))
            .collect();
        self.registry.add_sheet(sheet_name, declarations, sheet.opaque);
    }

    fn register_imported_sheet(&mut self, binding: &ImportBinding, sheet: ExportedSheet) {
        let location = self.context_at(binding.span);
        let declarations = sheet
            .keys
            .iter()
            .map(|key| StyleDeclaration::new(&binding.local_name, key, location.clone()));
        self.registry
            .add_sheet(&binding.local_name, declarations, sheet.opaque);
    }

    fn resolve_binding(&mut self, binding: &ImportBinding) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.resolve_import(binding, Path::new(self.file_path)) {
            Ok(Some(sheet)) => {
                debug!(
                    file = self.file_path,
                    local = binding.local_name.as_str(),
                    keys = sheet.keys.len(),
                    "resolved imported style sheet"
                );
                self.register_imported_sheet(binding, sheet);
            }
            Ok(None) => {}
            Err(error) => {
                let failure = ImportFailure {
                    location: self.context_at(binding.span),
                    specifier: binding.module_specifier.clone(),
                    error,
                };
                self.import_issues.push(failure);
            }
        }
    }
}

impl Visit for ModuleAnalyzer<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Pat::Ident(binding) = &node.name
            && let Some(init) = &node.init
            && let Some(sheet) = extract_from_expr(self.matcher, init)
        {
            self.register_local_sheet(binding.id.sym.as_str(), sheet);
        }
        node.visit_children_with(self);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if let Some(reference) = reference_from_member(node) {
            self.references.insert(reference);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        if let Some(JSXAttrValue::JSXExprContainer(container)) = &node.value
            && let JSXExpr::Expr(expr) = &container.expr
        {
            let mut found = Vec::new();
            collect_references(expr, &mut found);
            self.references.extend(found);
        }
        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        for binding in collect_import(node) {
            self.resolve_binding(&binding);
            self.imports.push(binding);
        }
    }
}

/// Analyze a parsed module.
///
/// Imported sheets are resolved only when a resolver is given.
pub fn analyze_module(
    parsed: &ParsedModule,
    file_path: &str,
    matcher: &StyleSheetMatcher,
    resolver: Option<&CrossModuleResolver>,
    detector: &dyn ComponentDetector,
) -> ModuleAnalysis {
    let mut analyzer = ModuleAnalyzer::new(file_path, &parsed.source_map, matcher);
    if let Some(resolver) = resolver {
        analyzer = analyzer.with_resolution(resolver.session());
    }
    let mut analysis = analyzer.analyze(&parsed.module);
    analysis.has_components = detector.has_components(&parsed.module);
    analysis
}
