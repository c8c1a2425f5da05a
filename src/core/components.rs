//! UI component detection.
//!
//! Unused styles are only reported for modules that define at least one
//! component; a module that merely declares sheets for others is skipped.

use swc_ecma_ast::{
    ArrowExpr, CallExpr, Callee, Class, Expr, Function, JSXElement, JSXFragment, MemberProp, Module,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collect::helpers::unwrap_ts_expr;

const COMPONENT_BASE_CLASSES: &[&str] = &["Component", "PureComponent"];
const CLASS_FACTORIES: &[&str] = &["createClass", "createReactClass"];

/// Decides whether a module defines at least one UI component.
pub trait ComponentDetector: Send + Sync {
    fn has_components(&self, module: &Module) -> bool;
}

/// Detects components by shape:
/// - a class extending `Component` / `PureComponent` (optionally `React.`-qualified),
/// - a `createClass` / `createReactClass` call,
/// - a function, arrow function or method whose body produces JSX.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsxComponentDetector;

impl ComponentDetector for JsxComponentDetector {
    fn has_components(&self, module: &Module) -> bool {
        let mut visitor = ComponentVisitor::default();
        module.visit_with(&mut visitor);
        visitor.found
    }
}

#[derive(Default)]
struct ComponentVisitor {
    function_depth: usize,
    found: bool,
}

/// Name referenced by `Name` or `Object.Name`.
fn trailing_name(expr: &Expr) -> Option<&str> {
    match unwrap_ts_expr(expr) {
        Expr::Ident(ident) => Some(ident.sym.as_str()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => Some(prop.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

impl Visit for ComponentVisitor {
    fn visit_class(&mut self, node: &Class) {
        if let Some(super_class) = &node.super_class
            && trailing_name(super_class).is_some_and(|name| COMPONENT_BASE_CLASSES.contains(&name))
        {
            self.found = true;
        }
        if !self.found {
            node.visit_children_with(self);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && trailing_name(callee).is_some_and(|name| CLASS_FACTORIES.contains(&name))
        {
            self.found = true;
        }
        if !self.found {
            node.visit_children_with(self);
        }
    }

    fn visit_function(&mut self, node: &Function) {
        self.function_depth += 1;
        node.visit_children_with(self);
        self.function_depth -= 1;
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.function_depth += 1;
        node.visit_children_with(self);
        self.function_depth -= 1;
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self.function_depth > 0 {
            self.found = true;
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        if self.function_depth > 0 {
            self.found = true;
            return;
        }
        node.visit_children_with(self);
    }
}
