//! Style sheet declaration extraction.
//!
//! Recognizes `<Factory>.create({ ... })` calls where `<Factory>` is one of
//! the configured style sheet object names, and lists the keys of the object
//! literal argument.

use std::collections::HashSet;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, MemberProp, Prop, PropOrSpread};

use crate::core::collect::helpers::{extract_prop_name, unwrap_ts_expr};

/// Factory object recognized without any configuration.
pub const DEFAULT_STYLE_SHEET_OBJECT: &str = "StyleSheet";

/// Member called on the factory object.
pub const CREATE_METHOD: &str = "create";

/// Configuration-driven matcher for style sheet factory calls.
#[derive(Debug, Clone)]
pub struct StyleSheetMatcher {
    object_names: HashSet<String>,
}

impl Default for StyleSheetMatcher {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl StyleSheetMatcher {
    /// Create a matcher for the default factory plus any additional names.
    pub fn new<I, S>(additional_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut object_names: HashSet<String> =
            additional_names.into_iter().map(Into::into).collect();
        object_names.insert(DEFAULT_STYLE_SHEET_OBJECT.to_string());
        Self { object_names }
    }

    pub fn recognizes(&self, object_name: &str) -> bool {
        self.object_names.contains(object_name)
    }

    /// Check whether a call is `<Factory>.create(...)`.
    pub fn is_style_sheet_call(&self, call: &CallExpr) -> bool {
        let Callee::Expr(callee) = &call.callee else {
            return false;
        };
        let Expr::Member(member) = unwrap_ts_expr(callee) else {
            return false;
        };
        let MemberProp::Ident(method) = &member.prop else {
            return false;
        };
        if method.sym.as_str() != CREATE_METHOD {
            return false;
        }
        matches!(unwrap_ts_expr(&member.obj), Expr::Ident(obj) if self.recognizes(obj.sym.as_str()))
    }
}

/// One key of a style sheet object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub key: String,
    pub span: Span,
}

/// Keys found in one factory call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSheet {
    /// Keys in source order, without duplicates.
    pub entries: Vec<ExtractedEntry>,
    /// True when a spread or computed key hides part of the key set.
    pub opaque: bool,
}

impl ExtractedSheet {
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    fn push(&mut self, key: String, span: Span) {
        if !self.entries.iter().any(|e| e.key == key) {
            self.entries.push(ExtractedEntry { key, span });
        }
    }
}

/// Extract declared keys from a recognized factory call.
///
/// Returns None when the argument is not an object literal (an identifier,
/// a function call, ...), since its keys cannot be enumerated statically.
pub fn extract_style_sheet(call: &CallExpr) -> Option<ExtractedSheet> {
    let arg = call.args.first()?;
    if arg.spread.is_some() {
        return None;
    }
    let Expr::Object(obj) = unwrap_ts_expr(&arg.expr) else {
        return None;
    };

    let mut sheet = ExtractedSheet::default();

    for prop in &obj.props {
        match prop {
            PropOrSpread::Spread(_) => {
                sheet.opaque = true;
            }
            PropOrSpread::Prop(prop) => {
                let name = match &**prop {
                    Prop::KeyValue(kv) => Some(&kv.key),
                    Prop::Method(method) => Some(&method.key),
                    Prop::Getter(getter) => Some(&getter.key),
                    Prop::Setter(setter) => Some(&setter.key),
                    Prop::Shorthand(ident) => {
                        sheet.push(ident.sym.to_string(), ident.span);
                        None
                    }
                    Prop::Assign(_) => None,
                };

                if let Some(name) = name {
                    match extract_prop_name(name) {
                        Some(key) => sheet.push(key, name.span()),
                        None => sheet.opaque = true,
                    }
                }
            }
        }
    }

    Some(sheet)
}

/// Extract keys from an expression if it is a recognized factory call.
pub fn extract_from_expr(matcher: &StyleSheetMatcher, expr: &Expr) -> Option<ExtractedSheet> {
    match unwrap_ts_expr(expr) {
        Expr::Call(call) if matcher.is_style_sheet_call(call) => extract_style_sheet(call),
        _ => None,
    }
}
