//! Per-module style registry and reference set.
//!
//! The registry maps each sheet name to its declarations in declaration order;
//! the reference set records every `(sheet, key)` seen in the module. Both are
//! owned by a single module analysis and cross-referenced only once traversal
//! has finished.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::core::SourceContext;

/// One named entry of a style sheet, e.g. `label` in
/// `const styles = StyleSheet.create({ label: {} })`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// Local binding the sheet is known by in the analyzed module.
    pub sheet_name: String,
    pub key: String,
    /// Where to report the entry if it turns out unused.
    pub location: SourceContext,
}

impl StyleDeclaration {
    pub fn new(sheet_name: impl Into<String>, key: impl Into<String>, location: SourceContext) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            key: key.into(),
            location,
        }
    }
}

/// All declarations registered under one sheet name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub declarations: Vec<StyleDeclaration>,
    /// Set when the sheet has a spread or computed key, so its full key set
    /// is unknown. Opaque sheets are never reported.
    pub opaque: bool,
}

impl StyleSheet {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.declarations.iter().any(|d| d.key == key)
    }
}

/// A canonical style usage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleReference {
    /// `sheet.key`, `sheet["key"]`, or any composite containing it.
    Key { sheet: String, key: String },
    /// `sheet[expr]`: the key is not statically known, every entry counts as used.
    WholeSheet { sheet: String },
}

impl StyleReference {
    pub fn key(sheet: impl Into<String>, key: impl Into<String>) -> Self {
        StyleReference::Key {
            sheet: sheet.into(),
            key: key.into(),
        }
    }

    pub fn whole_sheet(sheet: impl Into<String>) -> Self {
        StyleReference::WholeSheet {
            sheet: sheet.into(),
        }
    }

    pub fn sheet(&self) -> &str {
        match self {
            StyleReference::Key { sheet, .. } | StyleReference::WholeSheet { sheet } => sheet,
        }
    }
}

/// Append-only set of style references seen in one module.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    references: HashSet<StyleReference>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference: StyleReference) {
        self.references.insert(reference);
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn contains(&self, reference: &StyleReference) -> bool {
        self.references.contains(reference)
    }

    /// True if `sheet.key` is referenced directly or the whole sheet is.
    pub fn is_used(&self, sheet: &str, key: &str) -> bool {
        self.references.contains(&StyleReference::whole_sheet(sheet))
            || self.references.contains(&StyleReference::key(sheet, key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleReference> {
        self.references.iter()
    }
}

impl Extend<StyleReference> for ReferenceSet {
    fn extend<T: IntoIterator<Item = StyleReference>>(&mut self, iter: T) {
        self.references.extend(iter);
    }
}

/// Style sheets declared in (or imported into) one module, keyed by local name.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    sheets: IndexMap<String, StyleSheet>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register declarations under `sheet_name`.
    ///
    /// Registering the same name twice merges the key sets; the first
    /// declaration of a key keeps its location.
    pub fn add_sheet(
        &mut self,
        sheet_name: &str,
        declarations: impl IntoIterator<Item = StyleDeclaration>,
        opaque: bool,
    ) {
        let sheet = self.sheets.entry(sheet_name.to_string()).or_default();
        sheet.opaque |= opaque;
        for declaration in declarations {
            if !sheet.contains_key(&declaration.key) {
                sheet.declarations.push(declaration);
            }
        }
    }

    pub fn mark_opaque(&mut self, sheet_name: &str) {
        self.sheets.entry(sheet_name.to_string()).or_default().opaque = true;
    }

    pub fn sheet(&self, sheet_name: &str) -> Option<&StyleSheet> {
        self.sheets.get(sheet_name)
    }

    pub fn contains_sheet(&self, sheet_name: &str) -> bool {
        self.sheets.contains_key(sheet_name)
    }

    /// Sheets in first-declaration order.
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &StyleSheet)> {
        self.sheets.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Declarations with no matching reference, in declaration order,
    /// sheet by sheet. Opaque sheets are skipped.
    pub fn unused<'a>(&'a self, references: &'a ReferenceSet) -> Vec<&'a StyleDeclaration> {
        self.sheets
            .iter()
            .filter(|(_, sheet)| !sheet.opaque)
            .flat_map(move |(name, sheet)| {
                sheet
                    .declarations
                    .iter()
                    .filter(move |d| !references.is_used(name, &d.key))
            })
            .collect()
    }
}
