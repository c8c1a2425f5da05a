//! Cross-module style resolution.
//!
//! Resolves an imported local binding to the style sheet another module
//! exports under the imported name. Dependencies are parsed once per run and
//! summarized into a [`ResolvedModule`] (local sheets, imports, export table);
//! export lookups then walk those summaries, following re-exports and
//! `export *` declarations.
//!
//! # Concurrency
//!
//! A [`CrossModuleResolver`] is shared by all module analyses of one run. Its
//! cache is guarded by a `Mutex` that is only held for lookups and inserts,
//! never while a dependency is being loaded or parsed. Each analyzed module
//! opens its own [`ResolutionSession`], which owns the in-progress set used for
//! cycle detection.

use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use thiserror::Error;
use tracing::debug;

use crate::core::{
    collect::{
        ExportSource, ExportTable, ExtractedSheet, ImportBinding, StyleSheetMatcher,
        collect_exports, imports::DEFAULT_EXPORT,
    },
    extract::ModuleAnalyzer,
    parsers::jsx::{SOURCE_EXTENSIONS, is_source_file, parse_source},
    registry::{StyleRegistry, StyleSheet},
};

/// Specifiers that never carry project style sheets.
pub const RESERVED_SPECIFIERS: &[&str] = &["react", "react-native"];

/// Why an import could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Cannot resolve module '{specifier}'")]
    NotFound { specifier: String },
    #[error("Failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
    #[error("{message}")]
    Parse { path: PathBuf, message: String },
    #[error("Import cycle detected through {}", path.display())]
    Cycle { path: PathBuf },
}

impl ResolveError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, ResolveError::Cycle { .. })
    }
}

/// Locates and reads modules referenced by import specifiers.
pub trait ModuleLoader: Send + Sync {
    /// Locate the module `specifier` refers to from `referencing_file`.
    ///
    /// `Ok(None)` means the import should be skipped (a non-source target or
    /// a package that is not installed).
    fn resolve(
        &self,
        specifier: &str,
        referencing_file: &Path,
    ) -> Result<Option<PathBuf>, ResolveError>;

    /// Read the text of a resolved module.
    fn read(&self, path: &Path) -> Result<String, ResolveError>;
}

/// Filesystem loader with Node-style resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsModuleLoader;

impl FsModuleLoader {
    /// Try `base`, `base.<ext>`, then `base/index.<ext>`.
    fn find_file(base: &Path) -> Option<PathBuf> {
        if base.is_file() {
            return Some(base.to_path_buf());
        }

        let base_str = base.to_string_lossy();
        for ext in SOURCE_EXTENSIONS {
            let with_ext = PathBuf::from(format!("{}.{}", base_str, ext));
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }

        for ext in SOURCE_EXTENSIONS {
            let index_path = base.join(format!("index.{}", ext));
            if index_path.is_file() {
                return Some(index_path);
            }
        }

        None
    }

    /// Resolve a package directory through its `package.json` `main` field.
    fn find_package_entry(package_dir: &Path) -> Option<PathBuf> {
        let manifest = std::fs::read_to_string(package_dir.join("package.json")).ok()?;
        let manifest: serde_json::Value = serde_json::from_str(&manifest).ok()?;
        let main = manifest.get("main")?.as_str()?;
        Self::find_file(&package_dir.join(main))
    }

    fn find_in_node_modules(specifier: &str, referencing_file: &Path) -> Option<PathBuf> {
        let start = referencing_file.parent()?;
        start.ancestors().find_map(|dir| {
            let candidate = dir.join("node_modules").join(specifier);
            Self::find_file(&candidate).or_else(|| Self::find_package_entry(&candidate))
        })
    }
}

impl ModuleLoader for FsModuleLoader {
    fn resolve(
        &self,
        specifier: &str,
        referencing_file: &Path,
    ) -> Result<Option<PathBuf>, ResolveError> {
        let found = if is_relative_specifier(specifier) {
            let base_dir = referencing_file.parent().unwrap_or(Path::new("."));
            let found = Self::find_file(&base_dir.join(specifier));
            if found.is_none() {
                return Err(ResolveError::NotFound {
                    specifier: specifier.to_string(),
                });
            }
            found
        } else {
            let found = Self::find_in_node_modules(specifier, referencing_file);
            if found.is_none() {
                debug!(specifier, "package not found in node_modules, skipping");
            }
            found
        };

        Ok(found.filter(|path| {
            let source = is_source_file(path);
            if !source {
                debug!(path = %path.display(), "non-source import target, skipping");
            }
            source
        }))
    }

    fn read(&self, path: &Path) -> Result<String, ResolveError> {
        std::fs::read_to_string(path).map_err(|e| ResolveError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Canonicalize `path` when it exists, otherwise normalize it lexically.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Keys a module exports under one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedSheet {
    pub keys: Vec<String>,
    pub opaque: bool,
}

impl From<&StyleSheet> for ExportedSheet {
    fn from(sheet: &StyleSheet) -> Self {
        Self {
            keys: sheet.keys().map(str::to_string).collect(),
            opaque: sheet.opaque,
        }
    }
}

impl From<&ExtractedSheet> for ExportedSheet {
    fn from(sheet: &ExtractedSheet) -> Self {
        Self {
            keys: sheet.keys(),
            opaque: sheet.opaque,
        }
    }
}

/// Summary of a dependency module, cached per run.
#[derive(Debug, Clone, Default)]
pub struct ResolvedModule {
    pub absolute_path: PathBuf,
    /// Sheets declared in the module.
    pub registry: StyleRegistry,
    pub imports: Vec<ImportBinding>,
    pub exports: ExportTable,
    /// Errors hit while loading the module; reported at every import site that uses it.
    pub errors: Vec<ResolveError>,
}

impl ResolvedModule {
    fn failed(absolute_path: PathBuf, error: ResolveError) -> Self {
        Self {
            absolute_path,
            errors: vec![error],
            ..Default::default()
        }
    }
}

/// Run-wide cache of dependency summaries, keyed by normalized absolute path.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    modules: Mutex<HashMap<PathBuf, Arc<ResolvedModule>>>,
}

impl ResolutionCache {
    pub fn get(&self, path: &Path) -> Option<Arc<ResolvedModule>> {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Insert a summary; if another thread got there first, keep and return theirs.
    pub fn insert(&self, module: ResolvedModule) -> Arc<ResolvedModule> {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(module.absolute_path.clone())
            .or_insert_with(|| Arc::new(module))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared entry point for cross-module lookups.
pub struct CrossModuleResolver {
    loader: Box<dyn ModuleLoader>,
    matcher: StyleSheetMatcher,
    cache: ResolutionCache,
}

impl CrossModuleResolver {
    pub fn new(loader: impl ModuleLoader + 'static, matcher: StyleSheetMatcher) -> Self {
        Self {
            loader: Box::new(loader),
            matcher,
            cache: ResolutionCache::default(),
        }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Start the resolution work of one analyzed module.
    pub fn session(&self) -> ResolutionSession<'_> {
        ResolutionSession {
            resolver: self,
            in_progress: HashSet::new(),
        }
    }

    fn load_module(&self, path: &Path) -> Arc<ResolvedModule> {
        let absolute_path = normalize_path(path);
        if let Some(module) = self.cache.get(&absolute_path) {
            debug!(path = %absolute_path.display(), "resolution cache hit");
            return module;
        }

        debug!(path = %absolute_path.display(), "loading dependency");
        let module = self.summarize(absolute_path);
        self.cache.insert(module)
    }

    fn summarize(&self, absolute_path: PathBuf) -> ResolvedModule {
        let text = match self.loader.read(&absolute_path) {
            Ok(text) => text,
            Err(e) => return ResolvedModule::failed(absolute_path, e),
        };

        let file_path = absolute_path.to_string_lossy().to_string();
        let parsed = match parse_source(text, &file_path) {
            Ok(parsed) => parsed,
            Err(e) => {
                let error = ResolveError::Parse {
                    path: absolute_path.clone(),
                    message: e.to_string(),
                };
                return ResolvedModule::failed(absolute_path, error);
            }
        };

        let analysis = ModuleAnalyzer::new(&file_path, &parsed.source_map, &self.matcher)
            .analyze(&parsed.module);
        let exports = collect_exports(&parsed.module, &self.matcher);

        ResolvedModule {
            absolute_path,
            registry: analysis.registry,
            imports: analysis.imports,
            exports,
            errors: Vec::new(),
        }
    }
}

/// Resolution work started from one analyzed module.
pub struct ResolutionSession<'a> {
    resolver: &'a CrossModuleResolver,
    /// `(module, exported name)` lookups currently on the stack.
    in_progress: HashSet<(PathBuf, String)>,
}

impl ResolutionSession<'_> {
    /// Resolve the sheet an import binding refers to.
    ///
    /// Returns `Ok(None)` when the import is skipped (reserved or missing
    /// package, non-source target, namespace import) or when the target
    /// exports no style sheet under the imported name.
    pub fn resolve_import(
        &mut self,
        binding: &ImportBinding,
        importer: &Path,
    ) -> Result<Option<ExportedSheet>, ResolveError> {
        if binding.is_namespace() {
            return Ok(None);
        }
        self.resolve_specifier(&binding.module_specifier, importer, &binding.exported_name)
    }

    fn resolve_specifier(
        &mut self,
        specifier: &str,
        importer: &Path,
        exported_name: &str,
    ) -> Result<Option<ExportedSheet>, ResolveError> {
        if RESERVED_SPECIFIERS.contains(&specifier) {
            return Ok(None);
        }
        let Some(path) = self.resolver.loader.resolve(specifier, importer)? else {
            return Ok(None);
        };
        self.resolve_export(&path, exported_name)
    }

    fn resolve_export(
        &mut self,
        path: &Path,
        exported_name: &str,
    ) -> Result<Option<ExportedSheet>, ResolveError> {
        let module = self.resolver.load_module(path);
        if let Some(error) = module.errors.first() {
            return Err(error.clone());
        }

        let guard = (module.absolute_path.clone(), exported_name.to_string());
        if !self.in_progress.insert(guard.clone()) {
            debug!(path = %module.absolute_path.display(), exported_name, "import cycle");
            return Err(ResolveError::Cycle {
                path: module.absolute_path.clone(),
            });
        }

        let result = self.lookup_export(&module, exported_name);
        self.in_progress.remove(&guard);
        result
    }

    fn lookup_export(
        &mut self,
        module: &ResolvedModule,
        exported_name: &str,
    ) -> Result<Option<ExportedSheet>, ResolveError> {
        match module.exports.get(exported_name) {
            Some(ExportSource::Sheet(sheet)) => Ok(Some(sheet.into())),
            Some(ExportSource::Local(local)) => self.resolve_local(module, local),
            Some(ExportSource::Reexport { specifier, imported }) => {
                self.resolve_specifier(specifier, &module.absolute_path, imported)
            }
            // `export *` never forwards the default export.
            None if exported_name == DEFAULT_EXPORT => Ok(None),
            // A cycle in one star branch does not hide the name in a sibling.
            None => {
                let mut cycle = None;
                for specifier in &module.exports.star_sources {
                    match self.resolve_specifier(specifier, &module.absolute_path, exported_name) {
                        Ok(Some(sheet)) => return Ok(Some(sheet)),
                        Ok(None) => {}
                        Err(error) if error.is_cycle() => {
                            cycle.get_or_insert(error);
                        }
                        Err(error) => return Err(error),
                    }
                }
                cycle.map_or(Ok(None), Err)
            }
        }
    }

    fn resolve_local(
        &mut self,
        module: &ResolvedModule,
        local: &str,
    ) -> Result<Option<ExportedSheet>, ResolveError> {
        if let Some(sheet) = module.registry.sheet(local) {
            return Ok(Some(sheet.into()));
        }
        match module.imports.iter().find(|b| b.local_name == local) {
            Some(binding) => self.resolve_import(binding, &module.absolute_path),
            None => Ok(None),
        }
    }
}
