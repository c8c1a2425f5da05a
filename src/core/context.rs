use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::{debug, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        collect::StyleSheetMatcher,
        components::{ComponentDetector, JsxComponentDetector},
        extract::{ModuleAnalysis, analyze_module},
        file_scanner::{ScanOptions, scan_files},
        parsers::jsx::parse_jsx_source,
        resolve::{CrossModuleResolver, FsModuleLoader},
    },
    issues::ParseErrorIssue,
};

/// Per-run analysis context.
///
/// Holds the merged configuration and the files to check, and lazily runs
/// one module analysis per file. Analyses run in parallel and share a single
/// [`CrossModuleResolver`] when imports checking is enabled, so every
/// dependency is parsed at most once per run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--enable-imports-check`)
/// 2. `.sheetcheckrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the files were scanned from.
    pub root_dir: PathBuf,

    /// All source files to analyze, sorted.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    matcher: StyleSheetMatcher,

    /// Present when imports checking is enabled.
    resolver: Option<CrossModuleResolver>,

    detector: Box<dyn ComponentDetector>,

    /// One analysis per successfully parsed file, in file order.
    analyses: OnceCell<Vec<ModuleAnalysis>>,

    /// Files that could not be read or parsed.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration (searched upward from `--source-root`, or the
    /// current directory), applies CLI overrides and scans source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the source root is not
    /// valid UTF-8.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let search_root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&search_root)?;
        if !config_result.from_file {
            debug!("no config file found, using default configuration");
        }

        let config_dir = config_result.config_dir;
        let mut config = config_result.config;
        if common_args.enable_imports_check {
            config.enable_imports_check = true;
        }
        config.add_style_sheet_object_names(common_args.style_sheet_object_names.iter().cloned());
        config.validate()?;

        // An explicit --source-root wins over the config's sourceRoot.
        let root_dir = match &common_args.source_root {
            Some(root) => root.clone(),
            None => configured_root(&config.source_root, config_dir.as_deref()),
        };

        Self::with_config(config, root_dir, verbose)
    }

    /// Create a context from an already merged configuration.
    pub fn with_config(config: Config, root_dir: PathBuf, verbose: bool) -> Result<Self> {
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        if !Path::new(path).exists() {
            anyhow::bail!("Source root does not exist: {}", root_dir.display());
        }

        let scan_result = scan_files(path, &ScanOptions::from(&config));
        if scan_result.skipped_count > 0 {
            warn!(
                count = scan_result.skipped_count,
                "paths skipped due to access errors"
            );
        }
        debug!(files = scan_result.files.len(), root = path, "scanned source files");

        let matcher = config.style_sheet_matcher();
        let resolver = config
            .enable_imports_check
            .then(|| CrossModuleResolver::new(FsModuleLoader, matcher.clone()));

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            matcher,
            resolver,
            detector: Box::new(JsxComponentDetector),
            analyses: OnceCell::new(),
            parse_errors: OnceCell::new(),
        })
    }

    /// Resolver shared by this run, if imports checking is enabled.
    pub fn resolver(&self) -> Option<&CrossModuleResolver> {
        self.resolver.as_ref()
    }

    /// Analyze every source file (lazy initialization).
    ///
    /// Reading, parsing and analysis run in parallel, each file with its own
    /// `SourceMap`. Parse failures are collected separately and can be
    /// retrieved via `parse_errors()`.
    pub fn analyses(&self) -> &Vec<ModuleAnalysis> {
        self.analyses.get_or_init(|| {
            let matcher = &self.matcher;
            let resolver = self.resolver.as_ref();
            let detector = self.detector.as_ref();
            let files: Vec<&String> = self.files.iter().collect();

            let results: Vec<Result<ModuleAnalysis, ParseErrorIssue>> = files
                .par_iter()
                .map(|file_path| {
                    let code = std::fs::read_to_string(file_path).map_err(|e| ParseErrorIssue {
                        file_path: file_path.to_string(),
                        error: format!("Failed to read file: {}", e),
                    })?;
                    let source_map = Arc::new(SourceMap::default());
                    let parsed = parse_jsx_source(code, file_path, source_map).map_err(|e| {
                        ParseErrorIssue {
                            file_path: file_path.to_string(),
                            error: e.to_string(),
                        }
                    })?;
                    Ok(analyze_module(&parsed, file_path, matcher, resolver, detector))
                })
                .collect();

            let mut analyses = Vec::with_capacity(results.len());
            let mut errors = Vec::new();
            for result in results {
                match result {
                    Ok(analysis) => analyses.push(analysis),
                    Err(issue) => {
                        debug!(file = issue.file_path.as_str(), error = issue.error.as_str(), "parse failed");
                        errors.push(issue);
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            analyses
        })
    }

    /// Files that failed to read or parse. Populated by `analyses()`.
    pub fn parse_errors(&self) -> &Vec<ParseErrorIssue> {
        self.analyses();
        self.parse_errors.get_or_init(Vec::new)
    }
}

/// The config's `sourceRoot`, relative to the directory holding the config.
fn configured_root(source_root: &str, config_dir: Option<&Path>) -> PathBuf {
    let source_root = Path::new(source_root);
    match config_dir {
        Some(dir) if !dir.as_os_str().is_empty() && dir != Path::new(".") => dir.join(source_root),
        _ => source_root.to_path_buf(),
    }
}
