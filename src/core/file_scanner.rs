use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::warn;
use walkdir::WalkDir;

use crate::config::{Config, TEST_FILE_PATTERNS};
use crate::core::parsers::jsx::is_source_file;

/// Patterns without `*` or `?` are literal paths, so `app/[id]` stays literal.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which files a scan picks up.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
}

impl From<&Config> for ScanOptions {
    fn from(config: &Config) -> Self {
        Self {
            includes: config.includes.clone(),
            ignores: config.ignores.clone(),
            ignore_test_files: config.ignore_test_files,
        }
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Ignore rules split into literal path prefixes and glob patterns.
struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, options: &ScanOptions) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in &options.ignores {
            if !is_glob_pattern(p) {
                literal_paths.push(base_dir.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!(pattern = p.as_str(), error = %e, "invalid ignore pattern"),
            }
        }

        if options.ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|ignored| path.starts_with(ignored)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory, or each include entry.
fn roots_to_scan(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
                Err(e) => warn!(pattern = inc.as_str(), error = %e, "invalid include pattern"),
            }
        } else {
            let path = base_dir.join(inc);
            if path.exists() {
                roots.push(path);
            } else {
                warn!(path = %path.display(), "include path does not exist");
            }
        }
    }
    roots
}

/// Collect the JS/TS source files under `base_dir`.
pub fn scan_files(base_dir: &str, options: &ScanOptions) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignore_rules = IgnoreRules::new(base_dir, options);

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in roots_to_scan(base_dir, &options.includes) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore_rules.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_source_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}
