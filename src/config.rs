use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::collect::{StyleSheetMatcher, declarations::DEFAULT_STYLE_SHEET_OBJECT};

pub const CONFIG_FILE_NAME: &str = ".sheetcheckrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
    "**/__mocks__/**",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Objects whose `.create(...)` calls declare style sheets, in addition to `StyleSheet`.
    #[serde(default = "default_style_sheet_object_names")]
    pub style_sheet_object_names: Vec<String>,
    /// Resolve style sheets imported from other modules.
    #[serde(default)]
    pub enable_imports_check: bool,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_style_sheet_object_names() -> Vec<String> {
    vec![DEFAULT_STYLE_SHEET_OBJECT.to_string()]
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style_sheet_object_names: default_style_sheet_object_names(),
            enable_imports_check: false,
            includes: Vec::new(),
            ignores: default_ignores(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are
    /// invalid, or if a style sheet object name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.style_sheet_object_names.iter().any(|n| n.trim().is_empty()) {
            anyhow::bail!("Empty name in 'styleSheetObjectNames'");
        }

        Ok(())
    }

    /// Add style sheet object names, skipping ones already configured.
    pub fn add_style_sheet_object_names<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names {
            if !self.style_sheet_object_names.contains(&name) {
                self.style_sheet_object_names.push(name);
            }
        }
    }

    /// Matcher for the configured factory objects. `StyleSheet` is always included.
    pub fn style_sheet_matcher(&self) -> StyleSheetMatcher {
        StyleSheetMatcher::new(self.style_sheet_object_names.iter().cloned())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for the config file, stopping at the
/// repository root (a directory containing `.git`).
///
/// Ancestors are reached through `..`, so a relative `start_dir` yields a
/// path relative to the same base.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut absolute = start_dir.canonicalize().ok()?;
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !absolute.pop() {
            return None;
        }
        current.push("..");
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory holding the config file. Relative settings resolve against it.
    pub config_dir: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            config_dir: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    // Configured names extend the default factory, never replace it.
    config.add_style_sheet_object_names(default_style_sheet_object_names());

    Ok(ConfigLoadResult {
        config,
        from_file: true,
        config_dir: path.parent().map(Path::to_path_buf),
    })
}
