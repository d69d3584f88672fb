//! Configuration loading for a11yguard

use crate::{Severity, WcagLevel};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".a11yguardrc.json";

/// Per-rule configuration: disable a rule or override its severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    Off,
    Error,
    Warning,
    Info,
}

impl RuleSetting {
    pub fn to_severity(&self) -> Option<Severity> {
        match self {
            RuleSetting::Off => None,
            RuleSetting::Error => Some(Severity::Error),
            RuleSetting::Warning => Some(Severity::Warning),
            RuleSetting::Info => Some(Severity::Info),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// WCAG level to audit at (A, AA, AAA)
    pub level: Option<String>,
    /// Language code the document-language fixer applies
    pub lang: Option<String>,
    /// Glob patterns for files to skip
    pub ignore: Vec<String>,
    /// Per-rule overrides keyed by kebab-case rule id
    pub rules: HashMap<String, RuleSetting>,
}

impl Config {
    /// Resolve the audit level, CLI flag first, then config, then default.
    pub fn resolve_level(&self, cli_level: Option<&str>) -> WcagLevel {
        cli_level
            .or(self.level.as_deref())
            .map(WcagLevel::from_str_or_default)
            .unwrap_or(WcagLevel::AA)
    }

    /// Resolve the fixer language the same way.
    pub fn resolve_lang(&self, cli_lang: Option<&str>) -> String {
        cli_lang
            .or(self.lang.as_deref())
            .unwrap_or("en")
            .to_string()
    }
}

/// Find and load the config file. Searches `work_dir` then its parents;
/// a missing config is not an error, just defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

/// Serialized default config for `a11yguard init`.
pub fn default_config_json() -> String {
    serde_json::json!({
        "level": "AA",
        "lang": "en",
        "ignore": ["**/node_modules/**", "**/dist/**"],
        "rules": {}
    })
    .to_string()
}
