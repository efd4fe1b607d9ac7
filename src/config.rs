// lesson-lint/src/config.rs

use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::error::{LintError, Result};

pub const CONFIG_FILE: &str = "lessonlint.toml";
pub const DEFAULT_ROOT: &str = "lessons";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat { #[default] Text, Json }

/// Config is merged: lessonlint.toml -> command line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub root: Option<PathBuf>,      // default: ./lessons
    pub exclude: Vec<String>,       // globs relative to root
    pub disable: Vec<String>,       // rule ids
    pub format: Option<OutputFormat>,
}

/// Overlay `b` onto `a`: set values in `b` win, lists are appended.
pub fn merge(a: &mut Config, b: &Config) {
    if b.root.is_some() { a.root = b.root.clone(); }
    a.exclude.extend(b.exclude.iter().cloned());
    for d in &b.disable { if !a.disable.contains(d) { a.disable.push(d.clone()); } }
    if b.format.is_some() { a.format = b.format; }
}

impl Config {
    /// The implicit lookup: a missing file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() { return Ok(Self::default()); }
        Self::load_file(path)
    }

    /// Read a config file that must exist. A relative `root` is resolved
    /// against the file's directory.
    pub fn load_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LintError::Config { path: path.to_path_buf(), reason: e.to_string() })?;
        let mut cfg: Self = toml::from_str(&text)
            .map_err(|e| LintError::Config { path: path.to_path_buf(), reason: e.to_string() })?;
        if let (Some(root), Some(dir)) = (cfg.root.as_ref(), path.parent()) {
            if root.is_relative() { cfg.root = Some(dir.join(root)); }
        }
        Ok(cfg)
    }

    pub fn root(&self) -> PathBuf { self.root.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)) }
    pub fn format(&self) -> OutputFormat { self.format.unwrap_or_default() }
}
