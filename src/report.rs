// lesson-lint/src/report.rs

use serde::Serialize;
use std::{fmt, path::{Path, PathBuf}, str::FromStr};

use crate::error::LintError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    UserResponseTitle,
    ExtractedVariableReuse,
    StepTitle,
}

impl RuleId {
    pub const ALL: [RuleId; 3] = [Self::UserResponseTitle, Self::ExtractedVariableReuse, Self::StepTitle];

    pub fn key(&self) -> &'static str {
        match self {
            Self::UserResponseTitle => "user-response-title",
            Self::ExtractedVariableReuse => "extracted-variable-reuse",
            Self::StepTitle => "step-title",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.key()) }
}

impl FromStr for RuleId {
    type Err = LintError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|r| r.key() == s).ok_or_else(|| LintError::UnknownRule(s.into()))
    }
}

/// Where and what: one rule failing at one step of one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: RuleId,
    pub file: PathBuf,
    pub item: usize,
    pub item_title: Option<String>,
    pub step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.item_title.as_deref().unwrap_or("N/A");
        writeln!(f, "File: {}", self.file.display())?;
        match self.rule {
            RuleId::UserResponseTitle => write!(f,
                "Content item {}, Step {}: 'title' should not be in 'user_response'",
                self.item, self.step),
            RuleId::ExtractedVariableReuse => write!(f,
                "Content item {} ('{}'), Step {}: The 'chatbot_message' in a step with 'extract_info' should not contain variables \
                 that are defined in the same step. Variable '{}' is defined and used in the same step.",
                self.item, title, self.step, self.variable.as_deref().unwrap_or_default()),
            RuleId::StepTitle => write!(f,
                "Content item {} ('{}'), Step {}: Each step in 'conversation_flow' must have a 'title'.",
                self.item, title, self.step),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// File could not be read or parsed; no rules ran on it.
    Unreadable { file: PathBuf, message: String },
    /// Directory the walk could not enter; lessons below it were not checked.
    Unwalkable { path: PathBuf, message: String },
    Violation(Violation),
}

impl Finding {
    pub fn unreadable(err: &LintError) -> Option<Self> {
        if !err.is_per_file() { return None; }
        match err {
            LintError::Io { path, .. } | LintError::Parse { path, .. } =>
                Some(Self::Unreadable { file: path.clone(), message: err.to_string() }),
            _ => None,
        }
    }

    pub fn unwalkable(err: &walkdir::Error, root: &Path) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let cause = err.io_error().map(ToString::to_string).unwrap_or_else(|| err.to_string());
        Self::Unwalkable { message: format!("{} could not be read: {cause}", path.display()), path }
    }

    pub fn file(&self) -> &PathBuf {
        match self {
            Self::Unreadable { file, .. } => file,
            Self::Unwalkable { path, .. } => path,
            Self::Violation(v) => &v.file,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { message, .. } | Self::Unwalkable { message, .. } => f.write_str(message),
            Self::Violation(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub root: PathBuf,
    pub files_checked: usize,
    pub rules: Vec<RuleId>,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_clean(&self) -> bool { self.findings.is_empty() }

    /// Files with no finding at all.
    pub fn files_passed(&self) -> usize {
        let mut failed: Vec<&PathBuf> = self.findings.iter()
            .filter(|f| !matches!(f, Finding::Unwalkable { .. }))
            .map(Finding::file)
            .collect();
        failed.sort();
        failed.dedup();
        self.files_checked.saturating_sub(failed.len())
    }

    pub fn violations(&self, rule: RuleId) -> impl Iterator<Item = &Violation> {
        self.findings.iter().filter_map(move |f| match f {
            Finding::Violation(v) if v.rule == rule => Some(v),
            _ => None,
        })
    }

    pub fn summary(&self) -> String {
        format!("checked {} files: {} passed, {} findings", self.files_checked, self.files_passed(), self.findings.len())
    }

    /// Human-readable form: every finding, blank-line separated, then the summary.
    pub fn render_text(&self) -> String {
        let mut s = String::new();
        for f in &self.findings {
            s.push_str(&f.to_string());
            s.push_str("\n\n");
        }
        s.push_str(&self.summary());
        s.push('\n');
        s
    }
}
