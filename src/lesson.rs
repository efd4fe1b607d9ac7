// lesson-lint/src/lesson.rs

use serde_json::{Map, Value};
use std::{fs, path::{Path, PathBuf}};
use tracing::debug;

use crate::error::{LintError, Result};

pub const INTERACTIVE_SCENARIO: &str = "interactive_scenario";

/// One parsed lesson file. The JSON stays untyped: only the handful of fields
/// the rules look at are read, everything else is ignored.
#[derive(Clone, Debug)]
pub struct Lesson {
    pub path: PathBuf,
    pub doc: Value,
}

impl Lesson {
    /// Read and parse a lesson file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| LintError::Io { path: path.to_path_buf(), source })?;
        let lesson = Self::parse(path, &text)?;
        debug!(path = %path.display(), bytes = text.len(), "loaded lesson");
        Ok(lesson)
    }

    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        match serde_json::from_str(text) {
            Ok(doc) => Ok(Self { path, doc }),
            Err(source) => Err(LintError::Parse { path, source }),
        }
    }

    /// Content items of type `interactive_scenario` that carry a `conversation_flow`,
    /// with their index in `content`.
    pub fn scenarios(&self) -> impl Iterator<Item = Scenario<'_>> {
        self.doc
            .get("content")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, item)| {
                let item = item.as_object()?;
                if item.get("type").and_then(Value::as_str) != Some(INTERACTIVE_SCENARIO) { return None; }
                if !item.contains_key("conversation_flow") { return None; }
                Some(Scenario { index, item })
            })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Scenario<'a> {
    pub index: usize,
    item: &'a Map<String, Value>,
}

impl<'a> Scenario<'a> {
    /// Display title for diagnostics; strings as-is, other JSON values rendered.
    pub fn title(&self) -> Option<String> {
        match self.item.get("title")? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = Step<'a>> + use<'a> {
        let item = self.item;
        item.get("conversation_flow")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, step)| Step { index, fields: step.as_object() })
    }
}

/// A conversation step. `fields` is `None` when the step is not a JSON object,
/// in which case it has no keys at all.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a> {
    pub index: usize,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Step<'a> {
    pub fn has(&self, key: &str) -> bool {
        self.fields.is_some_and(|f| f.contains_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key)
    }

    pub fn user_response(&self) -> Option<&'a Map<String, Value>> {
        self.get("user_response")?.as_object()
    }

    pub fn extract_info(&self) -> Option<&'a Map<String, Value>> {
        self.get("extract_info")?.as_object()
    }

    pub fn chatbot_message(&self) -> Option<&'a str> {
        self.get("chatbot_message")?.as_str()
    }
}
