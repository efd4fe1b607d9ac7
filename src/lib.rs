pub mod config;
pub mod discover;
pub mod error;
pub mod lesson;
pub mod linter;
pub mod placeholders;
pub mod report;
pub mod rules;

pub use config::{Config, OutputFormat};
pub use error::LintError;
pub use lesson::{Lesson, Scenario, Step};
pub use linter::LessonLinter;
pub use report::{Finding, Report, RuleId, Violation};
pub use rules::{Rule, RuleSet};
