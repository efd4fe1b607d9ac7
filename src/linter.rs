// lesson-lint/src/linter.rs

use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

use crate::{
    config::Config,
    discover::lesson_files,
    error::Result,
    lesson::Lesson,
    report::{Finding, Report},
    rules::RuleSet,
};

/// Runs a rule set over a lesson tree. Each file is loaded, checked by every
/// rule and dropped before the next one is read.
#[derive(Clone)]
pub struct LessonLinter {
    pub root: PathBuf,
    pub exclude: Vec<String>,
    pub rules: RuleSet,
}

impl LessonLinter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), exclude: vec![], rules: RuleSet::standard() }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            root: cfg.root(),
            exclude: cfg.exclude.clone(),
            rules: RuleSet::standard().without(&cfg.disable)?,
        })
    }

    /// Findings for one file: the load failure, or one violation per failing rule.
    pub fn check_file(&self, path: &Path) -> Vec<Finding> {
        let lesson = match Lesson::load(path) {
            Ok(l) => l,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable lesson");
                return Finding::unreadable(&e).into_iter().collect();
            }
        };
        self.check_lesson(&lesson)
    }

    pub fn check_lesson(&self, lesson: &Lesson) -> Vec<Finding> {
        let mut out = vec![];
        for rule in self.rules.iter() {
            match rule.check(lesson) {
                Some(v) => {
                    warn!(path = %lesson.path.display(), rule = %rule.id(), item = v.item, step = v.step, "violation");
                    out.push(Finding::Violation(v));
                }
                None => debug!(path = %lesson.path.display(), rule = %rule.id(), "pass"),
            }
        }
        out
    }

    /// Lint the whole tree. Per-file and per-directory problems land in the
    /// report; only a missing root or a bad exclude glob aborts.
    pub fn run(&self) -> Result<Report> {
        let _span = info_span!("lint", root = %self.root.display()).entered();
        let found = lesson_files(&self.root, &self.exclude)?;
        let mut report = Report {
            root: self.root.clone(),
            files_checked: found.files.len(),
            rules: self.rules.ids(),
            findings: found.unreadable.iter().map(|e| Finding::unwalkable(e, &self.root)).collect(),
        };
        for f in &found.files {
            report.findings.extend(self.check_file(f));
        }
        info!(files = report.files_checked, findings = report.findings.len(), "lint finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RuleId;
    use serde_json::json;
    use std::{fs, sync::{Arc, Mutex}};

    #[test]
    fn all_rules_report_independently() {
        // one step that trips every rule at once
        let lesson = Lesson {
            path: "d.json".into(),
            doc: json!({"content": [{"type": "interactive_scenario", "conversation_flow": [
                {"user_response": {"title": "nested"}, "extract_info": {"n": {}}, "chatbot_message": "hi {n}"}
            ]}]}),
        };
        let rules: Vec<RuleId> = LessonLinter::new(".").check_lesson(&lesson).iter()
            .map(|f| match f { Finding::Violation(v) => v.rule, other => panic!("{other}") })
            .collect();
        assert_eq!(rules, RuleId::ALL.to_vec());
    }

    #[test]
    fn broken_file_stops_its_rules_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "{not json").unwrap();
        fs::write(dir.path().join("b.json"), r#"{"content": [{"type": "interactive_scenario", "conversation_flow": [{}]}]}"#).unwrap();
        let report = LessonLinter::new(dir.path()).run().unwrap();
        assert_eq!(report.files_checked, 2);
        assert_eq!(report.findings.len(), 2);
        assert!(matches!(&report.findings[0], Finding::Unreadable { file, message }
            if file.ends_with("a.json") && message.contains("is not a valid JSON file")));
        assert_eq!(report.violations(RuleId::StepTitle).count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn locked_directory_keeps_other_findings() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("locked")).unwrap();
        fs::write(dir.path().join("a/bad.json"), r#"{"content": [{"type": "interactive_scenario", "conversation_flow": [{}]}]}"#).unwrap();
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let readable = fs::read_dir(&locked).is_ok();
        let report = LessonLinter::new(dir.path()).run();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable { return; }

        let report = report.unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.violations(RuleId::StepTitle).count(), 1);
        assert!(report.findings.iter().any(|f| matches!(f, Finding::Unwalkable { path, .. } if *path == locked)));
        assert_eq!(report.files_passed(), 0);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { std::io::Write::write(&mut *self.0.lock().unwrap(), buf) }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn violations_are_logged_at_warn() {
        let out = Captured::default();
        let sink = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        let lesson = Lesson {
            path: "w.json".into(),
            doc: json!({"content": [{"type": "interactive_scenario", "conversation_flow": [{}]}]}),
        };
        let findings = tracing::subscriber::with_default(subscriber, || LessonLinter::new(".").check_lesson(&lesson));
        assert_eq!(findings.len(), 1);
        let logged = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN") && logged.contains("violation") && logged.contains("step-title"), "{logged}");
    }

    #[test]
    fn disabled_rules_do_not_run() {
        let cfg = Config { disable: vec!["step-title".into()], ..Default::default() };
        let linter = LessonLinter::from_config(&cfg).unwrap();
        let lesson = Lesson {
            path: "x.json".into(),
            doc: json!({"content": [{"type": "interactive_scenario", "conversation_flow": [{}]}]}),
        };
        assert!(linter.check_lesson(&lesson).is_empty());
    }
}
