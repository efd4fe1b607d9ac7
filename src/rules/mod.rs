// lesson-lint/src/rules/mod.rs

use std::sync::Arc;

use crate::{
    error::Result,
    lesson::{Lesson, Scenario, Step},
    report::{RuleId, Violation},
};

mod extracted_variables;
mod step_title;
mod user_response_title;

pub use extracted_variables::ExtractedVariableReuse;
pub use step_title::StepTitle;
pub use user_response_title::UserResponseTitle;

/// A structural check over one lesson. Reports the first offending step only;
/// the linter runs every rule regardless of what the others found.
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;
    fn description(&self) -> &'static str;
    fn check(&self, lesson: &Lesson) -> Option<Violation>;
}

#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleSet {
    /// The three lesson structure rules, in reporting order.
    pub fn standard() -> Self {
        let mut set = Self::default();
        set.register(Arc::new(UserResponseTitle));
        set.register(Arc::new(ExtractedVariableReuse));
        set.register(Arc::new(StepTitle));
        set
    }

    pub fn register(&mut self, rule: Arc<dyn Rule>) { self.rules.push(rule); }

    /// Drop rules by id. Ids are parsed up front so a typo fails the run
    /// instead of silently checking everything.
    pub fn without<S: AsRef<str>>(mut self, disabled: &[S]) -> Result<Self> {
        let ids = disabled.iter().map(|s| s.as_ref().parse::<RuleId>()).collect::<Result<Vec<_>>>()?;
        self.rules.retain(|r| !ids.contains(&r.id()));
        Ok(self)
    }

    pub fn ids(&self) -> Vec<RuleId> { self.rules.iter().map(|r| r.id()).collect() }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> { self.rules.iter() }
}

/// First `(scenario, step, hit)` over every step of every interactive scenario
/// for which `hit` returns something.
pub(crate) fn first_step<'a, T>(
    lesson: &'a Lesson,
    mut hit: impl FnMut(&Step<'a>) -> Option<T>,
) -> Option<(Scenario<'a>, Step<'a>, T)> {
    lesson.scenarios().find_map(|sc| sc.steps().find_map(|st| hit(&st).map(|h| (sc, st, h))))
}

pub(crate) fn violation(rule: RuleId, lesson: &Lesson, sc: &Scenario<'_>, st: &Step<'_>, variable: Option<String>) -> Violation {
    Violation {
        rule,
        file: lesson.path.clone(),
        item: sc.index,
        item_title: sc.title(),
        step: st.index,
        variable,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_set_runs_all_three_in_order() {
        assert_eq!(RuleSet::standard().ids(), RuleId::ALL.to_vec());
    }

    #[test]
    fn without_drops_named_rules() {
        let set = RuleSet::standard().without(&["step-title"]).unwrap();
        assert_eq!(set.ids(), vec![RuleId::UserResponseTitle, RuleId::ExtractedVariableReuse]);
    }

    #[test]
    fn without_rejects_unknown_ids() {
        assert!(RuleSet::standard().without(&["step-titles"]).is_err());
    }

    #[test]
    fn non_scenario_items_are_ignored_by_every_rule() {
        let lesson = Lesson {
            path: "x.json".into(),
            doc: json!({"content": [
                {"type": "quiz", "conversation_flow": [
                    {"user_response": {"title": "t"}, "extract_info": {"n": {}}, "chatbot_message": "{n}"}
                ]},
                {"conversation_flow": [{}]}
            ]}),
        };
        for rule in RuleSet::standard().iter() { assert_eq!(rule.check(&lesson), None, "{}", rule.id()); }
    }
}
