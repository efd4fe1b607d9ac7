use super::{Rule, first_step, violation};
use crate::{lesson::Lesson, report::{RuleId, Violation}};

pub struct StepTitle;

impl Rule for StepTitle {
    fn id(&self) -> RuleId { RuleId::StepTitle }
    fn description(&self) -> &'static str { "every conversation_flow step must have a 'title' key" }

    fn check(&self, lesson: &Lesson) -> Option<Violation> {
        // presence only; the value may be anything, null included
        let (sc, st, ()) = first_step(lesson, |st| (!st.has("title")).then_some(()))?;
        Some(violation(self.id(), lesson, &sc, &st, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::Lesson;
    use crate::rules::testing::scenario;
    use serde_json::json;

    #[test]
    fn missing_title_fails() {
        let l = scenario(json!([{"title": "a"}, {"user_response": {}}]));
        let v = StepTitle.check(&l).unwrap();
        assert_eq!(v.step, 1);
        assert_eq!(v.item_title.as_deref(), Some("Scenario"));
    }

    #[test]
    fn null_title_counts_as_present() {
        assert_eq!(StepTitle.check(&scenario(json!([{"title": null}]))), None);
    }

    #[test]
    fn non_object_step_has_no_title() {
        assert_eq!(StepTitle.check(&scenario(json!([{"title": "a"}, "loose"]))).unwrap().step, 1);
    }

    #[test]
    fn untitled_scenario_uses_placeholder() {
        let l = Lesson {
            path: "lessons/u.json".into(),
            doc: json!({"content": [
                {"type": "video"},
                {"type": "interactive_scenario", "conversation_flow": [{}]}
            ]}),
        };
        let msg = StepTitle.check(&l).unwrap().to_string();
        assert_eq!(msg, "File: lessons/u.json\nContent item 1 ('N/A'), Step 0: Each step in 'conversation_flow' must have a 'title'.");
    }

    #[test]
    fn empty_flow_passes() {
        assert_eq!(StepTitle.check(&scenario(json!([]))), None);
    }
}
