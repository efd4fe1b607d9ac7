use super::{Rule, first_step, violation};
use crate::{lesson::Lesson, placeholders::placeholders, report::{RuleId, Violation}};

/// A step that extracts a variable cannot already show it in its own
/// `chatbot_message`: the value only exists after the user has answered.
pub struct ExtractedVariableReuse;

impl Rule for ExtractedVariableReuse {
    fn id(&self) -> RuleId { RuleId::ExtractedVariableReuse }
    fn description(&self) -> &'static str {
        "a step's chatbot_message must not reference a variable its own extract_info defines"
    }

    fn check(&self, lesson: &Lesson) -> Option<Violation> {
        let (sc, st, var) = first_step(lesson, |st| {
            let extracted = st.extract_info()?;
            let message = st.chatbot_message()?;
            placeholders(message).into_iter().find(|v| extracted.contains_key(*v)).map(str::to_owned)
        })?;
        Some(violation(self.id(), lesson, &sc, &st, Some(var)))
    }
}
