use super::{Rule, first_step, violation};
use crate::{lesson::Lesson, report::{RuleId, Violation}};

/// `title` belongs on the step, never inside its `user_response`.
pub struct UserResponseTitle;

impl Rule for UserResponseTitle {
    fn id(&self) -> RuleId { RuleId::UserResponseTitle }
    fn description(&self) -> &'static str { "a step's user_response must not contain a 'title' key" }

    fn check(&self, lesson: &Lesson) -> Option<Violation> {
        let (sc, st, ()) = first_step(lesson, |st| {
            st.user_response().filter(|r| r.contains_key("title")).map(|_| ())
        })?;
        Some(violation(self.id(), lesson, &sc, &st, None))
    }
}
