use super::RuleOutcome;
use crate::types::profile::StudentProfile;
use crate::types::report::{Insight, Priority, Recommendation};

pub const CATEGORY: &str = "Balance";

pub fn evaluate(profile: &StudentProfile) -> RuleOutcome {
    if profile.extracurricular {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            "Extracurricular activities keep your routine balanced",
        ))
    } else {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Low,
            "Add an activity outside of studying",
            "Join a club or sport for 2-3 hours per week",
            "+2-5 points",
        ))
    }
}
