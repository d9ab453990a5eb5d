use super::RuleOutcome;
use crate::types::profile::StudentProfile;
use crate::types::report::{Insight, Priority, Recommendation};

pub const CATEGORY: &str = "Study Time";

pub fn evaluate(profile: &StudentProfile) -> RuleOutcome {
    let hours = profile.hours_studied;
    if hours < 3.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Critical,
            "Increase to 4-6 hours of study daily",
            "Use Pomodoro: 25 min study + 5 min break",
            "+15-20 points",
        ))
    } else if hours < 5.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::High,
            "Good base, now focus on quality studying",
            "Active recall + spaced repetition",
            "+8-12 points",
        ))
    } else if hours >= 7.0 {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            format!("Strong study commitment at {hours:.1} hours per day"),
        ))
    } else {
        RuleOutcome::Nothing
    }
}
