use super::RuleOutcome;
use crate::types::profile::StudentProfile;
use crate::types::report::{Insight, Priority, Recommendation};

pub const CATEGORY: &str = "Sleep";

pub fn evaluate(profile: &StudentProfile) -> RuleOutcome {
    let sleep = profile.sleep_hours;
    if sleep < 6.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::High,
            "Sleep affects memory consolidation",
            "7-8 hours + no screens 1 hour before bed",
            "+10-15 points",
        ))
    } else if sleep > 9.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Medium,
            "Oversleeping cuts into study time and alertness",
            "Keep a fixed 7-9 hour sleep schedule",
            "+3-5 points",
        ))
    } else {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            format!("Healthy sleep routine at {sleep:.1} hours"),
        ))
    }
}
