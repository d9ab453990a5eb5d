use super::RuleOutcome;
use crate::types::profile::StudentProfile;
use crate::types::report::{Insight, Priority, Recommendation};

pub const CATEGORY: &str = "Foundation";

pub fn evaluate(profile: &StudentProfile) -> RuleOutcome {
    let previous = profile.previous_scores;
    if previous < 50.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Critical,
            "Strengthen the basics first",
            "Textbook mastery + concept maps for every chapter",
            "+20-30 points",
        ))
    } else if previous < 75.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Medium,
            "Consolidate weaker topics",
            "Weekly topic review with worked examples",
            "+5-10 points",
        ))
    } else if previous >= 90.0 {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            format!("Excellent track record with a previous score of {previous:.0}%"),
        ))
    } else {
        RuleOutcome::Nothing
    }
}
