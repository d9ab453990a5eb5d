use super::RuleOutcome;
use crate::types::report::{Insight, Priority, Recommendation};
use crate::types::scoring::Score;

pub const CATEGORY: &str = "Overall";

pub fn evaluate(score: Score) -> RuleOutcome {
    if score < 50.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Critical,
            "Predicted result is at risk",
            "Meet a mentor this week and start the 30-day plan",
            "+20-30 points",
        ))
    } else if score < 70.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::High,
            "Close the gap to a good result",
            "Work on your top two focus areas every day",
            "+10-15 points",
        ))
    } else if score < 85.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Medium,
            "Push for an excellent result",
            "Targeted revision of the weakest topics",
            "+5-10 points",
        ))
    } else {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            format!("On track for an excellent result ({score:.0}%)"),
        ))
    }
}
