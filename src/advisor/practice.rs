use super::RuleOutcome;
use crate::types::profile::StudentProfile;
use crate::types::report::{Insight, Priority, Recommendation};

pub const CATEGORY: &str = "Practice";

pub fn evaluate(profile: &StudentProfile) -> RuleOutcome {
    let papers = profile.sample_papers_practiced;
    if papers < 3.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::High,
            "Practice builds exam stamina",
            "2-3 mock tests weekly + error analysis",
            "+15-20 points",
        ))
    } else if papers < 6.0 {
        RuleOutcome::Recommend(Recommendation::new(
            CATEGORY,
            Priority::Medium,
            "Add more timed practice",
            "One extra sample paper per week under exam conditions",
            "+5-8 points",
        ))
    } else if papers >= 8.0 {
        RuleOutcome::Insight(Insight::new(
            CATEGORY,
            format!("Thorough exam preparation with {papers:.0} sample papers"),
        ))
    } else {
        RuleOutcome::Nothing
    }
}
