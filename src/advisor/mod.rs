pub mod balance;
pub mod foundation;
pub mod mentoring;
pub mod overall;
pub mod practice;
pub mod sleep;
pub mod study;

use crate::types::config::DEFAULT_TARGET_SCORE;
use crate::types::profile::StudentProfile;
use crate::types::report::{self, Advice, Insight, Recommendation};
use crate::types::scoring::Score;

#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Recommend(Recommendation),
    Insight(Insight),
    Nothing,
}

pub fn recommend(profile: &StudentProfile, score: Score) -> Advice {
    recommend_with_target(profile, score, DEFAULT_TARGET_SCORE)
}

pub fn recommend_with_target(profile: &StudentProfile, score: Score, target: Score) -> Advice {
    let outcomes = [
        study::evaluate(profile),
        foundation::evaluate(profile),
        sleep::evaluate(profile),
        practice::evaluate(profile),
        balance::evaluate(profile),
        overall::evaluate(score),
    ];

    let mut recommendations = Vec::new();
    let mut insights = Vec::new();
    for outcome in outcomes {
        match outcome {
            RuleOutcome::Recommend(recommendation) => recommendations.push(recommendation),
            RuleOutcome::Insight(insight) => insights.push(insight),
            RuleOutcome::Nothing => {}
        }
    }

    report::sort_by_priority(&mut recommendations);
    let mentoring_plan = mentoring::plan(&recommendations, score, target);
    let advice = Advice {
        recommendations,
        insights,
        mentoring_plan,
    };

    tracing::debug!(
        recommendations = advice.recommendations.len(),
        insights = advice.insights.len(),
        "advice generated"
    );
    advice
}
