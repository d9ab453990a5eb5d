use super::{foundation, practice, sleep, study};
use crate::types::report::{MentoringPlan, Recommendation};
use crate::types::scoring::{effective_target, PerformanceTier, Score};

pub const HORIZON_DAYS: u32 = 30;
const MOTTO: &str = "Consistency beats intensity";

pub fn plan(recommendations: &[Recommendation], score: Score, target: Score) -> MentoringPlan {
    let mut focus_areas: Vec<String> = Vec::new();
    for recommendation in recommendations
        .iter()
        .filter(|recommendation| recommendation.priority.is_urgent())
    {
        if !focus_areas.contains(&recommendation.category) {
            focus_areas.push(recommendation.category.clone());
        }
    }

    let mut steps = vec![opening_step(PerformanceTier::from_score(score)).to_string()];
    steps.extend(
        focus_areas
            .iter()
            .filter_map(|category| focus_step(category))
            .map(str::to_string),
    );
    steps.extend(
        [
            "Solve 1 mock test every Saturday",
            "Review mistakes on Sunday evenings",
            "Track your progress here every week",
        ]
        .map(str::to_string),
    );

    MentoringPlan {
        horizon_days: HORIZON_DAYS,
        target_score: effective_target(score, target),
        focus_areas,
        steps,
        motto: MOTTO.to_string(),
    }
}

fn opening_step(tier: PerformanceTier) -> &'static str {
    match tier {
        PerformanceTier::Excellent => "Keep your current routine and add one stretch goal per week",
        PerformanceTier::Good => "Daily 25-minute focused study blocks (Pomodoro)",
        PerformanceTier::NeedsImprovement => {
            "Meet a mentor or teacher twice a week to review progress"
        }
    }
}

fn focus_step(category: &str) -> Option<&'static str> {
    match category {
        study::CATEGORY => Some("Add one extra study block each day until you reach 5 hours"),
        foundation::CATEGORY => Some("Rebuild one core topic every two days from the textbook"),
        sleep::CATEGORY => Some("Sleep 7+ hours every night at a fixed time"),
        practice::CATEGORY => Some("Attempt 2 sample papers per week under timed conditions"),
        _ => None,
    }
}
