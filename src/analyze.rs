use crate::advisor;
use crate::dashboard;
use crate::scorer::LoadedScorer;
use crate::types::profile::StudentProfile;
use crate::types::report::{AdvisorReport, Priority};
use chrono::Utc;

pub fn analyze(
    profile: &StudentProfile,
    scorer: &LoadedScorer,
    target: f64,
    min_priority: Priority,
) -> AdvisorReport {
    let prediction = scorer.predict(profile);
    let score = prediction.score;

    let mut advice = advisor::recommend_with_target(profile, score, target);
    advice.retain_at_least(min_priority);

    AdvisorReport {
        generated_at: Utc::now().to_rfc3339(),
        profile: *profile,
        metrics: dashboard::metrics(profile, score, target),
        charts: dashboard::charts(profile, score, target),
        prediction,
        recommendations: advice.recommendations,
        insights: advice.insights,
        mentoring_plan: advice.mentoring_plan,
        artifacts: scorer.artifacts.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::HeuristicScorer;
    use crate::types::scoring::PerformanceTier;

    fn heuristic() -> LoadedScorer {
        LoadedScorer {
            scorer: Box::new(HeuristicScorer::default()),
            artifacts: Vec::new(),
        }
    }

    #[test]
    fn analyze_combines_prediction_metrics_and_advice() {
        let profile = StudentProfile::new(4.0, 65.0, false, 7.0, 2.0).expect("profile is valid");
        let report = analyze(&profile, &heuristic(), 95.0, Priority::Low);

        // 65*0.4 + 16 + 21 + 10
        assert!((report.prediction.score - 73.0).abs() < 1e-9);
        assert_eq!(report.metrics.tier, PerformanceTier::Good);
        assert_eq!(report.prediction.scorer, "heuristic");
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.charts.radar.len(), 4);
        assert!(report.artifacts.is_empty());
    }

    #[test]
    fn analyze_filters_below_min_priority() {
        let profile = StudentProfile::new(1.0, 30.0, false, 4.0, 0.0).expect("profile is valid");
        let report = analyze(&profile, &heuristic(), 95.0, Priority::High);
        assert!(report
            .recommendations
            .iter()
            .all(|recommendation| recommendation.priority.is_urgent()));
        // plan still reflects the full rule set
        assert!(!report.mentoring_plan.focus_areas.is_empty());
    }
}
