use crate::types::profile::StudentProfile;
use crate::types::scoring::{
    clamp_score, effective_target, ChartData, DashboardMetrics, Gauge, GaugeBand, GrowthPoint,
    PerformanceTier, RadarAxis, Score, MAX_SCORE, MIN_SCORE,
};

const RADAR_HOURS_FULL: f64 = 10.0;
const RADAR_PAPERS_FULL: f64 = 10.0;
const RADAR_SLEEP_FULL: f64 = 8.0;
const GROWTH_STEP: f64 = 10.0;

pub fn metrics(profile: &StudentProfile, score: Score, target: Score) -> DashboardMetrics {
    DashboardMetrics {
        predicted_score: score,
        delta_vs_previous: score - profile.previous_scores,
        tier: PerformanceTier::from_score(score),
        growth_potential: effective_target(score, target) - score,
        efficiency: score / profile.hours_studied.max(1.0),
    }
}

pub fn charts(profile: &StudentProfile, score: Score, target: Score) -> ChartData {
    ChartData {
        radar: radar(profile),
        gauge: gauge(score),
        growth_path: growth_path(profile, score, target),
    }
}

fn percent_of(value: f64, full: f64) -> f64 {
    (value / full * 100.0).clamp(0.0, 100.0)
}

fn radar(profile: &StudentProfile) -> Vec<RadarAxis> {
    [
        ("Study", percent_of(profile.hours_studied, RADAR_HOURS_FULL)),
        (
            "Practice",
            percent_of(profile.sample_papers_practiced, RADAR_PAPERS_FULL),
        ),
        ("Sleep", percent_of(profile.sleep_hours, RADAR_SLEEP_FULL)),
        ("Balance", profile.extracurricular_encoded() * 100.0),
    ]
    .into_iter()
    .map(|(axis, value)| RadarAxis {
        axis: axis.to_string(),
        value,
    })
    .collect()
}

fn gauge(score: Score) -> Gauge {
    let bands = [
        (
            PerformanceTier::NeedsImprovement,
            MIN_SCORE,
            PerformanceTier::GOOD_FROM,
        ),
        (
            PerformanceTier::Good,
            PerformanceTier::GOOD_FROM,
            PerformanceTier::EXCELLENT_FROM,
        ),
        (
            PerformanceTier::Excellent,
            PerformanceTier::EXCELLENT_FROM,
            MAX_SCORE,
        ),
    ]
    .into_iter()
    .map(|(tier, from, to)| GaugeBand {
        label: tier.label().to_string(),
        from,
        to,
    })
    .collect();
    Gauge {
        value: score,
        bands,
    }
}

fn growth_path(profile: &StudentProfile, score: Score, target: Score) -> Vec<GrowthPoint> {
    [
        ("Current", profile.previous_scores),
        ("Week 2", score),
        ("Week 4", clamp_score(score + GROWTH_STEP)),
        ("Target", effective_target(score, target)),
    ]
    .into_iter()
    .map(|(label, value)| GrowthPoint {
        label: label.to_string(),
        score: value,
    })
    .collect()
}
