use serde::Serialize;
use std::fmt;

pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

pub fn clamp_score(raw: Score) -> Score {
    if raw.is_nan() {
        return MIN_SCORE;
    }
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn effective_target(score: Score, target: Score) -> Score {
    clamp_score(target.max(score))
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub score: Score,
    pub scorer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceTier {
    pub const EXCELLENT_FROM: Score = 85.0;
    pub const GOOD_FROM: Score = 70.0;

    pub fn from_score(score: Score) -> Self {
        if score >= Self::EXCELLENT_FROM {
            PerformanceTier::Excellent
        } else if score >= Self::GOOD_FROM {
            PerformanceTier::Good
        } else {
            PerformanceTier::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::NeedsImprovement => "Needs improvement",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub predicted_score: Score,
    pub delta_vs_previous: f64,
    pub tier: PerformanceTier,
    pub growth_potential: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarAxis {
    pub axis: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeBand {
    pub label: String,
    pub from: Score,
    pub to: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gauge {
    pub value: Score,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthPoint {
    pub label: String,
    pub score: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub radar: Vec<RadarAxis>,
    pub gauge: Gauge,
    pub growth_path: Vec<GrowthPoint>,
}
