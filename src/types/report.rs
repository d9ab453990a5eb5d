use crate::types::profile::StudentProfile;
use crate::types::scoring::{ChartData, DashboardMetrics, Prediction};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn is_urgent(self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub message: String,
    pub action: String,
    pub impact: String,
}

impl Recommendation {
    pub fn new(
        category: impl Into<String>,
        priority: Priority,
        message: impl Into<String>,
        action: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            priority,
            message: message.into(),
            action: action.into(),
            impact: impact.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub category: String,
    pub message: String,
}

impl Insight {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentoringPlan {
    pub horizon_days: u32,
    pub target_score: f64,
    pub focus_areas: Vec<String>,
    pub steps: Vec<String>,
    pub motto: String,
}

/// Stable sort by priority rank; equal priorities keep rule order.
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<Insight>,
    pub mentoring_plan: MentoringPlan,
}

impl Advice {
    pub fn retain_at_least(&mut self, min_priority: Priority) {
        self.recommendations
            .retain(|recommendation| recommendation.priority.rank() <= min_priority.rank());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactFingerprint {
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisorReport {
    pub generated_at: String,
    pub profile: StudentProfile,
    pub prediction: Prediction,
    pub metrics: DashboardMetrics,
    pub charts: ChartData,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<Insight>,
    pub mentoring_plan: MentoringPlan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<ArtifactFingerprint>,
}
