use crate::error::{AdvisorError, Result};
use crate::types::profile::StudentProfile;
use crate::types::report::MentoringPlan;
use crate::types::scoring::Score;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLANS_DIR: &str = ".study-advisor/plans";

#[derive(Debug, Clone, Serialize)]
pub struct PlanExport {
    pub version: String,
    pub generated_at: String,
    pub profile: StudentProfile,
    pub predicted_score: Score,
    pub plan: MentoringPlan,
}

impl PlanExport {
    pub fn new(profile: StudentProfile, predicted_score: Score, plan: MentoringPlan) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            profile,
            predicted_score,
            plan,
        }
    }
}

pub fn write_plan(root: &Path, export: &PlanExport) -> Result<PathBuf> {
    let dir = root.join(PLANS_DIR);
    fs::create_dir_all(&dir).map_err(AdvisorError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("plan-{stamp}.json"));
    let json = serde_json::to_string_pretty(export)?;
    fs::write(&out_path, json).map_err(AdvisorError::Io)?;
    tracing::info!(path = %out_path.display(), "mentoring plan exported");
    Ok(out_path)
}
