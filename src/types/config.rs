use crate::error::AdvisorError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "artifacts/linear_regression_model.json";
pub const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";
pub const DEFAULT_TARGET_SCORE: f64 = 95.0;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    pub model: Option<ModelConfig>,
    pub heuristic: Option<HeuristicConfig>,
    pub dashboard: Option<DashboardConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    #[default]
    Heuristic,
    Linear,
}

impl ModelVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelVariant::Heuristic => "heuristic",
            ModelVariant::Linear => "linear",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default)]
    pub variant: ModelVariant,
    pub model_path: Option<PathBuf>,
    pub scaler_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeuristicConfig {
    pub previous_weight: Option<f64>,
    pub hours_rate: Option<f64>,
    pub hours_cap: Option<f64>,
    pub sleep_threshold: Option<f64>,
    pub sleep_rate: Option<f64>,
    pub sleep_cap: Option<f64>,
    pub short_sleep_rate: Option<f64>,
    pub practice_rate: Option<f64>,
    pub practice_cap: Option<f64>,
    pub extracurricular_bonus: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    pub previous_weight: f64,
    pub hours_rate: f64,
    pub hours_cap: f64,
    pub sleep_threshold: f64,
    pub sleep_rate: f64,
    pub sleep_cap: f64,
    pub short_sleep_rate: f64,
    pub practice_rate: f64,
    pub practice_cap: f64,
    pub extracurricular_bonus: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            previous_weight: 0.4,
            hours_rate: 4.0,
            hours_cap: 30.0,
            sleep_threshold: 6.0,
            sleep_rate: 3.0,
            sleep_cap: 20.0,
            short_sleep_rate: 1.0,
            practice_rate: 5.0,
            practice_cap: 25.0,
            extracurricular_bonus: 10.0,
        }
    }
}

impl HeuristicWeights {
    fn named(&self) -> [(&'static str, f64); 10] {
        [
            ("previous_weight", self.previous_weight),
            ("hours_rate", self.hours_rate),
            ("hours_cap", self.hours_cap),
            ("sleep_threshold", self.sleep_threshold),
            ("sleep_rate", self.sleep_rate),
            ("sleep_cap", self.sleep_cap),
            ("short_sleep_rate", self.short_sleep_rate),
            ("practice_rate", self.practice_rate),
            ("practice_cap", self.practice_cap),
            ("extracurricular_bonus", self.extracurricular_bonus),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub target_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl AdvisorConfig {
    pub fn variant(&self) -> ModelVariant {
        self.model
            .as_ref()
            .map(|model| model.variant)
            .unwrap_or_default()
    }

    pub fn model_path(&self) -> PathBuf {
        self.model
            .as_ref()
            .and_then(|model| model.model_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.model
            .as_ref()
            .and_then(|model| model.scaler_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCALER_PATH))
    }

    pub fn heuristic_weights(&self) -> HeuristicWeights {
        let defaults = HeuristicWeights::default();
        match &self.heuristic {
            Some(h) => HeuristicWeights {
                previous_weight: h.previous_weight.unwrap_or(defaults.previous_weight),
                hours_rate: h.hours_rate.unwrap_or(defaults.hours_rate),
                hours_cap: h.hours_cap.unwrap_or(defaults.hours_cap),
                sleep_threshold: h.sleep_threshold.unwrap_or(defaults.sleep_threshold),
                sleep_rate: h.sleep_rate.unwrap_or(defaults.sleep_rate),
                sleep_cap: h.sleep_cap.unwrap_or(defaults.sleep_cap),
                short_sleep_rate: h.short_sleep_rate.unwrap_or(defaults.short_sleep_rate),
                practice_rate: h.practice_rate.unwrap_or(defaults.practice_rate),
                practice_cap: h.practice_cap.unwrap_or(defaults.practice_cap),
                extracurricular_bonus: h
                    .extracurricular_bonus
                    .unwrap_or(defaults.extracurricular_bonus),
            },
            None => defaults,
        }
    }

    pub fn target_score(&self) -> f64 {
        self.dashboard
            .as_ref()
            .and_then(|dashboard| dashboard.target_score)
            .unwrap_or(DEFAULT_TARGET_SCORE)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), AdvisorError> {
        let weights = self.heuristic_weights();
        for (name, value) in weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(AdvisorError::ConfigParse(format!(
                    "heuristic.{name} must be a non-negative number (found {value})"
                )));
            }
        }
        if weights.previous_weight > 1.0 {
            return Err(AdvisorError::ConfigParse(format!(
                "heuristic.previous_weight must be between 0.0 and 1.0 (found {})",
                weights.previous_weight
            )));
        }
        if weights.sleep_threshold > 12.0 {
            return Err(AdvisorError::ConfigParse(format!(
                "heuristic.sleep_threshold must be at most 12 hours (found {})",
                weights.sleep_threshold
            )));
        }

        let target = self.target_score();
        if !(0.0..=100.0).contains(&target) {
            return Err(AdvisorError::ConfigParse(format!(
                "dashboard.target_score must be between 0 and 100 (found {target})"
            )));
        }

        if let Some(model) = &self.model {
            for (name, path) in [
                ("model.model_path", &model.model_path),
                ("model.scaler_path", &model.scaler_path),
            ] {
                if path
                    .as_ref()
                    .map(|path| path.as_os_str().is_empty())
                    .unwrap_or(false)
                {
                    return Err(AdvisorError::ConfigParse(format!(
                        "{name} must not be empty"
                    )));
                }
            }
        }

        Ok(())
    }
}
