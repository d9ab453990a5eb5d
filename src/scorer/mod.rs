pub mod artifacts;
pub mod heuristic;
pub mod linear;

pub use heuristic::HeuristicScorer;
pub use linear::{LinearScorer, StandardScaler};

use crate::config;
use crate::error::Result;
use crate::types::config::{AdvisorConfig, ModelVariant};
use crate::types::profile::StudentProfile;
use crate::types::report::ArtifactFingerprint;
use crate::types::scoring::{Prediction, Score};
use std::path::Path;

pub trait Scorer {
    fn name(&self) -> &'static str;
    fn predict(&self, profile: &StudentProfile) -> Score;
}

pub struct LoadedScorer {
    pub scorer: Box<dyn Scorer>,
    pub artifacts: Vec<ArtifactFingerprint>,
}

impl LoadedScorer {
    pub fn predict(&self, profile: &StudentProfile) -> Prediction {
        let score = self.scorer.predict(profile);
        tracing::debug!(scorer = self.scorer.name(), score, "prediction computed");
        Prediction {
            score,
            scorer: self.scorer.name().to_string(),
        }
    }
}

pub fn build(config: &AdvisorConfig, root: &Path, variant: ModelVariant) -> Result<LoadedScorer> {
    match variant {
        ModelVariant::Heuristic => Ok(LoadedScorer {
            scorer: Box::new(HeuristicScorer::new(config.heuristic_weights())),
            artifacts: Vec::new(),
        }),
        ModelVariant::Linear => {
            let model_path = config::resolve_path(root, &config.model_path());
            let scaler_path = config::resolve_path(root, &config.scaler_path());
            let (scorer, artifacts) = LinearScorer::load(&model_path, &scaler_path)?;
            Ok(LoadedScorer {
                scorer: Box::new(scorer),
                artifacts,
            })
        }
    }
}
