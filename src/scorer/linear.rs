use super::artifacts::{self, LinearModelArtifact, ScalerArtifact};
use super::Scorer;
use crate::error::Result;
use crate::types::profile::StudentProfile;
use crate::types::report::ArtifactFingerprint;
use crate::types::scoring::{clamp_score, Score};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; 4],
    scale: [f64; 4],
}

impl StandardScaler {
    pub fn new(mean: [f64; 4], scale: [f64; 4]) -> Self {
        Self { mean, scale }
    }

    pub fn transform(&self, values: [f64; 4]) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (i, value) in values.iter().enumerate() {
            out[i] = (value - self.mean[i]) / self.scale[i];
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearScorer {
    scaler: StandardScaler,
    coefficients: [f64; 5],
    intercept: f64,
}

impl LinearScorer {
    pub fn new(scaler: StandardScaler, coefficients: [f64; 5], intercept: f64) -> Self {
        Self {
            scaler,
            coefficients,
            intercept,
        }
    }

    pub fn load(
        model_path: &Path,
        scaler_path: &Path,
    ) -> Result<(Self, Vec<ArtifactFingerprint>)> {
        let (model, model_print) = artifacts::load_json::<LinearModelArtifact>(model_path)?;
        model.check(model_path)?;
        let (scaler, scaler_print) = artifacts::load_json::<ScalerArtifact>(scaler_path)?;
        scaler.check(scaler_path)?;

        let scorer = Self::new(
            StandardScaler::new(to_array(&scaler.mean), to_array(&scaler.scale)),
            to_array(&model.coefficients),
            model.intercept,
        );
        tracing::info!(
            model = %model_path.display(),
            scaler = %scaler_path.display(),
            "linear model ready"
        );
        Ok((scorer, vec![model_print, scaler_print]))
    }

    /// Feature vector in model column order.
    fn features(&self, profile: &StudentProfile) -> [f64; 5] {
        let [hours, previous, sleep, papers] = self.scaler.transform([
            profile.hours_studied,
            profile.previous_scores,
            profile.sleep_hours,
            profile.sample_papers_practiced,
        ]);
        [
            hours,
            previous,
            profile.extracurricular_encoded(),
            sleep,
            papers,
        ]
    }
}

impl Scorer for LinearScorer {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn predict(&self, profile: &StudentProfile) -> Score {
        let raw = self
            .features(profile)
            .iter()
            .zip(self.coefficients.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w);
        clamp_score(raw)
    }
}

// Lengths are checked by the artifact validation before conversion.
fn to_array<const N: usize>(values: &[f64]) -> [f64; N] {
    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = *value;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use std::fs;
    use tempfile::TempDir;

    fn scorer() -> LinearScorer {
        LinearScorer::new(
            StandardScaler::new([5.0, 70.0, 6.5, 4.5], [2.5, 17.0, 1.7, 2.9]),
            [7.4, 17.6, 0.3, 0.8, 0.55],
            55.2,
        )
    }

    fn profile(hours: f64, previous: f64, extra: bool, sleep: f64, papers: f64) -> StudentProfile {
        StudentProfile::new(hours, previous, extra, sleep, papers).expect("profile is valid")
    }

    #[test]
    fn scaler_standardizes_each_feature() {
        let scaler = StandardScaler::new([1.0, 2.0, 3.0, 4.0], [2.0, 2.0, 2.0, 2.0]);
        assert_eq!(scaler.transform([3.0, 2.0, 1.0, 8.0]), [1.0, 0.0, -1.0, 2.0]);
    }

    #[test]
    fn predict_at_feature_means_is_intercept_plus_flag() {
        let without = scorer().predict(&profile(5.0, 70.0, false, 6.5, 4.5));
        let with = scorer().predict(&profile(5.0, 70.0, true, 6.5, 4.5));
        assert!((without - 55.2).abs() < 1e-9);
        assert!((with - 55.5).abs() < 1e-9);
    }

    #[test]
    fn predict_clamps_extremes() {
        let low = scorer().predict(&profile(0.0, 0.0, false, 0.0, 0.0));
        let high = scorer().predict(&profile(12.0, 100.0, true, 12.0, 10.0));
        assert_eq!(low, 0.0);
        assert_eq!(high, 100.0);
    }

    #[test]
    fn load_reads_artifacts_and_fingerprints_them() {
        let dir = TempDir::new().expect("temp dir should be created");
        let model_path = dir.path().join("model.json");
        let scaler_path = dir.path().join("scaler.json");
        fs::write(
            &model_path,
            r#"{"coefficients":[7.4,17.6,0.3,0.8,0.55],"intercept":55.2}"#,
        )
        .expect("model should write");
        fs::write(
            &scaler_path,
            r#"{"feature_names":["Hours Studied","Previous Scores","Sleep Hours","Sample Question Papers Practiced"],"mean":[5.0,70.0,6.5,4.5],"scale":[2.5,17.0,1.7,2.9]}"#,
        )
        .expect("scaler should write");

        let (loaded, prints) = LinearScorer::load(&model_path, &scaler_path).expect("should load");
        assert_eq!(loaded, scorer());
        assert_eq!(prints.len(), 2);
    }

    #[test]
    fn load_fails_when_scaler_is_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let model_path = dir.path().join("model.json");
        fs::write(&model_path, r#"{"coefficients":[1,1,1,1,1],"intercept":0}"#)
            .expect("model should write");

        let err = LinearScorer::load(&model_path, &dir.path().join("scaler.json"))
            .expect_err("missing scaler should fail");
        assert!(matches!(err, AdvisorError::ArtifactNotFound(_)));
        assert!(err.disables_prediction());
    }
}
