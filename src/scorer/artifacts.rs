use crate::error::{AdvisorError, Result};
use crate::types::report::ArtifactFingerprint;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Column order the regression was fitted on.
pub const FEATURE_NAMES: [&str; 5] = [
    "Hours Studied",
    "Previous Scores",
    "Extracurricular Activities",
    "Sleep Hours",
    "Sample Question Papers Practiced",
];

pub const NUMERIC_FEATURES: [&str; 4] = [
    "Hours Studied",
    "Previous Scores",
    "Sleep Hours",
    "Sample Question Papers Practiced",
];

#[derive(Debug, Clone, Deserialize)]
pub struct LinearModelArtifact {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl LinearModelArtifact {
    pub fn check(&self, path: &Path) -> Result<()> {
        check_feature_names(path, self.feature_names.as_deref(), &FEATURE_NAMES)?;
        check_len(path, "coefficients", self.coefficients.len(), FEATURE_NAMES.len())?;
        check_finite(path, "coefficients", &self.coefficients)?;
        check_finite(path, "intercept", &[self.intercept])
    }
}

impl ScalerArtifact {
    pub fn check(&self, path: &Path) -> Result<()> {
        check_feature_names(path, self.feature_names.as_deref(), &NUMERIC_FEATURES)?;
        check_len(path, "mean", self.mean.len(), NUMERIC_FEATURES.len())?;
        check_len(path, "scale", self.scale.len(), NUMERIC_FEATURES.len())?;
        check_finite(path, "mean", &self.mean)?;
        check_finite(path, "scale", &self.scale)?;
        if let Some(index) = self.scale.iter().position(|scale| *scale == 0.0) {
            return Err(AdvisorError::ArtifactInvalid(format!(
                "{}: scale for '{}' is zero",
                path.display(),
                NUMERIC_FEATURES[index]
            )));
        }
        Ok(())
    }
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<(T, ArtifactFingerprint)> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AdvisorError::ArtifactNotFound(path.display().to_string()),
        _ => AdvisorError::ArtifactInvalid(format!("{}: {}", path.display(), e)),
    })?;
    let value = serde_json::from_slice(&bytes)
        .map_err(|e| AdvisorError::ArtifactInvalid(format!("{}: {}", path.display(), e)))?;
    let fingerprint = ArtifactFingerprint {
        path: path.display().to_string(),
        sha256: sha256_hex(&bytes),
    };
    tracing::debug!(path = %fingerprint.path, sha256 = %fingerprint.sha256, "loaded artifact");
    Ok((value, fingerprint))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

fn check_feature_names(path: &Path, found: Option<&[String]>, expected: &[&str]) -> Result<()> {
    let Some(found) = found else {
        return Ok(());
    };
    if found.len() != expected.len() || found.iter().zip(expected).any(|(a, b)| a != b) {
        return Err(AdvisorError::ArtifactInvalid(format!(
            "{}: feature_names {:?} do not match expected {:?}",
            path.display(),
            found,
            expected
        )));
    }
    Ok(())
}

fn check_len(path: &Path, field: &str, found: usize, expected: usize) -> Result<()> {
    if found != expected {
        return Err(AdvisorError::ArtifactInvalid(format!(
            "{}: {field} has {found} entries, expected {expected}",
            path.display()
        )));
    }
    Ok(())
}

fn check_finite(path: &Path, field: &str, values: &[f64]) -> Result<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(AdvisorError::ArtifactInvalid(format!(
            "{}: {field} contains a non-finite value",
            path.display()
        )));
    }
    Ok(())
}
