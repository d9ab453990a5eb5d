use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("model artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("model artifact invalid: {0}")]
    ArtifactInvalid(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("file already exists: {0}")]
    AlreadyExists(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdvisorError {
    pub fn disables_prediction(&self) -> bool {
        matches!(
            self,
            AdvisorError::ArtifactNotFound(_) | AdvisorError::ArtifactInvalid(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
