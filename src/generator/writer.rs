use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{AdvisorError, Result};
use crate::types::config::{AdvisorConfig, DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    Previewed,
}

impl InitOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Previewed => "preview",
        }
    }
}

pub fn default_config_toml() -> String {
    format!(
        r#"# study-advisor configuration

[model]
# "heuristic" needs no files; "linear" loads the two JSON artifacts below.
variant = "heuristic"
model_path = "{DEFAULT_MODEL_PATH}"
scaler_path = "{DEFAULT_SCALER_PATH}"

[heuristic]
previous_weight = 0.4
hours_rate = 4.0
hours_cap = 30.0
sleep_threshold = 6.0
sleep_rate = 3.0
sleep_cap = 20.0
short_sleep_rate = 1.0
practice_rate = 5.0
practice_cap = 25.0
extracurricular_bonus = 10.0

[dashboard]
target_score = 95.0

[logging]
level = "warn"
"#
    )
}

pub fn write_default_config(
    dir: &Path,
    dry_run: bool,
    no_overwrite: bool,
) -> Result<(PathBuf, InitOutcome)> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    let content = default_config_toml();

    // the template must stay loadable by our own parser
    let parsed: AdvisorConfig = toml::from_str(&content)?;
    parsed.validate()?;

    let exists = path.exists();
    if exists && no_overwrite {
        return Err(AdvisorError::AlreadyExists(path.display().to_string()));
    }
    if dry_run {
        println!("{content}");
        return Ok((path, InitOutcome::Previewed));
    }

    fs::create_dir_all(dir).map_err(AdvisorError::Io)?;
    fs::write(&path, content).map_err(AdvisorError::Io)?;
    let outcome = if exists {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    };
    tracing::info!(path = %path.display(), outcome = outcome.as_str(), "config written");
    Ok((path, outcome))
}
