pub mod json;
pub mod md;

use crate::error::AdvisorError;
use crate::types::report::AdvisorReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AdvisorReport, format: OutputFormat) -> Result<String, AdvisorError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AdvisorError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::analyze;
    use crate::scorer::{HeuristicScorer, LoadedScorer};
    use crate::types::profile::StudentProfile;
    use crate::types::report::{AdvisorReport, Priority};

    pub fn report(hours: f64, previous: f64, extra: bool, sleep: f64, papers: f64) -> AdvisorReport {
        let profile =
            StudentProfile::new(hours, previous, extra, sleep, papers).expect("profile is valid");
        let scorer = LoadedScorer {
            scorer: Box::new(HeuristicScorer::default()),
            artifacts: Vec::new(),
        };
        analyze::analyze(&profile, &scorer, 95.0, Priority::Low)
    }
}
