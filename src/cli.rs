use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use study_advisor::error::Result;
use study_advisor::report::OutputFormat;
use study_advisor::types::config::ModelVariant;
use study_advisor::types::profile::StudentProfile;
use study_advisor::types::report::Priority;

#[derive(Parser)]
#[command(
    name = "study-advisor",
    version,
    about = "Student performance prediction and study recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding study-advisor.toml and relative artifact paths
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full report: score, metrics, chart data, recommendations and plan
    Analyze(AnalyzeCommand),
    /// Predicted score and performance tier only
    Predict(PredictCommand),
    /// 30-day mentoring plan
    Plan(PlanCommand),
    /// Write a default study-advisor.toml
    Init(InitCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScorerChoice {
    Heuristic,
    Linear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MinPriority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Study habits; defaults match a typical mid-range student.
#[derive(Args, Clone, Debug)]
pub struct ProfileArgs {
    /// Hours studied per day (0-12)
    #[arg(long = "hours", default_value_t = 4.0, allow_negative_numbers = true)]
    pub hours_studied: f64,

    /// Previous exam score in percent (0-100)
    #[arg(long = "previous", default_value_t = 65.0, allow_negative_numbers = true)]
    pub previous_scores: f64,

    /// Sleep hours per night (0-12)
    #[arg(long = "sleep", default_value_t = 7.0, allow_negative_numbers = true)]
    pub sleep_hours: f64,

    /// Sample question papers practiced (0-10)
    #[arg(long = "papers", default_value_t = 2.0, allow_negative_numbers = true)]
    pub sample_papers: f64,

    /// Takes part in extracurricular activities
    #[arg(long, value_enum, default_value = "no")]
    pub extracurricular: YesNo,

    /// Override the configured scorer variant
    #[arg(long, value_enum)]
    pub scorer: Option<ScorerChoice>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Drop recommendations ranked below this priority
    #[arg(long, value_enum, default_value = "low")]
    pub min_priority: MinPriority,
}

#[derive(Args)]
pub struct PredictCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,
    /// Also write the plan as JSON under .study-advisor/plans
    #[arg(long)]
    pub export: bool,
}

#[derive(Args)]
pub struct InitCommand {
    /// Target directory (defaults to --config-dir)
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> Result<StudentProfile> {
        StudentProfile::new(
            self.hours_studied,
            self.previous_scores,
            matches!(self.extracurricular, YesNo::Yes),
            self.sleep_hours,
            self.sample_papers,
        )
    }

    pub fn variant(&self, configured: ModelVariant) -> ModelVariant {
        match self.scorer {
            Some(ScorerChoice::Heuristic) => ModelVariant::Heuristic,
            Some(ScorerChoice::Linear) => ModelVariant::Linear,
            None => configured,
        }
    }
}

impl From<MinPriority> for Priority {
    fn from(value: MinPriority) -> Self {
        match value {
            MinPriority::Critical => Priority::Critical,
            MinPriority::High => Priority::High,
            MinPriority::Medium => Priority::Medium,
            MinPriority::Low => Priority::Low,
        }
    }
}

impl From<ReportFormat> for OutputFormat {
    fn from(value: ReportFormat) -> Self {
        match value {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}
