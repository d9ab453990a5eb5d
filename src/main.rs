mod cli;

use clap::Parser;
use std::path::Path;
use study_advisor::error::AdvisorError;
use study_advisor::scorer::{self, LoadedScorer};
use study_advisor::types::config::{AdvisorConfig, ModelVariant, DEFAULT_LOG_LEVEL};
use study_advisor::types::report::Priority;
use study_advisor::types::scoring::PerformanceTier;
use study_advisor::{advisor, analyze, config, generator, report, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PREDICTION_DISABLED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn setup(cli: &cli::Cli) -> Result<AdvisorConfig, AdvisorError> {
    let flag_level = telemetry::level_from_flags(cli.verbose, cli.quiet);
    if let Some(level) = flag_level {
        telemetry::init(level)?;
    }
    let loaded = config::load_config(&cli.config_dir)?;
    if flag_level.is_none() {
        telemetry::init(loaded.log_level())?;
    }
    Ok(loaded)
}

/// `None` means the scorer is unavailable and the reason was already reported.
fn load_scorer(
    loaded: &AdvisorConfig,
    root: &Path,
    variant: ModelVariant,
) -> Result<Option<LoadedScorer>, AdvisorError> {
    match scorer::build(loaded, root, variant) {
        Ok(scorer) => Ok(Some(scorer)),
        Err(e) if e.disables_prediction() => {
            eprintln!("prediction disabled: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn run() -> Result<i32, AdvisorError> {
    let cli = cli::Cli::parse();
    match &cli.command {
        cli::Commands::Analyze(cmd) => {
            let loaded = setup(&cli)?;
            let profile = cmd.profile.to_profile()?;
            let variant = cmd.profile.variant(loaded.variant());
            let Some(scorer) = load_scorer(&loaded, &cli.config_dir, variant)? else {
                return Ok(exit_code::PREDICTION_DISABLED);
            };

            let min_priority: Priority = cmd.min_priority.into();
            let advisor_report =
                analyze::analyze(&profile, &scorer, loaded.target_score(), min_priority);
            let rendered = report::render(&advisor_report, cmd.format.into())?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Predict(cmd) => {
            let loaded = setup(&cli)?;
            let profile = cmd.profile.to_profile()?;
            let variant = cmd.profile.variant(loaded.variant());
            let Some(scorer) = load_scorer(&loaded, &cli.config_dir, variant)? else {
                return Ok(exit_code::PREDICTION_DISABLED);
            };

            let prediction = scorer.predict(&profile);
            println!("predicted performance index: {:.2}", prediction.score);
            println!(
                "performance: {}",
                PerformanceTier::from_score(prediction.score)
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Plan(cmd) => {
            let loaded = setup(&cli)?;
            let profile = cmd.profile.to_profile()?;
            let variant = cmd.profile.variant(loaded.variant());
            let Some(scorer) = load_scorer(&loaded, &cli.config_dir, variant)? else {
                return Ok(exit_code::PREDICTION_DISABLED);
            };

            let score = scorer.predict(&profile).score;
            let advice = advisor::recommend_with_target(&profile, score, loaded.target_score());
            print!("{}", report::md::plan_section(&advice.mentoring_plan));

            if cmd.export {
                let export =
                    generator::manifest::PlanExport::new(profile, score, advice.mentoring_plan);
                let path = generator::manifest::write_plan(&cli.config_dir, &export)?;
                println!("plan file: {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            // init must work even when the existing config does not parse
            let level =
                telemetry::level_from_flags(cli.verbose, cli.quiet).unwrap_or(DEFAULT_LOG_LEVEL);
            telemetry::init(level)?;
            let dir = cmd.path.as_deref().unwrap_or(cli.config_dir.as_path());
            let (path, outcome) =
                generator::writer::write_default_config(dir, cmd.dry_run, cmd.no_overwrite)?;
            println!("init: {} {}", outcome.as_str(), path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
