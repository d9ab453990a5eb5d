pub mod advisor;
pub mod analyze;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod report;
pub mod scorer;
pub mod telemetry;
pub mod types;
