use crate::error::{AdvisorError, Result};
use serde::Serialize;
use std::ops::RangeInclusive;

pub const HOURS_STUDIED_RANGE: RangeInclusive<f64> = 0.0..=12.0;
pub const PREVIOUS_SCORES_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const SLEEP_HOURS_RANGE: RangeInclusive<f64> = 0.0..=12.0;
pub const SAMPLE_PAPERS_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentProfile {
    pub hours_studied: f64,
    pub previous_scores: f64,
    pub extracurricular: bool,
    pub sleep_hours: f64,
    pub sample_papers_practiced: f64,
}

impl StudentProfile {
    pub fn new(
        hours_studied: f64,
        previous_scores: f64,
        extracurricular: bool,
        sleep_hours: f64,
        sample_papers_practiced: f64,
    ) -> Result<Self> {
        Ok(Self {
            hours_studied: clamp_field("hours_studied", hours_studied, HOURS_STUDIED_RANGE)?,
            previous_scores: clamp_field(
                "previous_scores",
                previous_scores,
                PREVIOUS_SCORES_RANGE,
            )?,
            extracurricular,
            sleep_hours: clamp_field("sleep_hours", sleep_hours, SLEEP_HOURS_RANGE)?,
            sample_papers_practiced: clamp_field(
                "sample_papers_practiced",
                sample_papers_practiced,
                SAMPLE_PAPERS_RANGE,
            )?,
        })
    }

    pub fn extracurricular_encoded(&self) -> f64 {
        if self.extracurricular {
            1.0
        } else {
            0.0
        }
    }
}

fn clamp_field(name: &str, value: f64, range: RangeInclusive<f64>) -> Result<f64> {
    if !value.is_finite() {
        return Err(AdvisorError::InvalidInput(format!(
            "{name} must be a finite number (got {value})"
        )));
    }
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        tracing::warn!(
            field = name,
            value,
            clamped,
            "input outside {}..={}, clamped",
            range.start(),
            range.end()
        );
    }
    Ok(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_values_inside_ranges() {
        let profile = StudentProfile::new(5.0, 70.0, true, 7.0, 3.0).expect("profile is valid");
        assert_eq!(profile.hours_studied, 5.0);
        assert_eq!(profile.previous_scores, 70.0);
        assert!(profile.extracurricular);
        assert_eq!(profile.sleep_hours, 7.0);
        assert_eq!(profile.sample_papers_practiced, 3.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        let profile =
            StudentProfile::new(-2.0, 140.0, false, 30.0, 11.5).expect("profile is valid");
        assert_eq!(profile.hours_studied, 0.0);
        assert_eq!(profile.previous_scores, 100.0);
        assert_eq!(profile.sleep_hours, 12.0);
        assert_eq!(profile.sample_papers_practiced, 10.0);
    }

    #[test]
    fn new_rejects_non_finite_values() {
        let err = StudentProfile::new(f64::NAN, 50.0, false, 7.0, 2.0)
            .expect_err("NaN should be rejected");
        assert!(err.to_string().contains("hours_studied"));

        assert!(StudentProfile::new(4.0, f64::INFINITY, false, 7.0, 2.0).is_err());
    }

    #[test]
    fn extracurricular_encodes_as_one_or_zero() {
        let yes = StudentProfile::new(1.0, 1.0, true, 1.0, 1.0).expect("profile is valid");
        let no = StudentProfile::new(1.0, 1.0, false, 1.0, 1.0).expect("profile is valid");
        assert_eq!(yes.extracurricular_encoded(), 1.0);
        assert_eq!(no.extracurricular_encoded(), 0.0);
    }
}
