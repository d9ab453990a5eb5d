use super::Scorer;
use crate::types::config::HeuristicWeights;
use crate::types::profile::StudentProfile;
use crate::types::scoring::{clamp_score, Score};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer {
    weights: HeuristicWeights,
}

impl HeuristicScorer {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    fn study_impact(&self, hours: f64) -> f64 {
        (hours * self.weights.hours_rate).min(self.weights.hours_cap)
    }

    fn sleep_impact(&self, sleep: f64) -> f64 {
        if sleep >= self.weights.sleep_threshold {
            (sleep * self.weights.sleep_rate).min(self.weights.sleep_cap)
        } else {
            sleep * self.weights.short_sleep_rate
        }
    }

    fn practice_impact(&self, papers: f64) -> f64 {
        (papers * self.weights.practice_rate).min(self.weights.practice_cap)
    }
}

impl Scorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn predict(&self, profile: &StudentProfile) -> Score {
        let base = profile.previous_scores * self.weights.previous_weight;
        let balance = if profile.extracurricular {
            self.weights.extracurricular_bonus
        } else {
            0.0
        };
        let raw = base
            + self.study_impact(profile.hours_studied)
            + self.sleep_impact(profile.sleep_hours)
            + self.practice_impact(profile.sample_papers_practiced)
            + balance;
        clamp_score(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(hours: f64, previous: f64, extra: bool, sleep: f64, papers: f64) -> StudentProfile {
        StudentProfile::new(hours, previous, extra, sleep, papers).expect("profile is valid")
    }

    #[test]
    fn reference_profile_scores_as_weighted_sum() {
        // 70*0.4 + 5*4 + 7*3 + 3*5 + 10
        let score = HeuristicScorer::default().predict(&profile(5.0, 70.0, true, 7.0, 3.0));
        assert!((score - 94.0).abs() < 1e-9);
    }

    #[test]
    fn short_sleep_uses_reduced_rate() {
        let scorer = HeuristicScorer::default();
        // 50*0.4 + 2*4 + 5*1 + 0 + 0
        let score = scorer.predict(&profile(2.0, 50.0, false, 5.0, 0.0));
        assert!((score - 33.0).abs() < 1e-9);
    }

    #[test]
    fn contributions_are_capped() {
        let scorer = HeuristicScorer::default();
        let capped = scorer.predict(&profile(12.0, 0.0, false, 0.0, 0.0));
        let at_cap = scorer.predict(&profile(7.5, 0.0, false, 0.0, 0.0));
        assert_eq!(capped, 30.0);
        assert_eq!(at_cap, 30.0);
    }

    #[test]
    fn all_zero_inputs_score_zero() {
        let score = HeuristicScorer::default().predict(&profile(0.0, 0.0, false, 0.0, 0.0));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn all_max_inputs_clamp_to_hundred() {
        let score = HeuristicScorer::default().predict(&profile(12.0, 100.0, true, 12.0, 10.0));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn more_hours_never_lowers_the_score() {
        let scorer = HeuristicScorer::default();
        for previous in [0.0, 35.0, 70.0, 100.0] {
            for sleep in [0.0, 5.5, 6.0, 12.0] {
                let mut last = f64::MIN;
                for step in 0..=48 {
                    let hours = step as f64 * 0.25;
                    let score = scorer.predict(&profile(hours, previous, true, sleep, 4.0));
                    assert!(
                        score >= last,
                        "score dropped at hours={hours} previous={previous} sleep={sleep}"
                    );
                    last = score;
                }
            }
        }
    }

    #[test]
    fn custom_weights_are_applied() {
        let weights = HeuristicWeights {
            previous_weight: 0.7,
            extracurricular_bonus: 0.0,
            ..HeuristicWeights::default()
        };
        let score = HeuristicScorer::new(weights).predict(&profile(0.0, 100.0, true, 0.0, 0.0));
        assert!((score - 70.0).abs() < 1e-9);
    }
}
