//! Mastery classifier
//!
//! Policy layered on top of the memory model, not part of the
//! forgetting-curve math: once an item is judged durable enough it is
//! pulled out of the active review pool. Thresholds live in
//! `SchedulerConfig` rather than being hard-coded law.

use crate::config::SchedulerConfig;
use crate::models::{CardScheduleState, Grade};

/// Decide whether a card graduates out of the active review pool
///
/// Evaluated on the state produced by `compute_review`, together with the
/// grade that produced it. Mastered when stability has reached the
/// configured threshold, or when the repetition count has and the latest
/// grade was not `Forgot`.
pub fn is_mastered(state: &CardScheduleState, grade: Grade, config: &SchedulerConfig) -> bool {
    if state.stability >= config.mastery_stability_days {
        return true;
    }
    grade != Grade::Forgot && state.repetitions >= config.mastery_min_repetitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardStatus;

    fn state(stability: f64, repetitions: u32) -> CardScheduleState {
        CardScheduleState {
            due_ms: 0,
            stability,
            difficulty: 5.0,
            repetitions,
            lapses: 0,
            status: CardStatus::Review,
        }
    }

    #[test]
    fn test_stability_threshold_alone_masters() {
        let config = SchedulerConfig::default();
        // Regardless of grade, including Forgot
        for grade in Grade::ALL {
            assert!(is_mastered(&state(30.0, 0), grade, &config));
            assert!(is_mastered(&state(120.0, 0), grade, &config));
        }
    }

    #[test]
    fn test_repetition_path_requires_success() {
        let config = SchedulerConfig::default();
        assert!(is_mastered(&state(10.0, 5), Grade::Good, &config));
        assert!(is_mastered(&state(10.0, 6), Grade::Hard, &config));
        // Forgot alone never masters through the repetition clause
        assert!(!is_mastered(&state(10.0, 6), Grade::Forgot, &config));
    }

    #[test]
    fn test_below_both_thresholds() {
        let config = SchedulerConfig::default();
        assert!(!is_mastered(&state(29.9, 4), Grade::Good, &config));
        assert!(!is_mastered(&state(1.0, 0), Grade::Easy, &config));
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let strict = SchedulerConfig::new(0.9, 365.0, 100.0, 20).unwrap();
        assert!(!is_mastered(&state(35.0, 6), Grade::Good, &strict));
        assert!(is_mastered(&state(100.0, 0), Grade::Forgot, &strict));
    }

    #[test]
    fn test_review_card_with_high_stability_and_repetitions() {
        let config = SchedulerConfig::default();
        assert!(is_mastered(&state(35.0, 6), Grade::Good, &config));
    }
}
