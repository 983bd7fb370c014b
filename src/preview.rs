//! Per-grade scheduling preview
//!
//! Computes what each grade would schedule, for "if you answer X, you'll
//! see this again in Y" display before a grade is chosen. Nothing is
//! committed: each grade runs against a throwaway copy of the state.

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::format::format_interval;
use crate::models::{CardScheduleState, Grade, GradePreview, GradePreviews};
use crate::scheduler;

/// Preview the scheduled interval for every grade option
///
/// Idempotent; the input state is never mutated, so a subsequent
/// `compute_review` sees the card exactly as it was.
///
/// # Errors
/// * `SchedulerError::InvalidState` - the state would be rejected by
///   `compute_review`
pub fn preview_all_grades(
    state: &CardScheduleState,
    now_ms: i64,
    config: &SchedulerConfig,
) -> Result<GradePreviews, SchedulerError> {
    Ok(GradePreviews {
        forgot: preview_grade(state, Grade::Forgot, now_ms, config)?,
        hard: preview_grade(state, Grade::Hard, now_ms, config)?,
        good: preview_grade(state, Grade::Good, now_ms, config)?,
        easy: preview_grade(state, Grade::Easy, now_ms, config)?,
    })
}

fn preview_grade(
    state: &CardScheduleState,
    grade: Grade,
    now_ms: i64,
    config: &SchedulerConfig,
) -> Result<GradePreview, SchedulerError> {
    let outcome = scheduler::compute_review(state, grade, now_ms, config)?;
    Ok(GradePreview {
        scheduled_days: outcome.scheduled_days,
        label: format_interval(outcome.scheduled_days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardStatus;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn review_state() -> CardScheduleState {
        CardScheduleState {
            due_ms: NOW_MS - 3 * 86_400_000,
            stability: 8.0,
            difficulty: 5.5,
            repetitions: 4,
            lapses: 1,
            status: CardStatus::Review,
        }
    }

    #[test]
    fn test_matches_compute_review_per_grade() {
        let state = review_state();
        let config = SchedulerConfig::default();

        let previews = preview_all_grades(&state, NOW_MS, &config).unwrap();
        for grade in Grade::ALL {
            let outcome = scheduler::compute_review(&state, grade, NOW_MS, &config).unwrap();
            let preview = previews.for_grade(grade);
            assert_eq!(preview.scheduled_days, outcome.scheduled_days);
            assert_eq!(preview.label, format_interval(outcome.scheduled_days));
        }
    }

    #[test]
    fn test_idempotent() {
        let state = review_state();
        let config = SchedulerConfig::default();

        let first = preview_all_grades(&state, NOW_MS, &config).unwrap();
        let second = preview_all_grades(&state, NOW_MS, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_does_not_disturb_subsequent_review() {
        let state = review_state();
        let config = SchedulerConfig::default();

        let before = scheduler::compute_review(&state, Grade::Good, NOW_MS, &config).unwrap();
        preview_all_grades(&state, NOW_MS, &config).unwrap();
        let after = scheduler::compute_review(&state, Grade::Good, NOW_MS, &config).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_propagates_invalid_state() {
        let mut state = review_state();
        state.stability = -2.0;
        let config = SchedulerConfig::default();

        assert!(preview_all_grades(&state, NOW_MS, &config).is_err());
    }

    #[test]
    fn test_labels_ordered_with_grades() {
        let state = review_state();
        let config = SchedulerConfig::default();

        let previews = preview_all_grades(&state, NOW_MS, &config).unwrap();
        assert!(previews.forgot.scheduled_days <= previews.hard.scheduled_days);
        assert!(previews.hard.scheduled_days <= previews.good.scheduled_days);
        assert!(previews.good.scheduled_days <= previews.easy.scheduled_days);
    }
}
