//! Review-processing orchestration
//!
//! One call per completed review: validates the incoming state, runs the
//! memory model, derives the next interval at the configured retention,
//! and advances the lifecycle state machine. Pure - the caller persists
//! the returned state and appends its own review-log entry.

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::memory;
use crate::models::{CardScheduleState, CardStatus, Grade, ReviewOutcome, MS_PER_DAY};

/// Process one review and produce the replacement scheduling state
///
/// Deterministic and total for in-invariant inputs. Early reviews (now
/// before the previous due date) are treated as zero overdue time.
///
/// # Errors
/// * `SchedulerError::InvalidState` - negative or non-finite stability,
///   or non-finite difficulty; the caller's persisted state is corrupt
///   and must not be silently rescheduled
pub fn compute_review(
    state: &CardScheduleState,
    grade: Grade,
    now_ms: i64,
    config: &SchedulerConfig,
) -> Result<ReviewOutcome, SchedulerError> {
    let (stability, difficulty) = validated_memory(state)?;
    let overdue_days = overdue_days(state.due_ms, now_ms);

    // First-ever review seeds stability/difficulty from the grade alone;
    // there is no prior retrievability to condition on
    let (new_stability, new_difficulty) = if state.repetitions == 0 {
        (
            memory::initial_stability(grade),
            memory::initial_difficulty(grade),
        )
    } else {
        // The due date sits at the interval where retrievability equals
        // the target, so decay at review time is that interval plus any
        // overdue days. Reviewing exactly on time sees R = target; late
        // reviews see less.
        let decay_days =
            memory::interval_for_retention(stability, config.desired_retention) + overdue_days;
        let retrievability = memory::retrievability(decay_days, stability);
        (
            memory::next_stability(stability, difficulty, retrievability, grade),
            memory::next_difficulty(difficulty, grade),
        )
    };

    let scheduled_days = memory::interval_for_retention(new_stability, config.desired_retention)
        .clamp(0.0, config.maximum_interval_days);

    let (repetitions, lapses) = match grade {
        Grade::Forgot => (state.repetitions, state.lapses + 1),
        _ => (state.repetitions + 1, state.lapses),
    };

    log::debug!(
        "review graded {:?}: stability {:.2} -> {:.2}, scheduled {:.2} days",
        grade,
        stability,
        new_stability,
        scheduled_days
    );

    Ok(ReviewOutcome {
        state: CardScheduleState {
            due_ms: now_ms + (scheduled_days * MS_PER_DAY) as i64,
            stability: new_stability,
            difficulty: new_difficulty,
            repetitions,
            lapses,
            status: next_status(state.status, grade),
        },
        scheduled_days,
    })
}

/// Lifecycle transition table
///
/// A card always passes through Learning on its first review; Forgot
/// sends any seen card to Relearning; any success graduates Learning and
/// Relearning cards to Review.
pub(crate) fn next_status(status: CardStatus, grade: Grade) -> CardStatus {
    match (status, grade) {
        (CardStatus::New, _) => CardStatus::Learning,
        (_, Grade::Forgot) => CardStatus::Relearning,
        (CardStatus::Learning, _) => CardStatus::Review,
        (CardStatus::Review, _) => CardStatus::Review,
        (CardStatus::Relearning, _) => CardStatus::Review,
    }
}

/// Read the memory fields, rejecting corrupt values and clamping
/// recoverable ones
fn validated_memory(state: &CardScheduleState) -> Result<(f64, f64), SchedulerError> {
    if !state.stability.is_finite() || state.stability < 0.0 {
        return Err(SchedulerError::invalid_state(format!(
            "stability must be a non-negative number, got {}",
            state.stability
        )));
    }
    if !state.difficulty.is_finite() {
        return Err(SchedulerError::invalid_state(format!(
            "difficulty must be a number, got {}",
            state.difficulty
        )));
    }

    // Reachable states never drop below the model's stability floor; a
    // lower value from the store would blow up the power-law terms
    let stability = if state.stability < memory::MIN_STABILITY {
        log::warn!(
            "stability {} below {}, clamping",
            state.stability,
            memory::MIN_STABILITY
        );
        memory::MIN_STABILITY
    } else {
        state.stability
    };

    let difficulty = if (memory::MIN_DIFFICULTY..=memory::MAX_DIFFICULTY)
        .contains(&state.difficulty)
    {
        state.difficulty
    } else {
        let clamped = state
            .difficulty
            .clamp(memory::MIN_DIFFICULTY, memory::MAX_DIFFICULTY);
        log::warn!(
            "difficulty {} outside [1, 10], clamping to {}",
            state.difficulty,
            clamped
        );
        clamped
    };

    Ok((stability, difficulty))
}

/// Days since the card was last due, clamped at zero for early reviews
fn overdue_days(due_ms: i64, now_ms: i64) -> f64 {
    ((now_ms - due_ms) as f64 / MS_PER_DAY).max(0.0)
}
