//! Scheduler Swift - spaced repetition review scheduler
//!
//! This library owns the review scheduling core of the app:
//! - Forgetting-curve memory model (stability/difficulty updates)
//! - Per-grade interval computation with a lifecycle state machine
//! - Mastery classifier for pulling internalized cards out of rotation
//! - Per-grade scheduling preview for the review buttons
//!
//! Everything is a pure function over value types; persistence (the card
//! store) and the review log stay on the Swift side. Timestamps cross the
//! boundary as Unix epoch milliseconds.
//!
//! Designed for integration with Swift via UniFFI bindings.

pub mod config;
pub mod error;
pub mod format;
pub mod mastery;
pub mod memory;
pub mod models;
pub mod preview;
pub mod scheduler;

// Re-export main types
pub use config::SchedulerConfig;
pub use error::SchedulerError as Error;
pub use models::{
    CardScheduleState, CardStatus, Grade, GradePreview, GradePreviews, ReviewOutcome,
};

use error::SchedulerError;

/// Seed scheduling state for a freshly created card
///
/// # Arguments
/// * `now_ms` - Creation time, Unix epoch milliseconds
#[uniffi::export]
pub fn initial_state(now_ms: i64) -> CardScheduleState {
    CardScheduleState::new_card(now_ms)
}

/// Process one review: the single state-transition entry point
///
/// The caller persists the returned state (atomically against the state
/// it read) and appends its own review-log entry.
///
/// # Arguments
/// * `state` - Current scheduling state from the card store
/// * `grade` - Recall quality the learner reported
/// * `now_ms` - Review time, Unix epoch milliseconds
/// * `config` - Validated scheduling configuration
///
/// # Errors
/// * `SchedulerError::InvalidState` - persisted state is corrupt
///   (negative or non-finite stability, non-finite difficulty)
#[uniffi::export]
pub fn compute_review(
    state: CardScheduleState,
    grade: Grade,
    now_ms: i64,
    config: SchedulerConfig,
) -> Result<ReviewOutcome, SchedulerError> {
    scheduler::compute_review(&state, grade, now_ms, &config)
}

/// Preview what every grade would schedule, without committing anything
#[uniffi::export]
pub fn preview_all_grades(
    state: CardScheduleState,
    now_ms: i64,
    config: SchedulerConfig,
) -> Result<GradePreviews, SchedulerError> {
    preview::preview_all_grades(&state, now_ms, &config)
}

/// Decide whether a just-reviewed card graduates out of the review pool
///
/// Evaluate on the state returned by `compute_review`, with the grade
/// that produced it.
#[uniffi::export]
pub fn is_mastered(state: CardScheduleState, grade: Grade, config: SchedulerConfig) -> bool {
    mastery::is_mastered(&state, grade, &config)
}

/// Format a day-count as a short human-facing label ("10m", "3d", "2w")
#[uniffi::export]
pub fn format_interval(days: f64) -> String {
    format::format_interval(days)
}

/// Current recall probability for a card
///
/// # Arguments
/// * `stability` - Stability from the card's scheduling state
/// * `elapsed_days` - Days since the card was last due
#[uniffi::export]
pub fn current_retrievability(stability: f64, elapsed_days: f64) -> f64 {
    memory::retrievability(elapsed_days, stability)
}

/// Default scheduling configuration (90% retention, 365-day cap)
#[uniffi::export]
pub fn default_config() -> SchedulerConfig {
    SchedulerConfig::default()
}

/// Build a validated custom configuration
///
/// # Errors
/// * `SchedulerError::InvalidConfiguration` - retention outside (0, 1),
///   or non-positive interval/mastery thresholds
#[uniffi::export]
pub fn custom_config(
    desired_retention: f64,
    maximum_interval_days: f64,
    mastery_stability_days: f64,
    mastery_min_repetitions: u32,
) -> Result<SchedulerConfig, SchedulerError> {
    SchedulerConfig::new(
        desired_retention,
        maximum_interval_days,
        mastery_stability_days,
        mastery_min_repetitions,
    )
}

// Setup UniFFI scaffolding using proc-macros
uniffi::setup_scaffolding!();
