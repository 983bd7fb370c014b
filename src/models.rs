use serde::{Deserialize, Serialize};

use crate::memory::{INITIAL_DIFFICULTY, STABILITY_SEED};

/// Milliseconds per day, for converting between epoch timestamps and the
/// day-based units of the memory model
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Recall-quality signal the learner supplies after each exposure
///
/// Kept as a closed enum rather than a numeric rating so callers cannot
/// do accidental arithmetic on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum Grade {
    Forgot,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// All grades in ascending recall-quality order
    pub const ALL: [Grade; 4] = [Grade::Forgot, Grade::Hard, Grade::Good, Grade::Easy];

    /// Position on the 1-4 grade axis used by the weight table
    pub(crate) fn rank(self) -> f64 {
        match self {
            Grade::Forgot => 1.0,
            Grade::Hard => 2.0,
            Grade::Good => 3.0,
            Grade::Easy => 4.0,
        }
    }
}

/// Lifecycle phase of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum CardStatus {
    New,
    Learning,
    Review,
    Relearning,
}

/// Scheduling state persisted per card by the card store
///
/// Timestamps are Unix epoch milliseconds; stability and intervals are in
/// days. This is a plain value: it is produced by `initial_state` when a
/// card is created and replaced wholesale by each `compute_review` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct CardScheduleState {
    /// When the card next becomes eligible for review (epoch ms)
    pub due_ms: i64,
    /// Estimated days for recall probability to decay to the reference
    /// retention threshold; always positive
    pub stability: f64,
    /// Intrinsic resistance to stabilizing, clamped to [1, 10]
    pub difficulty: f64,
    /// Completed review count, excluding lapses
    pub repetitions: u32,
    /// Count of `Forgot` outcomes
    pub lapses: u32,
    pub status: CardStatus,
}

impl CardScheduleState {
    /// Seed state for a freshly created card, due immediately
    ///
    /// Stability starts at a small positive seed (never zero) so the
    /// retrievability formula is well-defined before the first review.
    pub fn new_card(now_ms: i64) -> Self {
        Self {
            due_ms: now_ms,
            stability: STABILITY_SEED,
            difficulty: INITIAL_DIFFICULTY,
            repetitions: 0,
            lapses: 0,
            status: CardStatus::New,
        }
    }
}

/// Result of processing one review
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct ReviewOutcome {
    /// Replacement scheduling state to persist
    pub state: CardScheduleState,
    /// Interval the learner was scheduled for, in days; `state.due_ms`
    /// is the review timestamp plus this delta
    pub scheduled_days: f64,
}

/// What one grade would schedule, for display before a grade is chosen
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct GradePreview {
    pub scheduled_days: f64,
    /// Human-facing label like "10m", "3d", "2w", "4mo", "1y"
    pub label: String,
}

/// Previews for every grade option
///
/// One field per grade rather than a map keyed by `Grade`, since UniFFI
/// maps require string keys.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct GradePreviews {
    pub forgot: GradePreview,
    pub hard: GradePreview,
    pub good: GradePreview,
    pub easy: GradePreview,
}

impl GradePreviews {
    /// Look up the preview for a single grade
    pub fn for_grade(&self, grade: Grade) -> &GradePreview {
        match grade {
            Grade::Forgot => &self.forgot,
            Grade::Hard => &self.hard,
            Grade::Good => &self.good,
            Grade::Easy => &self.easy,
        }
    }
}
