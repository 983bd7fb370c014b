//! Forgetting-curve memory model
//!
//! Implements the power-law DSR (Difficulty, Stability, Retrievability)
//! family directly, instead of delegating to an external scheduler crate,
//! so every tunable is a named constant that can be audited and tested:
//! - Retrievability: R(t, S) = (1 + t / (9·S))^(-1)
//! - Interval at target retention r: I(S) = 9·S·(1/r - 1), which is
//!   exactly S at the 0.9 default
//! - Grade-dependent stability growth on success, partial reset on lapse
//! - Difficulty drift per grade with mean reversion, clamped to [1, 10]

use crate::models::Grade;

/// Weight table for the update formulas
///
/// W[0..4] are the initial stabilities per grade; the rest parameterize
/// the difficulty and stability update curves.
pub(crate) const W: [f64; 17] = [
    0.4,  // W0: initial stability, Forgot
    0.6,  // W1: initial stability, Hard
    2.4,  // W2: initial stability, Good
    5.8,  // W3: initial stability, Easy
    4.93, // W4: initial difficulty base
    0.94, // W5: initial difficulty per-grade slope
    0.86, // W6: difficulty drift per grade step
    0.01, // W7: difficulty mean-reversion weight
    1.49, // W8: stability growth scale (exponent)
    0.14, // W9: stability saturation exponent
    0.94, // W10: retrievability effect on growth
    2.18, // W11: post-lapse stability scale
    0.05, // W12: difficulty effect on lapse
    0.34, // W13: stability retained through lapse
    1.26, // W14: retrievability effect on lapse
    0.29, // W15: hard penalty
    2.61, // W16: easy bonus
];

/// Factor relating stability to the power-law time scale
const DECAY_FACTOR: f64 = 9.0;

pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 10.0;

/// Floor for stability after any update; keeps the retrievability
/// formula well-defined
pub const MIN_STABILITY: f64 = 0.1;

/// Stability seed for a card that has never been reviewed
pub const STABILITY_SEED: f64 = 0.1;

/// Difficulty seed for a card that has never been reviewed
pub const INITIAL_DIFFICULTY: f64 = 5.0;

/// Probability of recall after `elapsed_days` at the given stability
///
/// Power-law forgetting curve: decay slows as elapsed time grows relative
/// to stability, which is why intervals expand geometrically for
/// well-known items. Returns 0.0 for non-positive stability.
pub fn retrievability(elapsed_days: f64, stability: f64) -> f64 {
    if stability <= 0.0 {
        return 0.0;
    }
    (1.0 + elapsed_days / (DECAY_FACTOR * stability)).powf(-1.0)
}

/// Elapsed days at which retrievability drops to `desired_retention`
///
/// Inverse of `retrievability`; this is the interval a learner is
/// scheduled for after a review.
pub fn interval_for_retention(stability: f64, desired_retention: f64) -> f64 {
    DECAY_FACTOR * stability * (1.0 / desired_retention - 1.0)
}

/// Stability after the first-ever review, by grade
pub(crate) fn initial_stability(grade: Grade) -> f64 {
    match grade {
        Grade::Forgot => W[0],
        Grade::Hard => W[1],
        Grade::Good => W[2],
        Grade::Easy => W[3],
    }
}

/// Difficulty after the first-ever review, by grade
pub(crate) fn initial_difficulty(grade: Grade) -> f64 {
    clamp_difficulty(W[4] - W[5] * (grade.rank() - 3.0))
}

/// Updated stability for one review at the given retrievability
pub(crate) fn next_stability(
    stability: f64,
    difficulty: f64,
    retrievability: f64,
    grade: Grade,
) -> f64 {
    match grade {
        Grade::Forgot => forget_stability(stability, difficulty, retrievability),
        _ => recall_stability(stability, difficulty, retrievability, grade),
    }
}

/// Stability growth after a successful recall
///
/// The increment is multiplicative on top of the current stability, so the
/// result never drops below it. Growth is larger for easier items
/// (11 - D), for items recalled closer to their forgetting point (low R),
/// and saturates as stability itself grows (S^-W9).
fn recall_stability(stability: f64, difficulty: f64, retrievability: f64, grade: Grade) -> f64 {
    let modifier = match grade {
        Grade::Hard => W[15],
        Grade::Easy => W[16],
        _ => 1.0,
    };

    let growth = W[8].exp()
        * (MAX_DIFFICULTY + 1.0 - difficulty)
        * stability.powf(-W[9])
        * ((W[10] * (1.0 - retrievability)).exp() - 1.0)
        * modifier;

    (stability * (1.0 + growth)).max(MIN_STABILITY)
}

/// Partial stability reset after a lapse
///
/// Harder and more-decayed items lose more. Capped at the previous
/// stability: forgetting never leaves an item more durable than before.
fn forget_stability(stability: f64, difficulty: f64, retrievability: f64) -> f64 {
    let reset = W[11]
        * difficulty.powf(-W[12])
        * ((stability + 1.0).powf(W[13]) - 1.0)
        * (W[14] * (1.0 - retrievability)).exp();

    reset.min(stability).max(MIN_STABILITY)
}

/// Updated difficulty for one review
///
/// Drifts up for Forgot/Hard, stays flat for Good, down for Easy, with a
/// small mean reversion toward the Good-grade baseline so difficulty does
/// not saturate permanently at the extremes.
pub(crate) fn next_difficulty(difficulty: f64, grade: Grade) -> f64 {
    let drifted = difficulty - W[6] * (grade.rank() - 3.0);
    clamp_difficulty(W[7] * initial_difficulty(Grade::Good) + (1.0 - W[7]) * drifted)
}

fn clamp_difficulty(difficulty: f64) -> f64 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}
