/// Errors for contract violations in the difficulty object history.
pub mod error;

/// Difficulty evaluators.
pub mod evaluators;

/// [`OsuDifficultyObject`](object::OsuDifficultyObject) and its opacity curve.
pub mod object;

const HD_FADE_IN_DURATION_MULTIPLIER: f64 = 0.4;
const HD_FADE_OUT_DURATION_MULTIPLIER: f64 = 0.3;

const PREEMPT_MAX: f64 = 1800.0;
const PREEMPT_MID: f64 = 1200.0;
const PREEMPT_MIN: f64 = 450.0;

const FADE_IN_DURATION: f64 = 400.0;
