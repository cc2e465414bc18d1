use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Error type when the difficulty objects passed to the
/// [`FlashlightEvaluator`] violate its requirements.
///
/// [`FlashlightEvaluator`]: crate::FlashlightEvaluator
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlashlightError {
    /// A predecessor within the history window is missing from the list of
    /// difficulty objects.
    MissingHistory { idx: usize, backwards_idx: usize },
    /// The difficulty object found at a position carries a different index.
    HistoryMismatch {
        idx: usize,
        expected: usize,
        found: usize,
    },
    /// The strain time of a difficulty object is not strictly positive.
    InvalidStrainTime { idx: usize, strain_time: f64 },
    /// The radius of the current hit object is not strictly positive.
    InvalidRadius { idx: usize, radius: f64 },
    /// The travel time of the current slider is not strictly positive.
    InvalidTravelTime { idx: usize, travel_time: f64 },
    /// The evaluation produced NaN or an infinite value.
    NonFiniteResult { idx: usize, value: f64 },
}

impl FlashlightError {
    /// The index of the difficulty object that caused the error.
    pub const fn idx(&self) -> usize {
        match self {
            Self::MissingHistory { idx, .. }
            | Self::HistoryMismatch { idx, .. }
            | Self::InvalidStrainTime { idx, .. }
            | Self::InvalidRadius { idx, .. }
            | Self::InvalidTravelTime { idx, .. }
            | Self::NonFiniteResult { idx, .. } => *idx,
        }
    }
}

impl Error for FlashlightError {}

impl Display for FlashlightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MissingHistory { idx, backwards_idx } => write!(
                f,
                "Object {idx} is missing its predecessor {backwards_idx} positions back"
            ),
            Self::HistoryMismatch {
                idx,
                expected,
                found,
            } => write!(
                f,
                "Object {idx} expected its predecessor at index {expected} but found index {found}"
            ),
            Self::InvalidStrainTime { idx, strain_time } => {
                write!(f, "Object {idx} has invalid strain time {strain_time}")
            }
            Self::InvalidRadius { idx, radius } => {
                write!(f, "Object {idx} has invalid radius {radius}")
            }
            Self::InvalidTravelTime { idx, travel_time } => {
                write!(f, "Object {idx} has invalid slider travel time {travel_time}")
            }
            Self::NonFiniteResult { idx, value } => {
                write!(f, "Evaluating object {idx} resulted in {value}")
            }
        }
    }
}
