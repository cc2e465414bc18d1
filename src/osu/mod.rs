pub use self::{
    difficulty::{
        error::FlashlightError, evaluators::FlashlightEvaluator, object::OsuDifficultyObject,
    },
    object::{OsuObject, OsuObjectKind, OsuSlider, Spinner},
};

/// Difficulty objects and the flashlight evaluator.
pub mod difficulty;

/// osu!standard hit objects after stacking has been applied.
pub mod object;
