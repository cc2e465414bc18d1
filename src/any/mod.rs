pub use self::difficulty::object::IDifficultyObject;

/// Traits shared by the difficulty objects of every mode.
pub mod difficulty;
