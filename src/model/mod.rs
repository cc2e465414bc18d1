/// Mods and how they affect flashlight evaluation.
pub mod mods;
