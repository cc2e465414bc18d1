//! Flashlight difficulty evaluation for osu!standard.
//!
//! The [`FlashlightEvaluator`] estimates how hard a single hit object is to
//! locate and hit from memory when the player's vision is limited to a small
//! area around the cursor. It is meant to be called once per difficulty object
//! by a strain skill that aggregates the values into a rating.
//!
//! Geometry such as lazy jump distances, slider travel distances, and angles
//! is expected to be precomputed on each [`OsuDifficultyObject`].
//!
//! ## Usage
//!
//! ```
//! use rosu_flashlight::{
//!     FlashlightEvaluator, OsuDifficultyObject, OsuObject, OsuObjectKind, Pos,
//! };
//!
//! let objects = [
//!     OsuObject::new(Pos::new(0.0, 0.0), 0.0, 50.0, OsuObjectKind::Circle),
//!     OsuObject::new(Pos::new(100.0, 0.0), 500.0, 50.0, OsuObjectKind::Circle),
//!     OsuObject::new(Pos::new(200.0, 0.0), 1000.0, 50.0, OsuObjectKind::Circle),
//! ];
//!
//! // The first hit object has no difficulty object
//! let mut diff_objects: Vec<_> = objects
//!     .windows(2)
//!     .enumerate()
//!     .map(|(idx, pair)| OsuDifficultyObject::new(&pair[1], &pair[0], 1.0, idx))
//!     .collect();
//!
//! for diff_object in diff_objects.iter_mut() {
//!     diff_object.lazy_jump_dist = 104.0;
//! }
//!
//! let evaluator = FlashlightEvaluator::default();
//!
//! let difficulty = evaluator
//!     .try_evaluate_diff_of(&diff_objects[1], &diff_objects, false)
//!     .unwrap();
//!
//! assert!(difficulty > 0.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Rejected evaluations are logged through `tracing::warn!` | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]

#[doc(inline)]
pub use self::{
    model::mods::GameMods,
    osu::{
        difficulty::{
            error::FlashlightError, evaluators::FlashlightEvaluator, object::OsuDifficultyObject,
        },
        object::{OsuObject, OsuObjectKind, OsuSlider, Spinner},
    },
};

#[doc(inline)]
pub use rosu_map::util::Pos;

/// Types shared across game modes.
pub mod any;

/// Types for mods.
pub mod model;

/// Everything related to osu!standard.
pub mod osu;

mod util;
