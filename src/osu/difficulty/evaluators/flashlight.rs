use std::cmp;

use crate::{
    any::difficulty::object::IDifficultyObject,
    model::mods::GameMods,
    osu::{
        difficulty::{
            error::FlashlightError, object::OsuDifficultyObject, FADE_IN_DURATION,
            HD_FADE_IN_DURATION_MULTIPLIER, PREEMPT_MAX, PREEMPT_MID, PREEMPT_MIN,
        },
        object::{OsuObjectKind, OsuSlider},
    },
    util::difficulty::difficulty_range,
};

/// Evaluates how hard a hit object is to memorise and hit while only a small
/// area around the cursor is visible.
///
/// Besides the fade timings of the opacity curve the evaluator holds no
/// state so it can be shared freely across threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlashlightEvaluator {
    time_preempt: f64,
    time_fade_in: f64,
}

impl FlashlightEvaluator {
    const MAX_OPACITY_BONUS: f64 = 0.4;
    const HIDDEN_BONUS: f64 = 0.2;

    const MIN_VELOCITY: f64 = 0.5;
    const SLIDER_MULTIPLIER: f64 = 1.3;

    const MIN_GRID_MULTIPLIER: f64 = 0.35;
    const HEXAGONAL_ANGLE_FACTOR: f64 = 180.0 / 60.0;
    const SQUARE_ANGLE_FACTOR: f64 = 180.0 / 45.0;

    const REFERENCE_RADIUS: f64 = 52.0;
    const SMALL_DIST_THRESHOLD: f64 = 75.0;
    const STACK_DIST_THRESHOLD: f64 = 25.0;

    /// Amount of preceding objects considered for memorisation.
    pub const HISTORY_LEN: usize = 10;

    /// Create a new [`FlashlightEvaluator`] with the given fade timings in
    /// milliseconds.
    ///
    /// The timings must be in the hit objects' own timescale, i.e. not
    /// adjusted by the clock rate.
    pub const fn new(time_preempt: f64, time_fade_in: f64) -> Self {
        Self {
            time_preempt,
            time_fade_in,
        }
    }

    /// Create a new [`FlashlightEvaluator`] for a beatmap's approach rate.
    ///
    /// With Hidden enabled, hit objects fade in over a fraction of the
    /// preempt time.
    pub fn from_ar(ar: f64, mods: &GameMods) -> Self {
        let time_preempt = difficulty_range(ar, PREEMPT_MAX, PREEMPT_MID, PREEMPT_MIN);

        let time_fade_in = if mods.hd() {
            time_preempt * HD_FADE_IN_DURATION_MULTIPLIER
        } else {
            FADE_IN_DURATION * (time_preempt / PREEMPT_MIN).min(1.0)
        };

        Self::new(time_preempt, time_fade_in)
    }

    /// Milliseconds before a hit object's start time at which it starts
    /// fading in.
    pub const fn time_preempt(&self) -> f64 {
        self.time_preempt
    }

    /// Milliseconds it takes a hit object to fully fade in.
    pub const fn time_fade_in(&self) -> f64 {
        self.time_fade_in
    }

    /// Evaluate the flashlight difficulty of `curr` for the given mods.
    ///
    /// Returns `0.0` if Flashlight is not enabled.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as
    /// [`evaluate_diff_of`](Self::evaluate_diff_of).
    pub fn evaluate_with_mods<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        mods: &GameMods,
    ) -> f64 {
        if !mods.fl() {
            return 0.0;
        }

        self.evaluate_diff_of(curr, diff_objects, mods.hd())
    }

    /// Evaluate the flashlight difficulty of `curr` after verifying that
    /// `curr` and its history are well-formed.
    ///
    /// Unlike [`evaluate_diff_of`](Self::evaluate_diff_of), a malformed
    /// history or a non-finite result is reported as an error.
    pub fn try_evaluate_diff_of<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> Result<f64, FlashlightError> {
        let res = Self::validate(curr, diff_objects)
            .map(|()| self.evaluate_diff_of(curr, diff_objects, hidden))
            .and_then(|value| {
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(FlashlightError::NonFiniteResult {
                        idx: curr.idx,
                        value,
                    })
                }
            });

        #[cfg(feature = "tracing")]
        {
            match res {
                Ok(value) => tracing::trace!(idx = curr.idx, value, "Evaluated flashlight"),
                Err(ref err) => tracing::warn!(idx = curr.idx, %err, "Rejected flashlight evaluation"),
            }
        }

        res
    }

    /// Evaluate the flashlight difficulty of `curr`.
    ///
    /// `diff_objects` must contain every difficulty object up to `curr` at
    /// the position of its index. Only objects before `curr` are accessed.
    ///
    /// # Panics
    ///
    /// Panics if one of the up to [`HISTORY_LEN`](Self::HISTORY_LEN)
    /// preceding difficulty objects is missing from `diff_objects`. Use
    /// [`try_evaluate_diff_of`](Self::try_evaluate_diff_of) to get an error
    /// instead.
    pub fn evaluate_diff_of<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let scaling_factor = Self::scaling_factor(curr.base.radius);

        let mut result = self.memory_difficulty(curr, diff_objects, hidden, scaling_factor);

        let slider_bonus = match curr.base.kind {
            OsuObjectKind::Slider(ref slider) => Self::slider_bonus(curr, slider, scaling_factor),
            OsuObjectKind::Circle | OsuObjectKind::Spinner(_) => 0.0,
        };

        result += slider_bonus * Self::SLIDER_MULTIPLIER;

        result
    }

    fn memory_difficulty<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
        scaling_factor: f64,
    ) -> f64 {
        let osu_curr = curr;
        let osu_hit_obj = curr.base;

        let mut small_dist_nerf = 1.0;
        let mut cumulative_strain_time = 0.0;

        let mut result = 0.0;

        let mut last_obj = osu_curr;

        // * This is iterating backwards in time from the current object.
        for i in 0..cmp::min(curr.idx, Self::HISTORY_LEN) {
            let Some(curr_obj) = curr.previous(i, diff_objects) else {
                panic!(
                    "missing difficulty object {} positions before index {}",
                    i + 1,
                    curr.idx
                );
            };

            let curr_hit_obj = curr_obj.base;

            match curr_hit_obj.kind {
                OsuObjectKind::Circle | OsuObjectKind::Slider(_) => {
                    let jump_dist =
                        f64::from((osu_hit_obj.stacked_pos() - curr_hit_obj.end_pos()).length());

                    cumulative_strain_time += last_obj.adjusted_delta_time;

                    // * We want to nerf objects that can be easily seen within the Flashlight circle radius.
                    if i == 0 {
                        small_dist_nerf = Self::small_dist_nerf(jump_dist);
                    }

                    // * We also want to nerf stacks so that only the first object of the stack is accounted for.
                    let stack_nerf = ((curr_obj.lazy_jump_dist / scaling_factor)
                        / Self::STACK_DIST_THRESHOLD)
                        .min(1.0);

                    // * Bonus based on how visible the object is.
                    let opacity_bonus = 1.0
                        + Self::MAX_OPACITY_BONUS
                            * (1.0
                                - osu_curr.opacity_at(
                                    curr_hit_obj.start_time,
                                    hidden,
                                    self.time_preempt,
                                    self.time_fade_in,
                                ));

                    result += stack_nerf * opacity_bonus * scaling_factor * jump_dist
                        / cumulative_strain_time;
                }
                // Spinners only advance `last_obj`
                OsuObjectKind::Spinner(_) => {}
            }

            last_obj = curr_obj;
        }

        result = (small_dist_nerf * result).powf(2.0);

        // * Additional bonus for Hidden due to there being no approach circles.
        if hidden {
            result *= 1.0 + Self::HIDDEN_BONUS;
        }

        if let Some(angle) = osu_curr.angle {
            result *= Self::grid_multiplier(angle);
        }

        result
    }

    fn scaling_factor(radius: f64) -> f64 {
        Self::REFERENCE_RADIUS / radius
    }

    fn small_dist_nerf(jump_dist: f64) -> f64 {
        (jump_dist / Self::SMALL_DIST_THRESHOLD).min(1.0)
    }

    /// Nerf angles typical for patterns placed on a hexagonal or square grid.
    fn grid_multiplier(angle: f64) -> f64 {
        let hexagonal = 1.0 - f64::cos(Self::HEXAGONAL_ANGLE_FACTOR * angle).powf(20.0);
        let square = 1.0 - f64::cos(Self::SQUARE_ANGLE_FACTOR * angle).powf(20.0);

        (1.0 - Self::MIN_GRID_MULTIPLIER) * hexagonal * square + Self::MIN_GRID_MULTIPLIER
    }

    fn slider_bonus(curr: &OsuDifficultyObject<'_>, slider: &OsuSlider, scaling_factor: f64) -> f64 {
        // * Invert the scaling factor to determine the true travel distance independent of circle size.
        let pixel_travel_dist = curr.lazy_travel_dist / scaling_factor;

        // * Reward sliders based on velocity.
        let mut slider_bonus = ((pixel_travel_dist / curr.travel_time - Self::MIN_VELOCITY)
            .max(0.0))
        .powf(0.5);

        // * Longer sliders require more memorisation.
        slider_bonus *= pixel_travel_dist;

        // * Nerf sliders with repeats, as less memorisation is required.
        let repeat_count = slider.repeat_count();

        if repeat_count > 0 {
            slider_bonus /= (repeat_count + 1) as f64;
        }

        slider_bonus
    }

    fn validate<'a>(
        curr: &OsuDifficultyObject<'a>,
        diff_objects: &[OsuDifficultyObject<'a>],
    ) -> Result<(), FlashlightError> {
        let idx = curr.idx;

        match curr.base.kind {
            OsuObjectKind::Spinner(_) => return Ok(()),
            OsuObjectKind::Slider(_) if !is_positive(curr.travel_time) => {
                return Err(FlashlightError::InvalidTravelTime {
                    idx,
                    travel_time: curr.travel_time,
                });
            }
            OsuObjectKind::Circle | OsuObjectKind::Slider(_) => {}
        }

        if !is_positive(curr.base.radius) {
            return Err(FlashlightError::InvalidRadius {
                idx,
                radius: curr.base.radius,
            });
        }

        Self::validate_strain_time(curr)?;

        for i in 0..cmp::min(idx, Self::HISTORY_LEN) {
            let prev = curr
                .previous(i, diff_objects)
                .ok_or(FlashlightError::MissingHistory {
                    idx,
                    backwards_idx: i,
                })?;

            let expected = idx - (i + 1);

            if prev.idx != expected {
                return Err(FlashlightError::HistoryMismatch {
                    idx,
                    expected,
                    found: prev.idx,
                });
            }

            Self::validate_strain_time(prev)?;
        }

        Ok(())
    }

    fn validate_strain_time(diff_obj: &OsuDifficultyObject<'_>) -> Result<(), FlashlightError> {
        if is_positive(diff_obj.adjusted_delta_time) {
            Ok(())
        } else {
            Err(FlashlightError::InvalidStrainTime {
                idx: diff_obj.idx,
                strain_time: diff_obj.adjusted_delta_time,
            })
        }
    }
}

impl Default for FlashlightEvaluator {
    fn default() -> Self {
        Self::new(PREEMPT_MID, FADE_IN_DURATION)
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}
