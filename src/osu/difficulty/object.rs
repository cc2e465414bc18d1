use crate::{any::difficulty::object::IDifficultyObject, osu::object::OsuObject};

use super::HD_FADE_OUT_DURATION_MULTIPLIER;

/// A hit object enriched with the values required for difficulty evaluation.
///
/// Time values are already adjusted by the clock rate. Distances are
/// multiplied by the scaling factor `52 / radius` of the hit objects so that
/// they are independent of the circle size.
#[derive(Clone, Debug)]
pub struct OsuDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a OsuObject,
    pub start_time: f64,
    pub delta_time: f64,

    /// The strain time, i.e. the delta time capped to a minimum of
    /// [`MIN_DELTA_TIME`](Self::MIN_DELTA_TIME).
    pub adjusted_delta_time: f64,
    /// Scaled distance between the lazy cursor end position of the
    /// previous object and the start of this one.
    pub lazy_jump_dist: f64,
    /// Scaled distance the cursor travels along this slider's body.
    pub lazy_travel_dist: f64,
    /// Time in milliseconds the cursor travels along this slider's body.
    pub travel_time: f64,
    /// Angle in radians between this object and its two predecessors.
    pub angle: Option<f64>,
}

impl<'a> OsuDifficultyObject<'a> {
    pub const MIN_DELTA_TIME: f64 = 25.0;

    /// Create a new [`OsuDifficultyObject`] from its hit object and the
    /// preceding hit object.
    ///
    /// Only time values are computed; distances and the angle are left at
    /// their defaults and must be filled in by the caller.
    pub fn new(
        hit_object: &'a OsuObject,
        last_object: &'a OsuObject,
        clock_rate: f64,
        idx: usize,
    ) -> Self {
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;

        let strain_time = delta_time.max(Self::MIN_DELTA_TIME);

        let travel_time = if hit_object.is_slider() {
            ((hit_object.end_time() - hit_object.start_time) / clock_rate)
                .max(Self::MIN_DELTA_TIME)
        } else {
            0.0
        };

        Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            adjusted_delta_time: strain_time,
            lazy_jump_dist: 0.0,
            lazy_travel_dist: 0.0,
            travel_time,
            angle: None,
        }
    }

    /// The opacity of this object at the given time, in `[0, 1]`.
    ///
    /// `time` is in the hit object's own timescale, i.e. not adjusted by the
    /// clock rate.
    pub fn opacity_at(&self, time: f64, hidden: bool, time_preempt: f64, time_fade_in: f64) -> f64 {
        if time > self.base.start_time {
            // * Consider a hitobject as being invisible when its start time is passed.
            // * In reality the hitobject will be visible beyond its start time up until its hittable window has passed,
            // * but this is an approximation and such a case is unlikely to be hit where this function is used.
            return 0.0;
        }

        let fade_in_start_time = self.base.start_time - time_preempt;
        let fade_in_duration = time_fade_in;

        if hidden {
            // * Taken from OsuModHidden.
            let fade_out_start_time = self.base.start_time - time_preempt + time_fade_in;
            let fade_out_duration = time_preempt * HD_FADE_OUT_DURATION_MULTIPLIER;

            (((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0))
                .min(1.0 - ((time - fade_out_start_time) / fade_out_duration).clamp(0.0, 1.0))
        } else {
            ((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0)
        }
    }
}

impl IDifficultyObject for OsuDifficultyObject<'_> {
    fn idx(&self) -> usize {
        self.idx
    }
}
