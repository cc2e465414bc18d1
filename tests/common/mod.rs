#![allow(unused)]

use rosu_flashlight::{OsuDifficultyObject, OsuObject, OsuObjectKind, OsuSlider, Pos, Spinner};

pub fn circle(x: f32, y: f32, start_time: f64, radius: f64) -> OsuObject {
    OsuObject::new(Pos::new(x, y), start_time, radius, OsuObjectKind::Circle)
}

pub fn slider(
    x: f32,
    y: f32,
    start_time: f64,
    radius: f64,
    end_pos: Pos,
    repeats: usize,
) -> OsuObject {
    let slider = OsuSlider {
        end_time: start_time + 200.0,
        repeats,
        end_pos,
    };

    OsuObject::new(
        Pos::new(x, y),
        start_time,
        radius,
        OsuObjectKind::Slider(slider),
    )
}

pub fn spinner(start_time: f64, radius: f64) -> OsuObject {
    OsuObject::new(
        Pos::new(256.0, 192.0),
        start_time,
        radius,
        OsuObjectKind::Spinner(Spinner { duration: 300.0 }),
    )
}

/// Creates difficulty objects with lazy jump distances based on the plain
/// distance between consecutive objects.
pub fn diff_objects(objects: &[OsuObject]) -> Vec<OsuDifficultyObject<'_>> {
    objects
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let (last, curr) = (&pair[0], &pair[1]);
            let scaling_factor = 52.0 / curr.radius;

            let mut diff_obj = OsuDifficultyObject::new(curr, last, 1.0, idx);

            if !curr.is_spinner() && !last.is_spinner() {
                diff_obj.lazy_jump_dist =
                    f64::from((curr.stacked_pos() - last.stacked_end_pos()).length())
                        * scaling_factor;
            }

            diff_obj
        })
        .collect()
}

/// Zig-zag pattern of circles with varying spacing.
pub fn zigzag(len: usize, radius: f64) -> Vec<OsuObject> {
    (0..len)
        .map(|i| {
            let x = if i % 2 == 0 { 100.0 } else { 400.0 };
            let y = 50.0 + (i % 5) as f32 * 60.0;

            circle(x, y, i as f64 * 300.0, radius)
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual} (epsilon={epsilon})"
    );
}
