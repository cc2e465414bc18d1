/// Map a difficulty setting in `[0, 10]` onto a range of values.
///
/// `min` is the value at a setting of `0`, `mid` at `5`, and `max` at `10`.
pub const fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid + (mid - min) * (difficulty - 5.0) / 5.0
    } else {
        mid
    }
}
