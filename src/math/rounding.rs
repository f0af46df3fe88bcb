//! Clamping and step rounding for money values.
//!
//! Both helpers are total: they never panic and never propagate NaN into a
//! bound check.
//!
//! - `clamp(NaN, lo, hi) = lo`
//! - if `lo > hi` the upper bound wins (`f64::clamp` would panic here)
//! - `round_to_step` rounds ties away from zero, matching `f64::round`

/// Clamp `value` into `[lo, hi]`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return lo.min(hi);
    }
    value.max(lo).min(hi)
}

/// Round `value` to the nearest multiple of `step`.
///
/// A step that is non-finite or `<= 0` leaves `value` unchanged.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        return value;
    }
    (value / step).round() * step
}
