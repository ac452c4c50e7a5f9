//! Evenly spaced sequences

/// Return `num` evenly spaced values starting at `start`
///
/// The step is `(stop - start) / (num - 1)` when `endpoint` is true (the last value is
/// `stop`) and `(stop - start) / num` when it is false (`stop` is excluded).
///
/// # Degenerate parameters
///
/// `num == 1` with `endpoint == true` divides by zero: the step is `±Inf` (or `NaN`
/// when `start == stop`) and the single value is `NaN`. This is propagated, not
/// patched over; callers that can hit it must avoid it. `num == 0` yields an empty
/// vector.
///
/// # Example
///
/// ```
/// use cepstra::math::linspace::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5, true), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 4, false), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace(start: f32, stop: f32, num: usize, endpoint: bool) -> Vec<f32> {
    let divisor = num as f32 - if endpoint { 1.0 } else { 0.0 };
    let step = (stop - start) / divisor;
    (0..num).map(|i| step * i as f32 + start).collect()
}
