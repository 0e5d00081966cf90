//! Sampling curves for previews and graphs.
//!
//! Authoring tools draw a curve by sweeping time across a unit duration and
//! plotting the progress. Turning the points into a mesh or widget is up to
//! the tool; this module only produces the points.

use crate::{CurveSpec, EaseParams};

/// Number of points in [`editor_samples`].
pub const EDITOR_SAMPLE_COUNT: usize = 49;

/// Time step between [`editor_samples`] points.
const EDITOR_SAMPLE_STEP: f64 = 0.02;

/// Samples `spec` at `count` evenly spaced times in `[0, 1)`.
///
/// The duration is 1, so each point is `[time, progress]` with
/// `time = i / count`.
///
/// # Examples
///
/// ```
/// use easekit::{CurveKind, CurveSpec, EaseParams, preview};
///
/// let points = preview::sample(&CurveKind::Linear.into(), &EaseParams::default(), 4);
/// assert_eq!(points, vec![[0.0, 0.0], [0.25, 0.25], [0.5, 0.5], [0.75, 0.75]]);
/// ```
pub fn sample(spec: &CurveSpec, params: &EaseParams, count: usize) -> Vec<[f64; 2]> {
    (0..count)
        .map(|i| {
            let time = i as f64 / count as f64;
            [time, spec.evaluate(time, 1.0, params)]
        })
        .collect()
}

/// Samples `spec` the way the ease preview window does: 49 points at
/// `0.02, 0.04, .., 0.98` over a unit duration.
///
/// Both endpoints are left out, which keeps curves with NaN or pinned values
/// at the boundaries from distorting the graph.
pub fn editor_samples(spec: &CurveSpec, params: &EaseParams) -> Vec<[f64; 2]> {
    (1..=EDITOR_SAMPLE_COUNT)
        .map(|i| {
            let time = i as f64 * EDITOR_SAMPLE_STEP;
            [time, spec.evaluate(time, 1.0, params)]
        })
        .collect()
}

/// Replaces NaN coordinates with `fallback` so the points can be drawn.
pub fn sanitize(points: &mut [[f64; 2]], fallback: f64) {
    for coord in points.iter_mut().flatten() {
        if coord.is_nan() {
            *coord = fallback;
        }
    }
}

/// Returns the lowest and highest progress, skipping NaN.
///
/// Useful for fitting back and elastic curves, which leave [0, 1]. Returns
/// `None` when there is nothing to measure.
pub fn bounds(points: &[[f64; 2]]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|p| p[1])
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
