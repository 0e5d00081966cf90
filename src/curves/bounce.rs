//! Bounce easing (exponentially decaying parabolic bounces).
//!
//! All three curves are built from [`ease_out`]: the in curve is its time
//! reversal and the in-out curve glues a half-speed in and out together. The
//! overshoot/amplitude and period parameters are accepted so the functions fit
//! the common signature, but are ignored.

/// Parabola curvature shared by every bounce segment.
const CURVATURE: f64 = 7.5625;

/// Normalized time is split into segments of `1 / 2.75`.
const SEGMENT: f64 = 2.75;

/// Bounce ease-out: decelerating into a series of shrinking bounces.
///
/// Normalized time `u = time / duration` is split at `1/2.75`, `2/2.75` and
/// `2.5/2.75`; each piece is a parabola `7.5625 * u'^2 + offset` recentred on
/// the middle of its piece, with offsets 0, 0.75, 0.9375 and 0.984375.
pub fn ease_out(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    if t < 1.0 / SEGMENT {
        return CURVATURE * t * t;
    }
    if t < 2.0 / SEGMENT {
        let t = t - 1.5 / SEGMENT;
        return CURVATURE * t * t + 0.75;
    }
    if t < 2.5 / SEGMENT {
        let t = t - 2.25 / SEGMENT;
        return CURVATURE * t * t + 0.9375;
    }
    let t = t - 2.625 / SEGMENT;
    CURVATURE * t * t + 0.984375
}

/// Bounce ease-in, the time reversal of [`ease_out`].
pub fn ease_in(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    1.0 - ease_out(duration - time, duration, -1.0, -1.0)
}

/// Bounce ease-in-out: accelerating until halfway, then decelerating.
pub fn ease_in_out(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    if time < duration * 0.5 {
        return ease_in(time * 2.0, duration, -1.0, -1.0) * 0.5;
    }
    ease_out(time * 2.0 - duration, duration, -1.0, -1.0) * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints() {
        assert!(approx_eq(ease_out(0.0, 1.0, -1.0, -1.0), 0.0));
        assert!(approx_eq(ease_out(1.0, 1.0, -1.0, -1.0), 1.0));
        assert!(approx_eq(ease_in(0.0, 1.0, -1.0, -1.0), 0.0));
        assert!(approx_eq(ease_in(1.0, 1.0, -1.0, -1.0), 1.0));
        assert!(approx_eq(ease_in_out(0.0, 1.0, -1.0, -1.0), 0.0));
        assert!(approx_eq(ease_in_out(0.5, 1.0, -1.0, -1.0), 0.5));
        assert!(approx_eq(ease_in_out(1.0, 1.0, -1.0, -1.0), 1.0));
    }

    #[test]
    fn test_segment_floors() {
        // Each segment touches its offset at its centre
        assert!(approx_eq(ease_out(1.5 / 2.75, 1.0, 0.0, 0.0), 0.75));
        assert!(approx_eq(ease_out(2.25 / 2.75, 1.0, 0.0, 0.0), 0.9375));
        assert!(approx_eq(ease_out(2.625 / 2.75, 1.0, 0.0, 0.0), 0.984375));
    }

    #[test]
    fn test_segments_are_continuous() {
        for boundary in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let before = ease_out(boundary - 1e-9, 1.0, 0.0, 0.0);
            let after = ease_out(boundary, 1.0, 0.0, 0.0);
            assert!((before - after).abs() < 1e-6);
            assert!(approx_eq(after, 1.0));
        }
    }

    #[test]
    fn test_shape_parameters_ignored() {
        for t in [0.1, 0.3, 0.6, 0.95] {
            assert_eq!(ease_out(t, 1.0, -1.0, -1.0), ease_out(t, 1.0, 5.0, 0.3));
            assert_eq!(ease_in(t, 1.0, -1.0, -1.0), ease_in(t, 1.0, 5.0, 0.3));
            assert_eq!(ease_in_out(t, 1.0, -1.0, -1.0), ease_in_out(t, 1.0, 5.0, 0.3));
        }
    }

    #[test]
    fn test_scales_with_duration() {
        assert!(approx_eq(
            ease_out(0.7, 1.0, 0.0, 0.0),
            ease_out(2.1, 3.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_stays_in_unit_range() {
        for i in 0..=200 {
            let t = i as f64 / 200.0;
            let v = ease_out(t, 1.0, 0.0, 0.0);
            assert!((-EPSILON..=1.0 + EPSILON).contains(&v), "t={} v={}", t, v);
        }
    }
}
