//! Evaluation entry points.
//!
//! - [`evaluate`] dispatches on a [`CurveKind`] every call.
//! - [`to_function`] resolves a kind once and hands back a plain function
//!   pointer for callers that want to cache the curve.
//! - [`CurveSpec`] folds the kind and an optional custom function into one
//!   tagged value.
//!
//! None of these allocate, lock or log while evaluating, so they are safe to
//! call from any number of threads on a per-frame path.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::curves::{self, EaseFn};
use crate::{CurveKind, EaseParams};

/// A caller-supplied easing function held by a [`CurveSpec`].
pub type CustomEase = Arc<dyn Fn(f64, f64, f64, f64) -> f64 + Send + Sync>;

/// Computes the progress of `kind` at `time`.
///
/// # Arguments
///
/// * `kind` - Curve to evaluate
/// * `custom` - Function used when `kind` is [`CurveKind::CustomFunction`],
///   ignored otherwise
/// * `time` - Elapsed time, in the same unit as `duration`
/// * `duration` - Total duration; only [`CurveKind::ZeroDuration`] tolerates 0
/// * `overshoot_or_amplitude` - Back overshoot, elastic amplitude or flash
///   step count
/// * `period` - Elastic period or flash weighting
///
/// # Returns
///
/// The progress, nominally in [0, 1]. Back and elastic curves overshoot on
/// purpose. Degenerate inputs (such as a zero `duration`) come back as
/// infinity or NaN rather than being rejected.
///
/// # Panics
///
/// Panics if `kind` is [`CurveKind::CustomFunction`] and `custom` is `None`.
///
/// # Examples
///
/// ```
/// use easekit::{CurveKind, evaluate};
///
/// assert_eq!(evaluate(CurveKind::Linear, None, 0.5, 1.0, 0.0, 0.0), 0.5);
/// assert_eq!(evaluate(CurveKind::OutBounce, None, 1.0, 1.0, -1.0, -1.0), 1.0);
///
/// let halfway = |t: f64, d: f64, _: f64, _: f64| (t / d).min(0.5);
/// assert_eq!(evaluate(CurveKind::CustomFunction, Some(&halfway), 0.9, 1.0, 0.0, 0.0), 0.5);
/// ```
#[inline]
pub fn evaluate(
    kind: CurveKind,
    custom: Option<&dyn Fn(f64, f64, f64, f64) -> f64>,
    time: f64,
    duration: f64,
    overshoot_or_amplitude: f64,
    period: f64,
) -> f64 {
    if kind == CurveKind::CustomFunction {
        return match custom {
            Some(f) => f(time, duration, overshoot_or_amplitude, period),
            None => panic!("CurveKind::CustomFunction evaluated without a custom function"),
        };
    }
    curves::formula(kind)(time, duration, overshoot_or_amplitude, period)
}

/// Binds `kind` to a reusable function.
///
/// The returned function computes exactly what [`evaluate`] computes for the
/// same kind. [`CurveKind::Unset`] binds to out-quad and
/// [`CurveKind::ZeroDuration`] to a function that always returns `1.0`.
/// [`CurveKind::CustomFunction`] has nothing to bind to and also falls back
/// to out-quad; wrap the function in a [`CurveSpec::Custom`] instead. That
/// fallback is the only case that logs.
///
/// # Examples
///
/// ```
/// use easekit::{CurveKind, evaluate, to_function};
///
/// let out_back = to_function(CurveKind::OutBack);
/// assert_eq!(
///     out_back(0.9, 1.0, 1.70158, 0.0),
///     evaluate(CurveKind::OutBack, None, 0.9, 1.0, 1.70158, 0.0)
/// );
/// ```
pub fn to_function(kind: CurveKind) -> EaseFn {
    if kind == CurveKind::CustomFunction {
        warn!(curve = %kind, "no function to bind, falling back to OutQuad");
    }
    curves::formula(kind)
}

/// A curve to evaluate: a named formula, a custom function or the
/// zero-duration shortcut.
///
/// This is the tagged form of a kind plus an optional function pointer, so a
/// custom curve can never be missing its function.
///
/// # Examples
///
/// ```
/// use easekit::{CurveKind, CurveSpec, EaseParams};
///
/// let params = EaseParams::default();
///
/// let named = CurveSpec::from(CurveKind::InOutSine);
/// assert!((named.evaluate(0.5, 1.0, &params) - 0.5).abs() < 1e-12);
///
/// let custom = CurveSpec::custom(|t, d, _, _| (t / d).sqrt());
/// assert_eq!(custom.evaluate(0.25, 1.0, &params), 0.5);
///
/// assert_eq!(CurveSpec::ZeroDuration.evaluate(0.0, 0.0, &params), 1.0);
/// ```
#[derive(Clone)]
pub enum CurveSpec {
    /// One of the built-in formulas
    Named(CurveKind),
    /// A caller-supplied function
    Custom(CustomEase),
    /// A zero-duration tween, always complete
    ZeroDuration,
}

impl CurveSpec {
    /// Wraps a custom easing function.
    pub fn custom(f: impl Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        CurveSpec::Custom(Arc::new(f))
    }

    /// Computes the progress at `time`.
    ///
    /// A `Named(CurveKind::CustomFunction)` has no function attached and
    /// evaluates like out-quad.
    #[inline]
    pub fn evaluate(&self, time: f64, duration: f64, params: &EaseParams) -> f64 {
        match self {
            CurveSpec::Named(kind) => curves::formula(*kind)(
                time,
                duration,
                params.overshoot_or_amplitude,
                params.period,
            ),
            CurveSpec::Custom(f) => f(time, duration, params.overshoot_or_amplitude, params.period),
            CurveSpec::ZeroDuration => 1.0,
        }
    }

    /// The kind this spec reports to the tweening runtime.
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveSpec::Named(kind) => *kind,
            CurveSpec::Custom(_) => CurveKind::CustomFunction,
            CurveSpec::ZeroDuration => CurveKind::ZeroDuration,
        }
    }

    /// Returns true for the stepped (flash) family.
    pub fn is_stepped(&self) -> bool {
        self.kind().is_stepped()
    }
}

impl Default for CurveSpec {
    fn default() -> Self {
        CurveSpec::Named(CurveKind::Unset)
    }
}

impl From<CurveKind> for CurveSpec {
    fn from(kind: CurveKind) -> Self {
        match kind {
            CurveKind::ZeroDuration => CurveSpec::ZeroDuration,
            kind => CurveSpec::Named(kind),
        }
    }
}

impl fmt::Debug for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveSpec::Named(kind) => f.debug_tuple("Named").field(kind).finish(),
            CurveSpec::Custom(_) => f.write_str("Custom(..)"),
            CurveSpec::ZeroDuration => f.write_str("ZeroDuration"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_values() {
        assert_eq!(evaluate(CurveKind::Linear, None, 0.5, 1.0, 0.0, 0.0), 0.5);
        assert_eq!(evaluate(CurveKind::OutBounce, None, 1.0, 1.0, -1.0, -1.0), 1.0);
        assert_eq!(evaluate(CurveKind::InElastic, None, 0.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_unset_falls_back_to_out_quad() {
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            assert_eq!(
                evaluate(CurveKind::Unset, None, t, 1.0, 0.0, 0.0),
                evaluate(CurveKind::OutQuad, None, t, 1.0, 0.0, 0.0)
            );
        }
    }

    #[test]
    fn test_zero_duration_always_one() {
        for (t, d) in [(0.0, 0.0), (5.0, 0.0), (0.3, 1.0), (-2.0, 4.0)] {
            assert_eq!(evaluate(CurveKind::ZeroDuration, None, t, d, 0.0, 0.0), 1.0);
        }
    }

    #[test]
    fn test_custom_function_called_with_arguments() {
        let record = |t: f64, d: f64, a: f64, p: f64| t + 10.0 * d + 100.0 * a + 1000.0 * p;
        let v = evaluate(CurveKind::CustomFunction, Some(&record), 1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, 4321.0);
    }

    #[test]
    fn test_custom_output_not_validated() {
        let wild = |_: f64, _: f64, _: f64, _: f64| 42.0;
        assert_eq!(evaluate(CurveKind::CustomFunction, Some(&wild), 0.5, 1.0, 0.0, 0.0), 42.0);
    }

    #[test]
    fn test_custom_ignored_for_named_kinds() {
        let wild = |_: f64, _: f64, _: f64, _: f64| 42.0;
        assert_eq!(evaluate(CurveKind::Linear, Some(&wild), 0.5, 1.0, 0.0, 0.0), 0.5);
    }

    #[test]
    #[should_panic(expected = "without a custom function")]
    fn test_custom_without_function_panics() {
        evaluate(CurveKind::CustomFunction, None, 0.5, 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_to_function_sentinels() {
        assert_eq!(to_function(CurveKind::ZeroDuration)(0.1, 0.0, 0.0, 0.0), 1.0);
        assert_eq!(to_function(CurveKind::Unset)(0.5, 1.0, 0.0, 0.0), 0.75);
        assert_eq!(to_function(CurveKind::CustomFunction)(0.5, 1.0, 0.0, 0.0), 0.75);
    }

    #[test]
    fn test_binding_every_kind_is_quiet_and_consistent() {
        // Binding is called per tween setup, so ordinary kinds must bind
        // repeatedly without side effects and to the same formula
        for kind in CurveKind::ALL {
            if kind == CurveKind::CustomFunction {
                continue;
            }
            let first = to_function(kind);
            let second = to_function(kind);
            for t in [0.0, 0.3, 1.0] {
                let (a, b) = (first(t, 1.0, 1.5, 0.2), second(t, 1.0, 1.5, 0.2));
                assert!(a == b || (a.is_nan() && b.is_nan()), "{}", kind);
            }
        }
    }

    #[test]
    fn test_bound_function_is_shareable() {
        let f = to_function(CurveKind::InOutCubic);
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || f(i as f64 * 0.25, 1.0, 0.0, 0.0)))
            .collect();
        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![0.0, 0.0625, 0.5, 0.9375]);
    }

    #[test]
    fn test_spec_from_kind() {
        assert!(matches!(
            CurveSpec::from(CurveKind::ZeroDuration),
            CurveSpec::ZeroDuration
        ));
        assert!(matches!(
            CurveSpec::from(CurveKind::OutSine),
            CurveSpec::Named(CurveKind::OutSine)
        ));
        assert!(matches!(CurveSpec::default(), CurveSpec::Named(CurveKind::Unset)));
    }

    #[test]
    fn test_spec_kind_and_stepped() {
        assert_eq!(CurveSpec::custom(|_, _, _, _| 0.0).kind(), CurveKind::CustomFunction);
        assert_eq!(CurveSpec::ZeroDuration.kind(), CurveKind::ZeroDuration);
        assert!(CurveSpec::Named(CurveKind::OutFlash).is_stepped());
        assert!(!CurveSpec::custom(|_, _, _, _| 0.0).is_stepped());
    }

    #[test]
    fn test_spec_matches_evaluate() {
        let params = EaseParams::new(2.0, 0.3);
        for kind in CurveKind::ALL {
            if kind == CurveKind::CustomFunction {
                continue;
            }
            let spec = CurveSpec::from(kind);
            for t in [0.0, 0.3, 0.7, 1.0] {
                let a = spec.evaluate(t, 1.0, &params);
                let b = evaluate(kind, None, t, 1.0, 2.0, 0.3);
                assert!(a == b || (a.is_nan() && b.is_nan()), "{}: {} vs {}", kind, a, b);
            }
        }
    }

    #[test]
    fn test_named_custom_function_does_not_panic() {
        let spec = CurveSpec::Named(CurveKind::CustomFunction);
        assert_eq!(spec.evaluate(0.5, 1.0, &EaseParams::default()), 0.75);
    }

    #[test]
    fn test_spec_debug() {
        assert_eq!(format!("{:?}", CurveSpec::Named(CurveKind::Linear)), "Named(Linear)");
        assert_eq!(format!("{:?}", CurveSpec::custom(|_, _, _, _| 0.0)), "Custom(..)");
    }
}
