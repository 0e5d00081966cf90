//! The easing formulas and the table that maps each [`CurveKind`] to one.
//!
//! [`formula`] is the only place a kind is tied to its math. Both
//! [`crate::evaluate`] and [`crate::to_function`] go through it, so the two
//! entry points always agree.

pub mod bounce;
pub mod flash;
pub mod standard;

use crate::CurveKind;

/// An easing function: `(time, duration, overshoot_or_amplitude, period) ->
/// progress`.
///
/// Plain function pointers carry no state, so they are `Copy`, `Send` and
/// `Sync` and can be cached and shared freely.
pub type EaseFn = fn(f64, f64, f64, f64) -> f64;

/// Returns the formula for `kind`.
///
/// [`CurveKind::Unset`] and [`CurveKind::CustomFunction`] have no formula of
/// their own and fall back to out-quad. [`CurveKind::ZeroDuration`] always
/// yields `1.0`.
///
/// # Examples
///
/// ```
/// use easekit::{CurveKind, curves};
///
/// let in_quad = curves::formula(CurveKind::InQuad);
/// assert_eq!(in_quad(0.5, 1.0, 0.0, 0.0), 0.25);
/// ```
#[inline]
pub fn formula(kind: CurveKind) -> EaseFn {
    match kind {
        CurveKind::Linear => standard::linear,
        CurveKind::InSine => standard::in_sine,
        CurveKind::OutSine => standard::out_sine,
        CurveKind::InOutSine => standard::in_out_sine,
        CurveKind::InQuad => standard::in_quad,
        CurveKind::OutQuad => standard::out_quad,
        CurveKind::InOutQuad => standard::in_out_quad,
        CurveKind::InCubic => standard::in_cubic,
        CurveKind::OutCubic => standard::out_cubic,
        CurveKind::InOutCubic => standard::in_out_cubic,
        CurveKind::InQuart => standard::in_quart,
        CurveKind::OutQuart => standard::out_quart,
        CurveKind::InOutQuart => standard::in_out_quart,
        CurveKind::InQuint => standard::in_quint,
        CurveKind::OutQuint => standard::out_quint,
        CurveKind::InOutQuint => standard::in_out_quint,
        CurveKind::InExpo => standard::in_expo,
        CurveKind::OutExpo => standard::out_expo,
        CurveKind::InOutExpo => standard::in_out_expo,
        CurveKind::InCirc => standard::in_circ,
        CurveKind::OutCirc => standard::out_circ,
        CurveKind::InOutCirc => standard::in_out_circ,
        CurveKind::InElastic => standard::in_elastic,
        CurveKind::OutElastic => standard::out_elastic,
        CurveKind::InOutElastic => standard::in_out_elastic,
        CurveKind::InBack => standard::in_back,
        CurveKind::OutBack => standard::out_back,
        CurveKind::InOutBack => standard::in_out_back,
        CurveKind::InBounce => bounce::ease_in,
        CurveKind::OutBounce => bounce::ease_out,
        CurveKind::InOutBounce => bounce::ease_in_out,
        CurveKind::Flash => flash::ease,
        CurveKind::InFlash => flash::ease_in,
        CurveKind::OutFlash => flash::ease_out,
        CurveKind::InOutFlash => flash::ease_in_out,
        CurveKind::ZeroDuration => standard::one,
        CurveKind::Unset | CurveKind::CustomFunction => standard::out_quad,
    }
}
