//! Easekit - Easing curves for tweening runtimes
//!
//! This library evaluates easing curves: given a curve, an elapsed time, a
//! duration and two shape parameters it returns the interpolation progress
//! used to blend between a start and an end value.
//!
//! Every evaluation is a pure function of its arguments. Nothing allocates,
//! locks or logs on the evaluation path, so curves can be evaluated for
//! thousands of concurrent animations from any thread.
//!
//! # Examples
//!
//! ```
//! use easekit::{CurveKind, CurveSpec, EaseParams, evaluate, to_function};
//!
//! // Dispatch on the kind every call
//! let p = evaluate(CurveKind::OutBack, None, 0.9, 1.0, 1.70158, 0.0);
//! assert!(p > 1.0); // back curves overshoot on purpose
//!
//! // Or resolve it once and keep the function around
//! let in_out_sine = to_function(CurveKind::InOutSine);
//! assert!((in_out_sine(0.5, 1.0, 0.0, 0.0) - 0.5).abs() < 1e-12);
//!
//! // A stepped flash with four steps, later steps fading out
//! let flash = CurveSpec::from(CurveKind::Flash);
//! let params = EaseParams::steps(4.0, 0.5);
//! let _ = flash.evaluate(0.3, 1.0, &params);
//! ```

pub mod curves;
pub mod evaluate;
pub mod kind;
pub mod params;
pub mod preview;

// Re-export commonly used types at the crate root
pub use curves::EaseFn;
pub use evaluate::{CurveSpec, CustomEase, evaluate, to_function};
pub use kind::{CurveKind, ParseError};
pub use params::{DEFAULT_OVERSHOOT, EaseParams};

#[cfg(feature = "macros")]
pub use easekit_macros::ease;
