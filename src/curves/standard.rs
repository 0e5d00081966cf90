//! Closed-form easing equations (Robert Penner's set).
//!
//! Every function has the same shape, `(time, duration, overshoot_or_amplitude,
//! period) -> progress`, so that they can all live behind one function pointer
//! type. Curves that do not use the two shape parameters simply ignore them.
//!
//! Progress is nominally in [0, 1] for `time` in [0, `duration`], but the
//! elastic and back families deliberately overshoot. Nothing here guards
//! against a zero `duration`; the IEEE result (infinity or NaN) is returned.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Overshoot multiplier applied by [`in_out_back`] before use.
const IN_OUT_BACK_SCALE: f64 = 1.525;

/// Default elastic period as a fraction of the duration.
const ELASTIC_PERIOD: f64 = 0.3;

/// Default in-out elastic period as a fraction of the duration.
const IN_OUT_ELASTIC_PERIOD: f64 = ELASTIC_PERIOD * 1.5;

/// Zero-duration tweens are complete as soon as they start.
pub fn one(_time: f64, _duration: f64, _amplitude: f64, _period: f64) -> f64 {
    1.0
}

pub fn linear(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    time / duration
}

pub fn in_sine(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    1.0 - (time / duration * FRAC_PI_2).cos()
}

pub fn out_sine(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    (time / duration * FRAC_PI_2).sin()
}

pub fn in_out_sine(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    -0.5 * ((PI * time / duration).cos() - 1.0)
}

pub fn in_quad(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    t * t
}

/// Also the fallback for kinds that have no formula of their own.
pub fn out_quad(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    -t * (t - 2.0)
}

pub fn in_out_quad(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * t * t;
    }
    let t = t - 1.0;
    -0.5 * (t * (t - 2.0) - 1.0)
}

pub fn in_cubic(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    t * t * t
}

pub fn out_cubic(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration - 1.0;
    t * t * t + 1.0
}

pub fn in_out_cubic(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t + 2.0)
}

pub fn in_quart(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    t * t * t * t
}

pub fn out_quart(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration - 1.0;
    -(t * t * t * t - 1.0)
}

pub fn in_out_quart(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * t * t * t * t;
    }
    let t = t - 2.0;
    -0.5 * (t * t * t * t - 2.0)
}

pub fn in_quint(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    t * t * t * t * t
}

pub fn out_quint(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration - 1.0;
    t * t * t * t * t + 1.0
}

pub fn in_out_quint(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * t * t * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t * t * t + 2.0)
}

/// Exponential ease-in. Pinned to exactly 0 at `time == 0`, where the
/// formula alone would give `2^-10`.
pub fn in_expo(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    if time == 0.0 {
        return 0.0;
    }
    2f64.powf(10.0 * (time / duration - 1.0))
}

/// Exponential ease-out. Pinned to exactly 1 at `time == duration`.
pub fn out_expo(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    if time == duration {
        return 1.0;
    }
    1.0 - 2f64.powf(-10.0 * time / duration)
}

pub fn in_out_expo(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    if time == 0.0 {
        return 0.0;
    }
    if time == duration {
        return 1.0;
    }
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * 2f64.powf(10.0 * (t - 1.0));
    }
    0.5 * (2.0 - 2f64.powf(-10.0 * (t - 1.0)))
}

pub fn in_circ(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration;
    -((1.0 - t * t).sqrt() - 1.0)
}

pub fn out_circ(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / duration - 1.0;
    (1.0 - t * t).sqrt()
}

pub fn in_out_circ(time: f64, duration: f64, _amplitude: f64, _period: f64) -> f64 {
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return -0.5 * ((1.0 - t * t).sqrt() - 1.0);
    }
    let t = t - 2.0;
    0.5 * ((1.0 - t * t).sqrt() + 1.0)
}

/// Resolves the elastic amplitude and phase shift.
///
/// Amplitudes below 1 are raised to 1 with a quarter-period shift; otherwise
/// the shift is chosen so the oscillation starts at zero.
fn elastic_shape(amplitude: f64, period: f64) -> (f64, f64) {
    if amplitude < 1.0 {
        (1.0, period / 4.0)
    } else {
        (amplitude, period / TAU * (1.0 / amplitude).asin())
    }
}

pub fn in_elastic(time: f64, duration: f64, amplitude: f64, period: f64) -> f64 {
    if time == 0.0 {
        return 0.0;
    }
    let t = time / duration;
    if t == 1.0 {
        return 1.0;
    }
    let period = if period == 0.0 {
        duration * ELASTIC_PERIOD
    } else {
        period
    };
    let (amplitude, s) = elastic_shape(amplitude, period);
    let t = t - 1.0;
    -(amplitude * 2f64.powf(10.0 * t) * ((t * duration - s) * TAU / period).sin())
}

pub fn out_elastic(time: f64, duration: f64, amplitude: f64, period: f64) -> f64 {
    if time == 0.0 {
        return 0.0;
    }
    let t = time / duration;
    if t == 1.0 {
        return 1.0;
    }
    let period = if period == 0.0 {
        duration * ELASTIC_PERIOD
    } else {
        period
    };
    let (amplitude, s) = elastic_shape(amplitude, period);
    amplitude * 2f64.powf(-10.0 * t) * ((t * duration - s) * TAU / period).sin() + 1.0
}

/// In-out elastic. Works on a doubled time scale, so completion is detected
/// at `t == 2` rather than `t == 1`.
pub fn in_out_elastic(time: f64, duration: f64, amplitude: f64, period: f64) -> f64 {
    if time == 0.0 {
        return 0.0;
    }
    let t = time / (duration * 0.5);
    if t == 2.0 {
        return 1.0;
    }
    let period = if period == 0.0 {
        duration * IN_OUT_ELASTIC_PERIOD
    } else {
        period
    };
    let (amplitude, s) = elastic_shape(amplitude, period);
    if t < 1.0 {
        let t = t - 1.0;
        return -0.5 * (amplitude * 2f64.powf(10.0 * t) * ((t * duration - s) * TAU / period).sin());
    }
    let t = t - 1.0;
    amplitude * 2f64.powf(-10.0 * t) * ((t * duration - s) * TAU / period).sin() * 0.5 + 1.0
}

pub fn in_back(time: f64, duration: f64, overshoot: f64, _period: f64) -> f64 {
    let t = time / duration;
    t * t * ((overshoot + 1.0) * t - overshoot)
}

pub fn out_back(time: f64, duration: f64, overshoot: f64, _period: f64) -> f64 {
    let t = time / duration - 1.0;
    t * t * ((overshoot + 1.0) * t + overshoot) + 1.0
}

pub fn in_out_back(time: f64, duration: f64, overshoot: f64, _period: f64) -> f64 {
    let overshoot = overshoot * IN_OUT_BACK_SCALE;
    let t = time / (duration * 0.5);
    if t < 1.0 {
        return 0.5 * (t * t * ((overshoot + 1.0) * t - overshoot));
    }
    let t = t - 2.0;
    0.5 * (t * t * ((overshoot + 1.0) * t + overshoot) + 2.0)
}
