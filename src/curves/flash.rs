//! Flash easing: a stepped back-and-forth oscillation.
//!
//! The overshoot/amplitude parameter is the number of steps across the whole
//! duration and the period controls how the steps are weighted:
//!
//! - `period == 0`: every step ramps the full 0..1 range
//! - `period > 0`: later steps are damped toward the final value
//! - `period < 0`: earlier steps are damped instead
//!
//! Odd steps ramp up, even steps ramp back down. Step counts do not have to be
//! whole numbers; the fractional part shifts where the curve settles.
//!
//! The step index is computed directly from the elapsed time, so every call is
//! constant work whatever the step count.

/// Position of `time` within the stepped oscillation.
struct Step {
    /// 1-based index of the current step (0 exactly at `time == 0`)
    ///
    /// Kept as a float so out-of-range times and zero durations stay IEEE
    /// values instead of overflowing an integer.
    index: f64,
    /// Length of one step
    duration: f64,
    /// `1.0` on odd steps, `-1.0` on even ones
    dir: f64,
    /// Time into the current step, already mirrored for even steps so that it
    /// runs from 0 to `duration` in the direction of travel
    local_time: f64,
}

impl Step {
    fn locate(time: f64, duration: f64, steps: f64) -> Self {
        let index = ((time / duration) * steps).ceil();
        let step_duration = duration / steps;
        let mut local_time = time - step_duration * (index - 1.0);
        let dir = if index % 2.0 != 0.0 { 1.0 } else { -1.0 };
        if dir < 0.0 {
            local_time -= step_duration;
        }
        Self {
            index,
            duration: step_duration,
            dir,
            local_time: local_time * dir,
        }
    }

    fn finish(&self, steps: f64, period: f64, res: f64) -> f64 {
        weighted_ease(steps, period, self.index, self.dir, res)
    }
}

/// Flash with a linear ramp inside each step.
pub fn ease(time: f64, duration: f64, steps: f64, period: f64) -> f64 {
    let step = Step::locate(time, duration, steps);
    let res = step.local_time / step.duration;
    step.finish(steps, period, res)
}

/// Flash with a quadratic ease-in inside each step.
pub fn ease_in(time: f64, duration: f64, steps: f64, period: f64) -> f64 {
    let step = Step::locate(time, duration, steps);
    let t = step.local_time / step.duration;
    step.finish(steps, period, t * t)
}

/// Flash with a quadratic ease-out inside each step.
pub fn ease_out(time: f64, duration: f64, steps: f64, period: f64) -> f64 {
    let step = Step::locate(time, duration, steps);
    let t = step.local_time / step.duration;
    step.finish(steps, period, -t * (t - 2.0))
}

/// Flash with a quadratic ease-in-out inside each step, split at the step's
/// midpoint.
pub fn ease_in_out(time: f64, duration: f64, steps: f64, period: f64) -> f64 {
    let step = Step::locate(time, duration, steps);
    let t = step.local_time / (step.duration * 0.5);
    let res = if t < 1.0 {
        0.5 * t * t
    } else {
        let t = t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    };
    step.finish(steps, period, res)
}

/// Blends the per-step progress `res` toward the weighted envelope.
///
/// The result is capped at 1 but has no lower bound.
fn weighted_ease(steps: f64, period: f64, mut step_index: f64, dir: f64, res: f64) -> f64 {
    let whole_steps = steps.trunc();

    // Use the following step on the way back so the return swing is not clamped
    let whole_steps_odd = whole_steps % 2.0 != 0.0;
    if (dir > 0.0 && !whole_steps_odd) || (dir < 0.0 && whole_steps_odd) {
        step_index += 1.0;
    }

    let mut eased_res = 0.0;
    let mut final_decimals = 0.0;
    let mut weight = period;
    if period > 0.0 {
        final_decimals = steps - whole_steps;
        // Mirror the leftover fraction when the count is odd
        if whole_steps % 2.0 > 0.0 {
            final_decimals = 1.0 - final_decimals;
        }
        final_decimals = (final_decimals * step_index) / steps;
        eased_res = (res * (steps - step_index)) / steps;
    } else if period < 0.0 {
        weight = -period;
        eased_res = (res * step_index) / steps;
    }

    let diff = eased_res - res;
    let res = res + diff * weight + final_decimals;
    if res > 1.0 { 1.0 } else { res }
}
