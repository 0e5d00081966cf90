//! Shape parameters shared by every curve.

/// Conventional overshoot for back curves (about 10% past the target).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// The two auxiliary shape parameters passed to every curve.
///
/// Their meaning depends on the curve:
///
/// | Curve family | `overshoot_or_amplitude` | `period` |
/// |--------------|--------------------------|----------|
/// | Back         | overshoot strength       | unused   |
/// | Elastic      | amplitude (min 1)        | oscillation period, 0 = default |
/// | Flash        | step count               | weighting (sign picks direction) |
/// | Others       | unused                   | unused   |
///
/// The evaluator never fills these in on its own; callers that want the
/// conventional values start from [`EaseParams::default`].
///
/// # Examples
///
/// ```
/// use easekit::EaseParams;
///
/// let params = EaseParams::default().with_period(0.4);
/// assert_eq!(params.overshoot_or_amplitude, 1.70158);
/// assert_eq!(params.period, 0.4);
///
/// // Six flashes, later ones fading toward the end value
/// let flash = EaseParams::steps(6.0, 0.5);
/// assert_eq!(flash.overshoot_or_amplitude, 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseParams {
    pub overshoot_or_amplitude: f64,
    pub period: f64,
}

impl EaseParams {
    /// Creates parameters from explicit values.
    pub fn new(overshoot_or_amplitude: f64, period: f64) -> Self {
        Self {
            overshoot_or_amplitude,
            period,
        }
    }

    /// Parameters for the flash family.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of steps across the duration, may be fractional
    /// * `weighting` - Blend toward the weighted envelope; positive damps
    ///   later steps, negative damps earlier ones, 0 leaves steps untouched
    pub fn steps(count: f64, weighting: f64) -> Self {
        Self::new(count, weighting)
    }

    /// Sets the overshoot (back), amplitude (elastic) or step count (flash).
    pub fn with_overshoot_or_amplitude(mut self, value: f64) -> Self {
        self.overshoot_or_amplitude = value;
        self
    }

    /// Sets the period (elastic) or weighting (flash).
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }
}

impl Default for EaseParams {
    fn default() -> Self {
        Self::new(DEFAULT_OVERSHOOT, 0.0)
    }
}
