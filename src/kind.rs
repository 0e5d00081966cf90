//! Curve identifiers.
//!
//! `CurveKind` names every easing curve the evaluator knows about, plus the
//! three sentinel values the tweening runtime uses to route evaluation
//! elsewhere (unset ease, zero-duration tween, externally supplied function).

use std::fmt;
use std::str::FromStr;

/// Error type for parsing curve names from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty
    Empty,
    /// The input did not name any known curve
    UnknownCurve(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input string is empty"),
            ParseError::UnknownCurve(s) => write!(f, "unknown curve name: '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Identifier of an easing curve.
///
/// The set is closed: every variant maps to exactly one formula in
/// [`crate::curves::formula`]. Three variants are sentinels rather than real
/// curves:
///
/// - [`CurveKind::Unset`] marks an ease that was never assigned and evaluates
///   like [`CurveKind::OutQuad`].
/// - [`CurveKind::ZeroDuration`] is assigned to zero-length tweens and always
///   evaluates to `1.0`.
/// - [`CurveKind::CustomFunction`] routes evaluation to a caller-supplied
///   function.
///
/// # Examples
///
/// ```
/// use easekit::CurveKind;
///
/// let kind: CurveKind = "in_out_quad".parse().unwrap();
/// assert_eq!(kind, CurveKind::InOutQuad);
/// assert_eq!(kind.to_string(), "InOutQuad");
/// assert!(CurveKind::InFlash.is_stepped());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveKind {
    #[default]
    Unset,
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
    /// Stepped back-and-forth oscillation, linear within each step
    Flash,
    /// Stepped oscillation, quadratic ease-in within each step
    InFlash,
    /// Stepped oscillation, quadratic ease-out within each step
    OutFlash,
    /// Stepped oscillation, quadratic ease-in-out within each step
    InOutFlash,
    /// Zero-duration tween; always evaluates to `1.0`
    ZeroDuration,
    /// Evaluated through a caller-supplied function
    CustomFunction,
}

impl CurveKind {
    /// Every curve kind, sentinels included.
    pub const ALL: [CurveKind; 38] = [
        CurveKind::Unset,
        CurveKind::Linear,
        CurveKind::InSine,
        CurveKind::OutSine,
        CurveKind::InOutSine,
        CurveKind::InQuad,
        CurveKind::OutQuad,
        CurveKind::InOutQuad,
        CurveKind::InCubic,
        CurveKind::OutCubic,
        CurveKind::InOutCubic,
        CurveKind::InQuart,
        CurveKind::OutQuart,
        CurveKind::InOutQuart,
        CurveKind::InQuint,
        CurveKind::OutQuint,
        CurveKind::InOutQuint,
        CurveKind::InExpo,
        CurveKind::OutExpo,
        CurveKind::InOutExpo,
        CurveKind::InCirc,
        CurveKind::OutCirc,
        CurveKind::InOutCirc,
        CurveKind::InElastic,
        CurveKind::OutElastic,
        CurveKind::InOutElastic,
        CurveKind::InBack,
        CurveKind::OutBack,
        CurveKind::InOutBack,
        CurveKind::InBounce,
        CurveKind::OutBounce,
        CurveKind::InOutBounce,
        CurveKind::Flash,
        CurveKind::InFlash,
        CurveKind::OutFlash,
        CurveKind::InOutFlash,
        CurveKind::ZeroDuration,
        CurveKind::CustomFunction,
    ];

    /// Returns the stable name of this curve (e.g. `"InOutQuad"`).
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Unset => "Unset",
            CurveKind::Linear => "Linear",
            CurveKind::InSine => "InSine",
            CurveKind::OutSine => "OutSine",
            CurveKind::InOutSine => "InOutSine",
            CurveKind::InQuad => "InQuad",
            CurveKind::OutQuad => "OutQuad",
            CurveKind::InOutQuad => "InOutQuad",
            CurveKind::InCubic => "InCubic",
            CurveKind::OutCubic => "OutCubic",
            CurveKind::InOutCubic => "InOutCubic",
            CurveKind::InQuart => "InQuart",
            CurveKind::OutQuart => "OutQuart",
            CurveKind::InOutQuart => "InOutQuart",
            CurveKind::InQuint => "InQuint",
            CurveKind::OutQuint => "OutQuint",
            CurveKind::InOutQuint => "InOutQuint",
            CurveKind::InExpo => "InExpo",
            CurveKind::OutExpo => "OutExpo",
            CurveKind::InOutExpo => "InOutExpo",
            CurveKind::InCirc => "InCirc",
            CurveKind::OutCirc => "OutCirc",
            CurveKind::InOutCirc => "InOutCirc",
            CurveKind::InElastic => "InElastic",
            CurveKind::OutElastic => "OutElastic",
            CurveKind::InOutElastic => "InOutElastic",
            CurveKind::InBack => "InBack",
            CurveKind::OutBack => "OutBack",
            CurveKind::InOutBack => "InOutBack",
            CurveKind::InBounce => "InBounce",
            CurveKind::OutBounce => "OutBounce",
            CurveKind::InOutBounce => "InOutBounce",
            CurveKind::Flash => "Flash",
            CurveKind::InFlash => "InFlash",
            CurveKind::OutFlash => "OutFlash",
            CurveKind::InOutFlash => "InOutFlash",
            CurveKind::ZeroDuration => "ZeroDuration",
            CurveKind::CustomFunction => "CustomFunction",
        }
    }

    /// Returns true for the stepped (flash) family.
    ///
    /// Authoring tools use this to decide whether to surface the step count
    /// and weighting controls.
    pub fn is_stepped(&self) -> bool {
        matches!(
            self,
            CurveKind::Flash | CurveKind::InFlash | CurveKind::OutFlash | CurveKind::InOutFlash
        )
    }

    /// Returns true for the values that do not name a real formula.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            CurveKind::Unset | CurveKind::ZeroDuration | CurveKind::CustomFunction
        )
    }

    /// Returns true if the curve reads the overshoot/amplitude parameter.
    ///
    /// That is the overshoot for back curves, the amplitude for elastic
    /// curves and the step count for the flash family.
    pub fn uses_amplitude(&self) -> bool {
        matches!(
            self,
            CurveKind::InElastic
                | CurveKind::OutElastic
                | CurveKind::InOutElastic
                | CurveKind::InBack
                | CurveKind::OutBack
                | CurveKind::InOutBack
        ) || self.is_stepped()
    }

    /// Returns true if the curve reads the period parameter.
    pub fn uses_period(&self) -> bool {
        matches!(
            self,
            CurveKind::InElastic | CurveKind::OutElastic | CurveKind::InOutElastic
        ) || self.is_stepped()
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and strips `_`, `-` and spaces so that `"InOutQuad"`,
/// `"in_out_quad"` and `"in-out-quad"` compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for CurveKind {
    type Err = ParseError;

    /// Parses a curve name, ignoring case, underscores and dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let wanted = normalize(trimmed);
        CurveKind::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| ParseError::UnknownCurve(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert_eq!(CurveKind::default(), CurveKind::Unset);
    }

    #[test]
    fn test_all_is_unique() {
        for (i, a) in CurveKind::ALL.iter().enumerate() {
            for b in &CurveKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_stepped_family() {
        let stepped: Vec<_> = CurveKind::ALL.iter().filter(|k| k.is_stepped()).collect();
        assert_eq!(
            stepped,
            vec![
                &CurveKind::Flash,
                &CurveKind::InFlash,
                &CurveKind::OutFlash,
                &CurveKind::InOutFlash
            ]
        );
    }

    #[test]
    fn test_sentinels() {
        let count = CurveKind::ALL.iter().filter(|k| k.is_sentinel()).count();
        assert_eq!(count, 3);
        assert!(!CurveKind::Linear.is_sentinel());

        // Sentinels carry short names, without a suffix
        assert_eq!(CurveKind::Unset.to_string(), "Unset");
        assert_eq!(CurveKind::ZeroDuration.to_string(), "ZeroDuration");
        assert_eq!(CurveKind::CustomFunction.to_string(), "CustomFunction");
    }

    #[test]
    fn test_parameter_usage() {
        assert!(CurveKind::OutBack.uses_amplitude());
        assert!(!CurveKind::OutBack.uses_period());
        assert!(CurveKind::InOutElastic.uses_period());
        assert!(CurveKind::Flash.uses_amplitude());
        assert!(!CurveKind::OutBounce.uses_amplitude());
        assert!(!CurveKind::Linear.uses_period());
    }

    #[test]
    fn test_parse_every_name() {
        for kind in CurveKind::ALL {
            assert_eq!(kind.name().parse::<CurveKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_loose_spelling() {
        assert_eq!("out_bounce".parse::<CurveKind>(), Ok(CurveKind::OutBounce));
        assert_eq!("in-out-elastic".parse::<CurveKind>(), Ok(CurveKind::InOutElastic));
        assert_eq!("  LINEAR ".parse::<CurveKind>(), Ok(CurveKind::Linear));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<CurveKind>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<CurveKind>(), Err(ParseError::Empty));
        assert!(matches!(
            "InOutWobble".parse::<CurveKind>(),
            Err(ParseError::UnknownCurve(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(CurveKind::InOutFlash.to_string(), "InOutFlash");
        assert_eq!(
            ParseError::UnknownCurve("Foo".into()).to_string(),
            "unknown curve name: 'Foo'"
        );
    }
}
