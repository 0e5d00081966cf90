#![cfg(feature = "macros")]

use easekit::{CurveKind, ease, evaluate};

#[test]
fn test_ease_macro_exact_name() {
    assert_eq!(ease!("OutBack"), CurveKind::OutBack);
}

#[test]
fn test_ease_macro_snake_case() {
    assert_eq!(ease!("in_out_quad"), CurveKind::InOutQuad);
}

#[test]
fn test_ease_macro_dashes_and_case() {
    assert_eq!(ease!("OUT-BOUNCE"), CurveKind::OutBounce);
}

#[test]
fn test_ease_macro_sentinels() {
    assert_eq!(ease!("ZeroDuration"), CurveKind::ZeroDuration);
    assert_eq!(ease!("unset"), CurveKind::Unset);
}

#[test]
fn test_ease_macro_in_const() {
    const FLASH: CurveKind = ease!("in_flash");
    assert!(FLASH.is_stepped());
}

#[test]
fn test_ease_macro_evaluates() {
    let kind = ease!("Linear");
    assert_eq!(evaluate(kind, None, 0.25, 1.0, 0.0, 0.0), 0.25);
}
