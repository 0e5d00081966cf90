use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, parse_macro_input};

/// Every curve name accepted by `ease!`, in declaration order.
const CURVE_NAMES: &[&str] = &[
    "Unset",
    "Linear",
    "InSine",
    "OutSine",
    "InOutSine",
    "InQuad",
    "OutQuad",
    "InOutQuad",
    "InCubic",
    "OutCubic",
    "InOutCubic",
    "InQuart",
    "OutQuart",
    "InOutQuart",
    "InQuint",
    "OutQuint",
    "InOutQuint",
    "InExpo",
    "OutExpo",
    "InOutExpo",
    "InCirc",
    "OutCirc",
    "InOutCirc",
    "InElastic",
    "OutElastic",
    "InOutElastic",
    "InBack",
    "OutBack",
    "InOutBack",
    "InBounce",
    "OutBounce",
    "InOutBounce",
    "Flash",
    "InFlash",
    "OutFlash",
    "InOutFlash",
    "ZeroDuration",
    "CustomFunction",
];

/// Resolves a `CurveKind` at compile time from a string literal.
///
/// Names are matched the same way `CurveKind::from_str` matches them:
/// case-insensitive, ignoring `_`, `-` and spaces. An unknown name is a
/// compile error instead of a runtime `ParseError`.
///
/// # Examples
///
/// ```ignore
/// use easekit::{CurveKind, ease};
///
/// assert_eq!(ease!("OutBack"), CurveKind::OutBack);
/// assert_eq!(ease!("in_out_quad"), CurveKind::InOutQuad);
/// ```
#[proc_macro]
pub fn ease(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match resolve(&name) {
        Ok(variant) => {
            let ident = Ident::new(variant, Span::call_site());
            let expanded = quote! {
                ::easekit::CurveKind::#ident
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid curve name '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn resolve(s: &str) -> Result<&'static str, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty string".to_string());
    }

    let wanted = normalize(trimmed);
    CURVE_NAMES
        .iter()
        .copied()
        .find(|name| normalize(name) == wanted)
        .ok_or_else(|| "no curve with that name".to_string())
}
