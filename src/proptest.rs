//! Proptest support for blogpatch
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. blogpatch helps you write a proptest by letting you
//! generate arbitrary HTML-ish post bodies: start tags with every quoting
//! style, irregular whitespace, valueless attributes, end tags, stray `<`
//! characters and plain text full of URLs.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blogpatch = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

const ELEMENT_NAMES: &[&str] = &[
    "a", "A", "img", "IMG", "source", "script", "iframe", "link", "form", "object", "p", "br",
];
const ATTRIBUTE_NAMES: &[&str] = &[
    "src", "SRC", "srcset", "href", "rel", "action", "data", "alt", "class",
];
const VALUES: &[&str] = &[
    "",
    "stylesheet",
    "http://example.com/",
    "http://example.com/a.png",
    "http://example.net/x 1x, http://example.com/y 2x",
    "https://example.com/",
    "//example.com/a.js",
    "./rel/path",
    "rel/path",
    "ftps://example.com/",
    "http://example.com",
];
const WHITESPACE_1_3: &str = "[ \t\n\r\u{000C}]{1,3}";
const WHITESPACE_0_2: &str = "[ \t\n\r\u{000C}]{0,2}";
const TEXT: &str = "[a-z <>/=\"'.:]{0,12}";

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(VALUES).prop_map(|v| v.to_string()),
        "[a-z:/. ]{0,10}",
    ]
}

fn arb_attribute() -> impl Strategy<Value = String> {
    (
        WHITESPACE_1_3,
        prop::sample::select(ATTRIBUTE_NAMES),
        WHITESPACE_0_2,
        WHITESPACE_0_2,
        arb_value(),
        0..4usize,
    )
        .prop_map(|(before, name, around, after, value, style)| {
            match style {
                0 => format!("{}{}{}={}\"{}\"", before, name, around, after, value),
                1 => format!("{}{}{}={}'{}'", before, name, around, after, value),
                2 => {
                    // unquoted values can't be empty or contain whitespace
                    let value = value.replace(' ', "");
                    if value.is_empty() {
                        format!("{}{}", before, name)
                    } else {
                        format!("{}{}={}", before, name, value)
                    }
                }
                _ => format!("{}{}", before, name),
            }
        })
}

fn arb_start_tag() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ELEMENT_NAMES),
        prop::collection::vec(arb_attribute(), 0..4),
        WHITESPACE_0_2,
        any::<bool>(),
    )
        .prop_map(|(name, attributes, space, self_closing)| {
            format!(
                "<{}{}{}{}>",
                name,
                attributes.concat(),
                space,
                if self_closing { "/" } else { "" }
            )
        })
}

fn arb_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => arb_start_tag(),
        2 => TEXT,
        1 => prop::sample::select(ELEMENT_NAMES).prop_map(|name| format!("</{}>", name)),
        1 => prop::sample::select(VALUES).prop_map(|v| v.to_string()),
    ]
}

/// Generate an arbitrary post body.
///
/// Example:
///
/// ```notrust
/// use blogpatch::proptest::arb_fragment;
/// use blogpatch::FragmentDocument;
///
/// proptest! {
///   #[test]
///   fn test_roundtrip(body in arb_fragment()) {
///     prop_assert_eq!(FragmentDocument::parse(&body).to_string(), body);
///   }
/// }
/// ```
pub fn arb_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_piece(), 0..16).prop_map(|pieces| pieces.concat())
}
