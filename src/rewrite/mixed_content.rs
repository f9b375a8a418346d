use std::sync::LazyLock;

use regex::Regex;

use crate::attribute::Attribute;
use crate::document::FragmentDocument;
use crate::rewrite::upgrade;
use crate::value::Element;

// an absolute http URL with a host part: `http://host/`
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0C\r]*(?P<scheme>http)://[^/]+/").unwrap());

/// The attributes of `element` that may load an embedded resource.
fn candidate_attributes(element: &Element) -> &'static [&'static str] {
    match element.local_name().to_ascii_lowercase().as_str() {
        "img" | "source" => &["src", "srcset"],
        "script" | "video" | "audio" | "iframe" | "embed" => &["src"],
        "link" if element.has_attribute_value("rel", "stylesheet") => &["href"],
        "form" => &["action"],
        "object" => &["data"],
        _ => &[],
    }
}

/// Upgrade `http://` resources embedded in the fragment to `https://`.
///
/// Only attributes that load a resource into the page are considered:
/// `src` and `srcset` on `img` and `source`; `src` on `script`, `video`,
/// `audio`, `iframe` and `embed`; `href` on a stylesheet `link`; `action` on
/// `form`; `data` on `object`. Links (`a@href`) are left alone.
///
/// An attribute is only touched if `predicate` accepts it; use it to
/// restrict the upgrade to some hosts, for instance with a
/// [`HostFilter`](crate::HostFilter). Every `http://host/` in an accepted
/// value is upgraded, which covers `srcset` lists. Relative,
/// protocol-relative and non-`http` URLs are never changed.
///
/// Returns true if anything changed.
///
/// ```rust
/// use blogpatch::{fix_mixed_content, FragmentDocument};
///
/// let mut doc = FragmentDocument::parse(
///     r#"<img srcset="http://a.example/x 1x, http://b.example/y 2x"><a href="http://a.example/">"#,
/// );
/// assert!(fix_mixed_content(&mut doc, |_| true));
/// assert_eq!(
///     doc.to_string(),
///     r#"<img srcset="https://a.example/x 1x, https://b.example/y 2x"><a href="http://a.example/">"#
/// );
/// ```
pub fn fix_mixed_content<P>(document: &mut FragmentDocument, predicate: P) -> bool
where
    P: Fn(&Attribute) -> bool,
{
    let mut changed = false;
    let nodes = document.elements().collect::<Vec<_>>();
    for node in nodes {
        let Some(element) = document.element_mut(node) else {
            continue;
        };
        let candidates = candidate_attributes(element);
        if candidates.is_empty() {
            continue;
        }
        let local_name = element.local_name().to_string();
        for attribute in element.attributes_mut() {
            if !candidates.iter().any(|name| attribute.is_name_equal_to(name)) {
                continue;
            }
            let Some(value) = attribute.value() else {
                continue;
            };
            if !predicate(&*attribute) {
                continue;
            }
            if let Some(upgraded) = upgrade(&*HTTP_URL, value) {
                log::debug!(
                    "upgraded mixed content in <{}> {}: {}",
                    local_name,
                    attribute.name(),
                    upgraded
                );
                attribute.set_value(upgraded);
                changed = true;
            }
        }
    }
    changed
}

/// Upgrade all embedded `http://` resources, whatever their host.
///
/// Same as [`fix_mixed_content`] with a predicate that accepts everything.
pub fn fix_mixed_content_all(document: &mut FragmentDocument) -> bool {
    fix_mixed_content(document, |_| true)
}
