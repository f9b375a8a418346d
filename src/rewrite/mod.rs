//! Link rewrite policies.
//!
//! Both policies upgrade `http` to `https` in place and report whether they
//! changed anything. They only ever replace the `http` token of a URL, so
//! running them again on their own output changes nothing.
mod blog_url;
mod mixed_content;

use std::ops::Range;

use regex::Regex;

pub use blog_url::migrate_blog_url_to_https;
pub use mixed_content::{fix_mixed_content, fix_mixed_content_all};

/// Finds the `http` token of the next URL to upgrade.
pub(crate) trait Locate {
    /// Byte range of the `http` scheme of the first upgradable URL in
    /// `haystack`, if any.
    fn locate(&self, haystack: &str) -> Option<Range<usize>>;
}

// the pattern must have a `scheme` group covering the literal `http`
impl Locate for Regex {
    fn locate(&self, haystack: &str) -> Option<Range<usize>> {
        self.captures(haystack)
            .and_then(|captures| captures.name("scheme"))
            .map(|m| m.range())
    }
}

/// A literal `http://host/` prefix.
pub(crate) struct HostPrefix {
    needle: String,
}

impl HostPrefix {
    pub(crate) fn new(hostname: &str) -> Self {
        HostPrefix {
            needle: format!("http://{}/", hostname),
        }
    }
}

impl Locate for HostPrefix {
    fn locate(&self, haystack: &str) -> Option<Range<usize>> {
        haystack
            .find(&self.needle)
            .map(|start| start..start + "http".len())
    }
}

/// Replace `http` with `https` until `locator` finds nothing more.
///
/// Returns the upgraded value, or `None` if there was nothing to upgrade.
pub(crate) fn upgrade(locator: &impl Locate, value: &str) -> Option<String> {
    let mut range = locator.locate(value)?;
    let mut upgraded = value.to_string();
    loop {
        upgraded.replace_range(range, "https");
        match locator.locate(&upgraded) {
            Some(next) => range = next,
            None => return Some(upgraded),
        }
    }
}
