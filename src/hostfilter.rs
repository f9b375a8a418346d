use std::sync::LazyLock;

use ahash::{HashSet, HashSetExt};
use regex::Regex;

use crate::attribute::Attribute;
use crate::error::Error;

// `scheme://host` or protocol-relative `//host`
static URL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//(?P<host>[^/\s:?#"']+)"#).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Allow,
    Deny,
}

/// Restricts [`fix_mixed_content`](crate::fix_mixed_content) to some hosts.
///
/// An allow filter accepts an attribute when one of the URLs in its value
/// points to a listed host. A deny filter accepts it when none does. Hosts
/// compare ignoring ASCII case.
///
/// ```rust
/// use blogpatch::{fix_mixed_content, FragmentDocument, HostFilter};
///
/// let filter = HostFilter::allow(["example.com"])?;
/// let mut doc = FragmentDocument::parse(
///     r#"<script src="http://example.com/a.js"></script><script src="http://example.net/b.js"></script>"#,
/// );
/// assert!(fix_mixed_content(&mut doc, filter.predicate()));
/// assert_eq!(
///     doc.to_string(),
///     r#"<script src="https://example.com/a.js"></script><script src="http://example.net/b.js"></script>"#
/// );
/// # Ok::<(), blogpatch::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HostFilter {
    mode: Mode,
    hosts: HashSet<String>,
}

impl HostFilter {
    /// Accept only attributes that refer to one of `hosts`.
    pub fn allow<I, S>(hosts: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Mode::Allow, hosts)
    }

    /// Accept only attributes that refer to none of `hosts`.
    pub fn deny<I, S>(hosts: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Mode::Deny, hosts)
    }

    fn new<I, S>(mode: Mode, hosts: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for host in hosts {
            let host = host.as_ref().trim();
            if host.is_empty() {
                return Err(Error::InvalidArgument("empty host name".to_string()));
            }
            set.insert(host.to_ascii_lowercase());
        }
        Ok(HostFilter { mode, hosts: set })
    }

    /// Whether the filter accepts this attribute.
    pub fn matches(&self, attribute: &Attribute) -> bool {
        let listed = attribute.value().is_some_and(|value| {
            URL_HOST
                .captures_iter(value)
                .filter_map(|captures| captures.name("host"))
                .any(|host| self.hosts.contains(&host.as_str().to_ascii_lowercase()))
        });
        match self.mode {
            Mode::Allow => listed,
            Mode::Deny => !listed,
        }
    }

    /// The filter as a closure, to pass to
    /// [`fix_mixed_content`](crate::fix_mixed_content).
    pub fn predicate(&self) -> impl Fn(&Attribute) -> bool + '_ {
        move |attribute| self.matches(attribute)
    }
}
