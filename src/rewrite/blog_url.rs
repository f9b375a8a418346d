use crate::document::FragmentDocument;
use crate::rewrite::{upgrade, HostPrefix};

/// Move links to the blog's own hosts from `http://` to `https://`.
///
/// For each hostname, every `http://<hostname>/` in the text of the
/// fragment and in the `href` of `a` elements becomes
/// `https://<hostname>/`. Hostnames are matched literally. Other elements
/// are left alone, even if they point to the same host; use
/// [`fix_mixed_content`](crate::fix_mixed_content) for embedded resources.
///
/// Returns true if anything changed for any hostname.
///
/// ```rust
/// use blogpatch::{migrate_blog_url_to_https, FragmentDocument};
///
/// let mut doc = FragmentDocument::parse(
///     r#"See http://blog.example/post <a href='http://blog.example/'>home</a>"#,
/// );
/// assert!(migrate_blog_url_to_https(&mut doc, ["blog.example"]));
/// assert_eq!(
///     doc.to_string(),
///     r#"See https://blog.example/post <a href='https://blog.example/'>home</a>"#
/// );
/// ```
pub fn migrate_blog_url_to_https<I, S>(document: &mut FragmentDocument, hostnames: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let texts = document.texts().collect::<Vec<_>>();
    let anchors = document
        .elements()
        .filter(|node| document.element(*node).is_some_and(|e| e.is_named("a")))
        .collect::<Vec<_>>();

    let mut changed = false;
    for hostname in hostnames {
        let hostname = hostname.as_ref();
        let prefix = HostPrefix::new(hostname);

        for node in &texts {
            let Some(text) = document.text_mut(*node) else {
                continue;
            };
            if let Some(upgraded) = upgrade(&prefix, text.get()) {
                log::debug!("upgraded text links to {}", hostname);
                text.set(upgraded);
                changed = true;
            }
        }

        for node in &anchors {
            let Some(element) = document.element_mut(*node) else {
                continue;
            };
            for href in element
                .attributes_mut()
                .filter(|attribute| attribute.is_name_equal_to("href"))
            {
                let Some(upgraded) = href.value().and_then(|value| upgrade(&prefix, value))
                else {
                    continue;
                };
                log::debug!("upgraded <a> href: {}", upgraded);
                href.set_value(upgraded);
                changed = true;
            }
        }
    }
    changed
}
