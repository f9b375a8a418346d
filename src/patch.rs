use crate::attribute::Attribute;
use crate::document::FragmentDocument;
use crate::rewrite::{fix_mixed_content, migrate_blog_url_to_https};

/// The outcome of patching one post body.
///
/// Callers use [`Patch::is_changed`] to decide whether to publish the post
/// again and whether there is a difference worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    original: String,
    patched: String,
    changed: bool,
}

impl Patch {
    fn new(original: &str, document: &FragmentDocument, changed: bool) -> Self {
        Patch {
            original: original.to_string(),
            patched: document.to_string(),
            changed,
        }
    }

    /// The body as it was before patching.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The body after patching. Equal to the original when nothing changed.
    pub fn patched(&self) -> &str {
        &self.patched
    }

    /// Whether the rewrite changed anything.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Take the patched body.
    pub fn into_patched(self) -> String {
        self.patched
    }
}

/// Run [`fix_mixed_content`] over a post body.
///
/// ```rust
/// use blogpatch::patch_mixed_content;
///
/// let patch = patch_mixed_content(r#"<iframe src="//video.example/1/"></iframe>"#, |_| true);
/// assert!(!patch.is_changed());
///
/// let patch = patch_mixed_content(r#"<iframe src="http://video.example/1/"></iframe>"#, |_| true);
/// assert!(patch.is_changed());
/// assert_eq!(patch.patched(), r#"<iframe src="https://video.example/1/"></iframe>"#);
/// ```
pub fn patch_mixed_content<P>(body: &str, predicate: P) -> Patch
where
    P: Fn(&Attribute) -> bool,
{
    let mut document = FragmentDocument::parse(body);
    let changed = fix_mixed_content(&mut document, predicate);
    Patch::new(body, &document, changed)
}

/// Run [`migrate_blog_url_to_https`] over a post body.
pub fn patch_blog_urls<I, S>(body: &str, hostnames: I) -> Patch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = FragmentDocument::parse(body);
    let changed = migrate_blog_url_to_https(&mut document, hostnames);
    Patch::new(body, &document, changed)
}
