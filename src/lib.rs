//! Lossless patching of URLs in HTML blog post bodies.
//!
//! A [`FragmentDocument`] splits a post body into text runs and start tags
//! without building a tree. Each attribute keeps the exact text around its
//! value, so changing a value rewrites only the characters of that value and
//! the rest of the body comes back byte for byte: quoting style, spacing,
//! attribute order and case are untouched.
//!
//! On top of that sit two rewrite policies:
//!
//! - [`fix_mixed_content`] upgrades `http://` resources embedded with
//!   `img`, `script`, `iframe`, stylesheet `link` and friends, optionally
//!   limited to some hosts with a [`HostFilter`].
//! - [`migrate_blog_url_to_https`] upgrades links to the blog's own hosts in
//!   text and in `a@href`.
//!
//! ```rust
//! use blogpatch::{fix_mixed_content_all, FragmentDocument};
//!
//! let mut doc = FragmentDocument::parse(
//!     "<p>Look:<img\n  alt='cat'  SRC=http://img.example/cat.png ></p>",
//! );
//! assert!(fix_mixed_content_all(&mut doc));
//! assert_eq!(
//!     doc.to_string(),
//!     "<p>Look:<img\n  alt='cat'  SRC=https://img.example/cat.png ></p>",
//! );
//! // a second run finds nothing left to do
//! assert!(!fix_mixed_content_all(&mut doc));
//! ```
#![forbid(unsafe_code)]

mod attribute;
mod document;
mod encoding;
mod error;
mod hostfilter;
mod patch;
mod rewrite;
mod serialize;
pub mod tokenizer;
mod value;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use attribute::Attribute;
pub use document::{FragmentDocument, Node};
pub use error::Error;
pub use hostfilter::HostFilter;
pub use patch::{patch_blog_urls, patch_mixed_content, Patch};
pub use rewrite::{fix_mixed_content, fix_mixed_content_all, migrate_blog_url_to_https};
pub use value::{Element, Text, Value, ValueType};
