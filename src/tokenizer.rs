//! Start tag scanning.
//!
//! The tokenizer does not build a tree and does not understand HTML beyond
//! start tags: it finds every `<name ...>` or `<name .../>` occurrence in a
//! string and reports the exact text of each attribute, split into spans that
//! can be glued back together without loss. End tags, comments, doctypes and
//! anything that fails to match stay ordinary text.
//!
//! ```rust
//! use blogpatch::tokenizer::scan;
//!
//! let tags = scan(r#"<p>Hi <img src='a.png' alt=x/></p>"#).collect::<Vec<_>>();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[1].local_name(), "img");
//! assert_eq!(tags[1].attributes()[0].value(), Some("a.png"));
//! assert_eq!(tags[1].close(), ">");
//! ```
use std::ops::Range;
use std::sync::LazyLock;

use regex::{CaptureMatches, Captures, Regex};

// whitespace: space, tab, newline, form feed, carriage return
macro_rules! ws {
    () => {
        r"[ \t\n\x0C\r]"
    };
}

macro_rules! attribute_name {
    () => {
        r#"[^ \t\n\x0C\r"'>/=]+"#
    };
}

macro_rules! unquoted_value {
    () => {
        r#"[^ \t\n\x0C\r"'`=<>]+"#
    };
}

static START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "<(?P<name>[A-Za-z]+)",
        "(?P<attributes>(?:",
        ws!(),
        "+",
        attribute_name!(),
        "(?:",
        ws!(),
        "*=",
        ws!(),
        r#"*(?:"[^"]*"|'[^']*'|"#,
        unquoted_value!(),
        "))?)*)",
        "(?P<close>",
        ws!(),
        "*/?>)",
    ))
    .unwrap()
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "(?P<preamble>",
        ws!(),
        "+)(?P<name>",
        attribute_name!(),
        ")(?:(?P<equals>",
        ws!(),
        "*=",
        ws!(),
        r#"*)(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)'|(?P<unquoted>"#,
        unquoted_value!(),
        ")))?",
    ))
    .unwrap()
});

/// One attribute as it was found inside a start tag.
///
/// Concatenating `preamble`, `name`, `delimiter`, the value and `postamble`
/// gives back the exact source text of the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeMatch<'a> {
    preamble: &'a str,
    name: &'a str,
    delimiter: &'a str,
    value: Option<&'a str>,
    postamble: &'a str,
}

impl<'a> AttributeMatch<'a> {
    /// Text before the name, normally whitespace.
    pub fn preamble(&self) -> &'a str {
        self.preamble
    }

    /// The attribute name as written.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The `=`, whitespace around it and the opening quote, if any.
    ///
    /// Empty for a valueless attribute such as `<input disabled>`.
    pub fn delimiter(&self) -> &'a str {
        self.delimiter
    }

    /// The value without its quotes, or `None` for a valueless attribute.
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// The closing quote, if any.
    pub fn postamble(&self) -> &'a str {
        self.postamble
    }

    fn from_captures(text: &'a str, captures: &Captures<'a>, preamble: &'a str) -> Self {
        let name = captures.name("name").map_or("", |m| m.as_str());
        let (quote, value) = if let Some(m) = captures.name("double") {
            ("\"", Some(m.as_str()))
        } else if let Some(m) = captures.name("single") {
            ("'", Some(m.as_str()))
        } else if let Some(m) = captures.name("unquoted") {
            ("", Some(m.as_str()))
        } else {
            ("", None)
        };
        // the opening quote directly follows the `=` and its whitespace
        let delimiter = captures
            .name("equals")
            .map_or("", |m| &text[m.start()..m.end() + quote.len()]);
        AttributeMatch {
            preamble,
            name,
            delimiter,
            value,
            postamble: quote,
        }
    }
}

/// A start tag found by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagMatch<'a> {
    span: Range<usize>,
    source: &'a str,
    local_name: &'a str,
    attributes: Vec<AttributeMatch<'a>>,
    close: &'a str,
}

impl<'a> TagMatch<'a> {
    /// Byte range of the whole tag in the scanned input.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The whole tag text, `<` through `>`.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// The element name, case preserved.
    pub fn local_name(&self) -> &'a str {
        self.local_name
    }

    /// The attributes in source order.
    pub fn attributes(&self) -> &[AttributeMatch<'a>] {
        &self.attributes
    }

    /// Everything after the last attribute: optional whitespace, an optional
    /// `/` and the final `>`.
    pub fn close(&self) -> &'a str {
        self.close
    }

    fn from_captures(captures: Captures<'a>) -> Option<Self> {
        let all = captures.get(0)?;
        let local_name = captures.name("name")?.as_str();
        let close = captures.name("close")?.as_str();
        let attributes = captures
            .name("attributes")
            .map(|m| split_attributes(m.as_str()))
            .unwrap_or_default();
        Some(TagMatch {
            span: all.range(),
            source: all.as_str(),
            local_name,
            attributes,
            close,
        })
    }
}

fn split_attributes(text: &str) -> Vec<AttributeMatch<'_>> {
    let mut attributes = Vec::new();
    let mut end = 0;
    for captures in ATTRIBUTE.captures_iter(text) {
        let Some(all) = captures.get(0) else {
            continue;
        };
        let preamble_end = captures.name("preamble").map_or(all.start(), |m| m.end());
        // any gap since the previous attribute goes into the preamble
        let preamble = &text[end..preamble_end];
        attributes.push(AttributeMatch::from_captures(text, &captures, preamble));
        end = all.end();
    }
    attributes
}

/// Lazy sequence of start tags produced by [`scan`].
#[derive(Debug)]
pub struct Scan<'a> {
    matches: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Scan<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.find_map(TagMatch::from_captures)
    }
}

/// Scan `input` for start tags.
///
/// Matches are leftmost and non-overlapping; scanning resumes right after
/// each tag. Malformed or partial tags are skipped and stay text.
pub fn scan(input: &str) -> Scan<'_> {
    let start_tag: &'static Regex = &START_TAG;
    Scan {
        matches: start_tag.captures_iter(input),
    }
}
