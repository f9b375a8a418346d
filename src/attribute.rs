use std::fmt;

use crate::tokenizer::AttributeMatch;

/// An attribute on a start tag, kept as five spans of source text.
///
/// Only the value can change. Everything around it (the whitespace before
/// the name, the name, the `=` with its quote, the closing quote) is written
/// back exactly as it was found, so patching one attribute never disturbs
/// another.
///
/// ```rust
/// use blogpatch::FragmentDocument;
///
/// let mut doc = FragmentDocument::parse(r#"<img  SRC = 'http://example.com/a.png'  alt=x>"#);
/// let img = doc.elements().next().unwrap();
/// let src = doc.element_mut(img).unwrap().attribute_mut("src").unwrap();
/// assert_eq!(src.name(), "SRC");
/// src.set_value("https://example.com/a.png");
///
/// assert_eq!(doc.to_string(), r#"<img  SRC = 'https://example.com/a.png'  alt=x>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    preamble: String,
    name: String,
    delimiter: String,
    value: Option<String>,
    postamble: String,
    modified: bool,
}

impl Attribute {
    pub(crate) fn new(found: &AttributeMatch) -> Self {
        Attribute {
            preamble: found.preamble().to_string(),
            name: found.name().to_string(),
            delimiter: found.delimiter().to_string(),
            value: found.value().map(|value| value.to_string()),
            postamble: found.postamble().to_string(),
            modified: false,
        }
    }

    /// The attribute name as written in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value, without quotes.
    ///
    /// `None` for a valueless attribute such as `<input disabled>`; an
    /// attribute written as `alt=""` has the empty string as its value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the value.
    ///
    /// The new value is written verbatim between the original quotes; no
    /// escaping is done. A valueless attribute gains `="..."`, using single
    /// quotes if the value contains a double quote.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        let value = value.into();
        if self.value.as_deref() == Some(value.as_str()) {
            return;
        }
        if self.value.is_none() {
            let quote = if value.contains('"') { "'" } else { "\"" };
            self.delimiter = format!("={}", quote);
            self.postamble = quote.to_string();
        }
        self.value = Some(value);
        self.modified = true;
    }

    /// Compare the name to `candidate`, ignoring ASCII case.
    pub fn is_name_equal_to(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
    }

    /// Whether [`Attribute::set_value`] changed the value since parsing.
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preamble)?;
        f.write_str(&self.name)?;
        f.write_str(&self.delimiter)?;
        if let Some(value) = &self.value {
            f.write_str(value)?;
        }
        f.write_str(&self.postamble)
    }
}
