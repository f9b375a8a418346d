use std::fmt;

use crate::attribute::Attribute;
use crate::tokenizer::TagMatch;

/// The type of a fragment node.
///
/// Access it using [`Value::value_type`] or
/// [`FragmentDocument::value_type`](crate::FragmentDocument::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Fragment root that holds everything.
    Root,
    /// A start tag with its attributes.
    Element,
    /// Literal text between start tags.
    Text,
}

/// A fragment node value.
///
/// Access it using [`FragmentDocument::value`](crate::FragmentDocument::value)
/// or mutably using
/// [`FragmentDocument::value_mut`](crate::FragmentDocument::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Fragment root that holds everything. It is never serialized.
    Root,
    /// A start tag. You can change its attribute values.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
        }
    }
}

/// A start tag.
///
/// Example: `<img src="a.png">` or `<br />`. End tags are never elements;
/// they are part of the surrounding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) local_name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) close: String,
    pub(crate) source: String,
}

impl Element {
    pub(crate) fn new(found: &TagMatch) -> Self {
        Element {
            local_name: found.local_name().to_string(),
            attributes: found.attributes().iter().map(Attribute::new).collect(),
            close: found.close().to_string(),
            source: found.as_str().to_string(),
        }
    }

    /// The element name, case preserved.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Whether the local name is `name`, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.local_name.eq_ignore_ascii_case(name)
    }

    /// The attributes in source order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Mutable access to the attributes.
    ///
    /// Attributes can be changed but not added or removed.
    pub fn attributes_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.attributes.iter_mut()
    }

    /// The first attribute called `name`, ignoring ASCII case.
    ///
    /// ```rust
    /// use blogpatch::FragmentDocument;
    ///
    /// let doc = FragmentDocument::parse(r#"<link REL="Stylesheet" href="a.css">"#);
    /// let link = doc.element(doc.elements().next().unwrap()).unwrap();
    /// assert_eq!(link.attribute("rel").unwrap().value(), Some("Stylesheet"));
    /// assert!(link.attribute("type").is_none());
    /// ```
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is_name_equal_to(name))
    }

    /// Mutable access to the first attribute called `name`, ignoring ASCII
    /// case.
    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.is_name_equal_to(name))
    }

    /// Whether some attribute called `name` has exactly `value`, both
    /// compared ignoring ASCII case.
    pub fn has_attribute_value(&self, name: &str, value: &str) -> bool {
        self.attributes.iter().any(|a| {
            a.is_name_equal_to(name) && a.value().is_some_and(|v| v.eq_ignore_ascii_case(value))
        })
    }

    /// The literal text after the last attribute, such as `>` or ` />`.
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.is_empty() {
            return f.write_str(&self.source);
        }
        write!(f, "<{}", self.local_name)?;
        for attribute in &self.attributes {
            write!(f, "{}", attribute)?;
        }
        f.write_str(&self.close)
    }
}

/// Text between start tags.
///
/// Example: `Hello ` and `world</b>` in `Hello <b>world</b>`. End tags are
/// part of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    ///
    /// ```rust
    /// use blogpatch::FragmentDocument;
    ///
    /// let mut doc = FragmentDocument::parse("<p>Example</p>");
    /// let text_node = doc.texts().nth(1).unwrap();
    /// doc.text_mut(text_node).unwrap().set("New text</p>");
    ///
    /// assert_eq!(doc.to_string(), "<p>New text</p>");
    /// ```
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}
