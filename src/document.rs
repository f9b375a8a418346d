use indextree::{Arena, NodeId};

use crate::encoding::decode;
use crate::error::Error;
use crate::tokenizer::scan;
use crate::value::{Element, Text, Value, ValueType};

pub(crate) type FragmentArena = Arena<Value>;

/// A node in a fragment document.
/// This is a lightweight value and can be copied.
///
/// A node is only meaningful for the document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An HTML fragment, such as a blog post body, split into text runs and
/// start tags.
///
/// The document is a flat sequence under a single root: text, element,
/// text, element, ..., text. It always starts and ends with a text node,
/// which may be empty. Nodes are never added, removed or reordered after
/// parsing; only text and attribute values change.
///
/// Serializing an unmodified document gives back the input exactly.
///
/// ```rust
/// use blogpatch::FragmentDocument;
///
/// let html = "<p class=intro>Hello <b>world</b><br/></p>";
/// let doc = FragmentDocument::parse(html);
/// assert_eq!(doc.elements().count(), 3);
/// assert_eq!(doc.texts().count(), 4);
/// assert_eq!(doc.to_string(), html);
/// ```
#[derive(Debug, Clone)]
pub struct FragmentDocument {
    pub(crate) arena: FragmentArena,
    pub(crate) root: NodeId,
}

impl FragmentDocument {
    /// Parse a fragment.
    ///
    /// This never fails: text that does not look like a start tag stays
    /// text.
    pub fn parse(input: &str) -> Self {
        let mut arena = FragmentArena::new();
        let root = arena.new_node(Value::Root);
        let mut end = 0;
        let mut count = 0;
        for found in scan(input) {
            let span = found.span();
            let text = arena.new_node(Value::Text(Text::new(input[end..span.start].to_string())));
            root.append(text, &mut arena);
            let element = arena.new_node(Value::Element(Element::new(&found)));
            root.append(element, &mut arena);
            end = span.end;
            count += 1;
        }
        let text = arena.new_node(Value::Text(Text::new(input[end..].to_string())));
        root.append(text, &mut arena);
        log::trace!("parsed fragment of {} bytes with {} start tags", input.len(), count);
        FragmentDocument { arena, root }
    }

    /// Parse a fragment from bytes, detecting its character encoding.
    ///
    /// `hint` is an optional encoding label, for instance from a
    /// `Content-Type` header. Without a declaration or hint, UTF-8 is
    /// assumed.
    ///
    /// ```rust
    /// use blogpatch::FragmentDocument;
    ///
    /// let doc = FragmentDocument::parse_bytes(b"<p>caf\xc3\xa9</p>", None)?;
    /// assert_eq!(doc.to_string(), "<p>caf\u{e9}</p>");
    /// # Ok::<(), blogpatch::Error>(())
    /// ```
    pub fn parse_bytes(data: &[u8], hint: Option<String>) -> Result<Self, Error> {
        let text = decode(data, hint)?;
        Ok(Self::parse(&text))
    }

    /// The fragment root. It holds every other node as a child.
    pub fn root(&self) -> Node {
        Node::new(self.root)
    }

    /// All nodes below the root, in document order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.root.children(&self.arena).map(Node::new)
    }

    /// Element nodes in document order.
    pub fn elements(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes().filter(|node| self.is_element(*node))
    }

    /// Text nodes in document order.
    pub fn texts(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes().filter(|node| self.is_text(*node))
    }

    /// Access to the value for this node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// Mutable access to the value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// Get the [`ValueType`] of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// If this node is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node is an element, return a mutable reference to it.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// If this node is text, return a mutable reference to it.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether any attribute value was changed since parsing.
    ///
    /// Text changes are not tracked.
    pub fn has_modified_attributes(&self) -> bool {
        self.elements()
            .filter_map(|node| self.element(node))
            .any(|element| element.attributes().iter().any(|a| a.is_modified()))
    }
}
