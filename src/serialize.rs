use std::fmt;
use std::io::Write;

use crate::document::FragmentDocument;
use crate::error::Error;
use crate::value::Value;

impl FragmentDocument {
    /// Write the fragment to `w`.
    ///
    /// Text nodes are written as they are. An element without attributes
    /// is written as its original tag text; otherwise it is rebuilt from its
    /// name, the spans of each attribute and its closing text. Serializing
    /// does not change the document, so it can be repeated.
    pub fn serialize(&self, w: &mut impl Write) -> Result<(), Error> {
        write!(w, "{}", self)?;
        Ok(())
    }

    /// Serialize the fragment into bytes.
    pub fn serialize_to_vec(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for FragmentDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            match self.value(node) {
                Value::Root => {}
                Value::Element(element) => write!(f, "{}", element)?,
                Value::Text(text) => f.write_str(text.get())?,
            }
        }
        Ok(())
    }
}
