use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::Error;

/// Decode a post body, detecting its charset from a BOM, a declaration or
/// the caller's `hint`. Bodies without any charset information are UTF-8.
pub(crate) fn decode(data: &[u8], hint: Option<String>) -> Result<Cow<'_, str>, Error> {
    let mut cursor = std::io::Cursor::new(data);
    // detection reads a fixed-size prefix and fails on shorter bodies
    let charsets = detect(&mut cursor, hint).unwrap_or_default();
    let label = charsets.first().map_or("UTF-8", String::as_str);
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::InvalidArgument(format!("unknown encoding: {}", label)))?;
    let (text, _, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(Error::InvalidArgument(format!(
            "input is not valid {}",
            encoding.name()
        )));
    }
    Ok(text)
}
