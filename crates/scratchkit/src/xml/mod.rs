//! XML parsing and pretty-printing.
//!
//! A small recursive-descent parser over a transient node tree, plus an
//! indenting serializer. Entity references are carried through verbatim and
//! character data keeps its text with surrounding whitespace trimmed, so
//! pretty-printing is a fixed point.

mod decoder;
mod encoder;
mod error;
mod types;

pub use decoder::XmlDecoder;
pub use encoder::XmlEncoder;
pub use error::XmlError;
pub use types::{XmlDocument, XmlElement, XmlNode};

/// Indent width used by [`format_xml_pretty`].
pub const DEFAULT_INDENT: usize = 2;

/// Pretty-prints the first XML document found in `text`.
///
/// Parsing starts at the first `<`; anything before it is ignored. The
/// output uses a 2-space indent with text-only elements rendered inline.
///
/// # Example
///
/// ```
/// use scratchkit::format_xml_pretty;
///
/// let pretty = format_xml_pretty("log: <a><b>1</b></a>").unwrap();
/// assert_eq!(pretty, "<a>\n  <b>1</b>\n</a>\n");
/// ```
pub fn format_xml_pretty(text: &str) -> Result<String, XmlError> {
    let start = text.find('<').ok_or(XmlError::NoMarkup)?;
    let mut decoder = XmlDecoder::new(&text[start..]);
    let document = decoder.decode_document()?;
    Ok(XmlEncoder::new(DEFAULT_INDENT).encode(&document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reformats_a_document() {
        let input = r#"<?xml version="1.0"?><library><book id="1"><title>Dune</title></book><book id="2"/></library>"#;
        let pretty = format_xml_pretty(input).unwrap();
        assert_eq!(
            pretty,
            "<?xml version=\"1.0\"?>\n\
             <library>\n\
             \x20 <book id=\"1\">\n\
             \x20   <title>Dune</title>\n\
             \x20 </book>\n\
             \x20 <book id=\"2\"/>\n\
             </library>\n"
        );
    }

    #[test]
    fn skips_leading_garbage() {
        let pretty = format_xml_pretty("2024-01-01 INFO <r><v>1</v></r>").unwrap();
        assert_eq!(pretty, "<r>\n  <v>1</v>\n</r>\n");
    }

    #[test]
    fn malformed_input_fails() {
        assert!(format_xml_pretty("no markup here").is_err());
        assert!(format_xml_pretty("<a><b></a>").is_err());
        assert!(format_xml_pretty("<a attr></a>").is_err());
    }

    #[test]
    fn pretty_printing_is_idempotent() {
        let input = "<a x=\"1\">  <b>t</b> tail <!-- c --> </a>";
        let once = format_xml_pretty(input).unwrap();
        let twice = format_xml_pretty(&once).unwrap();
        assert_eq!(once, twice);
    }
}
