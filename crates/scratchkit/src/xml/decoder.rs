//! Recursive-descent XML parser over a byte cursor.

use super::error::XmlError;
use super::types::{XmlDocument, XmlElement, XmlNode};

pub struct XmlDecoder<'a> {
    input: &'a str,
    data: &'a [u8],
    pos: usize,
}

impl<'a> XmlDecoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            data: input.as_bytes(),
            pos: 0,
        }
    }

    /// Parses a whole document: optional prolog items, one root element,
    /// optional trailing comments and processing instructions. Anything
    /// else at the top level is an error.
    pub fn decode_document(&mut self) -> Result<XmlDocument, XmlError> {
        let mut nodes = Vec::new();
        let mut root_seen = false;
        loop {
            self.skip_whitespace();
            if self.eof() {
                break;
            }
            if self.peek() != b'<' {
                return Err(XmlError::TextOutsideRoot(self.pos));
            }
            let node = self.decode_markup()?;
            if matches!(node, XmlNode::Element(_)) {
                if root_seen {
                    return Err(XmlError::MultipleRoots(self.pos));
                }
                root_seen = true;
            }
            nodes.push(node);
        }
        if !root_seen {
            return Err(XmlError::MissingRoot);
        }
        Ok(XmlDocument { nodes })
    }

    /// Parses one markup construct starting at `<`.
    fn decode_markup(&mut self) -> Result<XmlNode, XmlError> {
        if self.starts_with(b"<?") {
            self.pos += 2;
            let body = self.scan_until(b"?>")?;
            return Ok(XmlNode::ProcessingInstruction(body.to_string()));
        }
        if self.starts_with(b"<!--") {
            self.pos += 4;
            let body = self.scan_until(b"-->")?;
            return Ok(XmlNode::Comment(body.to_string()));
        }
        if self.starts_with(b"<![CDATA[") {
            self.pos += 9;
            let body = self.scan_until(b"]]>")?;
            return Ok(XmlNode::CData(body.to_string()));
        }
        if self.starts_with(b"<!") {
            self.pos += 2;
            return self.decode_doctype();
        }
        Ok(XmlNode::Element(self.decode_element()?))
    }

    fn decode_element(&mut self) -> Result<XmlElement, XmlError> {
        self.expect(b'<')?;
        let name = self.decode_name()?;
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek_or_eof()? {
                b'/' => {
                    self.pos += 1;
                    self.expect(b'>')?;
                    return Ok(XmlElement {
                        name,
                        attributes,
                        children: Vec::new(),
                    });
                }
                b'>' => {
                    self.pos += 1;
                    break;
                }
                _ => attributes.push(self.decode_attribute()?),
            }
        }
        let children = self.decode_children(&name)?;
        Ok(XmlElement {
            name,
            attributes,
            children,
        })
    }

    /// Parses child content up to and including the matching closing tag.
    fn decode_children(&mut self, parent: &str) -> Result<Vec<XmlNode>, XmlError> {
        let mut children = Vec::new();
        loop {
            let start = self.pos;
            while !self.eof() && self.peek() != b'<' {
                self.pos += 1;
            }
            if self.pos > start {
                // '<' is ASCII, so both boundaries are char boundaries.
                let text = self.input[start..self.pos].trim();
                if !text.is_empty() {
                    children.push(XmlNode::Text(text.to_string()));
                }
            }
            if self.eof() {
                return Err(XmlError::UnexpectedEof(self.pos));
            }
            if self.starts_with(b"</") {
                let close_pos = self.pos;
                self.pos += 2;
                let name = self.decode_name()?;
                self.skip_whitespace();
                self.expect(b'>')?;
                if name != parent {
                    return Err(XmlError::MismatchedTag {
                        pos: close_pos,
                        expected: parent.to_string(),
                        found: name,
                    });
                }
                return Ok(children);
            }
            children.push(self.decode_markup()?);
        }
    }

    fn decode_attribute(&mut self) -> Result<(String, String), XmlError> {
        let name = self.decode_name()?;
        self.skip_whitespace();
        self.expect(b'=')?;
        self.skip_whitespace();
        let quote = self.peek_or_eof()?;
        if quote != b'"' && quote != b'\'' {
            return Err(XmlError::UnexpectedChar {
                pos: self.pos,
                found: quote as char,
            });
        }
        self.pos += 1;
        let start = self.pos;
        while !self.eof() && self.peek() != quote {
            self.pos += 1;
        }
        if self.eof() {
            return Err(XmlError::UnexpectedEof(self.pos));
        }
        let value = self.input[start..self.pos].to_string();
        self.pos += 1;
        Ok((name, value))
    }

    fn decode_doctype(&mut self) -> Result<XmlNode, XmlError> {
        let start = self.pos;
        let mut depth = 0usize;
        while !self.eof() {
            match self.peek() {
                b'[' => depth += 1,
                b']' => depth = depth.saturating_sub(1),
                b'>' if depth == 0 => {
                    let body = self.input[start..self.pos].to_string();
                    self.pos += 1;
                    return Ok(XmlNode::Doctype(body));
                }
                _ => {}
            }
            self.pos += 1;
        }
        Err(XmlError::UnexpectedEof(self.pos))
    }

    /// Parses an XML name. Multi-byte UTF-8 is accepted wholesale; the
    /// ASCII subset follows the usual NameStartChar/NameChar split.
    fn decode_name(&mut self) -> Result<String, XmlError> {
        let start = self.pos;
        match self.peek_or_eof()? {
            b if b.is_ascii_alphabetic() || b == b'_' || b == b':' || b >= 0x80 => self.pos += 1,
            _ => return Err(XmlError::InvalidName(self.pos)),
        }
        while !self.eof() {
            let b = self.peek();
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b':') || b >= 0x80 {
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    /// Returns the text before the next occurrence of `delim` and advances
    /// past it.
    fn scan_until(&mut self, delim: &[u8]) -> Result<&'a str, XmlError> {
        let start = self.pos;
        while self.pos + delim.len() <= self.data.len() {
            if &self.data[self.pos..self.pos + delim.len()] == delim {
                let body = &self.input[start..self.pos];
                self.pos += delim.len();
                return Ok(body);
            }
            self.pos += 1;
        }
        Err(XmlError::UnexpectedEof(self.data.len()))
    }

    fn skip_whitespace(&mut self) {
        while !self.eof() && self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, b: u8) -> Result<(), XmlError> {
        let found = self.peek_or_eof()?;
        if found != b {
            return Err(XmlError::UnexpectedChar {
                pos: self.pos,
                found: found as char,
            });
        }
        self.pos += 1;
        Ok(())
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.data[self.pos..].starts_with(prefix)
    }

    fn peek(&self) -> u8 {
        self.data[self.pos]
    }

    fn peek_or_eof(&self) -> Result<u8, XmlError> {
        if self.eof() {
            return Err(XmlError::UnexpectedEof(self.pos));
        }
        Ok(self.peek())
    }

    fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<XmlDocument, XmlError> {
        XmlDecoder::new(input).decode_document()
    }

    #[test]
    fn parses_nested_elements_and_attributes() {
        let doc = decode(r#"<a x="1" y='two'><b/>text</a>"#).unwrap();
        assert_eq!(doc.nodes.len(), 1);
        let XmlNode::Element(root) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(root.name, "a");
        assert_eq!(
            root.attributes,
            vec![
                ("x".to_string(), "1".to_string()),
                ("y".to_string(), "two".to_string())
            ]
        );
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[1], XmlNode::Text("text".to_string()));
    }

    #[test]
    fn parses_prolog_and_comments() {
        let doc = decode("<?xml version=\"1.0\"?>\n<!-- note -->\n<root/>").unwrap();
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(
            doc.nodes[0],
            XmlNode::ProcessingInstruction("xml version=\"1.0\"".to_string())
        );
        assert_eq!(doc.nodes[1], XmlNode::Comment(" note ".to_string()));
    }

    #[test]
    fn parses_cdata_and_doctype() {
        let doc = decode("<!DOCTYPE html>\n<r><![CDATA[a < b]]></r>").unwrap();
        assert_eq!(doc.nodes[0], XmlNode::Doctype("DOCTYPE html".to_string()));
        let XmlNode::Element(root) = &doc.nodes[1] else {
            panic!("expected element");
        };
        assert_eq!(root.children[0], XmlNode::CData("a < b".to_string()));
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(matches!(
            decode("<a><b></a></b>"),
            Err(XmlError::MismatchedTag { .. })
        ));
    }

    #[test]
    fn rejects_unclosed_root() {
        assert!(matches!(decode("<a><b/>"), Err(XmlError::UnexpectedEof(_))));
    }

    #[test]
    fn rejects_multiple_roots_and_stray_text() {
        assert!(matches!(decode("<a/><b/>"), Err(XmlError::MultipleRoots(_))));
        assert!(matches!(
            decode("<a/>stray"),
            Err(XmlError::TextOutsideRoot(_))
        ));
    }

    #[test]
    fn entity_references_are_kept_verbatim() {
        let doc = decode("<a>x &amp; y</a>").unwrap();
        let XmlNode::Element(root) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(root.children[0], XmlNode::Text("x &amp; y".to_string()));
    }
}
