//! Indenting XML serializer.

use super::types::{XmlDocument, XmlElement, XmlNode};

pub struct XmlEncoder {
    indent: usize,
}

impl XmlEncoder {
    /// Creates an encoder writing `indent` spaces per nesting level.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Serializes a document, one top-level node per line, ending with a
    /// newline.
    pub fn encode(&self, document: &XmlDocument) -> String {
        let mut out = String::new();
        for node in &document.nodes {
            self.write_node(&mut out, node, 0);
        }
        out
    }

    fn write_node(&self, out: &mut String, node: &XmlNode, depth: usize) {
        self.write_indent(out, depth);
        match node {
            XmlNode::Element(el) => self.write_element(out, el, depth),
            XmlNode::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            XmlNode::Comment(body) => {
                out.push_str("<!--");
                out.push_str(body);
                out.push_str("-->\n");
            }
            XmlNode::CData(body) => {
                out.push_str("<![CDATA[");
                out.push_str(body);
                out.push_str("]]>\n");
            }
            XmlNode::ProcessingInstruction(body) => {
                out.push_str("<?");
                out.push_str(body);
                out.push_str("?>\n");
            }
            XmlNode::Doctype(body) => {
                out.push_str("<!");
                out.push_str(body);
                out.push_str(">\n");
            }
        }
    }

    fn write_element(&self, out: &mut String, el: &XmlElement, depth: usize) {
        out.push('<');
        out.push_str(&el.name);
        for (name, value) in &el.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_attr_value(out, value);
            out.push('"');
        }

        if el.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        // Text-only content stays on one line, the way document printers
        // usually render leaf elements.
        if el.children.iter().all(|c| matches!(c, XmlNode::Text(_))) {
            out.push('>');
            for child in &el.children {
                if let XmlNode::Text(text) = child {
                    out.push_str(text);
                }
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push_str(">\n");
            return;
        }

        out.push_str(">\n");
        for child in &el.children {
            self.write_node(out, child, depth + 1);
        }
        self.write_indent(out, depth);
        out.push_str("</");
        out.push_str(&el.name);
        out.push_str(">\n");
    }

    fn write_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.indent {
            out.push(' ');
        }
    }
}

/// Double quotes delimit serialized attribute values, so re-quote any that
/// the source carried in single quotes.
fn push_attr_value(out: &mut String, value: &str) {
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("&quot;");
        } else {
            out.push(ch);
        }
    }
}
