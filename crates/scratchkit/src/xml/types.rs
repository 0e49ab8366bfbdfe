//! XML document tree types.

/// A single node in a parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Character data with surrounding whitespace trimmed. Entity
    /// references are carried verbatim, not expanded.
    Text(String),
    /// Comment body between `<!--` and `-->`.
    Comment(String),
    /// Raw CDATA section body.
    CData(String),
    /// Raw processing-instruction body between `<?` and `?>`, including the
    /// target (`xml version="1.0"` for the declaration).
    ProcessingInstruction(String),
    /// Raw document type declaration body between `<!` and `>`.
    Doctype(String),
}

/// An element with its attributes (in document order) and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

/// A parsed document: prolog items, exactly one root element, and any
/// trailing comments or processing instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub nodes: Vec<XmlNode>,
}
