//! XML parse error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("no markup found")]
    NoMarkup,
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),
    #[error("unexpected character `{found}` at byte {pos}")]
    UnexpectedChar { pos: usize, found: char },
    #[error("invalid name at byte {0}")]
    InvalidName(usize),
    #[error("mismatched closing tag at byte {pos}: expected `{expected}`, found `{found}`")]
    MismatchedTag {
        pos: usize,
        expected: String,
        found: String,
    },
    #[error("multiple root elements at byte {0}")]
    MultipleRoots(usize),
    #[error("text outside the root element at byte {0}")]
    TextOutsideRoot(usize),
    #[error("missing root element")]
    MissingRoot,
}
