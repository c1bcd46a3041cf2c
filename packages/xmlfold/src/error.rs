//! Error types for xmlfold.
//!
//! Only strict parsing can fail; the default lenient mode recovers from
//! every structural problem it meets.

use thiserror::Error;

/// Result type alias for xmlfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by strict parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A close tag appeared while no element was open.
    #[error("Unexpected closing tag \"{name}\" at offset {offset}: no element is open")]
    UnexpectedClose { name: String, offset: usize },

    /// A close tag did not name the innermost open element.
    #[error("Closing tag \"{found}\" at offset {offset} does not match open element \"{expected}\"")]
    MismatchedClose {
        expected: String,
        found: String,
        offset: usize,
    },

    /// An element was still open at the end of the input.
    #[error("Unclosed element \"{name}\" at end of input")]
    Unclosed { name: String },

    /// The same attribute key appeared twice within one tag.
    #[error("Duplicate attribute \"{key}\" on element \"{element}\"")]
    DuplicateAttribute { element: String, key: String },
}
