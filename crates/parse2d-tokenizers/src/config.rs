//! Tokenizer configuration errors.

use parse2d_core::Direction;
use std::error::Error;
use std::fmt;

/// Errors from validating a tokenizer's configuration at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A template tokenizer was given no stencil cells.
    EmptyTemplate,
    /// A box tokenizer has no legal symbols for one of its 8 positions.
    MissingEdge {
        /// The position left without symbols.
        direction: Direction,
    },
    /// A box tokenizer was built without a contents function.
    MissingContents,
    /// A wire segment table has no segments.
    EmptySegmentTable,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTemplate => write!(f, "template has no cells"),
            Self::MissingEdge { direction } => {
                write!(f, "box edge {direction} has no legal symbols")
            }
            Self::MissingContents => write!(f, "box contents function is required"),
            Self::EmptySegmentTable => write!(f, "segment table has no segments"),
        }
    }
}

impl Error for ConfigError {}
