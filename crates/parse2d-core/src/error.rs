//! Error types shared by every tokenizer.

use crate::index::Index;
use std::error::Error;
use std::fmt;

/// A tokenizer could not extract a token at the given index.
///
/// `starts_on` is only a pre-filter: a tokenizer that claims a symbol may
/// still find that the surrounding cells do not form its shape. These
/// failures are local to one cell; the dispatcher reports them and moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The symbol at `index` is not one the tokenizer starts on.
    SymbolMismatch {
        /// Where extraction was attempted.
        index: Index,
    },
    /// No placement of the template around `index` matches the diagram.
    TemplateNotFound {
        /// Where extraction was attempted.
        index: Index,
    },
    /// No starting edge produced a closed box boundary through `index`.
    BoxNotFound {
        /// Where extraction was attempted.
        index: Index,
    },
    /// The extracted token reaches a cell an earlier token already covers.
    ///
    /// Raised by the dispatcher, not by tokenizers; the token is discarded.
    Overlap {
        /// Where extraction was attempted.
        index: Index,
        /// The first already-covered cell of the rejected token.
        cell: Index,
    },
}

impl ExtractError {
    /// The cell at which extraction failed.
    pub fn index(&self) -> Index {
        match self {
            Self::SymbolMismatch { index }
            | Self::TemplateNotFound { index }
            | Self::BoxNotFound { index }
            | Self::Overlap { index, .. } => *index,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolMismatch { index } => {
                write!(f, "tokenizer does not start on the symbol at {index}")
            }
            Self::TemplateNotFound { index } => {
                write!(f, "template not found around index {index}")
            }
            Self::BoxNotFound { index } => write!(f, "no closed box through index {index}"),
            Self::Overlap { index, cell } => {
                write!(f, "token at {index} overlaps an earlier token at {cell}")
            }
        }
    }
}

impl Error for ExtractError {}
