//! Core value types for the parse2d diagram tokenizer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid coordinate [`Index`], the [`Translation`] displacement algebra used
//! to step across a grid, the fixed set of eight [`Direction`]s, and the
//! [`ExtractError`] shared by every tokenizer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod index;
pub mod translation;

pub use direction::Direction;
pub use error::ExtractError;
pub use index::Index;
pub use translation::{Translation, Translations};
