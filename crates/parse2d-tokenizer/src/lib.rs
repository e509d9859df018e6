//! Tokenizer trait and tokenize dispatcher for parse2d.
//!
//! The [`Tokenizer`] trait is the capability every token shape implements:
//! a cheap `starts_on` pre-filter and a fallible `extract_token`.
//! [`tokenize`] drives an ordered list of tokenizers over a diagram in a
//! single row-major pass, yielding tokens whose regions never overlap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod token;
pub mod tokenizer;

pub use dispatch::{tokenize, Tokens};
pub use token::Token;
pub use tokenizer::Tokenizer;
