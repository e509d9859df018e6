//! Concrete tokenizers for parse2d.
//!
//! | Tokenizer | Region | Recognises |
//! |-----------|--------|------------|
//! | [`TinyTokenizer`] | [`TinyRegion`](parse2d_grid::TinyRegion) | one exact symbol |
//! | [`TemplateTokenizer`] | [`SparseRegion`](parse2d_grid::SparseRegion) | a fixed stencil, anchored at any of its cells |
//! | [`BoxTokenizer`] | [`RectRegion`](parse2d_grid::RectRegion) | a closed rectangular outline |
//! | [`WireTokenizer`] | [`SparseRegion`](parse2d_grid::SparseRegion) | a connected path of segments and its open sockets |
//!
//! Every tokenizer is an immutable configuration object built once through
//! a validating constructor and shared by reference across
//! [`tokenize`](parse2d_tokenizer::tokenize) passes. Any state a traversal
//! needs is allocated per `extract_token` call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boxes;
pub mod config;
pub mod template;
pub mod tiny;
pub mod wire;

pub use boxes::{BoxTokenizer, BoxTokenizerBuilder};
pub use config::ConfigError;
pub use template::TemplateTokenizer;
pub use tiny::TinyTokenizer;
pub use wire::{
    CrossoverRules, LabelTrace, LabelledRules, LabelledWire, SegmentTable, Wire, WireRules,
    WireSocket, WireTokenizer,
};
