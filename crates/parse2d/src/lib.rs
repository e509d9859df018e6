//! parse2d: a tokenizer engine for two-dimensional text diagrams.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! parse2d sub-crates. For most users, adding `parse2d` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use parse2d::prelude::*;
//!
//! let diagram = Diagram::from_text("a b\nba");
//! let a = TinyTokenizer::new('a', 'A');
//! let b = TinyTokenizer::new('b', 'B');
//! let tokenizers: [&dyn Tokenizer<char, char>; 2] = [&a, &b];
//!
//! let values: String = tokenize(&diagram, &tokenizers)
//!     .map(|token| token.map(|t| t.value))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values, "ABBA");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `parse2d-core` | Indices, translations, directions, extraction errors |
//! | [`grid`] | `parse2d-grid` | The `Diagram` grid and spatial regions |
//! | [`tokenizer`] | `parse2d-tokenizer` | The `Tokenizer` trait and the `tokenize` dispatcher |
//! | [`tokenizers`] | `parse2d-tokenizers` | Tiny, template, box and wire tokenizers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, steps and errors (`parse2d-core`).
///
/// [`types::Index`] addresses a cell, [`types::Translation`] steps between
/// cells, and [`types::Direction`] names the eight neighbours.
pub use parse2d_core as types;

/// Diagrams and regions (`parse2d-grid`).
///
/// [`grid::Diagram`] is the symbol grid every tokenizer reads;
/// [`grid::AnyRegion`] is the set of cells a token covers.
pub use parse2d_grid as grid;

/// The tokenizer capability and dispatcher (`parse2d-tokenizer`).
pub use parse2d_tokenizer as tokenizer;

/// Concrete tokenizers (`parse2d-tokenizers`).
///
/// [`tokenizers::TinyTokenizer`], [`tokenizers::TemplateTokenizer`],
/// [`tokenizers::BoxTokenizer`] and [`tokenizers::WireTokenizer`], plus the
/// wire rule layers.
pub use parse2d_tokenizers as tokenizers;

/// Common imports for typical parse2d usage.
///
/// ```rust
/// use parse2d::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use parse2d_core::{Direction, Index, Translation};

    // Errors
    pub use parse2d_core::ExtractError;
    pub use parse2d_grid::DiagramError;
    pub use parse2d_tokenizers::ConfigError;

    // Grid
    pub use parse2d_grid::{AnyRegion, Diagram, RectRegion, Region, SparseRegion, TinyRegion};

    // Dispatch
    pub use parse2d_tokenizer::{tokenize, Token, Tokenizer};

    // Tokenizers
    pub use parse2d_tokenizers::{
        BoxTokenizer, SegmentTable, TemplateTokenizer, TinyTokenizer, Wire, WireSocket,
        WireTokenizer,
    };
}
