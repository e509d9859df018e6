//! Symbol grids and spatial regions for parse2d.
//!
//! This crate defines [`Diagram`], the mutable two-dimensional symbol grid
//! that every tokenizer reads, and the [`Region`] trait describing the
//! finite point sets that tokens occupy.
//!
//! # Regions
//!
//! - [`TinyRegion`]: a single cell
//! - [`RectRegion`]: a half-open axis-aligned box, computed arithmetically
//! - [`SparseRegion`]: an explicit set of cells
//!
//! [`AnyRegion`] is the closed sum of the three, used wherever a token has
//! to carry "some region".

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diagram;
pub mod error;
pub mod rect;
pub mod region;
pub mod sparse;
pub mod tiny;

#[cfg(test)]
pub(crate) mod compliance;

pub use diagram::{Diagram, Items};
pub use error::DiagramError;
pub use rect::RectRegion;
pub use region::{AnyRegion, Region};
pub use sparse::SparseRegion;
pub use tiny::TinyRegion;
