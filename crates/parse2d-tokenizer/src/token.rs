//! The [`Token`] type.

use parse2d_grid::AnyRegion;

/// A region of a diagram paired with the value a tokenizer read from it.
///
/// The value is opaque to the engine. Tokens are only created by a
/// tokenizer's `extract_token` and are never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<V> {
    /// The cells this token covers.
    pub region: AnyRegion,
    /// What the token means.
    pub value: V,
}

impl<V> Token<V> {
    /// Pair a region with a value.
    pub fn new(region: impl Into<AnyRegion>, value: V) -> Self {
        Self {
            region: region.into(),
            value,
        }
    }

    /// Replace the value, keeping the region.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Token<U> {
        Token {
            region: self.region,
            value: f(self.value),
        }
    }
}
