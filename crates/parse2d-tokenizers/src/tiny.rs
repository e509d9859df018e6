//! Single-cell tokens.

use parse2d_core::{ExtractError, Index};
use parse2d_grid::{Diagram, TinyRegion};
use parse2d_tokenizer::{Token, Tokenizer};

/// Claims every occurrence of one exact symbol as a single-cell token.
///
/// # Examples
///
/// ```
/// use parse2d_core::Index;
/// use parse2d_grid::{AnyRegion, Diagram, TinyRegion};
/// use parse2d_tokenizer::Tokenizer;
/// use parse2d_tokenizers::TinyTokenizer;
///
/// let dot = TinyTokenizer::new('.', "dot");
/// let diagram = Diagram::from_text(" .");
/// let token = dot.extract_token(&diagram, Index::new(1, 0)).unwrap();
/// assert_eq!(token.region, AnyRegion::from(TinyRegion::new(Index::new(1, 0))));
/// assert_eq!(token.value, "dot");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TinyTokenizer<S, V> {
    symbol: S,
    value: V,
}

impl<S, V> TinyTokenizer<S, V> {
    /// Tokenize each `symbol` as `value`.
    pub fn new(symbol: S, value: V) -> Self {
        Self { symbol, value }
    }
}

impl<S: PartialEq, V: Clone> Tokenizer<S, V> for TinyTokenizer<S, V> {
    fn starts_on(&self, symbol: &S) -> bool {
        *symbol == self.symbol
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError> {
        if *diagram.get(index) != self.symbol {
            return Err(ExtractError::SymbolMismatch { index });
        }
        Ok(Token::new(TinyRegion::new(index), self.value.clone()))
    }
}
