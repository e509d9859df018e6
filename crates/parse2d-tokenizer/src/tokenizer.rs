//! The [`Tokenizer`] trait.

use crate::token::Token;
use parse2d_core::{ExtractError, Index};
use parse2d_grid::Diagram;

/// A strategy for recognising one kind of token in a diagram of `S`
/// symbols, producing `V` values.
///
/// # Contract
///
/// - `starts_on` is a pure, cheap pre-filter. It is necessary but not
///   sufficient: `extract_token` may still fail where it holds.
/// - `extract_token` is only called at cells whose symbol passed
///   `starts_on`. The returned token's region must contain `index`.
/// - Configuration is read-only during extraction (`&self`). Any state a
///   traversal needs is created per call.
/// - Extraction must terminate on every finite diagram.
///
/// # Object safety
///
/// This trait is object-safe; [`tokenize`](crate::tokenize) takes an
/// ordered slice of `&dyn Tokenizer<S, V>`.
///
/// # Examples
///
/// A tokenizer that claims every `#` as a unit token:
///
/// ```
/// use parse2d_core::{ExtractError, Index};
/// use parse2d_grid::{Diagram, TinyRegion};
/// use parse2d_tokenizer::{Token, Tokenizer};
///
/// struct Hash;
///
/// impl Tokenizer<char, ()> for Hash {
///     fn starts_on(&self, symbol: &char) -> bool {
///         *symbol == '#'
///     }
///
///     fn extract_token(&self, _: &Diagram<char>, index: Index) -> Result<Token<()>, ExtractError> {
///         Ok(Token::new(TinyRegion::new(index), ()))
///     }
/// }
///
/// let diagram = Diagram::from_text(" #");
/// assert!(Hash.starts_on(diagram.get(Index::new(1, 0))));
/// ```
pub trait Tokenizer<S, V> {
    /// Human-readable name for logging.
    ///
    /// Default: the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether extraction may begin at a cell holding `symbol`.
    fn starts_on(&self, symbol: &S) -> bool;

    /// Extract the token anchored at `index`.
    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError>;
}

impl<S, V, T: Tokenizer<S, V> + ?Sized> Tokenizer<S, V> for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn starts_on(&self, symbol: &S) -> bool {
        (**self).starts_on(symbol)
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError> {
        (**self).extract_token(diagram, index)
    }
}
