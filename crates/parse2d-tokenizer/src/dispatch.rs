//! The single-pass [`tokenize`] dispatcher.
//!
//! The dispatcher scans the diagram's non-whitespace cells once, in
//! row-major order, and offers each uncovered cell to the tokenizer list.
//!
//! # Semantics
//!
//! - The first tokenizer whose `starts_on` accepts the cell's symbol owns
//!   the cell. Later tokenizers are never consulted for it, even if the
//!   owner's extraction fails.
//! - A successful token's whole region is marked covered. Covered cells are
//!   never offered again.
//! - A token whose region reaches a cell that is already covered is
//!   discarded and reported as [`ExtractError::Overlap`], so no two yielded
//!   tokens overlap.
//! - A failed extraction is yielded as `Err` and covers nothing; the scan
//!   continues with the next cell.
//! - Cells that no tokenizer accepts are skipped silently.
//!
//! Resolution is greedy and order-sensitive: ambiguous diagrams resolve by
//! tokenizer list order, not longest match.

use crate::token::Token;
use crate::tokenizer::Tokenizer;
use parse2d_core::{ExtractError, Index};
use parse2d_grid::{Diagram, Items, Region};
use std::collections::HashSet;

/// Tokenize `diagram` with `tokenizers`, in priority order.
///
/// Returns a lazy iterator; nothing is scanned until it is polled. The
/// diagram is borrowed immutably for the whole pass, so any in-place symbol
/// substitution a caller performs between passes must happen after the
/// iterator is dropped.
///
/// Callers that want to stop at the first failure can collect into
/// `Result<Vec<_>, _>`.
///
/// # Examples
///
/// ```
/// use parse2d_core::{ExtractError, Index};
/// use parse2d_grid::{Diagram, TinyRegion};
/// use parse2d_tokenizer::{tokenize, Token, Tokenizer};
///
/// struct Exactly(char);
///
/// impl Tokenizer<char, char> for Exactly {
///     fn starts_on(&self, symbol: &char) -> bool {
///         *symbol == self.0
///     }
///
///     fn extract_token(&self, _: &Diagram<char>, index: Index) -> Result<Token<char>, ExtractError> {
///         Ok(Token::new(TinyRegion::new(index), self.0.to_ascii_uppercase()))
///     }
/// }
///
/// let diagram = Diagram::from_text("a b\nba");
/// let tokenizers: [&dyn Tokenizer<char, char>; 2] = [&Exactly('a'), &Exactly('b')];
/// let values: String = tokenize(&diagram, &tokenizers)
///     .map(|token| token.map(|t| t.value))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(values, "ABBA");
/// ```
pub fn tokenize<'a, S: PartialEq, V>(
    diagram: &'a Diagram<S>,
    tokenizers: &'a [&'a dyn Tokenizer<S, V>],
) -> Tokens<'a, S, V> {
    Tokens {
        diagram,
        tokenizers,
        cells: diagram.items(),
        covered: HashSet::new(),
    }
}

/// Lazy token sequence produced by [`tokenize`].
///
/// Owns the coverage set for one pass; nothing is shared between passes.
pub struct Tokens<'a, S, V> {
    diagram: &'a Diagram<S>,
    tokenizers: &'a [&'a dyn Tokenizer<S, V>],
    cells: Items<'a, S>,
    covered: HashSet<Index>,
}

impl<S, V> Tokens<'_, S, V> {
    /// Number of cells covered by tokens yielded so far.
    pub fn covered_len(&self) -> usize {
        self.covered.len()
    }
}

impl<S: PartialEq, V> Iterator for Tokens<'_, S, V> {
    type Item = Result<Token<V>, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, symbol) in self.cells.by_ref() {
            if self.covered.contains(&index) {
                continue;
            }
            let Some(tokenizer) = self.tokenizers.iter().find(|t| t.starts_on(symbol)) else {
                continue;
            };
            let extracted = tokenizer.extract_token(self.diagram, index).and_then(|token| {
                let overlap = token.region.iter().find(|cell| self.covered.contains(cell));
                match overlap {
                    Some(cell) => Err(ExtractError::Overlap { index, cell }),
                    None => Ok(token),
                }
            });
            return Some(match extracted {
                Ok(token) => {
                    self.covered.extend(token.region.iter());
                    tracing::debug!(
                        tokenizer = tokenizer.name(),
                        %index,
                        cells = token.region.len(),
                        "token emitted",
                    );
                    Ok(token)
                }
                Err(err) => {
                    tracing::debug!(
                        tokenizer = tokenizer.name(),
                        %index,
                        %err,
                        "extraction failed",
                    );
                    Err(err)
                }
            });
        }
        None
    }
}
