//! Connected-path tokens.
//!
//! A wire is a set of segment cells connected through reciprocal
//! connections: a step from one cell to its neighbour only counts if the
//! neighbour's own connection set includes the step back. The trace is a
//! worklist search over (cell, incoming direction) pairs, each recorded
//! once, so it terminates on any finite diagram, loops included.
//!
//! Tracing behaviour is supplied by a [`WireRules`] implementation. The
//! plain [`SegmentTable`] connects every incoming direction to every
//! configured outgoing one; [`CrossoverRules`] and [`LabelledRules`] layer
//! pass-through crossings and inline labels on top of another rule set.

mod crossover;
mod labels;
mod rules;

pub use crossover::CrossoverRules;
pub use labels::{LabelTrace, LabelledRules, LabelledWire};
pub use rules::{SegmentTable, WireRules};

use indexmap::IndexSet;
use parse2d_core::{ExtractError, Index, Translation};
use parse2d_grid::{Diagram, Region, SparseRegion};
use parse2d_tokenizer::{Token, Tokenizer};
use std::hash::Hash;

/// An open connection point on a wire's boundary.
///
/// A connection is available from `location`, going in `direction`, to
/// whatever lies outside the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireSocket {
    /// The non-segment cell the wire connects to.
    pub location: Index,
    /// The direction from `location` towards the wire.
    pub direction: Translation,
}

impl WireSocket {
    /// Create a socket.
    pub const fn new(location: Index, direction: Translation) -> Self {
        Self {
            location,
            direction,
        }
    }
}

/// The value of a traced wire: its open sockets.
///
/// Equality ignores socket order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wire {
    sockets: IndexSet<WireSocket>,
}

impl Wire {
    /// Create a wire from its sockets.
    pub fn new(sockets: IndexSet<WireSocket>) -> Self {
        Self { sockets }
    }

    /// The sockets, in discovery order.
    pub fn sockets(&self) -> &IndexSet<WireSocket> {
        &self.sockets
    }

    /// Number of sockets.
    pub fn len(&self) -> usize {
        self.sockets.len()
    }

    /// Whether the wire is closed (has no sockets).
    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty()
    }

    /// Whether `socket` is one of this wire's sockets.
    pub fn contains(&self, socket: &WireSocket) -> bool {
        self.sockets.contains(socket)
    }
}

impl FromIterator<WireSocket> for Wire {
    fn from_iter<I: IntoIterator<Item = WireSocket>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Traces wires under a [`WireRules`] rule set.
///
/// # Examples
///
/// ```
/// use parse2d_core::{Index, Translation};
/// use parse2d_grid::{Diagram, Region};
/// use parse2d_tokenizer::Tokenizer;
/// use parse2d_tokenizers::{SegmentTable, WireSocket, WireTokenizer};
///
/// let wires = WireTokenizer::new(
///     SegmentTable::new([
///         ('─', Translation::HORIZONTAL.to_vec()),
///         ('┐', vec![Translation::LEFT, Translation::DOWN]),
///         ('└', vec![Translation::UP, Translation::RIGHT]),
///     ])
///     .unwrap(),
/// );
///
/// let diagram = Diagram::from_text("a─┐\n  └──b");
/// let token = wires.extract_token(&diagram, Index::new(1, 0)).unwrap();
/// assert_eq!(token.region.len(), 5);
/// assert!(token.value.contains(&WireSocket::new(Index::new(0, 0), Translation::RIGHT)));
/// assert!(token.value.contains(&WireSocket::new(Index::new(5, 1), Translation::LEFT)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireTokenizer<R> {
    rules: R,
}

impl<R> WireTokenizer<R> {
    /// Trace wires under `rules`.
    pub fn new(rules: R) -> Self {
        Self { rules }
    }
}

impl<S: Hash + Eq, R: WireRules<S>> Tokenizer<S, R::Value> for WireTokenizer<R> {
    fn starts_on(&self, symbol: &S) -> bool {
        self.rules.starts_on(symbol)
    }

    fn extract_token(
        &self,
        diagram: &Diagram<S>,
        index: Index,
    ) -> Result<Token<R::Value>, ExtractError> {
        let rules = &self.rules;
        if !rules.starts_on(diagram.get(index)) {
            return Err(ExtractError::SymbolMismatch { index });
        }

        let mut ctx = R::Context::default();
        let mut border: Vec<(Index, Option<Translation>)> = vec![(index, None)];
        let mut visited: IndexSet<(Index, Translation)> = IndexSet::new();
        let mut sockets: IndexSet<WireSocket> = IndexSet::new();

        while let Some((current, incoming)) = border.pop() {
            for direction in rules.connections(diagram.get(current), incoming, &mut ctx) {
                let adjacent = current + direction;
                let back = -direction;
                if visited.contains(&(adjacent, back)) {
                    continue;
                }
                let symbol = diagram.get(adjacent);
                if symbol == diagram.whitespace() {
                    continue;
                }
                if !rules.connections(symbol, None, &mut ctx).contains(&back) {
                    continue;
                }
                if rules.is_segment(symbol) {
                    border.push((adjacent, Some(back)));
                    visited.insert((adjacent, back));
                } else {
                    sockets.insert(WireSocket::new(adjacent, back));
                }
            }
        }

        let region: SparseRegion = std::iter::once(index)
            .chain(
                visited
                    .iter()
                    .map(|(cell, _)| *cell)
                    .filter(|cell| rules.claims(diagram.get(*cell))),
            )
            .collect();
        tracing::debug!(
            %index,
            cells = region.len(),
            sockets = sockets.len(),
            "wire traced",
        );
        let value = rules.finish(Wire::new(sockets), ctx);
        Ok(Token::new(region, value))
    }
}
