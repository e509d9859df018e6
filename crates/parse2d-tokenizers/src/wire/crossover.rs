//! Pass-through crossings.

use super::rules::{SegmentTable, WireRules};
use super::Wire;
use indexmap::IndexSet;
use parse2d_core::{Translation, Translations};
use smallvec::smallvec;
use std::hash::Hash;

/// Lets two wires cross at dedicated symbols.
///
/// A crossover never starts a wire. Entered from a direction, it passes the
/// trace straight through; asked without a direction, it behaves like its
/// entry in the inner rules. Crossover cells belong to no wire's region, so
/// both crossing wires can be tokenized in the same pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossoverRules<S: Hash + Eq, R> {
    inner: R,
    crossovers: IndexSet<S>,
}

impl<S: Hash + Eq, R> CrossoverRules<S, R> {
    /// Treat `crossovers` as crossings on top of `inner`.
    ///
    /// Crossover symbols should be segments of `inner`, usually connecting
    /// in every direction.
    pub fn new(inner: R, crossovers: impl IntoIterator<Item = S>) -> Self {
        Self {
            inner,
            crossovers: crossovers.into_iter().collect(),
        }
    }

    /// Whether `symbol` is a crossover.
    pub fn is_crossover(&self, symbol: &S) -> bool {
        self.crossovers.contains(symbol)
    }
}

impl<S: Hash + Eq, R: WireRules<S>> WireRules<S> for CrossoverRules<S, R> {
    type Context = R::Context;
    type Value = R::Value;

    fn segments(&self) -> &SegmentTable<S> {
        self.inner.segments()
    }

    fn starts_on(&self, symbol: &S) -> bool {
        !self.is_crossover(symbol) && self.inner.starts_on(symbol)
    }

    fn is_segment(&self, symbol: &S) -> bool {
        self.inner.is_segment(symbol)
    }

    fn claims(&self, symbol: &S) -> bool {
        !self.is_crossover(symbol) && self.inner.claims(symbol)
    }

    fn connections(
        &self,
        symbol: &S,
        incoming: Option<Translation>,
        ctx: &mut Self::Context,
    ) -> Translations {
        match incoming {
            Some(incoming) if self.is_crossover(symbol) => smallvec![-incoming],
            _ => self.inner.connections(symbol, incoming, ctx),
        }
    }

    fn finish(&self, wire: Wire, ctx: Self::Context) -> Self::Value {
        self.inner.finish(wire, ctx)
    }
}
