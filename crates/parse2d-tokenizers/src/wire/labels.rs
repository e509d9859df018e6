//! Inline wire labels.

use super::rules::{SegmentTable, WireRules};
use super::Wire;
use parse2d_core::{Translation, Translations};
use smallvec::smallvec;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// Entering a label from one of these directions means the trace is
/// reading it backwards, so symbols are prepended.
const READ_BACKWARDS: [Translation; 4] = [
    Translation::UP_RIGHT,
    Translation::RIGHT,
    Translation::DOWN_RIGHT,
    Translation::DOWN,
];

/// Reads runs of label symbols drawn inline on a wire.
///
/// Label symbols, chosen by a predicate, are segments the trace passes
/// straight through, but they never start a wire. Each maximal run of label
/// symbols along the trace becomes one label, read left to right or top to
/// bottom whichever way the trace crossed it. A label crossed in both
/// directions is recorded once.
pub struct LabelledRules<R, F> {
    inner: R,
    is_label: F,
}

impl<R, F> LabelledRules<R, F> {
    /// Read labels made of symbols accepted by `is_label`, on top of
    /// `inner`.
    pub fn new(inner: R, is_label: F) -> Self {
        Self { inner, is_label }
    }
}

impl<R: fmt::Debug, F> fmt::Debug for LabelledRules<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelledRules")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Per-trace label state for [`LabelledRules`].
#[derive(Debug)]
pub struct LabelTrace<S, C> {
    inner: C,
    labels: Vec<Vec<S>>,
    partial: VecDeque<S>,
}

impl<S, C: Default> Default for LabelTrace<S, C> {
    fn default() -> Self {
        Self {
            inner: C::default(),
            labels: Vec::new(),
            partial: VecDeque::new(),
        }
    }
}

impl<S: PartialEq, C> LabelTrace<S, C> {
    fn close(&mut self) {
        if self.partial.is_empty() {
            return;
        }
        let label: Vec<S> = self.partial.drain(..).collect();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }
}

/// A wire together with the labels drawn on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelledWire<S, W = Wire> {
    /// The value of the inner rules.
    pub wire: W,
    /// Labels in the order the trace completed them.
    pub labels: Vec<Vec<S>>,
}

impl<W> LabelledWire<char, W> {
    /// The labels as strings.
    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.iter().collect()).collect()
    }
}

impl<S, R, F> WireRules<S> for LabelledRules<R, F>
where
    S: Hash + Eq + Clone,
    R: WireRules<S>,
    F: Fn(&S) -> bool,
{
    type Context = LabelTrace<S, R::Context>;
    type Value = LabelledWire<S, R::Value>;

    fn segments(&self) -> &SegmentTable<S> {
        self.inner.segments()
    }

    fn starts_on(&self, symbol: &S) -> bool {
        !(self.is_label)(symbol) && self.inner.starts_on(symbol)
    }

    fn is_segment(&self, symbol: &S) -> bool {
        (self.is_label)(symbol) || self.inner.is_segment(symbol)
    }

    fn claims(&self, symbol: &S) -> bool {
        self.inner.claims(symbol)
    }

    fn connections(
        &self,
        symbol: &S,
        incoming: Option<Translation>,
        ctx: &mut Self::Context,
    ) -> Translations {
        let Some(from) = incoming else {
            return self.inner.connections(symbol, None, &mut ctx.inner);
        };
        if (self.is_label)(symbol) {
            if READ_BACKWARDS.contains(&from) {
                ctx.partial.push_front(symbol.clone());
            } else {
                ctx.partial.push_back(symbol.clone());
            }
            return smallvec![-from];
        }
        ctx.close();
        self.inner.connections(symbol, incoming, &mut ctx.inner)
    }

    fn finish(&self, wire: Wire, mut ctx: Self::Context) -> Self::Value {
        ctx.close();
        LabelledWire {
            wire: self.inner.finish(wire, ctx.inner),
            labels: ctx.labels,
        }
    }
}
