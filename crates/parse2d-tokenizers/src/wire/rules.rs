//! Wire tracing rules and the plain segment table.

use super::Wire;
use crate::config::ConfigError;
use indexmap::IndexMap;
use parse2d_core::{Translation, Translations};
use std::hash::Hash;

/// How a wire trace treats each symbol.
///
/// Every method except [`finish`](Self::finish) has a default that defers
/// to the [`SegmentTable`] returned by [`segments`](Self::segments).
/// Layers wrap another rule set and override the hooks they change.
///
/// Rule sets are immutable configuration. Anything a trace accumulates
/// lives in a [`Context`](Self::Context), created fresh for every
/// `extract_token` call and handed back to [`finish`](Self::finish).
///
/// # Termination
///
/// The trace records each (cell, incoming direction) pair once, so any
/// `connections` override that returns a finite set terminates.
pub trait WireRules<S: Hash + Eq> {
    /// Per-trace state.
    type Context: Default;
    /// The token value a finished trace produces.
    type Value;

    /// The underlying segment table.
    fn segments(&self) -> &SegmentTable<S>;

    /// Whether a trace may start at `symbol`.
    fn starts_on(&self, symbol: &S) -> bool {
        self.segments().is_segment(symbol)
    }

    /// Whether the trace continues through `symbol`. Non-segments that
    /// accept a connection become sockets.
    fn is_segment(&self, symbol: &S) -> bool {
        self.segments().is_segment(symbol)
    }

    /// Whether a traced cell holding `symbol` belongs to the wire's region.
    ///
    /// Cells that several wires pass through return `false`, so that those
    /// wires stay disjoint.
    fn claims(&self, _symbol: &S) -> bool {
        true
    }

    /// Outgoing directions from `symbol`.
    ///
    /// `incoming` points back at the cell the trace came from, or is `None`
    /// at the start cell and when the trace asks whether `symbol` accepts a
    /// connection at all.
    fn connections(
        &self,
        symbol: &S,
        _incoming: Option<Translation>,
        _ctx: &mut Self::Context,
    ) -> Translations {
        self.segments().connections(symbol)
    }

    /// Turn a completed trace into the token value.
    fn finish(&self, wire: Wire, ctx: Self::Context) -> Self::Value;
}

/// Segment symbols and the directions each one connects along.
///
/// Connections are fully connected: a segment entered from any direction
/// leaves along all of its configured directions.
#[derive(Clone, Debug)]
pub struct SegmentTable<S> {
    segments: IndexMap<S, Translations>,
}

impl<S: Hash + Eq> PartialEq for SegmentTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl<S: Hash + Eq> Eq for SegmentTable<S> {}

impl<S: Hash + Eq> SegmentTable<S> {
    /// Build a table from `(symbol, directions)` entries.
    ///
    /// Duplicate directions are dropped; a repeated symbol extends its
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySegmentTable`] if `entries` is empty.
    pub fn new<I, T>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, T)>,
        T: IntoIterator<Item = Translation>,
    {
        let mut segments: IndexMap<S, Translations> = IndexMap::new();
        for (symbol, directions) in entries {
            let entry = segments.entry(symbol).or_default();
            for direction in directions {
                if !entry.contains(&direction) {
                    entry.push(direction);
                }
            }
        }
        if segments.is_empty() {
            return Err(ConfigError::EmptySegmentTable);
        }
        Ok(Self { segments })
    }

    /// Whether `symbol` is a configured segment.
    pub fn is_segment(&self, symbol: &S) -> bool {
        self.segments.contains_key(symbol)
    }

    /// The directions `symbol` connects along.
    ///
    /// Symbols outside the table connect in all eight directions, which is
    /// what lets any non-segment neighbour become a socket.
    pub fn connections(&self, symbol: &S) -> Translations {
        match self.segments.get(symbol) {
            Some(directions) => directions.clone(),
            None => Translation::ALL.into_iter().collect(),
        }
    }
}

impl<S: Hash + Eq> WireRules<S> for SegmentTable<S> {
    type Context = ();
    type Value = Wire;

    fn segments(&self) -> &SegmentTable<S> {
        self
    }

    fn finish(&self, wire: Wire, _ctx: ()) -> Wire {
        wire
    }
}
