//! Test fixtures and mock tokenizers for parse2d development.
//!
//! Provides instrumented [`Tokenizer`] implementations for dispatcher tests
//! and, in [`fixtures`], the sample diagrams and box-drawing tokenizers
//! shared by the integration suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use parse2d_core::{ExtractError, Index};
use parse2d_grid::Diagram;
use parse2d_tokenizer::{Token, Tokenizer};

/// Wraps a tokenizer and records every index it was asked to extract at.
pub struct RecordingTokenizer<T> {
    inner: T,
    calls: RefCell<Vec<Index>>,
}

impl<T> RecordingTokenizer<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Indices passed to `extract_token`, in call order.
    pub fn calls(&self) -> Vec<Index> {
        self.calls.borrow().clone()
    }
}

impl<S, V, T: Tokenizer<S, V>> Tokenizer<S, V> for RecordingTokenizer<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn starts_on(&self, symbol: &S) -> bool {
        self.inner.starts_on(symbol)
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError> {
        self.calls.borrow_mut().push(index);
        self.inner.extract_token(diagram, index)
    }
}

/// Converts another tokenizer's values, so tokenizers with different value
/// types can share one dispatcher list.
pub struct Mapped<T, F, V> {
    inner: T,
    map: F,
    _value: PhantomData<fn() -> V>,
}

impl<T, F, V> Mapped<T, F, V> {
    pub fn new(inner: T, map: F) -> Self {
        Self {
            inner,
            map,
            _value: PhantomData,
        }
    }
}

impl<S, V, U, T, F> Tokenizer<S, U> for Mapped<T, F, V>
where
    T: Tokenizer<S, V>,
    F: Fn(V) -> U,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn starts_on(&self, symbol: &S) -> bool {
        self.inner.starts_on(symbol)
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<U>, ExtractError> {
        self.inner
            .extract_token(diagram, index)
            .map(|token| token.map(&self.map))
    }
}

/// Claims one symbol and always fails extraction.
///
/// Counts attempts so tests can check the dispatcher never retries.
pub struct FailingTokenizer {
    symbol: char,
    attempts: AtomicUsize,
}

impl FailingTokenizer {
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }
}

impl<V> Tokenizer<char, V> for FailingTokenizer {
    fn name(&self) -> &str {
        "failing"
    }

    fn starts_on(&self, symbol: &char) -> bool {
        *symbol == self.symbol
    }

    fn extract_token(&self, _: &Diagram<char>, index: Index) -> Result<Token<V>, ExtractError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Err(ExtractError::TemplateNotFound { index })
    }
}
