//! Fixed-shape tokens recognised from any of their cells.
//!
//! A template is a stencil: a finite map from relative offsets to required
//! symbols. Extraction assumes in turn that the anchor cell is each stencil
//! offset carrying the anchor's symbol, and accepts the first placement
//! under which the whole stencil matches the diagram.

use crate::config::ConfigError;
use indexmap::{IndexMap, IndexSet};
use parse2d_core::{ExtractError, Index, Translation};
use parse2d_grid::{Diagram, SparseRegion};
use parse2d_tokenizer::{Token, Tokenizer};
use std::hash::Hash;

/// Recognises one fixed arrangement of symbols.
///
/// Candidate placements are tried in stencil insertion order, so the
/// resulting region is deterministic.
///
/// # Examples
///
/// ```
/// use parse2d_core::Index;
/// use parse2d_grid::{AnyRegion, Diagram, SparseRegion};
/// use parse2d_tokenizer::Tokenizer;
/// use parse2d_tokenizers::TemplateTokenizer;
///
/// let slash = TemplateTokenizer::from_diagram(&Diagram::from_text("b\n b"), "slash").unwrap();
/// let diagram = Diagram::from_text("abb\na bb");
/// let token = slash.extract_token(&diagram, Index::new(2, 0)).unwrap();
/// let expected: SparseRegion = [Index::new(2, 0), Index::new(3, 1)].into_iter().collect();
/// assert_eq!(token.region, AnyRegion::from(expected));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateTokenizer<S: Hash + Eq, V> {
    stencil: IndexMap<Index, S>,
    symbols: IndexSet<S>,
    value: V,
}

impl<S: Hash + Eq + Clone, V> TemplateTokenizer<S, V> {
    /// Build a template from `(offset, symbol)` cells.
    ///
    /// A later cell at the same offset replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTemplate`] if `stencil` yields no cells.
    pub fn new(
        stencil: impl IntoIterator<Item = (Index, S)>,
        value: V,
    ) -> Result<Self, ConfigError> {
        let stencil: IndexMap<Index, S> = stencil.into_iter().collect();
        if stencil.is_empty() {
            return Err(ConfigError::EmptyTemplate);
        }
        let symbols = stencil.values().cloned().collect();
        Ok(Self {
            stencil,
            symbols,
            value,
        })
    }

    /// Build a template from every non-whitespace cell of `template`.
    ///
    /// Offsets are the cells' own indices, so templates can be drawn as text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTemplate`] if `template` is blank.
    pub fn from_diagram(template: &Diagram<S>, value: V) -> Result<Self, ConfigError> {
        Self::new(
            template
                .items()
                .map(|(index, symbol)| (index, symbol.clone())),
            value,
        )
    }
}

impl<S: Hash + Eq, V> TemplateTokenizer<S, V> {
    /// Whether the whole stencil, shifted by `shift`, matches `diagram`.
    fn matches(&self, diagram: &Diagram<S>, shift: Translation) -> bool {
        self.stencil
            .iter()
            .all(|(offset, required)| diagram.get(*offset + shift) == required)
    }
}

impl<S: Hash + Eq, V: Clone> Tokenizer<S, V> for TemplateTokenizer<S, V> {
    fn starts_on(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError> {
        let anchor = diagram.get(index);
        for (offset, required) in &self.stencil {
            if required != anchor {
                continue;
            }
            let shift = Translation::between(*offset, index);
            if !self.matches(diagram, shift) {
                tracing::trace!(%index, %offset, "template placement rejected");
                continue;
            }
            let region: SparseRegion = self.stencil.keys().map(|o| *o + shift).collect();
            return Ok(Token::new(region, self.value.clone()));
        }
        Err(ExtractError::TemplateNotFound { index })
    }
}
