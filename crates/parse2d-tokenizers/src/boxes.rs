//! Rectangular outline tokens.
//!
//! A box is recognised by walking its border clockwise. Each of the eight
//! border positions (four sides, four corners) is named by a [`Direction`]
//! and has its own set of legal symbols. The walk visits every position once
//! and the bounding box of the cells it reaches becomes the token's region.

use crate::config::ConfigError;
use indexmap::IndexSet;
use parse2d_core::{Direction, ExtractError, Index};
use parse2d_grid::{Diagram, RectRegion, Region};
use parse2d_tokenizer::{Token, Tokenizer};
use std::fmt;
use std::hash::Hash;

type ContentsFn<S, V> = Box<dyn Fn(&Diagram<S>) -> V>;

/// The direction a border walk moves in while on `edge`.
const fn search_direction(edge: Direction) -> Direction {
    match edge {
        Direction::Up | Direction::UpLeft => Direction::Right,
        Direction::UpRight | Direction::Right => Direction::Down,
        Direction::DownRight | Direction::Down => Direction::Left,
        Direction::DownLeft | Direction::Left => Direction::Up,
    }
}

/// Recognises closed rectangular outlines drawn with edge symbols.
///
/// The token value is computed by a contents function from the boxed
/// sub-diagram, border included.
///
/// # Construction
///
/// ```
/// use parse2d_core::{Direction, Index};
/// use parse2d_grid::{Diagram, Region};
/// use parse2d_tokenizer::Tokenizer;
/// use parse2d_tokenizers::BoxTokenizer;
///
/// let boxes = BoxTokenizer::builder()
///     .corners(['+'])
///     .edge(Direction::Up, ['-'])
///     .edge(Direction::Down, ['-'])
///     .edge(Direction::Left, ['|'])
///     .edge(Direction::Right, ['|'])
///     .contents(|d: &Diagram<char>| d.len())
///     .build()
///     .unwrap();
///
/// let diagram = Diagram::from_text("+-+\n|x|\n+-+");
/// let token = boxes.extract_token(&diagram, Index::new(2, 2)).unwrap();
/// assert_eq!(token.region.len(), 9);
/// assert_eq!(token.value, 9);
/// ```
pub struct BoxTokenizer<S, V> {
    edges: [IndexSet<S>; 8],
    symbols: IndexSet<S>,
    contents: ContentsFn<S, V>,
}

/// Builder for [`BoxTokenizer`].
///
/// All eight border positions need at least one symbol, and a contents
/// function is required.
pub struct BoxTokenizerBuilder<S, V> {
    edges: [IndexSet<S>; 8],
    contents: Option<ContentsFn<S, V>>,
}

impl<S: Hash + Eq + Clone, V> BoxTokenizer<S, V> {
    /// Create a new builder with no symbols and no contents function.
    pub fn builder() -> BoxTokenizerBuilder<S, V> {
        BoxTokenizerBuilder {
            edges: std::array::from_fn(|_| IndexSet::new()),
            contents: None,
        }
    }

    /// Legal symbols for one border position.
    fn edge(&self, direction: Direction) -> &IndexSet<S> {
        &self.edges[direction.ordinal()]
    }

    /// Walk the border clockwise from `start`, which is assumed to sit on
    /// `starting_edge`. Returns the traced box, or `None` if the border
    /// breaks anywhere.
    fn trace(
        &self,
        diagram: &Diagram<S>,
        start: Index,
        starting_edge: Direction,
    ) -> Option<RectRegion> {
        let extent = RectRegion::new(
            Index::new(0, 0),
            Index::new(
                i32::try_from(diagram.width()).unwrap_or(i32::MAX),
                i32::try_from(diagram.height()).unwrap_or(i32::MAX),
            ),
        );
        let (mut min, mut max) = (start, start);
        let mut index = start;
        let mut edge = starting_edge;

        for _ in 0..Direction::ALL.len() {
            let legal = self.edge(edge);
            if !legal.contains(diagram.get(index)) {
                tracing::trace!(%start, %starting_edge, %edge, %index, "box border broken");
                return None;
            }
            let step = search_direction(edge).translation();
            while extent.contains(index) && legal.contains(diagram.get(index)) {
                index += step;
            }
            min = Index::new(min.x.min(index.x), min.y.min(index.y));
            max = Index::new(max.x.max(index.x), max.y.max(index.y));
            edge = edge.clockwise();
        }

        Some(RectRegion::new(min, Index::new(max.x + 1, max.y + 1)))
    }
}

impl<S: Hash + Eq + Clone, V> BoxTokenizerBuilder<S, V> {
    /// Add legal symbols for one border position.
    pub fn edge(mut self, direction: Direction, symbols: impl IntoIterator<Item = S>) -> Self {
        self.edges[direction.ordinal()].extend(symbols);
        self
    }

    /// Add legal symbols for all four corners.
    pub fn corners(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        let symbols: Vec<S> = symbols.into_iter().collect();
        for direction in Direction::ALL.into_iter().filter(|d| d.is_diagonal()) {
            self.edges[direction.ordinal()].extend(symbols.iter().cloned());
        }
        self
    }

    /// Set the function that turns the boxed sub-diagram into the token
    /// value.
    pub fn contents(mut self, contents: impl Fn(&Diagram<S>) -> V + 'static) -> Self {
        self.contents = Some(Box::new(contents));
        self
    }

    /// Build the tokenizer, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEdge`] for the first border position,
    /// clockwise from the top side, that has no symbols, and
    /// [`ConfigError::MissingContents`] if no contents function was set.
    pub fn build(self) -> Result<BoxTokenizer<S, V>, ConfigError> {
        if let Some(direction) = Direction::ALL
            .into_iter()
            .find(|d| self.edges[d.ordinal()].is_empty())
        {
            return Err(ConfigError::MissingEdge { direction });
        }
        let contents = self.contents.ok_or(ConfigError::MissingContents)?;
        let symbols = self.edges.iter().flatten().cloned().collect();
        Ok(BoxTokenizer {
            edges: self.edges,
            symbols,
            contents,
        })
    }
}

impl<S: fmt::Debug, V> fmt::Debug for BoxTokenizer<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxTokenizer")
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl<S: Hash + Eq + Clone, V> Tokenizer<S, V> for BoxTokenizer<S, V> {
    fn starts_on(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    fn extract_token(&self, diagram: &Diagram<S>, index: Index) -> Result<Token<V>, ExtractError> {
        let symbol = diagram.get(index);
        if !self.symbols.contains(symbol) {
            return Err(ExtractError::SymbolMismatch { index });
        }
        let region = Direction::ALL
            .into_iter()
            .filter(|edge| self.edge(*edge).contains(symbol))
            .find_map(|edge| self.trace(diagram, index, edge))
            .ok_or(ExtractError::BoxNotFound { index })?;
        tracing::debug!(
            %index,
            top_left = %region.top_left,
            bottom_right = %region.bottom_right,
            "box traced",
        );
        let value = (self.contents)(&diagram.get_slice(&region));
        Ok(Token::new(region, value))
    }
}
