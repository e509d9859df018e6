//! The [`Diagram`] symbol grid.

use crate::error::DiagramError;
use crate::rect::RectRegion;
use parse2d_core::Index;
use std::fmt;

/// A mutable two-dimensional grid of symbols with a whitespace sentinel.
///
/// Rows may have different lengths. The *populated extent* is the set of
/// cells that actually exist in the backing rows; everything else reads as
/// whitespace.
///
/// # Contract
///
/// - [`get`](Self::get) never fails: outside the populated extent it
///   returns the whitespace sentinel.
/// - [`set`](Self::set), [`remove`](Self::remove) and the slice writers fail
///   with [`DiagramError::OutOfBounds`] outside the populated extent.
/// - [`items`](Self::items) and [`len`](Self::len) only see non-whitespace
///   cells, compared by value equality against the sentinel.
///
/// # Examples
///
/// ```
/// use parse2d_core::Index;
/// use parse2d_grid::Diagram;
///
/// let diagram = Diagram::from_text("abc\nd f");
/// assert_eq!(*diagram.get(Index::new(1, 0)), 'b');
/// assert_eq!(*diagram.get(Index::new(9, 9)), ' ');
/// assert_eq!(diagram.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram<S> {
    rows: Vec<Vec<S>>,
    whitespace: S,
}

impl Diagram<char> {
    /// Build a character diagram from line-delimited text, with `' '` as
    /// whitespace.
    ///
    /// Each line becomes an independent row; rows are not padded.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, ' ')
    }

    /// Build a character diagram from text with a custom whitespace
    /// sentinel.
    pub fn from_text_with(text: &str, whitespace: char) -> Self {
        Self {
            rows: text.lines().map(|line| line.chars().collect()).collect(),
            whitespace,
        }
    }
}

impl fmt::Display for Diagram<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for symbol in row {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl<S> Diagram<S> {
    /// Wrap existing rows.
    pub fn from_rows(rows: Vec<Vec<S>>, whitespace: S) -> Self {
        Self { rows, whitespace }
    }

    /// The backing rows.
    pub fn rows(&self) -> &[Vec<S>] {
        &self.rows
    }

    /// Consume the diagram, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<S>> {
        self.rows
    }

    /// The whitespace sentinel.
    pub fn whitespace(&self) -> &S {
        &self.whitespace
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether `index` lies within the populated extent.
    pub fn in_extent(&self, index: Index) -> bool {
        self.cell(index).is_some()
    }

    fn position(index: Index) -> Option<(usize, usize)> {
        Some((usize::try_from(index.x).ok()?, usize::try_from(index.y).ok()?))
    }

    fn cell(&self, index: Index) -> Option<&S> {
        let (x, y) = Self::position(index)?;
        self.rows.get(y)?.get(x)
    }

    fn cell_mut(&mut self, index: Index) -> Result<&mut S, DiagramError> {
        Self::position(index)
            .and_then(|(x, y)| self.rows.get_mut(y)?.get_mut(x))
            .ok_or(DiagramError::OutOfBounds { index })
    }

    /// The symbol at `index`, or the whitespace sentinel outside the
    /// populated extent.
    pub fn get(&self, index: Index) -> &S {
        self.cell(index).unwrap_or(&self.whitespace)
    }

    /// Overwrite the symbol at `index`.
    pub fn set(&mut self, index: Index, value: S) -> Result<(), DiagramError> {
        *self.cell_mut(index)? = value;
        Ok(())
    }

    /// Iterate over `(index, symbol)` for every non-whitespace cell, in
    /// row-major order.
    pub fn items(&self) -> Items<'_, S> {
        Items {
            diagram: self,
            x: 0,
            y: 0,
        }
    }
}

impl<S: PartialEq> Diagram<S> {
    /// The symbol at `index`, or `None` where the cell reads as whitespace.
    pub fn symbol(&self, index: Index) -> Option<&S> {
        Some(self.get(index)).filter(|s| **s != self.whitespace)
    }

    /// Whether the cell at `index` holds a non-whitespace symbol.
    pub fn contains(&self, index: Index) -> bool {
        self.symbol(index).is_some()
    }

    /// Indices of every non-whitespace cell, in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = Index> + '_ {
        self.items().map(|(index, _)| index)
    }

    /// Every non-whitespace symbol, in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &S> + '_ {
        self.items().map(|(_, symbol)| symbol)
    }

    /// Number of non-whitespace cells.
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Whether every cell is whitespace.
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

impl<S: Clone> Diagram<S> {
    /// Overwrite the cell at `index` with whitespace, returning the symbol
    /// it held.
    pub fn remove(&mut self, index: Index) -> Result<S, DiagramError> {
        let whitespace = self.whitespace.clone();
        Ok(std::mem::replace(self.cell_mut(index)?, whitespace))
    }

    /// Copy the cells inside `area` into a new diagram with the same
    /// sentinel.
    ///
    /// Like [`get`](Self::get), this never fails: the copy is clipped to the
    /// populated extent, so short rows stay short.
    pub fn get_slice(&self, area: &RectRegion) -> Diagram<S> {
        let clip = |v: i32, len: usize| usize::try_from(v).unwrap_or(0).min(len);
        let (y0, y1) = (
            clip(area.top_left.y, self.rows.len()),
            clip(area.bottom_right.y, self.rows.len()),
        );
        let rows = self.rows[y0..y1.max(y0)]
            .iter()
            .map(|row| {
                let (x0, x1) = (
                    clip(area.top_left.x, row.len()),
                    clip(area.bottom_right.x, row.len()),
                );
                row[x0..x1.max(x0)].to_vec()
            })
            .collect();
        Diagram::from_rows(rows, self.whitespace.clone())
    }

    /// Overwrite the cells inside `area` with `replacement`, row by row.
    ///
    /// `replacement` must have exactly `area.height()` rows of exactly
    /// `area.width()` symbols, and every cell of `area` must be within the
    /// populated extent. Nothing is written unless both hold.
    pub fn set_slice(
        &mut self,
        area: &RectRegion,
        replacement: &[Vec<S>],
    ) -> Result<(), DiagramError> {
        check_shape(area, replacement)?;
        self.check_area_in_extent(area)?;
        for (dy, line) in replacement.iter().enumerate() {
            for (dx, value) in line.iter().enumerate() {
                let index = offset(area.top_left, dx, dy);
                *self.cell_mut(index)? = value.clone();
            }
        }
        Ok(())
    }

    /// Overwrite every cell inside `area` with whitespace.
    ///
    /// Fails without writing anything if any cell of `area` lies outside
    /// the populated extent.
    pub fn delete_slice(&mut self, area: &RectRegion) -> Result<(), DiagramError> {
        self.check_area_in_extent(area)?;
        let whitespace = self.whitespace.clone();
        for dy in 0..area.height() {
            for dx in 0..area.width() {
                *self.cell_mut(offset(area.top_left, dx, dy))? = whitespace.clone();
            }
        }
        Ok(())
    }

    fn check_area_in_extent(&self, area: &RectRegion) -> Result<(), DiagramError> {
        for dy in 0..area.height() {
            for dx in 0..area.width() {
                let index = offset(area.top_left, dx, dy);
                if !self.in_extent(index) {
                    return Err(DiagramError::OutOfBounds { index });
                }
            }
        }
        Ok(())
    }
}

fn offset(origin: Index, dx: usize, dy: usize) -> Index {
    // Slice dimensions come from i32 box corners, so they always fit.
    Index::new(origin.x + dx as i32, origin.y + dy as i32)
}

fn check_shape<S>(area: &RectRegion, replacement: &[Vec<S>]) -> Result<(), DiagramError> {
    let expected_rows = area.height();
    let expected_cols = area.width();
    let found_cols = replacement
        .iter()
        .map(Vec::len)
        .find(|&len| len != expected_cols);
    if replacement.len() != expected_rows || found_cols.is_some() {
        return Err(DiagramError::ShapeMismatch {
            expected_rows,
            expected_cols,
            found_rows: replacement.len(),
            found_cols: found_cols.unwrap_or(expected_cols),
        });
    }
    Ok(())
}

/// Row-major iterator over the non-whitespace cells of a [`Diagram`].
///
/// Created by [`Diagram::items`].
#[derive(Debug)]
pub struct Items<'a, S> {
    diagram: &'a Diagram<S>,
    x: usize,
    y: usize,
}

impl<'a, S: PartialEq> Iterator for Items<'a, S> {
    type Item = (Index, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        let rows = &self.diagram.rows;
        while let Some(row) = rows.get(self.y) {
            while let Some(symbol) = row.get(self.x) {
                let (x, y) = (self.x, self.y);
                self.x += 1;
                if *symbol != self.diagram.whitespace {
                    return Some((Index::new(x as i32, y as i32), symbol));
                }
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn i(x: i32, y: i32) -> Index {
        Index::new(x, y)
    }

    fn sample() -> Diagram<char> {
        Diagram::from_text("abc\nd f\nghi")
    }

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> RectRegion {
        RectRegion::new(i(x0, y0), i(x1, y1))
    }

    // ── Reads ───────────────────────────────────────────────────

    #[test]
    fn get_index() {
        assert_eq!(*sample().get(i(1, 0)), 'b');
    }

    #[test]
    fn get_outside_extent_is_whitespace() {
        let d = Diagram::from_text("ab\nc");
        assert_eq!(*d.get(i(-1, 0)), ' ');
        assert_eq!(*d.get(i(0, -1)), ' ');
        assert_eq!(*d.get(i(1, 1)), ' '); // short row
        assert_eq!(*d.get(i(0, 2)), ' ');
    }

    #[test]
    fn symbol_hides_whitespace() {
        let d = sample();
        assert_eq!(d.symbol(i(1, 0)), Some(&'b'));
        assert_eq!(d.symbol(i(1, 1)), None);
        assert_eq!(d.symbol(i(7, 7)), None);
    }

    #[test]
    fn contains_non_whitespace_only() {
        let d = sample();
        assert!(d.contains(i(0, 0)));
        assert!(!d.contains(i(1, 1)));
    }

    #[test]
    fn custom_whitespace() {
        let d = Diagram::from_text_with("a.b", '.');
        assert_eq!(d.len(), 2);
        assert_eq!(*d.get(i(5, 0)), '.');
        assert!(!d.contains(i(1, 0)));
    }

    // ── Writes ──────────────────────────────────────────────────

    #[test]
    fn set_index() {
        let mut d = sample();
        d.set(i(0, 1), 'j').unwrap();
        assert_eq!(*d.get(i(0, 1)), 'j');
    }

    #[test]
    fn set_outside_extent_fails() {
        let mut d = Diagram::from_text("ab\nc");
        assert_eq!(
            d.set(i(1, 1), 'x'),
            Err(DiagramError::OutOfBounds { index: i(1, 1) })
        );
        assert_eq!(
            d.set(i(-1, 0), 'x'),
            Err(DiagramError::OutOfBounds { index: i(-1, 0) })
        );
        assert_eq!(d, Diagram::from_text("ab\nc"));
    }

    #[test]
    fn remove_blanks_cell() {
        let mut d = sample();
        assert_eq!(d.remove(i(2, 2)), Ok('i'));
        assert_eq!(*d.get(i(2, 2)), ' ');
        assert_eq!(d.len(), 7);
        assert!(matches!(
            d.remove(i(3, 0)),
            Err(DiagramError::OutOfBounds { .. })
        ));
    }

    // ── Slices ──────────────────────────────────────────────────

    #[test]
    fn into_rows_keeps_edits() {
        let mut d = Diagram::from_text("ab\nc");
        d.set(i(1, 0), 'd').unwrap();
        assert_eq!(d.into_rows(), vec![vec!['a', 'd'], vec!['c']]);
    }

    #[test]
    fn get_slice() {
        assert_eq!(
            sample().get_slice(&rect(1, 0, 3, 2)),
            Diagram::from_text("bc\n f")
        );
    }

    #[test]
    fn get_slice_clips_to_extent() {
        let d = Diagram::from_text("abc\nd");
        assert_eq!(d.get_slice(&rect(-2, -2, 9, 9)), d);
        assert_eq!(d.get_slice(&rect(1, 0, 3, 2)).rows(), &[vec!['b', 'c'], vec![]]);
        assert_eq!(d.get_slice(&rect(2, 2, 0, 0)).height(), 0);
    }

    #[test]
    fn set_slice() {
        let mut d = sample();
        let replacement = Diagram::from_text("k\nl\nm");
        d.set_slice(&rect(2, 0, 3, 3), replacement.rows()).unwrap();
        assert_eq!(d.get_slice(&rect(1, 0, 3, 2)), Diagram::from_text("bk\n l"));
        assert_eq!(*d.get(i(2, 2)), 'm');
    }

    #[test]
    fn set_slice_shape_mismatch() {
        let mut d = sample();
        let err = d
            .set_slice(&rect(0, 0, 2, 2), Diagram::from_text("xy\nz").rows())
            .unwrap_err();
        assert_eq!(
            err,
            DiagramError::ShapeMismatch {
                expected_rows: 2,
                expected_cols: 2,
                found_rows: 2,
                found_cols: 1,
            }
        );
        let err = d
            .set_slice(&rect(0, 0, 2, 2), Diagram::from_text("xy").rows())
            .unwrap_err();
        assert!(matches!(
            err,
            DiagramError::ShapeMismatch { found_rows: 1, .. }
        ));
        assert_eq!(d, sample());
    }

    #[test]
    fn set_slice_outside_extent_writes_nothing() {
        let mut d = Diagram::from_text("ab\nc");
        let err = d
            .set_slice(&rect(0, 0, 2, 2), Diagram::from_text("wx\nyz").rows())
            .unwrap_err();
        assert_eq!(err, DiagramError::OutOfBounds { index: i(1, 1) });
        assert_eq!(d, Diagram::from_text("ab\nc"));
    }

    #[test]
    fn delete_slice_blanks_box() {
        let mut d = sample();
        d.delete_slice(&rect(0, 0, 2, 2)).unwrap();
        assert_eq!(d.to_string(), "  c\n  f\nghi");
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn delete_slice_outside_extent_fails() {
        let mut d = sample();
        assert!(matches!(
            d.delete_slice(&rect(2, 0, 4, 1)),
            Err(DiagramError::OutOfBounds { index }) if index == i(3, 0)
        ));
        assert_eq!(d, sample());
    }

    // ── Iteration ───────────────────────────────────────────────

    #[test]
    fn keys_are_row_major_and_skip_whitespace() {
        assert_eq!(
            sample().keys().collect::<Vec<_>>(),
            vec![
                i(0, 0),
                i(1, 0),
                i(2, 0),
                i(0, 1),
                i(2, 1),
                i(0, 2),
                i(1, 2),
                i(2, 2)
            ]
        );
    }

    #[test]
    fn items_pair_index_and_symbol() {
        let items: Vec<_> = sample().items().map(|(idx, s)| (idx, *s)).collect();
        assert_eq!(items[3], (i(0, 1), 'd'));
        assert_eq!(items[4], (i(2, 1), 'f'));
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn values_in_order() {
        assert_eq!(sample().values().collect::<String>(), "abcdfghi");
    }

    #[test]
    fn len_counts_non_whitespace() {
        assert_eq!(sample().len(), 8);
        assert!(Diagram::from_text("   \n ").is_empty());
    }

    #[test]
    fn items_restartable() {
        let d = sample();
        assert_eq!(d.items().count(), d.items().count());
    }

    #[test]
    fn width_and_height() {
        let d = Diagram::from_text("a\nbcd\n");
        assert_eq!(d.height(), 2);
        assert_eq!(d.width(), 3);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_text() -> impl Strategy<Value = String> {
        proptest::collection::vec("[ a-c─│┌┐]{0,6}", 0..6).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn text_round_trips(text in arb_text()) {
            let d = Diagram::from_text(&text);
            let lines: Vec<&str> = text.lines().collect();
            prop_assert_eq!(d.height(), lines.len());
            for (y, line) in lines.iter().enumerate() {
                for (x, ch) in line.chars().enumerate() {
                    prop_assert_eq!(*d.get(Index::new(x as i32, y as i32)), ch);
                }
            }
            prop_assert_eq!(d.to_string(), lines.join("\n"));
        }

        #[test]
        fn reads_outside_extent_are_whitespace(
            text in arb_text(),
            x in -20i32..20,
            y in -20i32..20,
        ) {
            let d = Diagram::from_text(&text);
            if !d.in_extent(Index::new(x, y)) {
                prop_assert_eq!(*d.get(Index::new(x, y)), ' ');
            }
        }

        #[test]
        fn len_matches_items(text in arb_text()) {
            let d = Diagram::from_text(&text);
            prop_assert_eq!(d.len(), d.items().count());
            prop_assert!(d.items().all(|(_, s)| *s != ' '));
        }
    }
}
