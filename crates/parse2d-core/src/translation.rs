//! Integer displacement vectors on the grid.

use crate::index::Index;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, AddAssign, Neg};

/// A list of translations, sized so the full eight-neighbourhood stays
/// inline without heap allocation.
pub type Translations = SmallVec<[Translation; 8]>;

/// A displacement `(dx, dy)` between two grid cells.
///
/// Adding a translation to an [`Index`] steps across the grid; negating it
/// reverses the step. Rows grow downwards, so [`Translation::UP`] is
/// `(0, -1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Translation {
    /// Column displacement.
    pub dx: i32,
    /// Row displacement.
    pub dy: i32,
}

impl Translation {
    /// One row up.
    pub const UP: Self = Self::new(0, -1);
    /// One row up, one column right.
    pub const UP_RIGHT: Self = Self::new(1, -1);
    /// One column right.
    pub const RIGHT: Self = Self::new(1, 0);
    /// One row down, one column right.
    pub const DOWN_RIGHT: Self = Self::new(1, 1);
    /// One row down.
    pub const DOWN: Self = Self::new(0, 1);
    /// One row down, one column left.
    pub const DOWN_LEFT: Self = Self::new(-1, 1);
    /// One column left.
    pub const LEFT: Self = Self::new(-1, 0);
    /// One row up, one column left.
    pub const UP_LEFT: Self = Self::new(-1, -1);

    /// The two horizontal unit steps.
    pub const HORIZONTAL: [Self; 2] = [Self::LEFT, Self::RIGHT];
    /// The two vertical unit steps.
    pub const VERTICAL: [Self; 2] = [Self::UP, Self::DOWN];
    /// All eight unit steps, clockwise from [`Translation::UP`].
    pub const ALL: [Self; 8] = [
        Self::UP,
        Self::UP_RIGHT,
        Self::RIGHT,
        Self::DOWN_RIGHT,
        Self::DOWN,
        Self::DOWN_LEFT,
        Self::LEFT,
        Self::UP_LEFT,
    ];

    /// Create a translation of `dx` columns and `dy` rows.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The translation that carries `start` onto `end`.
    pub const fn between(start: Index, end: Index) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }
}

impl Neg for Translation {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl Add<Translation> for Index {
    type Output = Index;

    fn add(self, t: Translation) -> Index {
        Index::new(self.x + t.dx, self.y + t.dy)
    }
}

impl AddAssign<Translation> for Index {
    fn add_assign(&mut self, t: Translation) {
        *self = *self + t;
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}
