//! The eight grid-adjacent directions.

use crate::translation::Translation;
use std::fmt;

/// One of the eight unit steps between adjacent grid cells.
///
/// The variants are declared clockwise starting from [`Direction::Up`]; that
/// order is the order of [`Direction::ALL`] and is relied on wherever a
/// deterministic scan over directions is needed (box edge candidates, for
/// instance).
///
/// Box tokenizers also use directions to name the eight positions on a
/// box border: [`Direction::Up`] is the top edge, [`Direction::UpRight`]
/// the top-right corner, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North, `(0, -1)`.
    Up,
    /// North-east, `(1, -1)`.
    UpRight,
    /// East, `(1, 0)`.
    Right,
    /// South-east, `(1, 1)`.
    DownRight,
    /// South, `(0, 1)`.
    Down,
    /// South-west, `(-1, 1)`.
    DownLeft,
    /// West, `(-1, 0)`.
    Left,
    /// North-west, `(-1, -1)`.
    UpLeft,
}

impl Direction {
    /// All eight directions, clockwise from [`Direction::Up`].
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
    ];
    /// West and east.
    pub const HORIZONTAL: [Self; 2] = [Self::Left, Self::Right];
    /// North and south.
    pub const VERTICAL: [Self; 2] = [Self::Up, Self::Down];

    /// The unit translation for this direction.
    pub const fn translation(self) -> Translation {
        match self {
            Self::Up => Translation::UP,
            Self::UpRight => Translation::UP_RIGHT,
            Self::Right => Translation::RIGHT,
            Self::DownRight => Translation::DOWN_RIGHT,
            Self::Down => Translation::DOWN,
            Self::DownLeft => Translation::DOWN_LEFT,
            Self::Left => Translation::LEFT,
            Self::UpLeft => Translation::UP_LEFT,
        }
    }

    /// The direction one step clockwise.
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::UpRight,
            Self::UpRight => Self::Right,
            Self::Right => Self::DownRight,
            Self::DownRight => Self::Down,
            Self::Down => Self::DownLeft,
            Self::DownLeft => Self::Left,
            Self::Left => Self::UpLeft,
            Self::UpLeft => Self::Up,
        }
    }

    /// Whether this is one of the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpRight | Self::DownRight | Self::DownLeft | Self::UpLeft
        )
    }

    /// Position of this direction in [`Direction::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::UpRight => "up-right",
            Self::Right => "right",
            Self::DownRight => "down-right",
            Self::Down => "down",
            Self::DownLeft => "down-left",
            Self::Left => "left",
            Self::UpLeft => "up-left",
        };
        f.write_str(name)
    }
}
