//! Board positions and the 1-indexed coordinates shown in move labels.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The 1-indexed `(column, row)` coordinate of this position.
    pub fn coordinate(self) -> Coordinate {
        Coordinate {
            col: self.col() as u8 + 1,
            row: self.row() as u8 + 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Column/row pair recorded with each move, both counted from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{},{}", col, row)]
pub struct Coordinate {
    /// Column, 1-3.
    pub col: u8,
    /// Row, 1-3.
    pub row: u8,
}

impl Coordinate {
    /// Converts the coordinate back to the position it names.
    pub fn position(self) -> Option<Position> {
        if !(1..=3).contains(&self.col) || !(1..=3).contains(&self.row) {
            return None;
        }
        Position::from_index(usize::from(self.row - 1) * 3 + usize::from(self.col - 1))
    }
}
