use serde::{Deserialize, Serialize};

/// A cell in the maze grid. `row` 0 is the top row, `col` 0 the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is exactly one cell away along exactly one axis.
    #[must_use]
    pub fn is_step_from(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}
