use crate::position::Position;

/// Why a maze layout was rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    EmptyLayout,
    RaggedRows,
    SpawnOutOfBounds,
    SpawnOnWall,
    GoalOutOfBounds,
    GoalOnWall,
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::EmptyLayout => "maze layout has no cells",
            Self::RaggedRows => "maze rows differ in length",
            Self::SpawnOutOfBounds => "spawn cell is outside the grid",
            Self::SpawnOnWall => "spawn cell is a wall",
            Self::GoalOutOfBounds => "goal cell is outside the grid",
            Self::GoalOnWall => "goal cell is a wall",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MazeError {}

/// The race course: a rectangular grid of open and wall cells plus the two
/// spawn cells and the goal cell. Immutable once built.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    // Row-major. true = open path, false = wall.
    open: Vec<bool>,
    spawns: [Position; 2],
    goal: Position,
}

/// 1 = open path, 0 = wall.
const LAYOUT: [[u8; 7]; 6] = [
    [0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 1],
    [0, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0],
];

const SPAWNS: [Position; 2] = [Position::new(3, 1), Position::new(1, 1)];
const GOAL: Position = Position::new(3, 6);

impl Maze {
    /// Builds a maze from a row-major layout where nonzero means open.
    /// Spawns and the goal must land on open cells inside the grid.
    pub fn new(
        layout: &[&[u8]],
        spawns: [Position; 2],
        goal: Position,
    ) -> Result<Self, MazeError> {
        if layout.is_empty() || layout[0].is_empty() {
            return Err(MazeError::EmptyLayout);
        }
        let rows = layout.len();
        let cols = layout[0].len();
        if layout.iter().any(|r| r.len() != cols) {
            return Err(MazeError::RaggedRows);
        }
        let open: Vec<bool> = layout
            .iter()
            .flat_map(|r| r.iter().map(|&c| c != 0))
            .collect();
        let maze = Self {
            rows,
            cols,
            open,
            spawns,
            goal,
        };
        for spawn in spawns {
            if !maze.in_bounds(spawn) {
                return Err(MazeError::SpawnOutOfBounds);
            }
            if !maze.is_open(spawn) {
                return Err(MazeError::SpawnOnWall);
            }
        }
        if !maze.in_bounds(goal) {
            return Err(MazeError::GoalOutOfBounds);
        }
        if !maze.is_open(goal) {
            return Err(MazeError::GoalOnWall);
        }
        Ok(maze)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Spawn cell by join order: index 0 for the room creator, any other
    /// index for the second player.
    #[must_use]
    pub const fn spawn(&self, join_index: usize) -> Position {
        if join_index == 0 {
            self.spawns[0]
        } else {
            self.spawns[1]
        }
    }

    #[must_use]
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// True when the cell is inside the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.open[pos.row * self.cols + pos.col]
    }
}

impl Default for Maze {
    fn default() -> Self {
        let rows: Vec<&[u8]> = LAYOUT.iter().map(|r| r.as_slice()).collect();
        match Self::new(&rows, SPAWNS, GOAL) {
            Ok(maze) => maze,
            Err(_) => unreachable!("built-in maze layout is valid"),
        }
    }
}
