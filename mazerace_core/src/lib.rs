//! Maze domain shared by the coordinator and its clients: grid walkability,
//! spawn and goal cells, and the movement rules the server enforces.

pub mod grid;
pub mod position;
pub mod rules;

pub use grid::{Maze, MazeError};
pub use position::Position;
