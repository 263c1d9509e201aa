use crate::grid::Maze;
use crate::position::Position;

/// How strictly the server checks a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// One orthogonal step onto an open cell.
    #[default]
    MazeAware,
    /// One orthogonal step anywhere in bounds, walls ignored.
    AdjacentOnly,
}

/// Why a requested move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NotAdjacent,
    Wall,
}

/// Validates a move from `from` to `to` under the given policy. The caller
/// is responsible for `from` being the player's current cell.
pub fn validate_move(
    policy: MovePolicy,
    maze: &Maze,
    from: Position,
    to: Position,
) -> Result<(), MoveError> {
    if !maze.in_bounds(to) {
        return Err(MoveError::OutOfBounds);
    }
    if !from.is_step_from(to) {
        return Err(MoveError::NotAdjacent);
    }
    if policy == MovePolicy::MazeAware && !maze.is_open(to) {
        return Err(MoveError::Wall);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_step_onto_open_cell() {
        let maze = Maze::default();
        let from = Position::new(1, 1);
        assert_eq!(
            validate_move(MovePolicy::MazeAware, &maze, from, Position::new(1, 2)),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_step_out_of_bounds() {
        let maze = Maze::default();
        let from = Position::new(3, 6);
        assert_eq!(
            validate_move(MovePolicy::MazeAware, &maze, from, Position::new(3, 7)),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_rejects_teleport() {
        let maze = Maze::default();
        let from = Position::new(1, 1);
        assert_eq!(
            validate_move(MovePolicy::MazeAware, &maze, from, Position::new(3, 6)),
            Err(MoveError::NotAdjacent)
        );
    }

    #[test]
    fn test_rejects_diagonal() {
        let maze = Maze::default();
        let from = Position::new(1, 1);
        assert_eq!(
            validate_move(MovePolicy::MazeAware, &maze, from, Position::new(2, 2)),
            Err(MoveError::NotAdjacent)
        );
    }

    #[test]
    fn test_rejects_step_into_wall() {
        let maze = Maze::default();
        let from = Position::new(1, 1);
        assert_eq!(
            validate_move(MovePolicy::MazeAware, &maze, from, Position::new(0, 1)),
            Err(MoveError::Wall)
        );
    }

    #[test]
    fn test_adjacent_only_ignores_walls() {
        let maze = Maze::default();
        let from = Position::new(1, 1);
        assert_eq!(
            validate_move(MovePolicy::AdjacentOnly, &maze, from, Position::new(0, 1)),
            Ok(())
        );
        assert_eq!(
            validate_move(MovePolicy::AdjacentOnly, &maze, from, Position::new(3, 3)),
            Err(MoveError::NotAdjacent)
        );
    }
}
