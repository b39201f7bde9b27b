use crate::*;

/// Result of a single move attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target cell is a wall, empty, or outside the maze.
    Blocked,
    Moved,
    /// The player stands on a finish tile after the attempt.
    Finished,
}

impl MoveOutcome {
    /// Whether the session this move belongs to is complete
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Position and facing of a player walking through a borrowed maze.
#[derive(Clone, Debug, PartialEq)]
pub struct Player<'a> {
    maze: &'a MazeGrid,
    position: Coord2,
    facing: Direction,
}

impl<'a> Player<'a> {
    /// Places a new player on the maze start tile, facing up.
    pub fn new(maze: &'a MazeGrid) -> Self {
        Self {
            maze,
            position: maze.start(),
            facing: Direction::default(),
        }
    }

    pub fn maze(&self) -> &'a MazeGrid {
        self.maze
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn tile(&self) -> TileKind {
        self.maze[self.position]
    }

    /// Turns towards `direction` and steps one cell that way if the cell is traversable.
    ///
    /// The facing changes even when the step is blocked.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.facing = direction;

        let target = self
            .maze
            .neighbor(self.position, direction)
            .filter(|&coords| self.maze[coords].is_traversable());

        let moved = if let Some(coords) = target {
            log::trace!("Move {:?} from {:?} to {:?}", direction, self.position, coords);
            self.position = coords;
            true
        } else {
            log::trace!("Move {:?} from {:?} blocked", direction, self.position);
            false
        };

        match (self.tile(), moved) {
            (TileKind::Finish, _) => MoveOutcome::Finished,
            (_, true) => MoveOutcome::Moved,
            (_, false) => MoveOutcome::Blocked,
        }
    }
}
