use serde::{Deserialize, Serialize};

/// Classification of a single maze cell, as stored in maze resources.
///
/// `Empty` marks cells that are not part of the maze at all. It blocks movement just like `Wall`,
/// so a maze does not need to be fenced in for the player to stay on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Floor,
    Wall,
    Start,
    Finish,
    /// Code with no assigned meaning, kept as read.
    Other(i32),
}

impl TileKind {
    pub const fn from_code(code: i32) -> Self {
        use TileKind::*;
        match code {
            0 => Empty,
            1 => Floor,
            2 => Wall,
            3 => Start,
            4 => Finish,
            other => Other(other),
        }
    }

    pub const fn code(self) -> i32 {
        use TileKind::*;
        match self {
            Empty => 0,
            Floor => 1,
            Wall => 2,
            Start => 3,
            Finish => 4,
            Other(code) => code,
        }
    }

    /// Whether the player may stand on this tile. Unrecognized codes are walkable.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Empty | Self::Wall)
    }
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Empty
    }
}
