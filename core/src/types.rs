use serde::{Deserialize, Serialize};

/// Single coordinate axis used for maze width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(column, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Facing and movement direction, clockwise from the top of the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Up
    }
}

/// Moves `coords` one cell towards `direction`, returning a value only when it remains in bounds.
pub fn step(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = direction.delta();
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}
