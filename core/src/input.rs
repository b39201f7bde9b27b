use crate::*;

/// Width of the touch bands along each screen edge that steer the player.
pub const CONTROL_BAND: f32 = 40.0;

/// Touch position in screen pixels, as reported by the touch panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps a touch to a movement direction.
///
/// Bands are checked top, bottom, left, right, so corners steer vertically. Touches in the middle
/// of the screen map to nothing.
pub fn direction_for_touch(point: TouchPoint) -> Option<Direction> {
    let TouchPoint { x, y } = point;
    if y <= CONTROL_BAND {
        Some(Direction::Up)
    } else if y >= SCREEN_HEIGHT as f32 - CONTROL_BAND {
        Some(Direction::Down)
    } else if x <= CONTROL_BAND {
        Some(Direction::Left)
    } else if x >= SCREEN_WIDTH as f32 - CONTROL_BAND {
        Some(Direction::Right)
    } else {
        None
    }
}
