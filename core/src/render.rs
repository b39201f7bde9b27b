use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
};

use crate::*;

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const WALL_COLOR: Rgb565 = Rgb565::RED;
pub const FLOOR_COLOR: Rgb565 = Rgb565::new(26, 52, 26);
pub const START_COLOR: Rgb565 = Rgb565::GREEN;
pub const FINISH_COLOR: Rgb565 = Rgb565::YELLOW;
pub const PLAYER_COLOR: Rgb565 = Rgb565::new(29, 32, 29);

/// Whole tiles that fit across the screen.
pub const VIEW_COLUMNS: i32 = SCREEN_WIDTH / TILE_SIZE;
/// Whole tiles that fit down the screen.
pub const VIEW_ROWS: i32 = SCREEN_HEIGHT / TILE_SIZE;

/// Screen position of the player tile's top-left corner; the player tile is centered on screen.
const CENTER_TILE: Point = Point::new(
    (SCREEN_WIDTH - TILE_SIZE) / 2,
    (SCREEN_HEIGHT - TILE_SIZE) / 2,
);

pub const fn tile_color(tile: TileKind) -> Rgb565 {
    use TileKind::*;
    match tile {
        Wall => WALL_COLOR,
        Floor => FLOOR_COLOR,
        Start => START_COLOR,
        Finish => FINISH_COLOR,
        Empty | Other(_) => BACKGROUND,
    }
}

/// A maze cell inside the viewport together with where it lands on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibleTile {
    pub coords: Coord2,
    pub tile: TileKind,
    pub top_left: Point,
}

/// Maze cells around the player that land on screen, in column-major order.
///
/// Cells up to half a viewport away in each direction are included, which also covers the partially
/// visible tiles along the screen edges. Cells outside the maze are skipped.
pub fn visible_tiles<'a>(player: &Player<'a>) -> impl Iterator<Item = VisibleTile> + use<'a> {
    let maze = player.maze();
    let (px, py) = player.position();
    let (px, py) = (i32::from(px), i32::from(py));
    let (half_cols, half_rows) = (VIEW_COLUMNS / 2, VIEW_ROWS / 2);

    (px - half_cols..=px + half_cols)
        .flat_map(move |col| (py - half_rows..=py + half_rows).map(move |row| (col, row)))
        .filter_map(move |(col, row)| {
            let coords = (Coord::try_from(col).ok()?, Coord::try_from(row).ok()?);
            if !maze.contains(coords) {
                return None;
            }
            Some(VisibleTile {
                coords,
                tile: maze[coords],
                top_left: CENTER_TILE + Point::new((col - px) * TILE_SIZE, (row - py) * TILE_SIZE),
            })
        })
}

/// Draws the viewport centered on `player`, then the player sprite on top.
pub fn draw_maze<D>(target: &mut D, player: &Player) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BACKGROUND)?;

    for visible in visible_tiles(player) {
        Rectangle::new(visible.top_left, Size::new_equal(TILE_SIZE as u32))
            .into_styled(PrimitiveStyle::with_fill(tile_color(visible.tile)))
            .draw(target)?;
    }

    draw_avatar(target, player.facing())
}

/// A small square with a triangle outline pointing where the player faces.
fn draw_avatar<D>(target: &mut D, facing: Direction) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mid = CENTER_TILE + Point::new_equal(TILE_SIZE / 2 - 1);
    let low = CENTER_TILE + Point::new_equal(2);
    let high = CENTER_TILE + Point::new_equal(TILE_SIZE - 4);

    Rectangle::with_center(mid, Size::new_equal(8))
        .into_styled(PrimitiveStyle::with_fill(PLAYER_COLOR))
        .draw(target)?;

    let (tip, base_a, base_b) = match facing {
        Direction::Up => (
            Point::new(mid.x, low.y),
            Point::new(high.x, high.y),
            Point::new(low.x, high.y),
        ),
        Direction::Down => (
            Point::new(mid.x, high.y),
            Point::new(high.x, low.y),
            Point::new(low.x, low.y),
        ),
        Direction::Right => (
            Point::new(high.x, mid.y),
            Point::new(low.x, low.y),
            Point::new(low.x, high.y),
        ),
        Direction::Left => (
            Point::new(low.x, mid.y),
            Point::new(high.x, low.y),
            Point::new(high.x, high.y),
        ),
    };

    Triangle::new(tip, base_a, base_b)
        .into_styled(PrimitiveStyle::with_stroke(PLAYER_COLOR, 1))
        .draw(target)
}
