use alloc::string::ToString;
use core::num::IntErrorKind;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable tile layout of a single maze, indexed by `(column, row)`.
///
/// Serialized as its tile array only; deserializing runs the same checks as [`MazeGrid::from_tiles`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<TileKind>", into = "Array2<TileKind>")]
pub struct MazeGrid {
    tiles: Array2<TileKind>,
    start: Coord2,
}

impl MazeGrid {
    /// Builds a maze from a `(width, height)` shaped tile array.
    ///
    /// Fails when either dimension exceeds [`MAZE_MAX`], when there is not exactly one start tile, or
    /// when there is no finish tile.
    pub fn from_tiles(tiles: Array2<TileKind>) -> Result<Self> {
        let (width, height) = tiles.dim();
        check_size(width as u64, height as u64)?;

        let mut starts = tiles
            .indexed_iter()
            .filter(|&(_, &tile)| tile == TileKind::Start)
            .map(|((x, y), _)| (x as Coord, y as Coord));
        let start = starts.next().ok_or(DefinitionError::MissingStart)?;
        let extra_starts = starts.count();
        if extra_starts > 0 {
            return Err(DefinitionError::MultipleStarts {
                count: extra_starts + 1,
            }
            .into());
        }

        if !tiles.iter().any(|&tile| tile == TileKind::Finish) {
            return Err(DefinitionError::MissingFinish.into());
        }

        Ok(Self { tiles, start })
    }

    /// Parses the whitespace separated maze format: `width height` followed by `width * height`
    /// tile codes, all rows of column 0 first, then column 1, and so on.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_ascii_whitespace();

        let width = parse_dimension(tokens.next())?;
        let height = parse_dimension(tokens.next())?;
        check_size(width, height)?;
        let (width, height) = (width as usize, height as usize);

        let expected = width * height;
        let mut tiles = Array2::from_elem([width, height], TileKind::Empty);
        for (found, tile) in tiles.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or(MalformedReason::MissingTiles { expected, found })?;
            *tile = TileKind::from_code(parse_int(token)?);
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::warn!("Ignoring {} trailing tokens after {}x{} maze", trailing, width, height);
        }

        Self::from_tiles(tiles)
    }

    pub fn load<S: MazeSource + ?Sized>(source: &mut S, name: &str) -> Result<Self> {
        let text = source.read_text(name)?;
        let maze = Self::parse(&text)?;
        log::info!("Loaded maze {} ({}x{})", name, maze.width(), maze.height());
        Ok(maze)
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.tiles.dim();
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// Tile at `coords`, `Empty` for anything outside the maze.
    pub fn tile_at(&self, coords: Coord2) -> TileKind {
        self.tiles
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(TileKind::Empty)
    }

    /// The cell next to `coords` towards `direction`, if it is inside the maze.
    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        step(coords, direction, self.size())
    }
}

impl TryFrom<Array2<TileKind>> for MazeGrid {
    type Error = MazeError;

    fn try_from(tiles: Array2<TileKind>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<MazeGrid> for Array2<TileKind> {
    fn from(maze: MazeGrid) -> Self {
        maze.tiles
    }
}

impl Index<Coord2> for MazeGrid {
    type Output = TileKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

fn parse_int(token: &str) -> Result<i32> {
    token.parse().map_err(|_| {
        MalformedReason::InvalidToken {
            token: token.to_string(),
        }
        .into()
    })
}

/// Reads a width or height. Values too big for any integer type saturate, so they still fail the
/// size check instead of reading as garbage.
fn parse_dimension(token: Option<&str>) -> Result<u64> {
    let token = token.ok_or(MalformedReason::MissingDimensions)?;
    match token.parse::<i64>() {
        Ok(value) => u64::try_from(value).map_err(|_| MalformedReason::NegativeDimension.into()),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(u64::MAX),
            IntErrorKind::NegOverflow => Err(MalformedReason::NegativeDimension.into()),
            _ => Err(MalformedReason::InvalidToken {
                token: token.to_string(),
            }
            .into()),
        },
    }
}

fn check_size(width: u64, height: u64) -> Result<()> {
    let max = u64::from(MAZE_MAX);
    if width > max || height > max {
        return Err(MalformedReason::TooLarge { width, height }.into());
    }
    Ok(())
}
