#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use app::*;
pub use boot::*;
pub use catalog::*;
pub use error::*;
pub use frame::*;
pub use grid::*;
pub use input::*;
pub use menu::*;
pub use platform::*;
pub use player::*;
pub use render::*;
pub use session::*;
pub use text::*;
pub use tile::*;
pub use types::*;

mod app;
mod boot;
mod catalog;
mod error;
mod frame;
mod grid;
mod input;
mod menu;
mod platform;
mod player;
mod render;
mod session;
mod text;
mod tile;
mod types;

#[cfg(test)]
mod testing;

pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;
pub const TILE_SIZE: i32 = 20;

/// Largest accepted maze width and height.
pub const MAZE_MAX: Coord = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for maze selection, random when unset
    pub seed: Option<u64>,
    /// How long the result stays on screen after solving a maze
    pub win_pause_secs: u32,
    pub catalog: CatalogManifest,
}

impl Settings {
    pub fn win_pause(&self) -> Duration {
        Duration::from_secs(self.win_pause_secs.into())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            win_pause_secs: 5,
            catalog: CatalogManifest::default(),
        }
    }
}
