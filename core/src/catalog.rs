use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Resource names of the mazes in each difficulty tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogManifest {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl CatalogManifest {
    pub fn tier(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn numbered(difficulty: Difficulty, count: usize) -> Vec<String> {
        (1..=count)
            .map(|n| format!("{}/{}.txt", difficulty.name(), n))
            .collect()
    }
}

impl Default for CatalogManifest {
    fn default() -> Self {
        Self {
            easy: Self::numbered(Difficulty::Easy, 7),
            medium: Self::numbered(Difficulty::Medium, 4),
            hard: Self::numbered(Difficulty::Hard, 2),
        }
    }
}

/// Every loaded maze, grouped by difficulty. Each tier holds at least one maze.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeCatalog {
    tiers: [Vec<MazeGrid>; 3],
}

impl MazeCatalog {
    pub fn new(easy: Vec<MazeGrid>, medium: Vec<MazeGrid>, hard: Vec<MazeGrid>) -> Result<Self> {
        let catalog = Self {
            tiers: [easy, medium, hard],
        };
        for difficulty in Difficulty::ALL {
            if catalog.tier(difficulty).is_empty() {
                return Err(MazeError::EmptyTier(difficulty));
            }
        }
        Ok(catalog)
    }

    /// Loads every maze named in `manifest`.
    ///
    /// A maze that fails to load is logged and left out; only a tier left without any maze is an
    /// error.
    pub fn load<S: MazeSource + ?Sized>(source: &mut S, manifest: &CatalogManifest) -> Result<Self> {
        Self::load_with(source, manifest, |_, _| {})
    }

    /// Like [`MazeCatalog::load`], calling `on_load` with the name and result of every maze as it
    /// is read.
    pub fn load_with<S, F>(source: &mut S, manifest: &CatalogManifest, mut on_load: F) -> Result<Self>
    where
        S: MazeSource + ?Sized,
        F: FnMut(&str, &Result<MazeGrid>),
    {
        let easy = load_tier(source, manifest.tier(Difficulty::Easy), &mut on_load);
        let medium = load_tier(source, manifest.tier(Difficulty::Medium), &mut on_load);
        let hard = load_tier(source, manifest.tier(Difficulty::Hard), &mut on_load);
        Self::new(easy, medium, hard)
    }

    pub fn tier(&self, difficulty: Difficulty) -> &[MazeGrid] {
        &self.tiers[difficulty.index()]
    }

    /// Picks a maze from the tier using a random `draw`, uniformly over the tier.
    pub fn pick(&self, difficulty: Difficulty, draw: u32) -> &MazeGrid {
        let tier = self.tier(difficulty);
        &tier[draw as usize % tier.len()]
    }
}

fn load_tier<S, F>(source: &mut S, names: &[String], on_load: &mut F) -> Vec<MazeGrid>
where
    S: MazeSource + ?Sized,
    F: FnMut(&str, &Result<MazeGrid>),
{
    let mut mazes = Vec::with_capacity(names.len());
    for name in names {
        let loaded = MazeGrid::load(source, name);
        on_load(name, &loaded);
        match loaded {
            Ok(maze) => mazes.push(maze),
            Err(err) => log::error!("Skipping maze {}: {}", name, err),
        }
    }
    mazes
}
