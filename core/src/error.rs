use alloc::string::String;
use thiserror::Error;

use crate::Difficulty;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze resource {name:?} not found")]
    ResourceNotFound { name: String },
    #[error("Could not read maze resource {name:?}: {reason}")]
    Unreadable { name: String, reason: String },
    #[error("Malformed maze resource: {0}")]
    MalformedResource(#[from] MalformedReason),
    #[error("Invalid maze: {0}")]
    InvalidMazeDefinition(#[from] DefinitionError),
    #[error("No playable maze left for difficulty {0:?}")]
    EmptyTier(Difficulty),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("not a text file")]
    NotText,
    #[error("missing width or height")]
    MissingDimensions,
    #[error("expected an integer, found {token:?}")]
    InvalidToken { token: String },
    #[error("negative dimension")]
    NegativeDimension,
    #[error("{width}x{height} exceeds the {max}x{max} maximum", max = crate::MAZE_MAX)]
    TooLarge { width: u64, height: u64 },
    #[error("expected {expected} tile codes, found {found}")]
    MissingTiles { expected: usize, found: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("no start tile")]
    MissingStart,
    #[error("{count} start tiles, exactly one is allowed")]
    MultipleStarts { count: usize },
    #[error("no finish tile")]
    MissingFinish,
}

pub type Result<T> = core::result::Result<T, MazeError>;
