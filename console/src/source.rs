use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use proteus_maze_core::{MalformedReason, MazeError, MazeSource};

/// Maze resources stored as files below a root directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl MazeSource for DirSource {
    fn read_text(&mut self, name: &str) -> proteus_maze_core::Result<String> {
        let path = self.root.join(name);
        fs::read_to_string(&path).map_err(|err| {
            log::debug!("Could not read {}: {}", path.display(), err);
            match err.kind() {
                ErrorKind::NotFound => MazeError::ResourceNotFound { name: name.into() },
                ErrorKind::InvalidData => MalformedReason::NotText.into(),
                _ => MazeError::Unreadable {
                    name: name.into(),
                    reason: err.to_string(),
                },
            }
        })
    }
}
