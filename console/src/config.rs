use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use proteus_maze_core::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Touchscreen maze game, played in the terminal", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Directory holding the maze files
    #[arg(short, long, default_value = "mazes")]
    pub mazes: PathBuf,

    /// TOML file with game settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Seconds the result stays up after solving a maze
    #[arg(long)]
    pub win_pause: Option<u32>,

    /// Read taps from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Dump every frame as a PPM image into this directory
    #[arg(long)]
    pub frames: Option<PathBuf>,
}

impl Args {
    /// Settings from the config file, if any, with command line overrides applied.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(win_pause) = self.win_pause {
            settings.win_pause_secs = win_pause;
        }
        Ok(settings)
    }

    pub fn touch_input(&self) -> anyhow::Result<Box<dyn BufRead>> {
        Ok(match &self.script {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Could not open touch script {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        })
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
