use anyhow::Context;
use clap::Parser;
use proteus_maze_core::{App, load_catalog};

use crate::config::Args;
use crate::hardware::{TerminalHardware, TouchScript};
use crate::source::DirSource;

mod config;
mod hardware;
mod snapshot;
mod source;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    log::debug!("settings: {:?}", settings);

    let touches = TouchScript::new(args.touch_input()?);
    let mut hw = TerminalHardware::new(touches, args.frames.clone())?;

    let mut source = DirSource::new(&args.mazes);
    let catalog = load_catalog(&mut hw, &mut source, &settings.catalog)?
        .with_context(|| format!("Could not load mazes from {}", args.mazes.display()))?;

    log::info!("App started");
    App::new(hw, catalog, settings, rand::random()).run()?;
    Ok(())
}
