use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Menu loop of the game: draws the current screen, waits for a tap, and follows the pressed button.
pub struct App<H> {
    hw: H,
    catalog: MazeCatalog,
    rng: SmallRng,
    state: MenuState,
    settings: Settings,
}

impl<H: Hardware> App<H> {
    pub fn new(hw: H, catalog: MazeCatalog, settings: Settings, seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        log::debug!("seed: {}", seed);
        Self {
            hw,
            catalog,
            rng: SmallRng::seed_from_u64(seed),
            state: MenuState::TopMenu,
            settings,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Runs until Quit is pressed, leaving the final screen up.
    pub fn run(mut self) -> core::result::Result<H, H::Error> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.state.draw(self.hw.display())?;
        self.hw.present()?;
        log::info!("Terminated");
        Ok(self.hw)
    }

    /// Handles a single tap on the current screen. Returns the summary when the tap started a maze
    /// session, which has then been played to completion.
    pub fn step(&mut self) -> core::result::Result<Option<SessionSummary>, H::Error> {
        // drawn on every redraw and used by whichever tier gets picked
        let draw: u32 = self.rng.random();

        self.state.draw(self.hw.display())?;
        self.hw.present()?;

        let tap = wait_for_tap(&mut self.hw)?;
        let Some(button) = self.state.hit(tap) else {
            log::trace!("Tap missed every button on {:?}", self.state);
            return Ok(None);
        };

        match button.on_press {
            Transition::Goto(next) => {
                log::debug!("{:?} -> {:?} ({})", self.state, next, button.label);
                self.state = next;
                Ok(None)
            }
            Transition::Play(difficulty) => {
                let maze = self.catalog.pick(difficulty, draw);
                log::debug!(
                    "Starting {} maze {}x{}",
                    difficulty.name(),
                    maze.width(),
                    maze.height()
                );
                let summary = play_session(&mut self.hw, maze, self.settings.win_pause())?;
                self.state = MenuState::TopMenu;
                Ok(Some(summary))
            }
        }
    }
}
