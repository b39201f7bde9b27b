use alloc::format;
use core::time::Duration;
use embedded_graphics::prelude::*;

use crate::*;

/// How a finished maze session went.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub elapsed: Duration,
    /// Moves that changed the player's position.
    pub moves: u32,
}

impl SessionSummary {
    /// Elapsed time as whole `(minutes, seconds)`.
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let secs = self.elapsed.as_secs();
        (secs / 60, secs % 60)
    }
}

/// Plays `maze` until the player reaches a finish tile.
///
/// Each tap is fully handled, moved and redrawn before the next one is read. Taps away from the
/// screen edges redraw without moving. Once finished, the elapsed time is shown for `win_pause`.
pub fn play_session<H: Hardware + ?Sized>(
    hw: &mut H,
    maze: &MazeGrid,
    win_pause: Duration,
) -> core::result::Result<SessionSummary, H::Error> {
    let mut player = Player::new(maze);
    draw_maze(hw.display(), &player)?;
    hw.present()?;

    let started_at = hw.now();
    let mut moves = 0;
    loop {
        let tap = wait_for_tap(hw)?;
        let before = player.position();
        let outcome = direction_for_touch(tap).map(|direction| player.try_move(direction));
        if player.position() != before {
            moves += 1;
        }

        draw_maze(hw.display(), &player)?;
        hw.present()?;

        if outcome.is_some_and(MoveOutcome::is_completed) {
            break;
        }
    }

    let summary = SessionSummary {
        elapsed: hw.now().saturating_sub(started_at),
        moves,
    };
    let (minutes, seconds) = summary.minutes_seconds();
    log::info!(
        "Maze solved in {}:{:02} with {} moves",
        minutes,
        seconds,
        summary.moves
    );

    draw_win_screen(hw.display(), &summary, win_pause)?;
    hw.present()?;
    hw.sleep(win_pause);

    Ok(summary)
}

fn draw_win_screen<D>(
    target: &mut D,
    summary: &SessionSummary,
    win_pause: Duration,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>,
{
    let (minutes, seconds) = summary.minutes_seconds();
    target.clear(BACKGROUND)?;
    let mut cursor = TextCursor::new(Point::new(4, 4));
    cursor.write_line(target, "Congratulations!")?;
    cursor.write_line(target, "You solved the maze!")?;
    cursor.write_line(target, &format!("Your time was {}:{:02}", minutes, seconds))?;
    cursor.write_line(
        target,
        &format!("Returning to menu in {} seconds...", win_pause.as_secs()),
    )
}
