//! Scripted hardware for driving the game loop in tests.

use alloc::collections::VecDeque;
use core::convert::Infallible;
use core::time::Duration;

use crate::*;

#[derive(Debug, PartialEq)]
pub(crate) enum ScriptError {
    OutOfTaps,
}

impl From<Infallible> for ScriptError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

/// Plays back a list of taps, each one second after the previous, as touch-down then release.
pub(crate) struct ScriptedHardware {
    pub frame: FrameBuffer,
    pub presented: usize,
    pub slept: Duration,
    taps: VecDeque<TouchPoint>,
    touching: bool,
    clock: Duration,
}

impl ScriptedHardware {
    pub fn new(taps: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self {
            frame: FrameBuffer::new(),
            presented: 0,
            slept: Duration::ZERO,
            taps: taps.into_iter().map(|(x, y)| TouchPoint::new(x, y)).collect(),
            touching: false,
            clock: Duration::ZERO,
        }
    }

    pub fn taps_left(&self) -> usize {
        self.taps.len()
    }
}

impl Hardware for ScriptedHardware {
    type Display = FrameBuffer;
    type Error = ScriptError;

    fn display(&mut self) -> &mut Self::Display {
        &mut self.frame
    }

    fn present(&mut self) -> core::result::Result<(), Self::Error> {
        self.presented += 1;
        Ok(())
    }

    fn poll_touch(&mut self) -> core::result::Result<Option<TouchPoint>, Self::Error> {
        if self.touching {
            self.touching = false;
            return Ok(None);
        }
        let tap = self.taps.pop_front().ok_or(ScriptError::OutOfTaps)?;
        self.touching = true;
        self.clock += Duration::from_secs(1);
        Ok(Some(tap))
    }

    fn now(&self) -> Duration {
        self.clock
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
        self.clock += duration;
    }
}
