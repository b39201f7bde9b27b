use std::convert::Infallible;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use proteus_maze_core::{FrameBuffer, Hardware, SCREEN_HEIGHT, SCREEN_WIDTH, TouchPoint};
use thiserror::Error;

use crate::snapshot;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Touch input ended")]
    InputClosed,
    #[error("Line {line}: cannot read a tap from {text:?}")]
    BadTap { line: usize, text: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<Infallible> for HostError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

/// Taps read line by line, either `x y` in screen pixels or one of `u`, `d`, `l`, `r` for the
/// middle of an edge band. Blank lines and `#` comments are skipped.
pub struct TouchScript<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> TouchScript<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// The next tap, `None` once the input is exhausted.
    pub fn next_tap(&mut self) -> Result<Option<TouchPoint>, HostError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if let Some(tap) = parse_tap(&buf).ok_or_else(|| HostError::BadTap {
                line: self.line,
                text: buf.trim().to_string(),
            })? {
                return Ok(Some(tap));
            }
        }
    }
}

/// `None` for malformed lines, `Some(None)` for lines without a tap.
fn parse_tap(line: &str) -> Option<Option<TouchPoint>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let (width, height) = (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let tap = match line {
        "" => return Some(None),
        "u" => TouchPoint::new(width / 2.0, 20.0),
        "d" => TouchPoint::new(width / 2.0, height - 20.0),
        "l" => TouchPoint::new(20.0, height / 2.0),
        "r" => TouchPoint::new(width - 20.0, height / 2.0),
        _ => {
            let mut parts = line.split_whitespace().map(str::parse::<f32>);
            let (Some(Ok(x)), Some(Ok(y)), None) = (parts.next(), parts.next(), parts.next()) else {
                return None;
            };
            TouchPoint::new(x, y)
        }
    };
    Some(Some(tap))
}

/// Runs the game against a framebuffer, printing every frame to stdout as text.
pub struct TerminalHardware<R> {
    frame: FrameBuffer,
    touches: TouchScript<R>,
    touching: bool,
    boot: Instant,
    frames_dir: Option<PathBuf>,
    frame_count: usize,
}

impl<R: BufRead> TerminalHardware<R> {
    pub fn new(touches: TouchScript<R>, frames_dir: Option<PathBuf>) -> Result<Self, HostError> {
        if let Some(dir) = &frames_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self {
            frame: FrameBuffer::new(),
            touches,
            touching: false,
            boot: Instant::now(),
            frames_dir,
            frame_count: 0,
        })
    }
}

impl<R: BufRead> Hardware for TerminalHardware<R> {
    type Display = FrameBuffer;
    type Error = HostError;

    fn display(&mut self) -> &mut Self::Display {
        &mut self.frame
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.frame_count += 1;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", snapshot::ascii_preview(&self.frame))?;
        out.flush()?;

        if let Some(dir) = &self.frames_dir {
            let path = dir.join(format!("frame-{:05}.ppm", self.frame_count));
            snapshot::write_ppm(&self.frame, &path)?;
            log::trace!("Wrote {}", path.display());
        }
        Ok(())
    }

    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, Self::Error> {
        // every tap is reported as touched once, then released
        if self.touching {
            self.touching = false;
            return Ok(None);
        }
        let tap = self.touches.next_tap()?.ok_or(HostError::InputClosed)?;
        self.touching = true;
        Ok(Some(tap))
    }

    fn now(&self) -> Duration {
        self.boot.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_reads_coordinates_and_shorthands() {
        let input = "# menu\n50 130\n\nr\n  u  \n12.5 7 # comment\n";
        let mut script = TouchScript::new(input.as_bytes());

        assert_eq!(script.next_tap().unwrap(), Some(TouchPoint::new(50.0, 130.0)));
        assert_eq!(script.next_tap().unwrap(), Some(TouchPoint::new(300.0, 120.0)));
        assert_eq!(script.next_tap().unwrap(), Some(TouchPoint::new(160.0, 20.0)));
        assert_eq!(script.next_tap().unwrap(), Some(TouchPoint::new(12.5, 7.0)));
        assert_eq!(script.next_tap().unwrap(), None);
    }

    #[test]
    fn script_reports_bad_lines() {
        let mut script = TouchScript::new("1 2\n1 2 3\n".as_bytes());

        script.next_tap().unwrap();
        let err = script.next_tap().unwrap_err();

        assert!(matches!(err, HostError::BadTap { line: 2, .. }));
    }

    #[test]
    fn hardware_taps_touch_then_release() {
        let script = TouchScript::new("l\n".as_bytes());
        let mut hw = TerminalHardware::new(script, None).unwrap();

        assert_eq!(hw.poll_touch().unwrap(), Some(TouchPoint::new(20.0, 120.0)));
        assert_eq!(hw.poll_touch().unwrap(), None);
        assert!(matches!(hw.poll_touch(), Err(HostError::InputClosed)));
    }
}
