use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::time::Duration;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::*;

/// Read-only store of maze resources, addressed by name such as `easy/1.txt`.
pub trait MazeSource {
    /// Returns the full text of the resource, or [`MazeError::ResourceNotFound`].
    fn read_text(&mut self, name: &str) -> Result<String>;
}

impl<K, V> MazeSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn read_text(&mut self, name: &str) -> Result<String> {
        self.get(name)
            .map(|text| text.as_ref().into())
            .ok_or_else(|| MazeError::ResourceNotFound { name: name.into() })
    }
}

/// The device the game runs on: a 320x240 display, a touch panel and a clock.
pub trait Hardware {
    type Display: DrawTarget<Color = Rgb565>;
    type Error: Debug + From<<Self::Display as DrawTarget>::Error>;

    fn display(&mut self) -> &mut Self::Display;

    /// Called once a full screen has been drawn.
    fn present(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Current touch position, `None` while nothing touches the panel.
    fn poll_touch(&mut self) -> core::result::Result<Option<TouchPoint>, Self::Error>;

    /// Monotonic time since an arbitrary fixed point.
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

/// Blocks until the panel is touched and released again, returning where it was first touched.
pub fn wait_for_tap<H: Hardware + ?Sized>(hw: &mut H) -> core::result::Result<TouchPoint, H::Error> {
    let point = loop {
        if let Some(point) = hw.poll_touch()? {
            break point;
        }
    };
    while hw.poll_touch()?.is_some() {}
    log::trace!("Tap at ({}, {})", point.x, point.y);
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedHardware;

    #[test]
    fn wait_for_tap_returns_touch_down_point() {
        let mut hw = ScriptedHardware::new([(10.0, 20.0), (30.0, 40.0)]);

        assert_eq!(wait_for_tap(&mut hw).unwrap(), TouchPoint::new(10.0, 20.0));
        assert_eq!(wait_for_tap(&mut hw).unwrap(), TouchPoint::new(30.0, 40.0));
        assert!(wait_for_tap(&mut hw).is_err());
    }

    #[test]
    fn map_source_reads_by_name() {
        let mut source = BTreeMap::from([(String::from("hard/1.txt"), String::from("2 1 3 4"))]);

        assert_eq!(source.read_text("hard/1.txt").unwrap(), "2 1 3 4");
        assert!(matches!(
            source.read_text("hard/2.txt"),
            Err(MazeError::ResourceNotFound { .. })
        ));
    }
}
