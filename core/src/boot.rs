use alloc::format;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::*;

const BOOT_ORIGIN: Point = Point::new(4, 4);

/// Loads the catalog while listing every maze on screen as `Loading <name>...Done`.
///
/// The outer error comes from the hardware, the inner one from the catalog itself. The listing is
/// presented once, after the last maze.
pub fn load_catalog<H, S>(
    hw: &mut H,
    source: &mut S,
    manifest: &CatalogManifest,
) -> core::result::Result<Result<MazeCatalog>, H::Error>
where
    H: Hardware + ?Sized,
    S: MazeSource + ?Sized,
{
    let display = hw.display();
    display.clear(BACKGROUND)?;

    let mut cursor = TextCursor::new(BOOT_ORIGIN);
    let mut drawn: core::result::Result<(), <H::Display as DrawTarget>::Error> = Ok(());
    let catalog = MazeCatalog::load_with(source, manifest, |name, loaded| {
        if drawn.is_ok() {
            drawn = write_status(display, &mut cursor, name, loaded.is_ok());
        }
    });
    drawn?;

    hw.present()?;
    Ok(catalog)
}

fn write_status<D>(
    target: &mut D,
    cursor: &mut TextCursor,
    name: &str,
    loaded: bool,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // start over at the top once the screen is full
    if cursor.position().y + TextCursor::LINE_HEIGHT > SCREEN_HEIGHT {
        target.clear(BACKGROUND)?;
        *cursor = TextCursor::new(BOOT_ORIGIN);
    }
    let status = if loaded { "Done" } else { "Failed" };
    cursor.write_line(target, &format!("Loading {}...{}", name, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedHardware;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use core::iter;
    use embedded_graphics::primitives::{PointsIter, Rectangle};

    fn source() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("easy/1.txt", "2 1 3 4"),
            ("medium/1.txt", "3 1 3 1 4"),
            ("hard/1.txt", "4 1 3 1 1 4"),
        ])
    }

    fn manifest() -> CatalogManifest {
        CatalogManifest {
            easy: vec!["easy/1.txt".into()],
            medium: vec!["medium/1.txt".into()],
            hard: vec!["hard/1.txt".into()],
        }
    }

    fn has_text(frame: &FrameBuffer, area: Rectangle) -> bool {
        area.points().any(|point| frame.pixel(point) == Some(TEXT_COLOR))
    }

    fn line(index: i32) -> Rectangle {
        Rectangle::new(
            Point::new(0, BOOT_ORIGIN.y + index * TextCursor::LINE_HEIGHT),
            Size::new(SCREEN_WIDTH as u32, 10),
        )
    }

    #[test]
    fn lists_each_maze_then_presents_once() {
        let mut hw = ScriptedHardware::new([]);

        let catalog = load_catalog(&mut hw, &mut source(), &manifest()).unwrap().unwrap();

        assert_eq!(catalog.tier(Difficulty::Hard).len(), 1);
        assert_eq!(hw.presented, 1);
        for index in 0..3 {
            assert!(has_text(&hw.frame, line(index)), "line {}", index);
        }
        assert!(!has_text(&hw.frame, line(3)));
    }

    #[test]
    fn catalog_errors_are_inner() {
        let mut hw = ScriptedHardware::new([]);
        let mut manifest = manifest();
        manifest.medium = vec!["medium/9.txt".into()];

        let err = load_catalog(&mut hw, &mut source(), &manifest).unwrap().unwrap_err();

        assert_eq!(err, MazeError::EmptyTier(Difficulty::Medium));
        // failures are listed too
        assert!(has_text(&hw.frame, line(1)));
    }

    #[test]
    fn listing_wraps_to_top_when_screen_is_full() {
        let mut hw = ScriptedHardware::new([]);
        let mut manifest = manifest();
        // sixteen lines fit, the seventeenth starts a fresh screen
        manifest.easy = iter::once("easy/1.txt")
            .chain(iter::repeat_n("easy/x.txt", 14))
            .map(String::from)
            .collect();

        load_catalog(&mut hw, &mut source(), &manifest).unwrap().unwrap();

        assert!(has_text(&hw.frame, line(0)));
        assert!(!has_text(&hw.frame, line(1)));
        assert!(!has_text(&hw.frame, line(15)));
    }
}
