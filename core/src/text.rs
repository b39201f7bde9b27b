use embedded_graphics::{
    mono_font::{
        MonoTextStyle, MonoTextStyleBuilder,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    text::{Baseline, Text},
};

pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
pub const LABEL_COLOR: Rgb565 = Rgb565::BLACK;
pub const LABEL_BACKGROUND: Rgb565 = Rgb565::WHITE;

/// Writes lines of small text downwards from an origin, console style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextCursor {
    position: Point,
}

impl TextCursor {
    pub const LINE_HEIGHT: i32 = 14;

    pub const fn new(origin: Point) -> Self {
        Self { position: origin }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn write_line<D>(&mut self, target: &mut D, line: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = MonoTextStyle::new(&FONT_6X10, TEXT_COLOR);
        Text::with_baseline(line, self.position, style, Baseline::Top).draw(target)?;
        self.position.y += Self::LINE_HEIGHT;
        Ok(())
    }
}

/// Large black-on-white button text with its top-left corner at `top_left`.
pub fn write_label<D>(target: &mut D, label: &str, top_left: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(LABEL_COLOR)
        .background_color(LABEL_BACKGROUND)
        .build();
    Text::with_baseline(label, top_left, style, Baseline::Top).draw(target)?;
    Ok(())
}
