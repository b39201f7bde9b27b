use core::convert::Infallible;
use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::{Rgb565, RgbColor},
    primitives::{PointsIter, Rectangle},
};
use ndarray::Array2;

use crate::*;

/// In-memory 320x240 RGB565 screen, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: Array2<Rgb565>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: Array2::from_elem(
                [SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize],
                Rgb565::BLACK,
            ),
        }
    }

    /// Colour at `point`, `None` when it is off screen.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        self.pixels.get([x, y]).copied()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        let (width, height) = self.pixels.dim();
        Size::new(width as u32, height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if let Some(pixel) = self.pixels.get_mut([x, y]) {
                *pixel = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> core::result::Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        for point in area.points() {
            self.pixels[[point.x as usize, point.y as usize]] = color;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> core::result::Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{prelude::*, primitives::PrimitiveStyle};

    #[test]
    fn draws_are_clipped_to_screen() {
        let mut frame = FrameBuffer::new();

        Rectangle::new(Point::new(-10, -10), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut frame)
            .unwrap();

        assert_eq!(frame.pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(frame.pixel(Point::new(9, 9)), Some(Rgb565::RED));
        assert_eq!(frame.pixel(Point::new(10, 10)), Some(Rgb565::BLACK));
        assert_eq!(frame.pixel(Point::new(-1, 0)), None);
        assert_eq!(frame.pixel(Point::new(320, 0)), None);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = FrameBuffer::new();

        frame.clear(Rgb565::BLUE).unwrap();

        assert_eq!(frame.pixel(Point::new(319, 239)), Some(Rgb565::BLUE));
        assert_eq!(frame.size(), Size::new(320, 240));
    }
}
