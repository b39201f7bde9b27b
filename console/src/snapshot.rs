use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use proteus_maze_core::{
    BACKGROUND, BUTTON_COLOR, FINISH_COLOR, FLOOR_COLOR, FrameBuffer, LOGO_COLOR, PLAYER_COLOR, START_COLOR,
    WALL_COLOR,
};

/// Side of the square pixel block each preview character stands for.
const CELL: i32 = 8;

fn glyph(color: Rgb565) -> char {
    match color {
        c if c == PLAYER_COLOR => '@',
        c if c == WALL_COLOR => '#',
        c if c == FLOOR_COLOR => '.',
        c if c == START_COLOR => 'S',
        c if c == FINISH_COLOR => 'F',
        c if c == BUTTON_COLOR => '=',
        c if c == LOGO_COLOR => '%',
        c if c == BACKGROUND => ' ',
        _ => '?',
    }
}

/// One character per 8x8 block, sampled at the block center, framed by a border.
pub fn ascii_preview(frame: &FrameBuffer) -> String {
    let Size { width, height } = frame.size();
    let (cols, rows) = (width as i32 / CELL, height as i32 / CELL);
    let border = format!("+{}+", "-".repeat(cols as usize));

    let mut out = String::with_capacity(((cols + 3) * (rows + 2)) as usize);
    out.push_str(&border);
    out.push('\n');
    for row in 0..rows {
        out.push('|');
        for col in 0..cols {
            let center = Point::new(col * CELL + CELL / 2, row * CELL + CELL / 2);
            out.push(frame.pixel(center).map_or(' ', glyph));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// Writes the frame as a binary PPM image.
pub fn write_ppm(frame: &FrameBuffer, path: &Path) -> io::Result<()> {
    let Size { width, height } = frame.size();
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let color = Rgb888::from(frame.pixel(Point::new(x, y)).unwrap_or(Rgb565::BLACK));
            out.write_all(&[color.r(), color.g(), color.b()])?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn preview_maps_colors_to_glyphs() {
        let mut frame = FrameBuffer::new();
        Rectangle::new(Point::new(0, 0), Size::new(16, 8))
            .into_styled(PrimitiveStyle::with_fill(WALL_COLOR))
            .draw(&mut frame)
            .unwrap();

        let preview = ascii_preview(&frame);
        let lines: Vec<_> = preview.lines().collect();

        assert_eq!(lines.len(), 32);
        assert_eq!(lines[0].len(), 42);
        assert!(lines[1].starts_with("|##  "));
    }

    #[test]
    fn ppm_has_header_and_all_pixels() {
        let path = std::env::temp_dir().join(format!("proteus-maze-{}.ppm", std::process::id()));

        write_ppm(&FrameBuffer::new(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let header = b"P6\n320 240\n255\n";
        assert!(bytes.starts_with(header));
        assert_eq!(bytes.len(), header.len() + 320 * 240 * 3);
    }
}
