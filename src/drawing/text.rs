//! Tiny 5x7 bitmap font, enough for status lines drawn onto the canvas.

use {
  super::blend_over,
  crate::geometry::P2,
  image::{Rgba, RgbaImage}
};

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

fn glyph_5x7(c: char) -> [u8; 7] {
  match c {
    'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
    'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
    'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
    'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
    'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
    'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
    'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
    'J' => [0b11111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
    'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
    'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
    'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
    'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
    'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
    'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
    'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
    'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
    'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
    'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
    'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],

    '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
    '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    '5' => [0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110],
    '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],

    ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
    '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100],
    '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
    '/' => [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000],
    _ => [0; 7],
  }
}

/// Width in pixels of one line of text.
pub fn line_width(text: &str, scale: u32) -> u32 {
  let n = text.chars().count() as u32;
  match n {
    0 => 0,
    n => (n * (GLYPH_W + 1) - 1) * scale.max(1)
  }
}

/// Draw `text` centered on `center`, one row per `\n`. Lowercase is drawn as uppercase.
/// Returns the number of pixels written.
pub fn draw_text_centered(
  image: &mut RgbaImage,
  text: &str,
  center: P2,
  scale: u32,
  color: Rgba<u8>
) -> usize {
  let scale = scale.max(1) as i64;
  let line_height = (GLYPH_H as i64 + 2) * scale;
  let lines = text.lines().collect::<Vec<_>>();
  let total_height = lines.len() as i64 * line_height - 2 * scale;
  let (w, h) = (image.width() as i64, image.height() as i64);
  let mut written = 0;

  for (row, line) in lines.iter().enumerate() {
    let mut x = center.x.round() as i64 - line_width(line, scale as u32) as i64 / 2;
    let y = center.y.round() as i64 - total_height / 2 + row as i64 * line_height;

    for c in line.chars().map(|c| c.to_ascii_uppercase()) {
      for (gy, bits) in glyph_5x7(c).iter().enumerate() {
        for gx in 0..GLYPH_W as i64 {
          if (bits >> (GLYPH_W as i64 - 1 - gx)) & 1 == 0 {
            continue;
          }
          for (sx, sy) in itertools::iproduct!(0..scale, 0..scale) {
            let px = x + gx * scale + sx;
            let py = y + gy as i64 * scale + sy;
            if px < 0 || py < 0 || px >= w || py >= h {
              continue;
            }
            let pixel = image.get_pixel_mut(px as u32, py as u32);
            *pixel = blend_over(*pixel, color);
            written += 1;
          }
        }
      }
      x += (GLYPH_W as i64 + 1) * scale;
    }
  }
  written
}
