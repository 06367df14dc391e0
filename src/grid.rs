//! Grid layout: one cell per `g x g` square, where `g` is the GCD of the canvas sides.

use {
  crate::{
    catalog::Catalog,
    error::Result,
    geometry::{PixelSpace, P2},
    util::{gcd, map_range}
  },
  anyhow::ensure,
  euclid::Size2D,
  rand::Rng
};

#[cfg(test)] mod tests;

/// Icon size relative to the smaller cell side.
pub const CELL_FILL: f32 = 0.6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridGeometry {
  pub cols: u32,
  pub rows: u32,
  pub cell_width: f32,
  pub cell_height: f32
}

impl GridGeometry {
  pub fn new(canvas: Size2D<u32, PixelSpace>, g: u32) -> Result<Self> {
    ensure!(g > 0 && canvas.width % g == 0 && canvas.height % g == 0,
      "{} does not divide canvas {}x{}", g, canvas.width, canvas.height);
    let cols = canvas.width / g;
    let rows = canvas.height / g;
    Ok(GridGeometry {
      cols,
      rows,
      cell_width: canvas.width as f32 / cols as f32,
      cell_height: canvas.height as f32 / rows as f32
    })
  }

  /// Geometry with the GCD of the canvas sides as cell size.
  pub fn for_canvas(canvas: Size2D<u32, PixelSpace>) -> Result<Self> {
    ensure!(canvas.width > 0 && canvas.height > 0, "empty canvas {}x{}", canvas.width, canvas.height);
    Self::new(canvas, gcd(canvas.width, canvas.height))
  }

  pub fn cell_count(&self) -> usize {
    self.cols as usize * self.rows as usize
  }

  pub fn cell_center(&self, col: u32, row: u32) -> P2 {
    P2::new(
      col as f32 * self.cell_width + self.cell_width / 2.0,
      row as f32 * self.cell_height + self.cell_height / 2.0
    )
  }

  pub fn icon_size(&self) -> f32 {
    self.cell_width.min(self.cell_height) * CELL_FILL
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
  pub center: P2,
  pub size: f32,
  /// Degrees, `[0, 360)`.
  pub hue: f32,
  pub icon: String,
  /// `[1, 3)`.
  pub base_stroke_width: f32
}

/// Cells in column-major order, icons drawn from `catalog` by weight.
pub fn build_grid<R: Rng>(
  canvas: Size2D<u32, PixelSpace>,
  g: u32,
  catalog: &Catalog,
  rng: &mut R
) -> Result<Vec<Cell>> {
  let geometry = GridGeometry::new(canvas, g)?;
  let sampler = catalog.sampler()?;
  let mut cells = Vec::with_capacity(geometry.cell_count());
  for col in 0..geometry.cols {
    for row in 0..geometry.rows {
      let hue = rng.gen_range(0.0..360.0);
      let icon = sampler.pick(rng).to_string();
      cells.push(Cell {
        center: geometry.cell_center(col, row),
        size: geometry.icon_size(),
        hue,
        icon,
        base_stroke_width: rng.gen_range(1.0..3.0)
      });
    }
  }
  Ok(cells)
}

/// Time-varying stroke width and scale applied to every cell when drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vibration {
  pub speed: f32,
  pub amplitude: f32,
  pub scale_range: (f32, f32)
}

impl Default for Vibration {
  fn default() -> Self {
    Vibration { speed: 0.1, amplitude: 1.5, scale_range: (0.9, 1.1) }
  }
}

impl Vibration {
  pub fn with_speed(speed: f32) -> Self {
    Vibration { speed, ..Self::default() }
  }

  /// Stroke width at `t` seconds; columns oscillate out of phase through the center x.
  pub fn stroke_width(&self, cell: &Cell, t: f32) -> f32 {
    cell.base_stroke_width + (t * self.speed + cell.center.x).sin() * self.amplitude
  }

  /// Linear map of `stroke_width` from `base ± amplitude` onto `scale_range`.
  pub fn scale_factor(&self, cell: &Cell, stroke_width: f32) -> f32 {
    let base = cell.base_stroke_width;
    map_range(
      stroke_width,
      (base - self.amplitude, base + self.amplitude),
      self.scale_range
    )
  }
}
