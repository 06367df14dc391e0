//! Rasterisation of signed distance fields onto an [`RgbaImage`].
//!
//! Anything implementing [`Rasterize`] renders itself into a [`Patch`]: a small buffer
//! covering only its bounding box. Patches are independent of the target image, so a batch
//! of them can be produced in parallel and composited afterwards in a fixed order, see
//! [`draw_parallel`].

use {
  crate::geometry::{CanvasSpace, PixelSpace, Shape, Segment, P2},
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*
};

mod impl_draw_rgbaimage;
pub mod text;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

pub trait Rasterize {
  /// Render into a patch clipped to `resolution`. `None` if nothing is visible.
  fn rasterize(&self, resolution: Size2D<u32, PixelSpace>) -> Option<Patch>;
}

impl <T> Draw<RgbaImage> for T where T: Rasterize + ?Sized {
  fn draw(&self, image: &mut RgbaImage) {
    if let Some(patch) = self.rasterize(image.dimensions().into()) {
      patch.composite(image);
    }
  }
}

/// Rendered pixels of one primitive, positioned on the target image.
#[derive(Debug, Clone)]
pub struct Patch {
  pub origin: Point2D<u32, PixelSpace>,
  pub buffer: RgbaImage
}

impl Patch {
  /// Alpha-blend the patch over `image`, clipping whatever falls outside.
  pub fn composite(&self, image: &mut RgbaImage) {
    let (w, h) = image.dimensions();
    let (x0, y0) = (self.origin.x, self.origin.y);
    self.buffer.enumerate_pixels()
      .filter(|(x, y, _)| x0 + x < w && y0 + y < h)
      .for_each(|(x, y, top)| {
        let bottom = image.get_pixel_mut(x0 + x, y0 + y);
        *bottom = blend_over(*bottom, *top);
      });
  }
}

/// `top` over `bottom`. Exact when either side is fully transparent or `top` is opaque.
pub fn blend_over(mut bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
  match (bottom.0[3], top.0[3]) {
    (_, 0) => bottom,
    (0, _) | (_, 255) => top,
    _ => {
      bottom.blend(&top);
      bottom
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
  pub fill: Option<Rgba<u8>>,
  pub stroke: Option<Rgba<u8>>,
  pub stroke_width: f32
}

impl Paint {
  pub fn fill(color: Rgba<u8>) -> Self {
    Paint { fill: Some(color), stroke: None, stroke_width: 0.0 }
  }
  pub fn stroke(color: Rgba<u8>, width: f32) -> Self {
    Paint { fill: None, stroke: Some(color), stroke_width: width }
  }
  pub fn with_stroke(self, color: Rgba<u8>, width: f32) -> Self {
    Paint { stroke: Some(color), stroke_width: width, ..self }
  }
}

/// A shape together with the way it is painted.
#[derive(Debug, Copy, Clone)]
pub struct Styled<S> {
  pub shape: S,
  pub paint: Paint
}

pub fn line(a: P2, b: P2, color: Rgba<u8>, width: f32) -> Styled<Segment> {
  Segment { a, b }.paint(Paint::stroke(color, width))
}

pub fn background(image: &mut RgbaImage, color: Rgba<u8>) {
  image.pixels_mut().for_each(|pixel| *pixel = color);
}

/// Rasterise every item in parallel, then composite in iteration order.
pub fn draw_parallel<R>(image: &mut RgbaImage, items: &[R]) -> usize
  where R: Rasterize + Sync
{
  let resolution: Size2D<u32, PixelSpace> = image.dimensions().into();
  let patches = items.par_iter()
    .map(|item| item.rasterize(resolution))
    .collect::<Vec<_>>();
  patches.into_iter()
    .flatten()
    .map(|patch| patch.composite(image))
    .count()
}

// pixels touched by a bounding box grown by `margin`, clipped to the image
pub(crate) fn pixel_bounds(
  bounding_box: Box2D<f32, CanvasSpace>,
  margin: f32,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .inflate(margin, margin)
    .round_out()
    .cast_unit()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .filter(|bounds| !bounds.is_empty())
    .map(|bounds| bounds.to_u32())
}
