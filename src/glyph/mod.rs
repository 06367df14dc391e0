//! Named glyphs and the fallback shape set.
//!
//! A [`GlyphSet`] maps icon names onto anything implementing [`Glyph`]. Sets are produced by a
//! [`GlyphProvider`](provider::GlyphProvider) and acquired under a timeout with
//! [`acquire_glyphs`](provider::acquire_glyphs). When no set can be acquired the sketch draws
//! one of four [`FallbackShape`]s per cell instead.

use {
  crate::{
    drawing::{Paint, Patch, Rasterize},
    geometry::{Circle, PixelSpace, Polygon, RoundedRect, Shape, P2},
    util::hash_string
  },
  euclid::{Size2D, Vector2D as V2},
  image::Rgba,
  std::{collections::BTreeMap, fmt, sync::Arc}
};

pub mod bitmap;
pub mod provider;
#[cfg(test)] mod tests;

pub use bitmap::BitmapGlyph;
pub use provider::{acquire_glyphs, Acquisition, BuiltinGlyphs, DirectoryGlyphs, GlyphProvider, NoGlyphs};

/// How a glyph is placed and coloured on the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphStyle {
  pub center: P2,
  /// Diameter of the glyph in pixels.
  pub size: f32,
  pub fill: Rgba<u8>,
  pub stroke: Rgba<u8>,
  pub stroke_width: f32
}

pub trait Glyph: Send + Sync {
  fn rasterize(&self, style: &GlyphStyle, resolution: Size2D<u32, PixelSpace>) -> Option<Patch>;
}

/// A unit shape drawn filled and stroked.
#[derive(Clone)]
pub struct VectorGlyph {
  pub shape: Arc<dyn Shape + Send + Sync>
}

impl VectorGlyph {
  pub fn new(shape: impl Shape + Send + Sync + 'static) -> Self {
    VectorGlyph { shape: Arc::new(shape) }
  }
}

impl Glyph for VectorGlyph {
  fn rasterize(&self, style: &GlyphStyle, resolution: Size2D<u32, PixelSpace>) -> Option<Patch> {
    self.shape.clone()
      .scale(style.size / 2.0)
      .translate(style.center.to_vector())
      .paint(Paint::fill(style.fill).with_stroke(style.stroke, style.stroke_width))
      .rasterize(resolution)
  }
}

/// Name to glyph mapping. Names iterate in lexical order.
#[derive(Clone, Default)]
pub struct GlyphSet {
  glyphs: BTreeMap<String, Arc<dyn Glyph>>
}

impl GlyphSet {
  pub fn new() -> Self { Self::default() }

  pub fn insert(&mut self, name: impl Into<String>, glyph: impl Glyph + 'static) -> &mut Self {
    self.glyphs.insert(name.into(), Arc::new(glyph));
    self
  }

  pub fn get(&self, name: &str) -> Option<&dyn Glyph> {
    self.glyphs.get(name).map(|glyph| glyph.as_ref())
  }

  pub fn names(&self) -> Vec<String> {
    self.glyphs.keys().cloned().collect()
  }

  pub fn len(&self) -> usize { self.glyphs.len() }

  pub fn is_empty(&self) -> bool { self.glyphs.is_empty() }
}

impl fmt::Debug for GlyphSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.glyphs.keys()).finish()
  }
}

/// Shapes drawn when no glyph set is available.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FallbackShape {
  Circle,
  RoundedSquare,
  Triangle,
  Star
}

impl FallbackShape {
  /// Fallback shapes are drawn at this fraction of the cell's icon size.
  pub const SIZE_FACTOR: f32 = 0.8;

  /// Pick a shape from the icon name; the same name always gives the same shape.
  pub fn for_name(name: &str) -> Self {
    match hash_string(name).unsigned_abs() % 4 {
      0 => FallbackShape::Circle,
      1 => FallbackShape::RoundedSquare,
      2 => FallbackShape::Triangle,
      _ => FallbackShape::Star
    }
  }

  pub fn glyph(self) -> VectorGlyph {
    match self {
      FallbackShape::Circle => VectorGlyph::new(Circle),
      // corner radius is a fifth of the side
      FallbackShape::RoundedSquare => VectorGlyph::new(RoundedRect {
        half_extents: V2::splat(1.0),
        radius: 0.4
      }),
      FallbackShape::Triangle => VectorGlyph::new(Polygon::triangle()),
      FallbackShape::Star => VectorGlyph::new(Polygon::star(5, 1.0, 0.5))
    }
  }
}
