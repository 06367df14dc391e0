use {
  super::{Glyph, GlyphStyle},
  crate::{
    drawing::{pixel_bounds, Patch},
    geometry::{CanvasSpace, PixelSpace}
  },
  euclid::{Box2D, Rect, Size2D, Vector2D as V2},
  image::{imageops::FilterType, DynamicImage, GenericImageView, Pixel, Rgba, RgbaImage},
  std::sync::Arc
};

/// Raster icon tinted with the style's stroke colour. The alpha channel is the ink; images
/// without one (JPEG, opaque PNG) use inverted luminance, so dark strokes on white show up.
#[derive(Debug, Clone)]
pub struct BitmapGlyph {
  pub image: Arc<DynamicImage>
}

impl BitmapGlyph {
  pub fn new(image: DynamicImage) -> Self {
    BitmapGlyph { image: Arc::new(image) }
  }
}

impl Glyph for BitmapGlyph {
  fn rasterize(&self, style: &GlyphStyle, resolution: Size2D<u32, PixelSpace>) -> Option<Patch> {
    let side = style.size.round().max(1.0) as u32;
    let half = V2::splat(side as f32 / 2.0);
    let placed: Box2D<f32, CanvasSpace> = Box2D::new(style.center - half, style.center + half)
      .round();
    let bounds = pixel_bounds(placed, 0.0, resolution)?;
    let texture = rescale_texture(&self.image, side).to_rgba8();
    let has_alpha = self.image.color().has_alpha();
    let (left, top) = (placed.min.x as i64, placed.min.y as i64);

    let mut buffer = RgbaImage::new(bounds.width(), bounds.height());
    itertools::iproduct!(bounds.y_range(), bounds.x_range())
      .for_each(|(y, x)| {
        let (tx, ty) = (x as i64 - left, y as i64 - top);
        if tx < 0 || ty < 0 || tx >= side as i64 || ty >= side as i64 {
          return;
        }
        let texel = texture.get_pixel(tx as u32, ty as u32);
        let ink = match has_alpha {
          true => texel.0[3] as f32 / 255.0,
          false => 1.0 - texel.to_luma().0[0] as f32 / 255.0
        };
        let mut color: Rgba<u8> = style.stroke;
        color.0[3] = (color.0[3] as f32 * ink).round() as u8;
        buffer.put_pixel(x - bounds.min.x, y - bounds.min.y, color);
      });

    Some(Patch { origin: bounds.min, buffer })
  }
}

// crop the texture to a centered square, then resize it to `side`
fn rescale_texture(texture: &DynamicImage, side: u32) -> DynamicImage {
  let (w, h) = texture.dimensions();
  let min_side = w.min(h);
  let crop = Rect::<u32, PixelSpace>::new(
    [(w - min_side) / 2, (h - min_side) / 2].into(),
    Size2D::splat(min_side)
  );
  texture.crop_imm(
    crop.origin.x,
    crop.origin.y,
    crop.size.width,
    crop.size.height
  ).resize_exact(side, side, FilterType::Triangle)
}
