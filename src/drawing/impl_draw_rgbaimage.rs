use {
  euclid::Size2D,
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{blend_over, Patch, Rasterize, Styled, pixel_bounds},
    geometry::{PixelSpace, Shape, P2}
  }
};

impl <Cutie> Rasterize for Styled<Cutie>
  where Cutie: Shape
{
  fn rasterize(&self, resolution: Size2D<u32, PixelSpace>) -> Option<Patch> {
    let half_stroke = match self.paint.stroke {
      Some(_) => self.paint.stroke_width / 2.0,
      None => 0.0
    };
    let bounds = pixel_bounds(self.shape.bounding_box(), half_stroke + 1.0, resolution)?;
    let mut buffer = RgbaImage::new(bounds.width(), bounds.height());

    itertools::iproduct!(bounds.y_range(), bounds.x_range())
      .for_each(|(y, x)| {
        // sample at the pixel center
        let sdf = self.shape.sdf(P2::new(x as f32 + 0.5, y as f32 + 0.5));
        let pixel = buffer.get_pixel_mut(x - bounds.min.x, y - bounds.min.y);
        if let Some(fill) = self.paint.fill {
          *pixel = sdf_overlay_aa(sdf, *pixel, fill);
        }
        if let Some(stroke) = self.paint.stroke {
          *pixel = sdf_overlay_aa(sdf.abs() - half_stroke, *pixel, stroke);
        }
      });

    Some(Patch { origin: bounds.min, buffer })
  }
}

// one pixel wide antialiasing band around the zero level
pub(crate) fn sdf_overlay_aa(sdf: f32, col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf).clamp(0.0, 1.0);
  if alpha <= 0.0 {
    return col1;
  }
  col2.0[3] = ((col2.0[3] as f32) * alpha).round() as u8;
  blend_over(col1, col2)
}
