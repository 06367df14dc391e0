use image::Rgba;

/// Colour given as hue in degrees, saturation and brightness in percent, alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsb {
  pub hue: f32,
  pub saturation: f32,
  pub brightness: f32,
  pub alpha: f32
}

impl Hsb {
  pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
    Hsb { hue, saturation, brightness, alpha: 1.0 }
  }

  pub fn to_rgba(self) -> Rgba<u8> {
    let h = self.hue.rem_euclid(360.0) / 60.0;
    let s = (self.saturation / 100.0).clamp(0.0, 1.0);
    let v = (self.brightness / 100.0).clamp(0.0, 1.0);
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
      0 => (c, x, 0.0),
      1 => (x, c, 0.0),
      2 => (0.0, c, x),
      3 => (0.0, x, c),
      4 => (x, 0.0, c),
      _ => (c, 0.0, x),
    };
    let m = v - c;
    let channel = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba([channel(r), channel(g), channel(b), channel_alpha(self.alpha)])
  }
}

fn channel_alpha(alpha: f32) -> u8 {
  (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Grey level with an alpha in `0..=255`.
pub fn grey(level: u8, alpha: u8) -> Rgba<u8> {
  Rgba([level, level, level, alpha])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn primaries() {
    assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_rgba(), Rgba([255, 0, 0, 255]));
    assert_eq!(Hsb::new(120.0, 100.0, 100.0).to_rgba(), Rgba([0, 255, 0, 255]));
    assert_eq!(Hsb::new(240.0, 100.0, 100.0).to_rgba(), Rgba([0, 0, 255, 255]));
    assert_eq!(Hsb::new(360.0, 100.0, 100.0).to_rgba(), Rgba([255, 0, 0, 255]));
  }

  #[test] fn desaturated_is_grey() {
    let Rgba([r, g, b, _]) = Hsb::new(217.0, 0.0, 50.0).to_rgba();
    assert_eq!((r, g, b), (128, 128, 128));
  }

  #[test] fn fill_is_darker_than_stroke() {
    let fill = Hsb::new(30.0, 80.0, 90.0).to_rgba();
    let stroke = Hsb::new(30.0, 100.0, 100.0).to_rgba();
    assert!(fill.0[0] < stroke.0[0]);
  }
}
