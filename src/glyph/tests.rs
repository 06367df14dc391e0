use {
  super::*,
  crate::{
    drawing::Draw,
    error::Result,
    glyph::provider::{acquire_glyphs, Acquisition, GlyphProvider}
  },
  image::{DynamicImage, RgbaImage},
  std::{thread, time::{Duration, Instant}}
};

fn style(center: P2, size: f32) -> GlyphStyle {
  GlyphStyle {
    center,
    size,
    fill: Rgba([200, 40, 40, 255]),
    stroke: Rgba([255, 0, 0, 255]),
    stroke_width: 2.0
  }
}

struct Draws<'a>(&'a dyn Glyph, GlyphStyle);
impl Rasterize for Draws<'_> {
  fn rasterize(&self, resolution: Size2D<u32, PixelSpace>) -> Option<Patch> {
    self.0.rasterize(&self.1, resolution)
  }
}

struct Slow(Duration);
impl GlyphProvider for Slow {
  fn fetch(&self) -> Result<GlyphSet> {
    thread::sleep(self.0);
    Ok(BuiltinGlyphs::glyph_set())
  }
  fn name(&self) -> String { "slow".into() }
}

struct Empty;
impl GlyphProvider for Empty {
  fn fetch(&self) -> Result<GlyphSet> { Ok(GlyphSet::new()) }
  fn name(&self) -> String { "empty".into() }
}

struct Panics;
impl GlyphProvider for Panics {
  fn fetch(&self) -> Result<GlyphSet> { panic!("provider exploded") }
  fn name(&self) -> String { "panics".into() }
}

#[test] fn fallback_shape_is_deterministic() {
  for name in ["circle", "square", "triangle", "hexagon", "star", "arrow-up-right"] {
    let shape = FallbackShape::for_name(name);
    (0..10).for_each(|_| assert_eq!(FallbackShape::for_name(name), shape));
  }
}

#[test] fn fallback_shape_follows_hash() {
  // hash("a") = 97, 97 % 4 = 1
  assert_eq!(FallbackShape::for_name("a"), FallbackShape::RoundedSquare);
  // hash("") = 0
  assert_eq!(FallbackShape::for_name(""), FallbackShape::Circle);
  // hash("ab") = 3105, 3105 % 4 = 1
  assert_eq!(FallbackShape::for_name("ab"), FallbackShape::RoundedSquare);
  // hash("c") = 99, 99 % 4 = 3
  assert_eq!(FallbackShape::for_name("c"), FallbackShape::Star);
  // hash("b") = 98, 98 % 4 = 2
  assert_eq!(FallbackShape::for_name("b"), FallbackShape::Triangle);
}

#[test] fn vector_glyph_draws_at_center() -> Result<()> {
  let mut image = RgbaImage::new(100, 100);
  let glyph = FallbackShape::Circle.glyph();
  Draws(&glyph, style(P2::new(50.0, 50.0), 40.0)).draw(&mut image);
  assert_eq!(*image.get_pixel(50, 50), Rgba([200, 40, 40, 255]));
  assert_eq!(image.get_pixel(10, 10).0[3], 0);
  // outline at the radius
  assert_eq!(*image.get_pixel(69, 50), Rgba([255, 0, 0, 255]));
  Ok(())
}

#[test] fn bitmap_glyph_uses_alpha_as_ink() -> Result<()> {
  let mut icon = RgbaImage::new(8, 8);
  icon.put_pixel(2, 2, Rgba([0, 0, 0, 255]));
  (0..8).for_each(|x| icon.put_pixel(x, 7, Rgba([0, 0, 0, 255])));
  let glyph = BitmapGlyph::new(DynamicImage::ImageRgba8(icon));

  let mut image = RgbaImage::new(32, 32);
  Draws(&glyph, style(P2::new(16.0, 16.0), 16.0)).draw(&mut image);
  // the bottom row of the icon lands on the bottom row of the placed square
  assert!(image.get_pixel(16, 23).0[3] > 0);
  assert_eq!(image.get_pixel(16, 23).0[0], 255);
  assert_eq!(image.get_pixel(16, 4).0[3], 0);
  Ok(())
}

#[test] fn opaque_bitmap_uses_dark_pixels_as_ink() -> Result<()> {
  let mut icon = image::RgbImage::from_pixel(8, 8, image::Rgb([255, 255, 255]));
  (0..8).for_each(|x| icon.put_pixel(x, 7, image::Rgb([0, 0, 0])));
  let glyph = BitmapGlyph::new(DynamicImage::ImageRgb8(icon));

  let mut image = RgbaImage::new(32, 32);
  Draws(&glyph, style(P2::new(16.0, 16.0), 16.0)).draw(&mut image);
  // black row inks, white background stays clear
  assert!(image.get_pixel(16, 23).0[3] > 0);
  assert_eq!(image.get_pixel(16, 23).0[0], 255);
  assert_eq!(image.get_pixel(16, 12).0[3], 0);
  Ok(())
}

#[test] fn bitmap_glyph_partially_offscreen() {
  let glyph = BitmapGlyph::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))));
  let patch = glyph.rasterize(&style(P2::new(0.0, 0.0), 10.0), Size2D::new(32, 32)).unwrap();
  assert_eq!(patch.origin, euclid::Point2D::new(0, 0));
  assert_eq!(patch.buffer.dimensions(), (5, 5));
}

#[test] fn glyph_set_names_sorted() {
  let set = BuiltinGlyphs::glyph_set();
  let names = set.names();
  let mut sorted = names.clone();
  sorted.sort();
  assert_eq!(names, sorted);
  assert!(set.len() >= 10);
  assert!(set.get("star").is_some());
  assert!(set.get("no-such-icon").is_none());
}

#[test] fn ambient_provider_is_immediate() {
  let t0 = Instant::now();
  let acquired = acquire_glyphs(Arc::new(BuiltinGlyphs), Duration::from_millis(1));
  assert!(acquired.is_ready());
  assert!(t0.elapsed() < Duration::from_secs(1));
}

#[test] fn slow_provider_times_out() {
  let t0 = Instant::now();
  let acquired = acquire_glyphs(
    Arc::new(Slow(Duration::from_millis(2000))), Duration::from_millis(50));
  assert!(matches!(acquired, Acquisition::Unavailable));
  assert!(t0.elapsed() < Duration::from_millis(1500));
}

#[test] fn slow_provider_within_timeout() {
  let acquired = acquire_glyphs(
    Arc::new(Slow(Duration::from_millis(10))), Duration::from_millis(2000));
  assert!(acquired.is_ready());
}

#[test] fn failing_providers_are_unavailable() {
  let timeout = Duration::from_millis(500);
  assert!(!acquire_glyphs(Arc::new(NoGlyphs), timeout).is_ready());
  assert!(!acquire_glyphs(Arc::new(Empty), timeout).is_ready());
  assert!(!acquire_glyphs(Arc::new(Panics), timeout).is_ready());
}

#[test] fn missing_directory_is_unavailable() {
  let provider = DirectoryGlyphs::new(std::env::temp_dir().join("poster-grid-no-such-dir"));
  assert!(provider.fetch().is_err());
  assert!(!acquire_glyphs(Arc::new(provider), Duration::from_millis(500)).is_ready());
}

#[test] fn directory_provider_loads_pngs() -> Result<()> {
  let root = std::env::temp_dir().join(format!("poster-grid-glyphs-{}", std::process::id()));
  std::fs::create_dir_all(root.join("nested"))?;
  RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])).save(root.join("dot.png"))?;
  RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])).save(root.join("nested/bar.png"))?;
  std::fs::write(root.join("notes.txt"), "not an icon")?;
  std::fs::write(root.join("broken.png"), "not a png either")?;

  let set = DirectoryGlyphs::new(&root).fetch()?;
  assert_eq!(set.names(), vec!["bar".to_string(), "dot".to_string()]);
  std::fs::remove_dir_all(&root)?;
  Ok(())
}
