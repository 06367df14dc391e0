use {
  super::{BitmapGlyph, GlyphSet, VectorGlyph},
  crate::{
    error::{Context, Result},
    geometry::{Circle, Polygon, RoundedRect, Shape, Square}
  },
  euclid::{Angle, Vector2D as V2},
  log::{debug, info, warn},
  std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc},
    thread,
    time::{Duration, Instant}
  },
  walkdir::WalkDir
};

/// Source of a glyph set.
pub trait GlyphProvider: Send + Sync {
  /// A set that is already loaded and can be used without waiting.
  fn ambient(&self) -> Option<GlyphSet> { None }
  /// Load the set; may block for an arbitrary time.
  fn fetch(&self) -> Result<GlyphSet>;
  fn name(&self) -> String;
}

/// Outcome of [`acquire_glyphs`].
#[derive(Debug, Clone)]
pub enum Acquisition {
  Ready(Arc<GlyphSet>),
  Unavailable
}

impl Acquisition {
  pub fn glyphs(&self) -> Option<&Arc<GlyphSet>> {
    match self {
      Acquisition::Ready(glyphs) => Some(glyphs),
      Acquisition::Unavailable => None
    }
  }

  pub fn is_ready(&self) -> bool { self.glyphs().is_some() }

  fn from_set(set: GlyphSet, provider: &str) -> Self {
    if set.is_empty() {
      warn!("{} provided no glyphs, using fallback shapes", provider);
      Acquisition::Unavailable
    } else {
      Acquisition::Ready(Arc::new(set))
    }
  }
}

/// Obtain a glyph set from `provider`, waiting at most `timeout` for a fetch.
/// Never fails: timeout, fetch errors and empty sets all resolve to `Unavailable`.
pub fn acquire_glyphs(provider: Arc<dyn GlyphProvider>, timeout: Duration) -> Acquisition {
  let name = provider.name();
  if let Some(set) = provider.ambient() {
    info!("{}: glyphs already loaded ({})", name, set.len());
    return Acquisition::from_set(set, &name);
  }

  debug!("{}: fetching glyphs, timeout {}ms", name, timeout.as_millis());
  let t0 = Instant::now();
  let (tx, rx) = mpsc::channel();
  let worker = thread::Builder::new()
    .name("glyph-fetch".into())
    .spawn(move || {
      // the receiver is gone after a timeout
      tx.send(provider.fetch()).ok();
    });
  if let Err(err) = worker {
    warn!("{}: could not start fetch: {}", name, err);
    return Acquisition::Unavailable;
  }

  match rx.recv_timeout(timeout) {
    Ok(Ok(set)) => {
      info!("{}: loaded {} glyphs in {}ms", name, set.len(), t0.elapsed().as_millis());
      Acquisition::from_set(set, &name)
    }
    Ok(Err(err)) => {
      warn!("{}: glyph fetch failed: {:#}", name, err);
      Acquisition::Unavailable
    }
    Err(mpsc::RecvTimeoutError::Timeout) => {
      warn!("{}: glyph fetch timed out after {}ms", name, timeout.as_millis());
      Acquisition::Unavailable
    }
    Err(mpsc::RecvTimeoutError::Disconnected) => {
      warn!("{}: glyph fetch aborted", name);
      Acquisition::Unavailable
    }
  }
}

/// Vector glyphs compiled into the crate; always loaded.
#[derive(Debug, Copy, Clone, Default)]
pub struct BuiltinGlyphs;

impl BuiltinGlyphs {
  pub fn glyph_set() -> GlyphSet {
    let bar = |w: f32, h: f32| RoundedRect { half_extents: V2::new(w, h), radius: 0.0 };
    let plus = bar(1.0, 0.28).union(bar(0.28, 1.0));

    let mut set = GlyphSet::new();
    set
      .insert("circle", VectorGlyph::new(Circle))
      .insert("square", VectorGlyph::new(Square.scale(0.9)))
      .insert("rounded-square", VectorGlyph::new(RoundedRect {
        half_extents: V2::splat(1.0), radius: 0.4
      }))
      .insert("triangle", VectorGlyph::new(Polygon::triangle()))
      .insert("star", VectorGlyph::new(Polygon::star(5, 1.0, 0.5)))
      .insert("sparkle", VectorGlyph::new(Polygon::star(4, 1.0, 0.3)))
      .insert("pentagon", VectorGlyph::new(Polygon::upright(5)))
      .insert("hexagon", VectorGlyph::new(Polygon::upright(6)))
      .insert("octagon", VectorGlyph::new(Polygon::regular(8, std::f32::consts::PI / 8.0)))
      .insert("diamond", VectorGlyph::new(Polygon::regular(4, 0.0)))
      .insert("plus", VectorGlyph::new(plus))
      .insert("cross", VectorGlyph::new(plus.rotate(Angle::degrees(45.0))))
      .insert("ring", VectorGlyph::new(Circle.subtraction(Circle.scale(0.55))))
      .insert("moon", VectorGlyph::new(
        Circle.subtraction(Circle.scale(0.8).translate(V2::new(0.45, -0.3)))))
      .insert("capsule", VectorGlyph::new(RoundedRect {
        half_extents: V2::new(1.0, 0.45), radius: 0.45
      }))
      .insert("bars", VectorGlyph::new(
        bar(0.2, 1.0).translate(V2::new(-0.6, 0.0))
          .union(bar(0.2, 0.6).translate(V2::new(0.0, 0.4)))
          .union(bar(0.2, 0.3).translate(V2::new(0.6, 0.7)))));
    set
  }
}

impl GlyphProvider for BuiltinGlyphs {
  fn ambient(&self) -> Option<GlyphSet> { Some(Self::glyph_set()) }
  fn fetch(&self) -> Result<GlyphSet> { Ok(Self::glyph_set()) }
  fn name(&self) -> String { "builtin".into() }
}

/// Raster icons loaded from a directory tree; each PNG or JPEG is named after its file stem.
#[derive(Debug, Clone)]
pub struct DirectoryGlyphs {
  pub root: PathBuf
}

impl DirectoryGlyphs {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    DirectoryGlyphs { root: root.into() }
  }

  fn is_image(path: &Path) -> bool {
    path.extension()
      .and_then(|ext| ext.to_str())
      .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
      .unwrap_or(false)
  }
}

impl GlyphProvider for DirectoryGlyphs {
  fn fetch(&self) -> Result<GlyphSet> {
    if !self.root.is_dir() {
      anyhow::bail!("glyph directory {} does not exist", self.root.display());
    }
    let mut set = GlyphSet::new();
    for entry in WalkDir::new(&self.root).follow_links(true) {
      let entry = entry
        .with_context(|| format!("walking {}", self.root.display()))?;
      let path = entry.path();
      if !entry.file_type().is_file() || !Self::is_image(path) {
        continue;
      }
      let name = match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(name) => name.to_string(),
        None => continue
      };
      match image::open(path) {
        Ok(image) => { set.insert(name, BitmapGlyph::new(image)); }
        Err(err) => warn!("skipping glyph {}: {}", path.display(), err)
      }
    }
    Ok(set)
  }

  fn name(&self) -> String { format!("directory {}", self.root.display()) }
}

/// Provider that never succeeds; forces fallback shapes.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoGlyphs;

impl GlyphProvider for NoGlyphs {
  fn fetch(&self) -> Result<GlyphSet> {
    anyhow::bail!("glyphs disabled")
  }
  fn name(&self) -> String { "offline".into() }
}
