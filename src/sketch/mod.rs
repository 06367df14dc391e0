//! The poster itself: acquires glyphs, lays out the grid and draws one settled frame.
//!
//! [`PosterGrid`] is driven through the [`Sketch`](crate::host::Sketch) lifecycle by a
//! [`FrameLoop`](crate::host::FrameLoop):
//! `preload` acquires the glyph set, `setup` builds the first [`Layout`], and `draw` renders
//! grid lines and icons, then stops the loop. [`Control`]s rebuild the layout.
//!
//! Rebuilds can run off-thread: [`PosterGrid::request_rebuild`] hands out a
//! [`PendingRebuild`] tagged with a generation number and [`PosterGrid::commit`] only applies
//! it while no newer request was made.

use {
  crate::{
    catalog::{build_catalog, Catalog, CatalogSource},
    color::{grey, Hsb},
    config::{AspectRatio, PosterConfig},
    drawing::{self, text::draw_text_centered, Draw, Patch, Rasterize},
    error::{Context, Result},
    geometry::{PixelSpace, P2},
    glyph::{
      acquire_glyphs, Acquisition, FallbackShape, Glyph, GlyphProvider, GlyphSet, GlyphStyle, VectorGlyph
    },
    grid::{build_grid, Cell, GridGeometry, Vibration},
    util::{gcd, map_range}
  },
  euclid::Size2D,
  image::RgbaImage,
  log::{debug, info, warn},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  std::{sync::{mpsc, Arc}, thread, time::Duration}
};


pub const LOADING_MESSAGE: &str = "Loading icons...";
pub const UNAVAILABLE_MESSAGE: &str = "Icons unavailable\nUsing fallback shapes";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadState {
  Loading,
  Loaded,
  Failed
}

/// User controls: the reset button and the ratio picker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
  Reset,
  AspectRatio(AspectRatio)
}

/// Everything one rebuild produces. Replaced wholesale by the next rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
  pub canvas: Size2D<u32, PixelSpace>,
  pub gcd: u32,
  pub geometry: GridGeometry,
  pub catalog: Catalog,
  pub cells: Vec<Cell>
}

impl Layout {
  /// Pick a catalog from `glyphs` (fallback names when `None`) and fill the grid.
  pub fn generate<R: Rng>(
    canvas: Size2D<u32, PixelSpace>,
    glyphs: Option<&GlyphSet>,
    catalog_size: usize,
    rng: &mut R
  ) -> Result<Self> {
    let g = gcd(canvas.width, canvas.height);
    let geometry = GridGeometry::new(canvas, g)?;
    let names;
    let source = match glyphs {
      Some(set) => {
        names = set.names();
        CatalogSource::Names(&names)
      }
      None => CatalogSource::Fallback
    };
    let catalog = build_catalog(source, catalog_size, rng);
    debug!("catalog: {:?}", catalog.entries());
    let cells = build_grid(canvas, g, &catalog, rng)?;
    debug!("gcd of {}x{}: {}, grid {}x{} cells",
      canvas.width, canvas.height, g, geometry.cols, geometry.rows);
    Ok(Layout { canvas, gcd: g, geometry, catalog, cells })
  }
}

/// A rebuild running on a worker thread.
pub struct PendingRebuild {
  generation: u64,
  receiver: mpsc::Receiver<Result<(Acquisition, Layout)>>
}

impl PendingRebuild {
  pub fn generation(&self) -> u64 { self.generation }
}

/// What one call to [`PosterGrid::draw_frame`] put on the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
  pub icons: usize,
  pub skipped: usize,
  pub status: bool
}

pub struct PosterGrid {
  config: PosterConfig,
  vibration: Vibration,
  provider: Arc<dyn GlyphProvider>,
  acquisition: Option<Acquisition>,
  load_state: LoadState,
  canvas: Size2D<u32, PixelSpace>,
  layout: Option<Layout>,
  generation: u64,
  looping: bool,
  rng: Pcg64,
  fallback: [VectorGlyph; 4]
}

impl PosterGrid {
  pub fn new(config: PosterConfig, provider: Arc<dyn GlyphProvider>) -> Result<Self> {
    config.validate()?;
    let rng = match config.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    };
    Ok(PosterGrid {
      vibration: config.vibration(),
      canvas: config.canvas(),
      config,
      provider,
      acquisition: None,
      load_state: LoadState::Loading,
      layout: None,
      generation: 0,
      looping: true,
      rng,
      fallback: [
        FallbackShape::Circle.glyph(),
        FallbackShape::RoundedSquare.glyph(),
        FallbackShape::Triangle.glyph(),
        FallbackShape::Star.glyph()
      ]
    })
  }

  pub fn config(&self) -> &PosterConfig { &self.config }
  pub fn canvas_size(&self) -> Size2D<u32, PixelSpace> { self.canvas }
  pub fn load_state(&self) -> LoadState { self.load_state }
  pub fn layout(&self) -> Option<&Layout> { self.layout.as_ref() }
  pub fn generation(&self) -> u64 { self.generation }
  pub fn is_looping(&self) -> bool { self.looping }

  pub fn glyphs(&self) -> Option<&Arc<GlyphSet>> {
    self.acquisition.as_ref().and_then(Acquisition::glyphs)
  }

  /// Acquire the glyph set, blocking for at most the configured timeout.
  pub fn preload(&mut self) {
    info!("preloading glyphs from {}", self.provider.name());
    self.load_state = LoadState::Loading;
    let acquisition = acquire_glyphs(self.provider.clone(), self.config.load_timeout());
    self.set_acquisition(acquisition);
  }

  pub fn setup(&mut self) -> Result<()> {
    info!("setting up {}x{} poster", self.canvas.width, self.canvas.height);
    self.reset()
  }

  fn set_acquisition(&mut self, acquisition: Acquisition) {
    self.load_state = match &acquisition {
      Acquisition::Ready(_) => LoadState::Loaded,
      Acquisition::Unavailable => LoadState::Failed
    };
    if self.load_state == LoadState::Failed {
      warn!("glyphs unavailable, drawing fallback shapes");
    }
    self.acquisition = Some(acquisition);
  }

  /// Start a rebuild for the current canvas. Glyphs already acquired are reused; otherwise
  /// the worker acquires them first. Any earlier pending rebuild becomes stale.
  pub fn request_rebuild(&mut self) -> Result<PendingRebuild> {
    self.generation += 1;
    let generation = self.generation;
    let canvas = self.canvas;
    let catalog_size = self.config.catalog_size;
    let timeout = self.config.load_timeout();
    let acquired = self.acquisition.clone();
    let provider = self.provider.clone();
    let mut rng = Pcg64::seed_from_u64(self.rng.gen());
    if acquired.is_none() {
      self.load_state = LoadState::Loading;
    }

    let (tx, receiver) = mpsc::channel();
    thread::Builder::new()
      .name(format!("rebuild-{}", generation))
      .spawn(move || {
        let acquisition = acquired.unwrap_or_else(|| acquire_glyphs(provider, timeout));
        let layout = Layout::generate(
          canvas,
          acquisition.glyphs().map(|glyphs| glyphs.as_ref()),
          catalog_size,
          &mut rng
        );
        // nobody listens once the request was dropped
        tx.send(layout.map(|layout| (acquisition, layout))).ok();
      })
      .context("spawning rebuild worker")?;

    debug!("rebuild #{} requested", generation);
    Ok(PendingRebuild { generation, receiver })
  }

  /// Wait for `pending` and apply it. Returns `false` if a newer rebuild was requested
  /// meanwhile, in which case the result is dropped.
  pub fn commit(&mut self, pending: PendingRebuild) -> Result<bool> {
    let result = pending.receiver.recv()
      .context("rebuild worker stopped without a result")?;
    if pending.generation != self.generation {
      debug!("dropping stale rebuild #{}, current is #{}", pending.generation, self.generation);
      return Ok(false);
    }
    let (acquisition, layout) = result?;
    if self.acquisition.is_none() {
      self.set_acquisition(acquisition);
    }
    info!("rebuilt #{}: {}x{} cells, {} icons in catalog",
      pending.generation, layout.geometry.cols, layout.geometry.rows, layout.catalog.len());
    self.layout = Some(layout);
    self.looping = true;
    Ok(true)
  }

  /// New catalog and grid for the current canvas.
  pub fn reset(&mut self) -> Result<()> {
    info!("resetting poster");
    let pending = self.request_rebuild()?;
    self.commit(pending).map(|_| ())
  }

  /// Resize the canvas to `ratio` times the ratio scale, then reset.
  pub fn change_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<()> {
    self.canvas = ratio.canvas_size(self.config.ratio_scale)?;
    info!("aspect ratio {}: canvas {}x{}", ratio, self.canvas.width, self.canvas.height);
    self.reset()
  }

  pub fn handle(&mut self, control: Control) -> Result<()> {
    match control {
      Control::Reset => self.reset(),
      Control::AspectRatio(ratio) => self.change_aspect_ratio(ratio)
    }
  }

  /// Draw the poster at `elapsed` since start. Stops looping once the icons are drawn.
  pub fn draw_frame(&mut self, image: &mut RgbaImage, elapsed: Duration) -> Result<FrameStats> {
    let mut stats = FrameStats::default();
    drawing::background(image, grey(0, 255));

    if self.load_state == LoadState::Loading {
      stats.status = self.draw_status(image, elapsed);
      return Ok(stats);
    }
    let layout = match &self.layout {
      Some(layout) => layout,
      None => {
        warn!("draw before setup, nothing to show");
        return Ok(stats);
      }
    };

    self.draw_grid_lines(image, layout);
    let t = elapsed.as_secs_f32();
    let jobs = match self.glyphs() {
      Some(glyphs) => layout.cells.iter()
        .filter_map(|cell| match glyphs.get(&cell.icon) {
          Some(glyph) => Some(self.cell_job(glyph, cell, t, 1.0)),
          None => {
            warn!("icon not found: {}", cell.icon);
            stats.skipped += 1;
            None
          }
        })
        .collect::<Vec<_>>(),
      None => layout.cells.iter()
        .map(|cell| {
          let glyph = &self.fallback[FallbackShape::for_name(&cell.icon) as usize];
          self.cell_job(glyph, cell, t, FallbackShape::SIZE_FACTOR)
        })
        .collect()
    };
    crate::profile!("icons", {
      stats.icons = drawing::draw_parallel(image, &jobs);
    });

    if self.load_state == LoadState::Failed && self.config.show_status {
      stats.status = self.draw_status(image, elapsed);
    }
    self.looping = false;
    Ok(stats)
  }

  fn cell_job<'a>(&self, glyph: &'a dyn Glyph, cell: &Cell, t: f32, size_factor: f32) -> CellJob<'a> {
    let stroke_width = self.vibration.stroke_width(cell, t);
    let scale = self.vibration.scale_factor(cell, stroke_width);
    CellJob {
      glyph,
      style: GlyphStyle {
        center: cell.center,
        size: cell.size * scale * size_factor,
        fill: Hsb::new(cell.hue, 80.0, 90.0).to_rgba(),
        stroke: Hsb::new(cell.hue, 100.0, 100.0).to_rgba(),
        stroke_width: stroke_width.max(0.0)
      }
    }
  }

  fn draw_grid_lines(&self, image: &mut RgbaImage, layout: &Layout) {
    let color = grey(255, self.config.grid_line_alpha);
    let (w, h) = (layout.canvas.width as f32, layout.canvas.height as f32);
    let geometry = layout.geometry;
    (0..=geometry.cols)
      .map(|i| i as f32 * geometry.cell_width)
      .for_each(|x| drawing::line(P2::new(x, 0.0), P2::new(x, h), color, 1.0).draw(image));
    (0..=geometry.rows)
      .map(|j| j as f32 * geometry.cell_height)
      .for_each(|y| drawing::line(P2::new(0.0, y), P2::new(w, y), color, 1.0).draw(image));
  }

  fn draw_status(&self, image: &mut RgbaImage, elapsed: Duration) -> bool {
    let message = status_message(self.load_state, elapsed, self.config.status_delay());
    match message {
      Some(message) => {
        let alpha = status_alpha(self.load_state, elapsed, self.config.status_delay());
        let center = P2::new(image.width() as f32 / 2.0, image.height() as f32 / 2.0);
        draw_text_centered(image, message, center, 3, grey(255, alpha));
        true
      }
      None => false
    }
  }
}

/// Text shown on the canvas for a load state.
pub fn status_message(state: LoadState, elapsed: Duration, delay: Duration) -> Option<&'static str> {
  match state {
    LoadState::Loaded => None,
    LoadState::Failed => Some(UNAVAILABLE_MESSAGE),
    LoadState::Loading if elapsed > delay => Some(UNAVAILABLE_MESSAGE),
    LoadState::Loading => Some(LOADING_MESSAGE)
  }
}

/// Opaque while loading; pulses between 150 and 255 once glyphs are unavailable.
pub fn status_alpha(state: LoadState, elapsed: Duration, delay: Duration) -> u8 {
  match status_message(state, elapsed, delay) {
    Some(UNAVAILABLE_MESSAGE) => {
      let ms = elapsed.as_secs_f32() * 1000.0;
      map_range((ms * 0.005).sin(), (-1.0, 1.0), (150.0, 255.0)).round() as u8
    }
    _ => 255
  }
}

struct CellJob<'a> {
  glyph: &'a dyn Glyph,
  style: GlyphStyle
}

impl Rasterize for CellJob<'_> {
  fn rasterize(&self, resolution: Size2D<u32, PixelSpace>) -> Option<Patch> {
    self.glyph.rasterize(&self.style, resolution)
  }
}

impl crate::host::Sketch for PosterGrid {
  type Control = Control;

  fn preload(&mut self) -> Result<()> {
    PosterGrid::preload(self);
    Ok(())
  }

  fn setup(&mut self) -> Result<()> {
    PosterGrid::setup(self)
  }

  fn draw(&mut self, frame: &mut crate::host::Frame<'_>) -> Result<()> {
    let stats = self.draw_frame(&mut *frame.image, frame.elapsed)?;
    debug!("frame {}: {:?}", frame.index, stats);
    Ok(())
  }

  fn control(&mut self, control: Control) -> Result<()> {
    self.handle(control)
  }

  fn canvas_size(&self) -> Size2D<u32, PixelSpace> { self.canvas }

  fn is_looping(&self) -> bool { self.looping }
}
