//! A minimal offscreen host: runs a [`Sketch`] through preload, setup and its frames into a
//! framebuffer that follows the sketch's canvas size.

use {
  crate::{error::Result, geometry::PixelSpace},
  euclid::Size2D,
  image::RgbaImage,
  log::{debug, info, warn},
  std::time::{Duration, Instant}
};

pub trait Sketch {
  type Control;

  /// Called once before `setup`; may block on resources.
  fn preload(&mut self) -> Result<()> { Ok(()) }
  fn setup(&mut self) -> Result<()>;
  fn draw(&mut self, frame: &mut Frame<'_>) -> Result<()>;
  fn control(&mut self, control: Self::Control) -> Result<()>;
  fn canvas_size(&self) -> Size2D<u32, PixelSpace>;
  /// `false` once the sketch needs no further frames.
  fn is_looping(&self) -> bool;
}

pub struct Frame<'a> {
  pub image: &'a mut RgbaImage,
  /// Time since the host started.
  pub elapsed: Duration,
  pub index: u64
}

#[derive(Debug, Copy, Clone)]
pub enum Clock {
  Wall,
  /// Every frame sees the same elapsed time.
  Fixed(Duration)
}

impl Clock {
  fn elapsed(&self, start: Instant) -> Duration {
    match self {
      Clock::Wall => start.elapsed(),
      Clock::Fixed(elapsed) => *elapsed
    }
  }
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
  pub clock: Clock,
  /// Upper bound for sketches that never stop looping.
  pub max_frames: u64
}

impl Default for FrameLoop {
  fn default() -> Self {
    FrameLoop { clock: Clock::Wall, max_frames: 600 }
  }
}

pub struct RunReport {
  pub frames: u64,
  pub image: RgbaImage
}

impl FrameLoop {
  /// Preload, set up, apply `controls` in order, then draw until the sketch stops looping.
  pub fn run<S: Sketch>(
    &self,
    sketch: &mut S,
    controls: impl IntoIterator<Item = S::Control>
  ) -> Result<RunReport> {
    let start = Instant::now();
    sketch.preload()?;
    sketch.setup()?;
    for control in controls {
      sketch.control(control)?;
    }

    let mut image = RgbaImage::new(0, 0);
    let mut frames = 0;
    while sketch.is_looping() && frames < self.max_frames {
      let size = sketch.canvas_size();
      if image.dimensions() != (size.width, size.height) {
        debug!("resizing framebuffer to {}x{}", size.width, size.height);
        image = RgbaImage::new(size.width, size.height);
      }
      let mut frame = Frame { image: &mut image, elapsed: self.clock.elapsed(start), index: frames };
      sketch.draw(&mut frame)?;
      frames += 1;
    }

    if sketch.is_looping() {
      warn!("sketch still looping after {} frames", frames);
    }
    info!("{} frame(s) in {}ms", frames, start.elapsed().as_millis());
    Ok(RunReport { frames, image })
  }
}
