//! Poster settings, loadable from JSON. Every field has a default, so a file only needs the
//! values it changes:
//! ```json
//! { "canvasWidth": 960, "canvasHeight": 540, "seed": 7 }
//! ```

use {
  crate::{
    error::{Context, Result},
    geometry::PixelSpace,
    grid::Vibration
  },
  anyhow::{bail, ensure},
  euclid::Size2D,
  serde::{Deserialize, Serialize},
  std::{fmt, path::Path, str::FromStr, time::Duration}
};


/// Largest canvas side accepted, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PosterConfig {
  pub canvas_width: u32,
  pub canvas_height: u32,
  /// Pixels per aspect-ratio unit when switching ratio.
  pub ratio_scale: u32,
  pub catalog_size: usize,
  pub vibration_speed: f32,
  pub load_timeout_ms: u64,
  /// After this long a pending load is reported as unavailable.
  pub status_delay_ms: u64,
  pub show_status: bool,
  pub grid_line_alpha: u8,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>
}

impl Default for PosterConfig {
  fn default() -> Self {
    PosterConfig {
      canvas_width: 540,
      canvas_height: 1260,
      ratio_scale: 60,
      catalog_size: crate::catalog::DEFAULT_SIZE,
      vibration_speed: 0.1,
      load_timeout_ms: 3000,
      status_delay_ms: 5000,
      show_status: true,
      grid_line_alpha: 50,
      seed: None
    }
  }
}

impl PosterConfig {
  pub fn from_json(json: &str) -> Result<Self> {
    let config: PosterConfig = serde_json::from_str(json)
      .context("invalid poster config")?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
      .with_context(|| format!("reading config {}", path.display()))?;
    Self::from_json(&json)
      .with_context(|| format!("loading config {}", path.display()))
  }

  pub fn validate(&self) -> Result<()> {
    ensure!(self.canvas_width > 0 && self.canvas_height > 0,
      "canvas must not be empty, got {}x{}", self.canvas_width, self.canvas_height);
    ensure!(self.canvas_width <= MAX_CANVAS_SIDE && self.canvas_height <= MAX_CANVAS_SIDE,
      "canvas {}x{} exceeds {} pixels per side", self.canvas_width, self.canvas_height, MAX_CANVAS_SIDE);
    ensure!(self.ratio_scale > 0, "ratioScale must be positive");
    for ratio in AspectRatio::PRESETS {
      ratio.canvas_size(self.ratio_scale).context("ratioScale too large")?;
    }
    ensure!(self.catalog_size > 0, "catalogSize must be positive");
    ensure!(self.load_timeout_ms > 0, "loadTimeoutMs must be positive");
    ensure!(self.vibration_speed.is_finite(), "vibrationSpeed must be finite");
    Ok(())
  }

  pub fn canvas(&self) -> Size2D<u32, PixelSpace> {
    Size2D::new(self.canvas_width, self.canvas_height)
  }

  pub fn load_timeout(&self) -> Duration {
    Duration::from_millis(self.load_timeout_ms)
  }

  pub fn status_delay(&self) -> Duration {
    Duration::from_millis(self.status_delay_ms)
  }

  pub fn vibration(&self) -> Vibration {
    Vibration::with_speed(self.vibration_speed)
  }
}

/// Canvas proportions offered by the ratio control.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
  pub width: u32,
  pub height: u32
}

impl AspectRatio {
  pub const PRESETS: [AspectRatio; 5] = [
    AspectRatio { width: 9, height: 21 },
    AspectRatio { width: 3, height: 5 },
    AspectRatio { width: 9, height: 16 },
    AspectRatio { width: 1, height: 1 },
    AspectRatio { width: 16, height: 9 },
  ];

  pub const fn new(width: u32, height: u32) -> Self {
    AspectRatio { width, height }
  }

  /// Canvas of `scale` pixels per ratio unit. Fails beyond [`MAX_CANVAS_SIDE`].
  pub fn canvas_size(self, scale: u32) -> Result<Size2D<u32, PixelSpace>> {
    let side = |units: u32| units.checked_mul(scale)
      .filter(|&side| side <= MAX_CANVAS_SIDE)
      .with_context(|| format!("{} at {} px per unit exceeds {} pixels per side",
        self, scale, MAX_CANVAS_SIDE));
    Ok(Size2D::new(side(self.width)?, side(self.height)?))
  }

  /// Label shown next to the preset in a ratio picker.
  pub fn label(self) -> String {
    match (self.width, self.height) {
      (9, 21) => format!("{} (Default)", self),
      (1, 1) => format!("{} (Square)", self),
      (16, 9) => format!("{} (Widescreen)", self),
      _ => self.to_string()
    }
  }
}

impl fmt::Display for AspectRatio {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.width, self.height)
  }
}

impl FromStr for AspectRatio {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let (w, h) = match s.split_once(':') {
      Some(parts) => parts,
      None => bail!("aspect ratio must look like W:H, got {:?}", s)
    };
    let width = w.trim().parse::<u32>().with_context(|| format!("bad ratio width {:?}", w))?;
    let height = h.trim().parse::<u32>().with_context(|| format!("bad ratio height {:?}", h))?;
    ensure!(width > 0 && height > 0, "aspect ratio sides must be positive, got {}", s);
    Ok(AspectRatio { width, height })
  }
}
