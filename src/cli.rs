//! Command line of the `poster-grid` binary.

use {
  crate::{
    config::{AspectRatio, PosterConfig},
    error::{Context, Result},
    glyph::{BuiltinGlyphs, DirectoryGlyphs, GlyphProvider, NoGlyphs},
    host::{Clock, FrameLoop},
    sketch::Control
  },
  anyhow::{bail, ensure},
  std::{path::PathBuf, sync::Arc, time::Duration}
};

pub const USAGE: &str = "\
usage: poster-grid [options]

  --config <file>    JSON settings, see PosterConfig
  --ratio <w:h>      canvas proportions, e.g. 16:9
  --glyphs <dir>     load png/jpeg glyphs from a directory
  --offline          skip glyphs, draw fallback shapes
  --seed <n>         reproducible poster
  --time <seconds>   draw at a fixed time instead of the wall clock
  --out <file>       output png (default poster.png)
  --open             open the result in the default viewer
  --help             this text";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
  pub config: Option<PathBuf>,
  pub ratio: Option<AspectRatio>,
  pub glyphs: Option<PathBuf>,
  pub offline: bool,
  pub seed: Option<u64>,
  pub time: Option<Duration>,
  pub out: PathBuf,
  pub open: bool
}

impl Default for Args {
  fn default() -> Self {
    Args {
      config: None,
      ratio: None,
      glyphs: None,
      offline: false,
      seed: None,
      time: None,
      out: "poster.png".into(),
      open: false
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Run(Args),
  Help
}

/// Parse arguments, program name excluded.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
  let mut parsed = Args::default();
  let mut args = args.into_iter();
  while let Some(flag) = args.next() {
    let mut value = || args.next().with_context(|| format!("{} expects a value", flag));
    match flag.as_str() {
      "--help" | "-h" => return Ok(Command::Help),
      "--config" => parsed.config = Some(value()?.into()),
      "--ratio" => parsed.ratio = Some(value()?.parse()?),
      "--glyphs" => parsed.glyphs = Some(value()?.into()),
      "--offline" => parsed.offline = true,
      "--seed" => parsed.seed = Some(value()?.parse().context("--seed expects an integer")?),
      "--time" => {
        let seconds: f32 = value()?.parse().context("--time expects seconds")?;
        let time = Duration::try_from_secs_f32(seconds)
          .with_context(|| format!("--time must be a non-negative duration, got {}", seconds))?;
        parsed.time = Some(time);
      }
      "--out" => parsed.out = value()?.into(),
      "--open" => parsed.open = true,
      other => bail!("unknown argument {:?}\n\n{}", other, USAGE)
    }
  }
  ensure!(!(parsed.offline && parsed.glyphs.is_some()), "--offline conflicts with --glyphs");
  Ok(Command::Run(parsed))
}

impl Args {
  /// Settings file (or defaults) with flag overrides applied.
  pub fn poster_config(&self) -> Result<PosterConfig> {
    let mut config = match &self.config {
      Some(path) => PosterConfig::from_file(path)?,
      None => PosterConfig::default()
    };
    if self.seed.is_some() {
      config.seed = self.seed;
    }
    Ok(config)
  }

  pub fn provider(&self) -> Arc<dyn GlyphProvider> {
    match (&self.glyphs, self.offline) {
      (_, true) => Arc::new(NoGlyphs),
      (Some(root), false) => Arc::new(DirectoryGlyphs::new(root)),
      (None, false) => Arc::new(BuiltinGlyphs)
    }
  }

  pub fn frame_loop(&self) -> FrameLoop {
    let clock = match self.time {
      Some(elapsed) => Clock::Fixed(elapsed),
      None => Clock::Wall
    };
    FrameLoop { clock, ..FrameLoop::default() }
  }

  pub fn controls(&self) -> Vec<Control> {
    self.ratio.map(Control::AspectRatio).into_iter().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Result<Command> {
    parse_args(args.iter().map(|arg| arg.to_string()))
  }

  #[test] fn defaults() -> Result<()> {
    assert_eq!(parse(&[])?, Command::Run(Args::default()));
    Ok(())
  }

  #[test] fn all_flags() -> Result<()> {
    let command = parse(&[
      "--ratio", "16:9", "--glyphs", "icons", "--seed", "42", "--time", "1.5",
      "--out", "x.png", "--open"
    ])?;
    let args = match command {
      Command::Run(args) => args,
      Command::Help => panic!("expected run")
    };
    assert_eq!(args.ratio, Some(AspectRatio::new(16, 9)));
    assert_eq!(args.glyphs, Some(PathBuf::from("icons")));
    assert_eq!(args.seed, Some(42));
    assert_eq!(args.time, Some(Duration::from_millis(1500)));
    assert_eq!(args.out, PathBuf::from("x.png"));
    assert!(args.open);
    assert_eq!(args.controls(), vec![Control::AspectRatio(AspectRatio::new(16, 9))]);
    assert_eq!(args.poster_config()?.seed, Some(42));
    assert_eq!(args.provider().name(), DirectoryGlyphs::new("icons").name());
    Ok(())
  }

  #[test] fn help_wins() -> Result<()> {
    assert_eq!(parse(&["--seed", "1", "--help", "--bogus"])?, Command::Help);
    Ok(())
  }

  #[test] fn bad_arguments() {
    assert!(parse(&["--bogus"]).is_err());
    assert!(parse(&["--seed"]).is_err());
    assert!(parse(&["--seed", "many"]).is_err());
    assert!(parse(&["--ratio", "16x9"]).is_err());
    assert!(parse(&["--time", "-1"]).is_err());
    assert!(parse(&["--time", "1e30"]).is_err());
    assert!(parse(&["--time", "inf"]).is_err());
    assert!(parse(&["--time", "NaN"]).is_err());
    assert!(parse(&["--offline", "--glyphs", "icons"]).is_err());
  }

  #[test] fn offline_provider() -> Result<()> {
    match parse(&["--offline"])? {
      Command::Run(args) => assert_eq!(args.provider().name(), NoGlyphs.name()),
      Command::Help => panic!("expected run")
    }
    Ok(())
  }
}
