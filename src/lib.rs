//! Generative posters: a grid of coloured icons whose cell size is the greatest common
//! divisor of the canvas sides.
//!
//! A [`PosterGrid`](sketch::PosterGrid) acquires a [`GlyphSet`](glyph::GlyphSet) from a
//! [`GlyphProvider`](glyph::GlyphProvider) (falling back to simple shapes when that fails or
//! takes too long), selects a weighted [`Catalog`](catalog::Catalog) of icon names, fills
//! the grid, and draws every cell with a stroke width and scale that vibrate over time.
//! It runs inside any [`Sketch`](host::Sketch) host; [`FrameLoop`](host::FrameLoop) renders
//! offscreen into an `RgbaImage`.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   poster_grid::{
//! #     config::PosterConfig,
//! #     error::Result,
//! #     glyph::BuiltinGlyphs,
//! #     host::FrameLoop,
//! #     sketch::PosterGrid
//! #   },
//! #   std::sync::Arc
//! # };
//! # fn main() -> Result<()> {
//! let config = PosterConfig { seed: Some(7), ..PosterConfig::default() };
//! let mut poster = PosterGrid::new(config, Arc::new(BuiltinGlyphs))?;
//! // preload, setup, then frames until the poster settles
//! let report = FrameLoop::default().run(&mut poster, None)?;
//! report.image.save("poster.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Shapes
//! Everything on the canvas is a signed distance field: glyph outlines, grid lines and
//! fallback shapes are unit shapes built from [`geometry`] primitives, placed with
//! `.scale(..).translate(..)` and rasterised with antialiasing by [`drawing`].
//! Cells are rasterised in parallel into independent patches, then composited in order.

pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod grid;
pub mod host;
pub mod sdf;
pub mod sketch;
pub mod util;
