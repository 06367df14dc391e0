use {
  super::*,
  crate::catalog::{build_catalog, CatalogSource, FALLBACK_NAMES},
  rand::SeedableRng,
  rand_pcg::Pcg64
};

fn fallback_catalog(rng: &mut Pcg64) -> Catalog {
  build_catalog(CatalogSource::Fallback, 10, rng)
}

#[test] fn poster_default_grid() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let catalog = fallback_catalog(&mut rng);
  let cells = build_grid(Size2D::new(540, 1260), 180, &catalog, &mut rng)?;
  assert_eq!(cells.len(), 21);
  cells.iter().for_each(|cell| {
    assert!((cell.size - 108.0).abs() < 1e-4);
    assert!((0.0..360.0).contains(&cell.hue));
    assert!((1.0..3.0).contains(&cell.base_stroke_width));
    assert!(FALLBACK_NAMES.contains(&cell.icon.as_str()));
  });
  Ok(())
}

#[test] fn geometry_from_gcd() -> Result<()> {
  let geometry = GridGeometry::for_canvas(Size2D::new(540, 1260))?;
  assert_eq!((geometry.cols, geometry.rows), (3, 7));
  assert_eq!((geometry.cell_width, geometry.cell_height), (180.0, 180.0));
  assert_eq!(geometry.cell_count(), 21);

  let wide = GridGeometry::for_canvas(Size2D::new(960, 540))?;
  assert_eq!((wide.cols, wide.rows), (16, 9));
  assert!((wide.icon_size() - 36.0).abs() < 1e-4);

  let square = GridGeometry::for_canvas(Size2D::new(60, 60))?;
  assert_eq!(square.cell_count(), 1);
  Ok(())
}

#[test] fn non_divisor_rejected() {
  assert!(GridGeometry::new(Size2D::new(540, 1260), 7).is_err());
  assert!(GridGeometry::new(Size2D::new(540, 1260), 0).is_err());
  assert!(GridGeometry::for_canvas(Size2D::new(0, 1260)).is_err());
}

#[test] fn column_major_order() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(1);
  let catalog = fallback_catalog(&mut rng);
  let cells = build_grid(Size2D::new(540, 1260), 180, &catalog, &mut rng)?;
  let centers = cells.iter().map(|cell| (cell.center.x, cell.center.y)).collect::<Vec<_>>();
  assert_eq!(centers[0], (90.0, 90.0));
  assert_eq!(centers[1], (90.0, 270.0));
  assert_eq!(centers[6], (90.0, 1170.0));
  assert_eq!(centers[7], (270.0, 90.0));
  assert_eq!(centers[20], (450.0, 1170.0));
  Ok(())
}

#[test] fn seeded_grids_repeat() -> Result<()> {
  let build = |seed| -> Result<Vec<Cell>> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let catalog = fallback_catalog(&mut rng);
    build_grid(Size2D::new(300, 180), 60, &catalog, &mut rng)
  };
  assert_eq!(build(5)?, build(5)?);
  assert_ne!(build(5)?, build(6)?);
  Ok(())
}

#[test] fn empty_catalog_is_an_error() {
  let mut rng = Pcg64::seed_from_u64(1);
  assert!(build_grid(Size2D::new(540, 1260), 180, &Catalog::default(), &mut rng).is_err());
}

fn cell(base: f32, x: f32) -> Cell {
  Cell { center: P2::new(x, 0.0), size: 36.0, hue: 0.0, icon: "circle".into(), base_stroke_width: base }
}

#[test] fn scale_factor_bounds() {
  let vibration = Vibration::default();
  for base in [1.0f32, 1.7, 2.99] {
    let cell = cell(base, 90.0);
    assert!((vibration.scale_factor(&cell, base - 1.5) - 0.9).abs() < 1e-5);
    assert!((vibration.scale_factor(&cell, base + 1.5) - 1.1).abs() < 1e-5);
    assert!((vibration.scale_factor(&cell, base) - 1.0).abs() < 1e-5);
  }
}

#[test] fn scale_factor_monotonic() {
  let vibration = Vibration::default();
  let cell = cell(2.0, 30.0);
  let samples = (0..=30)
    .map(|i| vibration.scale_factor(&cell, 0.5 + i as f32 * 0.1))
    .collect::<Vec<_>>();
  samples.windows(2).for_each(|w| assert!(w[1] > w[0]));
}

#[test] fn stroke_width_stays_in_band() {
  let vibration = Vibration::default();
  for x in [30.0f32, 90.0, 270.0, 450.0] {
    let cell = cell(2.0, x);
    for t in 0..100 {
      let sw = vibration.stroke_width(&cell, t as f32 * 0.37);
      assert!((0.5 - 1e-4..=3.5 + 1e-4).contains(&sw));
      let scale = vibration.scale_factor(&cell, sw);
      assert!((0.9 - 1e-4..=1.1 + 1e-4).contains(&scale));
    }
  }
}

#[test] fn columns_oscillate_out_of_phase() {
  let vibration = Vibration::default();
  let a = vibration.stroke_width(&cell(2.0, 90.0), 0.0);
  let b = vibration.stroke_width(&cell(2.0, 270.0), 0.0);
  assert!((a - b).abs() > 1e-3);
  // rows in the same column share the phase
  let mut lower = cell(2.0, 90.0);
  lower.center.y = 500.0;
  assert_eq!(vibration.stroke_width(&lower, 3.0), vibration.stroke_width(&cell(2.0, 90.0), 3.0));
}
