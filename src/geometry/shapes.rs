use {
  super::{BoundingBox, CanvasSpace, P2},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2},
  std::f32::consts::{PI, TAU}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Square with side 2, centered in the origin
#[derive(Debug, Copy, Clone)]
pub struct Square;

/// Rectangle with rounded corners, centered in the origin.
#[derive(Debug, Copy, Clone)]
pub struct RoundedRect {
  pub half_extents: V2<f32, CanvasSpace>,
  pub radius: f32
}

/// Closed polygon, vertices in either winding order.
#[derive(Debug, Clone)]
pub struct Polygon {
  pub vertices: Vec<P2>
}

/// Line segment with zero thickness; only useful stroked.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub a: P2,
  pub b: P2
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl<S> BoundingBox<f32, S> for Square {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl BoundingBox<f32, CanvasSpace> for RoundedRect {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::new(
      (-self.half_extents).to_point(),
      self.half_extents.to_point()
    )}}

impl BoundingBox<f32, CanvasSpace> for Polygon {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::from_points(self.vertices.iter())
  }}

impl BoundingBox<f32, CanvasSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::from_points([self.a, self.b])
  }}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: P2) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f32> for Square {
  fn sdf(&self, pixel: P2) -> f32 {
    let dist = pixel.to_vector().abs() - V2::splat(1.0);
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist
  }
}

impl SDF<f32> for RoundedRect {
  fn sdf(&self, pixel: P2) -> f32 {
    let radius = self.radius
      .min(self.half_extents.x)
      .min(self.half_extents.y);
    let dist = pixel.to_vector().abs() - self.half_extents + V2::splat(radius);
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist - radius
  }
}

impl SDF<f32> for Polygon {
  // distance to the nearest edge, sign from the even-odd crossing rule
  fn sdf(&self, pixel: P2) -> f32 {
    let n = self.vertices.len();
    if n < 3 {
      return f32::MAX / 2.0;
    }
    let mut dist_sq = f32::MAX;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
      let (vi, vj) = (self.vertices[i], self.vertices[j]);
      dist_sq = dist_sq.min(segment_distance_sq(pixel, vj, vi));
      if (vi.y > pixel.y) != (vj.y > pixel.y)
        && pixel.x < (vj.x - vi.x) * (pixel.y - vi.y) / (vj.y - vi.y) + vi.x {
        inside = !inside;
      }
      j = i;
    }
    let dist = dist_sq.sqrt();
    if inside { -dist } else { dist }
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: P2) -> f32 {
    segment_distance_sq(pixel, self.a, self.b).sqrt()
  }
}

fn segment_distance_sq(p: P2, a: P2, b: P2) -> f32 {
  let pa = p - a;
  let ba = b - a;
  let len_sq = ba.square_length();
  let h = if len_sq > 0.0 {
    (pa.dot(ba) / len_sq).clamp(0.0, 1.0)
  } else {
    0.0
  };
  (pa - ba * h).square_length()
}

impl Polygon {
  /// Regular `n`-gon inscribed in the unit circle, first vertex at `phase` radians.
  pub fn regular(n: usize, phase: f32) -> Self {
    let step = TAU / n as f32;
    Polygon {
      vertices: (0..n)
        .map(|i| {
          let angle = phase + step * i as f32;
          P2::new(angle.cos(), angle.sin())
        })
        .collect()
    }
  }

  /// Star with `points` tips; inner vertices at angle `k * step`, outer tips halfway between.
  pub fn star(points: usize, outer: f32, inner: f32) -> Self {
    let step = TAU / points as f32;
    Polygon {
      vertices: (0..points)
        .flat_map(|i| {
          let a = step * i as f32;
          [
            P2::new(a.cos() * inner, a.sin() * inner),
            P2::new((a + step / 2.0).cos() * outer, (a + step / 2.0).sin() * outer)
          ]
        })
        .collect()
    }
  }

  /// Upward pointing triangle filling the unit square: apex on top, base at the bottom.
  pub fn triangle() -> Self {
    Polygon {
      vertices: vec![
        P2::new(0.0, -1.0),
        P2::new(-1.0, 1.0),
        P2::new(1.0, 1.0)
      ]
    }
  }

  /// Regular polygon with one vertex pointing up.
  pub fn upright(n: usize) -> Self {
    Polygon::regular(n, -PI / 2.0)
  }
}
