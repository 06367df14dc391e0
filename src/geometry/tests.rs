use {
  super::*,
  euclid::Angle,
};

fn p(x: f32, y: f32) -> P2 { P2::new(x, y) }

#[test] fn circle_sign() {
  assert!(Circle.sdf(p(0.0, 0.0)) < 0.0);
  assert!((Circle.sdf(p(1.0, 0.0))).abs() < 1e-6);
  assert!(Circle.sdf(p(2.0, 0.0)) > 0.0);
}

#[test] fn placed_circle_distance_in_pixels() {
  let circle = Circle
    .scale(10.0)
    .translate(V2::new(50.0, 20.0));
  assert!((circle.sdf(p(50.0, 20.0)) + 10.0).abs() < 1e-4);
  assert!((circle.sdf(p(65.0, 20.0)) - 5.0).abs() < 1e-4);
  let bb = circle.bounding_box();
  assert_eq!(bb.min, p(40.0, 10.0));
  assert_eq!(bb.max, p(60.0, 30.0));
}

#[test] fn rounded_rect_corners() {
  let rect = RoundedRect { half_extents: V2::splat(1.0), radius: 0.4 };
  assert!(rect.sdf(p(0.0, 0.0)) < 0.0);
  // the sharp corner of the square is cut away by the rounding
  assert!(rect.sdf(p(0.98, 0.98)) > 0.0);
  assert!(Square.sdf(p(0.98, 0.98)) < 0.0);
  assert!((rect.sdf(p(1.0, 0.0))).abs() < 1e-6);
}

#[test] fn triangle_sign() {
  let triangle = Polygon::triangle();
  assert!(triangle.sdf(p(0.0, 0.5)) < 0.0);
  assert!(triangle.sdf(p(-0.9, -0.9)) > 0.0);
  assert!((triangle.sdf(p(0.0, 1.0))).abs() < 1e-6);
}

#[test] fn star_tips_and_notches() {
  let star = Polygon::star(5, 1.0, 0.5);
  assert_eq!(star.vertices.len(), 10);
  assert!(star.sdf(p(0.0, 0.0)) < 0.0);
  // first tip sits at 36 degrees on the outer radius
  let tip = 36f32.to_radians();
  assert!(star.sdf(p(tip.cos() * 0.9, tip.sin() * 0.9)) < 0.0);
  // between two tips, past the inner radius, is outside
  assert!(star.sdf(p(0.7, 0.0)) > 0.0);
}

#[test] fn regular_polygon_vertices_on_unit_circle() {
  let hexagon = Polygon::upright(6);
  hexagon.vertices.iter()
    .for_each(|v| assert!((v.to_vector().length() - 1.0).abs() < 1e-5));
  assert!((hexagon.vertices[0].y + 1.0).abs() < 1e-5);
}

#[test] fn rotation_keeps_distance_to_pivot() {
  let bar = RoundedRect { half_extents: V2::new(1.0, 0.25), radius: 0.0 };
  let rotated = bar.rotate(Angle::degrees(90.0));
  assert!(rotated.sdf(p(0.0, 0.9)) < 0.0);
  assert!(rotated.sdf(p(0.9, 0.0)) > 0.0);
}

#[test] fn segment_distance() {
  let segment = Segment { a: p(0.0, 0.0), b: p(10.0, 0.0) };
  assert!((segment.sdf(p(5.0, 3.0)) - 3.0).abs() < 1e-6);
  assert!((segment.sdf(p(13.0, 4.0)) - 5.0).abs() < 1e-5);
}

#[test] fn subtraction_makes_ring() {
  let ring = Circle.subtraction(Circle.scale(0.5));
  assert!(ring.sdf(p(0.0, 0.0)) > 0.0);
  assert!(ring.sdf(p(0.75, 0.0)) < 0.0);
}
