use {
  euclid::{Point2D, Rotation2D, Box2D},
  crate::geometry::{CanvasSpace, Shape, Rotation, Scale, Translation, BoundingBox, P2},
  std::sync::Arc
};

/// Signed distance function: negative inside, positive outside, in canvas units.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

impl <T, S> SDF<T> for Arc<S> where S: SDF<T> + ?Sized {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T { (**self).sdf(pixel) }
}

impl <S> SDF<f32> for Translation<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Rotation<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f32 {
    let pivot = self.shape.bounding_box().center();
    // sample the unrotated shape: rotate the query point the other way
    let pixel = Rotation2D::new(-self.angle)
      .transform_point((pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.sdf(pixel)
  }
}

impl <S> SDF<f32> for Scale<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c) / self.factor + c.to_vector()).to_point();
    self.shape.sdf(pixel) * self.factor
  }
}

/// Points inside either shape.
#[derive(Clone, Copy, Debug)]
pub struct Union<A, B> {
  pub a: A,
  pub b: B
}

impl <A: SDF<f32>, B: SDF<f32>> SDF<f32> for Union<A, B> {
  fn sdf(&self, pixel: P2) -> f32 {
    self.a.sdf(pixel).min(self.b.sdf(pixel))
  }
}

impl <A, B> BoundingBox<f32, CanvasSpace> for Union<A, B>
  where A: BoundingBox<f32, CanvasSpace>,
        B: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.a.bounding_box().union(&self.b.bounding_box())
  }
}

/// Points inside `a` but not inside `b`; the bounding box is the one of `a`.
#[derive(Clone, Copy, Debug)]
pub struct Subtraction<A, B> {
  pub a: A,
  pub b: B
}

impl <A: SDF<f32>, B: SDF<f32>> SDF<f32> for Subtraction<A, B> {
  fn sdf(&self, pixel: P2) -> f32 {
    self.a.sdf(pixel).max(-self.b.sdf(pixel))
  }
}

impl <A, B> BoundingBox<f32, CanvasSpace> for Subtraction<A, B>
  where A: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.a.bounding_box()
  }
}
