//! The origin of the coordinate system is in the top-left corner of the canvas, `y` grows
//! downwards. Unit shapes live in the interval `[-1, 1]` with their center in the origin and
//! are placed on the canvas with [`Shape::scale`] and [`Shape::translate`].

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Rotation2D, Angle},
  crate::{
    drawing::{Paint, Styled},
    sdf::{SDF, Union, Subtraction}
  }
};

pub mod shapes;
pub use shapes::*;
#[cfg(test)] mod tests;

/// Integer pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Continuous canvas coordinate basis, one unit per pixel
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;

pub type P2 = Point2D<f32, CanvasSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A signed distance field with known extent. Every combinator keeps both in sync.
pub trait Shape: SDF<f32> + BoundingBox<f32, CanvasSpace> {
  fn translate(self, offset: V2<f32, CanvasSpace>) -> Translation<Self> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Rotation about the center of the bounding box.
  fn rotate(self, angle: Angle<f32>) -> Rotation<Self> where Self: Sized {
    Rotation { shape: self, angle }
  }
  /// Uniform scale about the center of the bounding box. Distances scale along.
  fn scale(self, factor: f32) -> Scale<Self> where Self: Sized {
    Scale { shape: self, factor }
  }
  fn union<B>(self, other: B) -> Union<Self, B> where Self: Sized {
    Union { a: self, b: other }
  }
  /// `self` with `other` cut out of it.
  fn subtraction<B>(self, other: B) -> Subtraction<Self, B> where Self: Sized {
    Subtraction { a: self, b: other }
  }
  fn paint(self, paint: Paint) -> Styled<Self> where Self: Sized {
    Styled { shape: self, paint }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, CanvasSpace> {}

impl <T> BoundingBox<f32, CanvasSpace> for std::sync::Arc<T>
  where T: BoundingBox<f32, CanvasSpace> + ?Sized {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> { (**self).bounding_box() }
}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S> {
  pub shape: S,
  pub offset: V2<f32, CanvasSpace>
}
impl <S> BoundingBox<f32, CanvasSpace> for Translation<S>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Rotate around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Rotation<S> {
  pub shape: S,
  pub angle: Angle<f32>
}
impl <S> BoundingBox<f32, CanvasSpace> for Rotation<S>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let bounding = self.shape.bounding_box();
    let pivot = bounding.center();
    let rot = |point: P2| Rotation2D::new(self.angle)
      .transform_point((point - pivot).to_point())
      + pivot.to_vector();
    update_bounding_box(bounding, rot)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S> {
  pub shape: S,
  pub factor: f32
}
impl <S> BoundingBox<f32, CanvasSpace> for Scale<S>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.factor, self.factor)
      .translate(c)
  }
}

fn update_bounding_box(
  bounding: Box2D<f32, CanvasSpace>,
  morphism: impl Fn(P2) -> P2
) -> Box2D<f32, CanvasSpace> {
  let pts = [
    [bounding.min.x, bounding.min.y],
    [bounding.max.x, bounding.min.y],
    [bounding.max.x, bounding.max.y],
    [bounding.min.x, bounding.max.y],
  ];
  let pts = pts.iter().cloned()
    .map(|p| morphism(p.into()));
  Box2D::from_points(pts)
}
