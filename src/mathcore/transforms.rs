//! `mathcore::transforms` submodule defines traits that provide transforming interfaces to objects.
//!
//! Bodies have no rotational dynamics, so translation is the only transform `nature2d` needs:
//! it is how locally-defined shapes are placed into the world.
//!

use crate::mathcore::vectors::{Point, Vector2};

/// [`Translatable`] trait defines properties of translatable objects (objects that can be moved
/// along a vector).
///
pub trait Translatable {
    /// Returns origin of an object (the point that is moved to in `translate_to`).
    ///
    fn origin(&self) -> Point;

    /// Moves object along given vector.
    ///
    fn translate_on(&mut self, vector: Vector2);
    /// Moves object so that its origin lands at given point.
    ///
    fn translate_to(&mut self, point: Point) {
        self.translate_on(point - self.origin())
    }

    /// Returns translated copy of an object, leaving the object itself untouched.
    ///
    fn translated(&self, vector: Vector2) -> Self
    where
        Self: Clone,
    {
        let mut copy: Self = self.clone();
        copy.translate_on(vector);
        copy
    }
}
impl Translatable for Vector2 {
    fn origin(&self) -> Point {
        *self
    }

    fn translate_on(&mut self, vector: Vector2) {
        *self += vector;
    }
}
