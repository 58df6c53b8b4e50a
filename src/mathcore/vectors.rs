//! `mathcore::vectors` submodule implements two-dimensional vectors on a plane which can be used to represent
//! position, force, velocity, acceleration and other things.
//!
//! Degenerate operations (division by zero, normalization of a zero-length vector)
//! never fail: they return [`Vector2::zero`], which is treated as "no direction, no effect".
//!

use crate::mathcore::floats::FloatOperations;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$struct_name> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $struct_name) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
// This could've been integrated in `impl_vector_vector_operations` macro
// but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f64` coordinates on a plane.
///
/// Equality (`==`) is exact; use [`Vector2::almost_equal`] or [`Vector2::equal_to_precision`]
/// for values that went through float arithmetic.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::vectors::Vector2;
/// let force: Vector2 = Vector2 { x: 3.0, y: 4.0 };
/// assert_eq!(force.magnitude(), 5.0);
/// assert_eq!(force / 0.0, Vector2::zero());
/// assert_eq!(force.clamped_magnitude(10.0), force);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f64,

    /// Y component of vector.
    ///
    pub y: f64,
}
impl Vector2 {
    /// Initializes vector from its components.
    ///
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }
    /// Initializes vector with zeroes.
    ///
    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Initializes vector with ones.
    ///
    pub const fn one() -> Self {
        Vector2 { x: 1.0, y: 1.0 }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f64; 2] {
        [self.x, self.y]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f64; 2]) {
        self.x = elements[0];
        self.y = elements[1];
    }

    /// Applies function to every vector element and returns changed vector.
    ///
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Vector2::from(self.elements().map(f))
    }
    /// Combines vectors by applying function on their elements.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Vector2 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f64 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Returns squared magnitude of a vector (vector length).
    ///
    /// Prefer this over [`Vector2::magnitude`] when only comparing lengths.
    ///
    pub fn sqr_magnitude(&self) -> f64 {
        self.dot_product(*self)
    }
    /// Returns magnitude of vector.
    ///
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Multiplies every component of a vector by a scalar.
    ///
    pub fn scaled(self, k: f64) -> Self {
        self.map(|a| a * k)
    }
    /// Divides every component of a vector by a scalar.
    ///
    /// Division by zero returns zero vector.
    ///
    pub fn divided(self, k: f64) -> Self {
        if k == 0.0 {
            Vector2::zero()
        } else {
            self.map(|a| a / k)
        }
    }
    /// Returns vector with opposite direction.
    ///
    pub fn negated(self) -> Self {
        self.map(|a| -a)
    }

    /// Returns new vector that is normalized.
    ///
    /// Zero vector stays zero vector.
    ///
    pub fn normalized(self) -> Self {
        self.divided(self.magnitude())
    }
    /// Returns vector with the same direction and given magnitude.
    ///
    /// Zero vector has no direction, so it stays zero vector.
    /// Negative magnitude flips direction.
    ///
    pub fn with_magnitude(self, magnitude: f64) -> Self {
        self.normalized().scaled(magnitude)
    }
    /// Returns new vector, which magnitude is clamped to `max_magnitude`.
    ///
    /// Vector is returned unchanged if its magnitude does not exceed `max_magnitude`.
    ///
    /// # Example
    /// ```rust
    /// # use nature2d::mathcore::vectors::Vector2;
    /// let v: Vector2 = Vector2 { x: 30.0, y: 40.0 };
    /// assert_eq!(v.clamped_magnitude(5.0), Vector2 { x: 3.0, y: 4.0 });
    /// assert_eq!(v.clamped_magnitude(100.0), v);
    /// ```
    ///
    pub fn clamped_magnitude(self, max_magnitude: f64) -> Self {
        if self.magnitude() <= max_magnitude {
            self
        } else {
            self.with_magnitude(max_magnitude)
        }
    }

    /// Returns whether every component of two vectors differs by no more than `epsilon`.
    ///
    pub fn almost_equal(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
    /// Returns whether two vectors are equal after rounding their components
    /// to `digits` digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use nature2d::mathcore::vectors::Vector2;
    /// let a: Vector2 = Vector2 { x: 0.1 + 0.2, y: 1.0 };
    /// assert_ne!(a, Vector2 { x: 0.3, y: 1.0 });
    /// assert!(a.equal_to_precision(Vector2 { x: 0.3, y: 1.0 }, 2));
    /// ```
    ///
    pub fn equal_to_precision(self, other: Self, digits: i32) -> bool {
        self.round_up_to(digits) == other.round_up_to(digits)
    }

    /// Returns vector whose components are independently and uniformly drawn from `[-1.0; 1.0]`.
    ///
    /// Resulting vector is **not** normalized: its magnitude lies anywhere in `[0.0; sqrt(2)]`.
    ///
    pub fn random_unit_ish<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Vector2 {
            x: rng.gen_range(-1.0..=1.0),
            y: rng.gen_range(-1.0..=1.0),
        }
    }
    /// Same as [`Vector2::random_unit_ish`], but draws from thread-local generator.
    ///
    pub fn random_unit_ish_thread() -> Self {
        Vector2::random_unit_ish(&mut rand::thread_rng())
    }
}
impl FloatOperations for Vector2 {
    /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2 { x, y }
    }
}
impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}
impl Mul for Vector2 {
    type Output = f64;

    /// Performs dot product operation on two vectors.
    ///
    fn mul(self, other: Self) -> Self::Output {
        self.dot_product(other)
    }
}
impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}
impl Div<f64> for Vector2 {
    type Output = Self;

    /// Division by zero returns zero vector.
    ///
    fn div(self, rhs: f64) -> Self::Output {
        self.divided(rhs)
    }
}
impl_vector_vector_operations!(Vector2, ((Add, add, +),
                                         (Sub, sub, -),));
impl_vector_assignoperations!(Vector2, Vector2, ((AddAssign, add_assign, +),
                                                 (SubAssign, sub_assign, -),));
impl_vector_assignoperations!(Vector2, f64, ((MulAssign, mul_assign, *),
                                             (DivAssign, div_assign, /),));

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;
/// Type alias for [`Vector2`].
///
pub type Vertex = Point;

#[cfg(test)]
mod tests {
    use super::Vector2;

    #[test]
    fn vector() {
        assert_eq!(Vector2::zero(), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(Vector2::one(), Vector2 { x: 1.0, y: 1.0 });

        let vec1: Vector2 = Vector2::from([4.0, 8.0]);
        let vec2: Vector2 = Vector2::from([3.0, 9.0]);
        assert_eq!(vec1 + vec2, Vector2::from([7.0, 17.0]));
        assert_eq!(vec1 - vec2, Vector2::from([1.0, -1.0]));
        assert_eq!(Vector2::zero() + vec2, vec2);
        assert_eq!(Vector2::zero() - vec2, Vector2::from([-3.0, -9.0]));

        assert_eq!(vec1 + vec2, vec2 + vec1);
        assert_eq!(vec1 - vec2, -(vec2 - vec1));

        assert_eq!(vec1 * vec2, 84.0);
        assert_eq!(vec1 * 0.5, Vector2::from([2.0, 4.0]));
        assert_eq!(vec1 / 4.0, Vector2::from([1.0, 2.0]));

        let mut vec3: Vector2 = vec1;
        vec3 += vec2;
        assert_eq!(vec3, Vector2::from([7.0, 17.0]));
        vec3 -= vec1;
        assert_eq!(vec3, vec2);
        vec3 *= 2.0;
        assert_eq!(vec3, Vector2::from([6.0, 18.0]));
        vec3 /= 3.0;
        assert_eq!(vec3, Vector2::from([2.0, 6.0]));
        vec3 /= 0.0;
        assert_eq!(vec3, Vector2::zero());

        assert_eq!(Vector2::from([-3.0, 2.0]).cross_product(Vector2::from([1.0, 2.0])), -8.0);
    }

    #[test]
    fn degenerate() {
        let v: Vector2 = Vector2::from([12.5, -7.0]);
        assert_eq!(v.divided(0.0), Vector2::zero());
        assert_eq!(Vector2::zero().normalized(), Vector2::zero());
        assert_eq!(Vector2::zero().with_magnitude(10.0), Vector2::zero());
        assert_eq!(Vector2::zero().clamped_magnitude(0.0), Vector2::zero());
    }

    #[test]
    fn magnitude() {
        let v: Vector2 = Vector2::from([3.0, 4.0]);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(v.normalized(), Vector2::from([0.6, 0.8]));
        assert!(v
            .with_magnitude(-200.0)
            .almost_equal(Vector2::from([-120.0, -160.0]), 1e-9));

        for max in [0.0, 0.5, 1.0, 4.99, 5.0, 7.5] {
            let clamped: Vector2 = v.clamped_magnitude(max);
            assert!(clamped.magnitude() <= max + 1e-9);
        }
        assert_eq!(v.clamped_magnitude(5.0), v);
        assert_eq!(v.clamped_magnitude(6.0), v);
    }

    #[test]
    fn equality() {
        let a: Vector2 = Vector2::from([0.1 + 0.2, 2.0]);
        let b: Vector2 = Vector2::from([0.3, 2.0]);
        assert_ne!(a, b);
        assert!(a.almost_equal(b, 1e-12));
        assert!(a.equal_to_precision(b, 2));
        assert!(!a.almost_equal(Vector2::from([0.31, 2.0]), 1e-3));
    }

    #[test]
    fn random_unit_ish() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v: Vector2 = Vector2::random_unit_ish(&mut rng);
            assert!((-1.0..=1.0).contains(&v.x));
            assert!((-1.0..=1.0).contains(&v.y));
        }
        let v: Vector2 = Vector2::random_unit_ish_thread();
        assert!(v.magnitude() <= 2.0_f64.sqrt());
    }
}
