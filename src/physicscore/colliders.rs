//! `physicscore::colliders` submodule implements [`Collider`] - ordered collection of shapes
//! that is rigidly attached to a body.
//!

use crate::mathcore::{
    collisions::{CollisionSystem, BASELINE},
    shapes::Shape,
    vectors::Vector2,
};
use serde::{Deserialize, Serialize};
use std::slice;

/// [`Collider`] struct holds shapes that are defined relative to the position of a body.
///
/// Order of shapes is insertion order. It does not affect collision outcome,
/// only the order in which shapes are drawn.
///
/// # Example
/// ```rust
/// # use nature2d::physicscore::colliders::Collider;
/// # use nature2d::mathcore::{shapes::Shape, vectors::Vector2};
/// let mut collider1: Collider = Collider::new();
/// collider1.add_shape(Shape::point(0.0, 0.0));
/// let mut collider2: Collider = Collider::new();
/// collider2.add_shape(Shape::point(-10.0, 0.0));
///
/// assert!(Collider::detect_collision(
///     Vector2 { x: 0.0, y: 0.0 }, &collider1,
///     Vector2 { x: 10.0, y: 0.0 }, &collider2,
/// ));
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Collider {
    /// Shapes of a collider.
    ///
    shapes: Vec<Shape>,
}
impl Collider {
    /// Constructs empty collider.
    ///
    pub fn new() -> Self {
        Collider { shapes: Vec::new() }
    }

    /// Appends shape to a collider.
    ///
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
    /// Appends shape to a collider and returns the collider.
    ///
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.add_shape(shape);
        self
    }
    /// Drops every shape of a collider (including vertex buffers of polygons).
    ///
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.shapes.shrink_to_fit();
    }

    /// Returns shapes of a collider in insertion order.
    ///
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    /// Returns iterator over shapes of a collider.
    ///
    pub fn iter(&self) -> slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
    /// Returns amount of shapes.
    ///
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    /// Returns whether collider has no shapes.
    ///
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns whether any shape of `collider1` placed at `origin1` collides
    /// with any shape of `collider2` placed at `origin2`.
    ///
    /// Every pair is tested with [`BASELINE`] collision table; search stops on the first hit.
    /// Empty colliders never collide.
    ///
    pub fn detect_collision(
        origin1: Vector2,
        collider1: &Collider,
        origin2: Vector2,
        collider2: &Collider,
    ) -> bool {
        Collider::detect_collision_with(&BASELINE, origin1, collider1, origin2, collider2)
    }
    /// Same as [`Collider::detect_collision`], but uses provided collision system.
    ///
    pub fn detect_collision_with(
        collision_system: &(impl CollisionSystem + ?Sized),
        origin1: Vector2,
        collider1: &Collider,
        origin2: Vector2,
        collider2: &Collider,
    ) -> bool {
        // shapes of the inner collider are placed once instead of once per outer shape
        let placed2: Vec<Shape> = collider2
            .iter()
            .map(|shape| shape.offset(origin2))
            .collect();

        collider1.iter().any(|shape1| {
            let placed1: Shape = shape1.offset(origin1);
            placed2
                .iter()
                .any(|shape2| collision_system.is_colliding(&placed1, shape2))
        })
    }
}
impl From<Vec<Shape>> for Collider {
    fn from(shapes: Vec<Shape>) -> Self {
        Collider { shapes }
    }
}
impl FromIterator<Shape> for Collider {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Collider {
            shapes: iter.into_iter().collect(),
        }
    }
}
impl Extend<Shape> for Collider {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}
impl<'a> IntoIterator for &'a Collider {
    type Item = &'a Shape;
    type IntoIter = slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Collider;
    use crate::mathcore::{
        collisions::{CollisionSystem, CollisionTable},
        shapes::{Shape, ShapeKind},
        vectors::Vector2,
    };
    use std::cell::Cell;

    #[test]
    fn collider() {
        let mut collider: Collider = Collider::new();
        assert!(collider.is_empty());

        collider.add_shape(Shape::circle(0.0, 0.0, 10.0));
        collider.extend([Shape::point(1.0, 1.0), Shape::rect(0.0, 0.0, 1.0, 1.0)]);
        assert_eq!(collider.len(), 3);
        assert_eq!(
            collider.iter().map(Shape::kind).collect::<Vec<ShapeKind>>(),
            [ShapeKind::Circle, ShapeKind::Point, ShapeKind::Rect]
        );

        collider.clear();
        assert!(collider.is_empty());
        assert!(collider.shapes().is_empty());
    }

    #[test]
    fn detection() {
        let points1: Collider = [Shape::point(0.0, 0.0), Shape::point(5.0, 5.0)]
            .into_iter()
            .collect();
        let points2: Collider = Collider::new().with_shape(Shape::point(0.0, 0.0));

        // (5, 5) + (0, 0) meets (0, 0) + (5, 5)
        assert!(Collider::detect_collision(
            Vector2::zero(),
            &points1,
            Vector2::from([5.0, 5.0]),
            &points2
        ));
        assert!(Collider::detect_collision(
            Vector2::from([5.0, 5.0]),
            &points2,
            Vector2::zero(),
            &points1
        ));
        assert!(!Collider::detect_collision(
            Vector2::zero(),
            &points1,
            Vector2::from([1.0, 0.0]),
            &points2
        ));

        let empty: Collider = Collider::new();
        assert!(!Collider::detect_collision(Vector2::zero(), &empty, Vector2::zero(), &points1));
        assert!(!Collider::detect_collision(Vector2::zero(), &points1, Vector2::zero(), &empty));
    }

    #[test]
    fn circles_fall_back_to_no_collision() {
        let big: Collider = Collider::new().with_shape(Shape::circle(0.0, 0.0, 40.0));
        let small: Collider = Collider::new().with_shape(Shape::circle(0.0, 0.0, 30.0));

        // circle-circle has no test in the baseline table, even for fully overlapping circles
        assert!(!Collider::detect_collision(Vector2::zero(), &big, Vector2::zero(), &small));

        fn circle_circle(s1: &Shape, s2: &Shape) -> bool {
            match (s1, s2) {
                (Shape::Circle(c1), Shape::Circle(c2)) => {
                    (c1.center - c2.center).magnitude() < c1.radius + c2.radius
                }
                _ => false,
            }
        }
        let table: CollisionTable =
            CollisionTable::baseline().with(ShapeKind::Circle, ShapeKind::Circle, circle_circle);
        let a: Vector2 = Vector2::from([100.0, 100.0]);
        assert!(Collider::detect_collision_with(&table, a, &big, a + Vector2::from([69.0, 0.0]), &small));
        assert!(!Collider::detect_collision_with(&table, a, &big, a + Vector2::from([70.0, 0.0]), &small));
    }

    #[test]
    fn short_circuit() {
        /// Counts calls and reports every pair as colliding.
        ///
        struct Counting(Cell<usize>);
        impl CollisionSystem for Counting {
            fn is_colliding(&self, _: &Shape, _: &Shape) -> bool {
                self.0.set(self.0.get() + 1);
                true
            }
        }

        let collider: Collider = vec![Shape::point(0.0, 0.0); 4].into();
        let counting: Counting = Counting(Cell::new(0));
        assert!(Collider::detect_collision_with(
            &counting,
            Vector2::zero(),
            &collider,
            Vector2::zero(),
            &collider
        ));
        assert_eq!(counting.0.get(), 1);
    }
}
