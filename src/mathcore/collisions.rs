//! `mathcore::collisions` submodule defines collision systems
//! that are used to detect collisions between two shapes.
//!
//! Detection is discrete: two shapes are tested at one point in time, without any
//! knowledge about their movement.
//!
//! # Coverage
//! [`CollisionTable`] is indexed by the unordered pair of [`ShapeKind`]s.
//! The baseline table only knows how to collide two points (exact coordinate equality);
//! every other pair of kinds answers "no collision" until a test is registered for it.
//! Callers therefore degrade safely instead of failing on a pair nobody implemented.
//!

use crate::mathcore::shapes::{Shape, ShapeKind};
use std::fmt;

/// Signature of a shape-pair collision test.
///
/// Test registered for `(a, b)` kinds always receives shape of kind `a` first.
///
pub type CollisionFn = fn(&Shape, &Shape) -> bool;

/// `CollisionSystem` trait defines systems that can detect collisions between two shapes.
///
pub trait CollisionSystem {
    /// Returns whether two shapes collide or not.
    ///
    fn is_colliding(&self, shape1: &Shape, shape2: &Shape) -> bool;
}

/// Registered test and whether arguments should be swapped before calling it.
///
type Entry = Option<(CollisionFn, bool)>;

/// `CollisionTable` is a collision system that dispatches on kinds of both shapes.
///
/// Table is symmetric: registering a test for `(a, b)` also answers `(b, a)`.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::collisions::{CollisionSystem, CollisionTable};
/// # use nature2d::mathcore::shapes::{Shape, ShapeKind};
/// fn circle_circle(s1: &Shape, s2: &Shape) -> bool {
///     match (s1, s2) {
///         (Shape::Circle(c1), Shape::Circle(c2)) => {
///             (c1.center - c2.center).magnitude() < c1.radius + c2.radius
///         }
///         _ => false,
///     }
/// }
///
/// let baseline: CollisionTable = CollisionTable::baseline();
/// let extended: CollisionTable =
///     baseline.with(ShapeKind::Circle, ShapeKind::Circle, circle_circle);
///
/// let (c1, c2) = (Shape::circle(0.0, 0.0, 40.0), Shape::circle(50.0, 0.0, 30.0));
/// assert!(!baseline.is_colliding(&c1, &c2));
/// assert!(extended.is_colliding(&c1, &c2));
/// ```
///
#[derive(Copy, Clone)]
pub struct CollisionTable {
    /// Tests indexed by kinds of the first and second shape.
    ///
    entries: [[Entry; ShapeKind::COUNT]; ShapeKind::COUNT],
}
impl CollisionTable {
    /// Constructs table where no pair of shapes ever collides.
    ///
    pub const fn empty() -> Self {
        CollisionTable {
            entries: [[None; ShapeKind::COUNT]; ShapeKind::COUNT],
        }
    }
    /// Constructs table that only implements point-point collision.
    ///
    pub const fn baseline() -> Self {
        let mut entries: [[Entry; ShapeKind::COUNT]; ShapeKind::COUNT] =
            [[None; ShapeKind::COUNT]; ShapeKind::COUNT];
        let point: usize = ShapeKind::Point.index();
        entries[point][point] = Some((point_point as CollisionFn, false));
        CollisionTable { entries }
    }

    /// Registers collision test for given pair of kinds, replacing previous one.
    ///
    /// `test` receives shape of kind `kind1` as its first argument.
    ///
    pub fn register(&mut self, kind1: ShapeKind, kind2: ShapeKind, test: CollisionFn) {
        let (i, j): (usize, usize) = (kind1.index(), kind2.index());
        self.entries[i][j] = Some((test, false));
        if i != j {
            self.entries[j][i] = Some((test, true));
        }
    }
    /// Registers collision test for given pair of kinds and returns the table.
    ///
    pub fn with(mut self, kind1: ShapeKind, kind2: ShapeKind, test: CollisionFn) -> Self {
        self.register(kind1, kind2, test);
        self
    }
    /// Removes collision test for given pair of kinds, so that pair never collides.
    ///
    pub fn unregister(&mut self, kind1: ShapeKind, kind2: ShapeKind) {
        let (i, j): (usize, usize) = (kind1.index(), kind2.index());
        self.entries[i][j] = None;
        self.entries[j][i] = None;
    }

    /// Returns whether table has a collision test for given pair of kinds.
    ///
    pub fn covers(&self, kind1: ShapeKind, kind2: ShapeKind) -> bool {
        self.entries[kind1.index()][kind2.index()].is_some()
    }
}
impl CollisionSystem for CollisionTable {
    fn is_colliding(&self, shape1: &Shape, shape2: &Shape) -> bool {
        match self.entries[shape1.kind().index()][shape2.kind().index()] {
            Some((test, false)) => test(shape1, shape2),
            Some((test, true)) => test(shape2, shape1),
            None => false,
        }
    }
}
impl Default for CollisionTable {
    fn default() -> Self {
        CollisionTable::baseline()
    }
}
impl fmt::Debug for CollisionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut covered: Vec<(ShapeKind, ShapeKind)> = Vec::new();
        for kind1 in ShapeKind::ALL {
            for kind2 in ShapeKind::ALL {
                if kind1 <= kind2 && self.covers(kind1, kind2) {
                    covered.push((kind1, kind2));
                }
            }
        }
        f.debug_struct("CollisionTable")
            .field("covered", &covered)
            .finish()
    }
}

/// Collision table that is used by [`shape_collide`].
///
pub const BASELINE: CollisionTable = CollisionTable::baseline();

/// Point-point collision: points collide only when their coordinates are exactly equal.
///
fn point_point(shape1: &Shape, shape2: &Shape) -> bool {
    match (shape1, shape2) {
        (Shape::Point(p1), Shape::Point(p2)) => p1 == p2,
        _ => false,
    }
}

/// Returns whether two shapes collide according to [`BASELINE`] table.
///
/// Function is total: pairs of kinds that have no collision test return `false`.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::collisions::shape_collide;
/// # use nature2d::mathcore::shapes::Shape;
/// assert!(shape_collide(&Shape::point(0.0, 0.0), &Shape::point(0.0, 0.0)));
/// assert!(!shape_collide(&Shape::point(0.0, 0.0), &Shape::point(1.0, 0.0)));
/// assert!(!shape_collide(&Shape::circle(0.0, 0.0, 5.0), &Shape::point(0.0, 0.0)));
/// ```
///
pub fn shape_collide(shape1: &Shape, shape2: &Shape) -> bool {
    BASELINE.is_colliding(shape1, shape2)
}
/// Returns whether two shapes are colliding or not.
///
/// Detection is performed by using provided collision system.
///
pub fn is_colliding(
    collision_system: &(impl CollisionSystem + ?Sized),
    shape1: &Shape,
    shape2: &Shape,
) -> bool {
    collision_system.is_colliding(shape1, shape2)
}

#[cfg(test)]
mod tests {
    use super::{CollisionSystem, CollisionTable};
    use crate::mathcore::{
        shapes::{Shape, ShapeKind},
        vectors::Vertex,
    };

    /// One shape of every kind, all of them overlapping the origin.
    ///
    fn overlapping_shapes() -> Vec<Shape> {
        vec![
            Shape::point(0.0, 0.0),
            Shape::line(-1.0, 0.0, 1.0, 0.0),
            Shape::circle(0.0, 0.0, 1.0),
            Shape::rect(-1.0, -1.0, 2.0, 2.0),
            Shape::triangle(
                Vertex::new(-1.0, -1.0),
                Vertex::new(1.0, -1.0),
                Vertex::new(0.0, 1.0),
            ),
            Shape::poly(vec![
                Vertex::new(-1.0, -1.0),
                Vertex::new(1.0, -1.0),
                Vertex::new(1.0, 1.0),
                Vertex::new(-1.0, 1.0),
            ]),
        ]
    }

    #[test]
    fn point_point() {
        use super::shape_collide;

        assert!(shape_collide(&Shape::point(0.0, 0.0), &Shape::point(0.0, 0.0)));
        assert!(!shape_collide(&Shape::point(0.0, 0.0), &Shape::point(1.0, 0.0)));
        assert!(!shape_collide(&Shape::point(0.0, 0.0), &Shape::point(0.0, 1e-12)));
    }

    #[test]
    fn baseline_matrix() {
        use super::BASELINE;

        let shapes: Vec<Shape> = overlapping_shapes();
        for shape1 in &shapes {
            for shape2 in &shapes {
                let expected: bool =
                    shape1.kind() == ShapeKind::Point && shape2.kind() == ShapeKind::Point;
                assert_eq!(BASELINE.is_colliding(shape1, shape2), expected);
                assert_eq!(
                    BASELINE.covers(shape1.kind(), shape2.kind()),
                    expected,
                    "{} - {}",
                    shape1.kind(),
                    shape2.kind()
                );
            }
        }
    }

    #[test]
    fn registration() {
        fn circle_point(s1: &Shape, s2: &Shape) -> bool {
            match (s1, s2) {
                (Shape::Circle(circle), Shape::Point(point)) => {
                    (circle.center - *point).magnitude() <= circle.radius
                }
                _ => panic!("arguments must arrive in registration order"),
            }
        }

        let mut table: CollisionTable = CollisionTable::default();
        table.register(ShapeKind::Circle, ShapeKind::Point, circle_point);
        assert!(table.covers(ShapeKind::Point, ShapeKind::Circle));

        let circle: Shape = Shape::circle(0.0, 0.0, 2.0);
        let inside: Shape = Shape::point(1.0, 1.0);
        let outside: Shape = Shape::point(5.0, 0.0);
        assert!(table.is_colliding(&circle, &inside));
        assert!(table.is_colliding(&inside, &circle));
        assert!(!table.is_colliding(&outside, &circle));

        table.unregister(ShapeKind::Point, ShapeKind::Circle);
        assert!(!table.is_colliding(&circle, &inside));
        assert!(!table.covers(ShapeKind::Circle, ShapeKind::Point));

        let empty: CollisionTable = CollisionTable::empty();
        assert!(!empty.is_colliding(&inside, &inside));
        assert_eq!(
            format!("{:?}", CollisionTable::baseline()),
            "CollisionTable { covered: [(Point, Point)] }"
        );
    }
}
