//! `mathcore::shapes` submodule implements structs that are representing geometrical primitives
//! and [`Shape`] enum that unites them into one collision volume type.
//!
//! Shapes never store world position: their coordinates are relative to a local origin
//! and [`Shape::offset`] places them into the world (usually by the position of the body that owns them).
//!

use crate::mathcore::{
    transforms::Translatable,
    vectors::{Point, Vector2, Vertex},
};
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, fmt};

/// Sentinel that [`Shape::area`] returns for shapes whose area is not computed.
///
/// Any negative value returned from [`Shape::area`] should be treated as "not computed";
/// [`Shape::checked_area`] does that check.
///
pub const AREA_NOT_COMPUTED: f64 = -1.0;

/// [`Line`] struct represents two-dimensional line segment.
///
/// `Line.point1` is considered as base, so that the slope is defined as
/// `self.point2 - self.point1`.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Line {
    /// First point of segment.
    ///
    pub point1: Point,
    /// Second point of segment.
    ///
    pub point2: Point,
}
impl Line {
    /// Returns length of a segment.
    ///
    pub fn length(&self) -> f64 {
        self.slope().magnitude()
    }
    /// Returns slope of a segment.
    ///
    pub fn slope(&self) -> Vector2 {
        self.point2 - self.point1
    }
}
impl From<[Point; 2]> for Line {
    fn from([point1, point2]: [Point; 2]) -> Self {
        Line { point1, point2 }
    }
}
impl Translatable for Line {
    /// For a line segment, origin is a midpoint.
    ///
    fn origin(&self) -> Point {
        (self.point1 + self.point2) * 0.5
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.point1 += vector;
        self.point2 += vector;
    }
}

/// [`Circle`] struct represents circle with given center and radius.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    /// Center of a circle.
    ///
    pub center: Point,
    /// Radius of a circle.
    ///
    pub radius: f64,
}
impl Translatable for Circle {
    fn origin(&self) -> Point {
        self.center
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.center += vector;
    }
}

/// [`Rect`] struct represents axis-aligned rectangle.
///
/// `pos` is the corner with the smallest coordinates (top left corner in screen space),
/// `width` and `height` extend rectangle along positive directions of axes.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::shapes::Rect;
/// # use nature2d::mathcore::vectors::Point;
/// let rect: Rect = Rect::new(0.0, 0.0, 800.0, 450.0);
/// assert_eq!(rect.bottom(), 450.0);
/// assert_eq!(rect.center(), Point { x: 400.0, y: 225.0 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Top left corner of a rectangle.
    ///
    pub pos: Point,
    /// Width of a rectangle.
    ///
    pub width: f64,
    /// Height of a rectangle.
    ///
    pub height: f64,
}
impl Rect {
    /// Constructs rectangle from its top left corner and size.
    ///
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            pos: Point { x, y },
            width,
            height,
        }
    }

    /// Returns y coordinate of the bottom edge.
    ///
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.height
    }
    /// Returns x coordinate of the right edge.
    ///
    pub fn right(&self) -> f64 {
        self.pos.x + self.width
    }
    /// Returns center point of a rectangle.
    ///
    pub fn center(&self) -> Point {
        self.pos + Vector2::new(self.width, self.height) * 0.5
    }

    /// Returns rectangle corners in clockwise order (in screen space), starting from `pos`.
    ///
    pub fn vertices(&self) -> [Vertex; 4] {
        [
            self.pos,
            Vertex::new(self.right(), self.pos.y),
            Vertex::new(self.right(), self.bottom()),
            Vertex::new(self.pos.x, self.bottom()),
        ]
    }
}
impl Translatable for Rect {
    fn origin(&self) -> Point {
        self.pos
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.pos += vector;
    }
}

/// [`PolygonLike`] trait defines shapes that can be represented by a list of vertices.
///
pub trait PolygonLike {
    /// Returns shared slice with polygon's vertices.
    ///
    fn vertices(&self) -> &[Vertex];

    /// Returns `Vec` with polygon's edges.
    ///
    /// Length of `self.edges()` is equal to `self.vertices().len()`
    /// (the last edge closes polygon).
    ///
    fn edges(&self) -> Vec<Line> {
        let vertices: &[Vertex] = self.vertices();
        let n: usize = vertices.len();

        let mut edges: Vec<Line> = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(Line {
                point1: vertices[i],
                point2: vertices[(i + 1) % n],
            });
        }
        edges
    }
}

/// [`Triangle`] struct represents triangle given by its three vertices.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    /// Vertices of a triangle.
    ///
    pub vertices: [Vertex; 3],
}
impl PolygonLike for Triangle {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
impl Translatable for Triangle {
    /// For a triangle, origin is its centroid.
    ///
    fn origin(&self) -> Point {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.vertices
            .iter_mut()
            .for_each(|vertex| *vertex += vector);
    }
}

/// [`Poly`] struct represents arbitrary polygon.
///
/// Polygon owns its vertices; their amount is fixed once polygon is constructed.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Poly {
    /// Vertices of a polygon.
    ///
    vertices: Vec<Vertex>,
}
impl Poly {
    /// Constructs polygon from its vertices.
    ///
    pub fn new(vertices: impl Into<Vec<Vertex>>) -> Self {
        Poly {
            vertices: vertices.into(),
        }
    }

    /// Returns amount of vertices.
    ///
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    /// Returns whether polygon has no vertices at all.
    ///
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
impl PolygonLike for Poly {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
impl Translatable for Poly {
    /// For a polygon, origin is the mean of its vertices (zero vector for an empty polygon).
    ///
    fn origin(&self) -> Point {
        self.vertices
            .iter()
            .fold(Point::zero(), |acc, vertex| acc + *vertex)
            / self.vertices.len() as f64
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.vertices
            .iter_mut()
            .for_each(|vertex| *vertex += vector);
    }
}

/// [`ShapeKind`] enum lists kinds of shapes; it is the discriminant of [`Shape`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    /// [`Shape::Point`] kind.
    ///
    Point,
    /// [`Shape::Line`] kind.
    ///
    Line,
    /// [`Shape::Circle`] kind.
    ///
    Circle,
    /// [`Shape::Rect`] kind.
    ///
    Rect,
    /// [`Shape::Triangle`] kind.
    ///
    Triangle,
    /// [`Shape::Poly`] kind.
    ///
    Poly,
}
impl ShapeKind {
    /// Amount of shape kinds.
    ///
    pub const COUNT: usize = 6;
    /// All shape kinds in declaration order.
    ///
    pub const ALL: [ShapeKind; ShapeKind::COUNT] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Triangle,
        ShapeKind::Poly,
    ];

    /// Returns index of a kind in [`ShapeKind::ALL`].
    ///
    pub const fn index(self) -> usize {
        self as usize
    }
}
impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Poly => "poly",
        };
        f.write_str(name)
    }
}

/// [`Shape`] enum is a tagged union of all geometrical primitives that can be used as
/// collision volumes.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::shapes::{Shape, ShapeKind};
/// # use nature2d::mathcore::vectors::Vector2;
/// let circle: Shape = Shape::circle(0.0, 0.0, 40.0);
/// let placed: Shape = circle.offset(Vector2 { x: 100.0, y: 100.0 });
/// assert_eq!(placed, Shape::circle(100.0, 100.0, 40.0));
/// assert_eq!(circle.kind(), ShapeKind::Circle);
/// assert_eq!(Shape::rect(0.0, 0.0, 2.0, 2.0).checked_area(), None);
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Single point.
    ///
    Point(Point),
    /// Line segment.
    ///
    Line(Line),
    /// Circle.
    ///
    Circle(Circle),
    /// Axis-aligned rectangle.
    ///
    Rect(Rect),
    /// Triangle.
    ///
    Triangle(Triangle),
    /// Polygon.
    ///
    Poly(Poly),
}
impl Shape {
    /// Constructs point shape.
    ///
    pub fn point(x: f64, y: f64) -> Self {
        Shape::Point(Point { x, y })
    }
    /// Constructs line segment shape.
    ///
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Shape::Line(Line {
            point1: Point { x: x1, y: y1 },
            point2: Point { x: x2, y: y2 },
        })
    }
    /// Constructs circle shape.
    ///
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Shape::circle_at(Point { x, y }, radius)
    }
    /// Constructs circle shape from its center point.
    ///
    pub fn circle_at(center: Point, radius: f64) -> Self {
        Shape::Circle(Circle { center, radius })
    }
    /// Constructs axis-aligned rectangle shape.
    ///
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape::Rect(Rect::new(x, y, width, height))
    }
    /// Constructs triangle shape.
    ///
    pub fn triangle(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Shape::Triangle(Triangle {
            vertices: [a, b, c],
        })
    }
    /// Constructs polygon shape.
    ///
    pub fn poly(vertices: impl Into<Vec<Vertex>>) -> Self {
        Shape::Poly(Poly::new(vertices))
    }

    /// Returns kind of a shape.
    ///
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Poly(_) => ShapeKind::Poly,
        }
    }

    /// Returns copy of a shape with every coordinate translated by `origin`.
    ///
    pub fn offset(&self, origin: Vector2) -> Self {
        self.translated(origin)
    }

    /// Returns area of a shape.
    ///
    /// Area is computed for points (`1.0`) and circles (`PI * r * r`) only;
    /// every other shape returns [`AREA_NOT_COMPUTED`].
    ///
    pub fn area(&self) -> f64 {
        match self {
            Shape::Point(_) => 1.0,
            Shape::Circle(circle) => PI * circle.radius * circle.radius,
            Shape::Line(_) | Shape::Rect(_) | Shape::Triangle(_) | Shape::Poly(_) => {
                AREA_NOT_COMPUTED
            }
        }
    }
    /// Returns area of a shape or `None` if it is not computed for this kind of shape.
    ///
    pub fn checked_area(&self) -> Option<f64> {
        let area: f64 = self.area();
        if area < 0.0 {
            None
        } else {
            Some(area)
        }
    }
}
impl Translatable for Shape {
    fn origin(&self) -> Point {
        match self {
            Shape::Point(point) => point.origin(),
            Shape::Line(line) => line.origin(),
            Shape::Circle(circle) => circle.origin(),
            Shape::Rect(rect) => rect.origin(),
            Shape::Triangle(triangle) => triangle.origin(),
            Shape::Poly(poly) => poly.origin(),
        }
    }

    fn translate_on(&mut self, vector: Vector2) {
        match self {
            Shape::Point(point) => point.translate_on(vector),
            Shape::Line(line) => line.translate_on(vector),
            Shape::Circle(circle) => circle.translate_on(vector),
            Shape::Rect(rect) => rect.translate_on(vector),
            Shape::Triangle(triangle) => triangle.translate_on(vector),
            Shape::Poly(poly) => poly.translate_on(vector),
        }
    }
}
impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}
impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}
impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}
impl From<Poly> for Shape {
    fn from(poly: Poly) -> Self {
        Shape::Poly(poly)
    }
}
