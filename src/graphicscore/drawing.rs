//! `graphicscore::drawing` submodule defines [`Canvas`] trait - the rendering contract of `nature2d`.
//!
//! `nature2d` does not own pixels: it hands world-space shapes and a color to whatever
//! implements [`Canvas`].
//! This submodule provides [`RecordingCanvas`] that remembers every draw call (useful for headless runs and tests)
//! and, with `sdl` feature enabled, [`SdlCanvas`] that renders through `sdl2`.
//!

use crate::mathcore::{
    shapes::{Circle, Line, PolygonLike, Rect, Shape},
    vectors::{Point, Vector2},
    Color,
};
use std::f64::consts::TAU;

/// Amount of segments that approximate circle outline in default [`Canvas::draw_circle`].
///
pub const CIRCLE_SEGMENTS: usize = 32;
/// Upper bound of segments (minus one) that default [`Canvas::fill_rect`] issues.
///
pub const MAX_FILL_ROWS: usize = 4096;

/// [`Canvas`] trait defines drawing methods that should be implemented on any canvas.
///
/// Only colors, points, segments and clearing are required; other primitives have default
/// implementations that are built from segments.
///
/// # Example
/// ```rust
/// # use nature2d::graphicscore::drawing::{Canvas, RecordingCanvas};
/// # use nature2d::mathcore::{shapes::Shape, Color};
/// let mut canvas: RecordingCanvas = RecordingCanvas::new();
/// canvas.draw_shape(&Shape::point(1.0, 2.0), Color::RED);
/// assert_eq!(canvas.get_draw_color(), Color::RED);
/// assert_eq!(canvas.commands().len(), 1);
/// ```
///
pub trait Canvas {
    /// Sets new drawing color to the canvas.
    ///
    fn set_draw_color(&mut self, color: Color);
    /// Returns color that is currently used for drawing.
    ///
    fn get_draw_color(&self) -> Color;

    /// Draws point on the canvas.
    ///
    fn draw_point(&mut self, point: Point);
    /// Draws segment on the canvas.
    ///
    fn draw_segment(&mut self, segment: Line);
    /// Draws circle on the canvas.
    ///
    /// Default implementation draws polygonal outline made of [`CIRCLE_SEGMENTS`] segments.
    ///
    fn draw_circle(&mut self, circle: Circle) {
        let on_circle = |i: usize| {
            let angle: f64 = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            circle.center + Vector2::new(angle.cos(), angle.sin()) * circle.radius
        };
        for i in 0..CIRCLE_SEGMENTS {
            self.draw_segment(Line {
                point1: on_circle(i),
                point2: on_circle(i + 1),
            });
        }
    }
    /// Fills axis-aligned rectangle on the canvas.
    ///
    /// Default implementation fills rectangle with horizontal segments, one per unit of height
    /// (but no more than [`MAX_FILL_ROWS`]).
    /// Rectangles with negative or non-finite height are skipped.
    ///
    fn fill_rect(&mut self, rect: Rect) {
        if !rect.height.is_finite() || rect.height < 0.0 {
            return;
        }
        let rows: usize = (rect.height.floor() as usize).min(MAX_FILL_ROWS);
        let step: f64 = if rows == 0 { 0.0 } else { rect.height / rows as f64 };
        for i in 0..=rows {
            let y: f64 = rect.pos.y + step * i as f64;
            self.draw_segment(Line {
                point1: Point::new(rect.pos.x, y),
                point2: Point::new(rect.right(), y),
            });
        }
    }
    /// Draws polygon outline on the canvas.
    ///
    fn draw_polygon(&mut self, polygon: &dyn PolygonLike) {
        for edge in polygon.edges() {
            self.draw_segment(edge);
        }
    }

    /// Clears canvas by filling it out with current draw color.
    ///
    fn clear(&mut self);

    /// Draws world-space shape with given color.
    ///
    /// Sets draw color of the canvas to `color`.
    ///
    fn draw_shape(&mut self, shape: &Shape, color: Color) {
        self.set_draw_color(color);
        match shape {
            Shape::Point(point) => self.draw_point(*point),
            Shape::Line(line) => self.draw_segment(*line),
            Shape::Circle(circle) => self.draw_circle(*circle),
            Shape::Rect(rect) => self.fill_rect(*rect),
            Shape::Triangle(triangle) => self.draw_polygon(triangle),
            Shape::Poly(poly) => self.draw_polygon(poly),
        }
    }
}

/// [`DrawCommand`] enum represents one call that was made on [`RecordingCanvas`].
///
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Canvas was cleared with given color.
    ///
    Clear(Color),
    /// Point was drawn with given color.
    ///
    Point(Point, Color),
    /// Segment was drawn with given color.
    ///
    Segment(Line, Color),
    /// Circle was drawn with given color.
    ///
    Circle(Circle, Color),
    /// Rectangle was filled with given color.
    ///
    Rect(Rect, Color),
    /// Polygon with given vertices was drawn with given color.
    ///
    Polygon(Vec<Point>, Color),
}

/// [`RecordingCanvas`] struct is a canvas that does not render anything and
/// only records issued draw calls.
///
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    /// Current draw color.
    ///
    color: Color,
    /// Recorded commands.
    ///
    commands: Vec<DrawCommand>,
}
impl RecordingCanvas {
    /// Constructs empty recording canvas.
    ///
    pub fn new() -> Self {
        RecordingCanvas::default()
    }

    /// Returns recorded commands in order of issuing.
    ///
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    /// Drains recorded commands.
    ///
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}
impl Canvas for RecordingCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }
    fn get_draw_color(&self) -> Color {
        self.color
    }

    fn draw_point(&mut self, point: Point) {
        self.commands.push(DrawCommand::Point(point, self.color));
    }
    fn draw_segment(&mut self, segment: Line) {
        self.commands.push(DrawCommand::Segment(segment, self.color));
    }
    fn draw_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::Circle(circle, self.color));
    }
    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect, self.color));
    }
    fn draw_polygon(&mut self, polygon: &dyn PolygonLike) {
        self.commands
            .push(DrawCommand::Polygon(polygon.vertices().to_vec(), self.color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear(self.color));
    }
}

#[cfg(feature = "sdl")]
pub use sdl::SdlCanvas;

/// `sdl2` rendering backend.
///
#[cfg(feature = "sdl")]
mod sdl {
    use super::Canvas;
    use crate::mathcore::{
        shapes::{Line, Rect},
        vectors::Point,
        Color,
    };
    use sdl2::{pixels::Color as SdlColor, rect::FRect as SdlFRect, render::WindowCanvas};
    use std::fmt;

    /// [`SdlCanvas`] struct renders shapes on `sdl2` window canvas.
    ///
    /// Rectangles are filled, other shapes are drawn as outlines.
    /// Presenting the frame is left to the caller ([`SdlCanvas::present`]).
    ///
    pub struct SdlCanvas {
        /// Underlying `sdl2` canvas.
        ///
        canvas: WindowCanvas,
    }
    impl SdlCanvas {
        /// Wraps `sdl2` window canvas.
        ///
        pub fn from_sdl_canvas(canvas: WindowCanvas) -> Self {
            SdlCanvas { canvas }
        }
        /// Returns underlying `sdl2` canvas.
        ///
        pub fn into_sdl_canvas(self) -> WindowCanvas {
            self.canvas
        }

        /// Shows everything that was drawn since last call.
        ///
        pub fn present(&mut self) {
            self.canvas.present();
        }
    }
    impl fmt::Debug for SdlCanvas {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "SdlCanvas")
        }
    }
    impl Canvas for SdlCanvas {
        fn set_draw_color(&mut self, color: Color) {
            self.canvas
                .set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
        }
        fn get_draw_color(&self) -> Color {
            let (r, g, b, a) = self.canvas.draw_color().rgba();
            Color::from_rgba(r, g, b, a)
        }

        fn draw_point(&mut self, point: Point) {
            if let Err(message) = self.canvas.draw_fpoint((point.x as f32, point.y as f32)) {
                tracing::warn!(%message, "sdl renderer failed to draw a point");
            }
        }
        fn draw_segment(&mut self, segment: Line) {
            if let Err(message) = self.canvas.draw_fline(
                (segment.point1.x as f32, segment.point1.y as f32),
                (segment.point2.x as f32, segment.point2.y as f32),
            ) {
                tracing::warn!(%message, "sdl renderer failed to draw a segment");
            }
        }
        fn fill_rect(&mut self, rect: Rect) {
            let frect: SdlFRect = SdlFRect::new(
                rect.pos.x as f32,
                rect.pos.y as f32,
                rect.width as f32,
                rect.height as f32,
            );
            if let Err(message) = self.canvas.fill_frect(frect) {
                tracing::warn!(%message, "sdl renderer failed to fill a rectangle");
            }
        }

        fn clear(&mut self) {
            self.canvas.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, DrawCommand, RecordingCanvas};
    use crate::mathcore::{
        shapes::{Circle, Line, Rect, Shape},
        vectors::{Point, Vertex},
        Color,
    };

    /// Canvas that only counts points and segments, so default methods are exercised.
    ///
    #[derive(Default)]
    struct SegmentCounter {
        /// Current draw color.
        ///
        color: Color,
        /// Drawn points.
        ///
        points: usize,
        /// Drawn segments.
        ///
        segments: Vec<Line>,
    }
    impl Canvas for SegmentCounter {
        fn set_draw_color(&mut self, color: Color) {
            self.color = color;
        }
        fn get_draw_color(&self) -> Color {
            self.color
        }
        fn draw_point(&mut self, _: Point) {
            self.points += 1;
        }
        fn draw_segment(&mut self, segment: Line) {
            self.segments.push(segment);
        }
        fn clear(&mut self) {}
    }

    #[test]
    fn default_primitives() {
        let mut canvas: SegmentCounter = SegmentCounter::default();

        canvas.draw_shape(&Shape::rect(0.0, 0.0, 2.0, 1.0), Color::BLUE);
        assert_eq!(canvas.segments.len(), 2);
        assert_eq!(canvas.segments[1].point1, Point::new(0.0, 1.0));
        assert_eq!(canvas.segments[1].point2, Point::new(2.0, 1.0));
        assert_eq!(canvas.get_draw_color(), Color::BLUE);

        canvas.segments.clear();
        canvas.draw_shape(&Shape::circle(0.0, 0.0, 10.0), Color::RED);
        assert_eq!(canvas.segments.len(), super::CIRCLE_SEGMENTS);
        for segment in &canvas.segments {
            assert!((segment.point1.magnitude() - 10.0).abs() < 1e-9);
        }
        assert!(canvas.segments[0].point1.almost_equal(Point::new(10.0, 0.0), 1e-9));
        assert!(canvas
            .segments
            .last()
            .map_or(false, |segment| segment.point2.almost_equal(Point::new(10.0, 0.0), 1e-9)));

        canvas.segments.clear();
        canvas.draw_shape(
            &Shape::triangle(Vertex::zero(), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)),
            Color::GREEN,
        );
        assert_eq!(canvas.segments.len(), 3);

        canvas.draw_shape(&Shape::point(0.0, 0.0), Color::GREEN);
        assert_eq!(canvas.points, 1);
    }

    #[test]
    fn recording() {
        let mut canvas: RecordingCanvas = RecordingCanvas::new();
        canvas.set_draw_color(Color::WHITE);
        canvas.clear();
        canvas.draw_shape(&Shape::circle(1.0, 1.0, 3.0), Color::GRAY);
        canvas.draw_shape(&Shape::rect(1.0, 1.0, 3.0, 4.0), Color::RED);
        canvas.draw_shape(
            &Shape::poly(vec![Vertex::zero(), Vertex::new(1.0, 1.0)]),
            Color::BLUE,
        );

        assert_eq!(
            canvas.take_commands(),
            [
                DrawCommand::Clear(Color::WHITE),
                DrawCommand::Circle(
                    Circle {
                        center: Point::new(1.0, 1.0),
                        radius: 3.0
                    },
                    Color::GRAY
                ),
                DrawCommand::Rect(Rect::new(1.0, 1.0, 3.0, 4.0), Color::RED),
                DrawCommand::Polygon(vec![Vertex::zero(), Vertex::new(1.0, 1.0)], Color::BLUE),
            ]
        );
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn fill_rect_is_bounded() {
        let mut canvas: SegmentCounter = SegmentCounter::default();

        canvas.fill_rect(Rect::new(0.0, 1e16, 10.0, 10.0));
        assert_eq!(canvas.segments.len(), 11);
        assert_eq!(canvas.segments[10].point1.y, 1e16 + 10.0);

        canvas.segments.clear();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 1e12));
        assert_eq!(canvas.segments.len(), super::MAX_FILL_ROWS + 1);
        assert_eq!(canvas.segments.last().map(|segment| segment.point1.y), Some(1e12));

        canvas.segments.clear();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, f64::INFINITY));
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, f64::NAN));
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, -5.0));
        assert!(canvas.segments.is_empty());

        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 0.5));
        assert_eq!(canvas.segments.len(), 1);
    }
}
