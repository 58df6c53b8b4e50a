//! `gamecore::objects` submodule implements [`Object`] - body with attached collider
//! and pluggable [`Behavior`].
//!

use crate::{
    graphicscore::drawing::Canvas,
    mathcore::{collisions::CollisionSystem, shapes::Shape, Color},
    physicscore::{bodies::Body, colliders::Collider},
};
use bitflags::bitflags;
use std::fmt;

bitflags!(
    /// [`Hooks`] bitflag struct lists frame hooks that a [`Behavior`] takes part in.
    ///
    /// Hook that is absent from [`Behavior::hooks`] is never called.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Hooks : u32 {
        /// `init` hook flag.
        ///
        const INIT = 1 << 0;
        /// `update` hook flag.
        ///
        const UPDATE = 1 << 1;
        /// `draw` hook flag.
        ///
        const DRAW = 1 << 2;
    }
);

/// [`Behavior`] trait defines per-object logic of frame hooks.
///
/// Every method has default implementation:
/// `init` does nothing, `update` integrates body and `draw` renders every shape of collider
/// at body's position with [`Object::DEFAULT_COLOR`].
///
/// # Example
/// ```rust
/// # use nature2d::gamecore::objects::{Behavior, Hooks, Object};
/// # use nature2d::physicscore::{bodies::Body, colliders::Collider};
/// # use nature2d::mathcore::vectors::Vector2;
/// /// Body that keeps drifting to the right.
/// #[derive(Debug)]
/// struct Wind;
/// impl Behavior for Wind {
///     fn hooks(&self) -> Hooks {
///         Hooks::UPDATE
///     }
///
///     fn update(&mut self, body: &mut Body, _: &mut Collider, dt: f64) {
///         body.apply_force(Vector2 { x: body.mass(), y: 0.0 });
///         body.integrate(dt);
///     }
/// }
///
/// let body: Body = Body::new(Vector2::zero(), 2.0).expect("Mass is not zero.");
/// let mut object: Object = Object::with_behavior(body, Wind);
/// object.update(1.0);
/// assert_eq!(object.body.pos, Vector2 { x: 1.0, y: 0.0 });
/// ```
///
pub trait Behavior: fmt::Debug {
    /// Returns hooks that are enabled for this behavior.
    ///
    fn hooks(&self) -> Hooks {
        Hooks::all()
    }

    /// Called once when simulation starts.
    ///
    fn init(&mut self, body: &mut Body, collider: &mut Collider) {
        let _ = (body, collider);
    }
    /// Called on every frame.
    ///
    fn update(&mut self, body: &mut Body, collider: &mut Collider, dt: f64) {
        let _ = collider;
        body.integrate(dt);
    }
    /// Called on every frame after update.
    ///
    fn draw(&self, body: &Body, collider: &Collider, canvas: &mut dyn Canvas) {
        for shape in collider {
            canvas.draw_shape(&shape.offset(body.pos), Object::DEFAULT_COLOR);
        }
    }
}

/// [`BasicBehavior`] is the behavior of plain objects: it integrates and draws, but has no `init` hook.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct BasicBehavior;
impl Behavior for BasicBehavior {
    fn hooks(&self) -> Hooks {
        Hooks::UPDATE | Hooks::DRAW
    }
}

/// [`Object`] struct is the unit of simulation: body, collider and behavior.
///
/// # Example
/// ```rust
/// # use nature2d::gamecore::objects::Object;
/// # use nature2d::physicscore::bodies::Body;
/// # use nature2d::mathcore::{shapes::Shape, vectors::Vector2};
/// let mut object1: Object = Object::new(Body::new(Vector2::zero(), 1.0).expect("Mass is not zero."));
/// object1.add_shape(Shape::point(5.0, 0.0));
/// let mut object2: Object = Object::new(Body::new(Vector2 { x: 5.0, y: 0.0 }, 1.0).expect("Mass is not zero."));
/// object2.add_shape(Shape::point(0.0, 0.0));
///
/// assert!(object1.is_colliding(&object2));
/// ```
///
#[derive(Debug)]
pub struct Object {
    /// Physical state of an object.
    ///
    pub body: Body,
    /// Shapes of an object, relative to body position.
    ///
    pub collider: Collider,
    /// Logic of frame hooks.
    ///
    behavior: Box<dyn Behavior>,
}
impl Object {
    /// Color that is used by default [`Behavior::draw`].
    ///
    pub const DEFAULT_COLOR: Color = Color::GRAY;

    /// Constructs object with empty collider and [`BasicBehavior`].
    ///
    pub fn new(body: Body) -> Self {
        Object::with_behavior(body, BasicBehavior)
    }
    /// Constructs object with empty collider and given behavior.
    ///
    pub fn with_behavior(body: Body, behavior: impl Behavior + 'static) -> Self {
        Object {
            body,
            collider: Collider::new(),
            behavior: Box::new(behavior),
        }
    }
    /// Appends shape to collider and returns the object.
    ///
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.add_shape(shape);
        self
    }

    /// Returns behavior of an object.
    ///
    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }
    /// Replaces behavior of an object, returning previous one.
    ///
    pub fn set_behavior(&mut self, behavior: impl Behavior + 'static) -> Box<dyn Behavior> {
        std::mem::replace(&mut self.behavior, Box::new(behavior))
    }

    /// Appends shape to collider of an object.
    ///
    pub fn add_shape(&mut self, shape: Shape) {
        self.collider.add_shape(shape);
    }

    /// Runs `init` hook, if it is enabled.
    ///
    pub fn init(&mut self) {
        if self.behavior.hooks().contains(Hooks::INIT) {
            self.behavior.init(&mut self.body, &mut self.collider);
        }
    }
    /// Runs `update` hook, if it is enabled.
    ///
    pub fn update(&mut self, dt: f64) {
        if self.behavior.hooks().contains(Hooks::UPDATE) {
            self.behavior.update(&mut self.body, &mut self.collider, dt);
        }
    }
    /// Runs `draw` hook, if it is enabled.
    ///
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.behavior.hooks().contains(Hooks::DRAW) {
            self.behavior.draw(&self.body, &self.collider, canvas);
        }
    }

    /// Returns whether colliders of two objects, placed at their bodies, collide.
    ///
    pub fn is_colliding(&self, other: &Object) -> bool {
        Collider::detect_collision(self.body.pos, &self.collider, other.body.pos, &other.collider)
    }
    /// Same as [`Object::is_colliding`], but uses provided collision system.
    ///
    pub fn is_colliding_with(
        &self,
        collision_system: &(impl CollisionSystem + ?Sized),
        other: &Object,
    ) -> bool {
        Collider::detect_collision_with(
            collision_system,
            self.body.pos,
            &self.collider,
            other.body.pos,
            &other.collider,
        )
    }
}
