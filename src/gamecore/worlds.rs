//! `gamecore::worlds` submodule implements [`World`] - bounded container of objects.
//!

use crate::{
    gamecore::objects::Object,
    graphicscore::drawing::Canvas,
    mathcore::{collisions::CollisionSystem, shapes::Rect},
};
use std::slice;

/// [`World`] struct owns every object of a simulation.
///
/// Objects are only ever appended; every batch operation visits them once, in insertion order.
/// Batch operations on an empty world do nothing.
///
/// # Example
/// ```rust
/// # use nature2d::gamecore::{objects::Object, worlds::World};
/// # use nature2d::physicscore::bodies::Body;
/// # use nature2d::mathcore::vectors::Vector2;
/// let mut world: World = World::new(800.0, 450.0);
/// let mut body: Body = Body::new(Vector2 { x: 10.0, y: 10.0 }, 1.0).expect("Mass is not zero.");
/// body.vel = Vector2 { x: 1.0, y: 0.0 };
/// let index: usize = world.add_object(Object::new(body));
///
/// world.init();
/// world.update(1.0);
/// assert_eq!(world.objects()[index].body.pos, Vector2 { x: 11.0, y: 10.0 });
/// ```
///
#[derive(Debug, Default)]
pub struct World {
    /// Width of a world.
    ///
    width: f64,
    /// Height of a world.
    ///
    height: f64,

    /// Objects in insertion order.
    ///
    objects: Vec<Object>,
}
impl World {
    /// Constructs empty world of given size.
    ///
    pub fn new(width: f64, height: f64) -> Self {
        World {
            width,
            height,

            objects: Vec::new(),
        }
    }

    /// Returns width of a world.
    ///
    pub fn width(&self) -> f64 {
        self.width
    }
    /// Returns height of a world.
    ///
    pub fn height(&self) -> f64 {
        self.height
    }
    /// Returns rectangle that spans the world, with top-left corner at the origin.
    ///
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Appends object to a world and returns its index.
    ///
    pub fn add_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        let index: usize = self.objects.len() - 1;
        tracing::trace!(index, "object added to the world");
        index
    }

    /// Returns objects in insertion order.
    ///
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }
    /// Returns mutable objects in insertion order.
    ///
    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }
    /// Returns iterator over objects.
    ///
    pub fn iter(&self) -> slice::Iter<'_, Object> {
        self.objects.iter()
    }
    /// Returns mutable iterator over objects.
    ///
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Object> {
        self.objects.iter_mut()
    }
    /// Returns amount of objects.
    ///
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    /// Returns whether world has no objects.
    ///
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Runs `init` hook of every object.
    ///
    pub fn init(&mut self) {
        tracing::debug!(objects = self.objects.len(), "initializing world");
        for object in &mut self.objects {
            object.init();
        }
    }
    /// Runs `update` hook of every object.
    ///
    pub fn update(&mut self, dt: f64) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }
    /// Runs `draw` hook of every object.
    ///
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for object in &self.objects {
            object.draw(canvas);
        }
    }

    /// Drops every object of a world.
    ///
    pub fn clear(&mut self) {
        tracing::debug!(objects = self.objects.len(), "clearing world");
        self.objects.clear();
        self.objects.shrink_to_fit();
    }

    /// Returns index pairs `(i, j)` with `i < j` of objects whose colliders collide.
    ///
    /// Every pair of objects is tested, so this is quadratic in amount of objects.
    ///
    pub fn colliding_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (i, object1) in self.objects.iter().enumerate() {
            for (j, object2) in self.objects.iter().enumerate().skip(i + 1) {
                if object1.is_colliding(object2) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
    /// Same as [`World::colliding_pairs`], but uses provided collision system.
    ///
    pub fn colliding_pairs_with(
        &self,
        collision_system: &(impl CollisionSystem + ?Sized),
    ) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (i, object1) in self.objects.iter().enumerate() {
            for (j, object2) in self.objects.iter().enumerate().skip(i + 1) {
                if object1.is_colliding_with(collision_system, object2) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
impl<'a> IntoIterator for &'a World {
    type Item = &'a Object;
    type IntoIter = slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a> IntoIterator for &'a mut World {
    type Item = &'a mut Object;
    type IntoIter = slice::IterMut<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
