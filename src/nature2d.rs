//! `nature2d` hidden submodule implements [`Simulation`] struct that owns
//! everything one running simulation needs.
//!

use crate::{
    datacore::settings::Settings,
    gamecore::{
        objects::{Hooks, Object},
        worlds::World,
    },
    graphicscore::drawing::Canvas,
    mathcore::shapes::Rect,
};

/// [`Simulation`] struct is an explicit simulation context: settings and the world they apply to.
///
/// Nothing is kept in process-wide state, so several simulations can coexist.
///
/// Every frame [`Simulation::update`] applies gravity to bodies of objects that have `update` hook,
/// bounces those bodies off the bottom of the world (if [`Settings::bounded`] is set)
/// and then runs `update` hooks of objects.
///
/// # Example
/// ```rust
/// # use nature2d::{Simulation, datacore::settings::Settings};
/// # use nature2d::gamecore::objects::Object;
/// # use nature2d::physicscore::bodies::Body;
/// # use nature2d::mathcore::{shapes::Shape, vectors::Vector2};
/// let mut simulation: Simulation = Simulation::new(Settings::default());
/// let body: Body = Body::new(Vector2 { x: 100.0, y: 100.0 }, 50.0).expect("Mass is not zero.");
/// let index: usize = simulation.add_object(Object::new(body).with_shape(Shape::circle(0.0, 0.0, 40.0)));
///
/// simulation.init();
/// simulation.update(1.0);
/// assert_eq!(simulation.world().objects()[index].body.vel, Vector2 { x: 0.0, y: 6.0 });
/// ```
///
#[derive(Debug)]
pub struct Simulation {
    /// Settings of a simulation.
    ///
    settings: Settings,
    /// World that is simulated.
    ///
    world: World,
}
impl Simulation {
    /// Constructs simulation with empty world that is sized according to `settings`.
    ///
    pub fn new(settings: Settings) -> Self {
        tracing::debug!(?settings, "creating simulation");
        Simulation {
            world: World::new(settings.width, settings.height),
            settings,
        }
    }

    /// Returns settings of a simulation.
    ///
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Returns mutable settings of a simulation.
    ///
    /// World size is fixed on construction and is not affected by later changes.
    ///
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
    /// Returns world of a simulation.
    ///
    pub fn world(&self) -> &World {
        &self.world
    }
    /// Returns mutable world of a simulation.
    ///
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Adds object to the world and returns its index.
    ///
    /// Uncapped body gets speed cap from settings, if there is one.
    ///
    pub fn add_object(&mut self, mut object: Object) -> usize {
        if let (None, Some(max_speed)) = (object.body.max_speed(), self.settings.max_speed) {
            object.body.set_max_speed(max_speed);
        }
        self.world.add_object(object)
    }

    /// Runs `init` hook of every object.
    ///
    pub fn init(&mut self) {
        self.world.init();
    }
    /// Advances simulation by one frame.
    ///
    pub fn update(&mut self, dt: f64) {
        let bounds: Rect = self.world.bounds();
        for object in &mut self.world {
            // bodies that are not integrated must not accumulate gravity
            if !object.behavior().hooks().contains(Hooks::UPDATE) {
                continue;
            }
            object.body.apply_gravity(self.settings.gravity);
            if self.settings.bounded && object.body.bounce_within(&bounds, -self.settings.gravity) {
                tracing::trace!(pos = ?object.body.pos, "body bounced off the floor");
            }
        }
        self.world.update(dt);
    }
    /// Runs `draw` hook of every object.
    ///
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.world.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::Simulation;
    use crate::{
        datacore::settings::Settings,
        gamecore::objects::Object,
        graphicscore::drawing::{DrawCommand, RecordingCanvas},
        mathcore::{
            shapes::{Circle, Shape},
            vectors::Vector2,
        },
        physicscore::bodies::Body,
    };

    /// Circle of radius 40 on a body of mass 50.
    ///
    fn ball(x: f64, y: f64) -> Object {
        Object::new(Body::new(Vector2::new(x, y), 50.0).expect("Mass is not zero."))
            .with_shape(Shape::circle(0.0, 0.0, 40.0))
    }

    #[test]
    fn falling() {
        let mut simulation: Simulation = Simulation::new(Settings::default());
        let index: usize = simulation.add_object(ball(100.0, 100.0));
        simulation.init();

        simulation.update(1.0);
        simulation.update(1.0);
        let body: &Body = &simulation.world().objects()[index].body;
        assert_eq!(body.vel, Vector2::new(0.0, 12.0));
        assert_eq!(body.pos, Vector2::new(100.0, 118.0));
        assert_eq!(body.acc(), Vector2::zero());

        let mut canvas: RecordingCanvas = RecordingCanvas::new();
        simulation.draw(&mut canvas);
        assert_eq!(
            canvas.commands(),
            [DrawCommand::Circle(
                Circle {
                    center: Vector2::new(100.0, 118.0),
                    radius: 40.0
                },
                Object::DEFAULT_COLOR
            )]
        );
    }

    #[test]
    fn bouncing() {
        let mut simulation: Simulation = Simulation::new(Settings::default());
        let index: usize = simulation.add_object(ball(100.0, 460.0));

        simulation.update(1.0);
        // rebound replaced velocity, gravity of this frame was still applied
        let body: &Body = &simulation.world().objects()[index].body;
        assert_eq!(body.vel, Vector2::new(0.0, 0.0));
        assert_eq!(body.pos, Vector2::new(100.0, 450.0));

        let mut unbounded: Simulation = Simulation::new(Settings {
            bounded: false,
            ..Settings::default()
        });
        let index: usize = unbounded.add_object(ball(100.0, 460.0));
        unbounded.update(1.0);
        assert_eq!(unbounded.world().objects()[index].body.pos, Vector2::new(100.0, 466.0));
    }

    #[test]
    fn speed_cap_from_settings() {
        let mut simulation: Simulation = Simulation::new(Settings {
            max_speed: Some(3.0),
            gravity: Vector2::new(0.0, 100.0),
            ..Settings::default()
        });
        let capped: usize = simulation.add_object(ball(100.0, 100.0));
        let mut own: Object = ball(200.0, 100.0);
        own.body.set_max_speed(10.0);
        let own: usize = simulation.add_object(own);

        simulation.update(1.0);
        assert_eq!(simulation.world().objects()[capped].body.vel, Vector2::new(0.0, 3.0));
        assert_eq!(simulation.world().objects()[own].body.vel, Vector2::new(0.0, 10.0));
        assert_eq!(simulation.world().width(), 800.0);
    }

    #[test]
    fn independent_simulations() {
        let mut first: Simulation = Simulation::new(Settings::default());
        let second: Simulation = Simulation::new(Settings::default());
        let _ = first.add_object(ball(0.0, 0.0));
        assert_eq!(first.world().len(), 1);
        assert!(second.world().is_empty());
    }

    #[test]
    fn static_objects_ignore_gravity() {
        use crate::gamecore::objects::{BasicBehavior, Behavior, Hooks};

        /// Object that is only drawn.
        ///
        #[derive(Debug)]
        struct Pinned;
        impl Behavior for Pinned {
            fn hooks(&self) -> Hooks {
                Hooks::DRAW
            }
        }

        let mut simulation: Simulation = Simulation::new(Settings::default());
        let mut pinned: Object = ball(100.0, 460.0);
        let _ = pinned.set_behavior(Pinned);
        let index: usize = simulation.add_object(pinned);

        for _ in 0..3 {
            simulation.update(1.0);
        }
        let body: &Body = &simulation.world().objects()[index].body;
        assert_eq!(body.acc(), Vector2::zero());
        assert_eq!(body.pos, Vector2::new(100.0, 460.0));

        let _ = simulation.world_mut().objects_mut()[index].set_behavior(BasicBehavior);
        simulation.world_mut().objects_mut()[index].body.pos = Vector2::new(100.0, 100.0);
        simulation.update(1.0);
        assert_eq!(simulation.world().objects()[index].body.vel, Vector2::new(0.0, 6.0));
    }
}
