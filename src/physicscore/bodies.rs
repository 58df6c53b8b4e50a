//! `physicscore::bodies` submodule implements [`Body`] - physical state of one mass point.
//!
//! # Model
//! Every frame body goes through two phases:
//! forces are accumulated into acceleration ([`Body::apply_force`], [`Body::apply_gravity`]),
//! then [`Body::integrate`] turns acceleration into velocity and velocity into position
//! (semi-implicit Euler) and clears accumulated acceleration.
//!
//! Velocity is expressed in per-frame units: `dt` scales the acceleration-to-velocity step only,
//! position advances by the whole velocity every frame.
//!

use crate::mathcore::{
    shapes::Rect,
    vectors::{Point, Vector2},
};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// [`BodyError`] enum lists all errors that could occur during construction of [`Body`].
///
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum BodyError {
    /// Body cannot have zero mass: force could not be converted into acceleration.
    ///
    ZeroMass,
    /// Mass is `NaN` or infinite.
    ///
    NonFiniteMass(f64),
    /// Mass is negative.
    ///
    NegativeMass(f64),
}
impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::ZeroMass => write!(f, "body cannot have zero mass"),
            BodyError::NonFiniteMass(mass) => write!(f, "body mass must be finite, got {mass}"),
            BodyError::NegativeMass(mass) => write!(f, "body mass must be positive, got {mass}"),
        }
    }
}
impl Error for BodyError {}

/// [`Body`] struct represents point mass that moves under accumulated forces.
///
/// # Example
/// ```rust
/// # use nature2d::physicscore::bodies::Body;
/// # use nature2d::mathcore::vectors::Vector2;
/// let mut body: Body = Body::new(Vector2 { x: 100.0, y: 100.0 }, 50.0).expect("Mass is not zero.");
/// body.apply_force(Vector2 { x: 1000.0, y: 0.0 });
/// body.integrate(1.0);
/// assert_eq!(body.vel, Vector2 { x: 20.0, y: 0.0 });
/// assert_eq!(body.pos, Vector2 { x: 120.0, y: 100.0 });
/// assert_eq!(body.acc(), Vector2::zero());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(try_from = "RawBody")]
pub struct Body {
    /// Position of a body.
    ///
    pub pos: Point,
    /// Velocity of a body (per frame).
    ///
    pub vel: Vector2,
    /// Acceleration accumulated since last integration.
    ///
    acc: Vector2,

    /// Mass of a body; never zero.
    ///
    mass: f64,
    /// Speed cap; `None` means that speed is not capped.
    ///
    max_speed: Option<f64>,
}
impl Body {
    /// Constructs resting body at given position.
    ///
    /// Construction fails if `mass` is not positive or is not finite.
    ///
    pub fn new(pos: Point, mass: f64) -> Result<Self, BodyError> {
        if !mass.is_finite() {
            tracing::debug!(mass, "rejected body with non-finite mass");
            return Err(BodyError::NonFiniteMass(mass));
        }
        if mass == 0.0 {
            tracing::debug!("rejected body with zero mass");
            return Err(BodyError::ZeroMass);
        }
        if mass < 0.0 {
            tracing::debug!(mass, "rejected body with negative mass");
            return Err(BodyError::NegativeMass(mass));
        }

        Ok(Body {
            pos,
            vel: Vector2::zero(),
            acc: Vector2::zero(),

            mass,
            max_speed: None,
        })
    }
    /// Sets speed cap and returns the body.
    ///
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.set_max_speed(max_speed);
        self
    }

    /// Returns mass of a body.
    ///
    pub fn mass(&self) -> f64 {
        self.mass
    }
    /// Returns acceleration accumulated since last integration.
    ///
    pub fn acc(&self) -> Vector2 {
        self.acc
    }
    /// Returns speed cap of a body.
    ///
    pub fn max_speed(&self) -> Option<f64> {
        self.max_speed
    }
    /// Sets speed cap of a body.
    ///
    /// Negative value removes the cap.
    ///
    pub fn set_max_speed(&mut self, max_speed: f64) {
        self.max_speed = if max_speed >= 0.0 {
            Some(max_speed)
        } else {
            None
        };
    }
    /// Removes speed cap of a body.
    ///
    pub fn uncap_speed(&mut self) {
        self.max_speed = None;
    }

    /// Returns momentum of a body (`vel * mass`).
    ///
    pub fn momentum(&self) -> Vector2 {
        self.vel * self.mass
    }

    /// Accumulates force (`acc += force / mass`).
    ///
    pub fn apply_force(&mut self, force: Vector2) {
        self.acc += force / self.mass;
    }
    /// Accumulates gravity (`acc += gravity`).
    ///
    /// Unlike [`Body::apply_force`], gravity does not depend on mass.
    ///
    pub fn apply_gravity(&mut self, gravity: Vector2) {
        self.acc += gravity;
    }

    /// Advances body by one frame.
    ///
    /// `vel += acc * dt`, then velocity is clamped by speed cap (if any),
    /// then `pos += vel` and accumulated acceleration is reset to zero.
    ///
    pub fn integrate(&mut self, dt: f64) {
        self.vel += self.acc * dt;
        if let Some(max_speed) = self.max_speed.filter(|max_speed| *max_speed >= 0.0) {
            self.vel = self.vel.clamped_magnitude(max_speed);
        }
        self.pos += self.vel;

        self.acc = Vector2::zero();
    }

    /// Bounces body off the bottom edge of `bounds`.
    ///
    /// If body has fallen below the bottom edge, its velocity is replaced with `rebound`
    /// and it is placed back onto the edge.
    /// Returns whether bounce happened.
    ///
    pub fn bounce_within(&mut self, bounds: &Rect, rebound: Vector2) -> bool {
        let floor: f64 = bounds.bottom();
        if self.pos.y > floor {
            self.vel = rebound;
            self.pos.y = floor;
            true
        } else {
            false
        }
    }
}

/// Serialized form of [`Body`]; it is validated by [`Body::new`] before it becomes a body.
///
#[derive(Deserialize)]
struct RawBody {
    /// Position of a body.
    ///
    pos: Point,
    /// Velocity of a body.
    ///
    vel: Vector2,
    /// Accumulated acceleration.
    ///
    acc: Vector2,
    /// Mass of a body.
    ///
    mass: f64,
    /// Speed cap; negative value is stored as uncapped.
    ///
    max_speed: Option<f64>,
}
impl TryFrom<RawBody> for Body {
    type Error = BodyError;

    fn try_from(raw: RawBody) -> Result<Self, Self::Error> {
        let mut body: Body = Body::new(raw.pos, raw.mass)?;
        body.vel = raw.vel;
        body.acc = raw.acc;
        if let Some(max_speed) = raw.max_speed {
            body.set_max_speed(max_speed);
        }
        Ok(body)
    }
}
