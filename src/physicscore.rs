//! `nature2d::physicscore` module is a core that implements point-mass dynamics and
//! collision volumes that are attached to moving bodies.
//!
//! # Prelude
//! `nature2d::physicscore` prelude can be imported with `use nature2d::physicscore::prelude::*`.
//!
//! # Model
//! [`Body`](bodies::Body) carries position, velocity and accumulated acceleration of a point mass.
//! [`Collider`](colliders::Collider) carries shapes that move together with a body:
//! they are stored relative to the body and offset by its position whenever two colliders are tested.
//! There is no rotation, so a body's position is all that is needed to place its collider.
//!

// submodules and public re-exports
pub mod bodies;
pub mod colliders;

// prelude
pub mod prelude;
