//! `nature2d::mathcore` module is a core that implements all math functionality for the engine.
//!
//! # Prelude
//! `nature2d::mathcore` prelude can be imported with `use nature2d::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent positions, directions, velocities and forces.
//! Shapes are plain geometry described relative to a local origin, so placing a shape in
//! the world is just a translation by the position of whatever owns it.
//! Shape collision is answered by a dispatch table indexed by the pair of shape kinds.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod collisions;
pub mod floats;
pub mod shapes;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
