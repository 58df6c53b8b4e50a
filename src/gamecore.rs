//! `nature2d::gamecore` module is a core that supplies simulation objects and the world that owns them.
//!
//! # Prelude
//! `nature2d::gamecore` prelude can be imported with `use nature2d::gamecore::prelude::*`.
//!
//! # Usage
//! [`Object`](objects::Object) couples a body with its collider and a behavior that decides
//! what happens on every frame hook (`init`, `update` and `draw`).
//! [`World`](worlds::World) owns objects and runs those hooks over all of them in insertion order.
//!

// submodules and public re-exports
pub mod objects;
pub mod worlds;

// prelude
pub mod prelude;
