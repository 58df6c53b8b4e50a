//! `nature2d::datacore` module is a core that supplies structs and functions
//! that are needed to persist and configure simulations.
//!
//! # Prelude
//! `nature2d::datacore` prelude can be imported with `use nature2d::datacore::prelude::*`.
//!
//! # Usage
//! `datacore` provides [`FromFile`](assets::FromFile) and [`ToFile`](assets::ToFile),
//! which work with every `serde` type (vectors, shapes, colliders, bodies), and [`Settings`](settings::Settings)
//! that configure [`Simulation`](crate::Simulation).
//!

// submodules and public re-exports
pub mod assets;
pub mod settings;

// prelude
pub mod prelude;
