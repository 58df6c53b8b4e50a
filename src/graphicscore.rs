//! `nature2d::graphicscore` module is a core that defines how simulation is presented.
//!
//! # Prelude
//! `nature2d::graphicscore` prelude can be imported with `use nature2d::graphicscore::prelude::*`.
//!
//! # Usage
//! `nature2d` never owns a window: rendering is delegated to implementors of
//! [`Canvas`](drawing::Canvas), which receive world-space shapes together with their color.
//!

// submodules and public re-exports
pub mod drawing;

// prelude
pub mod prelude;
