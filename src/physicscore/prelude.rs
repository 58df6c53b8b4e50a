//! Prelude module: `physicscore::prelude` re-exports all `nature2d::physicscore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use nature2d::physicscore::prelude::*;
//! ```
//!

// re-exports
pub use crate::physicscore::bodies::*;
pub use crate::physicscore::colliders::*;
