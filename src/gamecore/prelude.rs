//! Prelude module: `gamecore::prelude` re-exports all `nature2d::gamecore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use nature2d::gamecore::prelude::*;
//! ```
//!

// re-exports
pub use crate::gamecore::objects::*;
pub use crate::gamecore::worlds::*;
