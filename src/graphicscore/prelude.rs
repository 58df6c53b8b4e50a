//! Prelude module: `graphicscore::prelude` re-exports all `nature2d::graphicscore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use nature2d::graphicscore::prelude::*;
//! ```
//!

// re-exports
pub use crate::graphicscore::drawing::*;
