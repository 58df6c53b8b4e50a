//! Prelude module: `datacore::prelude` re-exports all `nature2d::datacore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use nature2d::datacore::prelude::*;
//! ```
//!

// re-exports
pub use crate::datacore::assets::*;
pub use crate::datacore::settings::*;
