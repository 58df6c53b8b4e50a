//! # nature2d
//!
//! **nature2d** - minimal 2d physics and collision substrate for simple simulations and games.
//!
//! The crate is split into cores:
//! `mathcore` (vectors, shapes and collision dispatch), `physicscore` (bodies and colliders),
//! `gamecore` (objects and worlds), `graphicscore` (rendering contract) and
//! `datacore` (settings and assets).
//! [`Simulation`] ties them together into one explicitly owned simulation context.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

extern crate rand;

#[cfg(feature = "sdl")]
extern crate sdl2;

extern crate serde;
extern crate serde_cbor;

extern crate tracing;
extern crate tracing_subscriber;

// utils
mod nature2d;
pub use crate::nature2d::*;

pub mod logging;

// cores
pub mod datacore;
pub mod gamecore;
pub mod graphicscore;
pub mod mathcore;
pub mod physicscore;
