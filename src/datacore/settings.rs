//! `datacore::settings` submodule implements [`Settings`] - configuration of a simulation.
//!

use crate::{
    datacore::assets::{FromFile, ToFile},
    mathcore::vectors::Vector2,
};
use serde::{Deserialize, Serialize};
use std::{io::Error, path::Path};

/// [`Settings`] struct holds parameters that are shared by the whole simulation.
///
/// Settings are persisted in CBOR through [`FromFile`] and [`ToFile`].
///
/// # Example
/// ```rust
/// # use nature2d::datacore::settings::Settings;
/// # use nature2d::mathcore::vectors::Vector2;
/// let settings: Settings = Settings::default();
/// assert_eq!((settings.width, settings.height), (800.0, 450.0));
/// assert_eq!(settings.gravity, Vector2 { x: 0.0, y: 6.0 });
/// assert_eq!(settings.max_speed, None);
/// assert!(settings.bounded);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Width of a world.
    ///
    pub width: f64,
    /// Height of a world.
    ///
    pub height: f64,

    /// Gravity that is applied to every body on every frame.
    ///
    pub gravity: Vector2,
    /// Speed cap that is given to uncapped bodies added through
    /// [`Simulation::add_object`](crate::Simulation::add_object); `None` leaves them uncapped.
    ///
    pub max_speed: Option<f64>,
    /// Whether bodies bounce off the bottom edge of a world.
    ///
    pub bounded: bool,
}
impl Settings {
    /// Default width of a world.
    ///
    pub const DEFAULT_WIDTH: f64 = 800.0;
    /// Default height of a world.
    ///
    pub const DEFAULT_HEIGHT: f64 = 450.0;
    /// Default gravity.
    ///
    pub const DEFAULT_GRAVITY: Vector2 = Vector2::new(0.0, 6.0);

    /// Loads settings from file.
    ///
    /// Fields that are absent in file are filled with defaults.
    ///
    pub fn load(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let settings: Settings = Settings::from_file(filename.as_ref())?;
        tracing::debug!(path = %filename.as_ref().display(), ?settings, "settings loaded");
        Ok(settings)
    }
    /// Saves settings to file.
    ///
    pub fn save(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        self.to_file(filename)
    }
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: Settings::DEFAULT_WIDTH,
            height: Settings::DEFAULT_HEIGHT,

            gravity: Settings::DEFAULT_GRAVITY,
            max_speed: None,
            bounded: true,
        }
    }
}
