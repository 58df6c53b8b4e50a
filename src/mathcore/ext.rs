//! `mathcore::ext` hidden submodule supplies helper structs that are
//! used throughout `nature2d` crate.
//!

use serde::{Deserialize, Serialize};

/// [`Color`] struct represents RGBA model of color.
///
/// Colors are only carried through `nature2d`: the rendering side decides what to do with them.
///
/// # Examples
/// ```rust
/// # use nature2d::mathcore::Color;
/// let color: Color = Color { r: 1, g: 2, b: 3, a: 4 };
/// assert_eq!(Color::RED, Color { r: 255, g: 0, b: 0, a: 255 });
/// assert_eq!(Color::GREEN, Color { r: 0, g: 255, b: 0, a: 255 });
/// assert_eq!(Color::BLUE, Color { r: 0, g: 0, b: 255, a: 255 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: u8,

    /// Green component of color.
    ///
    pub g: u8,

    /// Blue component of color.
    ///
    pub b: u8,

    /// Alpha channel value of color.
    ///
    pub a: u8,
}
impl Color {
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    /// Color that corresponds to black.
    ///
    pub const BLACK: Self = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to half-transparent gray.
    ///
    /// Default color in which objects draw their colliders.
    ///
    pub const GRAY: Self = Color {
        r: 130,
        g: 130,
        b: 130,
        a: 200,
    };
    /// Color that corresponds to light gray.
    ///
    pub const LIGHT_GRAY: Self = Color {
        r: 200,
        g: 200,
        b: 200,
        a: 255,
    };
    /// Color that corresponds to red.
    ///
    pub const RED: Self = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to green.
    ///
    pub const GREEN: Self = Color {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    /// Color that corresponds to blue.
    ///
    pub const BLUE: Self = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };

    /// Initializes `Color` from RGBA model.
    ///
    /// Alias for manual construction of struct.
    ///
    /// # Examples
    /// ```rust
    /// # use nature2d::mathcore::Color;
    /// assert_eq!(Color::from_rgba(1, 2, 3, 4), Color { r: 1, g: 2, b: 3, a: 4 });
    /// ```
    ///
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    /// Returns tuple of red, green, blue and alpha values.
    ///
    /// # Examples
    /// ```rust
    /// # use nature2d::mathcore::Color;
    /// assert_eq!(Color::from_rgba(1, 2, 3, 4).to_rgba(), (1, 2, 3, 4));
    /// ```
    ///
    pub fn to_rgba(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Returns the same color with another alpha channel value.
    ///
    pub fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}
impl Default for Color {
    fn default() -> Self {
        Color::GRAY
    }
}
