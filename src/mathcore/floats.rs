//! `mathcore::floats` submodule implements several consts, functions and traits that help in
//! work with `f64` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait is dealing with rounding of values that were distorted by
//! float operations.
//!
//! [`map`], [`min`] and [`max`] are small scalar helpers that simulations use to remap
//! input ranges (e.g. mouse position to force strength).
//!

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f64` values to still be considered
/// equal.
///
pub const EPSILON: f64 = 0.00001;
/// This function implements relative floating point equality for `nature2d` crate.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(!almost_equal(0.15, 0.2));
/// ```
///
pub fn almost_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f64::MAX);
    diff < (norm * EPSILON).max(f64::MIN_POSITIVE)
}

/// [`FloatOperations`] trait defines `round_up_to` associated function that works
/// with floating point values.
///
pub trait FloatOperations {
    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f64 {
    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    /// # Example
    /// ```rust
    /// # use nature2d::mathcore::floats::FloatOperations;
    /// assert_eq!(12.346_f64.round_up_to(2), 12.35);
    /// assert_eq!(12.345_f64.round_up_to(-1), 10.0);
    /// assert_eq!(12.345_f64.round_up_to(10), 12.345);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul = 10_f64.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}

/// Re-maps `value` from `[start1; stop1]` range into `[start2; stop2]` range.
///
/// Values outside of the first range are extrapolated, not clamped.
/// A degenerate first range (`start1 == stop1`) yields a non-finite value.
///
/// # Example
/// ```rust
/// # use nature2d::mathcore::floats::map;
/// assert_eq!(map(45.0, 0.0, 100.0, 0.0, 1000.0), 450.0);
/// assert_eq!(map(145.0, 100.0, 200.0, 1000.0, 2000.0), 1450.0);
/// ```
///
pub fn map(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    (value - start1) / (stop1 - start1) * (stop2 - start2) + start2
}
/// Returns the greater of two values (`b` when they compare equal or are unordered).
///
pub fn max(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}
/// Returns the lesser of two values (`b` when they compare equal or are unordered).
///
pub fn min(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::FloatOperations;

    #[test]
    fn remapping() {
        use super::map;

        let cases: [((f64, f64, f64, f64, f64), f64, bool); 5] = [
            ((45.0, 0.0, 100.0, 0.0, 1000.0), 450.0, true),
            ((45.0, 1.0, 100.0, 0.0, 1000.0), 450.0, false),
            ((145.0, 100.0, 200.0, 200.0, 300.0), 245.0, true),
            ((145.0, 100.0, 200.0, 1000.0, 2000.0), 1450.0, true),
            ((50.0, 0.0, 100.0, 500.0, 1000.0), 750.0, true),
        ];
        for ((value, start1, stop1, start2, stop2), result, expected) in cases {
            let got: f64 = map(value, start1, stop1, start2, stop2);
            assert_eq!(got.round_up_to(2) == result, expected);
        }
    }

    #[test]
    fn min_max() {
        use super::{max, min};

        assert_eq!(max(0.0, 1.0), 1.0);
        assert_eq!(max(20.0, 1.0), 20.0);
        assert_eq!(max(0.0, 0.0), 0.0);
        assert_eq!(max(-0.01, 0.1), 0.1);

        assert_eq!(min(0.0, 1.0), 0.0);
        assert_eq!(min(20.0, 1.0), 1.0);
        assert_eq!(min(0.0, 0.0), 0.0);
        assert_eq!(min(-0.01, 0.1), -0.01);
    }

    #[test]
    fn equality() {
        use super::almost_equal;

        assert!(almost_equal(1.0, 1.0));
        assert!(almost_equal(0.1 + 0.2, 0.3));
        assert!(!almost_equal(1.0, 1.1));
        assert_eq!([1.005_f64, 2.449].round_up_to(1), [1.0, 2.4]);
    }
}
