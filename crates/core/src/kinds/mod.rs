//! Unit tables for every multiplicative kind of quantity.
//!
//! Each table row is `Variant => constructor, symbol, name, factor_to_base`.
//! Factors come from exact legal definitions where one exists (SI 2019, the
//! 1959 international yard and pound, NIST SP 811), from CODATA 2018 for
//! measured constants and from IAU resolutions for astronomical units. Rows
//! sharing a factor (hectare and square hectometre, litre and cubic decimetre)
//! are intentional aliases: magnitude-equivalent, distinct for display.

pub mod base;
pub mod electric;
pub mod geometry;
pub mod mechanics;
pub mod rotation;

pub use base::*;
pub use electric::*;
pub use geometry::*;
pub use mechanics::*;
pub use rotation::*;

/// International avoirdupois pound, kg (exact, 1959)
pub(crate) const POUND: f64 = 0.45359237;

/// International foot, m (exact, 1959)
pub(crate) const FOOT: f64 = 0.3048;

/// International inch, m (exact, 1959)
pub(crate) const INCH: f64 = 0.0254;

/// Standard acceleration of gravity, m/s² (exact, CGPM 1901)
pub(crate) const STANDARD_GRAVITY: f64 = 9.80665;

/// Pound-force, N (exact)
pub(crate) const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;

/// US liquid gallon, m³ (exact, 231 in³)
pub(crate) const US_GALLON: f64 = 3.785411784e-3;

/// International Table British thermal unit, J
pub(crate) const BTU: f64 = 1055.05585262;

/// Speed of light in vacuum, m/s (exact, SI)
pub(crate) const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Elementary charge, C (exact, SI 2019)
pub(crate) const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Julian year, s (exact, IAU)
pub(crate) const JULIAN_YEAR: f64 = 31_557_600.0;
