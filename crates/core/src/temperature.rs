//! Absolute temperature on affine scales.
//!
//! A [`Temperature`] is a point on a scale; a [`TemperatureDelta`] is the
//! distance between two points. The split is in the types because the valid
//! arithmetic differs:
//! - `Temperature - Temperature = TemperatureDelta`
//! - `Temperature ± TemperatureDelta = Temperature`
//! - `TemperatureDelta ± TemperatureDelta = TemperatureDelta`, which is plain [`Quantity`] arithmetic
//!
//! Adding two temperatures or scaling one by a number is not offered: `20 °C`
//! is not "twice" `10 °C`. Where an absolute ratio is meaningful (gas laws,
//! radiation), [`Temperature::ratio_to`] works in kelvin.
//!
//! ```
//! use measura_core::{Temperature, TemperatureDelta, TemperatureDeltaUnit};
//!
//! let rise = Temperature::celsius(30.0) - Temperature::celsius(10.0);
//! assert_eq!(rise, TemperatureDelta::celsius_delta(20.0));
//! assert!((rise.get_value(TemperatureDeltaUnit::Fahrenheit) - 36.0).abs() < 1e-12);
//!
//! let warmer = Temperature::fahrenheit(50.0) + TemperatureDelta::kelvin_delta(10.0);
//! assert!((warmer.value() - 68.0).abs() < 1e-12);
//! ```
//!
//! Two readings do not add:
//!
//! ```compile_fail
//! use measura_core::Temperature;
//!
//! let _ = Temperature::celsius(1.0) + Temperature::celsius(2.0);
//! ```
//!
//! A reading does not scale:
//!
//! ```compile_fail
//! use measura_core::Temperature;
//!
//! let _ = Temperature::celsius(1.0) * 2.0;
//! ```
//!
//! A difference does not absorb a bare number:
//!
//! ```compile_fail
//! use measura_core::TemperatureDelta;
//!
//! let _ = TemperatureDelta::kelvin_delta(1.0) + 1.0_f64;
//! ```
//!
//! [`Quantity`]: crate::quantity::Quantity

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::error::{QuantityError, QuantityResult};
use crate::format::{self, DisplayOptions, NON_BREAKING_SPACE};
use crate::kinds::{TemperatureDelta, TemperatureDeltaUnit};
use crate::quantity::magnitude_cmp;
use crate::unit::{AffineUnit, UnitInfo};

/// 0 °C in kelvin
const CELSIUS_OFFSET: f64 = 273.15;

/// 0 °R in °F (absolute zero on the Fahrenheit scale, negated)
const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Fahrenheit degrees per kelvin
const FAHRENHEIT_PER_KELVIN: f64 = 1.8;

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// kelvin (`K`)
    Kelvin,
    /// degree Celsius (`°C`)
    Celsius,
    /// degree Fahrenheit (`°F`)
    Fahrenheit,
    /// degree Rankine (`°R`)
    Rankine,
}

impl TemperatureUnit {
    /// Every temperature scale
    pub const ALL: &'static [TemperatureUnit] = &[
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];
}

impl UnitInfo for TemperatureUnit {
    const KIND: &'static str = "Temperature";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Celsius => "degree Celsius",
            TemperatureUnit::Fahrenheit => "degree Fahrenheit",
            TemperatureUnit::Rankine => "degree Rankine",
        }
    }
}

impl AffineUnit for TemperatureUnit {
    type Delta = TemperatureDeltaUnit;

    const ABSOLUTE: Self = TemperatureUnit::Kelvin;

    fn delta_unit(self) -> TemperatureDeltaUnit {
        match self {
            TemperatureUnit::Kelvin => TemperatureDeltaUnit::Kelvin,
            TemperatureUnit::Celsius => TemperatureDeltaUnit::Celsius,
            TemperatureUnit::Fahrenheit => TemperatureDeltaUnit::Fahrenheit,
            TemperatureUnit::Rankine => TemperatureDeltaUnit::Rankine,
        }
    }

    /// One explicit formula per ordered pair of scales, so no conversion
    /// detours through a third scale.
    fn convert_value(self, value: f64, target: Self) -> f64 {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin, Rankine};

        match (self, target) {
            (Kelvin, Kelvin) | (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Rankine, Rankine) => value,
            (Celsius, Kelvin) => value + CELSIUS_OFFSET,
            (Kelvin, Celsius) => value - CELSIUS_OFFSET,
            (Celsius, Fahrenheit) => value * FAHRENHEIT_PER_KELVIN + 32.0,
            (Fahrenheit, Celsius) => (value - 32.0) / FAHRENHEIT_PER_KELVIN,
            (Celsius, Rankine) => (value + CELSIUS_OFFSET) * FAHRENHEIT_PER_KELVIN,
            (Rankine, Celsius) => value / FAHRENHEIT_PER_KELVIN - CELSIUS_OFFSET,
            (Fahrenheit, Kelvin) => (value + FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_KELVIN,
            (Kelvin, Fahrenheit) => value * FAHRENHEIT_PER_KELVIN - FAHRENHEIT_OFFSET,
            (Rankine, Kelvin) => value / FAHRENHEIT_PER_KELVIN,
            (Kelvin, Rankine) => value * FAHRENHEIT_PER_KELVIN,
            (Fahrenheit, Rankine) => value + FAHRENHEIT_OFFSET,
            (Rankine, Fahrenheit) => value - FAHRENHEIT_OFFSET,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An absolute temperature reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Temperature = Temperature::kelvin(0.0);

    /// Create a reading. No validation: values below absolute zero, NaN and
    /// infinities are stored as given.
    #[inline]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Reading in kelvin
    pub const fn kelvin(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    /// Reading in degrees Celsius
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Reading in degrees Fahrenheit
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Reading in degrees Rankine
    pub const fn rankine(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Rankine)
    }

    /// Stored reading, on [`Temperature::unit`]
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Scale the reading is stored on
    #[inline]
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Symbol of the stored scale
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    /// Reading on `target`. Same scale returns the stored value untouched.
    #[inline]
    pub fn get_value(&self, target: TemperatureUnit) -> f64 {
        if target == self.unit {
            self.value
        } else {
            self.unit.convert_value(self.value, target)
        }
    }

    /// The same temperature read on `target`
    pub fn convert_to(self, target: TemperatureUnit) -> Self {
        if target == self.unit {
            self
        } else {
            Self::new(self.get_value(target), target)
        }
    }

    /// Order by thermodynamic temperature, whatever the scales.
    ///
    /// Both readings are taken on the Celsius scale, whose conversions from
    /// °F and K land exactly on the usual fixed points (`212 °F` is `100 °C`).
    /// NaN handling matches [`crate::quantity::Quantity::compare_to`].
    pub fn compare_to(&self, other: &Self) -> Ordering {
        let scale = TemperatureUnit::Celsius;
        magnitude_cmp(self.get_value(scale), other.get_value(scale))
    }

    /// Same thermodynamic temperature, possibly on different scales
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Equivalence within a relative tolerance of the larger kelvin reading
    pub fn approx_eq(&self, other: &Self, relative_tolerance: f64) -> bool {
        let a = self.get_value(TemperatureUnit::ABSOLUTE);
        let b = other.get_value(TemperatureUnit::ABSOLUTE);
        a == b || (a - b).abs() <= relative_tolerance * a.abs().max(b.abs())
    }

    /// Ratio of absolute (kelvin) temperatures, `self / other`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `other` is absolute zero.
    pub fn ratio_to(&self, other: &Self) -> QuantityResult<f64> {
        let divisor = other.get_value(TemperatureUnit::ABSOLUTE);
        if divisor == 0.0 {
            return Err(QuantityError::division_by_zero("Temperature ratio (divisor at absolute zero)"));
        }
        Ok(self.get_value(TemperatureUnit::ABSOLUTE) / divisor)
    }

    /// Reinterpret this reading as its distance above absolute zero, in kelvin.
    ///
    /// `Temperature::celsius(20.0).as_delta()` is `293.15 K` of difference,
    /// not `20 K`. Use subtraction between two temperatures for ordinary
    /// differences.
    pub fn as_delta(&self) -> TemperatureDelta {
        TemperatureDelta::kelvin_delta(self.get_value(TemperatureUnit::ABSOLUTE))
    }

    /// Render as text; see [`DisplayOptions`]
    pub fn to_display_string(&self, options: &DisplayOptions<'_, TemperatureUnit>) -> String {
        let shown = match options.unit {
            Some(unit) => self.convert_to(unit),
            None => *self,
        };
        format::render(shown.value, shown.unit, options)
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Temperature {}

impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "{:.*}{}{}",
                precision,
                self.value,
                NON_BREAKING_SPACE,
                self.unit.symbol()
            ),
            None => write!(f, "{}{}{}", self.value, NON_BREAKING_SPACE, self.unit.symbol()),
        }
    }
}

// Temperature - Temperature = TemperatureDelta (in the left operand's degree size)
impl Sub for Temperature {
    type Output = TemperatureDelta;
    fn sub(self, rhs: Temperature) -> TemperatureDelta {
        TemperatureDelta::new(self.value - rhs.get_value(self.unit), self.unit.delta_unit())
    }
}

// Temperature + TemperatureDelta = Temperature
impl Add<TemperatureDelta> for Temperature {
    type Output = Temperature;
    fn add(self, rhs: TemperatureDelta) -> Temperature {
        Temperature::new(self.value + rhs.get_value(self.unit.delta_unit()), self.unit)
    }
}

// TemperatureDelta + Temperature = Temperature
impl Add<Temperature> for TemperatureDelta {
    type Output = Temperature;
    fn add(self, rhs: Temperature) -> Temperature {
        rhs + self
    }
}

// Temperature - TemperatureDelta = Temperature
impl Sub<TemperatureDelta> for Temperature {
    type Output = Temperature;
    fn sub(self, rhs: TemperatureDelta) -> Temperature {
        Temperature::new(self.value - rhs.get_value(self.unit.delta_unit()), self.unit)
    }
}

/// Literal-suffix constructors for [`Temperature`] on `f64`
pub trait TemperatureExt {
    /// This number as kelvin
    fn kelvin(self) -> Temperature;
    /// This number as degrees Celsius
    fn celsius(self) -> Temperature;
    /// This number as degrees Fahrenheit
    fn fahrenheit(self) -> Temperature;
    /// This number as degrees Rankine
    fn rankine(self) -> Temperature;
}

impl TemperatureExt for f64 {
    fn kelvin(self) -> Temperature {
        Temperature::kelvin(self)
    }

    fn celsius(self) -> Temperature {
        Temperature::celsius(self)
    }

    fn fahrenheit(self) -> Temperature {
        Temperature::fahrenheit(self)
    }

    fn rankine(self) -> Temperature {
        Temperature::rankine(self)
    }
}
