//! The generic quantity type shared by every multiplicative kind.
//!
//! A [`Quantity`] is a magnitude tagged with a unit of one kind. Mixing kinds
//! does not compile; mixing units of the same kind converts with the single
//! precomputed factor between them.
//!
//! # Equality and ordering
//! - `==` is strict: same unit and bit-identical value, no conversion.
//!   `1 m != 100 cm` under `==`.
//! - [`Quantity::compare_to`] and [`Quantity::is_equivalent_to`] compare
//!   physical magnitude. `1 m` is equivalent to `100 cm`.
//!
//! `PartialOrd`/`Ord` are deliberately absent because a magnitude ordering
//! cannot agree with strict equality. Sort with `sort_by(Quantity::compare_to)`.
//!
//! # Arithmetic
//! `+` and `-` convert the right operand into the left operand's unit; the
//! result keeps the left unit. Scaling by `f64` keeps the unit. Division by a
//! scalar is only offered as [`Quantity::try_div`], which refuses zero.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{QuantityError, QuantityResult};
use crate::format::{self, DisplayOptions, NON_BREAKING_SPACE};
use crate::unit::Unit;

/// Compare two magnitudes: IEEE ordering for numbers, IEEE 754 `totalOrder`
/// once a NaN is involved (positive NaN above +inf, negative NaN below -inf).
#[inline]
pub(crate) fn magnitude_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// A value measured in a unit of kind `U`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Create a quantity. NaN and infinities are accepted and propagate.
    #[inline]
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Stored magnitude, in [`Quantity::unit`]
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit the magnitude is stored in
    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Symbol of the stored unit
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    /// Magnitude expressed in `target`. Same unit returns the stored value untouched.
    #[inline]
    pub fn get_value(&self, target: U) -> f64 {
        if target == self.unit {
            self.value
        } else {
            self.value * self.unit.factor_to(target)
        }
    }

    /// Magnitude in the kind's base unit
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.get_value(U::BASE)
    }

    /// A quantity of `value` in the kind's base unit
    #[inline]
    pub fn from_base_value(value: f64) -> Self {
        Self::new(value, U::BASE)
    }

    /// The same quantity re-expressed in `target`
    #[inline]
    pub fn convert_to(self, target: U) -> Self {
        if target == self.unit {
            self
        } else {
            Self::new(self.get_value(target), target)
        }
    }

    /// Order by physical magnitude, independent of the units involved.
    ///
    /// Both sides are read in the base unit, so `a.compare_to(&b)` is always
    /// the reverse of `b.compare_to(&a)` and mixed-unit sorts are consistent.
    /// Ordinary values compare with IEEE semantics (`-0.0` equals `0.0`);
    /// when a NaN is involved the comparison falls back to `f64::total_cmp`.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        magnitude_cmp(self.base_value(), other.base_value())
    }

    /// Same physical magnitude, possibly in different units
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Equivalence within a relative tolerance of the larger magnitude
    pub fn approx_eq(&self, other: &Self, relative_tolerance: f64) -> bool {
        let a = self.get_value(other.unit);
        let b = other.value;
        a == b || (a - b).abs() <= relative_tolerance * a.abs().max(b.abs())
    }

    /// The larger of the two magnitudes, keeping its own unit
    pub fn max_by_magnitude(self, other: Self) -> Self {
        if self.compare_to(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// The smaller of the two magnitudes, keeping its own unit
    pub fn min_by_magnitude(self, other: Self) -> Self {
        if self.compare_to(&other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Absolute value, same unit
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// Divide by a scalar, keeping the unit.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `divisor` is zero.
    pub fn try_div(self, divisor: f64) -> QuantityResult<Self> {
        if divisor == 0.0 {
            return Err(QuantityError::division_by_zero(format!("{} / scalar", U::KIND)));
        }
        Ok(Self::new(self.value / divisor, self.unit))
    }

    /// Dimensionless ratio `self / other`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `other` is zero.
    pub fn ratio_to(&self, other: &Self) -> QuantityResult<f64> {
        if other.value == 0.0 {
            return Err(QuantityError::division_by_zero(format!("{} ratio", U::KIND)));
        }
        Ok(self.get_value(other.unit) / other.value)
    }

    /// Render as text; see [`DisplayOptions`]
    pub fn to_display_string(&self, options: &DisplayOptions<'_, U>) -> String {
        let shown = match options.unit {
            Some(unit) => self.convert_to(unit),
            None => *self,
        };
        format::render(shown.value, shown.unit, options)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value.to_bits() == other.value.to_bits()
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
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

// Quantity + Quantity = Quantity (in the left operand's unit)
impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.get_value(self.unit), self.unit)
    }
}

// Quantity - Quantity = Quantity (in the left operand's unit)
impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.get_value(self.unit), self.unit)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        rhs * self
    }
}
