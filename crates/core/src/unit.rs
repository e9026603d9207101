//! Unit contracts and the table macro that generates every unit enumeration.
//!
//! A kind of physical quantity is described once as a table of
//! `(variant, constructor, symbol, name, factor_to_base)` rows. From that table
//! [`define_units!`] emits:
//! - a fieldless enum of the units,
//! - the factor of each unit to the kind's base unit,
//! - a complete `N x N` table of direct conversion factors, filled in a `const`
//!   initializer, so converting between any two units is one multiplication,
//! - the [`Unit`] impl, a `pub type` alias for the quantity, one associated
//!   constructor per unit, and a literal-suffix extension trait on `f64`.
//!
//! Temperature is the exception: its scales have offsets, so its unit enum
//! implements [`AffineUnit`] instead of [`Unit`] and is written by hand in
//! [`crate::temperature`].

use std::fmt::Debug;
use std::hash::Hash;

/// Information every unit enumeration exposes, whatever its conversion model
pub trait UnitInfo: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name of the physical kind, e.g. `"Length"`
    const KIND: &'static str;

    /// Every unit of the kind, in declaration order
    fn all() -> &'static [Self];

    /// Display symbol, e.g. `"km"` or `"°C"`
    fn symbol(self) -> &'static str;

    /// Human-readable unit name, e.g. `"kilometer"`
    fn name(self) -> &'static str;

    /// Look up a unit by its exact display symbol
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::all().iter().copied().find(|unit| unit.symbol() == symbol)
    }
}

/// A unit whose conversions are purely multiplicative.
///
/// Invariants upheld by every generated implementation:
/// - `u.factor_to(u) == 1.0` exactly
/// - `a.factor_to(b) * b.factor_to(a) ≈ 1.0`
/// - `a.factor_to(b) * b.factor_to(c) ≈ a.factor_to(c)`
pub trait Unit: UnitInfo {
    /// The reference unit all `factor_to_base` values are expressed in
    const BASE: Self;

    /// `1 [self] = factor_to_base [BASE]`
    fn factor_to_base(self) -> f64;

    /// Direct factor such that `1 [self] = factor_to(target) [target]`
    fn factor_to(self, target: Self) -> f64;
}

/// A unit on an affine scale (scale and offset), i.e. absolute temperature.
pub trait AffineUnit: UnitInfo {
    /// Multiplicative unit measuring differences on these scales
    type Delta: Unit;

    /// The scale whose zero is the physical zero (Kelvin)
    const ABSOLUTE: Self;

    /// Delta unit with the same degree size as this scale
    fn delta_unit(self) -> Self::Delta;

    /// Convert a reading on this scale to a reading on `target`
    fn convert_value(self, value: f64, target: Self) -> f64;
}

/// Generate a unit enumeration, its conversion table and its quantity alias.
///
/// ```ignore
/// define_units! {
///     /// Units of length
///     Length, LengthUnit, LengthExt, base = Meter;
///     Meter => meters, "m", "meter", 1.0;
///     Kilometer => kilometers, "km", "kilometer", 1e3;
/// }
/// ```
macro_rules! define_units {
    (
        $(#[$meta:meta])*
        $kind:ident, $unit:ident, $ext:ident, base = $base:ident;
        $(
            $variant:ident => $ctor:ident, $symbol:literal, $name:literal, $factor:expr;
        )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $unit {
            $(
                #[doc = concat!($name, " (`", $symbol, "`)")]
                $variant,
            )+
        }

        impl $unit {
            /// Every unit of this kind, in declaration order
            pub const ALL: &'static [$unit] = &[$($unit::$variant),+];

            const COUNT: usize = Self::ALL.len();

            const TO_BASE: [f64; Self::COUNT] = [$($factor),+];

            const FACTORS: [[f64; Self::COUNT]; Self::COUNT] = {
                let mut table = [[1.0; Self::COUNT]; Self::COUNT];
                let mut from = 0;
                while from < Self::COUNT {
                    let mut to = 0;
                    while to < Self::COUNT {
                        if from != to {
                            table[from][to] = Self::TO_BASE[from] / Self::TO_BASE[to];
                        }
                        to += 1;
                    }
                    from += 1;
                }
                table
            };
        }

        impl $crate::unit::UnitInfo for $unit {
            const KIND: &'static str = stringify!($kind);

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($unit::$variant => $symbol,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($unit::$variant => $name,)+
                }
            }
        }

        impl $crate::unit::Unit for $unit {
            const BASE: Self = $unit::$base;

            #[inline]
            fn factor_to_base(self) -> f64 {
                Self::TO_BASE[self as usize]
            }

            #[inline]
            fn factor_to(self, target: Self) -> f64 {
                Self::FACTORS[self as usize][target as usize]
            }
        }

        impl std::fmt::Display for $unit {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::unit::UnitInfo::symbol(*self))
            }
        }

        #[doc = concat!("A quantity of ", stringify!($kind), " tagged with a [`", stringify!($unit), "`]")]
        pub type $kind = $crate::quantity::Quantity<$unit>;

        impl $crate::quantity::Quantity<$unit> {
            $(
                #[doc = concat!("Create a quantity in ", $name, " (`", $symbol, "`)")]
                #[inline]
                pub const fn $ctor(value: f64) -> Self {
                    Self::new(value, $unit::$variant)
                }
            )+
        }

        #[doc = concat!("Literal-suffix constructors for [`", stringify!($kind), "`] on `f64`")]
        pub trait $ext {
            $(
                #[doc = concat!("This number as ", $name, " (`", $symbol, "`)")]
                fn $ctor(self) -> $kind;
            )+
        }

        impl $ext for f64 {
            $(
                #[inline]
                fn $ctor(self) -> $kind {
                    $kind::$ctor(self)
                }
            )+
        }
    };
}

pub(crate) use define_units;
