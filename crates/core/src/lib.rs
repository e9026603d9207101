//! Measura Core Library
//!
//! Type-safe physical quantities: every value carries its unit, mixing kinds
//! is a compile error, and converting between two units of one kind is a
//! single multiplication by a factor computed at compile time.
//!
//! ## Overview
//!
//! - 22 kinds of quantity (length, mass, time, pressure, energy, ...) as
//!   [`Quantity`] aliases such as [`Length`] and [`Pressure`]
//! - [`Temperature`] on affine scales, with differences as [`TemperatureDelta`]
//! - Cross-kind derivations (`Speed = Length / Time`, `Force = Mass × Acceleration`)
//! - A guarded [`Frequency`] to [`AngularVelocity`] bridge
//!
//! ```
//! use measura_core::prelude::*;
//!
//! let sprint = Speed::from_length_and_time(100.0_f64.meters(), 9.58_f64.seconds()).unwrap();
//! assert!(sprint.get_value(SpeedUnit::KilometerPerHour) > 37.5);
//!
//! let boiling = Temperature::celsius(100.0);
//! assert_eq!(boiling.get_value(TemperatureUnit::Fahrenheit), 212.0);
//!
//! // Strict equality compares unit and value; equivalence compares magnitude
//! assert_ne!(Length::meters(1.0), Length::centimeters(100.0));
//! assert!(Length::meters(1.0).is_equivalent_to(&Length::centimeters(100.0)));
//! ```

// Contracts and shared machinery
pub mod error;
pub mod format;
pub mod quantity;
pub mod unit;

// Quantity kinds
pub mod kinds;
pub mod temperature;

// Relations between kinds
pub mod derived;
pub mod interop;
pub mod physics;

pub mod prelude;

// Re-export core types
pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;
pub use unit::{AffineUnit, Unit, UnitInfo};

// Re-export every kind, unit enumeration and literal-suffix trait
pub use kinds::*;
pub use temperature::{Temperature, TemperatureExt, TemperatureUnit};
