//! Everything needed for day-to-day use in one import.
//!
//! ```
//! use measura_core::prelude::*;
//!
//! let leg = 2.0_f64.kilometers() + 300.0_f64.meters();
//! assert_eq!(leg.get_value(LengthUnit::Meter), 2300.0);
//! ```
//!
//! `FrequencyExt` and `AngularVelocityExt` are left out: both define
//! `revolutions_per_minute`, `radians_per_second` and friends, so importing
//! both would make those suffixes ambiguous. Import the one you need from the
//! crate root.

pub use crate::error::{QuantityError, QuantityResult};
pub use crate::format::{DisplayOptions, GroupedNumberFormat, NumberFormat, PlainNumberFormat};
pub use crate::quantity::Quantity;
pub use crate::temperature::{Temperature, TemperatureExt, TemperatureUnit};
pub use crate::unit::{AffineUnit, Unit, UnitInfo};

pub use crate::kinds::{
    Acceleration, AccelerationUnit, Angle, AngleUnit, AngularVelocity, AngularVelocityUnit, Area, AreaUnit,
    Current, CurrentUnit, Density, DensityUnit, ElectricCharge, ElectricChargeUnit, Energy, EnergyUnit, Force,
    ForceUnit, Frequency, FrequencyUnit, Length, LengthUnit, LuminousIntensity, LuminousIntensityUnit, Mass,
    MassUnit, MolarAmount, MolarAmountUnit, Power, PowerUnit, Pressure, PressureUnit, SolidAngle, SolidAngleUnit,
    SpecificEnergy, SpecificEnergyUnit, Speed, SpeedUnit, TemperatureDelta, TemperatureDeltaUnit, Time, TimeUnit,
    Volume, VolumeUnit,
};

pub use crate::kinds::{
    AccelerationExt, AngleExt, AreaExt, CurrentExt, DensityExt, ElectricChargeExt, EnergyExt, ForceExt, LengthExt,
    LuminousIntensityExt, MassExt, MolarAmountExt, PowerExt, PressureExt, SolidAngleExt, SpecificEnergyExt,
    SpeedExt, TemperatureDeltaExt, TimeExt, VolumeExt,
};
