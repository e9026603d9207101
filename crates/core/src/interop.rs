//! Guarded conversion between [`Frequency`] and [`AngularVelocity`].
//!
//! Every angular velocity reads naturally as a frequency, so
//! [`AngularVelocity::as_frequency`] is total. The reverse is not: a heart
//! rate in `bpm` or a carrier at `MHz` is not a rotation, and
//! [`Frequency::as_angular_velocity`] refuses those units rather than invent
//! a rotation rate.
//!
//! Paired units have identical magnitude (1 Hz is one revolution per second),
//! so the value is carried across unchanged and the interop adds no rounding.
//!
//! ```
//! use measura_core::{AngularVelocityUnit, Frequency};
//!
//! let spindle = Frequency::revolutions_per_minute(1200.0).as_angular_velocity().unwrap();
//! assert_eq!(spindle.unit(), AngularVelocityUnit::RevolutionPerMinute);
//!
//! assert!(Frequency::beats_per_minute(72.0).as_angular_velocity().is_err());
//! ```

use crate::error::{QuantityError, QuantityResult};
use crate::kinds::{AngularVelocity, AngularVelocityUnit, Frequency, FrequencyUnit};
use crate::unit::UnitInfo;

impl FrequencyUnit {
    /// The angular-velocity unit with the same meaning, if this unit counts rotations
    pub fn angular_counterpart(self) -> Option<AngularVelocityUnit> {
        match self {
            FrequencyUnit::Hertz => Some(AngularVelocityUnit::RevolutionPerSecond),
            FrequencyUnit::RevolutionPerMinute => Some(AngularVelocityUnit::RevolutionPerMinute),
            FrequencyUnit::RadianPerSecond => Some(AngularVelocityUnit::RadianPerSecond),
            FrequencyUnit::RadianPerMinute => Some(AngularVelocityUnit::RadianPerMinute),
            FrequencyUnit::DegreePerSecond => Some(AngularVelocityUnit::DegreePerSecond),
            FrequencyUnit::DegreePerMinute => Some(AngularVelocityUnit::DegreePerMinute),
            FrequencyUnit::Millihertz
            | FrequencyUnit::Kilohertz
            | FrequencyUnit::Megahertz
            | FrequencyUnit::Gigahertz
            | FrequencyUnit::Terahertz
            | FrequencyUnit::BeatPerMinute => None,
        }
    }
}

impl AngularVelocityUnit {
    /// The frequency unit with the same magnitude
    pub fn frequency_counterpart(self) -> FrequencyUnit {
        match self {
            AngularVelocityUnit::RadianPerSecond => FrequencyUnit::RadianPerSecond,
            AngularVelocityUnit::RadianPerMinute => FrequencyUnit::RadianPerMinute,
            AngularVelocityUnit::DegreePerSecond => FrequencyUnit::DegreePerSecond,
            AngularVelocityUnit::DegreePerMinute => FrequencyUnit::DegreePerMinute,
            AngularVelocityUnit::RevolutionPerMinute => FrequencyUnit::RevolutionPerMinute,
            AngularVelocityUnit::RevolutionPerSecond => FrequencyUnit::Hertz,
        }
    }
}

impl Frequency {
    /// Read this frequency as a rotation rate.
    ///
    /// # Errors
    /// [`QuantityError::UnsupportedConversion`] naming the unit symbol when the
    /// unit has no rotational meaning (`bpm`, `kHz`, `MHz`, ...).
    pub fn as_angular_velocity(&self) -> QuantityResult<AngularVelocity> {
        match self.unit().angular_counterpart() {
            Some(unit) => Ok(AngularVelocity::new(self.value(), unit)),
            None => Err(QuantityError::unsupported_conversion(
                FrequencyUnit::KIND,
                AngularVelocityUnit::KIND,
                self.symbol(),
            )),
        }
    }
}

impl AngularVelocity {
    /// Read this rotation rate as a frequency (cycles are revolutions)
    pub fn as_frequency(&self) -> Frequency {
        Frequency::new(self.value(), self.unit().frequency_counterpart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_angular_unit_round_trips() {
        for &unit in AngularVelocityUnit::ALL {
            let w = AngularVelocity::new(12.5, unit);
            let back = w.as_frequency().as_angular_velocity().unwrap();
            assert_eq!(back, w);
        }
    }

    #[test]
    fn test_hertz_is_revolutions_per_second() {
        let w = Frequency::hertz(3.0).as_angular_velocity().unwrap();
        assert_eq!(w, AngularVelocity::revolutions_per_second(3.0));
    }

    #[test]
    fn test_non_rotational_units_rejected() {
        for unit in [
            FrequencyUnit::Millihertz,
            FrequencyUnit::Kilohertz,
            FrequencyUnit::Megahertz,
            FrequencyUnit::Gigahertz,
            FrequencyUnit::Terahertz,
            FrequencyUnit::BeatPerMinute,
        ] {
            let err = Frequency::new(1.0, unit).as_angular_velocity().unwrap_err();
            match err {
                QuantityError::UnsupportedConversion { symbol, .. } => assert_eq!(symbol, unit.symbol()),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }
}
