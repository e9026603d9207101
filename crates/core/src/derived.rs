//! Quantities computed from quantities of other kinds.
//!
//! Every derivation reads its inputs in their kinds' base units, applies the
//! scalar formula once and returns the result in the base unit of the result
//! kind. The only rounding is the single conversion of each input.
//!
//! Quotients are named constructors returning [`QuantityResult`]: a divisor that
//! is exactly zero in its base unit is a [`QuantityError::DivisionByZero`].
//! Products cannot fail and are also available as `*`:
//!
//! ```
//! use measura_core::{Length, Speed, SpeedUnit, Time};
//!
//! let pace = Speed::from_length_and_time(Length::kilometers(42.195), Time::hours(3.0)).unwrap();
//! assert!((pace.get_value(SpeedUnit::KilometerPerHour) - 14.065).abs() < 1e-12);
//!
//! let covered = pace * Time::minutes(30.0);
//! assert!((covered.value() - 7032.5).abs() < 1e-9);
//! ```

use std::ops::Mul;

use crate::error::{QuantityError, QuantityResult};
use crate::kinds::{
    Acceleration, Angle, AngularVelocity, Area, Current, Density, ElectricCharge, Energy, Force,
    Frequency, Length, Mass, Power, Pressure, SpecificEnergy, Speed, Time, Volume,
};

/// Base-unit value of a divisor, or `DivisionByZero` naming `operation`
fn nonzero_divisor(divisor: f64, operation: &str) -> QuantityResult<f64> {
    if divisor == 0.0 {
        Err(QuantityError::division_by_zero(operation))
    } else {
        Ok(divisor)
    }
}

/// `lhs * rhs -> out`, computed in base units. The `commutative` form also
/// implements `rhs * lhs`.
macro_rules! product {
    ($lhs:ident * $rhs:ident => $out:ident) => {
        impl Mul<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                $out::from_base_value(self.base_value() * rhs.base_value())
            }
        }
    };
    (commutative $lhs:ident * $rhs:ident => $out:ident) => {
        product!($lhs * $rhs => $out);
        product!($rhs * $lhs => $out);
    };
}

product!(commutative Mass * Acceleration => Force);
product!(Length * Length => Area);
product!(commutative Area * Length => Volume);
product!(commutative Speed * Time => Length);
product!(commutative Acceleration * Time => Speed);
product!(commutative Current * Time => ElectricCharge);
product!(commutative Power * Time => Energy);
product!(commutative Force * Length => Energy);
product!(commutative Density * Volume => Mass);
product!(commutative SpecificEnergy * Mass => Energy);
product!(commutative Pressure * Area => Force);

impl Speed {
    /// Distance covered per unit time.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_length_and_time(length: Length, time: Time) -> QuantityResult<Speed> {
        let seconds = nonzero_divisor(time.base_value(), "Speed::from_length_and_time")?;
        Ok(Speed::from_base_value(length.base_value() / seconds))
    }
}

impl Acceleration {
    /// Change of speed per unit time, treating `speed` as the change from rest.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_speed_and_time(speed: Speed, time: Time) -> QuantityResult<Acceleration> {
        let seconds = nonzero_divisor(time.base_value(), "Acceleration::from_speed_and_time")?;
        Ok(Acceleration::from_base_value(speed.base_value() / seconds))
    }

    /// Mean acceleration between two speeds over `time`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_speed_change(initial: Speed, final_speed: Speed, time: Time) -> QuantityResult<Acceleration> {
        let seconds = nonzero_divisor(time.base_value(), "Acceleration::from_speed_change")?;
        let delta = final_speed.base_value() - initial.base_value();
        Ok(Acceleration::from_base_value(delta / seconds))
    }
}

impl Force {
    /// Newton's second law, `F = m·a`
    pub fn from_mass_and_acceleration(mass: Mass, acceleration: Acceleration) -> Force {
        mass * acceleration
    }
}

impl ElectricCharge {
    /// Charge moved by a steady current, `Q = I·t`
    pub fn from_current_and_time(current: Current, time: Time) -> ElectricCharge {
        current * time
    }
}

impl Current {
    /// Mean current carrying `charge` over `time`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_charge_and_time(charge: ElectricCharge, time: Time) -> QuantityResult<Current> {
        let seconds = nonzero_divisor(time.base_value(), "Current::from_charge_and_time")?;
        Ok(Current::from_base_value(charge.base_value() / seconds))
    }
}

impl Frequency {
    /// Frequency of an event repeating every `period`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `period` is zero.
    pub fn from_period(period: Time) -> QuantityResult<Frequency> {
        let seconds = nonzero_divisor(period.base_value(), "Frequency::from_period")?;
        Ok(Frequency::from_base_value(1.0 / seconds))
    }
}

impl Time {
    /// Period of a repeating event, the inverse of [`Frequency::from_period`].
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `frequency` is zero.
    pub fn period_of(frequency: Frequency) -> QuantityResult<Time> {
        let hertz = nonzero_divisor(frequency.base_value(), "Time::period_of")?;
        Ok(Time::from_base_value(1.0 / hertz))
    }

    /// Time needed to cover `length` at `speed`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `speed` is zero.
    pub fn from_length_and_speed(length: Length, speed: Speed) -> QuantityResult<Time> {
        let meters_per_second = nonzero_divisor(speed.base_value(), "Time::from_length_and_speed")?;
        Ok(Time::from_base_value(length.base_value() / meters_per_second))
    }
}

impl SpecificEnergy {
    /// Energy per unit mass.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `mass` is zero.
    pub fn from_energy_and_mass(energy: Energy, mass: Mass) -> QuantityResult<SpecificEnergy> {
        let kilograms = nonzero_divisor(mass.base_value(), "SpecificEnergy::from_energy_and_mass")?;
        Ok(SpecificEnergy::from_base_value(energy.base_value() / kilograms))
    }
}

impl Energy {
    /// Energy delivered by constant `power` over `time`
    pub fn from_power_and_time(power: Power, time: Time) -> Energy {
        power * time
    }
}

impl Power {
    /// Mean power of `energy` delivered over `time`.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_energy_and_time(energy: Energy, time: Time) -> QuantityResult<Power> {
        let seconds = nonzero_divisor(time.base_value(), "Power::from_energy_and_time")?;
        Ok(Power::from_base_value(energy.base_value() / seconds))
    }
}

impl Density {
    /// Mass per unit volume.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `volume` is zero.
    pub fn from_mass_and_volume(mass: Mass, volume: Volume) -> QuantityResult<Density> {
        let cubic_meters = nonzero_divisor(volume.base_value(), "Density::from_mass_and_volume")?;
        Ok(Density::from_base_value(mass.base_value() / cubic_meters))
    }
}

impl Pressure {
    /// Force per unit area.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `area` is zero.
    pub fn from_force_and_area(force: Force, area: Area) -> QuantityResult<Pressure> {
        let square_meters = nonzero_divisor(area.base_value(), "Pressure::from_force_and_area")?;
        Ok(Pressure::from_base_value(force.base_value() / square_meters))
    }
}

impl Area {
    /// Area of a rectangle
    pub fn from_length_and_width(length: Length, width: Length) -> Area {
        length * width
    }
}

impl Volume {
    /// Volume of a prism with cross-section `area`
    pub fn from_area_and_height(area: Area, height: Length) -> Volume {
        area * height
    }
}

impl AngularVelocity {
    /// Angle swept per unit time.
    ///
    /// # Errors
    /// [`QuantityError::DivisionByZero`] when `time` is zero.
    pub fn from_angle_and_time(angle: Angle, time: Time) -> QuantityResult<AngularVelocity> {
        let seconds = nonzero_divisor(time.base_value(), "AngularVelocity::from_angle_and_time")?;
        Ok(AngularVelocity::from_base_value(angle.base_value() / seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{
        AccelerationUnit, AngularVelocityUnit, ElectricChargeUnit, EnergyUnit, ForceUnit, PressureUnit,
        SpeedUnit, VolumeUnit,
    };

    #[test]
    fn test_speed_from_length_and_time() {
        let speed = Speed::from_length_and_time(Length::meters(100.0), Time::seconds(10.0)).unwrap();
        assert_eq!(speed, Speed::meters_per_second(10.0));
    }

    #[test]
    fn test_acceleration_from_speed_and_time() {
        let a = Acceleration::from_speed_and_time(Speed::meters_per_second(27.8), Time::seconds(5.0)).unwrap();
        assert_eq!(a.unit(), AccelerationUnit::MeterPerSecondSquared);
        assert!((a.value() - 5.56).abs() < 1e-12);
    }

    #[test]
    fn test_acceleration_from_speed_change_mixed_units() {
        let a = Acceleration::from_speed_change(
            Speed::kilometers_per_hour(36.0),
            Speed::meters_per_second(20.0),
            Time::seconds(2.0),
        )
        .unwrap();
        assert!((a.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_charge_from_current_and_time() {
        let charge = ElectricCharge::from_current_and_time(Current::amperes(2.0), Time::hours(1.0));
        assert_eq!(charge, ElectricCharge::coulombs(7200.0));
        assert!(charge.is_equivalent_to(&ElectricCharge::ampere_hours(2.0)));
        assert!((charge.get_value(ElectricChargeUnit::AmpereHour) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_divisors_are_rejected() {
        let zero = Time::seconds(0.0);
        assert!(matches!(
            Speed::from_length_and_time(Length::meters(1.0), zero),
            Err(QuantityError::DivisionByZero { .. })
        ));
        assert!(Frequency::from_period(Time::minutes(0.0)).is_err());
        assert!(Time::period_of(Frequency::kilohertz(0.0)).is_err());
        assert!(Time::from_length_and_speed(Length::meters(1.0), Speed::knots(0.0)).is_err());
        assert!(Density::from_mass_and_volume(Mass::grams(1.0), Volume::liters(0.0)).is_err());
        assert!(Pressure::from_force_and_area(Force::newtons(1.0), Area::hectares(0.0)).is_err());
        assert!(SpecificEnergy::from_energy_and_mass(Energy::joules(1.0), Mass::kilograms(0.0)).is_err());
        assert!(Power::from_energy_and_time(Energy::joules(1.0), zero).is_err());
        assert!(Current::from_charge_and_time(ElectricCharge::coulombs(1.0), zero).is_err());
        assert!(AngularVelocity::from_angle_and_time(Angle::radians(1.0), zero).is_err());
    }

    #[test]
    fn test_zero_dividend_is_fine() {
        let speed = Speed::from_length_and_time(Length::meters(0.0), Time::seconds(4.0)).unwrap();
        assert_eq!(speed.value(), 0.0);
    }

    #[test]
    fn test_period_and_frequency_are_inverse() {
        let f = Frequency::from_period(Time::milliseconds(20.0)).unwrap();
        assert!((f.value() - 50.0).abs() < 1e-12);
        let t = Time::period_of(f).unwrap();
        assert!((t.value() - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_products_commute() {
        let m = Mass::kilograms(3.0);
        let a = Acceleration::meters_per_second_squared(2.0);
        let f1 = m * a;
        let f2 = a * m;
        assert_eq!(f1, f2);
        assert_eq!(f1.unit(), ForceUnit::Newton);
        assert_eq!(Force::from_mass_and_acceleration(m, a), f1);
    }

    #[test]
    fn test_products_use_base_units() {
        let area = Area::from_length_and_width(Length::centimeters(50.0), Length::meters(2.0));
        assert!((area.value() - 1.0).abs() < 1e-15);

        let tank = Volume::from_area_and_height(Area::square_meters(2.0), Length::centimeters(50.0));
        assert!((tank.get_value(VolumeUnit::Liter) - 1000.0).abs() < 1e-9);

        let work = Force::kilonewtons(1.0) * Length::meters(3.0);
        assert_eq!(work.unit(), EnergyUnit::Joule);
        assert_eq!(work.value(), 3000.0);

        let bill = Energy::from_power_and_time(Power::kilowatts(2.0), Time::hours(1.5));
        assert!((bill.get_value(EnergyUnit::KilowattHour) - 3.0).abs() < 1e-12);

        let water = Density::grams_per_cubic_centimeter(1.0) * Volume::liters(2.0);
        assert!((water.value() - 2.0).abs() < 1e-12);

        let heat = SpecificEnergy::kilojoules_per_kilogram(4.0) * Mass::kilograms(0.5);
        assert!((heat.value() - 2000.0).abs() < 1e-9);

        let lift = Pressure::kilopascals(1.0) * Area::square_meters(2.0);
        assert!((lift.value() - 2000.0).abs() < 1e-9);

        let v = Acceleration::standard_gravities(1.0) * Time::seconds(2.0);
        assert_eq!(v.unit(), SpeedUnit::MeterPerSecond);
        assert!((v.value() - 19.6133).abs() < 1e-12);
    }

    #[test]
    fn test_pressure_round_trip_through_products() {
        let p = Pressure::from_force_and_area(Force::newtons(500.0), Area::square_meters(0.25)).unwrap();
        assert_eq!(p.unit(), PressureUnit::Pascal);
        assert_eq!(p.value(), 2000.0);
        assert!((p * Area::square_meters(0.25)).is_equivalent_to(&Force::newtons(500.0)));
    }

    #[test]
    fn test_angular_velocity_from_angle_and_time() {
        let w = AngularVelocity::from_angle_and_time(Angle::revolutions(1.0), Time::seconds(1.0)).unwrap();
        assert_eq!(w.unit(), AngularVelocityUnit::RadianPerSecond);
        assert!((w.get_value(AngularVelocityUnit::RevolutionPerSecond) - 1.0).abs() < 1e-12);
    }
}
