//! Classical-mechanics helpers built on the derivations.
//!
//! Inputs are typed quantities in any unit; results come back in base SI
//! units. Helpers whose formula is undefined for some inputs return
//! [`QuantityResult`] instead of producing infinities or NaN.

use std::f64::consts::PI;

use crate::error::{QuantityError, QuantityResult};
use crate::kinds::{Acceleration, Energy, Force, Length, Mass, Speed, Time};

/// Newtonian constant of gravitation, m³/(kg·s²) (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Standard acceleration of gravity (exact)
pub const STANDARD_GRAVITY: Acceleration =
    Acceleration::meters_per_second_squared(crate::kinds::STANDARD_GRAVITY);

/// `Err(InvalidArgument)` unless `value` is strictly positive
fn require_positive(name: &str, value: f64) -> QuantityResult<f64> {
    if value <= 0.0 {
        Err(QuantityError::invalid_argument(name, value, "must be positive"))
    } else {
        Ok(value)
    }
}

/// `F = m·a`
pub fn force(mass: Mass, acceleration: Acceleration) -> Force {
    mass * acceleration
}

/// Weight of `mass` under standard gravity
pub fn weight(mass: Mass) -> Force {
    mass * STANDARD_GRAVITY
}

/// `E = ½·m·v²`
pub fn kinetic_energy(mass: Mass, speed: Speed) -> Energy {
    let v = speed.base_value();
    Energy::from_base_value(0.5 * mass.base_value() * v * v)
}

/// `E = m·g·h` under standard gravity
pub fn potential_energy(mass: Mass, height: Length) -> Energy {
    weight(mass) * height
}

/// Newton's law of universal gravitation, `F = G·m₁·m₂ / r²`.
///
/// # Errors
/// [`QuantityError::DivisionByZero`] when `distance` is zero.
pub fn gravitational_force(m1: Mass, m2: Mass, distance: Length) -> QuantityResult<Force> {
    let r = distance.base_value();
    if r == 0.0 {
        return Err(QuantityError::division_by_zero("physics::gravitational_force"));
    }
    Ok(Force::from_base_value(
        GRAVITATIONAL_CONSTANT * m1.base_value() * m2.base_value() / (r * r),
    ))
}

/// Kepler's third law: period of an orbit with the given semi-major axis
/// around a body of `central_mass` (the orbiting mass is neglected).
///
/// # Errors
/// [`QuantityError::InvalidArgument`] when either input is not positive.
pub fn orbital_period(semi_major_axis: Length, central_mass: Mass) -> QuantityResult<Time> {
    let a = require_positive("semi_major_axis", semi_major_axis.base_value())?;
    let mu = GRAVITATIONAL_CONSTANT * require_positive("central_mass", central_mass.base_value())?;
    Ok(Time::from_base_value(2.0 * PI * (a.powi(3) / mu).sqrt()))
}

/// Kepler's third law solved for the semi-major axis.
///
/// # Errors
/// [`QuantityError::InvalidArgument`] when either input is not positive.
pub fn semi_major_axis(period: Time, central_mass: Mass) -> QuantityResult<Length> {
    let t = require_positive("period", period.base_value())?;
    let mu = GRAVITATIONAL_CONSTANT * require_positive("central_mass", central_mass.base_value())?;
    Ok(Length::from_base_value((mu * t * t / (4.0 * PI * PI)).cbrt()))
}

/// Minimum launch speed to escape a body from its surface, `v = √(2GM/r)`.
///
/// # Errors
/// [`QuantityError::InvalidArgument`] when `radius` is not positive or `mass`
/// is negative.
pub fn escape_velocity(mass: Mass, radius: Length) -> QuantityResult<Speed> {
    let r = require_positive("radius", radius.base_value())?;
    let m = mass.base_value();
    if m < 0.0 {
        return Err(QuantityError::invalid_argument("mass", m, "must not be negative"));
    }
    Ok(Speed::from_base_value((2.0 * GRAVITATIONAL_CONSTANT * m / r).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{EnergyUnit, ForceUnit, LengthUnit, SpeedUnit, TimeUnit};

    #[test]
    fn test_weight_of_one_kilogram() {
        let w = weight(Mass::kilograms(1.0));
        assert_eq!(w.unit(), ForceUnit::Newton);
        assert!((w.get_value(ForceUnit::KilogramForce) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_force_matches_operator() {
        let m = Mass::pounds(10.0);
        let a = Acceleration::meters_per_second_squared(3.0);
        assert_eq!(force(m, a), m * a);
    }

    #[test]
    fn test_kinetic_energy() {
        let e = kinetic_energy(Mass::kilograms(1000.0), Speed::kilometers_per_hour(36.0));
        assert_eq!(e.unit(), EnergyUnit::Joule);
        assert!((e.value() - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_potential_energy() {
        let e = potential_energy(Mass::kilograms(2.0), Length::meters(10.0));
        assert!((e.value() - 196.133).abs() < 1e-9);
    }

    #[test]
    fn test_gravitational_force_earth_surface() {
        let f = gravitational_force(Mass::earth_masses(1.0), Mass::kilograms(1.0), Length::kilometers(6371.0))
            .unwrap();
        assert!((f.value() - 9.82).abs() < 0.01, "got {f}");
        assert!(gravitational_force(Mass::kilograms(1.0), Mass::kilograms(1.0), Length::meters(0.0)).is_err());
    }

    #[test]
    fn test_earth_orbit_is_one_year() {
        let period = orbital_period(Length::astronomical_units(1.0), Mass::solar_masses(1.0)).unwrap();
        let years = period.get_value(TimeUnit::Year);
        assert!((years - 1.0).abs() < 1e-3, "got {years} yr");
    }

    #[test]
    fn test_semi_major_axis_inverts_period() {
        let sun = Mass::solar_masses(1.0);
        let period = orbital_period(Length::astronomical_units(5.2), sun).unwrap();
        let axis = semi_major_axis(period, sun).unwrap();
        assert!((axis.get_value(LengthUnit::AstronomicalUnit) - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_kepler_rejects_non_positive_inputs() {
        let err = orbital_period(Length::meters(0.0), Mass::kilograms(1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert!(orbital_period(Length::meters(1.0), Mass::kilograms(-1.0)).is_err());
        assert!(semi_major_axis(Time::seconds(-5.0), Mass::kilograms(1.0)).is_err());
        assert!(semi_major_axis(Time::seconds(5.0), Mass::kilograms(0.0)).is_err());
    }

    #[test]
    fn test_escape_velocity_earth() {
        let v = escape_velocity(Mass::earth_masses(1.0), Length::kilometers(6371.0)).unwrap();
        assert_eq!(v.unit(), SpeedUnit::MeterPerSecond);
        assert!((v.get_value(SpeedUnit::KilometerPerSecond) - 11.186).abs() < 0.01);
    }

    #[test]
    fn test_escape_velocity_guards() {
        assert!(escape_velocity(Mass::kilograms(1.0), Length::meters(0.0)).is_err());
        assert!(escape_velocity(Mass::kilograms(-1.0), Length::meters(1.0)).is_err());
        let massless = escape_velocity(Mass::kilograms(0.0), Length::meters(1.0)).unwrap();
        assert_eq!(massless.value(), 0.0);
    }
}
