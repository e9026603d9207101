//! Quantity Equality, Ordering and Presentation
//!
//! The observable contract of `Quantity<U>` as a caller sees it:
//!
//! - strict `==` (unit and value) versus magnitude equivalence
//! - ordering by magnitude with `compare_to`, including NaN placement
//! - left-operand unit preservation in arithmetic
//! - guarded division
//! - display, locale-style number formats and JSON shape
//!
//! Run tests with: `cargo test --test quantity_semantics`

use std::cmp::Ordering;
use std::collections::HashSet;

use approx::assert_relative_eq;
use measura_core::prelude::*;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_strict_equality_versus_equivalence() {
    let meter = Length::meters(1.0);
    let centimeters = Length::centimeters(100.0);
    assert_ne!(meter, centimeters);
    assert!(meter.is_equivalent_to(&centimeters));
    assert_eq!(meter.compare_to(&centimeters), Ordering::Equal);
    assert_eq!(meter, Length::meters(1.0));
}

#[test]
fn test_hash_follows_strict_equality() {
    let mut set = HashSet::new();
    set.insert(Length::meters(1.0));
    set.insert(Length::centimeters(100.0));
    set.insert(Length::meters(1.0));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_sort_by_magnitude() {
    let mut lengths = vec![
        Length::kilometers(1.0),
        Length::miles(1.0),
        Length::feet(1.0),
        Length::nautical_miles(1.0),
    ];
    lengths.sort_by(Length::compare_to);
    assert_eq!(
        lengths,
        vec![
            Length::feet(1.0),
            Length::kilometers(1.0),
            Length::miles(1.0),
            Length::nautical_miles(1.0),
        ]
    );
}

#[test]
fn test_nan_sorts_after_infinity() {
    let mut masses = vec![
        Mass::kilograms(f64::NAN),
        Mass::kilograms(f64::INFINITY),
        Mass::grams(5.0),
        Mass::kilograms(f64::NEG_INFINITY),
    ];
    masses.sort_by(Mass::compare_to);
    assert_eq!(masses[0].value(), f64::NEG_INFINITY);
    assert_eq!(masses[1], Mass::grams(5.0));
    assert_eq!(masses[2].value(), f64::INFINITY);
    assert!(masses[3].value().is_nan());

    let nan = Mass::kilograms(f64::NAN);
    let same_bits = Mass::kilograms(f64::NAN);
    assert_eq!(nan, same_bits);
    assert!(nan.is_equivalent_to(&same_bits));
}

#[test]
fn test_signed_zero() {
    let plus = Pressure::pascals(0.0);
    let minus = Pressure::pascals(-0.0);
    assert_ne!(plus, minus);
    assert!(plus.is_equivalent_to(&minus));
}

#[test]
fn test_arithmetic_keeps_left_unit() {
    let total = Length::feet(3.0) + Length::inches(12.0);
    assert_eq!(total.unit(), LengthUnit::Foot);
    assert_relative_eq!(total.value(), 4.0, max_relative = 1e-12);

    let rest = Volume::liters(2.0) - Volume::milliliters(250.0);
    assert_eq!(rest.unit(), VolumeUnit::Liter);
    assert_relative_eq!(rest.value(), 1.75, max_relative = 1e-12);

    let flipped = -Energy::kilocalories(2.0);
    assert_eq!(flipped, Energy::kilocalories(-2.0));
    assert_eq!(flipped.abs(), Energy::kilocalories(2.0));
}

#[test]
fn test_scalar_operations() {
    let dose = Mass::milligrams(250.0);
    assert_eq!(dose * 4.0, Mass::milligrams(1000.0));
    assert_eq!(4.0 * dose, Mass::milligrams(1000.0));
    assert_eq!(dose.try_div(2.0).unwrap(), Mass::milligrams(125.0));

    let err = dose.try_div(0.0).unwrap_err();
    assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    assert!(dose.ratio_to(&Mass::grams(0.0)).is_err());
    assert_relative_eq!(dose.ratio_to(&Mass::grams(1.0)).unwrap(), 0.25, max_relative = 1e-12);
}

#[test]
fn test_min_max_keep_their_units() {
    let a = Power::horsepower(1.0);
    let b = Power::kilowatts(1.0);
    assert_eq!(a.max_by_magnitude(b), b);
    assert_eq!(a.min_by_magnitude(b), a);
}

#[test]
fn test_display_uses_non_breaking_space() {
    let p = Pressure::kilopascals(101.325);
    assert_eq!(p.to_string(), "101.325\u{a0}kPa");
    assert_eq!(format!("{p:.1}"), "101.3\u{a0}kPa");
}

#[test]
fn test_display_options() {
    let p = Pressure::atmospheres(1.0);
    let options = DisplayOptions::new().unit(PressureUnit::Pascal).fraction_digits(0).without_symbol();
    assert_eq!(p.to_display_string(&options), "101325");

    let french = GroupedNumberFormat::new(',', Some('\u{202f}'));
    let options = DisplayOptions::new().unit(PressureUnit::Pascal).fraction_digits(1).number_format(&french);
    assert_eq!(p.to_display_string(&options), "101\u{202f}325,0\u{a0}Pa");
}

/// Formats every number in scientific notation
struct Scientific;

impl NumberFormat for Scientific {
    fn format_number(&self, value: f64, fraction_digits: Option<usize>) -> String {
        match fraction_digits {
            Some(digits) => format!("{value:.digits$e}"),
            None => format!("{value:e}"),
        }
    }
}

#[test]
fn test_custom_number_format() {
    let options = DisplayOptions::new().fraction_digits(2).number_format(&Scientific);
    assert_eq!(Length::light_years(1.0).to_display_string(&options), "1.00e0\u{a0}ly");
    let options = options.unit(LengthUnit::Meter);
    assert_eq!(Length::light_years(1.0).to_display_string(&options), "9.46e15\u{a0}m");
}

#[test]
fn test_json_shape() {
    let speed = Speed::knots(12.0);
    let json = serde_json::to_string(&speed).unwrap();
    assert_eq!(json, r#"{"value":12.0,"unit":"knot"}"#);
    let back: Speed = serde_json::from_str(&json).unwrap();
    assert_eq!(back, speed);

    let unit: AreaUnit = serde_json::from_str(r#""square_kilometer""#).unwrap();
    assert_eq!(unit, AreaUnit::SquareKilometer);
}

#[test]
fn test_unit_lookup_and_metadata() {
    assert_eq!(LengthUnit::KIND, "Length");
    assert_eq!(LengthUnit::from_symbol("nmi"), Some(LengthUnit::NauticalMile));
    assert_eq!(LengthUnit::NauticalMile.name(), "nautical mile");
    assert_eq!(LengthUnit::NauticalMile.to_string(), "nmi");
    assert_eq!(LengthUnit::BASE, LengthUnit::Meter);
    assert_eq!(Length::kilometers(2.5).base_value(), 2500.0);
}

#[test]
fn test_extension_constructors() {
    assert_eq!(2.0_f64.kilometers(), Length::kilometers(2.0));
    assert_eq!(500.0_f64.grams(), Mass::grams(500.0));
    assert_eq!(1.5_f64.hours(), Time::hours(1.5));
    assert_eq!(3.0_f64.kelvin_delta(), TemperatureDelta::kelvin_delta(3.0));
}
