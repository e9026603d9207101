//! Plane and solid angle, area, volume.

use std::f64::consts::{PI, TAU};

use super::{FOOT, INCH, US_GALLON};
use crate::unit::define_units;

/// Imperial gallon, m³ (exact, 1985)
const IMPERIAL_GALLON: f64 = 4.54609e-3;

define_units! {
    /// Units of plane angle. Base unit: radian.
    Angle, AngleUnit, AngleExt, base = Radian;
    Radian => radians, "rad", "radian", 1.0;
    Milliradian => milliradians, "mrad", "milliradian", 1e-3;
    Degree => degrees, "°", "degree", PI / 180.0;
    Arcminute => arcminutes, "′", "arcminute", PI / 10_800.0;
    Arcsecond => arcseconds, "″", "arcsecond", PI / 648_000.0;
    Milliarcsecond => milliarcseconds, "mas", "milliarcsecond", PI / 648_000_000.0;
    Gradian => gradians, "gon", "gradian", PI / 200.0;
    Revolution => revolutions, "rev", "revolution", TAU;
    Turn => turns, "tr", "turn", TAU;
}

define_units! {
    /// Units of solid angle. Base unit: steradian.
    SolidAngle, SolidAngleUnit, SolidAngleExt, base = Steradian;
    Steradian => steradians, "sr", "steradian", 1.0;
    Millisteradian => millisteradians, "msr", "millisteradian", 1e-3;
    SquareDegree => square_degrees, "deg²", "square degree", (PI / 180.0) * (PI / 180.0);
    SquareArcminute => square_arcminutes, "arcmin²", "square arcminute", (PI / 10_800.0) * (PI / 10_800.0);
    SquareArcsecond => square_arcseconds, "arcsec²", "square arcsecond", (PI / 648_000.0) * (PI / 648_000.0);
    Spat => spats, "sp", "spat", 2.0 * TAU;
}

define_units! {
    /// Units of area. Base unit: square metre.
    Area, AreaUnit, AreaExt, base = SquareMeter;
    SquareMeter => square_meters, "m²", "square meter", 1.0;
    SquareKilometer => square_kilometers, "km²", "square kilometer", 1e6;
    SquareHectometer => square_hectometers, "hm²", "square hectometer", 1e4;
    Hectare => hectares, "ha", "hectare", 1e4;
    SquareDecameter => square_decameters, "dam²", "square decameter", 1e2;
    Are => ares, "a", "are", 1e2;
    SquareCentimeter => square_centimeters, "cm²", "square centimeter", 1e-4;
    SquareMillimeter => square_millimeters, "mm²", "square millimeter", 1e-6;
    SquareMicrometer => square_micrometers, "µm²", "square micrometer", 1e-12;
    SquareInch => square_inches, "in²", "square inch", INCH * INCH;
    SquareFoot => square_feet, "ft²", "square foot", FOOT * FOOT;
    SquareYard => square_yards, "yd²", "square yard", 0.83612736;
    Acre => acres, "ac", "acre", 4046.8564224;
    SquareMile => square_miles, "mi²", "square mile", 2_589_988.110336;
    Barn => barns, "b", "barn", 1e-28;
}

define_units! {
    /// Units of volume. Base unit: cubic metre. Gallons, quarts, pints, cups,
    /// fluid ounces and spoons are US customary liquid measures.
    Volume, VolumeUnit, VolumeExt, base = CubicMeter;
    CubicMeter => cubic_meters, "m³", "cubic meter", 1.0;
    CubicKilometer => cubic_kilometers, "km³", "cubic kilometer", 1e9;
    CubicDecimeter => cubic_decimeters, "dm³", "cubic decimeter", 1e-3;
    Liter => liters, "L", "liter", 1e-3;
    Hectoliter => hectoliters, "hL", "hectoliter", 1e-1;
    Deciliter => deciliters, "dL", "deciliter", 1e-4;
    Centiliter => centiliters, "cL", "centiliter", 1e-5;
    CubicCentimeter => cubic_centimeters, "cm³", "cubic centimeter", 1e-6;
    Milliliter => milliliters, "mL", "milliliter", 1e-6;
    CubicMillimeter => cubic_millimeters, "mm³", "cubic millimeter", 1e-9;
    Microliter => microliters, "µL", "microliter", 1e-9;
    CubicInch => cubic_inches, "in³", "cubic inch", 1.6387064e-5;
    CubicFoot => cubic_feet, "ft³", "cubic foot", 0.028316846592;
    CubicYard => cubic_yards, "yd³", "cubic yard", 0.764554857984;
    UsGallon => us_gallons, "gal", "US gallon", US_GALLON;
    UsQuart => us_quarts, "qt", "US quart", US_GALLON / 4.0;
    UsPint => us_pints, "pt", "US pint", US_GALLON / 8.0;
    UsCup => us_cups, "cup", "US cup", US_GALLON / 16.0;
    UsFluidOunce => us_fluid_ounces, "fl oz", "US fluid ounce", US_GALLON / 128.0;
    Tablespoon => tablespoons, "tbsp", "US tablespoon", US_GALLON / 256.0;
    Teaspoon => teaspoons, "tsp", "US teaspoon", US_GALLON / 768.0;
    ImperialGallon => imperial_gallons, "imp gal", "imperial gallon", IMPERIAL_GALLON;
    ImperialPint => imperial_pints, "imp pt", "imperial pint", IMPERIAL_GALLON / 8.0;
    Barrel => barrels, "bbl", "oil barrel", US_GALLON * 42.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    #[test]
    fn test_hectare_aliases_square_hectometer() {
        assert_eq!(AreaUnit::Hectare.factor_to(AreaUnit::SquareHectometer), 1.0);
        assert_eq!(AreaUnit::SquareHectometer.factor_to(AreaUnit::Hectare), 1.0);
        assert!(Area::hectares(3.0).is_equivalent_to(&Area::square_hectometers(3.0)));
        assert_ne!(Area::hectares(3.0), Area::square_hectometers(3.0));
    }

    #[test]
    fn test_acre_in_square_feet() {
        let sq_ft = Area::acres(1.0).get_value(AreaUnit::SquareFoot);
        assert!((sq_ft - 43_560.0).abs() < 1e-8, "{sq_ft}");
    }

    #[test]
    fn test_liter_aliases() {
        assert_eq!(VolumeUnit::Liter.factor_to(VolumeUnit::CubicDecimeter), 1.0);
        assert_eq!(VolumeUnit::Milliliter.factor_to(VolumeUnit::CubicCentimeter), 1.0);
        let cups = Volume::us_gallons(1.0).get_value(VolumeUnit::UsCup);
        assert!((cups - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_degrees_to_radians() {
        let r = Angle::degrees(180.0).get_value(AngleUnit::Radian);
        assert!((r - PI).abs() < 1e-15);
        let rev = Angle::degrees(720.0).get_value(AngleUnit::Revolution);
        assert!((rev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_sphere() {
        let deg2 = SolidAngle::spats(1.0).get_value(SolidAngleUnit::SquareDegree);
        assert!((deg2 - 41_252.961_249_419_3).abs() < 1e-6, "{deg2}");
    }
}
