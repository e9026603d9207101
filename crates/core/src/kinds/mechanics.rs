//! Kinematics, dynamics and energy: speed, acceleration, force, pressure,
//! density, energy, specific energy and power.

use super::{
    BTU, ELEMENTARY_CHARGE, FOOT, INCH, POUND, POUND_FORCE, SPEED_OF_LIGHT, STANDARD_GRAVITY,
    US_GALLON,
};
use crate::unit::define_units;

/// Foot-pound force, J (exact)
const FOOT_POUND: f64 = FOOT * POUND_FORCE;

/// Thermochemical calorie, J (exact)
const CALORIE: f64 = 4.184;

define_units! {
    /// Units of speed. Base unit: metre per second.
    Speed, SpeedUnit, SpeedExt, base = MeterPerSecond;
    MeterPerSecond => meters_per_second, "m/s", "meter per second", 1.0;
    KilometerPerHour => kilometers_per_hour, "km/h", "kilometer per hour", 1000.0 / 3600.0;
    KilometerPerSecond => kilometers_per_second, "km/s", "kilometer per second", 1e3;
    CentimeterPerSecond => centimeters_per_second, "cm/s", "centimeter per second", 1e-2;
    MillimeterPerSecond => millimeters_per_second, "mm/s", "millimeter per second", 1e-3;
    FootPerSecond => feet_per_second, "ft/s", "foot per second", FOOT;
    InchPerSecond => inches_per_second, "in/s", "inch per second", INCH;
    MilePerHour => miles_per_hour, "mph", "mile per hour", 1609.344 / 3600.0;
    Knot => knots, "kn", "knot", 1852.0 / 3600.0;
    SpeedOfLight => speed_of_light, "c", "speed of light", SPEED_OF_LIGHT;
}

define_units! {
    /// Units of acceleration. Base unit: metre per second squared.
    Acceleration, AccelerationUnit, AccelerationExt, base = MeterPerSecondSquared;
    MeterPerSecondSquared => meters_per_second_squared, "m/s²", "meter per second squared", 1.0;
    CentimeterPerSecondSquared => centimeters_per_second_squared, "cm/s²", "centimeter per second squared", 1e-2;
    Gal => gals, "Gal", "gal", 1e-2;
    MillimeterPerSecondSquared => millimeters_per_second_squared, "mm/s²", "millimeter per second squared", 1e-3;
    FootPerSecondSquared => feet_per_second_squared, "ft/s²", "foot per second squared", FOOT;
    StandardGravity => standard_gravities, "g", "standard gravity", STANDARD_GRAVITY;
    KilometerPerHourPerSecond => kilometers_per_hour_per_second, "km/h/s", "kilometer per hour per second", 1000.0 / 3600.0;
    MilePerHourPerSecond => miles_per_hour_per_second, "mph/s", "mile per hour per second", 1609.344 / 3600.0;
}

define_units! {
    /// Units of force. Base unit: newton.
    Force, ForceUnit, ForceExt, base = Newton;
    Newton => newtons, "N", "newton", 1.0;
    Millinewton => millinewtons, "mN", "millinewton", 1e-3;
    Micronewton => micronewtons, "µN", "micronewton", 1e-6;
    Kilonewton => kilonewtons, "kN", "kilonewton", 1e3;
    Meganewton => meganewtons, "MN", "meganewton", 1e6;
    Dyne => dynes, "dyn", "dyne", 1e-5;
    GramForce => grams_force, "gf", "gram-force", STANDARD_GRAVITY * 1e-3;
    KilogramForce => kilograms_force, "kgf", "kilogram-force", STANDARD_GRAVITY;
    PoundForce => pounds_force, "lbf", "pound-force", POUND_FORCE;
    OunceForce => ounces_force, "ozf", "ounce-force", POUND_FORCE / 16.0;
    Kip => kips, "kip", "kip", POUND_FORCE * 1e3;
    Poundal => poundals, "pdl", "poundal", POUND * FOOT;
}

define_units! {
    /// Units of pressure and stress. Base unit: pascal.
    Pressure, PressureUnit, PressureExt, base = Pascal;
    Pascal => pascals, "Pa", "pascal", 1.0;
    Hectopascal => hectopascals, "hPa", "hectopascal", 1e2;
    Kilopascal => kilopascals, "kPa", "kilopascal", 1e3;
    Megapascal => megapascals, "MPa", "megapascal", 1e6;
    Gigapascal => gigapascals, "GPa", "gigapascal", 1e9;
    Bar => bars, "bar", "bar", 1e5;
    Millibar => millibars, "mbar", "millibar", 1e2;
    Atmosphere => atmospheres, "atm", "standard atmosphere", 101_325.0;
    TechnicalAtmosphere => technical_atmospheres, "at", "technical atmosphere", STANDARD_GRAVITY * 1e4;
    Psi => psi, "psi", "pound-force per square inch", POUND_FORCE / (INCH * INCH);
    Ksi => ksi, "ksi", "kip per square inch", POUND_FORCE * 1e3 / (INCH * INCH);
    Torr => torr, "Torr", "torr", 101_325.0 / 760.0;
    MillimeterOfMercury => millimeters_of_mercury, "mmHg", "millimeter of mercury", 133.322387415;
    InchOfMercury => inches_of_mercury, "inHg", "inch of mercury", 3386.389;
}

define_units! {
    /// Units of mass density. Base unit: kilogram per cubic metre.
    Density, DensityUnit, DensityExt, base = KilogramPerCubicMeter;
    KilogramPerCubicMeter => kilograms_per_cubic_meter, "kg/m³", "kilogram per cubic meter", 1.0;
    GramPerCubicCentimeter => grams_per_cubic_centimeter, "g/cm³", "gram per cubic centimeter", 1e3;
    GramPerMilliliter => grams_per_milliliter, "g/mL", "gram per milliliter", 1e3;
    KilogramPerLiter => kilograms_per_liter, "kg/L", "kilogram per liter", 1e3;
    GramPerLiter => grams_per_liter, "g/L", "gram per liter", 1.0;
    MilligramPerLiter => milligrams_per_liter, "mg/L", "milligram per liter", 1e-3;
    PoundPerCubicFoot => pounds_per_cubic_foot, "lb/ft³", "pound per cubic foot", POUND / 0.028316846592;
    PoundPerCubicInch => pounds_per_cubic_inch, "lb/in³", "pound per cubic inch", POUND / 1.6387064e-5;
    PoundPerUsGallon => pounds_per_us_gallon, "lb/gal", "pound per US gallon", POUND / US_GALLON;
}

define_units! {
    /// Units of energy, work and heat. Base unit: joule.
    Energy, EnergyUnit, EnergyExt, base = Joule;
    Joule => joules, "J", "joule", 1.0;
    Millijoule => millijoules, "mJ", "millijoule", 1e-3;
    Kilojoule => kilojoules, "kJ", "kilojoule", 1e3;
    Megajoule => megajoules, "MJ", "megajoule", 1e6;
    Gigajoule => gigajoules, "GJ", "gigajoule", 1e9;
    Calorie => calories, "cal", "calorie", CALORIE;
    Kilocalorie => kilocalories, "kcal", "kilocalorie", CALORIE * 1e3;
    WattHour => watt_hours, "Wh", "watt-hour", 3.6e3;
    KilowattHour => kilowatt_hours, "kWh", "kilowatt-hour", 3.6e6;
    MegawattHour => megawatt_hours, "MWh", "megawatt-hour", 3.6e9;
    Electronvolt => electronvolts, "eV", "electronvolt", ELEMENTARY_CHARGE;
    Kiloelectronvolt => kiloelectronvolts, "keV", "kiloelectronvolt", ELEMENTARY_CHARGE * 1e3;
    Megaelectronvolt => megaelectronvolts, "MeV", "megaelectronvolt", ELEMENTARY_CHARGE * 1e6;
    BritishThermalUnit => british_thermal_units, "BTU", "British thermal unit", BTU;
    Therm => therms, "thm", "therm", BTU * 1e5;
    Erg => ergs, "erg", "erg", 1e-7;
    FootPound => foot_pounds, "ft·lbf", "foot-pound", FOOT_POUND;
    TonOfTnt => tons_of_tnt, "tTNT", "ton of TNT", 4.184e9;
}

define_units! {
    /// Units of specific energy (energy per unit mass). Base unit: joule per kilogram.
    SpecificEnergy, SpecificEnergyUnit, SpecificEnergyExt, base = JoulePerKilogram;
    JoulePerKilogram => joules_per_kilogram, "J/kg", "joule per kilogram", 1.0;
    KilojoulePerKilogram => kilojoules_per_kilogram, "kJ/kg", "kilojoule per kilogram", 1e3;
    JoulePerGram => joules_per_gram, "J/g", "joule per gram", 1e3;
    MegajoulePerKilogram => megajoules_per_kilogram, "MJ/kg", "megajoule per kilogram", 1e6;
    CaloriePerGram => calories_per_gram, "cal/g", "calorie per gram", CALORIE * 1e3;
    KilocaloriePerKilogram => kilocalories_per_kilogram, "kcal/kg", "kilocalorie per kilogram", CALORIE * 1e3;
    BtuPerPound => btu_per_pound, "BTU/lb", "BTU per pound", BTU / POUND;
    WattHourPerKilogram => watt_hours_per_kilogram, "Wh/kg", "watt-hour per kilogram", 3.6e3;
    KilowattHourPerKilogram => kilowatt_hours_per_kilogram, "kWh/kg", "kilowatt-hour per kilogram", 3.6e6;
    Gray => grays, "Gy", "gray", 1.0;
}

define_units! {
    /// Units of power. Base unit: watt.
    Power, PowerUnit, PowerExt, base = Watt;
    Watt => watts, "W", "watt", 1.0;
    Milliwatt => milliwatts, "mW", "milliwatt", 1e-3;
    Kilowatt => kilowatts, "kW", "kilowatt", 1e3;
    Megawatt => megawatts, "MW", "megawatt", 1e6;
    Gigawatt => gigawatts, "GW", "gigawatt", 1e9;
    Terawatt => terawatts, "TW", "terawatt", 1e12;
    Horsepower => horsepower, "hp", "mechanical horsepower", FOOT_POUND * 550.0;
    MetricHorsepower => metric_horsepower, "PS", "metric horsepower", STANDARD_GRAVITY * 75.0;
    BtuPerHour => btu_per_hour, "BTU/h", "BTU per hour", BTU / 3600.0;
    KilocaloriePerHour => kilocalories_per_hour, "kcal/h", "kilocalorie per hour", CALORIE * 1e3 / 3600.0;
    FootPoundPerSecond => foot_pounds_per_second, "ft·lbf/s", "foot-pound per second", FOOT_POUND;
    ErgPerSecond => ergs_per_second, "erg/s", "erg per second", 1e-7;
    SolarLuminosity => solar_luminosities, "L☉", "solar luminosity", 3.828e26;
}
