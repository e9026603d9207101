//! SI base kinds: length, mass, time, amount of substance, luminous intensity,
//! and the multiplicative half of temperature (differences).

use super::{FOOT, INCH, JULIAN_YEAR, POUND, SPEED_OF_LIGHT};
use crate::unit::define_units;

/// Astronomical unit, m (exact, IAU 2012 Resolution B2)
const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;

define_units! {
    /// Units of length. Base unit: metre.
    Length, LengthUnit, LengthExt, base = Meter;
    Meter => meters, "m", "meter", 1.0;
    Kilometer => kilometers, "km", "kilometer", 1e3;
    Hectometer => hectometers, "hm", "hectometer", 1e2;
    Decameter => decameters, "dam", "decameter", 1e1;
    Decimeter => decimeters, "dm", "decimeter", 1e-1;
    Centimeter => centimeters, "cm", "centimeter", 1e-2;
    Millimeter => millimeters, "mm", "millimeter", 1e-3;
    Micrometer => micrometers, "µm", "micrometer", 1e-6;
    Nanometer => nanometers, "nm", "nanometer", 1e-9;
    Picometer => picometers, "pm", "picometer", 1e-12;
    Femtometer => femtometers, "fm", "femtometer", 1e-15;
    Angstrom => angstroms, "Å", "ångström", 1e-10;
    Megameter => megameters, "Mm", "megameter", 1e6;
    Gigameter => gigameters, "Gm", "gigameter", 1e9;
    Inch => inches, "in", "inch", INCH;
    Foot => feet, "ft", "foot", FOOT;
    Yard => yards, "yd", "yard", 0.9144;
    Mile => miles, "mi", "mile", 1609.344;
    NauticalMile => nautical_miles, "nmi", "nautical mile", 1852.0;
    AstronomicalUnit => astronomical_units, "au", "astronomical unit", ASTRONOMICAL_UNIT;
    LightYear => light_years, "ly", "light-year", SPEED_OF_LIGHT * JULIAN_YEAR;
    Parsec => parsecs, "pc", "parsec", ASTRONOMICAL_UNIT * 648_000.0 / std::f64::consts::PI;
}

define_units! {
    /// Units of mass. Base unit: kilogram.
    Mass, MassUnit, MassExt, base = Kilogram;
    Kilogram => kilograms, "kg", "kilogram", 1.0;
    Gram => grams, "g", "gram", 1e-3;
    Milligram => milligrams, "mg", "milligram", 1e-6;
    Microgram => micrograms, "µg", "microgram", 1e-9;
    Nanogram => nanograms, "ng", "nanogram", 1e-12;
    Tonne => tonnes, "t", "tonne", 1e3;
    Pound => pounds, "lb", "pound", POUND;
    Ounce => ounces, "oz", "ounce", POUND / 16.0;
    Stone => stones, "st", "stone", POUND * 14.0;
    ShortTon => short_tons, "sh tn", "short ton", POUND * 2000.0;
    LongTon => long_tons, "long tn", "long ton", POUND * 2240.0;
    Grain => grains, "gr", "grain", POUND / 7000.0;
    TroyOunce => troy_ounces, "oz t", "troy ounce", POUND * 480.0 / 7000.0;
    Carat => carats, "ct", "carat", 2e-4;
    AtomicMassUnit => atomic_mass_units, "u", "atomic mass unit", 1.6605390666e-27;
    Dalton => daltons, "Da", "dalton", 1.6605390666e-27;
    EarthMass => earth_masses, "M⊕", "Earth mass", 5.9722e24;
    SolarMass => solar_masses, "M☉", "solar mass", 1.98847e30;
}

define_units! {
    /// Units of time. Base unit: second. Months and years are Julian.
    Time, TimeUnit, TimeExt, base = Second;
    Second => seconds, "s", "second", 1.0;
    Millisecond => milliseconds, "ms", "millisecond", 1e-3;
    Microsecond => microseconds, "µs", "microsecond", 1e-6;
    Nanosecond => nanoseconds, "ns", "nanosecond", 1e-9;
    Picosecond => picoseconds, "ps", "picosecond", 1e-12;
    Minute => minutes, "min", "minute", 60.0;
    Hour => hours, "h", "hour", 3600.0;
    Day => days, "d", "day", 86_400.0;
    Week => weeks, "wk", "week", 604_800.0;
    Month => months, "mo", "month", JULIAN_YEAR / 12.0;
    Year => years, "yr", "year", JULIAN_YEAR;
    Decade => decades, "dec", "decade", JULIAN_YEAR * 10.0;
    Century => centuries, "cy", "century", JULIAN_YEAR * 100.0;
}

define_units! {
    /// Units of amount of substance. Base unit: mole.
    MolarAmount, MolarAmountUnit, MolarAmountExt, base = Mole;
    Mole => moles, "mol", "mole", 1.0;
    Millimole => millimoles, "mmol", "millimole", 1e-3;
    Micromole => micromoles, "µmol", "micromole", 1e-6;
    Nanomole => nanomoles, "nmol", "nanomole", 1e-9;
    Picomole => picomoles, "pmol", "picomole", 1e-12;
    Kilomole => kilomoles, "kmol", "kilomole", 1e3;
    PoundMole => pound_moles, "lb-mol", "pound-mole", POUND * 1e3;
}

define_units! {
    /// Units of luminous intensity. Base unit: candela.
    LuminousIntensity, LuminousIntensityUnit, LuminousIntensityExt, base = Candela;
    Candela => candelas, "cd", "candela", 1.0;
    Millicandela => millicandelas, "mcd", "millicandela", 1e-3;
    Kilocandela => kilocandelas, "kcd", "kilocandela", 1e3;
    Candlepower => candlepower, "cp", "candlepower", 1.0;
    HefnerCandle => hefner_candles, "HK", "Hefner candle", 0.903;
}

define_units! {
    /// Units of temperature difference. Base unit: kelvin.
    ///
    /// A difference carries no offset: `0 °C` of difference is `0 K` of
    /// difference. Absolute readings live in [`crate::temperature::Temperature`].
    TemperatureDelta, TemperatureDeltaUnit, TemperatureDeltaExt, base = Kelvin;
    Kelvin => kelvin_delta, "K", "kelvin", 1.0;
    Celsius => celsius_delta, "°C", "degree Celsius", 1.0;
    Fahrenheit => fahrenheit_delta, "°F", "degree Fahrenheit", 5.0 / 9.0;
    Rankine => rankine_delta, "°R", "degree Rankine", 5.0 / 9.0;
}
