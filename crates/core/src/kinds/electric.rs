//! Electric current and electric charge.

use super::{ELEMENTARY_CHARGE, SPEED_OF_LIGHT};
use crate::unit::define_units;

/// Avogadro constant, 1/mol (exact, SI 2019)
const AVOGADRO: f64 = 6.02214076e23;

/// Gaussian (esu) unit of charge: `1 statC = 1 / (10 c) C`
const STATCOULOMB: f64 = 1.0 / (10.0 * SPEED_OF_LIGHT);

define_units! {
    /// Units of electric current. Base unit: ampere.
    Current, CurrentUnit, CurrentExt, base = Ampere;
    Ampere => amperes, "A", "ampere", 1.0;
    Milliampere => milliamperes, "mA", "milliampere", 1e-3;
    Microampere => microamperes, "µA", "microampere", 1e-6;
    Nanoampere => nanoamperes, "nA", "nanoampere", 1e-9;
    Kiloampere => kiloamperes, "kA", "kiloampere", 1e3;
    Abampere => abamperes, "abA", "abampere", 10.0;
    Statampere => statamperes, "statA", "statampere", STATCOULOMB;
}

define_units! {
    /// Units of electric charge. Base unit: coulomb.
    ElectricCharge, ElectricChargeUnit, ElectricChargeExt, base = Coulomb;
    Coulomb => coulombs, "C", "coulomb", 1.0;
    Kilocoulomb => kilocoulombs, "kC", "kilocoulomb", 1e3;
    Millicoulomb => millicoulombs, "mC", "millicoulomb", 1e-3;
    Microcoulomb => microcoulombs, "µC", "microcoulomb", 1e-6;
    Nanocoulomb => nanocoulombs, "nC", "nanocoulomb", 1e-9;
    Picocoulomb => picocoulombs, "pC", "picocoulomb", 1e-12;
    AmpereHour => ampere_hours, "Ah", "ampere-hour", 3600.0;
    MilliampereHour => milliampere_hours, "mAh", "milliampere-hour", 3.6;
    ElementaryCharge => elementary_charges, "e", "elementary charge", ELEMENTARY_CHARGE;
    Statcoulomb => statcoulombs, "statC", "statcoulomb", STATCOULOMB;
    Abcoulomb => abcoulombs, "abC", "abcoulomb", 10.0;
    Faraday => faradays, "F", "faraday", ELEMENTARY_CHARGE * AVOGADRO;
}
