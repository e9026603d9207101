//! Frequency and angular velocity.
//!
//! Both have dimension T⁻¹ but count different things: frequency counts
//! cycles (or beats, or oscillations), angular velocity measures rotation.
//! Frequency carries the rotational units too (`rpm`, `rad/s`, ...) so a
//! rotation rate can be recorded as a frequency; [`crate::interop`] converts
//! between the two kinds only where that rotational reading exists.

use std::f64::consts::{PI, TAU};

use crate::unit::define_units;

define_units! {
    /// Units of frequency. Base unit: hertz (cycles per second).
    Frequency, FrequencyUnit, FrequencyExt, base = Hertz;
    Hertz => hertz, "Hz", "hertz", 1.0;
    Millihertz => millihertz, "mHz", "millihertz", 1e-3;
    Kilohertz => kilohertz, "kHz", "kilohertz", 1e3;
    Megahertz => megahertz, "MHz", "megahertz", 1e6;
    Gigahertz => gigahertz, "GHz", "gigahertz", 1e9;
    Terahertz => terahertz, "THz", "terahertz", 1e12;
    BeatPerMinute => beats_per_minute, "bpm", "beat per minute", 1.0 / 60.0;
    RevolutionPerMinute => revolutions_per_minute, "rpm", "revolution per minute", 1.0 / 60.0;
    RadianPerSecond => radians_per_second, "rad/s", "radian per second", 1.0 / TAU;
    RadianPerMinute => radians_per_minute, "rad/min", "radian per minute", 1.0 / (60.0 * TAU);
    DegreePerSecond => degrees_per_second, "°/s", "degree per second", 1.0 / 360.0;
    DegreePerMinute => degrees_per_minute, "°/min", "degree per minute", 1.0 / 21_600.0;
}

define_units! {
    /// Units of angular velocity. Base unit: radian per second.
    AngularVelocity, AngularVelocityUnit, AngularVelocityExt, base = RadianPerSecond;
    RadianPerSecond => radians_per_second, "rad/s", "radian per second", 1.0;
    RadianPerMinute => radians_per_minute, "rad/min", "radian per minute", 1.0 / 60.0;
    DegreePerSecond => degrees_per_second, "°/s", "degree per second", PI / 180.0;
    DegreePerMinute => degrees_per_minute, "°/min", "degree per minute", PI / 10_800.0;
    RevolutionPerMinute => revolutions_per_minute, "rpm", "revolution per minute", TAU / 60.0;
    RevolutionPerSecond => revolutions_per_second, "rev/s", "revolution per second", TAU;
}
