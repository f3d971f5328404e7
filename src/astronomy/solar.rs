//! Low-precision solar position: equation of time and declination.
//!
//! Uses the truncated series from the Astronomical Almanac (accurate to a
//! couple of minutes of time over the current century), which is the
//! standard basis for prayer-time computation.

use super::julian::J2000_EPOCH;

/// Solar declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination of the sun in degrees.
    pub declination: f64,
    /// Equation of time in hours (apparent solar time minus mean time).
    pub equation_of_time: f64,
}

/// Computes the sun's declination and the equation of time at a Julian date.
///
/// All intermediate angles are in degrees. Total: every trig input is valid
/// by construction.
pub fn solar_position(julian_date: f64) -> SolarPosition {
    let d = julian_date - J2000_EPOCH;

    // Mean anomaly and mean longitude of the sun.
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    // Ecliptic longitude with the two largest perturbation terms.
    let l = fix_angle(q + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g));
    // Mean obliquity of the ecliptic.
    let e = 23.439 - 0.000_000_36 * d;

    let declination = asin_deg(sin_deg(e) * sin_deg(l));

    // Right ascension in hours, wrapped to the same revolution as q so the
    // difference stays small near the 0/360 crossover.
    let ra = fix_hour(atan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0);
    let eqt = q / 15.0 - ra;
    let equation_of_time = eqt - 24.0 * (eqt / 24.0).round();

    SolarPosition { declination, equation_of_time }
}

/// Wraps an angle into [0, 360) degrees.
pub fn fix_angle(angle: f64) -> f64 {
    wrap(angle, 360.0)
}

/// Wraps an hour value into [0, 24).
pub fn fix_hour(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

fn wrap(value: f64, period: f64) -> f64 {
    let r = value - period * (value / period).floor();
    if r < 0.0 { r + period } else { r }
}

pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(crate) fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub(crate) fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub(crate) fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub(crate) fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

pub(crate) fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}
