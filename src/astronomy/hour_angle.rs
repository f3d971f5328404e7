//! Spherical-trigonometry solver turning a target sun altitude into a local
//! clock hour, plus the solar-noon and Asr specializations built on it.

use super::solar::{SolarPosition, acos_deg, atan_deg, cos_deg, fix_hour, sin_deg, tan_deg};

/// Sun altitude at sunrise/sunset: solar radius plus atmospheric refraction.
pub const SUNRISE_SUNSET_ANGLE: f64 = -0.833;

/// Substitute hour for a morning event the sun never reaches.
pub const MORNING_FALLBACK_HOUR: f64 = 5.0;
/// Substitute hour for an evening event the sun never reaches.
pub const EVENING_FALLBACK_HOUR: f64 = 19.0;

/// Which side of solar noon an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Morning,
    Evening,
}

impl DayPhase {
    fn fallback_hour(self) -> f64 {
        match self {
            DayPhase::Morning => MORNING_FALLBACK_HOUR,
            DayPhase::Evening => EVENING_FALLBACK_HOUR,
        }
    }
}

/// Solar noon as a decimal local-clock hour, wrapped into [0, 24).
///
/// `utc_offset` is hours east of UTC for the queried location, supplied
/// explicitly; the engine never consults the host timezone.
pub fn solar_noon(longitude: f64, equation_of_time: f64, utc_offset: f64) -> f64 {
    fix_hour(12.0 - equation_of_time - longitude / 15.0 + utc_offset)
}

/// Local clock hour at which the sun reaches `angle` degrees of altitude.
///
/// Solves `cos H = (sin a - sin lat * sin decl) / (cos lat * cos decl)` and
/// offsets solar noon by the hour angle on the requested side.
///
/// # Returns
/// `None` when `cos H` falls outside [-1, 1]: near-polar midnight sun or
/// polar night, where the event does not occur on this date.
pub fn try_sun_angle_time(
    angle: f64,
    phase: DayPhase,
    latitude: f64,
    position: &SolarPosition,
    longitude: f64,
    utc_offset: f64,
) -> Option<f64> {
    let decl = position.declination;
    let cos_h =
        (sin_deg(angle) - sin_deg(latitude) * sin_deg(decl)) / (cos_deg(latitude) * cos_deg(decl));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let hour_angle = acos_deg(cos_h) / 15.0;
    let noon = solar_noon(longitude, position.equation_of_time, utc_offset);
    let time = match phase {
        DayPhase::Morning => noon - hour_angle,
        DayPhase::Evening => noon + hour_angle,
    };
    Some(fix_hour(time))
}

/// `try_sun_angle_time` with the documented degenerate-latitude policy:
/// an undefined event yields a fixed 5.0 (morning) or 19.0 (evening).
pub fn sun_angle_time(
    angle: f64,
    phase: DayPhase,
    latitude: f64,
    position: &SolarPosition,
    longitude: f64,
    utc_offset: f64,
) -> f64 {
    try_sun_angle_time(angle, phase, latitude, position, longitude, utc_offset)
        .unwrap_or_else(|| phase.fallback_hour())
}

/// Altitude of the sun when an object's shadow is `shadow_factor` times its
/// height plus its noon shadow.
pub fn asr_angle(shadow_factor: f64, latitude: f64, declination: f64) -> f64 {
    atan_deg(1.0 / (shadow_factor + tan_deg((latitude - declination).abs())))
}

/// Asr time: the shadow-factor altitude solved on the afternoon side of noon.
pub fn asr_time(
    shadow_factor: f64,
    latitude: f64,
    position: &SolarPosition,
    longitude: f64,
    utc_offset: f64,
) -> f64 {
    let angle = asr_angle(shadow_factor, latitude, position.declination);
    sun_angle_time(angle, DayPhase::Evening, latitude, position, longitude, utc_offset)
}
