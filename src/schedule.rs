//! Prayer timetable aggregation.
//!
//! Orchestrates the astronomy primitives into the six-event daily time set.
//! Every function here is pure and reentrant: output depends only on the
//! explicit arguments, so calls may run concurrently without coordination.

use chrono::NaiveDate;

use crate::astronomy::{
    DayPhase, SUNRISE_SUNSET_ANGLE, asr_time, julian_day, solar_noon, solar_position,
    sun_angle_time,
};
use crate::types::{CalculationParams, ClockTime, Coordinates, PrayerTimes};

/// Source of coordinates for timetable computation.
///
/// This is the seam to the device-location collaborator. Implementations
/// must not block: any permission flow or GPS acquisition has to finish (or
/// give up) before the engine is invoked.
pub trait LocationProvider {
    /// Current coordinates, or `None` when no location is available.
    fn coordinates(&self) -> Option<Coordinates>;
}

/// Provider pinned to fixed coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn coordinates(&self) -> Option<Coordinates> {
        Some(self.0)
    }
}

/// Provider that never yields a location, forcing the caller's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn coordinates(&self) -> Option<Coordinates> {
        None
    }
}

/// Computes the six daily times for one (date, coordinates) pair.
///
/// `utc_offset` is the queried location's offset in hours east of UTC. The
/// Julian date and solar position are computed once and shared by all six
/// solvers; decimal hours are floored to `HH:MM`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use waqt::{CalculationParams, Coordinates, compute_prayer_times};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let jakarta = Coordinates::new(-6.2088, 106.8456).unwrap();
/// let times = compute_prayer_times(date, jakarta, &CalculationParams::default(), 7.0);
/// println!("Fajr {}  Maghrib {}", times.fajr, times.maghrib);
/// ```
pub fn compute_prayer_times(
    date: NaiveDate,
    coordinates: Coordinates,
    params: &CalculationParams,
    utc_offset: f64,
) -> PrayerTimes {
    let position = solar_position(julian_day(date));
    let Coordinates { lat, lng } = coordinates;

    let fajr = sun_angle_time(-params.fajr_angle, DayPhase::Morning, lat, &position, lng, utc_offset);
    let sunrise =
        sun_angle_time(SUNRISE_SUNSET_ANGLE, DayPhase::Morning, lat, &position, lng, utc_offset);
    let dhuhr = solar_noon(lng, position.equation_of_time, utc_offset);
    let asr = asr_time(params.asr_method.shadow_factor(), lat, &position, lng, utc_offset);
    let maghrib =
        sun_angle_time(SUNRISE_SUNSET_ANGLE, DayPhase::Evening, lat, &position, lng, utc_offset);
    let isha = sun_angle_time(-params.isha_angle, DayPhase::Evening, lat, &position, lng, utc_offset);

    PrayerTimes {
        date,
        fajr: ClockTime::from_decimal_hours(fajr),
        sunrise: ClockTime::from_decimal_hours(sunrise),
        dhuhr: ClockTime::from_decimal_hours(dhuhr),
        asr: ClockTime::from_decimal_hours(asr),
        maghrib: ClockTime::from_decimal_hours(maghrib),
        isha: ClockTime::from_decimal_hours(isha),
    }
}

/// `compute_prayer_times` with an optional explicit coordinate override.
///
/// When `coordinates` is `None` the caller-supplied `default` (for example a
/// fixed reference city) is used instead. This keeps the core free of any
/// location I/O while still covering the no-location path.
pub fn compute_prayer_times_or_default(
    date: NaiveDate,
    coordinates: Option<Coordinates>,
    default: Coordinates,
    params: &CalculationParams,
    utc_offset: f64,
) -> PrayerTimes {
    compute_prayer_times(date, coordinates.unwrap_or(default), params, utc_offset)
}

/// `compute_prayer_times` sourcing coordinates from a `LocationProvider`,
/// falling back to `default` when the provider has none.
pub fn compute_prayer_times_from(
    provider: &dyn LocationProvider,
    date: NaiveDate,
    default: Coordinates,
    params: &CalculationParams,
    utc_offset: f64,
) -> PrayerTimes {
    compute_prayer_times_or_default(date, provider.coordinates(), default, params, utc_offset)
}
