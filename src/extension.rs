//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;

use crate::schedule::compute_prayer_times;
use crate::types::{CalculationParams, Coordinates, PrayerTimes};

/// Extends `NaiveDate` with prayer-timetable computation.
pub trait PrayerDateExt {
    /// Computes the six daily times for this date.
    ///
    /// `utc_offset` is hours east of UTC for the queried location.
    fn prayer_times(
        &self,
        coordinates: Coordinates,
        params: &CalculationParams,
        utc_offset: f64,
    ) -> PrayerTimes;

    /// `prayer_times` with default (MWL) parameters.
    fn prayer_times_default(&self, coordinates: Coordinates, utc_offset: f64) -> PrayerTimes;
}

impl PrayerDateExt for NaiveDate {
    fn prayer_times(
        &self,
        coordinates: Coordinates,
        params: &CalculationParams,
        utc_offset: f64,
    ) -> PrayerTimes {
        compute_prayer_times(*self, coordinates, params, utc_offset)
    }

    fn prayer_times_default(&self, coordinates: Coordinates, utc_offset: f64) -> PrayerTimes {
        compute_prayer_times(*self, coordinates, &CalculationParams::default(), utc_offset)
    }
}
