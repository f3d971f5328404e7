pub mod astronomy;
pub mod countdown;
pub mod extension;
pub mod schedule;
pub mod types;

pub use countdown::next_event;
pub use extension::PrayerDateExt;
pub use schedule::{
    FixedLocation, LocationProvider, NoLocation, compute_prayer_times,
    compute_prayer_times_from, compute_prayer_times_or_default,
};
pub use types::{
    AsrMethod, CalculationParams, CalculationParamsBuilder, ClockTime, Coordinates, Countdown,
    NextEvent, Prayer, PrayerNames, PrayerTimes, WaqtError,
};

pub mod prelude {
    pub use crate::astronomy::{DayPhase, SolarPosition};
    pub use crate::types::*;
    pub use crate::{PrayerDateExt, compute_prayer_times, next_event};
}

use chrono::NaiveDate;

/// Iterator producing one `PrayerTimes` per day over a date range, lazily.
pub struct TimetableIterator {
    current: NaiveDate,
    end: NaiveDate,
    coordinates: Coordinates,
    params: CalculationParams,
    utc_offset: f64,
}

impl Iterator for TimetableIterator {
    type Item = PrayerTimes;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }
        let times =
            compute_prayer_times(self.current, self.coordinates, &self.params, self.utc_offset);
        self.current = self.current.succ_opt()?;
        Some(times)
    }
}

/// Generates a daily timetable for `start..=end` at fixed coordinates.
/// Returns an iterator.
pub fn generate_timetable(
    start: NaiveDate,
    end: NaiveDate,
    coordinates: Coordinates,
    params: CalculationParams,
    utc_offset: f64,
) -> TimetableIterator {
    TimetableIterator { current: start, end, coordinates, params, utc_offset }
}
