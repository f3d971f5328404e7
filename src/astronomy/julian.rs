//! Gregorian calendar to Julian Day Number conversion.

use chrono::{Datelike, NaiveDate};

/// Julian date of the J2000.0 epoch (2000 January 1, 12:00 TT).
pub const J2000_EPOCH: f64 = 2451545.0;

/// Converts a Gregorian calendar date to its Julian Day Number.
///
/// Standard civil algorithm: the `a = (14 - month) / 12` shift treats
/// January and February as months 13 and 14 of the previous year. Total for
/// every syntactically valid (year, month, day).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    let jdn = day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64
}

/// `julian_day_number` for a `chrono::NaiveDate`.
pub fn julian_day(date: NaiveDate) -> f64 {
    julian_day_number(date.year(), date.month(), date.day())
}
