use chrono::{NaiveDate, NaiveTime};
use waqt::{
    AsrMethod, CalculationParams, ClockTime, Coordinates, Prayer, PrayerDateExt, PrayerTimes,
    compute_prayer_times, generate_timetable, next_event,
};

fn jakarta() -> Coordinates {
    Coordinates::new(-6.2088, 106.8456).unwrap()
}

fn new_york() -> Coordinates {
    Coordinates::new(40.7128, -74.006).unwrap()
}

fn day_length_minutes(times: &PrayerTimes) -> i32 {
    i32::from(times.maghrib.minutes_from_midnight())
        - i32::from(times.sunrise.minutes_from_midnight())
}

#[test]
fn test_ordering_holds_across_seasons_and_hemispheres() {
    let locations = [
        jakarta(),
        new_york(),
        Coordinates::new(21.4225, 39.8262).unwrap(),  // Mecca
        Coordinates::new(-33.8688, 151.2093).unwrap(), // Sydney
    ];
    let offsets = [7.0, -5.0, 3.0, 10.0];
    let dates = [
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        NaiveDate::from_ymd_opt(2024, 9, 22).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
    ];

    for (coords, offset) in locations.iter().zip(offsets) {
        for date in dates {
            let times = compute_prayer_times(date, *coords, &CalculationParams::default(), offset);
            let minutes: Vec<u16> =
                times.in_order().iter().map(|(_, t)| t.minutes_from_midnight()).collect();
            for pair in minutes.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "ordering violated at {coords:?} on {date}: {minutes:?}"
                );
            }
        }
    }
}

#[test]
fn test_summer_day_longer_than_winter_day() {
    let summer = compute_prayer_times(
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        new_york(),
        &CalculationParams::default(),
        -5.0,
    );
    let winter = compute_prayer_times(
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
        new_york(),
        &CalculationParams::default(),
        -5.0,
    );

    let gap = day_length_minutes(&summer) - day_length_minutes(&winter);
    // Roughly 15 h vs 9.25 h at this latitude.
    assert!(gap > 240, "summer/winter day-length gap only {gap} minutes");
}

#[test]
fn test_southern_hemisphere_seasons_inverted() {
    let sydney = Coordinates::new(-33.8688, 151.2093).unwrap();
    let december = compute_prayer_times(
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
        sydney,
        &CalculationParams::default(),
        10.0,
    );
    let june = compute_prayer_times(
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        sydney,
        &CalculationParams::default(),
        10.0,
    );
    assert!(day_length_minutes(&december) > day_length_minutes(&june));
}

#[test]
fn test_dhuhr_sensitive_to_longitude() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let west = Coordinates::new(30.0, 10.0).unwrap();
    let east = Coordinates::new(30.0, 20.0).unwrap();

    let a = compute_prayer_times(date, west, &CalculationParams::default(), 0.0);
    let b = compute_prayer_times(date, east, &CalculationParams::default(), 0.0);

    assert_ne!(a.dhuhr, b.dhuhr);
    // 10 degrees east means solar noon arrives 40 minutes earlier.
    let shift = i32::from(a.dhuhr.minutes_from_midnight())
        - i32::from(b.dhuhr.minutes_from_midnight());
    assert!((38..=42).contains(&shift), "dhuhr shift {shift} minutes");
}

#[test]
fn test_aggregator_idempotent() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let params = CalculationParams::egyptian().with_asr_method(AsrMethod::Alternate);
    let a = compute_prayer_times(date, jakarta(), &params, 7.0);
    let b = compute_prayer_times(date, jakarta(), &params, 7.0);
    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

#[test]
fn test_computed_times_feed_countdown() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let times = date.prayer_times_default(jakarta(), 7.0);

    // One minute after midnight the next event is Fajr, under 5 hours away.
    let next = next_event(&times, NaiveTime::from_hms_opt(0, 1, 0).unwrap());
    assert_eq!(next.prayer, Prayer::Fajr);
    assert!(next.remaining.hours < 5);

    // Just before midnight it rolls over to tomorrow's Fajr.
    let next = next_event(&times, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    assert_eq!(next.prayer, Prayer::Fajr);
    assert!(next.remaining.hours >= 4);
    assert_eq!(next.scheduled, times.fajr);
}

#[test]
fn test_prayer_times_serde_round_trip() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let times = compute_prayer_times(date, jakarta(), &CalculationParams::default(), 7.0);

    let json = serde_json::to_string(&times).unwrap();
    let back: PrayerTimes = serde_json::from_str(&json).unwrap();
    assert_eq!(times, back);

    // Times serialize as HH:MM strings for display collaborators.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let fajr = value["fajr"].as_str().unwrap();
    assert_eq!(fajr.parse::<ClockTime>().unwrap(), times.fajr);
}

#[test]
fn test_month_timetable() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let month: Vec<PrayerTimes> =
        generate_timetable(start, end, jakarta(), CalculationParams::default(), 7.0).collect();

    assert_eq!(month.len(), 30);
    // Near the June solstice Jakarta's times drift by at most a few minutes.
    for window in month.windows(2) {
        let drift = i32::from(window[1].fajr.minutes_from_midnight())
            - i32::from(window[0].fajr.minutes_from_midnight());
        assert!(drift.abs() <= 3, "fajr drifted {drift} minutes in one day");
    }
}
