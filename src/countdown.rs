//! Next-event selection with live countdown.

use chrono::{NaiveTime, Timelike};

use crate::types::{Countdown, NextEvent, Prayer, PrayerTimes};

const SECONDS_PER_DAY: i64 = 86_400;

/// Selects the next upcoming event relative to `now`.
///
/// Walks the six events in day order and returns the first whose scheduled
/// minute is strictly after `now`'s minute, with the countdown taken from
/// the literal clock difference (truncated to whole hours/minutes/seconds).
/// When `now` is past Isha, the result rolls over to the set's Fajr on the
/// following day; the countdown then spans the day boundary and its `hours`
/// field is not clamped.
///
/// Ephemeral by design: callers wanting a ticking display simply re-invoke
/// this once per second.
pub fn next_event(times: &PrayerTimes, now: NaiveTime) -> NextEvent {
    let now_minutes = now.hour() * 60 + now.minute();
    let now_seconds = i64::from(now.num_seconds_from_midnight());

    for (prayer, scheduled) in times.in_order() {
        if u32::from(scheduled.minutes_from_midnight()) > now_minutes {
            let remaining =
                Countdown::from_seconds(i64::from(scheduled.seconds_from_midnight()) - now_seconds);
            return NextEvent { prayer, names: prayer.names(), scheduled, remaining };
        }
    }

    // Past Isha: tomorrow's Fajr, one day ahead of the same time set.
    let scheduled = times.fajr;
    let remaining = Countdown::from_seconds(
        i64::from(scheduled.seconds_from_midnight()) + SECONDS_PER_DAY - now_seconds,
    );
    NextEvent { prayer: Prayer::Fajr, names: Prayer::Fajr.names(), scheduled, remaining }
}
