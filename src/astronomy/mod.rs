//! Astronomical primitives: Julian dates, solar position, and the
//! hour-angle solver shared by the twilight and horizon events.

pub mod hour_angle;
pub mod julian;
pub mod solar;

pub use hour_angle::{
    DayPhase, EVENING_FALLBACK_HOUR, MORNING_FALLBACK_HOUR, SUNRISE_SUNSET_ANGLE, asr_angle,
    asr_time, solar_noon, sun_angle_time, try_sun_angle_time,
};
pub use julian::{J2000_EPOCH, julian_day, julian_day_number};
pub use solar::{SolarPosition, fix_angle, fix_hour, solar_position};
