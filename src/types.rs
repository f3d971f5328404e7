use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors from waqt operations.
///
/// The calculation core itself is total; errors only arise from validating
/// constructors and from parsing `HH:MM` strings.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum WaqtError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("Coordinates ({lat}, {lng}) are out of range (lat in [-90, 90], lng in [-180, 180])")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Invalid calculation parameters.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Malformed `HH:MM` string.
    #[error("Invalid time format {input:?}, expected zero-padded HH:MM")]
    InvalidTimeFormat { input: String },
}

impl WaqtError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

/// Geographic coordinates in degrees, east-positive longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    /// Returns `InvalidCoordinates` if latitude is outside [-90, 90] or
    /// longitude outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, WaqtError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(WaqtError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Creates coordinates without range validation.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Juristic method for the Asr shadow factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AsrMethod {
    /// Shadow factor 1 (Shafi'i, Maliki, Hanbali).
    #[default]
    Standard,
    /// Shadow factor 2 (Hanafi).
    Alternate,
}

impl AsrMethod {
    /// The shadow-length multiple defining Asr for this method.
    pub fn shadow_factor(self) -> f64 {
        match self {
            AsrMethod::Standard => 1.0,
            AsrMethod::Alternate => 2.0,
        }
    }
}

/// Calculation parameters: twilight angles and the Asr juristic method.
///
/// Angles are depression angles in degrees below the horizon. The default
/// (18/17, Standard) matches the Muslim World League convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    pub fajr_angle: f64,
    pub isha_angle: f64,
    pub asr_method: AsrMethod,
}

impl Default for CalculationParams {
    fn default() -> Self {
        Self::mwl()
    }
}

impl CalculationParams {
    /// Muslim World League: Fajr 18, Isha 17.
    pub fn mwl() -> Self {
        Self { fajr_angle: 18.0, isha_angle: 17.0, asr_method: AsrMethod::Standard }
    }

    /// Islamic Society of North America: Fajr 15, Isha 15.
    pub fn isna() -> Self {
        Self { fajr_angle: 15.0, isha_angle: 15.0, asr_method: AsrMethod::Standard }
    }

    /// Egyptian General Authority of Survey: Fajr 19.5, Isha 17.5.
    pub fn egyptian() -> Self {
        Self { fajr_angle: 19.5, isha_angle: 17.5, asr_method: AsrMethod::Standard }
    }

    pub fn with_asr_method(mut self, method: AsrMethod) -> Self {
        self.asr_method = method;
        self
    }
}

/// Builder with validation for `CalculationParams`.
#[derive(Debug, Default)]
pub struct CalculationParamsBuilder {
    fajr_angle: Option<f64>,
    isha_angle: Option<f64>,
    asr_method: Option<AsrMethod>,
}

impl CalculationParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fajr_angle(mut self, degrees: f64) -> Self {
        self.fajr_angle = Some(degrees);
        self
    }

    pub fn isha_angle(mut self, degrees: f64) -> Self {
        self.isha_angle = Some(degrees);
        self
    }

    pub fn asr_method(mut self, method: AsrMethod) -> Self {
        self.asr_method = Some(method);
        self
    }

    /// Builds and validates.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if a twilight angle is not finite or
    /// outside (0, 48] degrees.
    pub fn build(self) -> Result<CalculationParams, WaqtError> {
        let defaults = CalculationParams::default();
        let fajr_angle = self.fajr_angle.unwrap_or(defaults.fajr_angle);
        let isha_angle = self.isha_angle.unwrap_or(defaults.isha_angle);

        for (name, angle) in [("fajr_angle", fajr_angle), ("isha_angle", isha_angle)] {
            if !angle.is_finite() || angle <= 0.0 || angle > 48.0 {
                return Err(WaqtError::invalid_config(format!(
                    "{name} {angle} outside supported range (0, 48] degrees"
                )));
            }
        }

        Ok(CalculationParams {
            fajr_angle,
            isha_angle,
            asr_method: self.asr_method.unwrap_or_default(),
        })
    }
}

/// The six daily events in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All events, in the order they occur within one day.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Latin transliteration of the canonical name.
    pub fn transliterated_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Common Indonesian name.
    pub fn native_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Subuh",
            Prayer::Sunrise => "Terbit",
            Prayer::Dhuhr => "Zuhur",
            Prayer::Asr => "Asar",
            Prayer::Maghrib => "Magrib",
            Prayer::Isha => "Isya",
        }
    }

    /// Arabic-script name.
    pub fn liturgical_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }

    pub fn names(self) -> PrayerNames {
        PrayerNames {
            transliterated: self.transliterated_name(),
            native: self.native_name(),
            liturgical: self.liturgical_name(),
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.transliterated_name())
    }
}

/// Human-readable name variants for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerNames {
    pub transliterated: &'static str,
    pub native: &'static str,
    pub liturgical: &'static str,
}

/// A wall-clock time of day with minute resolution.
///
/// Displays, parses, and serializes as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Creates a clock time, validating hour < 24 and minute < 60.
    ///
    /// # Errors
    /// Returns `InvalidTimeFormat` for out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, WaqtError> {
        if hour >= 24 || minute >= 60 {
            return Err(WaqtError::InvalidTimeFormat { input: format!("{hour:02}:{minute:02}") });
        }
        Ok(Self { hour, minute })
    }

    /// Converts a decimal hour to wall-clock `HH:MM` by flooring.
    ///
    /// The value is first wrapped into [0, 24); the minute is the floor of
    /// the fractional part, never rounded up.
    pub fn from_decimal_hours(hours: f64) -> Self {
        let total = (hours.rem_euclid(24.0) * 60.0).floor() as u16 % MINUTES_PER_DAY;
        Self { hour: (total / 60) as u8, minute: (total % 60) as u8 }
    }

    pub fn minutes_from_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    pub fn seconds_from_midnight(self) -> u32 {
        u32::from(self.minutes_from_midnight()) * 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WaqtError::InvalidTimeFormat { input: s.to_string() };
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The six computed times for one date, in local clock hours.
///
/// A pure derived value: recomputing with identical inputs yields an
/// identical set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub date: NaiveDate,
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl PrayerTimes {
    /// The six events paired with their times, in canonical day order.
    pub fn in_order(&self) -> [(Prayer, ClockTime); 6] {
        [
            (Prayer::Fajr, self.fajr),
            (Prayer::Sunrise, self.sunrise),
            (Prayer::Dhuhr, self.dhuhr),
            (Prayer::Asr, self.asr),
            (Prayer::Maghrib, self.maghrib),
            (Prayer::Isha, self.isha),
        ]
    }

    /// Looks up the time of a single event.
    pub fn time_of(&self, prayer: Prayer) -> ClockTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// Truncated non-negative time remaining until an event.
///
/// `hours` is deliberately unclamped: a late-night query rolling over to
/// tomorrow's Fajr can exceed 5 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    /// Splits a signed second count into whole hours/minutes/seconds,
    /// truncating and clamping negatives to zero.
    pub fn from_seconds(seconds: i64) -> Self {
        let total = seconds.max(0) as u64;
        Self {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// The next upcoming event relative to some instant, with countdown.
///
/// Ephemeral: recompute on whatever cadence the display needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextEvent {
    pub prayer: Prayer,
    pub names: PrayerNames,
    pub scheduled: ClockTime,
    pub remaining: Countdown,
}
