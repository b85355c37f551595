//! Time-related calculations for almanac computations.
//!
//! This module provides the Julian date and Greenwich mean sidereal time
//! kernel that the position models share, plus calendar-day helpers for
//! anchoring results to the query's local day.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::normalize_degrees_0_to_360;
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian day value of the J2000.0 reference epoch
const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian date representation for astronomical calculations.
///
/// The value is the proleptic-Gregorian julian day number of the UTC calendar
/// date with the fractional time of day added directly, so midnight of
/// 2000-01-01 UTC maps to exactly 2451545.0. Every consumer in this crate
/// (sidereal time, solar and lunar mean elements) shares that convention, and
/// it must not be replaced with the noon-anchored astronomical scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is projected to UTC before the calendar conversion, so
    /// equal instants produce equal Julian dates regardless of offset.
    ///
    /// # Example
    /// ```
    /// # use astro_almanac::time::JulianDate;
    /// # use chrono::{DateTime, Utc};
    /// let epoch = "2000-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    /// let jd = JulianDate::from_datetime(&epoch);
    /// assert!((jd.julian_date() - 2_451_545.0).abs() < 1e-9);
    /// ```
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);

        let year = i64::from(utc.year());
        let month = i64::from(utc.month());

        let a = (14 - month) / 12;
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;

        let day_number = (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;

        let second = f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9;
        let day = f64::from(utc.day())
            + (f64::from(utc.hour()) + f64::from(utc.minute()) / 60.0 + second / 3600.0) / 24.0;

        Self {
            jd: day + day_number as f64,
        }
    }

    /// Gets the Julian date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Calculates Julian centuries since the J2000.0 reference epoch.
    ///
    /// T = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Calculates the Greenwich mean sidereal time for this Julian date.
    ///
    /// # Returns
    /// Sidereal time in degrees, normalized to [0, 360).
    #[must_use]
    pub fn greenwich_mean_sidereal_time(&self) -> f64 {
        let t = self.julian_century();
        normalize_degrees_0_to_360(
            280.46061837 + 360.98564736629 * (self.jd - J2000_JD) + 0.000387933 * t * t,
        )
    }

    /// Add days to the Julian date.
    #[cfg(test)]
    pub(crate) fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
        }
    }
}

/// Resolves a naive local wall-clock time in the zone of `datetime`.
///
/// Ambiguous times (clocks rolled back) take the earlier instant. Times that
/// fall in a DST gap are resolved through the query instant's own UTC offset.
fn from_local_or_offset<Tz: TimeZone>(datetime: &DateTime<Tz>, local: NaiveDateTime) -> DateTime<Tz> {
    let tz = datetime.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            let offset_seconds = i64::from(datetime.offset().fix().local_minus_utc());
            tz.from_utc_datetime(&(local - Duration::seconds(offset_seconds)))
        }
    }
}

/// Returns midnight of the instant's calendar day, in the instant's own zone.
pub(crate) fn start_of_day<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Tz> {
    from_local_or_offset(datetime, datetime.date_naive().and_time(NaiveTime::MIN))
}

/// Returns midnight of the given calendar date, in the zone of `datetime`.
///
/// `None` if the (year, month, day) triple is not a valid calendar date.
pub(crate) fn midnight_on<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    year: i32,
    month: u32,
    day: u32,
) -> Option<DateTime<Tz>> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(from_local_or_offset(datetime, date.and_time(NaiveTime::MIN)))
}

/// Shifts an instant by a signed fractional number of days.
pub(crate) fn add_days<Tz: TimeZone>(datetime: &DateTime<Tz>, days: f64) -> DateTime<Tz> {
    datetime.clone() + Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

/// Signed difference `later - earlier` in fractional days.
pub(crate) fn days_between<Tz: TimeZone, Tz2: TimeZone>(
    later: &DateTime<Tz>,
    earlier: &DateTime<Tz2>,
) -> f64 {
    let millis = later
        .clone()
        .signed_duration_since(earlier.clone())
        .num_milliseconds();
    millis as f64 / MILLIS_PER_DAY
}
