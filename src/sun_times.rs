//! Solar event timetable.
//!
//! Computes sunrise, sunset, solar noon, the three twilight pairs and the
//! golden hour for one calendar day, from a self-contained day-of-year
//! model: a cosine fit for the solar declination, a three-term equation of
//! time, and the standard hour-angle sunrise equation per threshold. The
//! model is independent of the Julian-date kernel used by the position
//! models and resolves to whole minutes.

#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::time::start_of_day;
use crate::types::{Horizon, SunTimes};
use crate::Result;
use chrono::{DateTime, Datelike, Duration, TimeZone};

/// Minutes from midnight to the mean local noon.
const NOON_MINUTES: f64 = 720.0;

/// Minutes of rotation per degree of hour angle or longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Calculates the solar event times for the query's calendar day.
///
/// The day is the query's local calendar date; every returned instant is
/// anchored to that day in the query's own zone. Querying any two instants
/// on the same local day at the same place yields the same timetable.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time selecting the day
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// The eleven solar event instants for the day, or error
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use astro_almanac::sun_times;
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2024-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let times = sun_times::sun_times(
///     date,
///     52.52,   // Berlin latitude
///     13.40,   // Berlin longitude
/// ).unwrap();
///
/// assert!(times.sunrise < times.solar_noon);
/// assert!(times.solar_noon < times.sunset);
/// println!("Sunrise: {}", times.sunrise);
/// println!("Sunset: {}", times.sunset);
/// ```
pub fn sun_times<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunTimes<Tz>> {
    check_coordinates(latitude, longitude)?;

    let day_of_year = f64::from(datetime.ordinal());

    // Approximate solar declination for the day, in degrees
    let declination =
        -23.45 * degrees_to_radians((360.0 / 365.0) * (day_of_year + 10.0)).cos();

    // Equation of time, in minutes
    let b = degrees_to_radians((360.0 / 365.0) * (day_of_year - 81.0));
    let equation_of_time = 9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();

    let solar_noon = NOON_MINUTES - MINUTES_PER_DEGREE * longitude - equation_of_time;

    let horizon = hour_angle_minutes(latitude, declination, Horizon::SunriseSunset);
    let civil = hour_angle_minutes(latitude, declination, Horizon::CivilTwilight);
    let nautical = hour_angle_minutes(latitude, declination, Horizon::NauticalTwilight);
    let astronomical = hour_angle_minutes(latitude, declination, Horizon::AstronomicalTwilight);
    let golden = hour_angle_minutes(latitude, declination, Horizon::GoldenHour);

    let sunrise = solar_noon - horizon;
    let sunset = solar_noon + horizon;

    // The golden hour bounds are anchored to sunset and sunrise with the
    // hour-angle offset, not simplified to noon ± offset.
    let golden_hour_start = sunset - ((sunset - solar_noon) - golden);
    let golden_hour_end = sunrise + ((solar_noon - sunrise) - golden);

    let day_start = start_of_day(&datetime);

    Ok(SunTimes {
        sunrise: minutes_to_instant(&day_start, sunrise),
        sunset: minutes_to_instant(&day_start, sunset),
        solar_noon: minutes_to_instant(&day_start, solar_noon),
        dawn: minutes_to_instant(&day_start, solar_noon - civil),
        dusk: minutes_to_instant(&day_start, solar_noon + civil),
        nautical_dawn: minutes_to_instant(&day_start, solar_noon - nautical),
        nautical_dusk: minutes_to_instant(&day_start, solar_noon + nautical),
        astronomical_dawn: minutes_to_instant(&day_start, solar_noon - astronomical),
        astronomical_dusk: minutes_to_instant(&day_start, solar_noon + astronomical),
        golden_hour_start: minutes_to_instant(&day_start, golden_hour_start),
        golden_hour_end: minutes_to_instant(&day_start, golden_hour_end),
    })
}

/// Minutes between solar noon and the crossing of the given horizon.
///
/// When the sun never reaches the threshold the cosine leaves [-1, 1]; the
/// clamp collapses the crossing onto solar noon (never reached from below)
/// or pushes it a half turn away (never reached from above), which yields
/// the degenerate all-night and all-day timetables at polar latitudes.
fn hour_angle_minutes(latitude: f64, declination: f64, horizon: Horizon) -> f64 {
    let threshold = degrees_to_radians(horizon.elevation_angle());
    let latitude_rad = degrees_to_radians(latitude);
    let declination_rad = degrees_to_radians(declination);

    let cos_hour_angle = (threshold.sin() - latitude_rad.sin() * declination_rad.sin())
        / (latitude_rad.cos() * declination_rad.cos());

    let hour_angle = radians_to_degrees(cos_hour_angle.clamp(-1.0, 1.0).acos());
    hour_angle * MINUTES_PER_DEGREE
}

/// Converts day-relative minutes to an instant on the given day.
///
/// Whole hours are split off with a floor and the remainder is rounded to
/// the nearest minute, exactly in that order; values outside [0, 1440)
/// roll into the neighboring days.
fn minutes_to_instant<Tz: TimeZone>(day_start: &DateTime<Tz>, minutes: f64) -> DateTime<Tz> {
    let hours = (minutes / 60.0).floor();
    let remainder = (minutes % 60.0).round();
    day_start.clone() + Duration::hours(hours as i64) + Duration::minutes(remainder as i64)
}
