//! Lunar position model.
//!
//! Computes the Moon's topocentric position from a truncated periodic-term
//! expansion of its geocentric ecliptic coordinates: five mean orbital
//! elements, six longitude terms, four latitude terms and four distance
//! terms. Positions are accurate to a fraction of a degree, which is
//! sufficient for rise/set-style applications but far from ephemeris grade.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::coords::{EquatorialCoordinates, equatorial_to_horizontal};
use crate::error::check_coordinates;
use crate::math::{degrees_to_radians, normalize_degrees_0_to_360, round_to_places};
use crate::time::JulianDate;
use crate::types::MoonPosition;
use crate::Result;
use chrono::{DateTime, TimeZone};

/// Mean obliquity of the ecliptic used by the lunar model, in degrees.
///
/// This model keeps the obliquity fixed while the solar model lets it drift
/// with time. The two models are deliberately not harmonized; their outputs
/// would change if they were.
const MEAN_OBLIQUITY: f64 = 23.4393;

/// Mean Earth-Moon distance in kilometers.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// One periodic correction: amplitude applied to the sine or cosine of an
/// integer combination of the four fundamental arguments.
struct PeriodicTerm {
    amplitude: f64,
    elongation: f64,
    anomaly: f64,
    solar_anomaly: f64,
    latitude_argument: f64,
}

impl PeriodicTerm {
    const fn new(
        amplitude: f64,
        elongation: f64,
        anomaly: f64,
        solar_anomaly: f64,
        latitude_argument: f64,
    ) -> Self {
        Self {
            amplitude,
            elongation,
            anomaly,
            solar_anomaly,
            latitude_argument,
        }
    }

    fn argument(&self, args: &FundamentalArguments) -> f64 {
        self.elongation * args.elongation
            + self.anomaly * args.anomaly
            + self.solar_anomaly * args.solar_anomaly
            + self.latitude_argument * args.latitude_argument
    }
}

/// Fundamental arguments of the lunar orbit for one instant, in radians.
struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun (D)
    elongation: f64,
    /// Moon's mean anomaly (M')
    anomaly: f64,
    /// Sun's mean anomaly (M)
    solar_anomaly: f64,
    /// Moon's argument of latitude (F)
    latitude_argument: f64,
}

/// Corrections to the mean ecliptic longitude, in degrees (sine series).
const LONGITUDE_TERMS: [PeriodicTerm; 6] = [
    PeriodicTerm::new(6.289, 0.0, 1.0, 0.0, 0.0),
    PeriodicTerm::new(1.274, 2.0, -1.0, 0.0, 0.0),
    PeriodicTerm::new(0.658, 2.0, 0.0, 0.0, 0.0),
    PeriodicTerm::new(0.214, 0.0, 2.0, 0.0, 0.0),
    PeriodicTerm::new(-0.186, 0.0, 0.0, 1.0, 0.0),
    PeriodicTerm::new(-0.114, 0.0, 0.0, 0.0, 2.0),
];

/// Ecliptic latitude series, in degrees (sine series).
const LATITUDE_TERMS: [PeriodicTerm; 4] = [
    PeriodicTerm::new(5.128, 0.0, 0.0, 0.0, 1.0),
    PeriodicTerm::new(0.281, 0.0, 1.0, 0.0, 1.0),
    PeriodicTerm::new(0.278, 0.0, 1.0, 0.0, -1.0),
    PeriodicTerm::new(0.173, 2.0, 0.0, 0.0, -1.0),
];

/// Distance corrections, in thousands of kilometers (cosine series).
const DISTANCE_TERMS: [PeriodicTerm; 4] = [
    PeriodicTerm::new(-20.905, 0.0, 1.0, 0.0, 0.0),
    PeriodicTerm::new(-3.699, 2.0, -1.0, 0.0, 0.0),
    PeriodicTerm::new(-2.956, 2.0, 0.0, 0.0, 0.0),
    PeriodicTerm::new(-0.569, 0.0, 2.0, 0.0, 0.0),
];

/// Calculates the topocentric position of the Moon.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Moon position (azimuth, altitude, distance in kilometers) or error
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use astro_almanac::moon;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2024-07-15T22:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = moon::moon_position(
///     datetime,
///     52.37,   // Amsterdam latitude
///     4.89,    // Amsterdam longitude
/// ).unwrap();
///
/// println!("Azimuth: {:.2}°", position.azimuth());
/// println!("Altitude: {:.2}°", position.altitude());
/// println!("Distance: {} km", position.distance());
/// ```
pub fn moon_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    check_coordinates(latitude, longitude)?;

    let jd = JulianDate::from_datetime(&datetime);
    let t = jd.julian_century();

    // Mean elements of the lunar orbit
    let mean_longitude = normalize_degrees_0_to_360(218.3164477 + 481267.88123421 * t);
    let args = FundamentalArguments {
        elongation: degrees_to_radians(normalize_degrees_0_to_360(
            297.8501921 + 445267.1114034 * t,
        )),
        anomaly: degrees_to_radians(normalize_degrees_0_to_360(134.9633964 + 477198.8675055 * t)),
        solar_anomaly: degrees_to_radians(normalize_degrees_0_to_360(
            357.5291092 + 35999.0502909 * t,
        )),
        latitude_argument: degrees_to_radians(normalize_degrees_0_to_360(
            93.2720950 + 483202.0175233 * t,
        )),
    };

    let longitude_correction: f64 = LONGITUDE_TERMS
        .iter()
        .map(|term| term.amplitude * term.argument(&args).sin())
        .sum();
    let latitude_correction: f64 = LATITUDE_TERMS
        .iter()
        .map(|term| term.amplitude * term.argument(&args).sin())
        .sum();
    let distance_correction: f64 = DISTANCE_TERMS
        .iter()
        .map(|term| term.amplitude * term.argument(&args).cos())
        .sum();

    let ecliptic_longitude = degrees_to_radians(mean_longitude + longitude_correction);
    let ecliptic_latitude = degrees_to_radians(latitude_correction);
    let distance = MEAN_DISTANCE_KM + distance_correction * 1000.0;

    let equatorial = ecliptic_to_equatorial(ecliptic_longitude, ecliptic_latitude);
    let position = equatorial_to_horizontal(equatorial, jd, latitude, longitude);

    Ok(MoonPosition::new(position, round_to_places(distance, 0)))
}

/// Converts geocentric ecliptic coordinates to equatorial ones, using the
/// model's fixed mean obliquity.
fn ecliptic_to_equatorial(longitude: f64, latitude: f64) -> EquatorialCoordinates {
    let obliquity = degrees_to_radians(MEAN_OBLIQUITY);

    let right_ascension = (longitude.sin() * obliquity.cos() - latitude.tan() * obliquity.sin())
        .atan2(longitude.cos());
    let declination =
        (latitude.sin() * obliquity.cos() + latitude.cos() * obliquity.sin() * longitude.sin())
            .asin();

    EquatorialCoordinates {
        right_ascension,
        declination,
    }
}
