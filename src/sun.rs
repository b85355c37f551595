//! Solar position model.
//!
//! A low-order Kepler model of the Sun's apparent place: mean elements
//! linear in time, a three-term equation of center, and a conic-section
//! radius for the Earth-Sun distance. Accuracy is in the arcminute range,
//! an order of magnitude coarser than survey-grade algorithms but adequate
//! for almanac output.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::coords::{EquatorialCoordinates, equatorial_to_horizontal};
use crate::error::check_coordinates;
use crate::math::{degrees_to_radians, normalize_degrees_0_to_360, round_to_places};
use crate::time::JulianDate;
use crate::types::SunPosition;
use crate::Result;
use chrono::{DateTime, TimeZone};

/// Semi-major axis factor for the Earth-Sun distance, in astronomical units.
const DISTANCE_SCALE_AU: f64 = 1.000001018;

/// Calculates the topocentric position of the Sun.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Sun position (azimuth, altitude, distance in astronomical units) or error
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use astro_almanac::sun;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = sun::sun_position(
///     datetime,
///     48.21,   // Vienna latitude
///     16.37,   // Vienna longitude
/// ).unwrap();
///
/// println!("Azimuth: {:.2}°", position.azimuth());
/// println!("Altitude: {:.2}°", position.altitude());
/// println!("Distance: {} AU", position.distance());
/// ```
pub fn sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    check_coordinates(latitude, longitude)?;

    let jd = JulianDate::from_datetime(&datetime);
    let t = jd.julian_century();

    // Mean elements
    let mean_longitude = normalize_degrees_0_to_360(280.46646 + 36000.76983 * t);
    let mean_anomaly = degrees_to_radians(normalize_degrees_0_to_360(357.52911 + 35999.05029 * t));
    let eccentricity = 0.016708634 - 0.000042037 * t;

    // Equation of center, in degrees
    let center = (1.914602 - 0.004817 * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();

    let ecliptic_longitude = degrees_to_radians(mean_longitude + center);
    let true_anomaly = mean_anomaly + degrees_to_radians(center);

    let distance = DISTANCE_SCALE_AU * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly.cos());

    // Obliquity drifts with time here, unlike the lunar model's fixed value.
    let obliquity = degrees_to_radians(23.439291 - 0.0130042 * t);

    // The Sun's ecliptic latitude is taken as zero, which collapses the
    // conversion to the equator to two terms.
    let right_ascension =
        (obliquity.cos() * ecliptic_longitude.sin()).atan2(ecliptic_longitude.cos());
    let declination = (obliquity.sin() * ecliptic_longitude.sin()).asin();

    let equatorial = EquatorialCoordinates {
        right_ascension,
        declination,
    };
    let position = equatorial_to_horizontal(equatorial, jd, latitude, longitude);

    Ok(SunPosition::new(position, round_to_places(distance, 6)))
}
