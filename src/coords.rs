//! Equatorial to horizontal coordinate conversion.

#![allow(clippy::many_single_char_names)]

use crate::math::{
    degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, round_to_places,
};
use crate::time::JulianDate;
use crate::types::HorizontalCoordinates;

/// Position on the celestial sphere relative to the Earth's equator and the
/// vernal equinox, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EquatorialCoordinates {
    /// Right ascension in radians
    pub right_ascension: f64,
    /// Declination in radians
    pub declination: f64,
}

/// Converts equatorial coordinates to the observer's horizontal frame.
///
/// The hour angle comes from the local sidereal time (Greenwich mean sidereal
/// time plus the observer's longitude). Azimuth is measured from North,
/// increasing clockwise; both output angles are rounded to two decimals.
pub(crate) fn equatorial_to_horizontal(
    equatorial: EquatorialCoordinates,
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> HorizontalCoordinates {
    let lst = degrees_to_radians(jd.greenwich_mean_sidereal_time() + longitude);
    let hour_angle = lst - equatorial.right_ascension;

    let phi = degrees_to_radians(latitude);
    let declination = equatorial.declination;

    let altitude = (phi.sin() * declination.sin()
        + phi.cos() * declination.cos() * hour_angle.cos())
    .asin();

    let azimuth = radians_to_degrees(
        hour_angle
            .sin()
            .atan2(hour_angle.cos() * phi.sin() - declination.tan() * phi.cos()),
    ) + 180.0;

    HorizontalCoordinates::new(
        round_to_places(normalize_degrees_0_to_360(azimuth), 2),
        round_to_places(radians_to_degrees(altitude), 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn jd(s: &str) -> JulianDate {
        JulianDate::from_datetime(&s.parse::<DateTime<Utc>>().unwrap())
    }

    #[test]
    fn test_transit_is_due_south() {
        // Hour angle zero with declination south of the observer's latitude
        // puts the body due south at its highest point.
        let jd = jd("2024-03-20T12:00:00Z");
        let latitude = 52.0;
        let longitude = 5.0;
        let lst = degrees_to_radians(jd.greenwich_mean_sidereal_time() + longitude);

        let position = equatorial_to_horizontal(
            EquatorialCoordinates {
                right_ascension: lst,
                declination: degrees_to_radians(40.0),
            },
            jd,
            latitude,
            longitude,
        );

        assert_eq!(position.azimuth(), 180.0);
        assert!((position.altitude() - 78.0).abs() < 0.01);
    }

    #[test]
    fn test_near_pole_stays_north() {
        // A body close to the celestial pole sits near azimuth north at an
        // altitude close to the observer's latitude, at any hour angle.
        let latitude = 52.0;
        for hours in 0..24 {
            let jd = jd("2024-06-01T00:00:00Z").add_days(f64::from(hours) / 24.0);
            let position = equatorial_to_horizontal(
                EquatorialCoordinates {
                    right_ascension: degrees_to_radians(f64::from(hours) * 15.0),
                    declination: degrees_to_radians(89.99),
                },
                jd,
                latitude,
                0.0,
            );

            let from_north = position.azimuth().min(360.0 - position.azimuth());
            assert!(from_north < 0.5, "azimuth {} not north", position.azimuth());
            assert!((position.altitude() - latitude).abs() < 0.05);
        }
    }

    #[test]
    fn test_output_ranges() {
        let jd = jd("2024-09-01T06:30:00Z");
        for ra_step in 0..12 {
            for dec_step in -8..=8 {
                let position = equatorial_to_horizontal(
                    EquatorialCoordinates {
                        right_ascension: degrees_to_radians(f64::from(ra_step) * 30.0),
                        declination: degrees_to_radians(f64::from(dec_step) * 10.0),
                    },
                    jd,
                    -35.0,
                    151.2,
                );

                assert!((0.0..360.0).contains(&position.azimuth()));
                assert!((-90.0..=90.0).contains(&position.altitude()));
            }
        }
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let jd = jd("2024-02-10T20:15:00Z");
        let position = equatorial_to_horizontal(
            EquatorialCoordinates {
                right_ascension: 1.234,
                declination: 0.456,
            },
            jd,
            48.2,
            16.4,
        );

        assert_eq!(position.azimuth(), round_to_places(position.azimuth(), 2));
        assert_eq!(position.altitude(), round_to_places(position.altitude(), 2));
    }
}
