//! # Astro Almanac
//!
//! Sun, Moon and calendar calculations for everyday almanac data: positions,
//! rise and set times, lunar phases and zodiac signs.
//!
//! This library implements compact, self-contained models with no ephemeris
//! files and no external data:
//! - **Sun position**: horizon coordinates and distance from a low-order Kepler model
//! - **Moon position**: horizon coordinates and distance from truncated periodic series
//! - **Sun times**: sunrise, sunset, solar noon, three twilight grades and the golden hour
//! - **Moon phase**: cycle age, principal phase and illumination from the mean synodic month
//! - **Zodiac**: tropical sign date windows
//!
//! ## Features
//!
//! - Timezone aware: every entry point takes a chrono `DateTime<Tz>`, and
//!   day-based results are anchored to the query's own zone
//! - Thread-safe: stateless, immutable data structures
//! - Self-contained: a few dozen series terms, no tables to ship
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize` on the result types (plain enums also get
//!   `Deserialize`)
//!
//! ## Quick Start
//!
//! ### Sun and Moon position
//! ```rust
//! use astro_almanac::{moon, sun};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Positions over Vienna at noon
//! let datetime = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//!
//! let sun = sun::sun_position(datetime, 48.21, 16.37).unwrap();
//! println!("Sun: {:.2}°/{:.2}°, {} AU", sun.azimuth(), sun.altitude(), sun.distance());
//!
//! let moon = moon::moon_position(datetime, 48.21, 16.37).unwrap();
//! println!("Moon: {:.2}°/{:.2}°, {} km", moon.azimuth(), moon.altitude(), moon.distance());
//! ```
//!
//! ### Daily timetable
//! ```rust
//! use astro_almanac::sun_times;
//! use chrono::{DateTime, FixedOffset};
//!
//! // Sunrise, sunset and twilight for San Francisco
//! let date = "2024-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let times = sun_times::sun_times(date, 37.7749, -122.4194).unwrap();
//!
//! println!("Dawn: {}", times.dawn);
//! println!("Sunrise: {}", times.sunrise);
//! println!("Solar noon: {}", times.solar_noon);
//! println!("Sunset: {}", times.sunset);
//! ```
//!
//! ### Moon phase and zodiac sign
//! ```rust
//! use astro_almanac::{moon_phase, zodiac};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//!
//! let phase = moon_phase::moon_phase(now);
//! println!(
//!     "{} ({}% illuminated, {} days old)",
//!     phase.phase, phase.illumination, phase.moon_age
//! );
//!
//! let sign = zodiac::zodiac_sign(now);
//! println!("{} until {}", sign.sign, sign.end_date);
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Altitude**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Distance**: kilometers for the Moon, astronomical units for the Sun

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of rounded outputs in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::moon::moon_position;
pub use crate::moon_phase::moon_phase;
pub use crate::sun::sun_position;
pub use crate::sun_times::sun_times;
pub use crate::types::{
    Horizon, HorizontalCoordinates, MoonPhase, MoonPhaseInfo, MoonPosition, SunPosition, SunTimes,
    ZodiacSign, ZodiacSignInfo,
};
pub use crate::zodiac::zodiac_sign;

// Model modules
pub mod moon;
pub mod moon_phase;
pub mod sun;
pub mod sun_times;
pub mod zodiac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod coords;
mod math;

// Public modules
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_positions_agree_across_timezone_types() {
        // Same instant through different timezone types
        let datetime_fixed = "2024-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2024, 6, 21, 19, 0, 0).unwrap();

        let sun1 = sun::sun_position(datetime_fixed, 37.7749, -122.4194).unwrap();
        let sun2 = sun::sun_position(datetime_utc, 37.7749, -122.4194).unwrap();
        assert_eq!(sun1, sun2);

        let moon1 = moon::moon_position(datetime_fixed, 37.7749, -122.4194).unwrap();
        let moon2 = moon::moon_position(datetime_utc, 37.7749, -122.4194).unwrap();
        assert_eq!(moon1, moon2);
    }

    #[test]
    fn test_full_almanac_for_a_day() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let times = sun_times(datetime, 40.71, -74.01).unwrap();
        assert!(times.sunrise < times.solar_noon);
        assert!(times.solar_noon < times.sunset);

        let phase = moon_phase(datetime);
        assert!(phase.moon_age >= 0.0);
        assert!(phase.start_date <= datetime);

        let sign = zodiac_sign(datetime);
        assert_eq!(sign.sign, ZodiacSign::Pisces);
    }

    #[test]
    fn test_invalid_coordinates_rejected_everywhere() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        assert!(matches!(
            sun::sun_position(datetime, 91.0, 0.0),
            Err(Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            moon::moon_position(datetime, 0.0, 200.0),
            Err(Error::InvalidLongitude { .. })
        ));
        assert!(sun_times(datetime, -90.5, 0.0).is_err());
    }
}
