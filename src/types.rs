//! Core data types for almanac calculations.

use chrono::{DateTime, TimeZone};
use core::fmt;

/// Predefined solar elevation angles for the event timetable.
///
/// Each variant names one of the fixed crossing thresholds used for sunrise,
/// sunset, twilights and the golden hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Golden hour boundary (sun is 6° above horizon)
    GoldenHour,
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833, // Accounts for refraction and sun's radius
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::GoldenHour => 6.0,
        }
    }
}

/// Position on the observer's local horizon.
///
/// Uses the standard astronomical coordinate system where:
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Altitude: 90° = directly overhead, 0° = horizon, -90° = nadir
///
/// Both angles are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalCoordinates {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Altitude angle in degrees (-90° to +90°, 0° = horizon)
    altitude: f64,
}

impl HorizontalCoordinates {
    pub(crate) const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude angle in degrees (-90° to +90°, 0° = horizon).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Checks if the body is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Topocentric position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPosition {
    #[cfg_attr(feature = "serde", serde(flatten))]
    position: HorizontalCoordinates,
    /// Distance from the observer in kilometers, rounded to whole kilometers
    distance: f64,
}

impl MoonPosition {
    pub(crate) const fn new(position: HorizontalCoordinates, distance: f64) -> Self {
        Self { position, distance }
    }

    /// Gets the horizontal coordinates of the Moon.
    #[must_use]
    pub const fn position(&self) -> &HorizontalCoordinates {
        &self.position
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.position.azimuth()
    }

    /// Gets the altitude angle in degrees (-90° to +90°, 0° = horizon).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.position.altitude()
    }

    /// Gets the Earth-Moon distance in kilometers (whole kilometers).
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Topocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunPosition {
    #[cfg_attr(feature = "serde", serde(flatten))]
    position: HorizontalCoordinates,
    /// Distance from the Earth in astronomical units, rounded to six decimals
    distance: f64,
}

impl SunPosition {
    pub(crate) const fn new(position: HorizontalCoordinates, distance: f64) -> Self {
        Self { position, distance }
    }

    /// Gets the horizontal coordinates of the Sun.
    #[must_use]
    pub const fn position(&self) -> &HorizontalCoordinates {
        &self.position
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.position.azimuth()
    }

    /// Gets the altitude angle in degrees (-90° to +90°, 0° = horizon).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.position.altitude()
    }

    /// Gets the Earth-Sun distance in astronomical units (six decimals).
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// The eight principal phases of the lunar cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoonPhase {
    /// Cycle fraction [0, 0.0625)
    NewMoon,
    /// Cycle fraction [0.0625, 0.25)
    WaxingCrescent,
    /// Cycle fraction [0.25, 0.3125)
    FirstQuarter,
    /// Cycle fraction [0.3125, 0.5)
    WaxingGibbous,
    /// Cycle fraction [0.5, 0.5625)
    FullMoon,
    /// Cycle fraction [0.5625, 0.75)
    WaningGibbous,
    /// Cycle fraction [0.75, 0.8125)
    LastQuarter,
    /// Cycle fraction [0.8125, 1)
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order, starting at the new moon.
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Gets the lowercase snake_case name of this phase.
    ///
    /// # Example
    /// ```
    /// # use astro_almanac::MoonPhase;
    /// assert_eq!(MoonPhase::WaxingGibbous.name(), "waxing_gibbous");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "new_moon",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::FullMoon => "full_moon",
            Self::WaningGibbous => "waning_gibbous",
            Self::LastQuarter => "last_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    /// Gets the phase that follows this one in the lunar cycle.
    ///
    /// The cycle wraps: the waning crescent is followed by the new moon.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::NewMoon => Self::WaxingCrescent,
            Self::WaxingCrescent => Self::FirstQuarter,
            Self::FirstQuarter => Self::WaxingGibbous,
            Self::WaxingGibbous => Self::FullMoon,
            Self::FullMoon => Self::WaningGibbous,
            Self::WaningGibbous => Self::LastQuarter,
            Self::LastQuarter => Self::WaningCrescent,
            Self::WaningCrescent => Self::NewMoon,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar phase details for a single instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "")))]
pub struct MoonPhaseInfo<Tz: TimeZone> {
    /// Phase the Moon is in at the queried instant.
    pub phase: MoonPhase,
    /// Start of the current phase's calendar day window.
    pub start_date: DateTime<Tz>,
    /// End of the current phase's calendar day window.
    pub end_date: DateTime<Tz>,
    /// Days elapsed since the last new moon, rounded to one decimal.
    pub moon_age: f64,
    /// Illuminated percentage of the lunar disc (0 to 100).
    pub illumination: u8,
    /// Phase that follows the current one.
    pub next_phase: MoonPhase,
    /// Day on which the next phase begins.
    pub next_phase_date: DateTime<Tz>,
}

/// The twelve tropical zodiac signs, in calendar order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZodiacSign {
    /// March 21 to April 19
    Aries,
    /// April 20 to May 20
    Taurus,
    /// May 21 to June 20
    Gemini,
    /// June 21 to July 22
    Cancer,
    /// July 23 to August 22
    Leo,
    /// August 23 to September 22
    Virgo,
    /// September 23 to October 22
    Libra,
    /// October 23 to November 21
    Scorpio,
    /// November 22 to December 21
    Sagittarius,
    /// December 22 to January 19 (spans the year boundary)
    Capricorn,
    /// January 20 to February 18
    Aquarius,
    /// February 19 to March 20
    Pisces,
}

impl ZodiacSign {
    /// All signs in calendar order, starting at Aries.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Gets the lowercase name of this sign.
    ///
    /// # Example
    /// ```
    /// # use astro_almanac::ZodiacSign;
    /// assert_eq!(ZodiacSign::Capricorn.name(), "capricorn");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zodiac sign for a date together with the sign's concrete date window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "")))]
pub struct ZodiacSignInfo<Tz: TimeZone> {
    /// Sign the queried date falls in.
    pub sign: ZodiacSign,
    /// Midnight starting the sign's period, in the query's zone.
    pub start_date: DateTime<Tz>,
    /// Midnight of the period's last day, in the query's zone.
    pub end_date: DateTime<Tz>,
}

/// Solar event times for a single calendar day.
///
/// All instants fall on the queried date's calendar day, expressed in the
/// query's own zone. At polar latitudes the hour-angle clamp produces
/// degenerate all-day or all-night timetables (rising and setting events
/// collapse toward solar noon or spread to the full day) rather than an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "")))]
pub struct SunTimes<Tz: TimeZone> {
    /// Sun's upper limb reaches the horizon on the way up (-0.833°).
    pub sunrise: DateTime<Tz>,
    /// Sun's upper limb reaches the horizon on the way down (-0.833°).
    pub sunset: DateTime<Tz>,
    /// Sun crosses the local meridian.
    pub solar_noon: DateTime<Tz>,
    /// Civil dawn (sun at -6° rising).
    pub dawn: DateTime<Tz>,
    /// Civil dusk (sun at -6° setting).
    pub dusk: DateTime<Tz>,
    /// Nautical dawn (sun at -12° rising).
    pub nautical_dawn: DateTime<Tz>,
    /// Nautical dusk (sun at -12° setting).
    pub nautical_dusk: DateTime<Tz>,
    /// Astronomical dawn (sun at -18° rising).
    pub astronomical_dawn: DateTime<Tz>,
    /// Astronomical dusk (sun at -18° setting).
    pub astronomical_dusk: DateTime<Tz>,
    /// Evening golden hour begins (sun at +6° setting).
    pub golden_hour_start: DateTime<Tz>,
    /// Morning golden hour ends (sun at +6° rising).
    pub golden_hour_end: DateTime<Tz>,
}
