//! Lunar phase calculation.
//!
//! Derives the Moon's age in days from a fixed reference new moon and the
//! mean synodic month, then maps the cycle fraction onto the eight principal
//! phases with day-resolution start and end dates.

#![allow(clippy::unreadable_literal)]

use crate::math::{round_to_places, PI};
use crate::time::{add_days, days_between, start_of_day};
use crate::types::{MoonPhase, MoonPhaseInfo};
use chrono::{DateTime, TimeZone, Utc};

/// Mean length of the synodic month in days.
const SYNODIC_MONTH: f64 = 29.530588853;

/// A known new moon used as the cycle origin: 2000-01-06 18:14 UTC.
fn reference_new_moon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0)
        .single()
        .expect("reference instant is a valid UTC time")
}

/// One phase's half-open share [start, end) of the cycle fraction.
struct PhaseWindow {
    phase: MoonPhase,
    start: f64,
    end: f64,
}

/// The eight phase windows, tiling [0, 1) in cycle order. The principal
/// phases (new, quarters, full) get a narrow 1/16-cycle band centered on
/// their exact moment; the intermediate phases fill the gaps.
const PHASE_WINDOWS: [PhaseWindow; 8] = [
    PhaseWindow {
        phase: MoonPhase::NewMoon,
        start: 0.0,
        end: 0.0625,
    },
    PhaseWindow {
        phase: MoonPhase::WaxingCrescent,
        start: 0.0625,
        end: 0.25,
    },
    PhaseWindow {
        phase: MoonPhase::FirstQuarter,
        start: 0.25,
        end: 0.3125,
    },
    PhaseWindow {
        phase: MoonPhase::WaxingGibbous,
        start: 0.3125,
        end: 0.5,
    },
    PhaseWindow {
        phase: MoonPhase::FullMoon,
        start: 0.5,
        end: 0.5625,
    },
    PhaseWindow {
        phase: MoonPhase::WaningGibbous,
        start: 0.5625,
        end: 0.75,
    },
    PhaseWindow {
        phase: MoonPhase::LastQuarter,
        start: 0.75,
        end: 0.8125,
    },
    PhaseWindow {
        phase: MoonPhase::WaningCrescent,
        start: 0.8125,
        end: 1.0,
    },
];

/// Days since the preceding new moon, in [0, synodic month).
///
/// The double modulo keeps the result non-negative for instants before the
/// reference new moon.
fn cycle_age<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let elapsed = days_between(datetime, &reference_new_moon());
    ((elapsed % SYNODIC_MONTH) + SYNODIC_MONTH) % SYNODIC_MONTH
}

/// Looks up the phase window containing the cycle fraction.
///
/// A fraction that rounds up to 1.0 wraps back to the start of the cycle.
fn window_for_fraction(fraction: f64) -> &'static PhaseWindow {
    let normalized = if fraction >= 1.0 {
        fraction - 1.0
    } else {
        fraction
    };
    PHASE_WINDOWS
        .iter()
        .find(|window| normalized >= window.start && normalized < window.end)
        .unwrap_or(&PHASE_WINDOWS[0])
}

/// Illuminated share of the lunar disc as a whole percentage.
///
/// Uses the cosine of the phase angle: 0% at the new moon, 100% at the
/// full moon.
#[allow(clippy::cast_sign_loss)]
fn illuminated_percent(fraction: f64) -> u8 {
    let illuminated = (1.0 - (2.0 * PI * fraction).cos()) / 2.0;
    (illuminated * 100.0).round() as u8
}

/// Calculates the lunar phase for a given instant.
///
/// The phase's start and end dates are day boundaries in the query's own
/// timezone; the end date doubles as the day the next phase begins.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
///
/// # Returns
/// Phase details: current phase, its calendar window, the Moon's age in
/// days (one decimal), illumination percentage, and the following phase
///
/// # Example
/// ```rust
/// use astro_almanac::moon_phase;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2024-01-11T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let info = moon_phase::moon_phase(datetime);
///
/// println!("Phase: {} ({}% illuminated)", info.phase, info.illumination);
/// assert!(info.start_date <= datetime);
/// assert_eq!(info.next_phase, info.phase.next());
/// ```
pub fn moon_phase<Tz: TimeZone>(datetime: DateTime<Tz>) -> MoonPhaseInfo<Tz> {
    let age = cycle_age(&datetime);
    let fraction = age / SYNODIC_MONTH;
    let window = window_for_fraction(fraction);

    let days_from_start = (fraction - window.start) * SYNODIC_MONTH;
    let days_to_end = (window.end - fraction) * SYNODIC_MONTH;

    let start_date = start_of_day(&add_days(&datetime, -days_from_start));
    let end_date = start_of_day(&add_days(&datetime, days_to_end));

    MoonPhaseInfo {
        phase: window.phase,
        start_date,
        end_date: end_date.clone(),
        moon_age: round_to_places(age, 1),
        illumination: illuminated_percent(fraction),
        next_phase: window.phase.next(),
        next_phase_date: end_date,
    }
}
