//! Full almanac printout for one place and day.

use astro_almanac::{moon_phase, moon_position, sun_position, sun_times, zodiac_sign};
use chrono::{DateTime, FixedOffset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Amsterdam on a July day, queried in local summer time
    let datetime = "2024-07-15T12:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    let latitude = 52.37;
    let longitude = 4.89;

    println!(
        "Almanac for {:.2}°N {:.2}°E on {}",
        latitude,
        longitude,
        datetime.format("%Y-%m-%d")
    );

    let times = sun_times(datetime, latitude, longitude)?;
    println!("\nSun times:");
    println!(
        "  Astronomical dawn:  {}",
        times.astronomical_dawn.format("%H:%M")
    );
    println!(
        "  Nautical dawn:      {}",
        times.nautical_dawn.format("%H:%M")
    );
    println!("  Civil dawn:         {}", times.dawn.format("%H:%M"));
    println!("  Sunrise:            {}", times.sunrise.format("%H:%M"));
    println!(
        "  Golden hour ends:   {}",
        times.golden_hour_end.format("%H:%M")
    );
    println!("  Solar noon:         {}", times.solar_noon.format("%H:%M"));
    println!(
        "  Golden hour starts: {}",
        times.golden_hour_start.format("%H:%M")
    );
    println!("  Sunset:             {}", times.sunset.format("%H:%M"));
    println!("  Civil dusk:         {}", times.dusk.format("%H:%M"));
    println!(
        "  Nautical dusk:      {}",
        times.nautical_dusk.format("%H:%M")
    );
    println!(
        "  Astronomical dusk:  {}",
        times.astronomical_dusk.format("%H:%M")
    );

    let sun = sun_position(datetime, latitude, longitude)?;
    println!(
        "\nSun now:  azimuth {:.2}°, altitude {:.2}°, {} AU away",
        sun.azimuth(),
        sun.altitude(),
        sun.distance()
    );

    let moon = moon_position(datetime, latitude, longitude)?;
    println!(
        "Moon now: azimuth {:.2}°, altitude {:.2}°, {} km away",
        moon.azimuth(),
        moon.altitude(),
        moon.distance()
    );

    let phase = moon_phase(datetime);
    println!(
        "\nMoon phase: {} ({}% illuminated, {:.1} days old)",
        phase.phase, phase.illumination, phase.moon_age
    );
    println!(
        "  Next: {} on {}",
        phase.next_phase,
        phase.next_phase_date.format("%Y-%m-%d")
    );

    let sign = zodiac_sign(datetime);
    println!(
        "\nZodiac sign: {} ({} to {})",
        sign.sign,
        sign.start_date.format("%B %-d"),
        sign.end_date.format("%B %-d")
    );

    Ok(())
}
