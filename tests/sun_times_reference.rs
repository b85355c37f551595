//! Validation of the daily timetable against scenario windows.

use astro_almanac::sun_times;
use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;

#[derive(Debug)]
struct ScenarioRecord {
    datetime: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    location: String,
    sunrise_lo: i64,
    sunrise_hi: i64,
    noon_lo: i64,
    noon_hi: i64,
    sunset_lo: i64,
    sunset_hi: i64,
}

impl ScenarioRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            datetime: record[0].parse()?,
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            location: record[3].to_string(),
            sunrise_lo: record[4].parse()?,
            sunrise_hi: record[5].parse()?,
            noon_lo: record[6].parse()?,
            noon_hi: record[7].parse()?,
            sunset_lo: record[8].parse()?,
            sunset_hi: record[9].parse()?,
        })
    }
}

/// Minutes from the query day's UTC midnight; negative or over 1440 when the
/// event rolls into a neighboring day.
fn minutes_from_day_start(event: &DateTime<Utc>, query: &DateTime<Utc>) -> i64 {
    let day_start = query
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();
    event.signed_duration_since(day_start).num_minutes()
}

#[test]
fn test_scenarios_from_csv() -> Result<(), Box<dyn Error>> {
    let file = File::open("tests/data/sun_times_scenarios.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if !record.is_empty() {
            records.push(ScenarioRecord::from_csv_record(&record)?);
        }
    }

    println!("Loaded {} sun times scenarios", records.len());

    for record in &records {
        let times = sun_times(record.datetime, record.latitude, record.longitude)
            .unwrap_or_else(|e| panic!("{}: {e}", record.location));

        let sunrise = minutes_from_day_start(&times.sunrise, &record.datetime);
        let noon = minutes_from_day_start(&times.solar_noon, &record.datetime);
        let sunset = minutes_from_day_start(&times.sunset, &record.datetime);

        println!(
            "{}: sunrise {sunrise} min, noon {noon} min, sunset {sunset} min",
            record.location
        );

        assert!(
            (record.sunrise_lo..=record.sunrise_hi).contains(&sunrise),
            "{}: sunrise {} outside [{}, {}]",
            record.location,
            sunrise,
            record.sunrise_lo,
            record.sunrise_hi
        );
        assert!(
            (record.noon_lo..=record.noon_hi).contains(&noon),
            "{}: noon {} outside [{}, {}]",
            record.location,
            noon,
            record.noon_lo,
            record.noon_hi
        );
        assert!(
            (record.sunset_lo..=record.sunset_hi).contains(&sunset),
            "{}: sunset {} outside [{}, {}]",
            record.location,
            sunset,
            record.sunset_lo,
            record.sunset_hi
        );
    }

    assert!(!records.is_empty(), "Should have tested some scenarios");
    Ok(())
}

#[test]
fn test_scenario_event_ordering() -> Result<(), Box<dyn Error>> {
    let file = File::open("tests/data/sun_times_scenarios.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    for result in reader.records() {
        let record = ScenarioRecord::from_csv_record(&result?)?;
        let times = sun_times(record.datetime, record.latitude, record.longitude)?;

        // Every scenario is a regular day, so the full dawn-to-dusk chain holds.
        assert!(
            times.astronomical_dawn < times.nautical_dawn,
            "{}",
            record.location
        );
        assert!(times.nautical_dawn < times.dawn, "{}", record.location);
        assert!(times.dawn < times.sunrise, "{}", record.location);
        assert!(
            times.sunrise < times.golden_hour_end,
            "{}",
            record.location
        );
        assert!(
            times.golden_hour_end < times.solar_noon,
            "{}",
            record.location
        );
        assert!(
            times.solar_noon < times.golden_hour_start,
            "{}",
            record.location
        );
        assert!(
            times.golden_hour_start < times.sunset,
            "{}",
            record.location
        );
        assert!(times.sunset < times.dusk, "{}", record.location);
        assert!(times.dusk < times.nautical_dusk, "{}", record.location);
        assert!(
            times.nautical_dusk < times.astronomical_dusk,
            "{}",
            record.location
        );
    }

    Ok(())
}

#[test]
fn test_winter_summer_daylight_contrast() {
    // The same place gains hours of daylight between solstices.
    let winter = sun_times(
        "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        52.09,
        5.12,
    )
    .unwrap();
    let summer = sun_times(
        "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        52.09,
        5.12,
    )
    .unwrap();

    let winter_daylight = winter
        .sunset
        .signed_duration_since(winter.sunrise)
        .num_minutes();
    let summer_daylight = summer
        .sunset
        .signed_duration_since(summer.sunrise)
        .num_minutes();

    assert!(winter_daylight < 9 * 60, "winter {winter_daylight} min");
    assert!(summer_daylight > 16 * 60, "summer {summer_daylight} min");
}
