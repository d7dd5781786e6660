//! Presentation formatting: snapshots in, display lines out.
//!
//! Pure functions so the text blocks can be tested without a network or a
//! display harness. Line order is fixed: name, address, count and type, then
//! the weather block when present, then the daylight block, then a trailing
//! separator.

use courtside_locations::LocationRecord;
use courtside_sun::{DaylightSnapshot, SunError};
use courtside_weather::{WeatherError, WeatherSnapshot};

pub const SEPARATOR: &str = "---";

/// The header lines every location block starts with.
pub fn location_lines(record: &LocationRecord) -> Vec<String> {
    vec![
        format!("Park Name: {}", record.name),
        format!("Address: {}", record.address),
        format!(
            "Court Count: {} | Type: {}",
            record.count, record.facility_type
        ),
    ]
}

/// Weather block for one location.
pub fn weather_lines(record: &LocationRecord, snapshot: &WeatherSnapshot) -> Vec<String> {
    let wetness = if snapshot.is_wet {
        format!(
            "It rained {:.2} mm in the last 12 hours. The court may be wet.",
            snapshot.trailing_precip_mm
        )
    } else {
        "No rain recorded in the last 12 hours.".to_string()
    };

    vec![
        format!("Weather Report for {}", record.name),
        format!("Temperature: {:.1}\u{b0}F", snapshot.temperature_f),
        format!("Humidity: {:.0}%", snapshot.humidity_pct),
        format!("Condition: {}", snapshot.condition.description()),
        "Court Wetness Check:".to_string(),
        wetness,
    ]
}

/// Daylight block for one location.
pub fn daylight_lines(snapshot: &DaylightSnapshot) -> Vec<String> {
    let sunset = snapshot.sunset_local.format("%I:%M %p");
    match snapshot.remaining {
        Some(remaining) => vec![
            format!("Sunset at: {}", sunset),
            format!(
                "Daylight remaining: {}h {}m",
                remaining.hours, remaining.minutes
            ),
        ],
        None => vec![format!("Sun has already set at: {}", sunset)],
    }
}

/// One full display block for a location, with optional enrichments and the
/// trailing separator. Enrichment failures render as inline message lines;
/// they never suppress the rest of the block.
pub fn render_location(
    record: &LocationRecord,
    weather: Option<&Result<WeatherSnapshot, WeatherError>>,
    daylight: Option<&Result<DaylightSnapshot, SunError>>,
) -> Vec<String> {
    let mut lines = location_lines(record);

    match weather {
        Some(Ok(snapshot)) => lines.extend(weather_lines(record, snapshot)),
        Some(Err(e)) => lines.push(e.user_message()),
        None => {}
    }

    match daylight {
        Some(Ok(snapshot)) => lines.extend(daylight_lines(snapshot)),
        Some(Err(e)) => lines.push(e.user_message()),
        None => {}
    }

    lines.push(SEPARATOR.to_string());
    lines
}
