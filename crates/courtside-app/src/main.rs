use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;

use courtside_core::Config;
use courtside_locations::{filter, to_markers, LocationStore};
use courtside_sun::compute_daylight;
use courtside_weather::{check_weather_batch, HourlyClient, WeatherReport};

mod report;

struct CliArgs {
    pattern: String,
    check_weather: bool,
}

fn parse_args() -> CliArgs {
    let mut pattern = String::new();
    let mut check_weather = false;

    for arg in std::env::args().skip(1) {
        if arg == "--weather" {
            check_weather = true;
        } else if pattern.is_empty() {
            pattern = arg;
        }
    }

    CliArgs {
        pattern,
        check_weather,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    courtside_core::init()?;

    let (config, _validation) = match Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = courtside_core::AppError::Other(e);
            tracing::error!("{}", err);
            eprintln!("{}", err.user_message());
            return Ok(());
        }
    };

    let args = parse_args();

    // Missing or unreadable location file degrades to an empty working set
    // with a visible error; it never aborts the session.
    let (store, issues) = match LocationStore::load(&config.locations_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", e.user_message());
            (LocationStore::default(), Vec::new())
        }
    };
    for issue in &issues {
        eprintln!("Skipped invalid {}", issue);
    }

    let tz: Tz = match config.timezone.parse() {
        Ok(tz) => tz,
        Err(_) => {
            eprintln!(
                "Unknown timezone {:?}, falling back to America/Chicago",
                config.timezone
            );
            chrono_tz::America::Chicago
        }
    };

    println!("Chicagoland Area Tennis Courts");
    println!();

    // Invalid pattern shows an error and an empty view, never "all records".
    let filtered = match filter(store.records(), &args.pattern) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{}", e.user_message());
            Vec::new()
        }
    };
    println!("Showing {} of {} locations", filtered.len(), store.len());

    let markers = to_markers(filtered.iter().copied());
    println!(
        "Map: {} markers, centered at ({}, {}), zoom {}",
        markers.len(),
        config.map.center_latitude,
        config.map.center_longitude,
        config.map.zoom
    );
    for marker in &markers {
        tracing::debug!(
            "Marker {} at ({}, {})",
            marker.tooltip,
            marker.latitude,
            marker.longitude
        );
    }
    println!();

    // Weather is an explicit, expensive request: one serial provider call
    // pair per location, no caching.
    let weather_reports: Option<Vec<WeatherReport<'_>>> = if args.check_weather {
        let client = HourlyClient::new(
            &config.weather.base_url,
            Duration::from_secs(config.weather.timeout_secs),
        )?;
        Some(check_weather_batch(&client, &filtered, Utc::now()).await)
    } else {
        None
    };

    println!("Location List");
    let now_local = Utc::now().with_timezone(&tz);
    let today = now_local.date_naive();

    for (i, record) in filtered.iter().enumerate() {
        let weather = weather_reports.as_ref().map(|reports| &reports[i].result);
        let daylight = compute_daylight(
            record.latitude,
            record.longitude,
            today,
            now_local,
            tz,
        );

        for line in report::render_location(record, weather, Some(&daylight)) {
            println!("{}", line);
        }
    }

    Ok(())
}
