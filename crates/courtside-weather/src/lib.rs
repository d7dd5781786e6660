//! Weather enrichment for Courtside
//!
//! Fetches hourly observations from an Open-Meteo style provider and derives
//! per-location weather snapshots: latest conditions plus a 12-hour trailing
//! precipitation check for court wetness. Fetches are serial and uncached;
//! enrichment runs only on an explicit user request.

pub mod client;
pub mod error;
pub mod types;

pub use client::{check_weather_batch, HourlyClient, WeatherReport};
pub use error::WeatherError;
pub use types::{celsius_to_fahrenheit, Condition, HourlySample, WeatherSnapshot};

/// Lookback for the "latest reading" window, in hours.
pub const LATEST_WINDOW_HOURS: i64 = 1;

/// Lookback for the court-wetness precipitation window, in hours.
pub const TRAILING_WINDOW_HOURS: i64 = 12;
