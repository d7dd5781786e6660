use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// One hourly observation from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub time_utc: DateTime<Utc>,
    pub temp_c: f64,
    pub humidity_pct: f64,
    pub precip_mm: f64,
}

/// Qualitative condition derived from the latest hourly reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Rainy,
    CloudyOrFoggy,
    LikelyClear,
}

impl Condition {
    /// Classify from the latest reading. Checked in order; precipitation
    /// takes priority over humidity.
    pub fn classify(precip_mm: f64, humidity_pct: f64) -> Self {
        if precip_mm > 0.0 {
            Self::Rainy
        } else if humidity_pct > 85.0 {
            Self::CloudyOrFoggy
        } else {
            Self::LikelyClear
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Rainy => "Rainy",
            Self::CloudyOrFoggy => "Cloudy or foggy",
            Self::LikelyClear => "Likely clear or partly cloudy",
        }
    }
}

/// Convert a Celsius reading to Fahrenheit.
pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Per-location weather enrichment result. Ephemeral; recomputed on every
/// request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub precip_mm_latest: f64,
    pub condition: Condition,
    /// Precipitation summed over the trailing 12-hour window
    pub trailing_precip_mm: f64,
    pub is_wet: bool,
}

impl WeatherSnapshot {
    /// Derive a snapshot from the two fetched windows.
    ///
    /// Pure: no network, no clock. The latest reading is the last sample of
    /// the one-hour window ([`WeatherError::NoData`] when that window is
    /// empty); the wetness verdict sums precipitation over the trailing
    /// twelve-hour window.
    pub fn derive(
        latest_window: &[HourlySample],
        trailing_window: &[HourlySample],
    ) -> Result<Self, WeatherError> {
        let latest = latest_window.last().ok_or(WeatherError::NoData)?;

        let trailing_precip_mm: f64 = trailing_window.iter().map(|s| s.precip_mm).sum();

        Ok(Self {
            temperature_f: celsius_to_fahrenheit(latest.temp_c),
            humidity_pct: latest.humidity_pct,
            precip_mm_latest: latest.precip_mm,
            condition: Condition::classify(latest.precip_mm, latest.humidity_pct),
            trailing_precip_mm,
            is_wet: trailing_precip_mm > 0.0,
        })
    }
}
