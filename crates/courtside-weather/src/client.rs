//! Hourly weather provider client (Open-Meteo style API).

use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use courtside_locations::LocationRecord;

use crate::error::WeatherError;
use crate::types::{HourlySample, WeatherSnapshot};
use crate::{LATEST_WINDOW_HOURS, TRAILING_WINDOW_HOURS};

const HOUR_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parallel-array hourly payload as returned by the provider.
#[derive(Debug, Deserialize)]
struct HourlyResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<f64>>,
    precipitation: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct HourlyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HourlyClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch hourly observations for a point over a UTC time range.
    ///
    /// Returns chronologically ordered samples; hours the provider has no
    /// reading for (JSON nulls) are dropped.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> Result<Vec<HourlySample>, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}\
             &hourly=temperature_2m,relative_humidity_2m,precipitation\
             &start_hour={}&end_hour={}&timezone=UTC",
            self.base_url,
            latitude,
            longitude,
            start_utc.format(HOUR_FORMAT),
            end_utc.format(HOUR_FORMAT),
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: HourlyResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        parse_samples(body.hourly)
    }

    /// Enrich one location: latest hourly reading plus the trailing
    /// precipitation window, fetched serially, then derived purely.
    pub async fn enrich(
        &self,
        record: &LocationRecord,
        now_utc: DateTime<Utc>,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let latest_window = self
            .fetch_hourly(
                record.latitude,
                record.longitude,
                now_utc - ChronoDuration::hours(LATEST_WINDOW_HOURS),
                now_utc,
            )
            .await?;

        let trailing_window = self
            .fetch_hourly(
                record.latitude,
                record.longitude,
                now_utc - ChronoDuration::hours(TRAILING_WINDOW_HOURS),
                now_utc,
            )
            .await?;

        WeatherSnapshot::derive(&latest_window, &trailing_window)
    }
}

fn parse_samples(block: HourlyBlock) -> Result<Vec<HourlySample>, WeatherError> {
    let mut samples = Vec::with_capacity(block.time.len());

    for (i, raw_time) in block.time.iter().enumerate() {
        let time_utc = NaiveDateTime::parse_from_str(raw_time, HOUR_FORMAT)
            .map_err(|e| WeatherError::Parse(format!("bad time {raw_time:?}: {e}")))?
            .and_utc();

        let (Some(temp_c), Some(humidity_pct), Some(precip_mm)) = (
            block.temperature_2m.get(i).copied().flatten(),
            block.relative_humidity_2m.get(i).copied().flatten(),
            block.precipitation.get(i).copied().flatten(),
        ) else {
            continue;
        };

        samples.push(HourlySample {
            time_utc,
            temp_c,
            humidity_pct,
            precip_mm,
        });
    }

    Ok(samples)
}

/// Outcome of enriching one location within a batch.
#[derive(Debug)]
pub struct WeatherReport<'a> {
    pub record: &'a LocationRecord,
    pub result: Result<WeatherSnapshot, WeatherError>,
}

/// Check weather for every filtered location, serially and in order.
///
/// One location's failure never aborts the rest: each failure is tagged with
/// the location name, logged, and the batch moves on. No retries, no
/// concurrent requests, no caching.
pub async fn check_weather_batch<'a>(
    client: &HourlyClient,
    records: &[&'a LocationRecord],
    now_utc: DateTime<Utc>,
) -> Vec<WeatherReport<'a>> {
    let mut reports = Vec::with_capacity(records.len());

    for record in records {
        let result = client
            .enrich(record, now_utc)
            .await
            .map_err(|e| e.for_location(&record.name));

        if let Err(e) = &result {
            tracing::warn!("Weather check failed for {}: {}", record.name, e);
        }

        reports.push(WeatherReport { record, result });
    }

    reports
}
