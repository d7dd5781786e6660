//! Daylight enrichment for Courtside
//!
//! Computes today's sunset for a location in a fixed timezone and how much
//! daylight remains. Deterministic and pure (no network), so it can run for
//! every filtered record on every render.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use spa::{sunrise_and_set, StdFloatOps, SunriseAndSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SunError {
    #[error("Invalid coordinates: lat={latitude}, lon={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("No sunset on {0} at this latitude")]
    NoSunset(NaiveDate),
}

impl SunError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCoordinates { .. } => {
                "This location has invalid coordinates.".to_string()
            }
            Self::NoSunset(_) => "The sun does not set here today.".to_string(),
        }
    }
}

/// Whole hours and minutes of daylight left, minutes floor-truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
}

/// Per-location daylight result. Ephemeral; recomputed per render.
#[derive(Debug, Clone)]
pub struct DaylightSnapshot {
    /// Sunset in the configured timezone, for the current calendar date
    pub sunset_local: DateTime<Tz>,
    pub has_set: bool,
    /// Present only while the sun is still up
    pub remaining: Option<Remaining>,
}

/// Compute the sunset for `date` at the given point and compare against
/// `now_local` in the same timezone.
pub fn compute_daylight(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    now_local: DateTime<Tz>,
    tz: Tz,
) -> Result<DaylightSnapshot, SunError> {
    // Anchor the solar calculation at local noon of the requested date so
    // the returned events belong to that local day.
    let naive_noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
    let utc_noon = match tz.from_local_datetime(&naive_noon).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => naive_noon.and_utc(),
    };

    let sunset_utc = match sunrise_and_set::<StdFloatOps>(utc_noon, latitude, longitude) {
        Ok(SunriseAndSet::Daylight(_sunrise, sunset)) => sunset,
        Ok(SunriseAndSet::PolarDay) | Ok(SunriseAndSet::PolarNight) => {
            return Err(SunError::NoSunset(date));
        }
        Err(_) => {
            return Err(SunError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
    };

    let sunset_local = sunset_utc.with_timezone(&tz);
    let has_set = now_local >= sunset_local;

    let remaining = if has_set {
        None
    } else {
        let secs = (sunset_local - now_local).num_seconds();
        Some(Remaining {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
        })
    };

    Ok(DaylightSnapshot {
        sunset_local,
        has_set,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Chicago;

    const LINCOLN_PARK: (f64, f64) = (41.9, -87.6);

    fn chicago_time(h: u32, m: u32) -> DateTime<Tz> {
        Chicago
            .with_ymd_and_hms(2026, 8, 27, h, m, 0)
            .single()
            .expect("valid local time")
    }

    #[test]
    fn test_morning_has_daylight_remaining() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("date");
        let snap = compute_daylight(
            LINCOLN_PARK.0,
            LINCOLN_PARK.1,
            date,
            chicago_time(8, 0),
            Chicago,
        )
        .expect("compute");

        assert!(!snap.has_set);
        let remaining = snap.remaining.expect("remaining");
        assert!(remaining.hours >= 0);
        assert!(remaining.hours < 24);
        assert!((0..=59).contains(&remaining.minutes));
    }

    #[test]
    fn test_late_night_sun_already_set() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("date");
        let snap = compute_daylight(
            LINCOLN_PARK.0,
            LINCOLN_PARK.1,
            date,
            chicago_time(23, 59),
            Chicago,
        )
        .expect("compute");

        assert!(snap.has_set);
        assert!(snap.remaining.is_none());
    }

    #[test]
    fn test_sunset_lands_in_the_evening() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("date");
        let snap = compute_daylight(
            LINCOLN_PARK.0,
            LINCOLN_PARK.1,
            date,
            chicago_time(8, 0),
            Chicago,
        )
        .expect("compute");

        // Late-August Chicago sunset is roughly 7:30pm local
        use chrono::Timelike;
        assert!((17..=21).contains(&snap.sunset_local.hour()));
        assert_eq!(snap.sunset_local.date_naive(), date);
    }

    #[test]
    fn test_remaining_matches_clock_difference() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("date");
        let now = chicago_time(12, 0);
        let snap = compute_daylight(LINCOLN_PARK.0, LINCOLN_PARK.1, date, now, Chicago)
            .expect("compute");

        let remaining = snap.remaining.expect("remaining");
        let total_minutes = (snap.sunset_local - now).num_minutes();
        assert_eq!(remaining.hours * 60 + remaining.minutes, total_minutes);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("date");
        let err = compute_daylight(120.0, -87.6, date, chicago_time(8, 0), Chicago)
            .expect_err("should fail");
        assert!(matches!(err, SunError::InvalidCoordinates { .. }));
    }
}
