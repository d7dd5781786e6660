//! Weather-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("No weather data available")]
    NoData,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Weather API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Weather lookup failed for {location}: {source}")]
    Provider {
        location: String,
        #[source]
        source: Box<WeatherError>,
    },
}

impl WeatherError {
    /// Attach the location name a failure occurred for. `NoData` is left
    /// as-is; it is a per-location display state, not a provider fault.
    pub fn for_location(self, location: &str) -> Self {
        match self {
            Self::NoData => Self::NoData,
            other => Self::Provider {
                location: location.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoData => "Weather data unavailable.".to_string(),
            Self::Network(_) => "Weather service unreachable. Check your connection.".to_string(),
            Self::Parse(_) => "Weather service returned an unexpected response.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "Weather service is experiencing issues. Please try again later.".to_string()
            }
            Self::Api { .. } => "Weather request failed. Please try again.".to_string(),
            Self::Provider { location, source } => {
                format!("Error fetching weather for {}: {}", location, source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_message() {
        assert_eq!(WeatherError::NoData.user_message(), "Weather data unavailable.");
    }

    #[test]
    fn test_for_location_wraps_api_error() {
        let err = WeatherError::Api {
            status: 503,
            message: "unavailable".into(),
        }
        .for_location("Lincoln Park");
        assert!(matches!(err, WeatherError::Provider { .. }));
        assert!(err.user_message().contains("Lincoln Park"));
    }

    #[test]
    fn test_for_location_leaves_no_data() {
        let err = WeatherError::NoData.for_location("Lincoln Park");
        assert!(matches!(err, WeatherError::NoData));
    }
}
