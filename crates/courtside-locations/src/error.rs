//! Location-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationsError {
    #[error("Location file not found: {0}")]
    NotFound(String),

    #[error("Location file is malformed: {0}")]
    Malformed(String),

    #[error("IO error reading location file: {0}")]
    Io(#[from] std::io::Error),
}

impl LocationsError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(path) => format!("Location file not found at {}", path),
            Self::Malformed(_) => "Location file is malformed. Check its contents.".to_string(),
            Self::Io(_) => "Could not read the location file.".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
}

impl FilterError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPattern(_) => "Invalid pattern.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LocationsError::NotFound("data/locations.json".into());
        assert!(err.user_message().contains("data/locations.json"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = FilterError::InvalidPattern("unclosed group".into());
        assert_eq!(err.user_message(), "Invalid pattern.");
    }
}
