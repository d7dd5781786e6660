//! Loading and validation of the static court-location list.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LocationsError;

/// One tennis-court location entry.
///
/// Records are self-contained and independent; the collection's insertion
/// order is preserved and is the default display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of courts at this location
    pub count: u32,
    /// Free-form category label, e.g. "Public"
    pub facility_type: String,
}

impl LocationRecord {
    /// Validate the required-field schema for a single record.
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must be non-empty".to_string());
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} out of range [-90, 90]", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            ));
        }
        Ok(())
    }
}

/// A record that failed validation during load.
#[derive(Debug, Clone)]
pub struct RecordIssue {
    /// Zero-based index of the entry in the file
    pub index: usize,
    pub reason: String,
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {}: {}", self.index, self.reason)
    }
}

/// The loaded-once, immutable court-location collection.
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
}

impl LocationStore {
    /// Load the location list from a JSON file.
    ///
    /// The whole file must parse as a JSON array (`Malformed` otherwise);
    /// individual entries failing the record schema are collected as
    /// [`RecordIssue`]s and skipped, so one bad entry never discards the
    /// rest of the list.
    pub fn load(path: &Path) -> Result<(Self, Vec<RecordIssue>), LocationsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LocationsError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(LocationsError::Io(e)),
        };

        let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)
            .map_err(|e| LocationsError::Malformed(e.to_string()))?;

        let mut records = Vec::with_capacity(raw.len());
        let mut issues = Vec::new();

        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<LocationRecord>(value) {
                Ok(record) => match record.validate() {
                    Ok(()) => records.push(record),
                    Err(reason) => {
                        tracing::warn!("Skipping location record {}: {}", index, reason);
                        issues.push(RecordIssue { index, reason });
                    }
                },
                Err(e) => {
                    let reason = e.to_string();
                    tracing::warn!("Skipping location record {}: {}", index, reason);
                    issues.push(RecordIssue { index, reason });
                }
            }
        }

        tracing::info!(
            "Loaded {} locations from {} ({} skipped)",
            records.len(),
            path.display(),
            issues.len()
        );

        Ok((Self { records }, issues))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("locations.json");
        let mut f = std::fs::File::create(&path).expect("create file");
        f.write_all(contents.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            r#"[
                {"name": "Lincoln Park", "address": "2045 N Lincoln Park West",
                 "latitude": 41.9, "longitude": -87.6, "count": 4,
                 "facility_type": "Public"},
                {"name": "Grant Park", "address": "331 E Randolph St",
                 "latitude": 41.88, "longitude": -87.62, "count": 12,
                 "facility_type": "Public"}
            ]"#,
        );

        let (store, issues) = LocationStore::load(&path).expect("load");
        assert_eq!(store.len(), 2);
        assert!(issues.is_empty());
        assert_eq!(store.records()[0].name, "Lincoln Park");
        assert_eq!(store.records()[1].count, 12);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");
        let err = LocationStore::load(&path).expect_err("should fail");
        assert!(matches!(err, LocationsError::NotFound(_)));
    }

    #[test]
    fn test_load_unparseable_file_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "{ not json ");
        let err = LocationStore::load(&path).expect_err("should fail");
        assert!(matches!(err, LocationsError::Malformed(_)));
    }

    #[test]
    fn test_load_skips_invalid_records_keeps_valid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            r#"[
                {"name": "Lincoln Park", "address": "2045 N Lincoln Park West",
                 "latitude": 41.9, "longitude": -87.6, "count": 4,
                 "facility_type": "Public"},
                {"name": "Bad Latitude", "address": "x",
                 "latitude": 1000.0, "longitude": -87.6, "count": 1,
                 "facility_type": "Public"},
                {"address": "missing name", "latitude": 41.0,
                 "longitude": -87.0, "count": 2, "facility_type": "Public"}
            ]"#,
        );

        let (store, issues) = LocationStore::load(&path).expect("load");
        assert_eq!(store.len(), 1);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].index, 1);
        assert_eq!(issues[1].index, 2);
    }

    #[test]
    fn test_load_preserves_file_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            r#"[
                {"name": "C", "address": "3", "latitude": 1.0, "longitude": 1.0,
                 "count": 1, "facility_type": "Public"},
                {"name": "A", "address": "1", "latitude": 1.0, "longitude": 1.0,
                 "count": 1, "facility_type": "Public"},
                {"name": "B", "address": "2", "latitude": 1.0, "longitude": 1.0,
                 "count": 1, "facility_type": "Public"}
            ]"#,
        );

        let (store, _) = LocationStore::load(&path).expect("load");
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            r#"[{"name": "  ", "address": "x", "latitude": 0.0,
                 "longitude": 0.0, "count": 0, "facility_type": "Public"}]"#,
        );

        let (store, issues) = LocationStore::load(&path).expect("load");
        assert!(store.is_empty());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].reason.contains("name"));
    }
}
