//! Projection of location records to map-marker descriptors.
//!
//! The map widget itself is an external collaborator; this module only
//! produces the minimal data it needs to place one labeled pin per location.

use crate::store::LocationRecord;

/// The data an external map widget needs to place one labeled pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    /// Fixed three-line popup: name, address, court count
    pub popup_html: String,
    /// Bare location name
    pub tooltip: String,
}

/// Project records to marker descriptors. Pure; no side effects.
pub fn to_markers<'a, I>(records: I) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    records
        .into_iter()
        .map(|r| Marker {
            latitude: r.latitude,
            longitude: r.longitude,
            popup_html: format!(
                "<b>Park Name:</b> {}<br><b>Address:</b> {}<br><b>Court Count:</b> {}",
                r.name, r.address, r.count
            ),
            tooltip: r.name.clone(),
        })
        .collect()
}
