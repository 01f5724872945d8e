use std::collections::HashSet;

use serde::Deserialize;

/// One row of a hotel location CSV. Unparsable numeric cells decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub is_open: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelLocation {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Merge location sources in order: open hotels only, first of each
/// (name, address) pair wins, entries without coordinates are dropped.
pub fn merge_open_locations(sources: Vec<Vec<LocationRow>>) -> Vec<HotelLocation> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut merged = Vec::new();

    for row in sources.into_iter().flatten() {
        if row.is_open != Some(1.0) {
            continue;
        }
        let Some(name) = row.name.filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        let address = row.address.unwrap_or_default();
        if !seen.insert((name.clone(), address.clone())) {
            continue;
        }
        // Dedup happens first: a later copy with coordinates does not replace
        // an earlier one without.
        let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
            tracing::debug!("Location {name:?} has no coordinates, skipping");
            continue;
        };
        merged.push(HotelLocation {
            name,
            address,
            latitude,
            longitude,
        });
    }

    merged
}
