pub mod averages;
pub mod cards;
pub mod compare;
pub mod filter;
pub mod locations;
pub mod pipeline;
pub mod ratings;
pub mod stars;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use averages::HotelAverages;
use locations::{HotelLocation, LocationRow};

/// Parsed ratings of one review, keyed by lowercase attribute name.
pub type RatingRecord = BTreeMap<String, RatingValue>;

/// A single rating value as it appeared in the source data.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl RatingValue {
    /// Numeric view of the value. Numeric strings count, everything else is missing.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            RatingValue::Number(n) => *n,
            RatingValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RatingValue::Bool(_) | RatingValue::Null => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// One row of the reviews CSV. Extra columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub topic_label: Option<String>,
    #[serde(default)]
    pub ratings: Option<String>,
}

/// A review with its ratings parsed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub hotel: String,
    pub text: String,
    pub topic: String,
    pub ratings: RatingRecord,
}

impl Review {
    /// Build a review from a raw row. Rows without a hotel name are rejected.
    pub fn from_row(row: ReviewRow) -> Option<Self> {
        let hotel = row.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;
        Some(Self {
            hotel,
            text: row.text.unwrap_or_default(),
            topic: row.topic_label.map(|t| t.trim().to_string()).unwrap_or_default(),
            ratings: ratings::parse_ratings(row.ratings.as_deref()),
        })
    }
}

/// Everything the dashboard shows, computed once per load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub reviews: Vec<Review>,
    pub averages: HotelAverages,
    pub locations: Vec<HotelLocation>,
    /// Review rows dropped because they were undecodable or had no hotel name.
    pub skipped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn from_rows(
        rows: Vec<ReviewRow>,
        location_sources: Vec<Vec<LocationRow>>,
        undecodable_rows: usize,
    ) -> Self {
        let total = rows.len();
        let reviews: Vec<Review> = rows.into_iter().filter_map(Review::from_row).collect();
        let skipped_rows = undecodable_rows + (total - reviews.len());
        let averages = averages::aggregate(&reviews);
        let locations = locations::merge_open_locations(location_sources);

        tracing::info!(
            "Dataset built: {} reviews, {} hotels, {} locations, {skipped_rows} rows skipped",
            reviews.len(),
            averages.len(),
            locations.len()
        );

        Self {
            reviews,
            averages,
            locations,
            skipped_rows,
            loaded_at: Utc::now(),
        }
    }

    /// Distinct non-empty topic labels in first-seen order.
    pub fn topics(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.reviews
            .iter()
            .filter(|r| !r.topic.is_empty())
            .filter(|r| seen.insert(r.topic.as_str()))
            .map(|r| r.topic.clone())
            .collect()
    }

    /// Distinct hotel names, sorted.
    pub fn hotel_names(&self) -> Vec<String> {
        self.reviews
            .iter()
            .map(|r| r.hotel.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
