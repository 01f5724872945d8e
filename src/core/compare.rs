use super::RatingRecord;
use super::averages::AttributeAverages;

pub const OVERALL: &str = "overall";

/// One bar of the review-vs-average chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDelta {
    pub attribute: String,
    pub review_score: f64,
    pub hotel_average: f64,
    /// `max(0, review_score - hotel_average)`.
    pub excess: f64,
}

impl AttributeDelta {
    fn new(attribute: &str, review_score: f64, hotel_average: f64) -> Self {
        Self {
            attribute: attribute.to_string(),
            review_score,
            hotel_average,
            excess: (review_score - hotel_average).max(0.0),
        }
    }
}

/// Shared numeric attributes of a review and its hotel, `overall` kept apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub overall: Option<AttributeDelta>,
    /// Alphabetical by attribute name.
    pub others: Vec<AttributeDelta>,
}

impl ComparisonResult {
    /// `overall` first, then the rest alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDelta> {
        self.overall.iter().chain(self.others.iter())
    }
}

#[cfg(test)]
impl ComparisonResult {
    pub fn len(&self) -> usize {
        self.others.len() + usize::from(self.overall.is_some())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Compared(ComparisonResult),
    /// The review and the hotel share no numeric attribute.
    NoComparableData,
}

/// Compare one review against its hotel's averages.
///
/// Negative review scores are not charted.
pub fn compare(record: &RatingRecord, averages: Option<&AttributeAverages>) -> Comparison {
    let Some(averages) = averages else {
        return Comparison::NoComparableData;
    };

    let mut overall = None;
    let mut others = Vec::new();
    // RatingRecord is a BTreeMap, so iteration is already alphabetical.
    for (attribute, value) in record {
        let (Some(score), Some(&average)) = (value.as_number(), averages.get(attribute)) else {
            continue;
        };
        if score < 0.0 || !average.is_finite() {
            continue;
        }
        let delta = AttributeDelta::new(attribute, score, average);
        if attribute == OVERALL {
            overall = Some(delta);
        } else {
            others.push(delta);
        }
    }

    if overall.is_none() && others.is_empty() {
        Comparison::NoComparableData
    } else {
        Comparison::Compared(ComparisonResult { overall, others })
    }
}
