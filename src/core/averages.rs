use std::collections::{BTreeMap, HashMap};

use super::Review;

/// Mean score per attribute for one hotel, rounded to one decimal.
pub type AttributeAverages = BTreeMap<String, f64>;

/// Per-hotel historical averages over a whole dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelAverages {
    hotels: HashMap<String, AttributeAverages>,
}

impl HotelAverages {
    pub fn get(&self, hotel: &str) -> Option<&AttributeAverages> {
        self.hotels.get(hotel)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

#[cfg(test)]
impl HotelAverages {
    pub fn average(&self, hotel: &str, attribute: &str) -> Option<f64> {
        self.get(hotel)?.get(attribute).copied()
    }
}

/// Group reviews by hotel and average every numeric attribute.
///
/// Non-numeric values are left out of the mean rather than counted as zero;
/// an attribute with no numeric value at all is absent for that hotel.
pub fn aggregate(reviews: &[Review]) -> HotelAverages {
    let mut samples: HashMap<&str, BTreeMap<&str, Vec<f64>>> = HashMap::new();

    for review in reviews {
        let hotel = samples.entry(review.hotel.as_str()).or_default();
        for (attribute, value) in &review.ratings {
            if let Some(score) = value.as_number() {
                hotel.entry(attribute.as_str()).or_default().push(score);
            }
        }
    }

    let hotels = samples
        .into_iter()
        .map(|(hotel, attributes)| {
            let averages = attributes
                .into_iter()
                .map(|(attribute, mut scores)| {
                    (attribute.to_string(), round_one_decimal(mean(&mut scores)))
                })
                .collect();
            (hotel.to_string(), averages)
        })
        .collect();

    HotelAverages { hotels }
}

/// Sums in sorted order so the result does not depend on row order.
fn mean(scores: &mut [f64]) -> f64 {
    scores.sort_by(f64::total_cmp);
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Ties go to the even digit, so 4.25 becomes 4.2.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
