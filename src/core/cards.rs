use super::compare::{self, Comparison, OVERALL};
use super::filter::Selection;
use super::stars::{self, StarDisplay};
use super::{Dataset, Review};

/// A rating line on a review card.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedAttribute {
    pub key: String,
    pub label: String,
    pub emoji: &'static str,
    pub stars: StarDisplay,
}

/// Everything needed to draw one review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub hotel: String,
    pub text: String,
    /// `overall` first, then alphabetical. Empty when the review has no ratings.
    pub ratings: Vec<RatedAttribute>,
    pub comparison: Comparison,
}

pub fn attribute_emoji(key: &str) -> &'static str {
    match key {
        "service" => "🛎️",
        "cleanliness" => "🧼",
        "overall" => "⭐",
        "value" => "💰",
        "location" => "📍",
        "sleep quality" => "💤",
        "rooms" => "🚪",
        _ => "🔹",
    }
}

/// `sleep quality` → `Sleep quality`.
pub fn attribute_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn rated_attributes(review: &Review) -> Vec<RatedAttribute> {
    let overall = review.ratings.get_key_value(OVERALL);
    let rest = review.ratings.iter().filter(|(key, _)| key.as_str() != OVERALL);

    overall
        .into_iter()
        .chain(rest)
        .map(|(key, value)| RatedAttribute {
            key: key.clone(),
            label: attribute_label(key),
            emoji: attribute_emoji(key),
            stars: stars::render_stars(value),
        })
        .collect()
}

pub fn build_card(dataset: &Dataset, review: &Review) -> ReviewCard {
    ReviewCard {
        hotel: review.hotel.clone(),
        text: review.text.clone(),
        ratings: rated_attributes(review),
        comparison: compare::compare(&review.ratings, dataset.averages.get(&review.hotel)),
    }
}

pub fn build_cards(dataset: &Dataset, selection: &Selection<'_>) -> Vec<ReviewCard> {
    selection
        .reviews()
        .iter()
        .map(|review| build_card(dataset, review))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReviewRow;
    use crate::core::filter::{HotelSelection, ReviewFilter};

    fn dataset(rows: &[(&str, &str, &str)]) -> Dataset {
        let rows = rows
            .iter()
            .map(|(name, topic, ratings)| ReviewRow {
                name: Some(name.to_string()),
                text: Some(format!("{name} was fine")),
                topic_label: Some(topic.to_string()),
                ratings: Some(ratings.to_string()),
            })
            .collect();
        Dataset::from_rows(rows, Vec::new(), 0)
    }

    #[test]
    fn labels_and_emoji() {
        assert_eq!(attribute_label("sleep quality"), "Sleep quality");
        assert_eq!(attribute_label("overall"), "Overall");
        assert_eq!(attribute_label(""), "");
        assert_eq!(attribute_emoji("rooms"), "🚪");
        assert_eq!(attribute_emoji("check in / front desk"), "🔹");
    }

    #[test]
    fn overall_listed_first() {
        let data = dataset(&[("A", "t", "{'value': 4, 'overall': 3.5, 'cleanliness': 5}")]);
        let card = build_card(&data, &data.reviews[0]);
        let keys: Vec<&str> = card.ratings.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["overall", "cleanliness", "value"]);
        assert_eq!(card.ratings[0].stars.to_string(), "★★★⯪☆ (3.5)");
    }

    #[test]
    fn unrated_review_card() {
        let data = dataset(&[("A", "t", "no ratings here")]);
        let card = build_card(&data, &data.reviews[0]);
        assert!(card.ratings.is_empty());
        assert_eq!(card.comparison, Comparison::NoComparableData);
    }

    #[test]
    fn non_numeric_rating_shows_na() {
        let data = dataset(&[("A", "t", "{'overall': 'excellent', 'service': 4}")]);
        let card = build_card(&data, &data.reviews[0]);
        assert_eq!(card.ratings[0].stars, StarDisplay::NotAvailable);
        match &card.comparison {
            Comparison::Compared(result) => {
                assert!(result.overall.is_none());
                assert_eq!(result.others[0].attribute, "service");
            }
            Comparison::NoComparableData => panic!("service should be comparable"),
        }
    }

    #[test]
    fn cards_compare_against_hotel_average() {
        let data = dataset(&[
            ("A", "t", "{'overall': 5}"),
            ("A", "t", "{'overall': 3}"),
            ("B", "t", "{'overall': 2}"),
        ]);
        let filter = ReviewFilter::new("t", HotelSelection::All, 5, 20);
        let cards = build_cards(&data, &filter.select(&data.reviews));
        assert_eq!(cards.len(), 2);

        let Comparison::Compared(a) = &cards[0].comparison else {
            panic!("hotel A should be comparable");
        };
        let overall = a.overall.as_ref().unwrap();
        assert_eq!(overall.hotel_average, 4.0);
        assert_eq!(overall.excess, 1.0);

        let Comparison::Compared(b) = &cards[1].comparison else {
            panic!("hotel B should be comparable");
        };
        assert_eq!(b.overall.as_ref().unwrap().excess, 0.0);
    }

    #[test]
    fn no_results_gives_no_cards() {
        let data = dataset(&[("A", "t", "{}")]);
        assert!(build_cards(&data, &Selection::NoResults).is_empty());
    }
}
