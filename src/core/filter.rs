use std::collections::HashSet;

use super::Review;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelSelection {
    /// One representative review per hotel.
    All,
    Named(String),
}

/// Which reviews to show, and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFilter {
    pub topic: String,
    pub hotel: HotelSelection,
    pub max_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    Reviews(Vec<&'a Review>),
    NoResults,
}

impl<'a> Selection<'a> {
    pub fn reviews(&self) -> &[&'a Review] {
        match self {
            Selection::Reviews(reviews) => reviews,
            Selection::NoResults => &[],
        }
    }
}

impl ReviewFilter {
    /// `max_count` is clamped into `1..=limit`.
    pub fn new(topic: impl Into<String>, hotel: HotelSelection, max_count: usize, limit: usize) -> Self {
        Self {
            topic: topic.into(),
            hotel,
            max_count: max_count.clamp(1, limit.max(1)),
        }
    }

    pub fn select<'a>(&self, reviews: &'a [Review]) -> Selection<'a> {
        let on_topic = reviews.iter().filter(|r| r.topic == self.topic);

        let selected: Vec<&Review> = match &self.hotel {
            HotelSelection::Named(hotel) => on_topic
                .filter(|r| &r.hotel == hotel)
                .take(self.max_count)
                .collect(),
            HotelSelection::All => {
                let mut seen = HashSet::new();
                on_topic
                    .filter(|r| seen.insert(r.hotel.as_str()))
                    .take(self.max_count)
                    .collect()
            }
        };

        if selected.is_empty() {
            Selection::NoResults
        } else {
            Selection::Reviews(selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RatingRecord;

    fn review(hotel: &str, topic: &str, text: &str) -> Review {
        Review {
            hotel: hotel.to_string(),
            text: text.to_string(),
            topic: topic.to_string(),
            ratings: RatingRecord::new(),
        }
    }

    fn texts<'a>(selection: &Selection<'a>) -> Vec<&'a str> {
        selection.reviews().iter().map(|r| r.text.as_str()).collect()
    }

    fn sample() -> Vec<Review> {
        vec![
            review("A", "staff", "a1"),
            review("B", "staff", "b1"),
            review("A", "staff", "a2"),
            review("C", "pool", "c1"),
            review("C", "staff", "c2"),
            review("B", "staff", "b2"),
            review("C", "staff", "c3"),
        ]
    }

    #[test]
    fn all_hotels_is_one_per_hotel() {
        let reviews = sample();
        let filter = ReviewFilter::new("staff", HotelSelection::All, 5, 20);
        let selection = filter.select(&reviews);
        assert_eq!(texts(&selection), vec!["a1", "b1", "c2"]);
    }

    #[test]
    fn all_hotels_three_hotels_two_reviews_each() {
        let reviews = vec![
            review("X", "t", "x1"),
            review("X", "t", "x2"),
            review("Y", "t", "y1"),
            review("Y", "t", "y2"),
            review("Z", "t", "z1"),
            review("Z", "t", "z2"),
        ];
        let filter = ReviewFilter::new("t", HotelSelection::All, 5, 20);
        assert_eq!(filter.select(&reviews).reviews().len(), 3);
    }

    #[test]
    fn all_hotels_truncates_after_dedup() {
        let reviews = sample();
        let filter = ReviewFilter::new("staff", HotelSelection::All, 2, 20);
        assert_eq!(texts(&filter.select(&reviews)), vec!["a1", "b1"]);
    }

    #[test]
    fn named_hotel_keeps_order_and_truncates() {
        let reviews = sample();
        let filter = ReviewFilter::new("staff", HotelSelection::Named("C".into()), 5, 20);
        assert_eq!(texts(&filter.select(&reviews)), vec!["c2", "c3"]);

        let filter = ReviewFilter::new("staff", HotelSelection::Named("A".into()), 1, 20);
        assert_eq!(texts(&filter.select(&reviews)), vec!["a1"]);
    }

    #[test]
    fn no_match_is_explicit() {
        let reviews = sample();
        let filter = ReviewFilter::new("spa", HotelSelection::All, 5, 20);
        assert_eq!(filter.select(&reviews), Selection::NoResults);

        let filter = ReviewFilter::new("pool", HotelSelection::Named("A".into()), 5, 20);
        assert_eq!(filter.select(&reviews), Selection::NoResults);
        assert!(filter.select(&reviews).reviews().is_empty());
    }

    #[test]
    fn max_count_is_clamped() {
        assert_eq!(ReviewFilter::new("t", HotelSelection::All, 0, 20).max_count, 1);
        assert_eq!(ReviewFilter::new("t", HotelSelection::All, 99, 20).max_count, 20);
        assert_eq!(ReviewFilter::new("t", HotelSelection::All, 7, 20).max_count, 7);
    }

    #[test]
    fn unique_hotels_never_exceed_count() {
        let reviews: Vec<Review> = (0..30)
            .map(|i| review(&format!("H{}", i % 12), "t", &format!("r{i}")))
            .collect();
        for n in 1..=20 {
            let filter = ReviewFilter::new("t", HotelSelection::All, n, 20);
            let selected = filter.select(&reviews);
            let hotels: HashSet<&str> = selected.reviews().iter().map(|r| r.hotel.as_str()).collect();
            assert!(selected.reviews().len() <= n);
            assert_eq!(hotels.len(), selected.reviews().len());
        }
    }
}
