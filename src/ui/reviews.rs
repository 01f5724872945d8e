use std::sync::Arc;

use dioxus::prelude::*;

use super::filters::ReviewFilters;
use crate::core::Dataset;
use crate::core::cards::{self, ReviewCard, attribute_label};
use crate::core::compare::{AttributeDelta, Comparison};
use crate::core::filter::{HotelSelection, ReviewFilter};
use crate::core::stars::{STAR_SLOTS, format_score};

#[component]
pub fn ReviewsTab(dataset: Signal<Option<Arc<Dataset>>>, limit: usize, initial_count: usize) -> Element {
    let topic = use_signal(String::new);
    let hotel = use_signal(|| HotelSelection::All);
    let max_reviews = use_signal(|| initial_count);

    let Some(data) = dataset() else {
        return rsx! {
            p { style: "color: #666;", "Waiting for the reviews dataset..." }
        };
    };

    let topics = data.topics();
    let hotels = data.hotel_names();

    // A reload can drop the selected topic or hotel.
    let current_topic = if topics.contains(&topic()) {
        topic()
    } else {
        topics.first().cloned().unwrap_or_default()
    };
    let current_hotel = match hotel() {
        HotelSelection::Named(name) if !hotels.contains(&name) => HotelSelection::All,
        other => other,
    };

    let filter = ReviewFilter::new(current_topic.clone(), current_hotel.clone(), max_reviews(), limit);
    let review_cards = cards::build_cards(&data, &filter.select(&data.reviews));

    rsx! {
        ReviewFilters {
            topics,
            hotels,
            current_topic,
            current_hotel,
            topic,
            hotel,
            max_reviews,
            limit,
        }
        if review_cards.is_empty() {
            p { style: "color: #e0b341;", "⚠️ No reviews found." }
        }
        for card in review_cards.iter() {
            ReviewCardView { card: card.clone() }
        }
    }
}

#[component]
fn ReviewCardView(card: ReviewCard) -> Element {
    let box_style = "background: #16213e; padding: 14px; border-radius: 6px;";

    rsx! {
        div { style: "margin-bottom: 16px;",
            div { style: "{box_style} text-align: center; font-size: 20px; font-weight: bold; color: #2e86ab; margin-bottom: 8px;",
                "🏨 {card.hotel}"
            }
            div { style: "display: flex; gap: 12px;",
                div { style: "{box_style} flex: 1.8; line-height: 1.5; color: #ccc;",
                    "{card.text}"
                }
                div { style: "{box_style} flex: 1.3;",
                    p { style: "font-weight: bold; margin-top: 0;", "Ratings:" }
                    if card.ratings.is_empty() {
                        p { style: "color: #666;", "No ratings available." }
                    }
                    for rating in card.ratings.iter() {
                        div { style: "display: flex; justify-content: space-between; margin: 6px 0;",
                            span { "{rating.emoji} {rating.label}" }
                            span { style: "color: #ffd700;", "{rating.stars}" }
                        }
                    }
                }
                div { style: "{box_style} flex: 2;",
                    p { style: "font-weight: bold; margin-top: 0;", "Review vs hotel average" }
                    ComparisonChart { comparison: card.comparison.clone() }
                }
            }
        }
    }
}

/// Stacked horizontal bars: hotel average plus the review's excess over it.
#[component]
fn ComparisonChart(comparison: Comparison) -> Element {
    match comparison {
        Comparison::NoComparableData => rsx! {
            p { style: "color: #666;", "No numeric ratings to compare." }
        },
        Comparison::Compared(result) => rsx! {
            div { style: "display: flex; gap: 12px; font-size: 11px; color: #888; margin-bottom: 6px;",
                span { span { style: "color: #2e86ab;", "■" } " Hotel average" }
                span { span { style: "color: #e0b341;", "■" } " Review above average" }
            }
            for delta in result.iter() {
                ComparisonBar { delta: delta.clone() }
            }
        },
    }
}

fn bar_percent(value: f64) -> f64 {
    (value / STAR_SLOTS as f64 * 100.0).clamp(0.0, 100.0)
}

#[component]
fn ComparisonBar(delta: AttributeDelta) -> Element {
    let label = attribute_label(&delta.attribute);
    let average_width = bar_percent(delta.hotel_average);
    let excess_width = bar_percent(delta.excess).min(100.0 - average_width);
    let average = format_score(delta.hotel_average);
    let review = format_score(delta.review_score);

    rsx! {
        div { style: "margin: 6px 0;",
            div { style: "display: flex; justify-content: space-between; font-size: 12px;",
                span { "{label}" }
                span { style: "color: #888;", "review {review} · avg {average}" }
            }
            div {
                style: "display: flex; height: 12px; background: #0f1626; border-radius: 3px; overflow: hidden;",
                title: "average {average}, review {review}",
                div { style: "width: {average_width:.1}%; background: #2e86ab;" }
                div { style: "width: {excess_width:.1}%; background: #e0b341;" }
            }
        }
    }
}
