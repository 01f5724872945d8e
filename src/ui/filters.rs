use dioxus::prelude::*;

use crate::core::filter::HotelSelection;

/// Option value of the "All hotels" entry in the hotel selector.
const ALL_HOTELS: &str = "__all__";

fn hotel_value(selection: &HotelSelection) -> &str {
    match selection {
        HotelSelection::All => ALL_HOTELS,
        HotelSelection::Named(name) => name,
    }
}

fn parse_hotel_value(value: String) -> HotelSelection {
    if value == ALL_HOTELS {
        HotelSelection::All
    } else {
        HotelSelection::Named(value)
    }
}

#[component]
pub fn ReviewFilters(
    topics: Vec<String>,
    hotels: Vec<String>,
    current_topic: String,
    current_hotel: HotelSelection,
    topic: Signal<String>,
    hotel: Signal<HotelSelection>,
    max_reviews: Signal<usize>,
    limit: usize,
) -> Element {
    let mut topic = topic;
    let mut hotel = hotel;
    let mut max_reviews = max_reviews;
    let selected_hotel = hotel_value(&current_hotel).to_string();
    let label_style = "display: block; font-size: 12px; color: #888; margin-bottom: 4px;";
    let input_style = "background: #16213e; color: #e0e0e0; border: 1px solid #333; padding: 4px; border-radius: 4px; min-width: 220px;";

    rsx! {
        div { style: "display: flex; gap: 24px; align-items: flex-end; margin-bottom: 12px;",
            div {
                label { style: label_style, "📌 Topic" }
                select {
                    style: input_style,
                    onchange: move |evt: FormEvent| topic.set(evt.value()),
                    for t in topics.iter() {
                        option { value: "{t}", selected: *t == current_topic, "{t}" }
                    }
                }
            }
            div {
                label { style: label_style, "🏩 Hotel" }
                select {
                    style: input_style,
                    onchange: move |evt: FormEvent| hotel.set(parse_hotel_value(evt.value())),
                    option { value: ALL_HOTELS, selected: selected_hotel == ALL_HOTELS, "All hotels" }
                    for h in hotels.iter() {
                        option { value: "{h}", selected: *h == selected_hotel, "{h}" }
                    }
                }
            }
            div {
                label { style: label_style, "📊 Max reviews: {max_reviews}" }
                input {
                    r#type: "range",
                    min: "1",
                    max: "{limit}",
                    value: "{max_reviews}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(n) = evt.value().parse::<usize>() {
                            max_reviews.set(n);
                        }
                    },
                }
            }
        }
    }
}
