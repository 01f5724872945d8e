use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::Dataset;

#[component]
pub fn LocationTable(dataset: Signal<Option<Arc<Dataset>>>) -> Element {
    let Some(data) = dataset() else {
        return rsx! {
            p { style: "color: #666;", "Waiting for the location datasets..." }
        };
    };
    let cell = "padding: 4px 8px; border-bottom: 1px solid #333;";

    rsx! {
        div {
            h2 { style: "color: #2e86ab;", "🗺️ Open hotels in California ({data.locations.len()})" }
            if data.locations.is_empty() {
                p { style: "color: #666;", "No open hotel locations loaded." }
            }
            div { style: "max-height: 75vh; overflow-y: auto;",
                table { style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                    thead {
                        tr { style: "text-align: left; color: #888;",
                            th { style: cell, "Hotel" }
                            th { style: cell, "Address" }
                            th { style: cell, "Latitude" }
                            th { style: cell, "Longitude" }
                        }
                    }
                    tbody {
                        for location in data.locations.iter() {
                            tr {
                                td { style: cell, "🏨 {location.name}" }
                                td { style: "{cell} color: #aaa;", "{location.address}" }
                                td { style: cell, "{location.latitude:.4}" }
                                td { style: cell, "{location.longitude:.4}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
