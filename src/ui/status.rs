use std::sync::Arc;

use dioxus::prelude::*;

use super::LoadStatus;
use crate::core::Dataset;

#[component]
pub fn DatasetStatus(dataset: Signal<Option<Arc<Dataset>>>, status: Signal<LoadStatus>) -> Element {
    let summary = dataset.read().as_ref().map(|data| {
        format!(
            "{} reviews · {} hotels · {} locations · loaded {}",
            data.reviews.len(),
            data.averages.len(),
            data.locations.len(),
            data.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    });
    let skipped = dataset.read().as_ref().map_or(0, |data| data.skipped_rows);

    rsx! {
        div { style: "background: #16213e; padding: 8px 12px; border-radius: 4px; font-size: 13px;",
            match &*status.read() {
                LoadStatus::Loading => rsx! {
                    span { style: "color: #888;", "⏳ Loading datasets..." }
                },
                LoadStatus::Ready => rsx! {},
                LoadStatus::Failed(message) => rsx! {
                    span { style: "color: #e07a5f;", "⚠️ Load failed: {message}" }
                },
            }
            if let Some(summary) = summary {
                div { style: "color: #aaa;", "{summary}" }
            }
            if skipped > 0 {
                div { style: "color: #888; font-size: 11px;", "{skipped} review rows skipped" }
            }
        }
    }
}
