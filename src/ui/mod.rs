pub mod filters;
pub mod locations;
pub mod reviews;
pub mod status;

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::Dataset;
use crate::core::pipeline::{LoadOutput, LoadRequest};

/// Shared with the Dioxus app through the launch context.
#[derive(Clone)]
pub struct UiContext {
    pub config: Config,
    outputs: Arc<Mutex<Option<mpsc::UnboundedReceiver<LoadOutput>>>>,
    reload: mpsc::UnboundedSender<LoadRequest>,
}

impl UiContext {
    pub fn new(
        config: Config,
        outputs: mpsc::UnboundedReceiver<LoadOutput>,
        reload: mpsc::UnboundedSender<LoadRequest>,
    ) -> Self {
        Self {
            config,
            outputs: Arc::new(Mutex::new(Some(outputs))),
            reload,
        }
    }

    /// Take the loader receiver (can only be called once).
    fn take_outputs(&self) -> Option<mpsc::UnboundedReceiver<LoadOutput>> {
        self.outputs.lock().ok()?.take()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Reviews,
    Locations,
}

/// Root UI component.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<UiContext>();
    let mut dataset = use_signal(|| None::<Arc<Dataset>>);
    let mut status = use_signal(|| LoadStatus::Loading);
    let mut tab = use_signal(|| Tab::Reviews);

    // Spawn a coroutine that reads snapshots from the loader channel
    let loader_ctx = ctx.clone();
    use_coroutine(move |_: UnboundedReceiver<()>| {
        let loader_ctx = loader_ctx.clone();
        async move {
            let Some(mut rx) = loader_ctx.take_outputs() else {
                tracing::error!("Failed to take loader receiver");
                return;
            };

            tracing::info!("UI coroutine started, listening for dataset snapshots");

            while let Some(output) = rx.recv().await {
                match output {
                    LoadOutput::Loading => status.set(LoadStatus::Loading),
                    LoadOutput::Loaded(snapshot) => {
                        dataset.set(Some(snapshot));
                        status.set(LoadStatus::Ready);
                    }
                    LoadOutput::Failed(message) => status.set(LoadStatus::Failed(message)),
                }
            }
        }
    });

    let reload = ctx.reload.clone();
    let limit = ctx.config.ui.review_limit();
    let initial_count = ctx.config.ui.initial_reviews();
    let tab_style = |active: bool| {
        if active {
            "background: #2e86ab; color: white; border: none; padding: 6px 14px; border-radius: 4px; cursor: pointer;"
        } else {
            "background: #16213e; color: #aaa; border: 1px solid #333; padding: 6px 14px; border-radius: 4px; cursor: pointer;"
        }
    };

    rsx! {
        div { class: "app",
            style: "font-family: 'Segoe UI', sans-serif; background: #1a1a2e; color: #e0e0e0; min-height: 100vh; padding: 16px;",

            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "color: #2e86ab; margin-bottom: 8px;",
                    "🏨 Hotels in California"
                }
                button {
                    style: "background: none; border: 1px solid #555; color: #aaa; padding: 4px 10px; border-radius: 4px; cursor: pointer;",
                    disabled: *status.read() == LoadStatus::Loading,
                    onclick: move |_| {
                        if reload.send(LoadRequest::Reload).is_err() {
                            tracing::warn!("Loader is gone, reload ignored");
                        }
                    },
                    "🔄 Reload"
                }
            }

            status::DatasetStatus { dataset, status }

            div { style: "display: flex; gap: 8px; margin: 12px 0;",
                button {
                    style: tab_style(*tab.read() == Tab::Reviews),
                    onclick: move |_| tab.set(Tab::Reviews),
                    "📊 Reviews"
                }
                button {
                    style: tab_style(*tab.read() == Tab::Locations),
                    onclick: move |_| tab.set(Tab::Locations),
                    "🗺️ Locations"
                }
            }

            match *tab.read() {
                Tab::Reviews => rsx! {
                    reviews::ReviewsTab { dataset, limit, initial_count }
                },
                Tab::Locations => rsx! {
                    locations::LocationTable { dataset }
                },
            }
        }
    }
}
