use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::DataConfig;
use crate::core::Dataset;
use crate::source::{DataSource, LoadError};

/// Requests from UI to loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    Reload,
}

/// Messages from loader to UI.
#[derive(Debug, Clone)]
pub enum LoadOutput {
    Loading,
    Loaded(Arc<Dataset>),
    Failed(String),
}

/// Fetch every configured source and build a fresh snapshot.
///
/// The reviews source is required. A location source that fails is logged
/// and contributes nothing.
pub async fn load_dataset(source: &DataSource, data: &DataConfig) -> Result<Dataset, LoadError> {
    let reviews = source.load_reviews(&data.reviews).await?;

    let mut location_sources = Vec::with_capacity(data.locations.len());
    for location in &data.locations {
        match source.load_locations(location).await {
            Ok(decoded) => location_sources.push(decoded.rows),
            Err(e) => warn!("Skipping location source {location}: {e}"),
        }
    }

    let dataset = Dataset::from_rows(reviews.rows, location_sources, reviews.skipped);
    if dataset.averages.is_empty() {
        warn!("Reviews source {} yielded no hotels", data.reviews);
    }
    Ok(dataset)
}

/// Run the loader: build a snapshot now and again on every reload request.
pub async fn run_loader(
    mut rx: mpsc::UnboundedReceiver<LoadRequest>,
    ui_tx: mpsc::UnboundedSender<LoadOutput>,
    source: DataSource,
    data: DataConfig,
) {
    let mut load_count: u64 = 0;

    info!("Loader started, reviews source: {}", data.reviews);

    loop {
        if ui_tx.send(LoadOutput::Loading).is_err() {
            break;
        }

        let output = match load_dataset(&source, &data).await {
            Ok(dataset) => {
                load_count += 1;
                LoadOutput::Loaded(Arc::new(dataset))
            }
            Err(e) => {
                warn!("Dataset load failed: {e}");
                LoadOutput::Failed(e.to_string())
            }
        };

        if ui_tx.send(output).is_err() {
            info!("UI channel closed, stopping loader");
            break;
        }

        match rx.recv().await {
            Some(LoadRequest::Reload) => info!("Reload requested"),
            None => break,
        }
    }

    info!("Loader shutting down after {load_count} successful loads");
}
