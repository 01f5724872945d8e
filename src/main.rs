mod config;
mod core;
mod source;
mod ui;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::pipeline::{LoadOutput, LoadRequest};
use crate::source::DataSource;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hotelradar=info".parse().unwrap()),
        )
        .init();

    tracing::info!("🏨 HotelRadar starting...");

    // Load configuration
    let config = Config::load("config.toml");
    tracing::info!("Config: {:?}", config);

    let source = DataSource::new(&config.http).expect("Failed to build HTTP client");

    // UI → loader channel
    let (reload_tx, reload_rx) = mpsc::unbounded_channel::<LoadRequest>();

    // Loader → UI channel
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<LoadOutput>();

    // Start the loader in a tokio runtime on a separate thread
    let data_config = config.data.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(core::pipeline::run_loader(reload_rx, ui_tx, source, data_config));
    });
    tracing::info!("Loader thread started");

    let window_size = dioxus::desktop::tao::dpi::LogicalSize::new(
        config.ui.window_width,
        config.ui.window_height,
    );
    let context = ui::UiContext::new(config, ui_rx, reload_tx);

    // Launch Dioxus desktop app (blocks)
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::tao::window::WindowBuilder::new()
                        .with_title("🏨 HotelRadar")
                        .with_inner_size(window_size),
                ),
        )
        .with_context(context)
        .launch(ui::App);
}
