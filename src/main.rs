//! Heatmap Dataset Generator - Main Entry Point

use heatgen_rs::{config::AppConfig, engine::Controller, frontend::HeatGenApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,heatgen_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Heatmap Dataset Generator");

    let config = AppConfig::default();
    let controller = match Controller::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Invalid startup configuration: {}", e);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 860.0])
            .with_min_inner_size([720.0, 600.0])
            .with_title("Heatmap Dataset Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Heatmap Dataset Generator",
        native_options,
        Box::new(|cc| Ok(Box::new(HeatGenApp::new(cc, controller)))),
    )
}
