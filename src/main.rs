mod app;
mod config;
mod filters;
mod image;
mod session;
mod util;

use app::FilterApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    tracing::info!("Image Processing App starting");

    let initial_image_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Image Processing App",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(FilterApp::new_with_initial_path(
                initial_image_path.as_deref(),
            )))
        }),
    )
}
