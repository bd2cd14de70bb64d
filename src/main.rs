use furniture_pricer::application::bootstrap::EngineBootstrap;
use furniture_pricer::config::Config;
use furniture_pricer::interfaces::ui::PricerApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Furniture Pricer {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = Config::from_env()?;

    // 3. Train once; the window only queries the finished engine
    let engine = EngineBootstrap::init(&config)?;

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 900.0])
            .with_title("Furniture Price Predictor"),
        ..Default::default()
    };

    let form = config.form.clone();
    eframe::run_native(
        "Furniture Price Predictor",
        native_options,
        Box::new(move |_cc| Ok(Box::new(PricerApp::new(engine, form)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
