//! Waveguide calculator desktop application.
//!
//! Set `WAVEGUIDE_CONFIG` to a TOML file to change the history order or the
//! initial window size.

mod app;
mod panels;

use waveguide_core::config::CalculatorConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match std::env::var_os("WAVEGUIDE_CONFIG") {
        Some(path) => CalculatorConfig::load(std::path::Path::new(&path)).unwrap_or_else(|e| {
            log::error!("{e}; using default configuration");
            CalculatorConfig::default()
        }),
        None => CalculatorConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Waveguide Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(app::CalculatorApp::new(config)))),
    )
}
