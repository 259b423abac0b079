use std::sync::Arc;

use penguin_explorer::app::PenguinApp;
use penguin_explorer::config::{DashboardConfig, init_logging};
use penguin_explorer::data::loader::load_bundled;

fn main() -> eframe::Result {
    init_logging();

    let dataset = match load_bundled() {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            log::error!("Failed to load bundled dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let config = DashboardConfig::default();
    let options = config.native_options();

    eframe::run_native(
        "Penguin Explorer – Reactive Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PenguinApp::new(dataset, config)))),
    )
}
