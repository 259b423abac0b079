use std::sync::Arc;

use penguin_explorer::config::{DashboardConfig, init_logging};
use penguin_explorer::data::loader::load_bundled;
use penguin_explorer::static_app::StaticDashboardApp;

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
    let app = StaticDashboardApp::new(dataset, &config);

    eframe::run_native(
        "Penguin Explorer – Static Dashboard",
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
