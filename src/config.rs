use eframe::egui;

use crate::data::model::NumericColumn;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Compiled-in defaults shared by both dashboards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub default_attribute: NumericColumn,
    pub histogram_bins: usize,
    pub density_bins: usize,
    /// Height of the scrollable table and grid areas, in points.
    pub table_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
            default_attribute: NumericColumn::BillLength,
            histogram_bins: 20,
            density_bins: 20,
            table_height: 300.0,
        }
    }
}

impl DashboardConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}

/// Install `env_logger`; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
