//! Palmer Penguins dashboards.
//!
//! The library holds everything both binaries share: the bundled dataset
//! and its filter, chart data, the selection bus that drives the reactive
//! dashboard, and the egui panels that draw it all.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod feedback;
pub mod selection;
pub mod state;
pub mod static_app;
pub mod ui;
