use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::chart::histogram::{Histogram, HistogramSpec, HistogramStat, histogram};
use crate::chart::or_empty;
use crate::chart::scatter::{Scatter, scatter};
use crate::color::SpeciesColors;
use crate::config::DashboardConfig;
use crate::data::filter::FilteredView;
use crate::data::model::{NumericColumn, PenguinDataset};
use crate::ui::panel::{GridPanel, Panel, TablePanel};
use crate::ui::plot;

const CHART_HEIGHT: f32 = 380.0;

pub const PAGE_TITLE: &str = "Elen's Palmer Penguin Dataset Exploration";

// ---------------------------------------------------------------------------
// eframe App implementation – static dashboard
// ---------------------------------------------------------------------------

/// Fixed page: two tables and two charts, all built once from the full
/// dataset.
pub struct StaticDashboardApp {
    colors: SpeciesColors,
    table: TablePanel,
    grid: GridPanel,
    histogram: Option<Histogram>,
    scatter: Option<Scatter>,
}

impl StaticDashboardApp {
    pub fn new(dataset: Arc<PenguinDataset>, config: &DashboardConfig) -> Self {
        let view = Arc::new(FilteredView::all(dataset));

        let mut table = TablePanel::new("Data Table", config.table_height);
        table.set_view(Arc::clone(&view));
        let mut grid = GridPanel::new("Data Grid", config.table_height);
        grid.set_view(Arc::clone(&view));

        let spec = HistogramSpec {
            column: NumericColumn::BillLength,
            bins: config.histogram_bins,
            stat: HistogramStat::Count,
        };
        let histogram = or_empty("Histogram", histogram(&view, spec));
        let scatter = or_empty(
            "Scatterplot",
            scatter(&view, NumericColumn::BillLength, NumericColumn::BillDepth),
        );

        Self {
            colors: SpeciesColors::default(),
            table,
            grid,
            histogram,
            scatter,
        }
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    pub fn scatter(&self) -> Option<&Scatter> {
        self.scatter.as_ref()
    }
}

fn section_title(ui: &mut Ui, title: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(title);
    });
    ui.add_space(8.0);
}

impl eframe::App for StaticDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading(
                            egui::RichText::new(PAGE_TITLE).size(26.0),
                        );
                    });

                    section_title(ui, "Data Table");
                    self.table.show(ui, &self.colors);

                    section_title(ui, "Data Grid");
                    self.grid.show(ui, &self.colors);

                    section_title(ui, "Histogram: Bill Length Distribution");
                    match &self.histogram {
                        Some(h) => plot::histogram_plot(ui, "static_histogram", h, &self.colors, CHART_HEIGHT),
                        None => plot::placeholder(ui, "No data to plot."),
                    }

                    section_title(ui, "Scatterplot: Bill Length vs Bill Depth");
                    match &self.scatter {
                        Some(s) => plot::scatter_plot(ui, "static_scatter", s, &self.colors, CHART_HEIGHT),
                        None => plot::placeholder(ui, "No data to plot."),
                    }
                });
        });
    }
}
