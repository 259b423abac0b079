use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::chart::histogram::HistogramStat;
use crate::color::SpeciesColors;
use crate::config::DashboardConfig;
use crate::data::model::{NumericColumn, PenguinDataset};
use crate::state::DashboardState;
use crate::ui::panel::{
    BoxPlotPanel, GridPanel, HistogramPanel, Panel, ScatterPanel, StatsPanel, Subscribed,
    TablePanel,
};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation – reactive dashboard
// ---------------------------------------------------------------------------

pub struct PenguinApp {
    pub state: DashboardState,
    colors: SpeciesColors,

    /// Tabbed chart region; `active_chart` indexes into it.
    charts: Vec<Subscribed<Box<dyn Panel>>>,
    active_chart: usize,

    table: Subscribed<TablePanel>,
    grid: Subscribed<GridPanel>,
    stats: Subscribed<StatsPanel>,
}

impl PenguinApp {
    pub fn new(dataset: Arc<PenguinDataset>, config: DashboardConfig) -> Self {
        let table_height = config.table_height;
        let mut state = DashboardState::new(dataset, config);

        let chart_panels: Vec<Box<dyn Panel>> = vec![
            Box::new(HistogramPanel::new("Count Histogram", HistogramStat::Count)),
            Box::new(HistogramPanel::new("Density Histogram", HistogramStat::Density)),
            Box::new(ScatterPanel::new(
                "Scatterplot",
                NumericColumn::BillLength,
                NumericColumn::BillDepth,
            )),
            Box::new(BoxPlotPanel::new("Box Plot")),
        ];
        let charts = chart_panels
            .into_iter()
            .map(|panel| Subscribed::new(panel, state.subscribe()))
            .collect();

        let table = Subscribed::new(TablePanel::new("Data Table", table_height), state.subscribe());
        let grid = Subscribed::new(GridPanel::new("Data Grid", table_height), state.subscribe());
        let stats = Subscribed::new(StatsPanel::new("Summary Statistics"), state.subscribe());

        Self {
            state,
            colors: SpeciesColors::default(),
            charts,
            active_chart: 0,
            table,
            grid,
            stats,
        }
    }

    /// Drain each panel's events, refreshing the ones that changed.
    fn sync_panels(&mut self) {
        for chart in &mut self.charts {
            chart.sync();
        }
        self.table.sync();
        self.grid.sync();
        self.stats.sync();
    }

    fn tables_region(&mut self, ui: &mut Ui) {
        let colors = &self.colors;
        let (table, grid, stats) = (&mut self.table, &mut self.grid, &mut self.stats);
        egui::ScrollArea::vertical()
            .id_salt("tables_region")
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                egui::CollapsingHeader::new(table.title().to_string())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| table.show(ui, colors));
                egui::CollapsingHeader::new(grid.title().to_string())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| grid.show(ui, colors));
                egui::CollapsingHeader::new(stats.title().to_string())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| stats.show(ui, colors));
            });
    }

    fn charts_region(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui: &mut Ui| {
            for (i, chart) in self.charts.iter().enumerate() {
                ui.selectable_value(&mut self.active_chart, i, chart.title());
            }
        });
        ui.separator();
        if let Some(chart) = self.charts.get_mut(self.active_chart) {
            chart.show(ui, &self.colors);
        }
    }
}

impl eframe::App for PenguinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.colors);
            });

        // Controls above may have published; catch up before drawing.
        self.sync_panels();

        // ---- Central panel: tables + stats | tabbed charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Palmer Penguin Dataset Exploration");
            ui.separator();
            ui.columns(2, |cols: &mut [Ui]| {
                self.tables_region(&mut cols[0]);
                self.charts_region(&mut cols[1]);
            });
        });
    }
}
