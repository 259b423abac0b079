use std::sync::Arc;
use std::sync::mpsc::Receiver;

use eframe::egui::{RichText, Ui};

use crate::chart::boxplot::{BoxSummary, box_summary};
use crate::chart::histogram::{Histogram, HistogramSpec, HistogramStat, histogram};
use crate::chart::or_empty;
use crate::chart::scatter::{Scatter, scatter};
use crate::color::SpeciesColors;
use crate::data::filter::FilteredView;
use crate::data::model::NumericColumn;
use crate::data::stats::{Summary, describe};
use crate::selection::SelectionEvent;

use super::plot;
use super::table::{self, TableSort};

const NO_CHART: &str = "No data to plot.";

// ---------------------------------------------------------------------------
// Panel trait and subscription wrapper
// ---------------------------------------------------------------------------

/// An independent display unit derived from the filtered rows.
pub trait Panel {
    fn title(&self) -> &str;

    /// Recompute cached display data from a selection snapshot.
    fn refresh(&mut self, event: &SelectionEvent);

    fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors);
}

impl<P: Panel + ?Sized> Panel for Box<P> {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        (**self).refresh(event)
    }

    fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors) {
        (**self).show(ui, colors)
    }
}

/// A panel together with its selection-bus receiver.
pub struct Subscribed<P> {
    panel: P,
    events: Receiver<SelectionEvent>,
}

impl<P: Panel> Subscribed<P> {
    pub fn new(panel: P, events: Receiver<SelectionEvent>) -> Self {
        Self { panel, events }
    }

    /// Drain pending events and refresh once from the newest.
    pub fn sync(&mut self) -> bool {
        match self.events.try_iter().last() {
            Some(event) => {
                self.panel.refresh(&event);
                true
            }
            None => false,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn title(&self) -> &str {
        self.panel.title()
    }

    pub fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors) {
        self.panel.show(ui, colors);
    }
}

// ---------------------------------------------------------------------------
// Chart panels
// ---------------------------------------------------------------------------

pub struct HistogramPanel {
    title: String,
    stat: HistogramStat,
    chart: Option<Histogram>,
}

impl HistogramPanel {
    pub fn new(title: &str, stat: HistogramStat) -> Self {
        Self {
            title: title.to_string(),
            stat,
            chart: None,
        }
    }

    pub fn chart(&self) -> Option<&Histogram> {
        self.chart.as_ref()
    }
}

impl Panel for HistogramPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        let bins = match self.stat {
            HistogramStat::Count => event.selection.histogram_bins,
            HistogramStat::Density => event.selection.density_bins,
        };
        let spec = HistogramSpec {
            column: event.selection.attribute,
            bins,
            stat: self.stat,
        };
        self.chart = or_empty(&self.title, histogram(&event.view, spec));
    }

    fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors) {
        let height = ui.available_height();
        match &self.chart {
            Some(h) => plot::histogram_plot(ui, &self.title, h, colors, height),
            None => plot::placeholder(ui, NO_CHART),
        }
    }
}

pub struct ScatterPanel {
    title: String,
    x: NumericColumn,
    y: NumericColumn,
    /// Rows the current chart was built from.
    view: Option<Arc<FilteredView>>,
    chart: Option<Scatter>,
}

impl ScatterPanel {
    pub fn new(title: &str, x: NumericColumn, y: NumericColumn) -> Self {
        Self {
            title: title.to_string(),
            x,
            y,
            view: None,
            chart: None,
        }
    }

    pub fn chart(&self) -> Option<&Scatter> {
        self.chart.as_ref()
    }
}

impl Panel for ScatterPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        // Axes are fixed; only the rows matter.
        let same_rows = self
            .view
            .as_ref()
            .is_some_and(|v| Arc::ptr_eq(v, &event.view));
        if same_rows {
            return;
        }
        self.chart = or_empty(&self.title, scatter(&event.view, self.x, self.y));
        self.view = Some(Arc::clone(&event.view));
    }

    fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors) {
        let height = ui.available_height();
        match &self.chart {
            Some(s) => plot::scatter_plot(ui, &self.title, s, colors, height),
            None => plot::placeholder(ui, NO_CHART),
        }
    }
}

pub struct BoxPlotPanel {
    title: String,
    chart: Option<BoxSummary>,
}

impl BoxPlotPanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            chart: None,
        }
    }

    pub fn chart(&self) -> Option<&BoxSummary> {
        self.chart.as_ref()
    }
}

impl Panel for BoxPlotPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        self.chart = or_empty(&self.title, box_summary(&event.view, event.selection.attribute));
    }

    fn show(&mut self, ui: &mut Ui, colors: &SpeciesColors) {
        let height = ui.available_height();
        match &self.chart {
            Some(b) => plot::box_plot(ui, &self.title, b, colors, height),
            None => plot::placeholder(ui, NO_CHART),
        }
    }
}

// ---------------------------------------------------------------------------
// Table panels
// ---------------------------------------------------------------------------

pub struct TablePanel {
    title: String,
    height: f32,
    view: Option<Arc<FilteredView>>,
    sort: TableSort,
    /// Dataset indices in display order.
    rows: Vec<usize>,
}

impl TablePanel {
    pub fn new(title: &str, height: f32) -> Self {
        Self {
            title: title.to_string(),
            height,
            view: None,
            sort: TableSort::default(),
            rows: Vec::new(),
        }
    }

    pub fn set_view(&mut self, view: Arc<FilteredView>) {
        self.rows = self.sort.sorted_rows(&view);
        self.view = Some(view);
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}

impl Panel for TablePanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        let same_rows = self
            .view
            .as_ref()
            .is_some_and(|v| Arc::ptr_eq(v, &event.view));
        if !same_rows {
            self.set_view(Arc::clone(&event.view));
        }
    }

    fn show(&mut self, ui: &mut Ui, _colors: &SpeciesColors) {
        let Some(view) = self.view.clone() else {
            return;
        };
        if table::data_table(ui, &self.title, &view, &self.rows, &mut self.sort, self.height) {
            self.rows = self.sort.sorted_rows(&view);
        }
    }
}

pub struct GridPanel {
    title: String,
    height: f32,
    view: Option<Arc<FilteredView>>,
}

impl GridPanel {
    pub fn new(title: &str, height: f32) -> Self {
        Self {
            title: title.to_string(),
            height,
            view: None,
        }
    }

    pub fn set_view(&mut self, view: Arc<FilteredView>) {
        self.view = Some(view);
    }
}

impl Panel for GridPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        self.set_view(Arc::clone(&event.view));
    }

    fn show(&mut self, ui: &mut Ui, _colors: &SpeciesColors) {
        if let Some(view) = &self.view {
            table::data_grid(ui, &self.title, view, self.height);
        }
    }
}

// ---------------------------------------------------------------------------
// Summary statistics panel
// ---------------------------------------------------------------------------

pub struct StatsPanel {
    title: String,
    summary: Summary,
}

impl StatsPanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            summary: Summary::NoData,
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

impl Panel for StatsPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, event: &SelectionEvent) {
        self.summary = describe(&event.view);
    }

    fn show(&mut self, ui: &mut Ui, _colors: &SpeciesColors) {
        ui.label(RichText::new(self.summary.to_string()).monospace());
    }
}
