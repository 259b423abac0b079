use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use crate::chart::histogram::clamp_bins;
use crate::config::DashboardConfig;
use crate::data::filter::{FilteredView, filter};
use crate::data::model::{Island, NumericColumn, PenguinDataset, Species};
use crate::feedback::FeedbackBox;
use crate::selection::{ChangeKind, FilterSelection, SelectionBus, SelectionEvent};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full reactive-dashboard state, independent of rendering.
///
/// Every setter that actually changes the selection publishes one
/// [`SelectionEvent`] on the bus; setters that leave it unchanged publish
/// nothing.
pub struct DashboardState {
    pub config: DashboardConfig,

    dataset: Arc<PenguinDataset>,
    selection: FilterSelection,

    /// Rows passing the current species / island filter.
    view: Arc<FilteredView>,

    bus: SelectionBus,

    pub feedback: FeedbackBox,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl DashboardState {
    pub fn new(dataset: Arc<PenguinDataset>, config: DashboardConfig) -> Self {
        let selection = FilterSelection::new(
            config.default_attribute,
            config.histogram_bins,
            config.density_bins,
        );
        let view = Arc::new(filter(&dataset, &selection.species, &selection.islands));
        Self {
            config,
            dataset,
            selection,
            view,
            bus: SelectionBus::new(),
            feedback: FeedbackBox::default(),
            status_message: None,
        }
    }

    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn view(&self) -> &Arc<FilteredView> {
        &self.view
    }

    /// Register a panel. The receiver already holds the current snapshot so
    /// the panel can render on its first frame.
    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        let current = self.snapshot(ChangeKind::Rows);
        self.bus.subscribe_with(current)
    }

    fn snapshot(&self, change: ChangeKind) -> SelectionEvent {
        SelectionEvent {
            selection: self.selection.clone(),
            view: Arc::clone(&self.view),
            change,
        }
    }

    fn publish(&mut self, change: ChangeKind) {
        let event = self.snapshot(change);
        self.bus.publish(&event);
    }

    /// Recompute the view after a species / island change and notify.
    fn refilter(&mut self) {
        self.view = Arc::new(filter(
            &self.dataset,
            &self.selection.species,
            &self.selection.islands,
        ));
        log::debug!(
            "Refiltered: {} of {} rows visible",
            self.view.len(),
            self.dataset.len()
        );
        self.publish(ChangeKind::Rows);
    }

    // -- chart parameters --

    pub fn set_attribute(&mut self, attribute: NumericColumn) -> bool {
        if self.selection.attribute == attribute {
            return false;
        }
        self.selection.attribute = attribute;
        self.publish(ChangeKind::ChartParams);
        true
    }

    pub fn set_histogram_bins(&mut self, bins: usize) -> bool {
        let bins = clamp_bins(bins);
        if self.selection.histogram_bins == bins {
            return false;
        }
        self.selection.histogram_bins = bins;
        self.publish(ChangeKind::ChartParams);
        true
    }

    pub fn set_density_bins(&mut self, bins: usize) -> bool {
        let bins = clamp_bins(bins);
        if self.selection.density_bins == bins {
            return false;
        }
        self.selection.density_bins = bins;
        self.publish(ChangeKind::ChartParams);
        true
    }

    // -- row filters --

    /// Toggle a single species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        let selected = &mut self.selection.species;
        if !selected.remove(&species) {
            selected.insert(species);
        }
        self.refilter();
    }

    /// Toggle a single island in the filter.
    pub fn toggle_island(&mut self, island: Island) {
        let selected = &mut self.selection.islands;
        if !selected.remove(&island) {
            selected.insert(island);
        }
        self.refilter();
    }

    pub fn set_species(&mut self, species: BTreeSet<Species>) -> bool {
        if self.selection.species == species {
            return false;
        }
        self.selection.species = species;
        self.refilter();
        true
    }

    pub fn set_islands(&mut self, islands: BTreeSet<Island>) -> bool {
        if self.selection.islands == islands {
            return false;
        }
        self.selection.islands = islands;
        self.refilter();
        true
    }
}
