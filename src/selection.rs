use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::data::filter::FilteredView;
use crate::data::model::{Island, NumericColumn, Species};

// ---------------------------------------------------------------------------
// FilterSelection – what the sidebar controls currently say
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Attribute plotted by the histograms and the box plot.
    pub attribute: NumericColumn,
    /// Bin count of the count histogram (numeric input).
    pub histogram_bins: usize,
    /// Bin count of the density histogram (slider).
    pub density_bins: usize,
    /// Empty means "no species filter".
    pub species: BTreeSet<Species>,
    /// Empty means "no island filter".
    pub islands: BTreeSet<Island>,
}

impl FilterSelection {
    /// Everything selected.
    pub fn new(attribute: NumericColumn, histogram_bins: usize, density_bins: usize) -> Self {
        FilterSelection {
            attribute,
            histogram_bins,
            density_bins,
            species: Species::ALL.into_iter().collect(),
            islands: Island::ALL.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Change notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Species or island selection changed; the view was recomputed.
    Rows,
    /// Attribute or bin count changed; the view is the same as before.
    ChartParams,
}

/// Snapshot handed to every subscriber.
#[derive(Debug, Clone)]
pub struct SelectionEvent {
    pub selection: FilterSelection,
    pub view: Arc<FilteredView>,
    pub change: ChangeKind,
}

/// Fans selection events out to subscribed panels.
#[derive(Debug, Default)]
pub struct SelectionBus {
    subscribers: Vec<Sender<SelectionEvent>>,
}

impl SelectionBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Like [`subscribe`](Self::subscribe), with `current` already queued on
    /// the new receiver.
    pub fn subscribe_with(&mut self, current: SelectionEvent) -> Receiver<SelectionEvent> {
        let (tx, rx) = mpsc::channel();
        // Cannot fail: `rx` is still alive.
        let _ = tx.send(current);
        self.subscribers.push(tx);
        rx
    }

    /// Send `event` to every live subscriber, forgetting those whose
    /// receiver has been dropped. Returns the number of deliveries.
    pub fn publish(&mut self, event: &SelectionEvent) -> usize {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
