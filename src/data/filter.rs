use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{Island, NumericColumn, Penguin, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// FilteredView – rows of the dataset that pass the current filter
// ---------------------------------------------------------------------------

/// Read-only view over the shared dataset. Indices are strictly increasing,
/// so row order always matches the source.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<PenguinDataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// View containing every row.
    pub fn all(dataset: Arc<PenguinDataset>) -> Self {
        let indices = (0..dataset.len()).collect();
        FilteredView { dataset, indices }
    }

    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        &self.dataset
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the visible rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = &Penguin> + '_ {
        self.indices.iter().map(|&i| &self.dataset.rows()[i])
    }

    /// Present (non-missing, finite) values of `column` over the visible rows.
    pub fn values(&self, column: NumericColumn) -> Vec<f64> {
        self.rows()
            .filter_map(|p| column.value(p))
            .filter(|v| v.is_finite())
            .collect()
    }
}

impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dataset, &other.dataset) && self.indices == other.indices
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// A row passes when each dimension is either unconstrained (empty set) or
/// contains the row's value.
pub fn matches(penguin: &Penguin, species: &BTreeSet<Species>, islands: &BTreeSet<Island>) -> bool {
    (species.is_empty() || species.contains(&penguin.species))
        && (islands.is_empty() || islands.contains(&penguin.island))
}

/// Rows of `dataset` whose species and island are both selected.
pub fn filter(
    dataset: &Arc<PenguinDataset>,
    species: &BTreeSet<Species>,
    islands: &BTreeSet<Island>,
) -> FilteredView {
    filter_view(&FilteredView::all(Arc::clone(dataset)), species, islands)
}

/// Apply the same predicate to an existing view, narrowing it further.
pub fn filter_view(
    view: &FilteredView,
    species: &BTreeSet<Species>,
    islands: &BTreeSet<Island>,
) -> FilteredView {
    let rows = view.dataset.rows();
    let indices = view
        .indices
        .iter()
        .copied()
        .filter(|&i| matches(&rows[i], species, islands))
        .collect();
    FilteredView {
        dataset: Arc::clone(&view.dataset),
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sex;

    fn row(species: Species, island: Island, bill: Option<f64>) -> Penguin {
        Penguin {
            species,
            island,
            bill_length_mm: bill,
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(3800.0),
            sex: Some(Sex::Female),
            year: 2008,
        }
    }

    fn sample() -> Arc<PenguinDataset> {
        Arc::new(PenguinDataset::from_rows(vec![
            row(Species::Adelie, Island::Torgersen, Some(39.1)),
            row(Species::Gentoo, Island::Biscoe, Some(46.1)),
            row(Species::Adelie, Island::Dream, None),
            row(Species::Chinstrap, Island::Dream, Some(46.5)),
            row(Species::Adelie, Island::Biscoe, Some(37.8)),
        ]))
    }

    #[test]
    fn empty_sets_keep_everything() {
        let ds = sample();
        let view = filter(&ds, &BTreeSet::new(), &BTreeSet::new());
        assert_eq!(view.indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let ds = sample();
        let species = BTreeSet::from([Species::Adelie]);
        let islands = BTreeSet::from([Island::Dream, Island::Biscoe]);
        let view = filter(&ds, &species, &islands);
        assert_eq!(view.indices(), &[2, 4]);
    }

    #[test]
    fn empty_species_only_filters_islands() {
        let ds = sample();
        let islands = BTreeSet::from([Island::Dream]);
        let view = filter(&ds, &BTreeSet::new(), &islands);
        assert_eq!(view.indices(), &[2, 3]);
    }

    #[test]
    fn refiltering_is_idempotent() {
        let ds = sample();
        let species = BTreeSet::from([Species::Adelie, Species::Chinstrap]);
        let islands = BTreeSet::from([Island::Dream]);
        let once = filter(&ds, &species, &islands);
        let twice = filter_view(&once, &species, &islands);
        assert_eq!(once, twice);
    }

    #[test]
    fn values_skip_missing_measurements() {
        let ds = sample();
        let species = BTreeSet::from([Species::Adelie]);
        let view = filter(&ds, &species, &BTreeSet::new());
        assert_eq!(view.values(NumericColumn::BillLength), vec![39.1, 37.8]);
    }
}
