use crate::data::filter::FilteredView;
use crate::data::model::{NumericColumn, Species};

use super::ChartError;

/// Upper limit on the number of bins any histogram accepts.
pub const MAX_BINS: usize = 100;

/// Clamp a user-entered bin count into `1..=MAX_BINS`.
pub fn clamp_bins(bins: usize) -> usize {
    bins.clamp(1, MAX_BINS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramStat {
    /// Raw counts per bin.
    Count,
    /// Counts scaled so the area under all species together is 1.
    Density,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramSpec {
    pub column: NumericColumn,
    pub bins: usize,
    pub stat: HistogramStat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: Species,
    /// One value per bin.
    pub heights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub spec: HistogramSpec,
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Centre of bin `i`.
    pub fn center(&self, i: usize) -> f64 {
        (self.edges[i] + self.edges[i + 1]) / 2.0
    }
}

/// Bin the values of `spec.column` over the view, one series per species.
///
/// Edges span the observed range of the whole view so every species shares
/// the same bins. A degenerate range (single distinct value) is widened by
/// half a unit on each side.
pub fn histogram(view: &FilteredView, spec: HistogramSpec) -> Result<Histogram, ChartError> {
    if spec.bins == 0 || spec.bins > MAX_BINS {
        return Err(ChartError::InvalidBins {
            got: spec.bins,
            max: MAX_BINS,
        });
    }

    let values = view.values(spec.column);
    if values.is_empty() {
        return Err(ChartError::NoData);
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / spec.bins as f64;
    let edges: Vec<f64> = (0..=spec.bins).map(|i| lo + width * i as f64).collect();

    let mut series = Vec::new();
    for species in Species::ALL {
        let mut heights = vec![0.0; spec.bins];
        let mut any = false;
        for p in view.rows().filter(|p| p.species == species) {
            let Some(v) = spec.column.value(p).filter(|v| v.is_finite()) else {
                continue;
            };
            // The top edge belongs to the last bin.
            let idx = (((v - lo) / width) as usize).min(spec.bins - 1);
            heights[idx] += 1.0;
            any = true;
        }
        if any {
            series.push(HistogramSeries { species, heights });
        }
    }

    if spec.stat == HistogramStat::Density {
        let scale = 1.0 / (values.len() as f64 * width);
        for s in &mut series {
            for h in &mut s.heights {
                *h *= scale;
            }
        }
    }

    Ok(Histogram {
        spec,
        edges,
        series,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::filter;
    use crate::data::loader::load_bundled;
    use crate::data::model::{Island, Penguin, PenguinDataset};

    fn bird(species: Species, bill: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: Island::Dream,
            bill_length_mm: bill,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
            year: 2009,
        }
    }

    fn view_of(rows: Vec<Penguin>) -> FilteredView {
        FilteredView::all(Arc::new(PenguinDataset::from_rows(rows)))
    }

    fn spec(bins: usize, stat: HistogramStat) -> HistogramSpec {
        HistogramSpec {
            column: NumericColumn::BillLength,
            bins,
            stat,
        }
    }

    #[test]
    fn counts_land_in_expected_bins() {
        let view = view_of(vec![
            bird(Species::Adelie, Some(0.0)),
            bird(Species::Adelie, Some(1.0)),
            bird(Species::Gentoo, Some(3.0)),
            bird(Species::Gentoo, Some(4.0)),
            bird(Species::Gentoo, None),
        ]);
        let h = histogram(&view, spec(4, HistogramStat::Count)).unwrap();
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(h.series.len(), 2);
        assert_eq!(h.series[0].species, Species::Adelie);
        assert_eq!(h.series[0].heights, vec![1.0, 1.0, 0.0, 0.0]);
        // 4.0 sits on the top edge and goes into the last bin.
        assert_eq!(h.series[1].heights, vec![0.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn density_integrates_to_one() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = FilteredView::all(ds);
        let h = histogram(&view, spec(17, HistogramStat::Density)).unwrap();
        let area: f64 = h
            .series
            .iter()
            .flat_map(|s| s.heights.iter())
            .map(|height| height * h.bin_width())
            .sum();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_gets_a_unit_wide_range() {
        let view = view_of(vec![bird(Species::Chinstrap, Some(50.0))]);
        let h = histogram(&view, spec(2, HistogramStat::Count)).unwrap();
        assert_eq!(h.edges.first(), Some(&49.5));
        assert_eq!(h.edges.last(), Some(&50.5));
    }

    #[test]
    fn empty_view_is_no_data() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = filter(
            &ds,
            &BTreeSet::from([Species::Chinstrap]),
            &BTreeSet::from([Island::Torgersen]),
        );
        assert!(view.is_empty());
        assert_eq!(
            histogram(&view, spec(10, HistogramStat::Count)),
            Err(ChartError::NoData)
        );
    }

    #[test]
    fn rejects_out_of_range_bins() {
        let view = view_of(vec![bird(Species::Adelie, Some(40.0))]);
        assert_eq!(
            histogram(&view, spec(0, HistogramStat::Count)),
            Err(ChartError::InvalidBins { got: 0, max: MAX_BINS })
        );
        assert!(histogram(&view, spec(MAX_BINS + 1, HistogramStat::Count)).is_err());
    }
}
