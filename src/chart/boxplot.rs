use crate::data::filter::FilteredView;
use crate::data::model::{NumericColumn, Species};
use crate::data::stats::quantile;

use super::ChartError;

/// Tukey box for one species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesBox {
    pub species: Species,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub column: NumericColumn,
    pub boxes: Vec<SpeciesBox>,
}

/// Five-number summary of `column` per species. Whiskers reach the most
/// extreme observation within 1.5 × IQR of the box.
pub fn box_summary(view: &FilteredView, column: NumericColumn) -> Result<BoxSummary, ChartError> {
    let mut boxes = Vec::new();
    for species in Species::ALL {
        let mut values: Vec<f64> = view
            .rows()
            .filter(|p| p.species == species)
            .filter_map(|p| column.value(p))
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);

        let q1 = quantile(&values, 0.25);
        let median = quantile(&values, 0.5);
        let q3 = quantile(&values, 0.75);
        let reach = 1.5 * (q3 - q1);
        let lower_whisker = values
            .iter()
            .copied()
            .find(|&v| v >= q1 - reach)
            .unwrap_or(q1);
        let upper_whisker = values
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + reach)
            .unwrap_or(q3);

        boxes.push(SpeciesBox {
            species,
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
        });
    }

    if boxes.is_empty() {
        return Err(ChartError::NoData);
    }
    Ok(BoxSummary { column, boxes })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::model::{Island, Penguin, PenguinDataset};

    fn adelie(mass: f64) -> Penguin {
        Penguin {
            species: Species::Adelie,
            island: Island::Biscoe,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: Some(mass),
            sex: None,
            year: 2008,
        }
    }

    #[test]
    fn outliers_fall_outside_whiskers() {
        let rows = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0].map(adelie).to_vec();
        let view = FilteredView::all(Arc::new(PenguinDataset::from_rows(rows)));
        let summary = box_summary(&view, NumericColumn::BodyMass).unwrap();
        let b = &summary.boxes[0];
        assert_eq!(b.q1, 2.25);
        assert_eq!(b.median, 3.5);
        assert_eq!(b.q3, 4.75);
        assert_eq!(b.lower_whisker, 1.0);
        assert_eq!(b.upper_whisker, 5.0);
    }

    #[test]
    fn all_missing_is_no_data() {
        let mut p = adelie(0.0);
        p.body_mass_g = None;
        let view = FilteredView::all(Arc::new(PenguinDataset::from_rows(vec![p])));
        assert_eq!(box_summary(&view, NumericColumn::BodyMass), Err(ChartError::NoData));
    }
}
