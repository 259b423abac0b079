use crate::data::filter::FilteredView;
use crate::data::model::{NumericColumn, Species};

use super::ChartError;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub x: NumericColumn,
    pub y: NumericColumn,
    pub series: Vec<ScatterSeries>,
}

/// `x` against `y`, one series per species. Rows missing either coordinate
/// are left out.
pub fn scatter(view: &FilteredView, x: NumericColumn, y: NumericColumn) -> Result<Scatter, ChartError> {
    let series: Vec<ScatterSeries> = Species::ALL
        .iter()
        .filter_map(|&species| {
            let points: Vec<[f64; 2]> = view
                .rows()
                .filter(|p| p.species == species)
                .filter_map(|p| Some([x.value(p)?, y.value(p)?]))
                .collect();
            (!points.is_empty()).then_some(ScatterSeries { species, points })
        })
        .collect();

    if series.is_empty() {
        return Err(ChartError::NoData);
    }
    Ok(Scatter { x, y, series })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::filter;
    use crate::data::loader::load_bundled;
    use crate::data::model::Island;

    #[test]
    fn groups_points_by_species() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = filter(&ds, &BTreeSet::new(), &BTreeSet::from([Island::Dream]));
        let s = scatter(&view, NumericColumn::BillLength, NumericColumn::BillDepth).unwrap();

        let species: Vec<Species> = s.series.iter().map(|s| s.species).collect();
        assert_eq!(species, vec![Species::Adelie, Species::Chinstrap]);
        assert_eq!(s.series[0].points.len(), 56);
        assert_eq!(s.series[1].points.len(), 68);
        assert_eq!(s.series[0].points[0], [39.5, 16.7]);
    }

    #[test]
    fn skips_rows_with_missing_coordinates() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = filter(&ds, &BTreeSet::new(), &BTreeSet::from([Island::Torgersen]));
        let s = scatter(&view, NumericColumn::FlipperLength, NumericColumn::BodyMass).unwrap();
        assert_eq!(s.series[0].points.len(), 51);
    }

    #[test]
    fn empty_view_is_no_data() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = filter(
            &ds,
            &BTreeSet::from([Species::Gentoo]),
            &BTreeSet::from([Island::Torgersen]),
        );
        assert_eq!(
            scatter(&view, NumericColumn::BillLength, NumericColumn::BillDepth),
            Err(ChartError::NoData)
        );
    }
}
