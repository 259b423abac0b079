use std::fmt;

use super::filter::FilteredView;
use super::model::NumericColumn;

/// Text shown instead of statistics when the view has no rows.
pub const NO_DATA_MESSAGE: &str = "No data available.";

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// `describe()`-style statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: NumericColumn,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    NoData,
    /// One entry per numeric column that has at least one value.
    Columns(Vec<ColumnSummary>),
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::NoData => f.write_str(NO_DATA_MESSAGE),
            Summary::Columns(cols) => {
                writeln!(
                    f,
                    "{:<18} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
                    "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
                )?;
                for c in cols {
                    let std = c.std.map_or_else(|| "NaN".to_string(), |s| format!("{s:.3}"));
                    writeln!(
                        f,
                        "{:<18} {:>6} {:>9.3} {:>9} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                        c.column.name(),
                        c.count,
                        c.mean,
                        std,
                        c.min,
                        c.q25,
                        c.median,
                        c.q75,
                        c.max
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Summarise every numeric column of the view.
pub fn describe(view: &FilteredView) -> Summary {
    if view.is_empty() {
        return Summary::NoData;
    }
    let columns = NumericColumn::ALL
        .iter()
        .filter_map(|&col| describe_column(col, view.values(col)))
        .collect();
    Summary::Columns(columns)
}

/// Statistics over `values`; `None` when there are none.
pub fn describe_column(column: NumericColumn, mut values: Vec<f64>) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    Some(ColumnSummary {
        column,
        count: n,
        mean,
        std,
        min: values[0],
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[n - 1],
    })
}

/// Quantile of already-sorted, non-empty `sorted`, interpolating linearly
/// between the two closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.0), 1.0);
        assert_eq!(quantile(&v, 0.25), 1.75);
        assert_eq!(quantile(&v, 0.5), 2.5);
        assert_eq!(quantile(&v, 0.75), 3.25);
        assert_eq!(quantile(&v, 1.0), 4.0);
    }

    #[test]
    fn column_summary_matches_hand_computation() {
        let s = describe_column(NumericColumn::BodyMass, vec![4.0, 2.0, 6.0, 8.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 8.0);
        assert_eq!(s.median, 5.0);
        // variance = (9 + 1 + 1 + 9) / 3
        let expected_std = (20.0_f64 / 3.0).sqrt();
        assert!((s.std.unwrap() - expected_std).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_no_std() {
        let s = describe_column(NumericColumn::BillDepth, vec![18.7]).unwrap();
        assert_eq!(s.std, None);
        assert_eq!(s.q25, 18.7);
        assert_eq!(s.q75, 18.7);
    }

    #[test]
    fn no_values_no_summary() {
        assert_eq!(describe_column(NumericColumn::BillDepth, Vec::new()), None);
    }

    #[test]
    fn no_data_renders_literal_message() {
        assert_eq!(Summary::NoData.to_string(), "No data available.");
    }
}
