//! Chart data: pure functions from a [`FilteredView`](crate::data::filter::FilteredView)
//! and chart parameters to plottable series. Drawing lives in `ui::plot`.

pub mod boxplot;
pub mod histogram;
pub mod scatter;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("no data to plot")]
    NoData,
    #[error("bin count must be between 1 and {max}, got {got}")]
    InvalidBins { got: usize, max: usize },
}

/// Unwrap a chart result for display. Failures are logged and turned into
/// `None` so the panel can show a placeholder instead of the chart.
pub fn or_empty<T>(panel: &str, result: Result<T, ChartError>) -> Option<T> {
    match result {
        Ok(chart) => Some(chart),
        Err(ChartError::NoData) => {
            log::debug!("{panel}: nothing to plot");
            None
        }
        Err(e) => {
            log::warn!("{panel}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_empty_swallows_errors() {
        assert_eq!(or_empty::<u8>("hist", Err(ChartError::NoData)), None);
        assert_eq!(
            or_empty::<u8>("hist", Err(ChartError::InvalidBins { got: 0, max: 100 })),
            None
        );
        assert_eq!(or_empty("hist", Ok(3)), Some(3));
    }
}
