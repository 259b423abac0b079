use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

use crate::chart::boxplot::BoxSummary;
use crate::chart::histogram::{Histogram, HistogramStat};
use crate::chart::scatter::Scatter;
use crate::color::SpeciesColors;
use crate::data::model::Species;

/// Shown in place of a chart that could not be built.
pub fn placeholder(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(text);
    });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Count histograms are stacked per species; density histograms are layered
/// with translucent fills.
pub fn histogram_plot(ui: &mut Ui, id: &str, hist: &Histogram, colors: &SpeciesColors, height: f32) {
    let width = hist.bin_width();
    let stacked = hist.spec.stat == HistogramStat::Count;

    let mut charts: Vec<BarChart> = Vec::with_capacity(hist.series.len());
    for series in &hist.series {
        let mut color = colors.color_for(series.species);
        if !stacked {
            color = color.gamma_multiply(0.6);
        }
        let bars: Vec<Bar> = series
            .heights
            .iter()
            .enumerate()
            .map(|(i, &h)| Bar::new(hist.center(i), h).width(width))
            .collect();
        let mut chart = BarChart::new(bars)
            .name(series.species.as_str())
            .color(color);
        if stacked {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    let y_label = match hist.spec.stat {
        HistogramStat::Count => "count",
        HistogramStat::Density => "density",
    };

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(hist.spec.column.name())
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

pub fn scatter_plot(ui: &mut Ui, id: &str, scatter: &Scatter, colors: &SpeciesColors, height: f32) {
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(scatter.x.name())
        .y_axis_label(scatter.y.name())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = Points::new(PlotPoints::new(series.points.clone()))
                    .name(series.species.as_str())
                    .color(colors.color_for(series.species))
                    .radius(2.5);
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

/// One box per species at x = 0, 1, 2 (species order), labelled on the axis.
pub fn box_plot(ui: &mut Ui, id: &str, summary: &BoxSummary, colors: &SpeciesColors, height: f32) {
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .y_axis_label(summary.column.name())
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            Species::ALL
                .get(idx as usize)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .allow_zoom(true)
        .allow_drag(true)
        .show(ui, |plot_ui| {
            for b in &summary.boxes {
                let position = Species::ALL
                    .iter()
                    .position(|&s| s == b.species)
                    .unwrap_or(0) as f64;
                let color = colors.color_for(b.species);
                let elem = BoxElem::new(
                    position,
                    BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
                )
                .name(b.species.as_str())
                .box_width(0.5)
                .whisker_width(0.25)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(b.species.as_str()).color(color));
            }
        });
}
