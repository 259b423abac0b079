use std::cmp::Ordering;

use eframe::egui::{self, Align, Layout, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::{Column, Penguin};

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Header-click sort state of the data table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSort {
    pub active: Option<(Column, SortDirection)>,
}

impl TableSort {
    /// Ascending → descending → unsorted.
    pub fn cycle(&mut self, column: Column) {
        self.active = match self.active {
            Some((c, SortDirection::Ascending)) if c == column => {
                Some((column, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Dataset row indices of `view` in display order. Ties keep source
    /// order; missing values sort last in both directions.
    pub fn sorted_rows(&self, view: &FilteredView) -> Vec<usize> {
        let mut rows = view.indices().to_vec();
        if let Some((column, dir)) = self.active {
            let data = view.dataset().rows();
            rows.sort_by(|&a, &b| compare(column, dir, &data[a], &data[b]));
        }
        rows
    }

    fn arrow(&self, column: Column) -> &'static str {
        match self.active {
            Some((c, SortDirection::Ascending)) if c == column => " ^",
            Some((c, SortDirection::Descending)) if c == column => " v",
            _ => "",
        }
    }
}

fn compare(column: Column, dir: SortDirection, a: &Penguin, b: &Penguin) -> Ordering {
    match column {
        Column::Species => dir.apply(a.species.cmp(&b.species)),
        Column::Island => dir.apply(a.island.cmp(&b.island)),
        Column::Year => dir.apply(a.year.cmp(&b.year)),
        Column::Sex => missing_last(a.sex, b.sex, dir, |x, y| x.cmp(&y)),
        Column::Numeric(n) => {
            missing_last(n.value(a), n.value(b), dir, |x: f64, y: f64| x.total_cmp(&y))
        }
    }
}

fn missing_last<T>(
    a: Option<T>,
    b: Option<T>,
    dir: SortDirection,
    cmp: impl Fn(T, T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => dir.apply(cmp(x, y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Sortable table over `rows` (dataset indices, already in display order).
pub fn data_table(
    ui: &mut Ui,
    id_salt: &str,
    view: &FilteredView,
    rows: &[usize],
    sort: &mut TableSort,
    height: f32,
) -> bool {
    let data = view.dataset().rows();
    let current = *sort;
    let mut clicked: Option<Column> = None;

    ui.push_id(id_salt, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(TableColumn::auto().at_least(70.0), Column::ALL.len())
            .min_scrolled_height(height)
            .max_scroll_height(height)
            .header(20.0, |mut header| {
                for column in Column::ALL {
                    header.col(|ui: &mut Ui| {
                        let label = format!("{}{}", column.name(), current.arrow(column));
                        if ui.button(label).clicked() {
                            clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let penguin = &data[rows[row.index()]];
                    for column in Column::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.label(column.format(penguin));
                        });
                    }
                });
            });
    });

    if let Some(column) = clicked {
        sort.cycle(column);
        return true;
    }
    false
}

/// Plain striped grid of every visible row.
pub fn data_grid(ui: &mut Ui, id_salt: &str, view: &FilteredView, height: f32) {
    ScrollArea::both()
        .id_salt(id_salt)
        .max_height(height)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new(id_salt)
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui: &mut Ui| {
                    for column in Column::ALL {
                        ui.strong(column.name());
                    }
                    ui.end_row();
                    for penguin in view.rows() {
                        for column in Column::ALL {
                            ui.label(column.format(penguin));
                        }
                        ui.end_row();
                    }
                });
        });
}
