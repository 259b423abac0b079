use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::chart::histogram::MAX_BINS;
use crate::color::SpeciesColors;
use crate::data::export::export_rows;
use crate::data::model::{Island, NumericColumn, Species};
use crate::feedback::{FeedbackState, LogSink};
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left sidebar: chart controls, row filters and feedback.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState, colors: &SpeciesColors) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            chart_controls(ui, state);
            ui.separator();
            species_filter(ui, state, colors);
            island_filter(ui, state);
            ui.separator();
            feedback_box(ui, state);
        });
}

fn chart_controls(ui: &mut Ui, state: &mut DashboardState) {
    ui.strong("Attribute");
    let current = state.selection().attribute;
    let mut chosen = current;
    egui::ComboBox::from_id_salt("attribute")
        .selected_text(current.name())
        .show_ui(ui, |ui: &mut Ui| {
            for col in NumericColumn::SELECTABLE {
                ui.selectable_value(&mut chosen, col, col.name());
            }
        });
    state.set_attribute(chosen);

    ui.add_space(4.0);
    ui.strong("Histogram bins");
    let mut bins = state.selection().histogram_bins;
    if ui
        .add(egui::DragValue::new(&mut bins).range(1..=MAX_BINS))
        .changed()
    {
        state.set_histogram_bins(bins);
    }

    ui.add_space(4.0);
    ui.strong("Density histogram bins");
    let mut density_bins = state.selection().density_bins;
    if ui
        .add(egui::Slider::new(&mut density_bins, 1..=MAX_BINS))
        .changed()
    {
        state.set_density_bins(density_bins);
    }
}

fn species_filter(ui: &mut Ui, state: &mut DashboardState, colors: &SpeciesColors) {
    let n_selected = state.selection().species.len();
    let header = format!("Species  ({n_selected}/{})", Species::ALL.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("species_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.set_species(Species::ALL.into_iter().collect());
                }
                if ui.small_button("None").clicked() {
                    state.set_species(BTreeSet::new());
                }
            });
            for species in Species::ALL {
                let mut checked = state.selection().species.contains(&species);
                let text = RichText::new(species.as_str()).color(colors.color_for(species));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(species);
                }
            }
            if state.selection().species.is_empty() {
                ui.weak("None selected: showing all species");
            }
        });
}

fn island_filter(ui: &mut Ui, state: &mut DashboardState) {
    let n_selected = state.selection().islands.len();
    let header = format!("Islands  ({n_selected}/{})", Island::ALL.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("island_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.set_islands(Island::ALL.into_iter().collect());
                }
                if ui.small_button("None").clicked() {
                    state.set_islands(BTreeSet::new());
                }
            });
            for island in Island::ALL {
                let mut checked = state.selection().islands.contains(&island);
                if ui.checkbox(&mut checked, island.as_str()).changed() {
                    state.toggle_island(island);
                }
            }
            if state.selection().islands.is_empty() {
                ui.weak("None selected: showing all islands");
            }
        });
}

fn feedback_box(ui: &mut Ui, state: &mut DashboardState) {
    ui.strong("Feedback");
    let response = ui.add(
        egui::TextEdit::multiline(&mut state.feedback.text)
            .hint_text("Tell us what you think…")
            .desired_rows(3),
    );
    if response.changed() {
        state.feedback.edited();
    }
    if ui.button("Submit").clicked() {
        state.feedback.submit(&mut LogSink);
    }
    if state.feedback.state() == FeedbackState::Submitted {
        ui.label(RichText::new("Thanks for the feedback!").italics());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered rows…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} penguins loaded, {} visible",
            state.dataset().len(),
            state.view().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_file_dialog(state: &mut DashboardState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered rows")
        .set_file_name("penguins_filtered.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    if let Some(path) = file {
        match export_rows(state.view(), &path) {
            Ok(_) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export rows: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
