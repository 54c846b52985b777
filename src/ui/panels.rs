use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{spec_label, SpecializationIndex};
use crate::encoding::{AxisParam, ColorParam, SizeParam};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filters and parameter selection
// ---------------------------------------------------------------------------

/// Render the left panel: specialization filter plus plot parameters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No data loaded.");
        return;
    };
    let spec_choices = table.spec_choices();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Specialization multi-select ----
            if spec_choices.is_empty() {
                ui.label("No specializations in this dataset.");
            } else {
                ui.strong("Specializations");
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all_specs();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_no_specs();
                    }
                });
                for (label, key) in &spec_choices {
                    let mut checked = state.spec_filter.contains(key);
                    if ui.checkbox(&mut checked, label).changed() {
                        state.toggle_spec(key);
                    }
                }
            }

            ui.separator();
            ui.heading("Select Parameters");

            // ---- Axis selectors ----
            ui.strong("X axis");
            egui::ComboBox::from_id_salt("x_param")
                .selected_text(state.x_param.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for param in AxisParam::ALL {
                        if ui
                            .selectable_label(state.x_param == param, param.label())
                            .clicked()
                        {
                            state.x_param = param;
                        }
                    }
                });

            ui.strong("Y axis");
            egui::ComboBox::from_id_salt("y_param")
                .selected_text(state.y_param.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for param in AxisParam::ALL {
                        if ui
                            .selectable_label(state.y_param == param, param.label())
                            .clicked()
                        {
                            state.y_param = param;
                        }
                    }
                });

            ui.strong("Size");
            egui::ComboBox::from_id_salt("size_param")
                .selected_text(state.size_param.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for param in SizeParam::ALL {
                        if ui
                            .selectable_label(state.size_param == param, param.label())
                            .clicked()
                        {
                            state.size_param = param;
                        }
                    }
                });

            ui.strong("Color");
            egui::ComboBox::from_id_salt("color_param")
                .selected_text(state.color_param.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for param in ColorParam::ALL {
                        // Specialization colouring needs membership columns.
                        if param == ColorParam::Specialization && spec_choices.is_empty() {
                            continue;
                        }
                        if ui
                            .selectable_label(state.color_param == param, param.label())
                            .clicked()
                        {
                            state.color_param = param;
                        }
                    }
                });

            // ---- Secondary selection: which specialization colours ----
            if state.color_param == ColorParam::Specialization {
                ui.strong("Specialization for legend");
                let current = state
                    .spec_choice
                    .as_deref()
                    .map(spec_label)
                    .unwrap_or_default();
                egui::ComboBox::from_id_salt("spec_choice")
                    .selected_text(current)
                    .show_ui(ui, |ui: &mut Ui| {
                        for (label, key) in &spec_choices {
                            let selected = state.spec_choice.as_deref() == Some(key);
                            if ui.selectable_label(selected, label).clicked() {
                                state.spec_choice = Some(key.clone());
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Data", |ui: &mut Ui| {
            if ui.button("Fetch reviews…").clicked() {
                fetch_live(state);
                ui.close_menu();
            }
            if ui.button("Open snapshot…").clicked() {
                open_snapshot_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} courses, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if state.loading {
            ui.spinner();
        }
        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Data loading actions
// ---------------------------------------------------------------------------

/// Scrape both sources and aggregate. Blocks the UI thread for the duration
/// of the two requests.
fn fetch_live(state: &mut AppState) {
    state.loading = true;
    match crate::fetch::fetch_all() {
        Ok((reviews, specs)) => {
            log::info!(
                "aggregating {} reviews across {} specializations",
                reviews.len(),
                specs.len()
            );
            state.ingest(&reviews, &specs);
        }
        Err(e) => {
            log::error!("fetch failed: {e:#}");
            state.status_message = Some(format!("Fetch failed: {e:#}"));
            state.loading = false;
        }
    }
}

/// Load a per-review CSV snapshot. Snapshots carry no specialization pages,
/// so the table gets no membership columns and the filter passes everything.
fn open_snapshot_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open review snapshot")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_snapshot(&path) {
            Ok(reviews) => {
                log::info!("loaded {} reviews from {}", reviews.len(), path.display());
                state.ingest(&reviews, &SpecializationIndex::new());
            }
            Err(e) => {
                log::error!("failed to load snapshot: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
