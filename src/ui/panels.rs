use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use exoquest::data::export::ExportFormat;
use exoquest::service::Worker;
use exoquest::state::{NoticeLevel, Phase};
use exoquest::{ModelKind, ResultPresenter};

use crate::color::ClassColors;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the model picker, file picker and action buttons.
pub fn top_bar(ui: &mut Ui, state: &mut ResultPresenter, worker: &Worker) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let can_export = state.can_export();
            if ui
                .add_enabled(can_export, egui::Button::new("Export CSV…"))
                .clicked()
            {
                save_file_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui
                .add_enabled(can_export, egui::Button::new("Export JSON…"))
                .clicked()
            {
                save_file_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        // ---- Model selector ----
        let current = state
            .selected_model()
            .map(|m| model_label(state, m))
            .unwrap_or_else(|| "Choose a model…".to_string());
        egui::ComboBox::from_id_salt("model_picker")
            .selected_text(current)
            .show_ui(ui, |ui: &mut Ui| {
                for model in ModelKind::ALL {
                    let label = model_label(state, model);
                    if ui
                        .selectable_label(state.selected_model() == Some(model), label)
                        .clicked()
                    {
                        state.select_model(model);
                    }
                }
            });

        let file_label = state
            .selected_file()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No file selected".to_string());
        if ui.button(format!("📂 {file_label}")).clicked() {
            open_file_dialog(state);
        }

        ui.separator();

        if state.is_draining() {
            ui.spinner();
            ui.label("Closing previous request…");
        } else if state.is_busy() {
            ui.spinner();
            let doing = match state.phase() {
                Phase::Uploading => "Reading file…",
                _ => "Analyzing…",
            };
            ui.label(doing);
            if ui.button("Cancel").clicked() {
                state.cancel();
            }
        } else if ui
            .add_enabled(state.can_predict(), egui::Button::new("✨ Predict Exoplanets"))
            .clicked()
        {
            match state.predict() {
                Ok(ticket) => worker.submit(ticket),
                Err(e) => log::info!("predict rejected: {e}"),
            }
        }

        if let Some(set) = state.result_set() {
            ui.separator();
            ui.label(format!(
                "{} observations classified by {}",
                set.records.len(),
                set.model_used
            ));
        }
    });
}

fn model_label(state: &ResultPresenter, model: ModelKind) -> String {
    match state.model_accuracy(model) {
        Some(acc) => format!("{} ({acc:.1}% accuracy)", model.mission_name()),
        None => model.mission_name().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Left side panel – expected columns, metric picker, legend
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut ResultPresenter, colors: &ClassColors) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Metric selector ----
            ui.heading("Chart metric");
            ui.separator();
            let candidates = state.metric_candidates().to_vec();
            if candidates.is_empty() {
                ui.label("No chartable metrics in these results.");
            } else {
                let selected = state.selected_metric().map(str::to_string);
                for metric in &candidates {
                    let is_selected = selected.as_deref() == Some(metric.field.as_str());
                    if ui
                        .selectable_label(is_selected, metric.label.as_str())
                        .on_hover_text(metric.field.as_str())
                        .clicked()
                    {
                        if let Err(e) = state.select_metric(&metric.field) {
                            log::warn!("metric selection rejected: {e}");
                        }
                    }
                }
            }

            ui.add_space(8.0);
            ui.heading("Classes");
            ui.separator();
            for (label, color) in colors.legend_entries() {
                ui.label(RichText::new(format!("■ {label}")).color(color));
            }

            ui.add_space(8.0);
            let title = match state.selected_model() {
                Some(m) => format!("Expected columns ({})", m.mission_name()),
                None => "Expected columns".to_string(),
            };
            egui::CollapsingHeader::new(RichText::new(title).strong())
                .id_salt("expected_columns")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    let columns = state.expected_columns();
                    if state.selected_model().is_none() {
                        ui.label("Choose a model to see its input columns.");
                    } else if columns.is_empty() {
                        ui.label("No column list published for this model.");
                    }
                    for col in columns {
                        ui.horizontal(|ui: &mut Ui| {
                            ui.monospace(col.name.as_str());
                            ui.label(RichText::new(col.column_type.to_string()).weak());
                        });
                        ui.label(RichText::new(&col.description).small());
                        ui.add_space(2.0);
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Bottom bar – notices
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &mut ResultPresenter) {
    ui.horizontal(|ui: &mut Ui| {
        let Some(notice) = state.notice().cloned() else {
            ui.label(RichText::new("Ready").weak());
            return;
        };
        let color = match notice.level {
            NoticeLevel::Info => Color32::LIGHT_GREEN,
            NoticeLevel::Warning => Color32::YELLOW,
            NoticeLevel::Error => Color32::RED,
        };
        ui.label(RichText::new(&notice.title).strong().color(color));
        ui.label(notice.detail.as_str());
        if ui.small_button("✕").clicked() {
            state.dismiss_notice();
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ResultPresenter) {
    let file = rfd::FileDialog::new()
        .set_title("Open transit observations")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("selected {}", path.display());
        state.select_file(path);
    }
}

pub fn save_file_dialog(state: &mut ResultPresenter, format: ExportFormat) {
    let file = rfd::FileDialog::new()
        .set_title("Export predictions")
        .set_file_name(format.default_file_name())
        .add_filter(format.extension().to_uppercase(), &[format.extension()])
        .save_file();

    let Some(path) = file else {
        return;
    };
    match state.save_export(&path, format) {
        Ok(()) => state.set_notice(
            NoticeLevel::Info,
            "Export complete",
            format!("Saved {}", path.display()),
        ),
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            state.set_notice(NoticeLevel::Error, "Export failed", format!("{e:#}"));
        }
    }
}
