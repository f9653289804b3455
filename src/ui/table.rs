use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use exoquest::data::aggregate::class_bucket;
use exoquest::data::export::{cell_value, fixed2, header_label};
use exoquest::data::model::{CLASSIFICATION_KEY, PROBABILITY_KEY};
use exoquest::ResultPresenter;

use crate::color::ClassColors;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Results table (central panel, below the charts)
// ---------------------------------------------------------------------------

/// Render every record in projected column order.
pub fn results_table(ui: &mut Ui, state: &ResultPresenter, colors: &ClassColors) {
    let columns = state.columns();
    let records = state.records();

    ui.strong(format!("Prediction results ({} observations)", records.len()));
    if records.is_empty() {
        ui.label("The service returned no rows.");
        return;
    }

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(80.0), columns.len())
            .header(ROW_HEIGHT, |mut header| {
                for key in columns {
                    header.col(|ui| {
                        ui.strong(header_label(key));
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, records.len(), |mut row| {
                    let rec = &records[row.index()];
                    for key in columns {
                        row.col(|ui| {
                            let value = cell_value(rec, key);
                            let text = value.map(|v| v.to_string()).unwrap_or_default();
                            if key == CLASSIFICATION_KEY {
                                let color = colors.color_for(class_bucket(rec.classification()));
                                ui.label(RichText::new(text).color(color).strong());
                            } else if key == PROBABILITY_KEY {
                                match value.and_then(|v| v.as_f64()) {
                                    Some(n) => ui.label(format!("{}%", fixed2(n))),
                                    None => ui.label(text),
                                };
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                });
            });
    });
}
