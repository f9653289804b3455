use std::sync::Arc;

use eframe::egui;

use exoquest::data::alias::AliasTable;
use exoquest::data::catalog::FeatureCatalog;
use exoquest::service::{HttpPredictionService, Worker};
use exoquest::{AppConfig, ResultPresenter};

use crate::color::ClassColors;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExoQuestApp {
    pub state: ResultPresenter,
    pub worker: Worker,
    pub colors: ClassColors,
}

impl ExoQuestApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        log::info!("prediction service at {}", config.api_url);
        let service = Arc::new(HttpPredictionService::new(config)?);

        let ctx = cc.egui_ctx.clone();
        let worker = Worker::new(service, Arc::new(move || ctx.request_repaint()));
        worker.fetch_models();

        let state = ResultPresenter::new(
            Arc::new(FeatureCatalog::builtin()),
            Arc::new(AliasTable::builtin()),
        );

        Ok(Self {
            state,
            worker,
            colors: ClassColors::default(),
        })
    }

    /// Apply whatever the worker has finished since the last frame.
    fn drain_worker(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            self.state.handle_event(event);
        }
    }
}

impl eframe::App for ExoQuestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker();

        // ---- Top panel: model, file, predict, export ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.worker);
        });

        // ---- Bottom panel: notices ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &mut self.state);
        });

        // ---- Left side panel: expected columns + metric picker ----
        egui::SidePanel::left("side_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.colors);
            });

        // ---- Central panel: charts over the results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.result_set().is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Select a model and a CSV file, then press Predict");
                });
                return;
            }
            ui.columns(2, |cols| {
                plot::distribution_chart(&mut cols[0], &self.state, &self.colors);
                plot::metric_chart(&mut cols[1], &self.state, &self.colors);
            });
            ui.separator();
            table::results_table(ui, &self.state, &self.colors);
        });
    }
}
