use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::aggregate::{self, ClassCount, ClassMean};
use crate::data::alias::{self, AliasTable, ResolvedMetric};
use crate::data::catalog::{FeatureCatalog, FeatureColumn};
use crate::data::columns::ColumnProjector;
use crate::data::export::{self, ExportError, ExportFormat};
use crate::data::model::{ClassificationResult, ModelInfo, ModelKind, PredictionResponse};
use crate::service::{PredictError, RequestTicket, RequestToken, WorkerEvent};

// ---------------------------------------------------------------------------
// Phases, notices, errors
// ---------------------------------------------------------------------------

/// Where the presenter is in the predict cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Reading the selected file.
    Uploading,
    /// Waiting on the prediction service.
    Predicting,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message for the user (toast-style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub detail: String,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, detail: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            detail: detail.into(),
        }
    }
}

/// Rejected user actions. None of these change the presenter's phase.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenterError {
    #[error("Please select a model and upload a CSV file")]
    MissingInput,

    #[error("a prediction is already running")]
    Busy,

    #[error("no results yet")]
    NoResults,

    #[error("'{0}' is not a chartable metric for these results")]
    UnknownMetric(String),
}

// ---------------------------------------------------------------------------
// Result set
// ---------------------------------------------------------------------------

/// One successful prediction and everything derived from it once.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub records: Vec<ClassificationResult>,
    pub total: u64,
    pub model_used: String,
    pub columns: Vec<String>,
    pub metrics: Vec<ResolvedMetric>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MetricSelection {
    field: String,
    /// Chosen by the user rather than defaulted.
    explicit: bool,
}

#[derive(Debug, Clone)]
struct InFlight {
    token: RequestToken,
    model: ModelKind,
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Owns the current result set and the derived view-models, independent of
/// rendering. Lives on the UI thread; background work reports back through
/// [`ResultPresenter::handle_event`].
pub struct ResultPresenter {
    catalog: Arc<FeatureCatalog>,
    aliases: Arc<AliasTable>,
    projector: ColumnProjector,

    model: Option<ModelKind>,
    file: Option<PathBuf>,

    phase: Phase,
    generation: u64,
    in_flight: Option<InFlight>,
    /// Abandoned attempt whose worker has not reported back yet. Its request
    /// may still be open, so no new one is started until it ends.
    draining: Option<u64>,

    results: Option<ResultSet>,
    metric: Option<MetricSelection>,

    /// Cached aggregates, rebuilt on result or metric change.
    distribution: Vec<ClassCount>,
    metric_means: Vec<ClassMean>,

    notice: Option<Notice>,
    last_error: Option<String>,
    available_models: Vec<ModelInfo>,
}

impl ResultPresenter {
    pub fn new(catalog: Arc<FeatureCatalog>, aliases: Arc<AliasTable>) -> Self {
        Self {
            catalog,
            aliases,
            projector: ColumnProjector::default(),
            model: None,
            file: None,
            phase: Phase::Idle,
            generation: 0,
            in_flight: None,
            draining: None,
            results: None,
            metric: None,
            distribution: Vec::new(),
            metric_means: Vec::new(),
            notice: None,
            last_error: None,
            available_models: Vec::new(),
        }
    }

    // -- user actions --

    /// Choose the model. Abandons a prediction for a different model.
    pub fn select_model(&mut self, model: ModelKind) {
        if self.model != Some(model) {
            self.abandon_in_flight("model changed");
        }
        self.model = Some(model);
    }

    /// Choose the CSV to upload. Abandons a prediction for a different file.
    pub fn select_file(&mut self, path: PathBuf) {
        if self.file.as_ref() != Some(&path) {
            self.abandon_in_flight("file changed");
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.notice = Some(Notice::new(
            NoticeLevel::Info,
            "File uploaded",
            format!("{name} is ready for analysis"),
        ));
        self.file = Some(path);
    }

    /// Stop waiting on the current prediction, if any.
    pub fn cancel(&mut self) {
        self.abandon_in_flight("cancelled");
    }

    /// Start a prediction for the selected model and file.
    ///
    /// Returns the ticket to hand to the worker. Nothing is sent when an
    /// input is missing or another prediction (current or abandoned) is
    /// still running.
    pub fn predict(&mut self) -> Result<RequestTicket, PresenterError> {
        if self.is_busy() {
            return Err(PresenterError::Busy);
        }
        let (Some(model), Some(path)) = (self.model, self.file.clone()) else {
            let err = PresenterError::MissingInput;
            self.notice = Some(Notice::new(
                NoticeLevel::Warning,
                "Missing information",
                err.to_string(),
            ));
            return Err(err);
        };

        self.generation += 1;
        let token = RequestToken::new(self.generation);
        self.in_flight = Some(InFlight {
            token: token.clone(),
            model,
        });
        self.phase = Phase::Uploading;
        log::info!(
            "prediction {} started: model {model}, file {}",
            self.generation,
            path.display()
        );
        Ok(RequestTicket { token, model, path })
    }

    /// Chart `field` in the metric means view.
    pub fn select_metric(&mut self, field: &str) -> Result<(), PresenterError> {
        let Some(results) = &self.results else {
            return Err(PresenterError::NoResults);
        };
        if !results.metrics.iter().any(|m| m.field == field) {
            return Err(PresenterError::UnknownMetric(field.to_string()));
        }
        self.metric = Some(MetricSelection {
            field: field.to_string(),
            explicit: true,
        });
        self.refresh_metric_means();
        Ok(())
    }

    // -- worker events --

    /// Apply an event from the worker. Returns `false` when the event
    /// belonged to an abandoned attempt and was dropped.
    pub fn handle_event(&mut self, event: WorkerEvent) -> bool {
        match event {
            WorkerEvent::FileRead { generation } => {
                if !self.is_current(generation) {
                    return false;
                }
                self.phase = Phase::Predicting;
                true
            }
            WorkerEvent::Cancelled { generation } => {
                if !self.is_current(generation) {
                    self.finish_draining(generation);
                    return false;
                }
                self.abandon_in_flight("worker cancelled");
                self.finish_draining(generation);
                true
            }
            WorkerEvent::Finished {
                generation,
                outcome,
            } => {
                if !self.is_current(generation) {
                    log::debug!("dropping stale response for prediction {generation}");
                    self.finish_draining(generation);
                    return false;
                }
                let Some(in_flight) = self.in_flight.take() else {
                    return false;
                };
                match outcome {
                    Ok(response) => self.apply_response(in_flight.model, response),
                    Err(err) => self.apply_failure(&err),
                }
                true
            }
            WorkerEvent::Models(Ok(models)) => {
                log::info!("prediction service reports {} models", models.len());
                self.available_models = models;
                true
            }
            WorkerEvent::Models(Err(err)) => {
                log::warn!("could not list models ({}): {err}", err.kind());
                true
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|f| f.token.generation() == generation)
    }

    fn abandon_in_flight(&mut self, reason: &str) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.token.cancel();
            log::info!(
                "prediction {} abandoned: {reason}",
                in_flight.token.generation()
            );
            self.draining = Some(in_flight.token.generation());
            self.phase = if self.results.is_some() {
                Phase::Ready
            } else {
                Phase::Idle
            };
        }
    }

    /// The worker for `generation` has stopped; its request is closed.
    fn finish_draining(&mut self, generation: u64) {
        if self.draining == Some(generation) {
            log::debug!("prediction {generation} drained");
            self.draining = None;
        }
    }

    /// Swap in a new result set in one step.
    fn apply_response(&mut self, requested: ModelKind, response: PredictionResponse) {
        let PredictionResponse {
            results: records,
            total,
            model_used,
        } = response;

        let total = total.unwrap_or(records.len() as u64);
        let model_used = model_used.unwrap_or_else(|| requested.to_string());
        let columns = self.projector.project(&records);
        let metrics = records
            .first()
            .map(|sample| alias::resolve(sample, &self.aliases))
            .unwrap_or_default();

        log::info!(
            "prediction {} complete: {} records, {} columns, {} chartable metrics",
            self.generation,
            records.len(),
            columns.len(),
            metrics.len()
        );

        // The default follows each new result set; a user choice sticks.
        let keep_choice = self.metric.as_ref().is_some_and(|m| m.explicit);
        if !keep_choice {
            self.metric = metrics.first().map(|m| MetricSelection {
                field: m.field.clone(),
                explicit: false,
            });
        }

        self.notice = Some(Notice::new(
            NoticeLevel::Info,
            "Analysis complete",
            format!("Processed {total} observations using {model_used} model"),
        ));
        self.results = Some(ResultSet {
            records,
            total,
            model_used,
            columns,
            metrics,
        });
        self.last_error = None;
        self.phase = Phase::Ready;
        self.refresh_distribution();
        self.refresh_metric_means();
    }

    fn apply_failure(&mut self, err: &PredictError) {
        match err {
            PredictError::ResponseShape(_) => {
                log::error!("prediction {} returned a malformed body: {err}", self.generation)
            }
            _ => log::warn!(
                "prediction {} failed ({}): {err}",
                self.generation,
                err.kind()
            ),
        }
        let message = err.user_message();
        self.notice = Some(Notice::new(
            NoticeLevel::Error,
            "Prediction failed",
            message.clone(),
        ));
        self.last_error = Some(message);
        self.phase = Phase::Error;
    }

    fn refresh_distribution(&mut self) {
        self.distribution = aggregate::distribution(self.records());
    }

    fn refresh_metric_means(&mut self) {
        self.metric_means = match (&self.results, &self.metric) {
            (Some(results), Some(selection)) => {
                aggregate::metric_means(&results.records, &selection.field)
            }
            _ => Vec::new(),
        };
    }

    // -- export --

    /// Render the current results. Reads only; presenter state is untouched.
    pub fn export(&self, format: ExportFormat) -> Result<String, ExportError> {
        let Some(results) = &self.results else {
            return Err(ExportError::Empty);
        };
        match format {
            ExportFormat::Csv => export::to_csv(&results.records, &results.columns),
            ExportFormat::Json => export::to_json(&results.records),
        }
    }

    /// Write the current results to `path`. With no results this does nothing.
    pub fn save_export(&self, path: &Path, format: ExportFormat) -> anyhow::Result<()> {
        if !self.can_export() {
            log::debug!("export skipped: no results");
            return Ok(());
        }
        export::write_export(path, format, self.records(), self.columns())
    }

    // -- view-models --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A request is open: the current one, or an abandoned one that has not
    /// reported back yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || self.draining.is_some()
    }

    /// Waiting only for an abandoned request to end.
    pub fn is_draining(&self) -> bool {
        self.in_flight.is_none() && self.draining.is_some()
    }

    /// Whether the predict action is currently allowed.
    pub fn can_predict(&self) -> bool {
        !self.is_busy() && self.model.is_some() && self.file.is_some()
    }

    pub fn can_export(&self) -> bool {
        !self.records().is_empty()
    }

    pub fn selected_model(&self) -> Option<ModelKind> {
        self.model
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn result_set(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn records(&self) -> &[ClassificationResult] {
        self.results
            .as_ref()
            .map(|r| r.records.as_slice())
            .unwrap_or_default()
    }

    pub fn columns(&self) -> &[String] {
        self.results
            .as_ref()
            .map(|r| r.columns.as_slice())
            .unwrap_or_default()
    }

    pub fn metric_candidates(&self) -> &[ResolvedMetric] {
        self.results
            .as_ref()
            .map(|r| r.metrics.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_metric(&self) -> Option<&str> {
        self.metric.as_ref().map(|m| m.field.as_str())
    }

    /// Display label of the selected metric, falling back to the field name.
    pub fn selected_metric_label(&self) -> Option<&str> {
        let field = self.selected_metric()?;
        Some(
            self.metric_candidates()
                .iter()
                .find(|m| m.field == field)
                .map_or(field, |m| m.label.as_str()),
        )
    }

    pub fn distribution(&self) -> &[ClassCount] {
        &self.distribution
    }

    pub fn metric_means(&self) -> &[ClassMean] {
        &self.metric_means
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, level: NoticeLevel, title: &str, detail: impl Into<String>) {
        self.notice = Some(Notice::new(level, title, detail));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Input columns the selected model expects.
    pub fn expected_columns(&self) -> Vec<FeatureColumn> {
        self.model
            .map(|m| self.catalog.describe_model(m))
            .unwrap_or_default()
    }

    pub fn available_models(&self) -> &[ModelInfo] {
        &self.available_models
    }

    /// Reported accuracy for `model`, if the service listed it.
    pub fn model_accuracy(&self, model: ModelKind) -> Option<f64> {
        self.available_models
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(model.as_str()))
            .and_then(|info| info.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> ResultPresenter {
        ResultPresenter::new(
            Arc::new(FeatureCatalog::builtin()),
            Arc::new(AliasTable::builtin()),
        )
    }

    fn response(json: &str) -> PredictionResponse {
        crate::data::loader::decode_prediction(json.as_bytes()).unwrap()
    }

    fn tess_batch() -> PredictionResponse {
        response(
            r#"{"total": 3, "model_used": "tess", "results": [
                {"id": 1, "star_id": "TIC 1", "classification": "CANDIDATE",
                 "Porbability Score": 80.0, "Planet radius": 2.0,
                 "Transit duration": 3.1, "Planet orbital period": 10.0},
                {"id": 2, "star_id": "TIC 2", "classification": "CANDIDATE",
                 "Porbability Score": 90.0, "Planet radius": 4.0,
                 "Transit duration": "", "Planet orbital period": 20.0},
                {"id": 3, "star_id": "TIC 3", "classification": "FALSE POSITIVE",
                 "Porbability Score": 55.5, "Planet radius": "",
                 "Transit duration": 1.0, "Planet orbital period": 1.5}
            ]}"#,
        )
    }

    fn ready(p: &mut ResultPresenter, batch: PredictionResponse) -> u64 {
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let ticket = p.predict().unwrap();
        let generation = ticket.token.generation();
        assert!(p.handle_event(WorkerEvent::FileRead { generation }));
        assert!(p.handle_event(WorkerEvent::Finished {
            generation,
            outcome: Ok(batch),
        }));
        generation
    }

    #[test]
    fn predict_without_file_is_rejected_in_place() {
        let mut p = presenter();
        p.select_model(ModelKind::Kepler);
        assert_eq!(p.predict().unwrap_err(), PresenterError::MissingInput);
        assert_eq!(p.phase(), Phase::Idle);
        assert!(!p.is_busy());
        assert_eq!(p.notice().map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[test]
    fn second_predict_while_busy_is_rejected() {
        let mut p = presenter();
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let first = p.predict().unwrap();
        assert_eq!(p.phase(), Phase::Uploading);
        assert_eq!(p.predict().unwrap_err(), PresenterError::Busy);
        assert!(!first.token.is_cancelled());
        assert!(!p.can_predict());
    }

    #[test]
    fn phases_follow_worker_progress() {
        let mut p = presenter();
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let generation = p.predict().unwrap().token.generation();
        p.handle_event(WorkerEvent::FileRead { generation });
        assert_eq!(p.phase(), Phase::Predicting);
        p.handle_event(WorkerEvent::Finished {
            generation,
            outcome: Ok(tess_batch()),
        });
        assert_eq!(p.phase(), Phase::Ready);
        assert_eq!(p.records().len(), 3);
        let set = p.result_set().unwrap();
        assert_eq!(set.total, 3);
        assert_eq!(set.model_used, "tess");
        assert_eq!(
            p.columns(),
            [
                "star_id",
                "classification",
                "Porbability Score",
                "Planet radius",
                "Transit duration",
                "Planet orbital period"
            ]
        );
        assert_eq!(
            p.notice().unwrap().detail,
            "Processed 3 observations using tess model"
        );
    }

    #[test]
    fn first_result_set_auto_selects_first_metric() {
        let mut p = presenter();
        ready(&mut p, tess_batch());
        // Alias table order: orbital period before radius.
        assert_eq!(p.selected_metric(), Some("Planet orbital period"));
        assert_eq!(p.selected_metric_label(), Some("Orbital Period (days)"));
        let means = p.metric_means();
        assert_eq!(means[0].label, "CANDIDATE");
        assert_eq!(means[0].mean, 15.0);
        assert_eq!(means[1].label, "FALSE POSITIVE");
        assert_eq!(means[1].mean, 1.5);
        assert_eq!(
            p.distribution().iter().map(|c| c.count).sum::<usize>(),
            3
        );
    }

    #[test]
    fn explicit_metric_survives_new_result_sets() {
        let mut p = presenter();
        ready(&mut p, tess_batch());
        p.select_metric("Planet radius").unwrap();
        assert_eq!(p.metric_means().len(), 1);

        let kepler = response(
            r#"{"results": [{"id": 1, "classification": "CONFIRMED", "Transit Depth": 300}]}"#,
        );
        ready(&mut p, kepler);
        assert_eq!(p.selected_metric(), Some("Planet radius"));
        assert!(p.metric_means().is_empty());
    }

    #[test]
    fn default_metric_follows_new_result_sets() {
        let mut p = presenter();
        ready(&mut p, tess_batch());
        let kepler = response(
            r#"{"results": [{"id": 1, "classification": "CONFIRMED", "Transit Depth": 300}]}"#,
        );
        ready(&mut p, kepler);
        assert_eq!(p.selected_metric(), Some("Transit Depth"));
        assert_eq!(p.metric_means()[0].mean, 300.0);
    }

    #[test]
    fn unknown_metric_is_rejected_without_substitution() {
        let mut p = presenter();
        assert_eq!(
            p.select_metric("Planet radius").unwrap_err(),
            PresenterError::NoResults
        );
        ready(&mut p, tess_batch());
        assert_eq!(
            p.select_metric("koi_teq").unwrap_err(),
            PresenterError::UnknownMetric("koi_teq".into())
        );
        assert_eq!(p.selected_metric(), Some("Planet orbital period"));
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut p = presenter();
        ready(&mut p, tess_batch());
        let generation = p.predict().unwrap().token.generation();
        p.handle_event(WorkerEvent::Finished {
            generation,
            outcome: Err(PredictError::Status {
                status: 400,
                message: "Invalid model type".into(),
            }),
        });
        assert_eq!(p.phase(), Phase::Error);
        assert_eq!(p.last_error(), Some("Invalid model type"));
        assert_eq!(p.records().len(), 3);
        assert!(p.can_predict());
    }

    #[test]
    fn malformed_body_surfaces_generic_message() {
        let mut p = presenter();
        p.select_model(ModelKind::K2);
        p.select_file(PathBuf::from("k2.csv"));
        let generation = p.predict().unwrap().token.generation();
        p.handle_event(WorkerEvent::Finished {
            generation,
            outcome: Err(PredictError::ResponseShape("missing 'results'".into())),
        });
        assert_eq!(p.phase(), Phase::Error);
        assert_eq!(p.last_error(), Some("Prediction failed"));
        assert!(p.result_set().is_none());
    }

    #[test]
    fn changing_model_mid_flight_discards_late_response() {
        let mut p = presenter();
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let ticket = p.predict().unwrap();
        let generation = ticket.token.generation();

        p.select_model(ModelKind::Kepler);
        assert!(ticket.token.is_cancelled());
        assert_eq!(p.phase(), Phase::Idle);
        assert!(p.is_draining());
        assert!(!p.can_predict());
        assert_eq!(p.predict().unwrap_err(), PresenterError::Busy);

        let applied = p.handle_event(WorkerEvent::Finished {
            generation,
            outcome: Ok(tess_batch()),
        });
        assert!(!applied);
        assert!(p.result_set().is_none());
        assert!(!p.is_busy());
        assert!(p.can_predict());
    }

    #[test]
    fn unrelated_stale_event_does_not_end_draining() {
        let mut p = presenter();
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let generation = p.predict().unwrap().token.generation();
        p.cancel();
        p.handle_event(WorkerEvent::Finished {
            generation: generation + 7,
            outcome: Ok(tess_batch()),
        });
        assert!(p.is_draining());
        p.handle_event(WorkerEvent::Cancelled { generation });
        assert!(!p.is_busy());
    }

    #[test]
    fn reselecting_same_model_keeps_request() {
        let mut p = presenter();
        p.select_model(ModelKind::Tess);
        p.select_file(PathBuf::from("obs.csv"));
        let ticket = p.predict().unwrap();
        p.select_model(ModelKind::Tess);
        assert!(!ticket.token.is_cancelled());
        assert!(p.is_busy());
    }

    #[test]
    fn cancel_returns_to_ready_when_results_exist() {
        let mut p = presenter();
        ready(&mut p, tess_batch());
        let ticket = p.predict().unwrap();
        p.cancel();
        assert!(ticket.token.is_cancelled());
        assert_eq!(p.phase(), Phase::Ready);
        assert!(p.is_busy());
        assert!(!p.handle_event(WorkerEvent::Cancelled {
            generation: ticket.token.generation()
        }));
        assert!(!p.is_busy());
    }

    #[test]
    fn export_reads_without_changing_state() {
        let mut p = presenter();
        assert!(matches!(p.export(ExportFormat::Csv), Err(ExportError::Empty)));
        ready(&mut p, tess_batch());
        let phase = p.phase();
        let csv = p.export(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with(
            "Star Id,Classification,Porbability Score,Planet Radius,Transit Duration,Planet Orbital Period\n"
        ));
        assert!(csv.contains(r#""TIC 2","CANDIDATE","90.00%","4.00","","20.00""#));
        assert_eq!(p.phase(), phase);
    }

    #[test]
    fn missing_total_and_model_fall_back() {
        let mut p = presenter();
        ready(
            &mut p,
            response(r#"{"results": [{"classification": "CONFIRMED"}]}"#),
        );
        let set = p.result_set().unwrap();
        assert_eq!(set.total, 1);
        assert_eq!(set.model_used, "tess");
    }

    #[test]
    fn expected_columns_follow_model() {
        let mut p = presenter();
        assert!(p.expected_columns().is_empty());
        p.select_model(ModelKind::Kepler);
        assert_eq!(p.expected_columns()[0].name, "koi_period");
    }

    #[test]
    fn model_listing_feeds_accuracy() {
        let mut p = presenter();
        p.handle_event(WorkerEvent::Models(Ok(vec![ModelInfo {
            name: "kepler".into(),
            accuracy: Some(87.0),
            status: Some("ready".into()),
        }])));
        assert_eq!(p.model_accuracy(ModelKind::Kepler), Some(87.0));
        assert_eq!(p.model_accuracy(ModelKind::Tess), None);
    }
}
