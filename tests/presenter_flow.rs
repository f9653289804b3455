use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use exoquest::data::alias::AliasTable;
use exoquest::data::catalog::FeatureCatalog;
use exoquest::data::export::ExportFormat;
use exoquest::data::loader::decode_prediction;
use exoquest::data::model::{ModelInfo, PredictionResponse};
use exoquest::service::{
    PredictError, PredictionRequest, PredictionService, Worker, WorkerEvent,
};
use exoquest::{ClassificationResult, ModelKind, Phase, PresenterError, ResultPresenter};

const WAIT: Duration = Duration::from_secs(5);

/// Service double: records each request and answers once released.
struct ScriptedService {
    seen: Mutex<Vec<(ModelKind, String, Vec<u8>)>>,
    release: Mutex<Receiver<Result<PredictionResponse, PredictError>>>,
    open: AtomicUsize,
    peak_open: AtomicUsize,
}

impl ScriptedService {
    fn new() -> (Arc<Self>, Sender<Result<PredictionResponse, PredictError>>) {
        let (tx, rx) = mpsc::channel();
        let service = Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            release: Mutex::new(rx),
            open: AtomicUsize::new(0),
            peak_open: AtomicUsize::new(0),
        });
        (service, tx)
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn peak_open(&self) -> usize {
        self.peak_open.load(Ordering::SeqCst)
    }
}

impl PredictionService for ScriptedService {
    fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse, PredictError> {
        let open = self.open.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_open.fetch_max(open, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((request.model, request.file_name, request.bytes));
        let outcome = self
            .release
            .lock()
            .unwrap()
            .recv_timeout(WAIT)
            .unwrap_or_else(|_| Err(PredictError::ResponseShape("test timed out".into())));
        self.open.fetch_sub(1, Ordering::SeqCst);
        outcome
    }

    fn models(&self) -> Result<Vec<ModelInfo>, PredictError> {
        Ok(vec![ModelInfo {
            name: "tess".into(),
            accuracy: Some(77.0),
            status: Some("ready".into()),
        }])
    }
}

fn presenter() -> ResultPresenter {
    ResultPresenter::new(
        Arc::new(FeatureCatalog::builtin()),
        Arc::new(AliasTable::builtin()),
    )
}

fn upload(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "tid,pl_orbper,pl_rade").unwrap();
    writeln!(file, "100,3.5,1.2").unwrap();
    path
}

fn batch() -> PredictionResponse {
    decode_prediction(
        br#"{"success": true, "total": 2, "model_used": "tess", "results": [
            {"id": 1, "star_id": "TIC 100", "classification": "CANDIDATE",
             "Porbability Score": 88.25, "Planet radius": 1.2,
             "Transit duration": 2.5, "Planet orbital period": 3.5},
            {"id": 2, "star_id": "TIC 200", "classification": "FALSE POSITIVE",
             "Porbability Score": 64, "Planet radius": "",
             "Transit duration": 1.0, "Planet orbital period": 7.25}
        ]}"#,
    )
    .unwrap()
}

fn next_event(worker: &Worker) -> WorkerEvent {
    worker.recv_timeout(WAIT).expect("worker event")
}

#[test]
fn upload_predict_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = upload(&dir, "tess_obs.csv");
    let (service, release) = ScriptedService::new();
    let worker = Worker::new(service.clone(), Arc::new(|| {}));
    let mut p = presenter();

    p.select_model(ModelKind::Tess);
    p.select_file(path);
    worker.submit(p.predict().unwrap());
    assert_eq!(p.phase(), Phase::Uploading);

    assert!(p.handle_event(next_event(&worker)));
    assert_eq!(p.phase(), Phase::Predicting);
    assert_eq!(p.predict().unwrap_err(), PresenterError::Busy);

    release.send(Ok(batch())).unwrap();
    assert!(p.handle_event(next_event(&worker)));
    assert_eq!(p.phase(), Phase::Ready);
    assert_eq!(service.calls(), 1);

    {
        let seen = service.seen.lock().unwrap();
        let (model, name, bytes) = &seen[0];
        assert_eq!(*model, ModelKind::Tess);
        assert_eq!(name, "tess_obs.csv");
        assert!(bytes.starts_with(b"tid,pl_orbper"));
    }

    let json = p.export(ExportFormat::Json).unwrap();
    let back: Vec<ClassificationResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), p.records());

    let csv = p.export(ExportFormat::Csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        r#""TIC 100","CANDIDATE","88.25%","1.20","2.50","3.50""#
    );
    assert_eq!(
        lines[2],
        r#""TIC 200","FALSE POSITIVE","64.00%","","1.00","7.25""#
    );

    let out = dir.path().join(ExportFormat::Csv.default_file_name());
    p.save_export(&out, ExportFormat::Csv).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), csv);
}

#[test]
fn stale_response_after_model_switch_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = upload(&dir, "obs.csv");
    let (service, release) = ScriptedService::new();
    let worker = Worker::new(service.clone(), Arc::new(|| {}));
    let mut p = presenter();

    p.select_model(ModelKind::Tess);
    p.select_file(path);
    worker.submit(p.predict().unwrap());
    assert!(p.handle_event(next_event(&worker)));

    p.select_model(ModelKind::Kepler);
    assert_eq!(p.phase(), Phase::Idle);

    release.send(Ok(batch())).unwrap();
    assert!(!p.handle_event(next_event(&worker)));
    assert!(p.result_set().is_none());
    assert!(!p.can_export());
}

#[test]
fn switching_model_mid_flight_never_overlaps_requests() {
    let dir = tempfile::tempdir().unwrap();
    let path = upload(&dir, "obs.csv");
    let (service, release) = ScriptedService::new();
    let worker = Worker::new(service.clone(), Arc::new(|| {}));
    let mut p = presenter();

    p.select_model(ModelKind::Tess);
    p.select_file(path);
    worker.submit(p.predict().unwrap());
    assert!(p.handle_event(next_event(&worker)));

    // The first request is still open on the worker thread.
    p.select_model(ModelKind::Kepler);
    assert!(p.is_busy());
    assert!(!p.can_predict());
    assert_eq!(p.predict().unwrap_err(), PresenterError::Busy);

    release.send(Ok(batch())).unwrap();
    assert!(!p.handle_event(next_event(&worker)));
    assert!(p.can_predict());

    worker.submit(p.predict().unwrap());
    assert!(p.handle_event(next_event(&worker)));
    release.send(Ok(batch())).unwrap();
    assert!(p.handle_event(next_event(&worker)));

    assert_eq!(p.phase(), Phase::Ready);
    assert_eq!(service.calls(), 2);
    assert_eq!(service.peak_open(), 1);
    assert_eq!(service.seen.lock().unwrap()[1].0, ModelKind::Kepler);
}

#[test]
fn unreadable_file_reports_error_without_request() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _release) = ScriptedService::new();
    let worker = Worker::new(service.clone(), Arc::new(|| {}));
    let mut p = presenter();

    p.select_model(ModelKind::K2);
    p.select_file(dir.path().join("missing.csv"));
    worker.submit(p.predict().unwrap());

    assert!(p.handle_event(next_event(&worker)));
    assert_eq!(p.phase(), Phase::Error);
    assert!(p.last_error().unwrap().starts_with("Could not read"));
    assert_eq!(service.calls(), 0);
}

#[test]
fn model_listing_arrives_through_worker() {
    let (service, _release) = ScriptedService::new();
    let worker = Worker::new(service, Arc::new(|| {}));
    let mut p = presenter();

    worker.fetch_models();
    assert!(p.handle_event(next_event(&worker)));
    assert_eq!(p.model_accuracy(ModelKind::Tess), Some(77.0));
}
