use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use super::{PredictError, PredictionRequest, PredictionService, RequestTicket};
use crate::data::model::{ModelInfo, PredictionResponse};

/// Progress reported back to the UI thread.
#[derive(Debug)]
pub enum WorkerEvent {
    /// The upload was read; the request is about to be sent.
    FileRead { generation: u64 },
    /// The attempt was abandoned before the request went out.
    Cancelled { generation: u64 },
    Finished {
        generation: u64,
        outcome: Result<PredictionResponse, PredictError>,
    },
    Models(Result<Vec<ModelInfo>, PredictError>),
}

/// Called after every event so the UI can schedule a repaint.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

/// Runs file reads and service calls on background threads.
///
/// Results come back over a channel and are applied by whoever owns the
/// presenter; the worker never touches presenter state.
pub struct Worker {
    service: Arc<dyn PredictionService>,
    tx: Sender<WorkerEvent>,
    rx: Receiver<WorkerEvent>,
    wake: Wake,
}

impl Worker {
    pub fn new(service: Arc<dyn PredictionService>, wake: Wake) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            service,
            tx,
            rx,
            wake,
        }
    }

    /// Read the ticket's file and send it for prediction.
    pub fn submit(&self, ticket: RequestTicket) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let wake = Arc::clone(&self.wake);

        std::thread::spawn(move || {
            let generation = ticket.token.generation();
            let emit = |event: WorkerEvent| {
                if tx.send(event).is_err() {
                    log::debug!("worker event for generation {generation} had no receiver");
                }
                wake();
            };

            let bytes = match std::fs::read(&ticket.path) {
                Ok(bytes) => bytes,
                Err(source) => {
                    emit(WorkerEvent::Finished {
                        generation,
                        outcome: Err(PredictError::ReadFile {
                            path: ticket.path.clone(),
                            source,
                        }),
                    });
                    return;
                }
            };

            if ticket.token.is_cancelled() {
                log::info!("prediction {generation} cancelled before upload");
                emit(WorkerEvent::Cancelled { generation });
                return;
            }
            emit(WorkerEvent::FileRead { generation });

            let request = PredictionRequest {
                model: ticket.model,
                file_name: upload_name(&ticket.path),
                bytes,
            };
            let outcome = service.predict(request);
            emit(WorkerEvent::Finished {
                generation,
                outcome,
            });
        });
    }

    /// Fetch the service's model listing in the background.
    pub fn fetch_models(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let wake = Arc::clone(&self.wake);
        std::thread::spawn(move || {
            let _ = tx.send(WorkerEvent::Models(service.models()));
            wake();
        });
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<WorkerEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

fn upload_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv")
        .to_string()
}
