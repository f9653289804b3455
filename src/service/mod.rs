//! Prediction service client.
//!
//! The classifier itself lives behind an HTTP API; this module only knows
//! how to hand it a CSV and read back the classified rows. [`worker`] runs
//! those calls off the UI thread.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::data::loader::GENERIC_FAILURE;
use crate::data::model::{ModelInfo, ModelKind, PredictionResponse};

pub mod http;
pub mod worker;

pub use http::HttpPredictionService;
pub use worker::{Worker, WorkerEvent};

/// Errors from reading the upload or talking to the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}

impl PredictError {
    /// Message shown to the user. Server-provided text when there is some,
    /// the generic failure text otherwise.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::ReadFile { path, .. } => {
                format!("Could not read {}", path.display())
            }
            PredictError::Status { message, .. } => message.clone(),
            PredictError::Transport(_) | PredictError::ResponseShape(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }

    /// Short category for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::ReadFile { .. } => "file",
            PredictError::Transport(_) => "transport",
            PredictError::Status { .. } => "status",
            PredictError::ResponseShape(_) => "response_shape",
        }
    }
}

/// One upload to classify.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub model: ModelKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The remote classifier.
pub trait PredictionService: Send + Sync {
    fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse, PredictError>;

    /// Models the service has loaded.
    fn models(&self) -> Result<Vec<ModelInfo>, PredictError>;
}

// ---------------------------------------------------------------------------
// Request tokens
// ---------------------------------------------------------------------------

/// Identifies one prediction attempt.
///
/// The generation is compared when a result arrives; anything but the
/// presenter's current generation is dropped. The shared flag lets the
/// worker skip the network call once the attempt has been abandoned.
#[derive(Debug, Clone)]
pub struct RequestToken {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl RequestToken {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Everything the worker needs to run one prediction.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub token: RequestToken,
    pub model: ModelKind,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = PredictError::Status {
            status: 400,
            message: "Only CSV files are allowed".into(),
        };
        assert_eq!(err.user_message(), "Only CSV files are allowed");
        assert_eq!(
            PredictError::ResponseShape("missing 'results'".into()).user_message(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn cancelling_a_clone_cancels_the_original() {
        let token = RequestToken::new(3);
        let held_by_worker = token.clone();
        assert!(!token.is_cancelled());
        held_by_worker.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token.generation(), 3);
    }
}
