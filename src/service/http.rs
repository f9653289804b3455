use reqwest::blocking::{multipart, Client};

use super::{PredictError, PredictionRequest, PredictionService};
use crate::config::AppConfig;
use crate::data::loader::{decode_error_message, decode_models, decode_prediction};
use crate::data::model::{ModelInfo, PredictionResponse};

/// Talks to the prediction service over HTTP.
///
/// Blocking client: calls are made from the worker thread, never the UI.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    config: AppConfig,
    client: Client,
}

impl HttpPredictionService {
    pub fn new(config: AppConfig) -> Result<Self, PredictError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn read_body(response: reqwest::blocking::Response) -> Result<Vec<u8>, PredictError> {
        let status = response.status();
        let body = response.bytes()?;
        if !status.is_success() {
            return Err(PredictError::Status {
                status: status.as_u16(),
                message: decode_error_message(&body),
            });
        }
        Ok(body.to_vec())
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse, PredictError> {
        let size = request.bytes.len();
        let file = multipart::Part::bytes(request.bytes)
            .file_name(request.file_name.clone())
            .mime_str("text/csv")?;
        let form = multipart::Form::new()
            .part("file", file)
            .text("model", request.model.as_str());

        log::info!(
            "POST {} ({}, {size} bytes, model {})",
            self.config.predict_url(),
            request.file_name,
            request.model
        );
        let response = self
            .client
            .post(self.config.predict_url())
            .multipart(form)
            .send()?;

        let body = Self::read_body(response)?;
        decode_prediction(&body)
    }

    fn models(&self) -> Result<Vec<ModelInfo>, PredictError> {
        let response = self.client.get(self.config.models_url()).send()?;
        let body = Self::read_body(response)?;
        decode_models(&body)
    }
}
