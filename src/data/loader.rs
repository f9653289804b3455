use serde_json::Value as JsonValue;

use super::model::{ClassificationResult, ModelInfo, PredictionResponse};
use crate::service::PredictError;

/// Shown when a failed response carries no usable message.
pub const GENERIC_FAILURE: &str = "Prediction failed";

// ---------------------------------------------------------------------------
// Success bodies
// ---------------------------------------------------------------------------

/// Decode a successful `/api/predict` body.
///
/// Expected schema:
///
/// ```json
/// {
///   "results": [ { "id": 1, "star_id": "TIC 123", "classification": "CANDIDATE", ... } ],
///   "total": 1,
///   "model_used": "tess"
/// }
/// ```
///
/// `results` is required and must be an array of objects; `total` and
/// `model_used` are optional and ignored when mistyped.
pub fn decode_prediction(body: &[u8]) -> Result<PredictionResponse, PredictError> {
    let root: JsonValue = serde_json::from_slice(body)
        .map_err(|e| PredictError::ResponseShape(format!("body is not JSON: {e}")))?;

    let obj = root
        .as_object()
        .ok_or_else(|| PredictError::ResponseShape("expected a JSON object".into()))?;

    let rows = obj
        .get("results")
        .ok_or_else(|| PredictError::ResponseShape("missing 'results'".into()))?
        .as_array()
        .ok_or_else(|| PredictError::ResponseShape("'results' is not an array".into()))?;

    let mut results = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let fields = row
            .as_object()
            .ok_or_else(|| PredictError::ResponseShape(format!("result {i} is not an object")))?;
        results.push(
            fields
                .iter()
                .map(|(key, val)| (key.clone(), val.clone().into()))
                .collect::<ClassificationResult>(),
        );
    }

    Ok(PredictionResponse {
        results,
        total: obj.get("total").and_then(JsonValue::as_u64),
        model_used: obj
            .get("model_used")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
    })
}

/// Decode a `/api/models` listing.
pub fn decode_models(body: &[u8]) -> Result<Vec<ModelInfo>, PredictError> {
    serde_json::from_slice(body)
        .map_err(|e| PredictError::ResponseShape(format!("model listing: {e}")))
}

// ---------------------------------------------------------------------------
// Failure bodies
// ---------------------------------------------------------------------------

/// Pull the server's `error` message out of a failed response body.
/// Falls back to [`GENERIC_FAILURE`] when absent or unparseable.
pub fn decode_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<JsonValue>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(JsonValue::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
