use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Opaque row identifier assigned by the prediction service.
pub const ID_KEY: &str = "id";
pub const STAR_ID_KEY: &str = "star_id";
pub const CLASSIFICATION_KEY: &str = "classification";
/// Probability column exactly as the prediction service spells it.
pub const PROBABILITY_KEY: &str = "Porbability Score";
/// Older service builds reported the score under this name.
pub const LEGACY_CONFIDENCE_KEY: &str = "confidence";

// ---------------------------------------------------------------------------
// FieldValue – a single cell of a classification record
// ---------------------------------------------------------------------------

/// A dynamically-typed field value as it arrives from the prediction service.
///
/// Integers and floats are kept apart so that a record serializes back to the
/// exact JSON it was decoded from. Integers above `i64::MAX` land in `UInt`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "JsonValue")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<JsonValue> for FieldValue {
    fn from(val: JsonValue) -> Self {
        match val {
            JsonValue::String(s) => FieldValue::Text(s),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Text(n.to_string())
                }
            }
            JsonValue::Bool(b) => FieldValue::Bool(b),
            JsonValue::Null => FieldValue::Null,
            // Nested arrays / objects are not part of the result schema.
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::UInt(u) => serializer.serialize_u64(*u),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::UInt(u) => write!(f, "{u}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FieldValue {
    /// The value as an `f64` when it is a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::UInt(u) => Some(*u as f64),
            FieldValue::Float(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Like [`as_f64`](Self::as_f64) but also accepts numeric text
    /// (the service sends `""` or `"N/A"` for missing measurements).
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            other => other.as_f64(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// ---------------------------------------------------------------------------
// ClassificationResult – one classified observation
// ---------------------------------------------------------------------------

/// One record returned by the prediction service.
///
/// The field set is open: besides the well-known keys the service attaches
/// whatever feature columns the selected model reports. Key order is the
/// order the service emitted them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    fields: IndexMap<String, FieldValue>,
}

impl ClassificationResult {
    pub fn new(fields: IndexMap<String, FieldValue>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    /// Field names in the order the service emitted them.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn id(&self) -> Option<&FieldValue> {
        self.get(ID_KEY).filter(|v| !v.is_null())
    }

    pub fn star_id(&self) -> Option<&str> {
        self.get(STAR_ID_KEY).and_then(FieldValue::as_str)
    }

    /// Raw classification label, displayed verbatim.
    pub fn classification(&self) -> Option<&str> {
        self.get(CLASSIFICATION_KEY).and_then(FieldValue::as_str)
    }

    /// The probability field, or the legacy `confidence` field when the
    /// record has no probability.
    pub fn probability(&self) -> Option<&FieldValue> {
        self.get(PROBABILITY_KEY)
            .or_else(|| self.get(LEGACY_CONFIDENCE_KEY))
    }

    /// Probability score in `[0, 100]`.
    pub fn confidence(&self) -> Option<f64> {
        self.probability().and_then(FieldValue::coerce_f64)
    }
}

impl FromIterator<(String, FieldValue)> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ModelKind – which trained classifier to use
// ---------------------------------------------------------------------------

/// Mission model understood by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Kepler,
    K2,
    Tess,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Kepler, ModelKind::K2, ModelKind::Tess];

    /// Identifier sent in the `model` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Kepler => "kepler",
            ModelKind::K2 => "k2",
            ModelKind::Tess => "tess",
        }
    }

    pub fn mission_name(self) -> &'static str {
        match self {
            ModelKind::Kepler => "Kepler Mission",
            ModelKind::K2 => "K2 Mission",
            ModelKind::Tess => "TESS Mission",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}' (expected kepler, k2 or tess)")]
pub struct UnknownModel(pub String);

impl FromStr for ModelKind {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kepler" => Ok(ModelKind::Kepler),
            "k2" => Ok(ModelKind::K2),
            "tess" => Ok(ModelKind::Tess),
            _ => Err(UnknownModel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionResponse – a decoded successful response
// ---------------------------------------------------------------------------

/// Result batch returned by a successful prediction call.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub results: Vec<ClassificationResult>,
    pub total: Option<u64>,
    pub model_used: Option<String>,
}

/// Availability entry from the service's model listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}
