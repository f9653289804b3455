//! Exoplanet transit classification dashboard: result handling core.
//!
//! The egui front end lives in the `exoquest` binary; everything it needs to
//! turn a prediction response into tables, charts and exports is here.

pub mod config;
pub mod data;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use data::model::{ClassificationResult, FieldValue, ModelKind};
pub use state::{Phase, PresenterError, ResultPresenter};
