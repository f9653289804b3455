/// Data layer: record types, schema helpers, aggregation and export.
///
/// Architecture:
/// ```text
///  prediction service body
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode JSON → Vec<ClassificationResult>
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌─────────┐   ┌──────────┐   ┌───────────┐
///   │ columns  │   │  alias    │   │ aggregate  │  counts / per-class means
///   └─────────┘   └──────────┘   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  CSV (projected) / JSON (passthrough)
///   └──────────┘
/// ```
///
/// `catalog` is a static lookup of the input columns each model expects.

pub mod aggregate;
pub mod alias;
pub mod catalog;
pub mod columns;
pub mod export;
pub mod loader;
pub mod model;
