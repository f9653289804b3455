use indexmap::IndexMap;

use super::model::ClassificationResult;

/// Classification labels the charts know about, uppercased.
pub const KNOWN_CLASSES: [&str; 3] = ["CONFIRMED", "CANDIDATE", "FALSE POSITIVE"];
/// Bucket for missing or unrecognised labels.
pub const UNKNOWN_CLASS: &str = "UNKNOWN";

/// Number of records in one classification bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCount {
    pub label: String,
    pub count: usize,
}

/// Mean of a metric over the records of one classification bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMean {
    pub label: String,
    pub mean: f64,
    /// How many records contributed a usable value.
    pub samples: usize,
}

/// Aggregation bucket for a record's raw label.
pub fn class_bucket(label: Option<&str>) -> &'static str {
    let Some(label) = label else {
        return UNKNOWN_CLASS;
    };
    let upper = label.trim().to_uppercase();
    KNOWN_CLASSES
        .iter()
        .find(|known| **known == upper)
        .copied()
        .unwrap_or(UNKNOWN_CLASS)
}

/// Record count per classification bucket, buckets in first-seen order.
pub fn distribution(records: &[ClassificationResult]) -> Vec<ClassCount> {
    let mut counts: IndexMap<&'static str, usize> = IndexMap::new();
    for rec in records {
        *counts.entry(class_bucket(rec.classification())).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| ClassCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Per-bucket mean of `field`.
///
/// Values that are not numeric (after coercing numeric text) or not finite
/// are skipped entirely. Buckets left with no values are omitted. Buckets
/// are in first-seen order among contributing records.
pub fn metric_means(records: &[ClassificationResult], field: &str) -> Vec<ClassMean> {
    let mut sums: IndexMap<&'static str, (f64, usize)> = IndexMap::new();
    for rec in records {
        let Some(value) = rec.get(field).and_then(|v| v.coerce_f64()) else {
            continue;
        };
        let slot = sums.entry(class_bucket(rec.classification())).or_insert((0.0, 0));
        slot.0 += value;
        slot.1 += 1;
    }
    sums.into_iter()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(label, (sum, n))| ClassMean {
            label: label.to_string(),
            mean: sum / n as f64,
            samples: n,
        })
        .collect()
}
