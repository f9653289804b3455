use super::model::{
    ClassificationResult, CLASSIFICATION_KEY, ID_KEY, LEGACY_CONFIDENCE_KEY, PROBABILITY_KEY,
    STAR_ID_KEY,
};

// ---------------------------------------------------------------------------
// Column projection: display order for an arbitrary record array
// ---------------------------------------------------------------------------

/// Derives the table column order for a result set.
///
/// The pinned prefix always comes first, in declared order, whether or not
/// the records carry those fields. The rest are the keys of the first record
/// that are neither pinned nor excluded, in the order they appear there.
///
/// A legacy `confidence` field is shown under the pinned probability column
/// when the first record has no probability field, and gets no column of
/// its own.
///
/// Only the first record is scanned. Fields that appear in later records
/// alone do not get a column (they still reach the JSON export).
#[derive(Debug, Clone)]
pub struct ColumnProjector {
    prefix: Vec<String>,
    excluded: Vec<String>,
}

impl Default for ColumnProjector {
    fn default() -> Self {
        Self::new(&[STAR_ID_KEY, CLASSIFICATION_KEY, PROBABILITY_KEY], &[ID_KEY])
    }
}

impl ColumnProjector {
    pub fn new(prefix: &[&str], excluded: &[&str]) -> Self {
        let mut pinned: Vec<String> = Vec::with_capacity(prefix.len());
        for p in prefix {
            if !pinned.iter().any(|x| x == p) {
                pinned.push(p.to_string());
            }
        }
        Self {
            prefix: pinned,
            excluded: excluded.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Ordered, duplicate-free column keys for `records`.
    pub fn project(&self, records: &[ClassificationResult]) -> Vec<String> {
        let mut columns = self.prefix.clone();

        let Some(first) = records.first() else {
            return columns;
        };

        let folds_legacy = self.prefix.iter().any(|p| p == PROBABILITY_KEY)
            && first.get(PROBABILITY_KEY).is_none();

        for key in first.keys() {
            let pinned_or_excluded = self.prefix.iter().any(|p| p == key)
                || self.excluded.iter().any(|e| e == key)
                || (folds_legacy && key == LEGACY_CONFIDENCE_KEY);
            if !pinned_or_excluded && !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
        columns
    }
}
