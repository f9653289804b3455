use std::collections::HashMap;

use super::model::ClassificationResult;

// ---------------------------------------------------------------------------
// Alias table: chartable metrics and the field names they may appear under
// ---------------------------------------------------------------------------

/// A chartable metric and the spellings it may use in a result schema,
/// highest priority first. Matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureAlias {
    pub label: String,
    pub candidates: Vec<String>,
}

impl FeatureAlias {
    pub fn new(label: &str, candidates: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Immutable set of alias entries, in the order the metric picker lists them.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<FeatureAlias>,
}

impl AliasTable {
    pub fn new(entries: Vec<FeatureAlias>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FeatureAlias] {
        &self.entries
    }

    /// Metrics the prediction service is known to report, covering the
    /// display labels it emits, raw mission columns and legacy names.
    pub fn builtin() -> Self {
        Self::new(vec![
            FeatureAlias::new(
                "Orbital Period (days)",
                &[
                    "Planet Orbital Period",
                    "pl_orbper",
                    "koi_period",
                    "orbital_period",
                ],
            ),
            FeatureAlias::new(
                "Planet Radius (R⊕)",
                &["Planet Radius", "pl_rade", "koi_prad", "planet_radius"],
            ),
            FeatureAlias::new(
                "Transit Duration (hours)",
                &[
                    "Transit Duration",
                    "pl_trandurh",
                    "pl_trandur",
                    "koi_duration",
                    "transit_duration",
                ],
            ),
            FeatureAlias::new(
                "Transit Depth (ppm)",
                &["Transit Depth", "pl_trandep", "koi_depth", "transit_depth"],
            ),
            FeatureAlias::new(
                "Equilibrium Temperature (K)",
                &["Equilibrium Temperature", "pl_eqt", "koi_teq"],
            ),
            FeatureAlias::new(
                "Insolation Flux (⊕)",
                &["Insolation Flux", "pl_insol", "koi_insol"],
            ),
            FeatureAlias::new(
                "Probability Score (%)",
                &["Porbability Score", "Probability Score", "confidence"],
            ),
        ])
    }
}

/// A metric present in the current result schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetric {
    pub label: String,
    /// Field name exactly as it appears in the records.
    pub field: String,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Find which alias entries are present in `sample`'s schema.
///
/// For each entry, candidates are tried in priority order against a
/// lowercase index of the record's keys; the first hit wins. Entries without
/// a hit are left out, as are entries whose hit was already claimed by an
/// earlier entry. When keys differ only by case, the first-seen one is used.
pub fn resolve(sample: &ClassificationResult, table: &AliasTable) -> Vec<ResolvedMetric> {
    let mut index: HashMap<String, &str> = HashMap::with_capacity(sample.len());
    for key in sample.keys() {
        index.entry(key.to_lowercase()).or_insert(key);
    }

    let mut resolved: Vec<ResolvedMetric> = Vec::new();
    for alias in table.entries() {
        let hit = alias
            .candidates
            .iter()
            .find_map(|candidate| index.get(&candidate.to_lowercase()).copied());

        let Some(field) = hit else {
            continue;
        };
        if resolved.iter().any(|r| r.field == field) {
            log::debug!("alias '{}' shares field '{field}', skipped", alias.label);
            continue;
        }
        resolved.push(ResolvedMetric {
            label: alias.label.clone(),
            field: field.to_string(),
        });
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ClassificationResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn matches_mission_column_when_label_absent() {
        let rec = record(r#"{"id": 1, "pl_orbper": 3.2}"#);
        let table = AliasTable::new(vec![FeatureAlias::new(
            "Orbital Period",
            &["Planet Orbital Period", "pl_orbper"],
        )]);
        assert_eq!(
            resolve(&rec, &table),
            vec![ResolvedMetric {
                label: "Orbital Period".into(),
                field: "pl_orbper".into(),
            }]
        );
    }

    #[test]
    fn matching_ignores_case_and_keeps_record_spelling() {
        let rec = record(r#"{"Planet orbital period": 3.2, "Planet Radius": 1.1}"#);
        let got = resolve(&rec, &AliasTable::builtin());
        assert_eq!(got[0].field, "Planet orbital period");
        assert_eq!(got[1].field, "Planet Radius");
    }

    #[test]
    fn candidate_priority_beats_key_order() {
        let rec = record(r#"{"koi_period": 1.0, "pl_orbper": 2.0}"#);
        let got = resolve(&rec, &AliasTable::builtin());
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].field, "pl_orbper");

        let swapped = record(r#"{"pl_orbper": 2.0, "koi_period": 1.0}"#);
        assert_eq!(resolve(&swapped, &AliasTable::builtin()), got);
    }

    #[test]
    fn unmatched_entries_are_absent() {
        let rec = record(r#"{"star_id": "TIC 1", "classification": "CANDIDATE"}"#);
        assert!(resolve(&rec, &AliasTable::builtin()).is_empty());
    }

    #[test]
    fn shared_field_is_claimed_once() {
        let rec = record(r#"{"depth": 5}"#);
        let table = AliasTable::new(vec![
            FeatureAlias::new("Depth", &["depth"]),
            FeatureAlias::new("Depth again", &["DEPTH"]),
        ]);
        let got = resolve(&rec, &table);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].label, "Depth");
    }
}
