use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::ModelKind;

// ---------------------------------------------------------------------------
// Feature catalog: expected input columns per model
// ---------------------------------------------------------------------------

/// Declared type of an input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Float,
    Int,
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::Float => "float",
            ColumnType::Int => "int",
            ColumnType::String => "string",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnInfo {
    description: &'static str,
    column_type: ColumnType,
}

/// One expected column, as shown in the "Expected Columns" listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureColumn {
    pub name: String,
    pub description: String,
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, Default)]
struct ModelFeatures {
    /// Keyed by column name; iteration order is the fallback display order.
    columns: BTreeMap<&'static str, ColumnInfo>,
    order: Option<Vec<&'static str>>,
}

/// Read-only registry of the input columns each model expects.
///
/// Built once at startup and shared by reference; nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    models: BTreeMap<ModelKind, ModelFeatures>,
}

impl FeatureCatalog {
    /// Describe the columns a model expects, by model identifier.
    /// Unknown identifiers describe nothing.
    pub fn describe(&self, model_id: &str) -> Vec<FeatureColumn> {
        match model_id.parse::<ModelKind>() {
            Ok(kind) => self.describe_model(kind),
            Err(_) => Vec::new(),
        }
    }

    /// Describe the columns of `kind` in display order.
    ///
    /// With a declared order, the listed names come first and any column the
    /// list leaves out follows in name order. Without one, columns are listed
    /// in ascending byte-wise name order.
    pub fn describe_model(&self, kind: ModelKind) -> Vec<FeatureColumn> {
        let Some(features) = self.models.get(&kind) else {
            return Vec::new();
        };

        let mut names: Vec<&'static str> = Vec::with_capacity(features.columns.len());
        if let Some(order) = &features.order {
            for name in order {
                if features.columns.contains_key(name) && !names.contains(name) {
                    names.push(*name);
                }
            }
        }
        for name in features.columns.keys() {
            if !names.contains(name) {
                names.push(*name);
            }
        }

        names
            .into_iter()
            .filter_map(|name| {
                let info = features.columns.get(name)?;
                Some(FeatureColumn {
                    name: name.to_string(),
                    description: info.description.to_string(),
                    column_type: info.column_type,
                })
            })
            .collect()
    }

    fn with_model(
        mut self,
        kind: ModelKind,
        columns: &[(&'static str, &'static str, ColumnType)],
        order: Option<&[&'static str]>,
    ) -> Self {
        let columns = columns
            .iter()
            .map(|&(name, description, column_type)| {
                (
                    name,
                    ColumnInfo {
                        description,
                        column_type,
                    },
                )
            })
            .collect();
        self.models.insert(
            kind,
            ModelFeatures {
                columns,
                order: order.map(|o| o.to_vec()),
            },
        );
        self
    }

    /// The catalog matching the models the prediction service ships.
    pub fn builtin() -> Self {
        use ColumnType::{Float, Int};

        const KEPLER: &[(&str, &str, ColumnType)] = &[
            ("koi_period", "Orbital period (days)", Float),
            ("koi_duration", "Transit duration (hours)", Float),
            ("koi_depth", "Transit depth (ppm)", Float),
            ("koi_prad", "Planet radius (R⊕)", Float),
            ("koi_teq", "Equilibrium temperature (K)", Float),
            ("koi_insol", "Insolation flux (⊕)", Float),
        ];
        const KEPLER_ORDER: &[&str] = &[
            "koi_period",
            "koi_duration",
            "koi_depth",
            "koi_prad",
            "koi_teq",
            "koi_insol",
        ];

        // No declared order: listed by name.
        const K2: &[(&str, &str, ColumnType)] = &[
            ("pl_orbper", "Planet orbital period (days)", Float),
            ("pl_trandur", "Transit duration (hours)", Float),
            ("pl_trandep", "Transit depth (%)", Float),
            ("pl_rade", "Planet radius (R⊕)", Float),
            ("pl_insol", "Insolation flux (⊕)", Float),
            ("pl_eqt", "Equilibrium temperature (K)", Float),
            ("st_teff", "Star effective temperature (K)", Float),
            ("st_logg", "Surface gravity (log g)", Float),
            ("st_rad", "Star radius (R☉)", Float),
            ("st_mass", "Star mass (M☉)", Float),
            ("sy_dist", "Distance (pc)", Float),
        ];

        const TESS: &[(&str, &str, ColumnType)] = &[
            ("st_pmra", "Star motion east–west", Float),
            ("st_pmdec", "Star motion north–south", Float),
            ("pl_orbper", "Planet orbital period (days)", Float),
            ("pl_trandurh", "Transit duration (hours)", Float),
            ("pl_trandep", "Transit depth (ppm)", Float),
            ("pl_rade", "Planet radius (R⊕)", Float),
            ("pl_insol", "Starlight received (⊕)", Float),
            ("pl_eqt", "Equilibrium temperature (K)", Float),
            ("st_tmag", "TESS magnitude", Float),
            ("st_dist", "Distance (pc)", Float),
            ("st_teff", "Star effective temperature (K)", Float),
            ("st_logg", "Surface gravity (log g)", Float),
            ("st_rad", "Star radius (R☉)", Float),
            ("pl_pnum", "Number of planet candidates", Int),
        ];
        const TESS_ORDER: &[&str] = &[
            "st_pmra",
            "st_pmdec",
            "pl_orbper",
            "pl_trandurh",
            "pl_trandep",
            "pl_rade",
            "pl_insol",
            "pl_eqt",
            "st_tmag",
            "st_dist",
            "st_teff",
            "st_logg",
            "st_rad",
            "pl_pnum",
        ];

        FeatureCatalog::default()
            .with_model(ModelKind::Kepler, KEPLER, Some(KEPLER_ORDER))
            .with_model(ModelKind::K2, K2, None)
            .with_model(ModelKind::Tess, TESS, Some(TESS_ORDER))
    }
}
