use std::path::Path;

use anyhow::{Context, Result};

use super::model::{ClassificationResult, FieldValue, PROBABILITY_KEY};

// ---------------------------------------------------------------------------
// Export formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("exoplanet_predictions.{}", self.extension())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no results to export")]
    Empty,

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Header label for a column key: underscores become spaces and each word is
/// capitalised. The probability column keeps its key verbatim.
pub fn header_label(key: &str) -> String {
    if key == PROBABILITY_KEY {
        return key.to_string();
    }
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two decimal places, with exact ties rounded away from zero.
///
/// `{:.2}` alone rounds `2.125` to `2.12`; published exports read `2.13`.
pub fn fixed2(n: f64) -> String {
    let exact = format!("{:.30}", n.abs());
    let is_tie = exact
        .split_once('.')
        .map(|(_, frac)| frac.as_bytes())
        .is_some_and(|frac| frac[2] == b'5' && frac[3..].iter().all(|&d| d == b'0'));
    if is_tie {
        // Lands on the next cent, far from any tie.
        format!("{:.2}", n + 0.005_f64.copysign(n))
    } else {
        format!("{n:.2}")
    }
}

/// Value shown under column `key`. The probability column falls back to the
/// legacy `confidence` field.
pub fn cell_value<'a>(record: &'a ClassificationResult, key: &str) -> Option<&'a FieldValue> {
    if key == PROBABILITY_KEY {
        record.probability()
    } else {
        record.get(key)
    }
}

/// Text of one CSV cell before quoting.
pub fn format_cell(key: &str, value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value.as_f64() {
        Some(n) if key == PROBABILITY_KEY => format!("{}%", fixed2(n)),
        Some(n) => fixed2(n),
        None => value.to_string(),
    }
}

/// Render `records` as CSV in the given column order.
///
/// The header uses the human-readable labels; every data cell is quoted.
/// Lines are joined with `\n` and the output has no trailing newline.
pub fn to_csv(records: &[ClassificationResult], columns: &[String]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut buf: Vec<u8> = Vec::new();
    {
        let mut header = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(&mut buf);
        header.write_record(columns.iter().map(|c| header_label(c)))?;
        header.flush().map_err(csv::Error::from)?;
    }
    {
        let mut rows = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(&mut buf);
        for rec in records {
            rows.write_record(columns.iter().map(|c| format_cell(c, cell_value(rec, c))))?;
        }
        rows.flush().map_err(csv::Error::from)?;
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(String::from_utf8(buf)?)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// The full result array, unprojected, pretty-printed with two-space indent.
pub fn to_json(records: &[ClassificationResult]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render and write an export artifact to `path`.
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    records: &[ClassificationResult],
    columns: &[String],
) -> Result<()> {
    let text = match format {
        ExportFormat::Csv => to_csv(records, columns),
        ExportFormat::Json => to_json(records),
    }
    .with_context(|| format!("rendering {} export", format.extension()))?;

    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}
