use anyhow::{Context, Result};

use exoquest::data::catalog::{ColumnType, FeatureCatalog};
use exoquest::ModelKind;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Log-uniform draw in `[lo, hi)`.
    fn log_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (lo.ln() + self.next_f64() * (hi.ln() - lo.ln())).exp()
    }
}

/// Plausible value range for a catalog column.
fn value_range(column: &str) -> (f64, f64) {
    match column {
        "koi_period" | "pl_orbper" => (0.5, 400.0),
        "koi_duration" | "pl_trandurh" | "pl_trandur" => (0.8, 12.0),
        "koi_depth" | "pl_trandep" => (50.0, 20_000.0),
        "koi_prad" | "pl_rade" => (0.5, 25.0),
        "koi_teq" | "pl_eqt" => (200.0, 2_500.0),
        "koi_insol" | "pl_insol" => (0.1, 5_000.0),
        "st_teff" => (3_000.0, 7_500.0),
        "st_logg" => (3.5, 5.0),
        "st_rad" => (0.2, 3.0),
        "st_mass" => (0.2, 2.0),
        "st_tmag" => (6.0, 16.0),
        "st_dist" | "sy_dist" => (10.0, 1_500.0),
        "pl_pnum" => (1.0, 4.0),
        _ => (1.0, 100.0),
    }
}

fn star_column(model: ModelKind) -> &'static str {
    match model {
        ModelKind::Kepler => "kepid",
        ModelKind::K2 => "hostname",
        ModelKind::Tess => "tid",
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let model: ModelKind = args
        .next()
        .as_deref()
        .unwrap_or("tess")
        .parse()
        .context("first argument must be a model name")?;
    let rows: usize = args
        .next()
        .map(|n| n.parse())
        .transpose()
        .context("second argument must be a row count")?
        .unwrap_or(50);

    let columns = FeatureCatalog::builtin().describe_model(model);
    let mut rng = SimpleRng::new(42);

    let output_path = format!("sample_{model}.csv");
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header = vec![star_column(model).to_string()];
    header.extend(columns.iter().map(|c| c.name.clone()));
    writer.write_record(&header)?;

    for i in 0..rows {
        let mut record = Vec::with_capacity(header.len());
        record.push(match model {
            ModelKind::K2 => format!("K2-{}", 100 + i),
            _ => (10_000_000 + i * 12_345).to_string(),
        });
        for col in &columns {
            // Leave the odd cell empty so uploads exercise missing values.
            if rng.next_f64() < 0.03 {
                record.push(String::new());
                continue;
            }
            let (lo, hi) = value_range(&col.name);
            let value = rng.log_uniform(lo, hi);
            record.push(match col.column_type {
                ColumnType::Int => (value.round() as i64).to_string(),
                ColumnType::Float => format!("{value:.4}"),
                ColumnType::String => String::new(),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!(
        "Wrote {rows} {model} observations ({} feature columns) to {output_path}",
        columns.len()
    );
    Ok(())
}
