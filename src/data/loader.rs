use std::io::Read;

use anyhow::{Context, Result, bail};

use super::model::{Penguin, PenguinDataset};

/// The Palmer Penguins table, compiled into the binary.
const BUNDLED_CSV: &str = include_str!("../../data/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the bundled dataset.
pub fn load_bundled() -> Result<PenguinDataset> {
    let dataset = load_csv(BUNDLED_CSV.as_bytes()).context("parsing bundled penguins.csv")?;
    log::info!("Loaded {} penguins from bundled dataset", dataset.len());
    Ok(dataset)
}

/// CSV layout: header row with the eight penguin columns, one observation per
/// line. `NA` (or any unparsable cell) in an optional column becomes a
/// missing value.
pub fn load_csv<R: Read>(source: R) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(source);

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<Penguin>().enumerate() {
        let penguin = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(penguin);
    }

    if rows.is_empty() {
        bail!("CSV contains no rows");
    }

    Ok(PenguinDataset::from_rows(rows))
}
