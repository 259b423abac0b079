use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::filter::FilteredView;
use super::model::{Column, NumericColumn, Penguin};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the rows of `view` to `path`. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, missing values as empty fields
/// * `.json`    – array of records, missing values as `null`
/// * `.parquet` – one row group, nullable measurement and sex columns
///
/// Returns the number of rows written.
pub fn export_rows(view: &FilteredView, path: &Path) -> Result<usize> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows: Vec<&Penguin> = view.rows().collect();
    match ext.as_str() {
        "csv" => write_csv(&rows, path),
        "json" => write_json(&rows, path),
        "parquet" | "pq" => write_parquet(&rows, path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("exporting to {}", path.display()))?;

    log::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

fn write_csv(rows: &[&Penguin], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    // `serialize` only emits the header along with the first record.
    if rows.is_empty() {
        writer
            .write_record(Column::ALL.map(Column::name))
            .context("writing CSV header")?;
    }
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(rows: &[&Penguin], path: &Path) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows).context("writing JSON")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn penguin_schema() -> Schema {
    let mut fields = vec![
        Field::new("species", DataType::Utf8, false),
        Field::new("island", DataType::Utf8, false),
    ];
    for col in NumericColumn::ALL {
        fields.push(Field::new(col.name(), DataType::Float64, true));
    }
    fields.push(Field::new("sex", DataType::Utf8, true));
    fields.push(Field::new("year", DataType::Int64, false));
    Schema::new(fields)
}

fn write_parquet(rows: &[&Penguin], path: &Path) -> Result<()> {
    let schema = Arc::new(penguin_schema());

    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|p| p.species.as_str()))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|p| p.island.as_str()))),
    ];
    for col in NumericColumn::ALL {
        let values: Float64Array = rows.iter().map(|p| col.value(p)).collect();
        columns.push(Arc::new(values));
    }
    let sex: StringArray = rows.iter().map(|p| p.sex.map(|s| s.to_string())).collect();
    columns.push(Arc::new(sex));
    columns.push(Arc::new(Int64Array::from_iter_values(
        rows.iter().map(|p| i64::from(p.year)),
    )));

    let batch = RecordBatch::try_new(Arc::clone(&schema), columns).context("building record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("opening parquet writer")?;
    writer.write(&batch).context("writing parquet record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use arrow::array::Array;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::data::filter::filter;
    use crate::data::loader::{load_bundled, load_csv};
    use crate::data::model::{Island, Species};

    fn torgersen_view() -> FilteredView {
        let ds = Arc::new(load_bundled().unwrap());
        filter(&ds, &BTreeSet::new(), &BTreeSet::from([Island::Torgersen]))
    }

    #[test]
    fn csv_export_reloads_to_same_rows() {
        let view = torgersen_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("torgersen.csv");

        let written = export_rows(&view, &path).unwrap();
        assert_eq!(written, 52);

        let reloaded = load_csv(File::open(&path).unwrap()).unwrap();
        let original: Vec<Penguin> = view.rows().cloned().collect();
        assert_eq!(reloaded.rows(), original.as_slice());
    }

    #[test]
    fn json_export_writes_nulls_for_missing_values() {
        let view = torgersen_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("torgersen.json");
        export_rows(&view, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 52);
        // Fourth Torgersen row has no measurements.
        assert!(records[3]["bill_length_mm"].is_null());
        assert_eq!(records[0]["species"], "Adelie");
    }

    #[test]
    fn parquet_export_preserves_nulls() {
        let view = torgersen_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("torgersen.parquet");
        export_rows(&view, &path).unwrap();

        let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.map(|b| b.unwrap()).collect();
        let n_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(n_rows, 52);

        let bill = batches[0].column_by_name("bill_length_mm").unwrap();
        assert!(bill.is_null(3));
        assert!(!bill.is_null(0));
    }

    #[test]
    fn empty_view_exports_no_rows() {
        let ds = Arc::new(load_bundled().unwrap());
        // Gentoo only live on Biscoe.
        let view = filter(
            &ds,
            &BTreeSet::from([Species::Gentoo]),
            &BTreeSet::from([Island::Dream]),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        assert_eq!(export_rows(&view, &path).unwrap(), 0);
    }

    #[test]
    fn empty_csv_export_keeps_the_header() {
        let ds = Arc::new(load_bundled().unwrap());
        let view = filter(
            &ds,
            &BTreeSet::from([Species::Chinstrap]),
            &BTreeSet::from([Island::Torgersen]),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        assert_eq!(export_rows(&view, &path).unwrap(), 0);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n"
        );
    }

    #[test]
    fn header_matches_a_populated_export() {
        let view = torgersen_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("torgersen.csv");
        export_rows(&view, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        let expected: Vec<&str> = Column::ALL.map(Column::name).to_vec();
        assert_eq!(header.split(',').collect::<Vec<_>>(), expected);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let view = torgersen_view();
        let dir = tempfile::tempdir().unwrap();
        let err = export_rows(&view, &dir.path().join("out.xlsx")).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported file extension"));
    }
}
