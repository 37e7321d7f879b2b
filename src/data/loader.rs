use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Catalog, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a component catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – comma-delimited, first row is the header (primary format)
/// * `.json`    – `[{ "Supplier": "...", "Price": "3.20", ... }, ...]`
/// * `.parquet` – flat scalar columns, one record per row
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row of field names, one record per data row.
///
/// Values are paired with header fields positionally: a short row simply
/// omits its trailing fields, values past the end of the header are dropped.
/// No further field-count validation is applied.
fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let fields: Vec<(String, String)> = columns
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(Record::new(fields));
    }

    Ok(Catalog::new(columns, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Supplier": "Acme", "Supplier Device Package": "8-SOIC", "Price": 3.2 },
///   ...
/// ]
/// ```
///
/// Scalar values are stringified; null fields are omitted from the record.
fn load_json(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut fields = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            if val.is_null() {
                continue;
            }
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            fields.push((key.clone(), json_to_string(val)));
        }
        records.push(Record::new(fields));
    }

    Ok(Catalog::new(columns, records))
}

fn json_to_string(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a catalog from a Parquet file with flat scalar columns
/// (Utf8, Int32/64, Float32/64, Boolean).  Every cell is stringified; null
/// cells are omitted from their record, like the trailing fields of a short
/// CSV row.
fn load_parquet(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        for row in 0..batch.num_rows() {
            let mut fields = Vec::with_capacity(columns.len());
            for (col_idx, name) in columns.iter().enumerate() {
                let value = scalar_to_string(batch.column(col_idx), row)
                    .with_context(|| format!("Row {row}: failed to read '{name}'"))?;
                if let Some(value) = value {
                    fields.push((name.clone(), value));
                }
            }
            records.push(Record::new(fields));
        }
    }

    Ok(Catalog::new(columns, records))
}

/// Stringify a single scalar cell; `None` for nulls.
fn scalar_to_string(col: &Arc<dyn Array>, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
            arr.value(row).to_string()
        }
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            arr.value(row).to_string()
        }
        other => bail!("Unsupported parquet column type: {other:?}"),
    };
    Ok(Some(value))
}
