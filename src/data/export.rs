use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::aggregate::AggregateRow;

/// Write an analysis result to disk.  Dispatch by extension, mirroring the
/// loader: `.csv` or `.json`.
pub fn write_rows(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, rows),
        "json" => write_json(path, rows),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

fn write_csv(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, rows).context("writing JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::Builder;

    use super::*;

    fn sample_rows() -> Vec<AggregateRow> {
        vec![
            AggregateRow {
                value: "Acme".to_string(),
                count: 2,
                average_price: Some(15.0),
            },
            AggregateRow {
                value: "Bolt".to_string(),
                count: 1,
                average_price: Some(5.0),
            },
        ]
    }

    #[test]
    fn csv_export_round_trips_columns() {
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        write_rows(file.path(), &sample_rows()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("value,count,average_price"));
        assert_eq!(lines.next(), Some("Acme,2,15.0"));
    }

    #[test]
    fn json_export_is_parseable() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        write_rows(file.path(), &sample_rows()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["value"], "Acme");
        assert_eq!(parsed[1]["count"], 1);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(write_rows(file.path(), &sample_rows()).is_err());
    }
}
