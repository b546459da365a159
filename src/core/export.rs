// ScanScope - core/export.rs
//
// CSV and JSON export of annotated service records.
// Core layer: writes to any Write trait object. The app layer flattens
// records and their annotations into ExportRow values first, so this
// module stays free of app-layer types.

use crate::util::constants::MAX_EXPORT_ROWS;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One annotated record, flattened for export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub host: String,
    pub port: u16,
    pub service: String,
    pub product: String,
    pub version: String,
    pub checked: bool,
    pub comment: String,
}

/// Export rows to CSV.
///
/// Columns: host, port, service, product, version, checked, comment.
pub fn export_csv<W: Write>(
    rows: &[ExportRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_row_count(rows)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        // Serialize derives the header from the field names on first write.
        csv_writer.serialize(row).map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;
    }
    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(rows.len())
}

/// Export rows to JSON (pretty-printed array of objects).
pub fn export_json<W: Write>(
    rows: &[ExportRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_row_count(rows)?;

    serde_json::to_writer_pretty(writer, rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows.len())
}

fn check_row_count(rows: &[ExportRow]) -> Result<(), ExportError> {
    if rows.len() > MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count: rows.len(),
            max: MAX_EXPORT_ROWS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_row(host: &str, port: u16, checked: bool, comment: &str) -> ExportRow {
        ExportRow {
            host: host.to_string(),
            port,
            service: "ssh".to_string(),
            product: "OpenSSH".to_string(),
            version: "8.9".to_string(),
            checked,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![
            make_row("10.0.0.5", 22, true, "known bastion"),
            make_row("10.0.0.6", 22, false, ""),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("host,port,service,product,version,checked,comment"));
        assert!(output.contains("10.0.0.5,22,ssh,OpenSSH,8.9,true,known bastion"));
        assert!(output.contains("10.0.0.6,22,ssh,OpenSSH,8.9,false,"));
    }

    #[test]
    fn test_json_export() {
        let rows = vec![make_row("10.0.0.5", 22, false, "")];
        let mut buf = Vec::new();
        let count = export_json(&rows, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"host\": \"10.0.0.5\""));
        assert!(output.contains("\"port\": 22"));
        assert!(output.contains("\"checked\": false"));
    }

    #[test]
    fn test_csv_escapes_comment_commas() {
        let rows = vec![make_row("10.0.0.5", 22, false, "needs review, then close")];
        let mut buf = Vec::new();
        export_csv(&rows, &mut buf, &PathBuf::from("out.csv")).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"needs review, then close\""));
    }
}
