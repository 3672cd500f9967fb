//! CSV edge-list loading.
//!
//! The input is a delimited file with a mandatory header row and the three
//! required columns `source`, `target`, and `type`. All values are opaque
//! strings; extra columns are ignored; duplicate rows are kept as-is and
//! become parallel edges downstream.
//!
//! The header is validated before any row is read, so a malformed file is
//! rejected before graph construction starts.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Column names that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 3] = ["source", "target", "type"];

/// One row of the input edge list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    /// Name of the originating node.
    pub source: String,
    /// Name of the destination node.
    pub target: String,
    /// Relationship type, used verbatim as the edge hover label.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Read all edge records from the CSV at `path`.
///
/// # Errors
///
/// Returns [`Error::Data`] if the file cannot be opened, the header row is
/// missing one of [`REQUIRED_COLUMNS`], or a row fails to parse.
#[instrument]
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::data(format!("cannot open {}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::data(format!("cannot read header row: {e}")))?
        .clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(Error::data(format!(
                "missing required column `{required}` (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<EdgeRecord>() {
        let record = row.map_err(|e| Error::data(format!("malformed row: {e}")))?;
        records.push(record);
    }

    debug!(rows = records.len(), "loaded edge list");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{EdgeRecord, load_edges};
    use crate::error::Error;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_csv("source,target,type\nA,B,friend\nB,C,mentor\n");
        let records = load_edges(file.path()).expect("load");
        assert_eq!(
            records,
            vec![
                EdgeRecord {
                    source: "A".into(),
                    target: "B".into(),
                    kind: "friend".into(),
                },
                EdgeRecord {
                    source: "B".into(),
                    target: "C".into(),
                    kind: "mentor".into(),
                },
            ]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv("source,target,type,weight\nA,B,friend,3\n");
        let records = load_edges(file.path()).expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "friend");
    }

    #[test]
    fn duplicate_rows_are_kept() {
        let file = write_csv("source,target,type\nA,B,friend\nA,B,friend\n");
        let records = load_edges(file.path()).expect("load");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let err = load_edges(std::path::Path::new("definitely/not/here.csv"))
            .expect_err("should fail");
        assert!(matches!(err, Error::Data { .. }));
    }

    #[test]
    fn missing_target_column_is_a_data_error() {
        let file = write_csv("source,type\nA,friend\n");
        let err = load_edges(file.path()).expect_err("should fail");
        match err {
            Error::Data { reason } => assert!(reason.contains("`target`"), "{reason}"),
            other => panic!("expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_yields_no_records() {
        let file = write_csv("source,target,type\n");
        let records = load_edges(file.path()).expect("load");
        assert!(records.is_empty());
    }
}
