//! Static historical-pandemic records.
//!
//! Records are read once from a JSON array and never written back. A missing
//! file is a normal state (no data), not an error.

use crate::errors::{EchoError, EchoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the dashboard looks for records when no path is given.
pub const DEFAULT_DATA_PATH: &str = "data/pandemics.json";

/// Example shown to users so they can create their own data file.
pub const SAMPLE_DATA_STRUCTURE: &str = r#"[
  {
    "name": "COVID-19",
    "period": "2019-2023",
    "pathogen": "SARS-CoV-2",
    "deaths": "6.9+ million",
    "mortality_rate": 2,
    "transmission": "Respiratory droplets, airborne",
    "lessons": [
      "Early detection crucial",
      "Global cooperation essential"
    ]
  }
]"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub name: String,
    pub period: String,
    pub pathogen: String,
    /// Free text, e.g. "50+ million".
    pub deaths: String,
    #[serde(default)]
    pub mortality_rate: f64,
    pub transmission: String,
    #[serde(default)]
    pub lessons: Vec<String>,
}

/// Outcome of loading the data file.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryLoad {
    Loaded {
        path: PathBuf,
        records: Vec<HistoricalRecord>,
    },
    /// File absent; display continues with an empty set.
    Missing { path: PathBuf },
}

impl HistoryLoad {
    pub fn records(&self) -> &[HistoricalRecord] {
        match self {
            Self::Loaded { records, .. } => records,
            Self::Missing { .. } => &[],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Load records from `path`.
///
/// Missing file → `Ok(HistoryLoad::Missing)`. Unreadable or malformed file → error.
pub fn load_records(path: impl AsRef<Path>) -> EchoResult<HistoryLoad> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "historical data file not found");
            return Ok(HistoryLoad::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(EchoError::io(path, e)),
    };

    let records = parse_records(&content).map_err(|e| EchoError::Data {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), count = records.len(), "loaded historical records");

    Ok(HistoryLoad::Loaded {
        path: path.to_path_buf(),
        records,
    })
}

pub fn parse_records(json: &str) -> serde_json::Result<Vec<HistoricalRecord>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let load = load_records(dir.path().join("nope.json")).unwrap();
        assert!(load.is_missing());
        assert!(load.records().is_empty());
    }

    #[test]
    fn sample_structure_parses() {
        let records = parse_records(SAMPLE_DATA_STRUCTURE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "COVID-19");
        assert_eq!(records[0].mortality_rate, 2.0);
        assert_eq!(records[0].lessons.len(), 2);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"[{"name":"SARS","period":"2002-2004","pathogen":"SARS-CoV",
            "deaths":"774","transmission":"Droplets"}]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records[0].mortality_rate, 0.0);
        assert!(records[0].lessons.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let json = r#"[
            {"name":"B","period":"","pathogen":"","deaths":"","transmission":""},
            {"name":"A","period":"","pathogen":"","deaths":"","transmission":""}
        ]"#;
        std::fs::write(&path, json).unwrap();
        let load = load_records(&path).unwrap();
        let names: Vec<_> = load.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn malformed_file_is_data_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_records(&path), Err(EchoError::Data { .. })));
    }
}
