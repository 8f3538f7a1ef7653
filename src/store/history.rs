use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::store::StoreError;

/// Timestamp format used in the history log
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One practice attempt: which term, when, and whether it was right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    #[serde(rename = "Term")]
    pub term: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(
        rename = "Correct",
        serialize_with = "serialize_correct",
        deserialize_with = "deserialize_correct"
    )]
    pub correct: bool,
}

impl AttemptRecord {
    /// Record an attempt stamped with the current local time
    pub fn now(term: impl Into<String>, correct: bool) -> Self {
        Self {
            term: term.into(),
            time: Local::now().format(TIME_FORMAT).to_string(),
            correct,
        }
    }
}

/// The log stores booleans as the literals "True"/"False"
fn serialize_correct<S: Serializer>(correct: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *correct { "True" } else { "False" })
}

fn deserialize_correct<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected True or False, got {:?}",
            other
        ))),
    }
}

/// Comma-delimited, append-only store for practice attempts
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all recorded attempts. A store that does not exist yet is an
    /// empty log, not an error.
    pub fn load(&self) -> Result<Vec<AttemptRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Overwrite the store with the given records
    pub fn save(&self, records: &[AttemptRecord]) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Append a single attempt, rewriting the store in full
    pub fn append(&self, record: AttemptRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }
}
