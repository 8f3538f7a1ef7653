use std::path::{Path, PathBuf};

use crate::segmenter::GlossaryEntry;
use crate::store::StoreError;

/// Semicolon-delimited store for the extracted term table.
///
/// Fields are not escaped beyond the delimiter choice, so a definition
/// containing a semicolon corrupts its row.
pub struct TermStore {
    path: PathBuf,
}

impl TermStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full term table. A missing file is an error: without
    /// terms there is nothing to review.
    pub fn load(&self) -> Result<Vec<GlossaryEntry>, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&self.path)?;

        let mut entries = Vec::new();
        for record in reader.deserialize() {
            entries.push(record?);
        }
        Ok(entries)
    }

    /// Overwrite the store with the given entries
    pub fn save(&self, entries: &[GlossaryEntry]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(&self.path)?;

        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
