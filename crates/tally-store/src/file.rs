//! File-backed store.
//!
//! Layout of the data directory:
//!
//! ```text
//! <data_dir>/
//!   inspections.jsonl   one Inspection per line
//!   profile.json        the UserProfile document
//! ```
//!
//! Loaded records are checked against the registered JSON Schemas. A record
//! that fails the schema is logged and kept; a record that cannot be decoded
//! at all is an error.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_jsonlines::JsonLinesWriter;
use tally_core::entities::{Inspection, UserProfile};
use tally_schema::SchemaRegistry;
use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::store::{InspectionStore, ProfileStore};

pub const INSPECTIONS_FILE: &str = "inspections.jsonl";
pub const PROFILE_FILE: &str = "profile.json";

pub struct FileStore {
    data_dir: PathBuf,
    schema: SchemaRegistry,
}

impl FileStore {
    /// Store rooted at `data_dir`. The directory is created on first save.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            schema: SchemaRegistry::new(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn inspections_path(&self) -> PathBuf {
        self.data_dir.join(INSPECTIONS_FILE)
    }

    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    fn warn_on_schema_mismatch(&self, schema_name: &str, value: &serde_json::Value, what: &str) {
        if let Err(e) = self.schema.validate_record(schema_name, what, value) {
            tracing::warn!(
                schema = schema_name,
                record = what,
                violations = e.violations().len(),
                "keeping stored record: {e}"
            );
        }
    }

    /// Write a whole file through a sibling temp file and rename it over
    /// `target`, so readers never see a partial collection.
    fn replace_file<F>(&self, target: &Path, write: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut File) -> io::Result<()>,
    {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        let mut tmp =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        write(tmp.as_file_mut()).map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;

        tmp.persist(target)
            .map_err(|e| StoreError::io(target, e.error))?;
        Ok(())
    }
}

impl InspectionStore for FileStore {
    fn load_all(&self) -> Result<Vec<Inspection>, StoreError> {
        let path = self.inspections_path();
        let lines = match serde_jsonlines::json_lines::<serde_json::Value, _>(&path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no inspections file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        let mut inspections = Vec::new();
        for (index, line) in lines.enumerate() {
            let record = index + 1;
            let value = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => StoreError::Corrupt {
                    path: path.clone(),
                    record,
                    reason: e.to_string(),
                },
                _ => StoreError::io(&path, e),
            })?;

            let label = value
                .get("id")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("#{record}"), ToString::to_string);
            self.warn_on_schema_mismatch("inspection", &value, &label);

            let inspection: Inspection =
                serde_json::from_value(value).map_err(|e| StoreError::Corrupt {
                    path: path.clone(),
                    record,
                    reason: e.to_string(),
                })?;
            inspections.push(inspection);
        }

        tracing::debug!(path = %path.display(), count = inspections.len(), "loaded inspections");
        Ok(inspections)
    }

    fn save_all(&self, inspections: &[Inspection]) -> Result<(), StoreError> {
        let path = self.inspections_path();
        self.replace_file(&path, |file| {
            let mut writer = JsonLinesWriter::new(file);
            writer.write_all(inspections)?;
            writer.flush()
        })?;
        tracing::debug!(path = %path.display(), count = inspections.len(), "saved inspections");
        Ok(())
    }
}

impl ProfileStore for FileStore {
    fn load_profile(&self) -> Result<UserProfile, StoreError> {
        let path = self.profile_path();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserProfile::default()),
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        let value: serde_json::Value = serde_json::from_str(&raw)?;
        self.warn_on_schema_mismatch("user_profile", &value, "profile");
        Ok(serde_json::from_value(value)?)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let path = self.profile_path();
        self.replace_file(&path, |file| {
            serde_json::to_writer_pretty(&mut *file, profile)?;
            writeln!(file)
        })
    }
}
