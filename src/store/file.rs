//! File-based instance persistence implementation.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::settings::Instance;

use super::{InstanceStore, StoreError};

/// Current store file format version.
///
/// Increment this when making breaking changes to the format.
const STORE_FILE_VERSION: u32 = 1;

/// On-disk store format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    /// Format version.
    version: u32,

    /// Unix timestamp of the last save, for debugging only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<String>,

    /// Instances keyed by placement number.
    #[serde(default)]
    instances: BTreeMap<u32, Instance>,
}

fn unix_timestamp_now() -> String {
    use std::time::SystemTime;

    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}

/// File-based implementation of [`InstanceStore`].
///
/// Stores all placements in one JSON file. Writes go to `{path}.tmp`
/// first and are then renamed over `{path}`, so the file is either fully
/// written or not written at all.
#[derive(Debug, Clone)]
pub struct FileInstanceStore {
    path: PathBuf,
}

impl FileInstanceStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<StoreFile, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(StoreFile {
                    version: STORE_FILE_VERSION,
                    ..StoreFile::default()
                });
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let file: StoreFile =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                reason: format!("Invalid JSON: {e}"),
            })?;

        if file.version != STORE_FILE_VERSION {
            return Err(StoreError::Corrupted {
                path: self.path.clone(),
                reason: format!(
                    "Incompatible version: expected {STORE_FILE_VERSION}, got {}",
                    file.version
                ),
            });
        }

        Ok(file)
    }

    fn write(&self, file: &StoreFile) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(file).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        // Append .tmp instead of replacing the extension (instances.json -> instances.json.tmp)
        let temp_path = PathBuf::from(format!("{}.tmp", self.path.display()));
        std::fs::write(&temp_path, content).map_err(StoreError::Write)?;
        std::fs::rename(&temp_path, &self.path).map_err(StoreError::Write)?;

        Ok(())
    }
}

impl InstanceStore for FileInstanceStore {
    fn load(&self, number: u32) -> Result<Option<Instance>, StoreError> {
        Ok(self.read()?.instances.remove(&number))
    }

    fn save(&self, number: u32, instance: &Instance) -> Result<(), StoreError> {
        let mut file = self.read()?;
        file.instances.insert(number, instance.clone());
        file.saved_at = Some(unix_timestamp_now());

        self.write(&file)?;
        debug!(number, path = %self.path.display(), "Saved widget instance");
        Ok(())
    }
}
