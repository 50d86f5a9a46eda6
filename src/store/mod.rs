//! Persisted widget instances for the command-line host.
//!
//! This module provides abstractions for storing and retrieving the
//! settings of each placed widget between program executions. Placements
//! are identified by a host-assigned number.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileInstanceStore;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::settings::Instance;

/// Errors that can occur during instance persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file.
    #[error("Failed to read instance store '{}': {source}", path.display())]
    Read {
        /// Path to the store file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The store file exists but could not be understood.
    #[error("Instance store '{}' is corrupted: {reason}", path.display())]
    Corrupted {
        /// Path to the store file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Failed to write the store file.
    #[error("Failed to write instance store: {0}")]
    Write(#[source] io::Error),

    /// Failed to serialize instances to JSON.
    #[error("Failed to serialize instances: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Abstraction for persisting widget instances.
///
/// Implementations should:
/// - Use atomic writes to prevent corruption from crashes
/// - Treat a missing store as empty
pub trait InstanceStore {
    /// Loads the instance stored for placement `number`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn load(&self, number: u32) -> Result<Option<Instance>, StoreError>;

    /// Saves `instance` for placement `number`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    fn save(&self, number: u32, instance: &Instance) -> Result<(), StoreError>;
}
