//! Classification table loading, lookup and persistence
//!
//! The store is read once at startup, mutated in memory and rewritten
//! whole through a temp file in the store directory, so a crashed write
//! never leaves a truncated table behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::classifications;
use crate::{Error, Result};

/// Wagon type to category lookup backed by a CSV store
#[derive(Debug, Clone)]
pub struct WagonClassifier {
    path: PathBuf,
    mappings: HashMap<String, String>,
}

impl WagonClassifier {
    /// Create a classifier carrying the built-in default table, no I/O
    pub fn with_defaults(path: &Path) -> Self {
        let mappings = classifications::DEFAULT_TABLE
            .iter()
            .map(|(wagon_type, category)| (wagon_type.to_string(), category.to_string()))
            .collect();

        Self {
            path: path.to_path_buf(),
            mappings,
        }
    }

    /// Load the classification store, seeding defaults when absent
    ///
    /// A failed seed write is logged and the run continues with the
    /// in-memory table. A present but unreadable store is an error.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "Classification store not found, seeding defaults: {}",
                path.display()
            );
            let classifier = Self::with_defaults(path);
            if let Err(error) = classifier.save() {
                warn!("Could not persist default classifications: {}", error);
            }
            return Ok(classifier);
        }

        let mut reader = csv::Reader::from_path(path).map_err(|error| {
            Error::classification_store(format!(
                "Cannot open classification store '{}': {}",
                path.display(),
                error
            ))
        })?;

        let headers = reader
            .headers()
            .map_err(|error| {
                Error::classification_store(format!(
                    "Cannot read classification store header '{}': {}",
                    path.display(),
                    error
                ))
            })?
            .clone();

        let type_index = headers
            .iter()
            .position(|header| header.trim() == classifications::WAGON_TYPE_COLUMN);
        let category_index = headers
            .iter()
            .position(|header| header.trim() == classifications::CATEGORY_COLUMN);

        let (type_index, category_index) = match (type_index, category_index) {
            (Some(type_index), Some(category_index)) => (type_index, category_index),
            _ => {
                return Err(Error::classification_store(format!(
                    "Classification store '{}' must have {} and {} columns",
                    path.display(),
                    classifications::WAGON_TYPE_COLUMN,
                    classifications::CATEGORY_COLUMN
                )));
            }
        };

        let mut mappings = HashMap::new();

        for result in reader.records() {
            let row = result.map_err(|error| {
                Error::classification_store(format!(
                    "Invalid row in classification store '{}': {}",
                    path.display(),
                    error
                ))
            })?;

            let wagon_type = row.get(type_index).map(str::trim).unwrap_or("");
            let category = row.get(category_index).map(str::trim).unwrap_or("");

            if wagon_type.is_empty() || category.is_empty() {
                continue;
            }

            mappings.insert(wagon_type.to_string(), category.to_string());
        }

        debug!(
            "Loaded {} wagon classifications from {}",
            mappings.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            mappings,
        })
    }

    /// Classify a wagon type code
    ///
    /// Blank input classifies to the empty string; an unmapped code
    /// classifies to itself.
    pub fn classify(&self, wagon_type: &str) -> String {
        let trimmed = wagon_type.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        self.mappings
            .get(trimmed)
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }

    /// Merge new mappings into the table and persist the result
    pub async fn add_classifications(&mut self, entries: &[(String, String)]) -> Result<()> {
        for (wagon_type, category) in entries {
            self.mappings.insert(wagon_type.clone(), category.clone());
        }

        self.save()?;
        info!(
            "Added {} classifications, store now holds {}",
            entries.len(),
            self.mappings.len()
        );
        Ok(())
    }

    /// Persist the full table, sorted by wagon type, via an atomic rename
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                Error::io(
                    format!("Cannot create store directory {}", parent.display()),
                    error,
                )
            })?;
        }

        let directory = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(directory)
            .map_err(|error| Error::io("Cannot create temporary classification store", error))?;

        {
            let mut writer = csv::Writer::from_writer(temp_file.as_file());
            let store_error = |error: csv::Error| {
                Error::classification_store(format!("Cannot write classification store: {}", error))
            };

            writer
                .write_record([
                    classifications::WAGON_TYPE_COLUMN,
                    classifications::CATEGORY_COLUMN,
                ])
                .map_err(store_error)?;

            let mut entries: Vec<_> = self.mappings.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            for (wagon_type, category) in entries {
                writer
                    .write_record([wagon_type.as_str(), category.as_str()])
                    .map_err(store_error)?;
            }

            writer
                .flush()
                .map_err(|error| Error::io("Cannot flush classification store", error))?;
        }

        temp_file.persist(&self.path).map_err(|error| {
            Error::io(
                format!(
                    "Cannot persist classification store {}",
                    self.path.display()
                ),
                error.error,
            )
        })?;

        Ok(())
    }

    /// Number of mapped wagon types
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// The full wagon type to category table
    pub fn mappings(&self) -> &HashMap<String, String> {
        &self.mappings
    }

    /// Store file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}
