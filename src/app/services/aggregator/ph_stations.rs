//! PH station reference list
//!
//! Single-column CSV store of the destination stations whose loaded BOXN
//! traffic is booked under PH in the taken-over section. Like the
//! classification store, a missing file is seeded from the built-in list
//! and rewritten whole through a temp file on save.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::ph_stations;
use crate::{Error, Result};

/// Persistent set of PH-accounted destination stations
#[derive(Debug, Clone)]
pub struct PhStationStore {
    path: PathBuf,
    stations: HashSet<String>,
}

impl PhStationStore {
    /// Create a store carrying the built-in default list, no I/O
    pub fn with_defaults(path: &Path) -> Self {
        let stations = ph_stations::DEFAULT_STATIONS
            .iter()
            .map(|station| station.to_string())
            .collect();

        Self {
            path: path.to_path_buf(),
            stations,
        }
    }

    /// Load the station list, seeding defaults when absent
    ///
    /// A failed seed write is logged and the run continues with the
    /// in-memory list. A present but unreadable store is an error.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "PH station store not found, seeding defaults: {}",
                path.display()
            );
            let store = Self::with_defaults(path);
            if let Err(error) = store.save() {
                warn!("Could not persist default PH stations: {}", error);
            }
            return Ok(store);
        }

        let mut reader = csv::Reader::from_path(path).map_err(|error| {
            Error::ph_station_store(format!(
                "Cannot open PH station store '{}': {}",
                path.display(),
                error
            ))
        })?;

        let headers = reader
            .headers()
            .map_err(|error| {
                Error::ph_station_store(format!(
                    "Cannot read PH station store header '{}': {}",
                    path.display(),
                    error
                ))
            })?
            .clone();

        let code_index = headers
            .iter()
            .position(|header| header.trim() == ph_stations::STATION_CODE_COLUMN)
            .ok_or_else(|| {
                Error::ph_station_store(format!(
                    "PH station store '{}' must have a {} column",
                    path.display(),
                    ph_stations::STATION_CODE_COLUMN
                ))
            })?;

        let mut stations = HashSet::new();

        for result in reader.records() {
            let row = result.map_err(|error| {
                Error::ph_station_store(format!(
                    "Invalid row in PH station store '{}': {}",
                    path.display(),
                    error
                ))
            })?;

            let code = row.get(code_index).map(str::trim).unwrap_or("");
            if code.is_empty() {
                continue;
            }

            stations.insert(code.to_uppercase());
        }

        debug!(
            "Loaded {} PH stations from {}",
            stations.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            stations,
        })
    }

    /// Check whether a destination station is booked under PH
    pub fn contains(&self, station: &str) -> bool {
        self.stations.contains(station)
    }

    /// Persist the full list, sorted, via an atomic rename
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
            .map_err(|error| Error::io("Cannot create temporary PH station store", error))?;

        {
            let mut writer = csv::Writer::from_writer(temp_file.as_file());
            let store_error = |error: csv::Error| {
                Error::ph_station_store(format!("Cannot write PH station store: {}", error))
            };

            writer
                .write_record([ph_stations::STATION_CODE_COLUMN])
                .map_err(store_error)?;

            let mut stations: Vec<_> = self.stations.iter().collect();
            stations.sort();

            for station in stations {
                writer
                    .write_record([station.as_str()])
                    .map_err(store_error)?;
            }

            writer
                .flush()
                .map_err(|error| Error::io("Cannot flush PH station store", error))?;
        }

        temp_file.persist(&self.path).map_err(|error| {
            Error::io(
                format!("Cannot persist PH station store {}", self.path.display()),
                error.error,
            )
        })?;

        Ok(())
    }

    /// Number of stations in the list
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The full station set
    pub fn stations(&self) -> &HashSet<String> {
        &self.stations
    }

    /// Store file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}
