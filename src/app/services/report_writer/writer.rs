//! Report artifact writing
//!
//! Writes the intermediate record artifact and the final report grid as
//! CSV files under the configured output directory. Both writes go
//! through a temp file in the target directory followed by an atomic
//! rename, so a crashed run never leaves a truncated artifact behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::app::models::InterchangeRecord;
use crate::app::services::aggregator::ReportData;
use crate::constants::{artifacts, columns};
use crate::{Error, Result};

use super::grid::build_report_grid;

/// Writes pipeline artifacts under an output directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at an output directory
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Write the intermediate record artifact
    ///
    /// The artifact lands in the `intermediate` subdirectory as
    /// `{stem}_processed.csv`, one row per record in pipeline order with
    /// the full seventeen-column layout.
    pub async fn write_intermediate(
        &self,
        records: &[InterchangeRecord],
        input_stem: &str,
    ) -> Result<PathBuf> {
        let directory = self.output_dir.join(artifacts::INTERMEDIATE_DIR);
        let path = directory.join(format!("{}{}", input_stem, artifacts::INTERMEDIATE_SUFFIX));

        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(header_row());
        for record in records {
            rows.push(record_row(record));
        }

        self.write_csv(&directory, &path, &rows)?;

        info!(
            "Intermediate artifact with {} records written to {}",
            records.len(),
            path.display()
        );
        Ok(path)
    }

    /// Write the final two-section report
    ///
    /// The report lands in the `reports` subdirectory as
    /// `{stem}_final_report.csv` with the date stamped into the title row.
    pub async fn write_final_report(
        &self,
        data: &ReportData,
        report_date: NaiveDate,
        input_stem: &str,
    ) -> Result<PathBuf> {
        let directory = self.output_dir.join(artifacts::REPORTS_DIR);
        let path = directory.join(format!("{}{}", input_stem, artifacts::FINAL_REPORT_SUFFIX));

        let grid = build_report_grid(data, report_date);
        self.write_csv(&directory, &path, grid.rows())?;

        info!(
            "Final report with {} station blocks written to {}",
            data.block_count(),
            path.display()
        );
        Ok(path)
    }

    /// Directory the writer roots its artifacts under
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_csv(&self, directory: &Path, path: &Path, rows: &[Vec<String>]) -> Result<()> {
        std::fs::create_dir_all(directory).map_err(|error| {
            Error::io(
                format!("Cannot create output directory {}", directory.display()),
                error,
            )
        })?;

        let temp_file = tempfile::NamedTempFile::new_in(directory)
            .map_err(|error| Error::io("Cannot create temporary artifact file", error))?;

        {
            let mut writer = csv::Writer::from_writer(temp_file.as_file());

            for row in rows {
                writer.write_record(row).map_err(|error| {
                    Error::report_writing(
                        format!("Cannot write row to {}", path.display()),
                        Box::new(error),
                    )
                })?;
            }

            writer
                .flush()
                .map_err(|error| Error::io("Cannot flush artifact file", error))?;
        }

        temp_file.persist(path).map_err(|error| {
            Error::io(
                format!("Cannot persist artifact {}", path.display()),
                error.error,
            )
        })?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

fn header_row() -> Vec<String> {
    columns::INTERMEDIATE_ORDER
        .iter()
        .map(|column| column.to_string())
        .collect()
}

/// Render one record as an intermediate artifact row
fn record_row(record: &InterchangeRecord) -> Vec<String> {
    let taken = &record.taken_over;
    let handed = &record.handed_over;

    vec![
        record.zone_to.clone(),
        record.ic_station.clone(),
        blank_for_none(&taken.zone),
        blank_for_none(&taken.station_to),
        blank_for_none(&taken.load_state),
        blank_for_none(&taken.wagon_type),
        record.taken_classification.clone(),
        blank_for_none(&taken.loco),
        blank_for_none(&taken.loco_type),
        record.ic_station_copy.clone(),
        blank_for_none(&handed.zone),
        blank_for_none(&handed.station_to),
        blank_for_none(&handed.load_state),
        blank_for_none(&handed.wagon_type),
        record.handed_classification.clone(),
        blank_for_none(&handed.loco),
        blank_for_none(&handed.loco_type),
    ]
}

/// Absent cells write as blank
fn blank_for_none(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
