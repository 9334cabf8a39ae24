//! Report grid assembly
//!
//! Builds the final report as a fixed-width grid of string cells: title,
//! section and caption rows, one block per station pair with stacked
//! details, the grand-total row and the trailing stock table.

use chrono::NaiveDate;

use crate::app::services::aggregator::{GrandTotals, ReportData, StationSummary};
use crate::constants::categories;
use crate::constants::report::{self, layout};

/// A fixed-width grid of report cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportGrid {
    rows: Vec<Vec<String>>,
}

impl ReportGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Set a cell, growing the grid as needed
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        while self.rows.len() <= row {
            self.rows.push(vec![String::new(); layout::GRID_COLUMNS]);
        }

        let cells = &mut self.rows[row];
        if column >= cells.len() {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.into();
    }

    /// Read a cell; positions outside the grid read as blank
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All rows, each padded to the full grid width
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Assemble the full report grid from aggregated section data
pub fn build_report_grid(data: &ReportData, report_date: NaiveDate) -> ReportGrid {
    let mut grid = ReportGrid::new();

    write_title(&mut grid, report_date);
    write_captions(&mut grid);

    let grand_total_row = write_station_blocks(&mut grid, data);
    write_grand_totals(&mut grid, grand_total_row, data);
    write_stock_table(&mut grid, grand_total_row);

    grid
}

fn write_title(grid: &mut ReportGrid, report_date: NaiveDate) {
    let title = format!(
        "{} {}",
        report::TITLE_PREFIX,
        report_date.format(report::DATE_FORMAT)
    );
    grid.set(layout::TITLE_ROW, 0, title);

    grid.set(layout::SECTION_ROW, 0, report::HANDEDOVER);
    grid.set(
        layout::SECTION_ROW,
        layout::TAKENOVER_OFFSET,
        report::TAKENOVER,
    );
}

fn write_captions(grid: &mut ReportGrid) {
    let captions = [
        report::IC_STTN,
        report::NO_OF_TRAINS,
        report::DIESEL,
        categories::JUMBO,
        categories::BOXN,
        categories::BTPN,
        categories::CONT,
        report::DETAILS,
    ];

    for (offset, caption) in captions.iter().enumerate() {
        grid.set(layout::CAPTION_ROW, offset, *caption);
        grid.set(
            layout::CAPTION_ROW,
            layout::TAKENOVER_OFFSET + offset,
            *caption,
        );
    }

    // Sub-captions under the paired summary columns; the taken-over BOXN
    // column counts PH and OTH instead of loaded and empty
    for column in [3, 4, 5] {
        grid.set(layout::SUBCAPTION_ROW, column, report::LOADED_EMPTY);
    }
    grid.set(
        layout::SUBCAPTION_ROW,
        layout::TAKENOVER_OFFSET + 3,
        report::LOADED_EMPTY,
    );
    grid.set(
        layout::SUBCAPTION_ROW,
        layout::TAKENOVER_OFFSET + 4,
        report::PH_OTH,
    );
    grid.set(
        layout::SUBCAPTION_ROW,
        layout::TAKENOVER_OFFSET + 5,
        report::LOADED_EMPTY,
    );

    for (offset, caption) in report::DETAIL_CAPTIONS.iter().enumerate() {
        grid.set(
            layout::SUBCAPTION_ROW,
            layout::HANDED_DETAILS_START + offset,
            *caption,
        );
        grid.set(
            layout::SUBCAPTION_ROW,
            layout::TAKEN_DETAILS_START + offset,
            *caption,
        );
    }
}

/// Write every station block, sections advancing in lockstep
///
/// Returns the row index right after the last block, where the
/// grand-total row goes.
fn write_station_blocks(grid: &mut ReportGrid, data: &ReportData) -> usize {
    let mut current_row = layout::DATA_START_ROW;

    for index in 0..data.block_count() {
        let handed = data.handed_over.summaries.get(index);
        let taken = data.taken_over.summaries.get(index);

        let height = handed
            .map(StationSummary::block_height)
            .unwrap_or(1)
            .max(taken.map(StationSummary::block_height).unwrap_or(1));

        if let Some(summary) = handed {
            write_summary_cells(grid, current_row, 0, summary);
            write_details(grid, current_row, layout::HANDED_DETAILS_START, summary);
        }

        if let Some(summary) = taken {
            write_summary_cells(grid, current_row, layout::TAKENOVER_OFFSET, summary);
            write_details(grid, current_row, layout::TAKEN_DETAILS_START, summary);
        }

        current_row += height;
    }

    current_row
}

/// Write one station's summary figures on the first row of its block
fn write_summary_cells(grid: &mut ReportGrid, row: usize, base: usize, summary: &StationSummary) {
    grid.set(row, base, summary.station.as_str());
    grid.set(row, base + 1, summary.trains.as_slash());
    grid.set(row, base + 2, summary.diesel.to_string());
    grid.set(row, base + 3, summary.jumbo.as_plus());
    grid.set(row, base + 4, summary.boxn.as_plus());
    grid.set(row, base + 5, summary.btpn.as_plus());
    grid.set(row, base + 6, summary.cont.to_string());
}

/// Stack one station's detail lists under the detail captions
fn write_details(
    grid: &mut ReportGrid,
    start_row: usize,
    start_column: usize,
    summary: &StationSummary,
) {
    for (offset, column) in summary.details.columns().iter().enumerate() {
        for (depth, cell) in column.iter().enumerate() {
            grid.set(start_row + depth, start_column + offset, cell.as_str());
        }
    }
}

fn write_grand_totals(grid: &mut ReportGrid, row: usize, data: &ReportData) {
    write_total_cells(grid, row, 0, &data.handed_over.totals);
    write_total_cells(
        grid,
        row,
        layout::TAKENOVER_OFFSET,
        &data.taken_over.totals,
    );
}

fn write_total_cells(grid: &mut ReportGrid, row: usize, base: usize, totals: &GrandTotals) {
    grid.set(row, base, report::GRAND_TOTAL);
    grid.set(row, base + 1, totals.trains.as_slash());
    grid.set(row, base + 2, totals.diesel.to_string());
    grid.set(row, base + 3, totals.jumbo.as_plus());
    grid.set(row, base + 4, totals.boxn.as_plus());
    grid.set(row, base + 5, totals.btpn.as_plus());
    grid.set(row, base + 6, totals.cont.to_string());
}

/// Write the stock summary skeleton below the grand-total row
///
/// The OB, H/O, T/O and CB cells stay blank for manual entry.
fn write_stock_table(grid: &mut ReportGrid, grand_total_row: usize) {
    let header_row = grand_total_row + layout::STOCK_TABLE_OFFSET;

    for (column, caption) in report::STOCK_CAPTIONS.iter().enumerate() {
        grid.set(header_row, column, *caption);
    }

    for (offset, stock) in report::STOCK_ROWS.iter().enumerate() {
        grid.set(header_row + 1 + offset, 0, *stock);
    }
}
