//! Aggregated report data structures
//!
//! These types carry everything the report grid needs: ordered per-station
//! summaries for both sections, destination detail lists per category and
//! the section grand totals.

use std::ops::AddAssign;

// =============================================================================
// Count Pair
// =============================================================================

/// A two-part count rendered into a single report cell
///
/// Summary columns pair two figures: loaded and empty wagons for the
/// category columns, PH and OTH for the taken-over BOXN column, and
/// destination and loco-type counts for the trains column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountPair {
    /// Left component (loaded, PH or destination count)
    pub left: u32,

    /// Right component (empty, OTH or loco-type count)
    pub right: u32,
}

impl CountPair {
    /// Create a new count pair
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Render as "left+right", the category column format
    pub fn as_plus(&self) -> String {
        format!("{}+{}", self.left, self.right)
    }

    /// Render as "left/right", the trains column format
    pub fn as_slash(&self) -> String {
        format!("{}/{}", self.left, self.right)
    }
}

impl AddAssign for CountPair {
    fn add_assign(&mut self, other: Self) {
        self.left += other.left;
        self.right += other.right;
    }
}

// =============================================================================
// Detail Columns
// =============================================================================

/// Destination detail lists of one station, in report column order
///
/// Each list holds pre-rendered cells such as `"BSR(3)"`, `"MYLY[KNW]-2"`
/// or `"BOXN-4"`. Lists of one station may differ in length; the grid
/// stacks them and pads the shorter ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailColumns {
    pub jumbo: Vec<String>,
    pub boxn: Vec<String>,
    pub btpn: Vec<String>,
    pub btpg: Vec<String>,
    pub cont: Vec<String>,
    pub shra: Vec<String>,
    pub others: Vec<String>,
    pub empties: Vec<String>,
}

impl DetailColumns {
    /// Length of the longest detail list
    pub fn max_rows(&self) -> usize {
        self.columns()
            .iter()
            .map(|column| column.len())
            .max()
            .unwrap_or(0)
    }

    /// All detail lists in report column order
    pub fn columns(&self) -> [&[String]; 8] {
        [
            &self.jumbo,
            &self.boxn,
            &self.btpn,
            &self.btpg,
            &self.cont,
            &self.shra,
            &self.others,
            &self.empties,
        ]
    }
}

// =============================================================================
// Station Summary
// =============================================================================

/// Per-station aggregate for one report section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    /// Station code shown in the IC STTN column
    pub station: String,

    /// Rows with a destination and rows with a loco type, rendered "A/B"
    pub trains: CountPair,

    /// Rows hauled by a diesel locomotive
    pub diesel: u32,

    /// JUMBO loaded and empty counts
    pub jumbo: CountPair,

    /// BOXN column pair: loaded and empty for handed-over, PH and OTH
    /// for taken-over
    pub boxn: CountPair,

    /// BTPN loaded and empty counts
    pub btpn: CountPair,

    /// Container rows, loaded and empty together
    pub cont: u32,

    /// Destination detail lists for the DETAILS columns
    pub details: DetailColumns,
}

impl StationSummary {
    /// Create an empty summary for a station
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            trains: CountPair::default(),
            diesel: 0,
            jumbo: CountPair::default(),
            boxn: CountPair::default(),
            btpn: CountPair::default(),
            cont: 0,
            details: DetailColumns::default(),
        }
    }

    /// Report rows this station occupies, at least one for the summary row
    pub fn block_height(&self) -> usize {
        self.details.max_rows().max(1)
    }
}

// =============================================================================
// Grand Totals
// =============================================================================

/// Column totals over every station of one report section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrandTotals {
    pub trains: CountPair,
    pub diesel: u32,
    pub jumbo: CountPair,
    pub boxn: CountPair,
    pub btpn: CountPair,
    pub cont: u32,
}

impl GrandTotals {
    /// Add one station's figures into the totals
    pub fn accumulate(&mut self, summary: &StationSummary) {
        self.trains += summary.trains;
        self.diesel += summary.diesel;
        self.jumbo += summary.jumbo;
        self.boxn += summary.boxn;
        self.btpn += summary.btpn;
        self.cont += summary.cont;
    }

    /// Compute totals over a full section
    pub fn from_summaries(summaries: &[StationSummary]) -> Self {
        let mut totals = Self::default();
        for summary in summaries {
            totals.accumulate(summary);
        }
        totals
    }
}

// =============================================================================
// Section and Report Data
// =============================================================================

/// One report section: station summaries in presentation order plus totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionData {
    /// Per-station summaries, in presentation order
    pub summaries: Vec<StationSummary>,

    /// Grand totals over all summaries
    pub totals: GrandTotals,
}

impl SectionData {
    /// Number of stations in the section
    pub fn station_count(&self) -> usize {
        self.summaries.len()
    }
}

/// Aggregated data for both report sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    /// The handed-over section, grouped on the copy station view
    pub handed_over: SectionData,

    /// The taken-over section, grouped on the primary station view
    pub taken_over: SectionData,
}

impl ReportData {
    /// Number of station blocks the grid renders, sections walked in lockstep
    pub fn block_count(&self) -> usize {
        self.handed_over
            .station_count()
            .max(self.taken_over.station_count())
    }
}
