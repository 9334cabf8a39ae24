//! Domain constants for interchange report processing
//!
//! This module pins down the column names, station and zone codes,
//! wagon categories and report layout shared by the pipeline services.

// =============================================================================
// Extract Format
// =============================================================================

/// Raw extract file structure
pub mod extract {
    /// Banner lines preceding the header row in a raw extract
    pub const PREAMBLE_ROWS: usize = 2;
}

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names used by the extract, intermediate artifact and stores
pub mod columns {
    // Record identity columns
    pub const ZONE_TO: &str = "ZONE TO";
    pub const IC_STTN: &str = "IC STTN";
    pub const IC_STTN_COPY: &str = "IC STTN (Copy)";

    // Taken-over leg columns
    pub const TAKEN_ZONE_FROM: &str = "TAKEN OVER ZONE FROM";
    pub const TAKEN_STTN_TO: &str = "TAKEN OVER STTN TO";
    pub const TAKEN_LOAD_STATE: &str = "TAKEN OVER L/E";
    pub const TAKEN_TYPE: &str = "TAKEN OVER TYPE";
    pub const TAKEN_CLASSIFICATION: &str = "TAKENOVER CLASSIFICATION";
    pub const TAKEN_LOCO: &str = "TAKEN OVER LOCO";
    pub const TAKEN_LOCO_TYPE: &str = "TAKEN OVER LOCO TYPE";

    // Handed-over leg columns
    pub const HANDED_ZONE_TO: &str = "HANDED OVER ZONE TO";
    pub const HANDED_STTN_TO: &str = "HANDED OVER STTN TO";
    pub const HANDED_LOAD_STATE: &str = "HANDED OVER L/E";
    pub const HANDED_TYPE: &str = "HANDED OVER TYPE";
    pub const HANDED_CLASSIFICATION: &str = "HANDEDOVER CLASSIFICATION";
    pub const HANDED_LOCO: &str = "HANDED OVER LOCO";
    pub const HANDED_LOCO_TYPE: &str = "HANDED OVER LOCO TYPE";

    /// Columns a raw extract must provide; any absence fails the run
    pub const REQUIRED: [&str; 14] = [
        ZONE_TO,
        IC_STTN,
        TAKEN_ZONE_FROM,
        TAKEN_STTN_TO,
        TAKEN_LOAD_STATE,
        TAKEN_TYPE,
        TAKEN_LOCO,
        TAKEN_LOCO_TYPE,
        HANDED_ZONE_TO,
        HANDED_STTN_TO,
        HANDED_LOAD_STATE,
        HANDED_TYPE,
        HANDED_LOCO,
        HANDED_LOCO_TYPE,
    ];

    /// Fixed column order of the intermediate artifact
    pub const INTERMEDIATE_ORDER: [&str; 17] = [
        ZONE_TO,
        IC_STTN,
        TAKEN_ZONE_FROM,
        TAKEN_STTN_TO,
        TAKEN_LOAD_STATE,
        TAKEN_TYPE,
        TAKEN_CLASSIFICATION,
        TAKEN_LOCO,
        TAKEN_LOCO_TYPE,
        IC_STTN_COPY,
        HANDED_ZONE_TO,
        HANDED_STTN_TO,
        HANDED_LOAD_STATE,
        HANDED_TYPE,
        HANDED_CLASSIFICATION,
        HANDED_LOCO,
        HANDED_LOCO_TYPE,
    ];
}

// =============================================================================
// Zone and Station Constants
// =============================================================================

/// Railway zone codes referenced by the normalization rules
pub mod zones {
    /// Zone whose CNA rows are rewritten to AII
    pub const NW: &str = "NW";

    /// Zones whose SAU traffic resolves to the southern station code
    pub const SAUS_ZONES_DEFAULT: [&str; 8] = ["WR", "CR", "KR", "SW", "SR", "SEC", "ECO", "SC"];

    /// Default report ordering of destination zones
    pub const ZONE_ORDER_DEFAULT: [&str; 4] = ["CR", "WC", "NW", "DFCR"];
}

/// Station codes and per-zone presentation order
pub mod stations {
    /// Station rewritten to [`AII`] when the destination zone is NW
    pub const CNA: &str = "CNA";

    /// Replacement for CNA rows bound for the NW zone
    pub const AII: &str = "AII";

    /// Ambiguous station code split by originating zone
    pub const SAU: &str = "SAU";

    /// Southern resolution of [`SAU`]
    pub const SAUS: &str = "SAUS";

    /// Northern resolution of [`SAU`]
    pub const SAUN: &str = "SAUN";

    /// Sort rank for stations absent from the configured order
    pub const UNLISTED_PRIORITY: usize = 1000;

    /// Station order within the CR zone
    pub const CR_ORDER: [&str; 3] = ["BSR", "JL", "KNW"];

    /// Station order within the WC zone
    pub const WC_ORDER: [&str; 5] = ["SHRN", "NAD", "MKC", "MTA", "CNA"];

    /// Station order within the NW zone
    pub const NW_ORDER: [&str; 5] = ["BEC", "AII", "HMT", "BLDI", "PNU"];

    /// Station order within the DFCR zone
    pub const DFCR_ORDER: [&str; 13] = [
        "BHU", "CECC", "GGM", "MSH", "SAUN", "SAUS", "MPR", "GTX", "PAO", "NOL", "BHET", "SAH",
        "SJN",
    ];

    /// Default zone-to-station-order table used when no override is configured
    pub fn default_station_order() -> Vec<(&'static str, Vec<&'static str>)> {
        vec![
            ("CR", CR_ORDER.to_vec()),
            ("WC", WC_ORDER.to_vec()),
            ("NW", NW_ORDER.to_vec()),
            ("DFCR", DFCR_ORDER.to_vec()),
        ]
    }
}

// =============================================================================
// Wagon Categories and Load States
// =============================================================================

/// Wagon category labels produced by classification
pub mod categories {
    pub const JUMBO: &str = "JUMBO";
    pub const BOX: &str = "BOX";
    pub const BOXN: &str = "BOXN";
    pub const BTPN: &str = "BTPN";
    pub const BTPG: &str = "BTPG";
    pub const CONT: &str = "CONT";
    pub const SHRA: &str = "SHRA";

    /// Categories with dedicated report columns; everything else is OTHERS
    pub const KNOWN: [&str; 7] = [JUMBO, BOX, BOXN, BTPN, BTPG, CONT, SHRA];

    /// Classifications counted together under the BOXN report columns
    pub const BOXN_BUCKET: [&str; 2] = [BOX, BOXN];
}

/// Load state codes from the L/E extract columns
pub mod load_states {
    pub const LOADED: &str = "L";
    pub const EMPTY: &str = "E";
}

/// Locomotive type conventions
pub mod locos {
    /// Loco type prefix identifying diesel traction
    pub const DIESEL_PREFIX: &str = "WDG";
}

// =============================================================================
// Persistent Store Defaults
// =============================================================================

/// Wagon classification store layout and seed data
pub mod classifications {
    /// Header of the wagon-type column in the store file
    pub const WAGON_TYPE_COLUMN: &str = "WAGON_TYPE";

    /// Header of the category column in the store file
    pub const CATEGORY_COLUMN: &str = "CATEGORY";

    /// File name used when no store path is configured
    pub const DEFAULT_FILE_NAME: &str = "wagon_classifications.csv";

    /// Seed table written when the store file does not exist yet
    pub const DEFAULT_TABLE: [(&str, &str); 43] = [
        ("ACT1", "ACT1"),
        ("BCACBM", "BCACBM"),
        ("BCBFG", "BCBFG"),
        ("BCFCM", "BCFCM"),
        ("BCN", "JUMBO"),
        ("BCNAHSM1", "JUMBO"),
        ("BCNAHSM2", "JUMBO"),
        ("BCNHL", "JUMBO"),
        ("BCNM", "JUMBO"),
        ("BFK", "CONT"),
        ("BFKN", "CONT"),
        ("BFNS", "SHRA"),
        ("BFNS22.9", "SHRA"),
        ("BFNSM", "SHRA"),
        ("BFNSM1", "SHRA"),
        ("BFNV", "SHRA"),
        ("BKI", "CONT"),
        ("BLC", "CONT"),
        ("BLL", "CONT"),
        ("BLLM", "CONT"),
        ("BLSS", "CONT"),
        ("BOSM", "SHRA"),
        ("BOST", "SHRA"),
        ("BOXK", "CONT"),
        ("BOXN", "BOX"),
        ("BOXNEL", "BOX"),
        ("BOXNER", "BOX"),
        ("BOXNHL", "BOX"),
        ("BOXNHL25T", "BOX"),
        ("BOXNR", "BOX"),
        ("BOXNS", "BOX"),
        ("BRN", "SHRA"),
        ("BRN22.9", "SHRA"),
        ("BTFNL", "BTPN"),
        ("BTPG", "BTPG"),
        ("BTPGN", "BTPG"),
        ("BTPN", "BTPN"),
        ("MYLY", "MYLY"),
        ("NMG", "NMG"),
        ("NMGHS", "NMG"),
        ("SHRA", "SHRA"),
        ("SHRN", "SHRA"),
        ("TURRRRRRR", "JUMBOOOO"),
    ];
}

/// PH station reference list layout and seed data
pub mod ph_stations {
    /// Header of the station code column in the store file
    pub const STATION_CODE_COLUMN: &str = "STATION_CODE";

    /// File name used when no store path is configured
    pub const DEFAULT_FILE_NAME: &str = "ph_stations.csv";

    /// Seed list written when the store file does not exist yet
    pub const DEFAULT_STATIONS: [&str; 13] = [
        "AEMD", "TPHS", "TSWS", "GETS", "AECS", "GES", "NSPN", "SPNG", "USD", "WKB", "DRD", "GNC",
        "EPH",
    ];
}

// =============================================================================
// Report Captions and Layout
// =============================================================================

/// Fixed captions of the final report grid
pub mod report {
    /// Title prefix; the report date is appended in [`DATE_FORMAT`]
    pub const TITLE_PREFIX: &str = "ZONAL INTERCHANGE ON";

    /// Date format used in the report title and the --report-date flag
    pub const DATE_FORMAT: &str = "%d-%m-%Y";

    pub const HANDEDOVER: &str = "HANDEDOVER";
    pub const TAKENOVER: &str = "TAKENOVER";

    pub const IC_STTN: &str = "IC STTN";
    pub const NO_OF_TRAINS: &str = "NO OF TRAINS";
    pub const DIESEL: &str = "DIESEL";
    pub const DETAILS: &str = "DETAILS";

    /// Sub-caption under the paired summary columns
    pub const LOADED_EMPTY: &str = "L+E";

    /// Sub-caption under the taken-over BOXN column
    pub const PH_OTH: &str = "PH+OTH";

    /// Detail column captions, in grid order
    pub const DETAIL_CAPTIONS: [&str; 8] = [
        "JUMBO", "BOXN", "BTPN", "BTPG", "CONT", "SHRA", "OTHERS", "EMPTIES",
    ];

    pub const GRAND_TOTAL: &str = "GRAND TOTAL";

    /// Stock summary table header, columns A..E
    pub const STOCK_CAPTIONS: [&str; 5] = ["STOCK", "OB", "H/O", "T/O", "CB"];

    /// Stock summary table row labels
    pub const STOCK_ROWS: [&str; 5] = ["JUMBO", "BOXN", "BTPN", "CONT", "SHRA"];

    /// Zero-based cell positions of the report grid
    pub mod layout {
        /// Total grid width; the taken-over section mirrors the handed-over one
        pub const GRID_COLUMNS: usize = 30;

        pub const TITLE_ROW: usize = 0;
        pub const SECTION_ROW: usize = 1;
        pub const CAPTION_ROW: usize = 2;
        pub const SUBCAPTION_ROW: usize = 3;
        pub const DATA_START_ROW: usize = 4;

        /// Column shift from a handed-over cell to its taken-over mirror
        pub const TAKENOVER_OFFSET: usize = 15;

        /// First detail column of the handed-over section
        pub const HANDED_DETAILS_START: usize = 7;

        /// First detail column of the taken-over section
        pub const TAKEN_DETAILS_START: usize = 22;

        /// Rows between the grand-total row and the stock table header
        pub const STOCK_TABLE_OFFSET: usize = 3;
    }
}

// =============================================================================
// Output Artifacts
// =============================================================================

/// Output directory layout and artifact naming
pub mod artifacts {
    /// Subdirectory holding intermediate artifacts
    pub const INTERMEDIATE_DIR: &str = "intermediate";

    /// Subdirectory holding final reports
    pub const REPORTS_DIR: &str = "reports";

    /// Suffix appended to the input stem for the intermediate artifact
    pub const INTERMEDIATE_SUFFIX: &str = "_processed.csv";

    /// Suffix appended to the input stem for the final report
    pub const FINAL_REPORT_SUFFIX: &str = "_final_report.csv";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a classification has a dedicated report column
pub fn is_known_category(classification: &str) -> bool {
    categories::KNOWN.contains(&classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_complete() {
        // Every required column reappears in the intermediate artifact
        for column in columns::REQUIRED {
            assert!(
                columns::INTERMEDIATE_ORDER.contains(&column),
                "required column {} missing from intermediate order",
                column
            );
        }
    }

    #[test]
    fn test_intermediate_order_contains_derived_columns() {
        assert!(columns::INTERMEDIATE_ORDER.contains(&columns::IC_STTN_COPY));
        assert!(columns::INTERMEDIATE_ORDER.contains(&columns::TAKEN_CLASSIFICATION));
        assert!(columns::INTERMEDIATE_ORDER.contains(&columns::HANDED_CLASSIFICATION));
        assert_eq!(columns::INTERMEDIATE_ORDER.len(), columns::REQUIRED.len() + 3);
    }

    #[test]
    fn test_default_station_order_covers_all_zones() {
        let order = stations::default_station_order();
        let zones: Vec<&str> = order.iter().map(|(zone, _)| *zone).collect();

        for zone in zones::ZONE_ORDER_DEFAULT {
            assert!(zones.contains(&zone), "zone {} has no station order", zone);
        }
    }

    #[test]
    fn test_classification_table_well_formed() {
        let mut seen = std::collections::HashSet::new();

        for (wagon_type, category) in classifications::DEFAULT_TABLE {
            assert!(!wagon_type.is_empty());
            assert!(!category.is_empty());
            assert!(seen.insert(wagon_type), "duplicate wagon type {}", wagon_type);
        }
    }

    #[test]
    fn test_is_known_category() {
        assert!(is_known_category(categories::JUMBO));
        assert!(is_known_category(categories::BOX));
        assert!(is_known_category(categories::SHRA));
        assert!(!is_known_category("MYLY"));
        assert!(!is_known_category(""));
    }

    #[test]
    fn test_report_layout_blocks_do_not_overlap() {
        use report::layout::*;

        // Mirrored detail blocks sit at the same offset within each section
        assert_eq!(
            TAKEN_DETAILS_START - TAKENOVER_OFFSET,
            HANDED_DETAILS_START
        );

        // Detail columns fill each section exactly
        assert_eq!(
            HANDED_DETAILS_START + report::DETAIL_CAPTIONS.len(),
            TAKENOVER_OFFSET
        );
        assert_eq!(
            TAKEN_DETAILS_START + report::DETAIL_CAPTIONS.len(),
            GRID_COLUMNS
        );
    }
}
