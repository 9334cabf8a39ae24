//! Data models for interchange processing
//!
//! This module contains the core data structures representing a single
//! wagon-interchange record with its two movement legs, plus the report
//! role used to address one side of a record.

use crate::constants::{load_states, locos};

// =============================================================================
// Report Role
// =============================================================================

/// The two report sections a record contributes to
///
/// Every interchange record carries both a handed-over and a taken-over leg;
/// aggregation runs once per role over the same record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Traffic handed over to the neighbouring zone
    HandedOver,

    /// Traffic taken over from the neighbouring zone
    TakenOver,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::HandedOver => write!(f, "handed-over"),
            Role::TakenOver => write!(f, "taken-over"),
        }
    }
}

// =============================================================================
// Movement Leg Structure
// =============================================================================

/// One movement leg of an interchange record
///
/// Extract cells are optional: a blank cell is represented as `None`, never
/// as an empty string, so downstream grouping can skip absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Zone the leg originates from (taken-over) or is bound for (handed-over)
    pub zone: Option<String>,

    /// Destination station of the rake
    pub station_to: Option<String>,

    /// Load state code, "L" for loaded or "E" for empty
    pub load_state: Option<String>,

    /// Raw wagon type code as it appears in the extract
    pub wagon_type: Option<String>,

    /// Locomotive number
    pub loco: Option<String>,

    /// Locomotive type code (e.g. "WDG4", "WAG9")
    pub loco_type: Option<String>,
}

impl Leg {
    /// Create a new movement leg
    pub fn new(
        zone: Option<String>,
        station_to: Option<String>,
        load_state: Option<String>,
        wagon_type: Option<String>,
        loco: Option<String>,
        loco_type: Option<String>,
    ) -> Self {
        Self {
            zone,
            station_to,
            load_state,
            wagon_type,
            loco,
            loco_type,
        }
    }

    /// Check if the leg carries loaded stock
    pub fn is_loaded(&self) -> bool {
        self.load_state.as_deref() == Some(load_states::LOADED)
    }

    /// Check if the leg carries empty stock
    pub fn is_empty_state(&self) -> bool {
        self.load_state.as_deref() == Some(load_states::EMPTY)
    }

    /// Check if the leg carries either loaded or empty stock
    pub fn is_loaded_or_empty(&self) -> bool {
        self.is_loaded() || self.is_empty_state()
    }

    /// Check if the leg is hauled by a diesel locomotive
    pub fn is_diesel_loco(&self) -> bool {
        self.loco_type
            .as_deref()
            .is_some_and(|loco_type| loco_type.starts_with(locos::DIESEL_PREFIX))
    }
}

// =============================================================================
// Interchange Record Structure
// =============================================================================

/// A single wagon-interchange record from a raw extract
///
/// The record keeps two views of the interchange station: `ic_station` feeds
/// taken-over grouping and `ic_station_copy` feeds handed-over grouping. The
/// two start identical and diverge during normalization because the CNA and
/// SAU rewrite rules resolve each view against a different leg's zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchangeRecord {
    /// Destination zone of the record
    pub zone_to: String,

    /// Interchange station, taken-over grouping view
    pub ic_station: String,

    /// Interchange station, handed-over grouping view
    pub ic_station_copy: String,

    /// Leg describing traffic taken over from the neighbouring zone
    pub taken_over: Leg,

    /// Leg describing traffic handed over to the neighbouring zone
    pub handed_over: Leg,

    /// Category assigned to the taken-over wagon type; empty until classified
    pub taken_classification: String,

    /// Category assigned to the handed-over wagon type; empty until classified
    pub handed_classification: String,
}

impl InterchangeRecord {
    /// Create a new record; the copy view starts as a clone of the station
    pub fn new(zone_to: String, ic_station: String, taken_over: Leg, handed_over: Leg) -> Self {
        let ic_station_copy = ic_station.clone();
        Self {
            zone_to,
            ic_station,
            ic_station_copy,
            taken_over,
            handed_over,
            taken_classification: String::new(),
            handed_classification: String::new(),
        }
    }

    /// Get the movement leg matching a report role
    pub fn leg(&self, role: Role) -> &Leg {
        match role {
            Role::HandedOver => &self.handed_over,
            Role::TakenOver => &self.taken_over,
        }
    }

    /// Get the station view a report role groups on
    pub fn grouping_station(&self, role: Role) -> &str {
        match role {
            Role::HandedOver => &self.ic_station_copy,
            Role::TakenOver => &self.ic_station,
        }
    }

    /// Get the wagon classification for a report role
    pub fn classification(&self, role: Role) -> &str {
        match role {
            Role::HandedOver => &self.handed_classification,
            Role::TakenOver => &self.taken_classification,
        }
    }
}
