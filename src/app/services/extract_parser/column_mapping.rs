//! Column mapping and validation for raw extract headers
//!
//! This module resolves column names to indices and enforces the required
//! column set once, so record construction can index rows directly.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for a raw extract header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping; first occurrence wins for duplicates
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze the header row, collecting every missing required column
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            name_to_index.entry(column_name).or_insert(index);
        }

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|column| !name_to_index.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_columns(file, missing));
        }

        Ok(Self { name_to_index })
    }

    /// Get the index for a given column name
    pub fn index_of(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Look up a trimmed cell value; blank and out-of-range cells are None
    pub fn field<'a>(&self, row: &'a StringRecord, column_name: &str) -> Option<&'a str> {
        let index = self.index_of(column_name)?;
        let value = row.get(index)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }

    /// Number of mapped columns
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
