//! # Storage Layer
//!
//! This module defines the storage abstraction for the stock sheet. The
//! [`RecordStore`] trait is the adapter every command talks to; it knows
//! nothing about vehicles, only about header-keyed rows.
//!
//! ## Two Layers
//!
//! 1. [`backend::SheetBackend`]: raw row I/O (the "how"). A backend reads every
//!    row of the worksheet as text, appends one row of typed cells, and deletes
//!    a row by its 1-based index.
//! 2. [`sheet_store::SheetStore`]: the adapter (the "what"). It maps the header
//!    row onto each data row, reports an empty sheet with an explicit marker,
//!    writes the header before the first append, and guards the header row
//!    against deletion.
//!
//! ## Row Indexes
//!
//! Indexes are 1-based and row 1 is the header:
//!
//! ```text
//! row 1   id | reg_number | make | ...      <- header, never deleted
//! row 2   first vehicle
//! row 3   second vehicle
//! ```
//!
//! ## Failures
//!
//! Every operation returns [`crate::error::Result`]. Connectivity, permission,
//! and parse problems all come back as errors carrying the cause; a failed call
//! has no partial effect the caller needs to undo.
//!
//! ## Implementations
//!
//! - [`sheets_backend::SheetsBackend`]: Google Sheets over HTTP (production).
//! - [`json_backend::JsonBackend`]: a local JSON file holding the sheet.
//! - [`mem_backend::MemBackend`]: in-memory rows with failure switches, for tests.

use crate::error::Result;
use crate::model::RawRow;
use serde::Serialize;
use std::fmt;

pub mod backend;
pub mod json_backend;
pub mod mem_backend;
pub mod memory;
pub mod sheet_store;
pub mod sheets_backend;

/// A typed cell value written to the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Result of reading every data row.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// The sheet holds no data rows.
    Empty,
    Rows(Vec<RawRow>),
}

impl Fetched {
    pub fn into_rows(self) -> Vec<RawRow> {
        match self {
            Fetched::Empty => Vec::new(),
            Fetched::Rows(rows) => rows,
        }
    }
}

/// Abstract interface for the stock row store.
pub trait RecordStore {
    /// Read every data row (the header is consumed as keys).
    fn fetch_all(&self) -> Result<Fetched>;

    /// Append one row of cells after the last row.
    fn append(&mut self, row: &[Cell]) -> Result<()>;

    /// Delete the row at a 1-based index; index 1 is the header.
    fn delete_at(&mut self, row_index: usize) -> Result<()>;
}
