//! # Vehicle Records
//!
//! A [`Vehicle`] is the typed form of one data row in the stock sheet. Rows come
//! out of the store as [`RawRow`]s (cell text keyed by header name) and are
//! turned into vehicles by [`normalize`].
//!
//! ## Sheet Layout
//!
//! ```text
//! row 1   id | reg_number | make | model | year | mileage | purchase_price | sale_price | status | date_added
//! row 2   1  | CN18 YGG   | Ford | Fiesta| 2018 | 50000   | 8000           | 10000      | For Sale | 2026-10-16
//! ```
//!
//! The header occupies row 1, so the vehicle at position `p` (0-based) in a
//! fetched sequence lives at sheet row `p + 2`. That row number is what
//! deletion needs; it is never part of a vehicle's identity and is only
//! handed out by [`find_by_id`].
//!
//! ## Normalization Policy
//!
//! Normalization is fail-fast: one row with a missing or unparseable `id`
//! makes the whole data set unreadable. An empty sheet is a valid, empty
//! stock; a corrupt sheet is an error. The two are never conflated.

use crate::error::{GarageError, Result};
use crate::store::Cell;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Column order of the stock sheet.
pub const COLUMNS: [&str; 10] = [
    "id",
    "reg_number",
    "make",
    "model",
    "year",
    "mileage",
    "purchase_price",
    "sale_price",
    "status",
    "date_added",
];

/// Status assigned to every newly added vehicle.
pub const STATUS_FOR_SALE: &str = "For Sale";

/// Format used for the `date_added` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sheet row of the first vehicle (row 1 is the header).
pub const FIRST_DATA_ROW: usize = 2;

/// One data row as read from the store, keyed by header name.
pub type RawRow = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: u32,
    pub reg_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: u64,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub status: String,
    pub date_added: String,
}

/// Validated user input for a vehicle that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDraft {
    pub reg_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: u64,
    pub purchase_price: f64,
    pub sale_price: f64,
}

impl Vehicle {
    /// Build a stock record from a draft, stamping status and date.
    pub fn from_draft(id: u32, draft: VehicleDraft, added_on: NaiveDate) -> Self {
        Self {
            id,
            reg_number: draft.reg_number,
            make: draft.make,
            model: draft.model,
            year: draft.year,
            mileage: draft.mileage,
            purchase_price: draft.purchase_price,
            sale_price: draft.sale_price,
            status: STATUS_FOR_SALE.to_string(),
            date_added: added_on.format(DATE_FORMAT).to_string(),
        }
    }

    /// Cells in [`COLUMNS`] order, ready to append.
    pub fn to_row(&self) -> Result<Vec<Cell>> {
        let mileage = i64::try_from(self.mileage).map_err(|_| {
            GarageError::Store(format!("mileage {} is too large to store", self.mileage))
        })?;
        Ok(vec![
            Cell::Int(i64::from(self.id)),
            Cell::Text(self.reg_number.clone()),
            Cell::Text(self.make.clone()),
            Cell::Text(self.model.clone()),
            Cell::Int(i64::from(self.year)),
            Cell::Int(mileage),
            Cell::Float(self.purchase_price),
            Cell::Float(self.sale_price),
            Cell::Text(self.status.clone()),
            Cell::Text(self.date_added.clone()),
        ])
    }
}

/// Render a price the way the sheet shows whole amounts (`10000.0`).
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Convert fetched rows into vehicles, failing on the first corrupt row.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<Vehicle>> {
    rows.iter()
        .enumerate()
        .map(|(pos, row)| vehicle_from_row(row, pos + FIRST_DATA_ROW))
        .collect()
}

fn vehicle_from_row(row: &RawRow, sheet_row: usize) -> Result<Vehicle> {
    let id = parse_id(row.get("id").map(String::as_str), sheet_row)?;
    Ok(Vehicle {
        id,
        reg_number: text(row, "reg_number"),
        make: text(row, "make"),
        model: text(row, "model"),
        year: parse_number(row, "year", sheet_row)?,
        mileage: parse_number(row, "mileage", sheet_row)?,
        purchase_price: parse_number(row, "purchase_price", sheet_row)?,
        sale_price: parse_number(row, "sale_price", sheet_row)?,
        status: text(row, "status"),
        date_added: text(row, "date_added"),
    })
}

fn parse_id(raw: Option<&str>, sheet_row: usize) -> Result<u32> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(GarageError::DataIntegrity {
            row: sheet_row,
            reason: "missing vehicle ID".to_string(),
        });
    }
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(GarageError::DataIntegrity {
            row: sheet_row,
            reason: format!("invalid vehicle ID '{}'", raw),
        }),
    }
}

fn text(row: &RawRow, column: &str) -> String {
    row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(row: &RawRow, column: &str, sheet_row: usize) -> Result<T> {
    let raw = text(row, column);
    raw.parse::<T>().map_err(|_| GarageError::DataIntegrity {
        row: sheet_row,
        reason: format!("invalid {} '{}'", column, raw),
    })
}

/// Locate a vehicle by ID, returning it with its sheet row number.
pub fn find_by_id(records: &[Vehicle], target_id: u32) -> Option<(&Vehicle, usize)> {
    records
        .iter()
        .position(|v| v.id == target_id)
        .map(|pos| (&records[pos], pos + FIRST_DATA_ROW))
}

/// Next ID to assign: one past the highest existing ID. Deleted IDs are never reused.
pub fn next_id(records: &[Vehicle]) -> Result<u32> {
    let highest = records.iter().map(|v| v.id).max().unwrap_or(0);
    highest.checked_add(1).ok_or_else(|| {
        GarageError::Store(format!("no vehicle IDs left after {}", highest))
    })
}

#[cfg(test)]
pub(crate) fn raw_row(cells: &[(&str, &str)]) -> RawRow {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
