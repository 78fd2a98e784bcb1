use super::backend::SheetBackend;
use crate::error::{GarageError, Result};
use crate::model::COLUMNS;
use crate::store::Cell;
use std::cell::RefCell;

/// In-memory sheet backend for testing.
///
/// Uses `RefCell` for interior mutability since the app is single-threaded.
/// This keeps the `SheetBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    rows: RefCell<Vec<Vec<String>>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    /// A completely blank worksheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A worksheet holding only the column header.
    pub fn with_header() -> Self {
        Self::with_rows(vec![COLUMNS.iter().map(|c| c.to_string()).collect()])
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: RefCell::new(rows),
            ..Self::default()
        }
    }

    /// Snapshot of every row, header included.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.borrow().clone()
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_write(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(GarageError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl SheetBackend for MemBackend {
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        if *self.simulate_read_error.borrow() {
            return Err(GarageError::Store("Simulated read error".to_string()));
        }
        Ok(self.rows.borrow().clone())
    }

    fn append_row(&self, cells: &[Cell]) -> Result<()> {
        self.check_write()?;
        let mut rows = self.rows.borrow_mut();
        rows.push(cells.iter().map(Cell::to_string).collect());
        Ok(())
    }

    fn delete_row(&self, row_index: usize) -> Result<()> {
        self.check_write()?;
        let mut rows = self.rows.borrow_mut();
        if row_index == 0 || row_index > rows.len() {
            return Err(GarageError::Store(format!(
                "Row {} is out of range (sheet has {} rows)",
                row_index,
                rows.len()
            )));
        }
        rows.remove(row_index - 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
