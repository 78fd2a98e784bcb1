use super::backend::SheetBackend;
use super::{Cell, Fetched, RecordStore};
use crate::error::{GarageError, Result};
use crate::model::{RawRow, COLUMNS, FIRST_DATA_ROW};
use tracing::{debug, info, warn};

pub struct SheetStore<B: SheetBackend> {
    /// The underlying sheet backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: SheetBackend> SheetStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the column header if the worksheet is completely blank.
    fn ensure_header(&self) -> Result<()> {
        let rows = self.backend.read_rows()?;
        if rows.iter().all(|r| is_blank(r)) {
            debug!(backend = %self.backend.describe(), "writing header row");
            let header: Vec<Cell> = COLUMNS.iter().map(|c| Cell::Text(c.to_string())).collect();
            self.backend.append_row(&header)?;
        }
        Ok(())
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Pair each data row with the header; short rows are padded with empty cells.
fn map_rows(rows: Vec<Vec<String>>) -> Fetched {
    let mut rows = rows;
    // Interior blank rows still occupy a sheet row, so only trailing ones go.
    while rows.last().is_some_and(|r| is_blank(r)) {
        rows.pop();
    }

    let mut iter = rows.into_iter();
    let header: Vec<String> = match iter.next() {
        Some(h) => h.into_iter().map(|c| c.trim().to_string()).collect(),
        None => return Fetched::Empty,
    };

    let records: Vec<RawRow> = iter
        .map(|row| {
            header
                .iter()
                .enumerate()
                .filter(|(_, name)| !name.is_empty())
                .map(|(i, name)| (name.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect();

    if records.is_empty() {
        Fetched::Empty
    } else {
        Fetched::Rows(records)
    }
}

impl<B: SheetBackend> RecordStore for SheetStore<B> {
    fn fetch_all(&self) -> Result<Fetched> {
        let rows = self.backend.read_rows().inspect_err(|e| {
            warn!(backend = %self.backend.describe(), error = %e, "fetching stock failed");
        })?;
        let fetched = map_rows(rows);
        let count = match &fetched {
            Fetched::Empty => 0,
            Fetched::Rows(r) => r.len(),
        };
        debug!(backend = %self.backend.describe(), rows = count, "fetched stock");
        Ok(fetched)
    }

    fn append(&mut self, row: &[Cell]) -> Result<()> {
        self.ensure_header()?;
        self.backend.append_row(row).inspect_err(|e| {
            warn!(backend = %self.backend.describe(), error = %e, "append failed");
        })?;
        info!(backend = %self.backend.describe(), "appended row");
        Ok(())
    }

    fn delete_at(&mut self, row_index: usize) -> Result<()> {
        if row_index < FIRST_DATA_ROW {
            return Err(GarageError::Store(format!(
                "Row {} is the header and cannot be deleted",
                row_index
            )));
        }
        self.backend.delete_row(row_index).inspect_err(|e| {
            warn!(backend = %self.backend.describe(), row_index, error = %e, "delete failed");
        })?;
        info!(backend = %self.backend.describe(), row_index, "deleted row");
        Ok(())
    }
}
