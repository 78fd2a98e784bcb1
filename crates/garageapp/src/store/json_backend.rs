use super::backend::{cell_text, SheetBackend};
use crate::error::{GarageError, Result};
use crate::store::Cell;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Sheet backend persisted as a JSON array of rows in a local file.
///
/// A missing file is a blank worksheet. Cells keep their JSON type on disk so
/// numbers stay numbers, mirroring what the remote sheet stores.
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Vec<Value>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<Vec<Value>> = serde_json::from_str(&content)?;
        Ok(rows)
    }

    fn save(&self, rows: &[Vec<Value>]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
            }
        }
        let content = serde_json::to_string_pretty(rows)?;

        // Atomic write: temp file next to the target, then rename
        let tmp_file = self.path.with_extension(format!("tmp-{}", std::process::id()));
        fs::write(&tmp_file, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_file, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn io_error(&self, err: std::io::Error) -> GarageError {
        GarageError::Store(format!("{}: {}", self.path.display(), err))
    }
}

impl SheetBackend for JsonBackend {
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .load()?
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect())
    }

    fn append_row(&self, cells: &[Cell]) -> Result<()> {
        let mut rows = self.load()?;
        rows.push(
            cells
                .iter()
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        );
        self.save(&rows)
    }

    fn delete_row(&self, row_index: usize) -> Result<()> {
        let mut rows = self.load()?;
        if row_index == 0 || row_index > rows.len() {
            return Err(GarageError::Store(format!(
                "Row {} is out of range ({} has {} rows)",
                row_index,
                self.path.display(),
                rows.len()
            )));
        }
        rows.remove(row_index - 1);
        self.save(&rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
