use crate::error::Result;
use crate::store::Cell;

/// Abstract interface for raw worksheet I/O.
/// This trait handles the "how" of storage (remote sheet, file, memory),
/// while SheetStore handles the "what" (header mapping, empty marker, guards).
pub trait SheetBackend {
    /// Read every row of the worksheet, header included, as cell text.
    /// A blank worksheet yields an empty vector.
    fn read_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Append one row after the last non-empty row.
    fn append_row(&self, cells: &[Cell]) -> Result<()>;

    /// Delete the row at a 1-based index, shifting later rows up.
    fn delete_row(&self, row_index: usize) -> Result<()>;

    /// Short human-readable description for logs (e.g. a file path).
    fn describe(&self) -> String;
}

/// Text form of a JSON cell value as returned by a sheet.
/// Whole numbers print without a fractional part; `null` is an empty cell.
pub(crate) fn cell_text(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
