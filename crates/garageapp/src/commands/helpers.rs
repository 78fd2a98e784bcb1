use crate::error::Result;
use crate::model::{normalize, Vehicle};
use crate::store::RecordStore;

/// Fetch every row and normalize it. An empty sheet is an empty stock.
pub fn load_stock<S: RecordStore>(store: &S) -> Result<Vec<Vehicle>> {
    let rows = store.fetch_all()?.into_rows();
    normalize(&rows)
}
