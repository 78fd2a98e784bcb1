use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Vehicle;
use crate::store::RecordStore;

/// Delete `vehicle`, which lives at `row_index` as located by
/// [`find_by_id`](crate::model::find_by_id).
pub fn run<S: RecordStore>(store: &mut S, vehicle: &Vehicle, row_index: usize) -> Result<CmdResult> {
    store.delete_at(row_index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Vehicle ID {} ({}) removed successfully!",
        vehicle.id, vehicle.reg_number
    )));
    Ok(result.with_affected_vehicles(vec![vehicle.clone()]))
}
