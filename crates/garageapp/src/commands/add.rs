use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{next_id, Vehicle, VehicleDraft};
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Append `draft` as a new vehicle.
///
/// `stock` is the stock the draft was validated against; the new ID is one
/// past its highest ID. Status is always "For Sale" and the date is `added_on`.
pub fn run<S: RecordStore>(
    store: &mut S,
    stock: &[Vehicle],
    draft: VehicleDraft,
    added_on: NaiveDate,
) -> Result<CmdResult> {
    let vehicle = Vehicle::from_draft(next_id(stock)?, draft, added_on);
    store.append(&vehicle.to_row()?)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Vehicle {} added successfully!",
        vehicle.reg_number
    )));
    Ok(result.with_affected_vehicles(vec![vehicle]))
}
