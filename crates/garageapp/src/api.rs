//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point UI clients use, and it owns the store handle so no global
//! connection state exists.
//!
//! ## Generic Over RecordStore
//!
//! `GarageApi<S: RecordStore>` is generic over the storage adapter:
//! - Production: `GarageApi<SheetStore<SheetsBackend>>` or `GarageApi<SheetStore<JsonBackend>>`
//! - Testing: `GarageApi<InMemoryStore>`
//!
//! This enables testing every flow, including store failures, without a network.

use crate::commands;
use crate::error::Result;
use crate::model::{Vehicle, VehicleDraft};
use crate::store::RecordStore;
use chrono::{Local, NaiveDate};

pub struct GarageApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> GarageApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current stock, normalized.
    pub fn load_stock(&self) -> Result<Vec<Vehicle>> {
        commands::helpers::load_stock(&self.store)
    }

    pub fn list_vehicles(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Add a vehicle dated today (local time).
    pub fn add_vehicle(&mut self, stock: &[Vehicle], draft: VehicleDraft) -> Result<commands::CmdResult> {
        self.add_vehicle_on(stock, draft, today())
    }

    pub fn add_vehicle_on(
        &mut self,
        stock: &[Vehicle],
        draft: VehicleDraft,
        added_on: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, stock, draft, added_on)
    }

    pub fn remove_vehicle(&mut self, vehicle: &Vehicle, row_index: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, vehicle, row_index)
    }
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
