use super::mem_backend::MemBackend;
use super::sheet_store::SheetStore;

pub type InMemoryStore = SheetStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store whose sheet holds only the column header.
    pub fn new() -> Self {
        SheetStore::with_backend(MemBackend::with_header())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Vehicle, VehicleDraft};
    use crate::store::RecordStore;
    use chrono::NaiveDate;

    pub fn draft(reg_number: &str, make: &str, model: &str) -> VehicleDraft {
        VehicleDraft {
            reg_number: reg_number.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year: 2018,
            mileage: 50000,
            purchase_price: 8000.0,
            sale_price: 10000.0,
        }
    }

    pub struct StockFixture {
        pub store: InMemoryStore,
    }

    impl Default for StockFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StockFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Append a vehicle with an explicit ID, bypassing ID assignment.
        pub fn with_vehicle(mut self, id: u32, reg_number: &str) -> Self {
            let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
            let vehicle = Vehicle::from_draft(id, draft(reg_number, "Ford", "Fiesta"), date);
            self.store.append(&vehicle.to_row().unwrap()).unwrap();
            self
        }

        /// Append vehicles with the given IDs and generated registrations.
        pub fn with_ids(self, ids: &[u32]) -> Self {
            ids.iter().fold(self, |fixture, id| {
                fixture.with_vehicle(*id, &format!("AB{:02} CDE", id % 100))
            })
        }

        pub fn row_count(&self) -> usize {
            self.store.backend().rows().len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StockFixture;
    use crate::model::normalize;
    use crate::store::RecordStore;

    #[test]
    fn fixture_round_trips_through_normalize() {
        let fixture = StockFixture::new().with_ids(&[1, 3, 5]);
        assert_eq!(fixture.row_count(), 4);

        let rows = fixture.store.fetch_all().unwrap().into_rows();
        let vehicles = normalize(&rows).unwrap();
        let ids: Vec<u32> = vehicles.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(vehicles[1].reg_number, "AB03 CDE");
    }
}
