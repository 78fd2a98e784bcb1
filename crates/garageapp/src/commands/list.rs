use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::load_stock;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let vehicles = load_stock(store)?;
    let mut result = CmdResult::default();
    if vehicles.is_empty() {
        result.add_message(CmdMessage::info("No vehicles in stock"));
    }
    Ok(result.with_listed_vehicles(vehicles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StockFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_reports_no_vehicles() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_vehicles.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "No vehicles in stock");
    }

    #[test]
    fn lists_every_vehicle() {
        let fixture = StockFixture::new().with_ids(&[1, 2, 3]);
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed_vehicles.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn listing_twice_is_identical() {
        let fixture = StockFixture::new().with_ids(&[4, 7]);
        let first = run(&fixture.store).unwrap().listed_vehicles;
        let second = run(&fixture.store).unwrap().listed_vehicles;
        assert_eq!(first, second);
    }

    #[test]
    fn fetch_failure_propagates() {
        let fixture = StockFixture::new().with_ids(&[1]);
        fixture.store.backend().set_simulate_read_error(true);
        assert!(run(&fixture.store).is_err());
    }
}
