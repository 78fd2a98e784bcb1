//! Interactive flows behind the menu options.
//!
//! Each handler talks to the user through a [`Prompter`] and to the sheet
//! through [`GarageApi`]. Store failures are printed and end the flow; only
//! terminal errors (closed input, broken stdout) propagate.

use super::render::{format_message, vehicle_table};
use garageapp::api::GarageApi;
use garageapp::commands::{CmdMessage, CmdResult};
use garageapp::error::{GarageError, Result};
use garageapp::model::{find_by_id, Vehicle};
use garageapp::prompt::Prompter;
use garageapp::store::RecordStore;
use garageapp::validation::YearRange;
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RemoveOutcome {
    Removed,
    /// User went back to the menu without removing anything.
    Backed,
    /// Nothing could be removed: empty stock or a store failure.
    Unavailable,
}

pub(super) fn view_all<S, R, W>(api: &GarageApi<S>, p: &mut Prompter<R, W>) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let result = match api.list_vehicles() {
        Ok(result) => result,
        Err(e) => return report_fetch_failure(p, e),
    };

    if result.listed_vehicles.is_empty() {
        return print_messages(p, &result);
    }
    p.say("\nCurrent Stock:\n")?;
    p.say(vehicle_table(&result.listed_vehicles))
}

/// Returns whether a vehicle was stored.
pub(super) fn add_vehicle<S, R, W>(
    api: &mut GarageApi<S>,
    p: &mut Prompter<R, W>,
    years: YearRange,
) -> Result<bool>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let Some(stock) = fetch_stock(api, p)? else {
        return Ok(false);
    };

    p.say("\nAdd a new vehicle to stock")?;
    let draft = p.ask_vehicle(&stock, years)?;

    match api.add_vehicle(&stock, draft) {
        Ok(result) => {
            print_messages(p, &result)?;
            Ok(true)
        }
        Err(e) if e.is_store_failure() => {
            warn!(error = %e, "add failed");
            say_message(
                p,
                &CmdMessage::error(format!(
                    "Failed to add vehicle: {}. Please check your connection and try again.",
                    e
                )),
            )?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub(super) fn remove_vehicle<S, R, W>(
    api: &mut GarageApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<RemoveOutcome>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let Some(stock) = fetch_stock(api, p)? else {
        return Ok(RemoveOutcome::Unavailable);
    };
    if stock.is_empty() {
        p.say("\nNo vehicles in stock to remove.")?;
        return Ok(RemoveOutcome::Unavailable);
    }

    p.say("\nCurrent Stock:\n")?;
    p.say(vehicle_table(&stock))?;

    loop {
        let input = p.ask("\nEnter the ID of the vehicle to remove, or press Enter to go back: ")?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(RemoveOutcome::Backed);
        }

        let Ok(id) = input.parse::<u32>() else {
            p.say("\nInvalid input. Please enter a valid numeric ID or press Enter to go back.")?;
            continue;
        };
        let Some((vehicle, row_index)) = find_by_id(&stock, id) else {
            p.say(format!("\nVehicle ID {} not found. Please try again.", id))?;
            continue;
        };

        let question = format!(
            "\nAre you sure you want to remove Vehicle ID {} ({})? (y/n): ",
            vehicle.id, vehicle.reg_number
        );
        if !p.ask_yes_no(&question)? {
            say_message(
                p,
                &CmdMessage::warning("Removal cancelled. Enter another ID or press Enter to go back."),
            )?;
            continue;
        }

        return match api.remove_vehicle(vehicle, row_index) {
            Ok(result) => {
                print_messages(p, &result)?;
                Ok(RemoveOutcome::Removed)
            }
            Err(e) if e.is_store_failure() => {
                warn!(error = %e, id, "remove failed");
                say_message(
                    p,
                    &CmdMessage::error(format!(
                        "Failed to remove vehicle: {}. Please check your connection and try again.",
                        e
                    )),
                )?;
                Ok(RemoveOutcome::Unavailable)
            }
            Err(e) => Err(e),
        };
    }
}

/// Current stock, or `None` after telling the user it could not be read.
fn fetch_stock<S, R, W>(api: &GarageApi<S>, p: &mut Prompter<R, W>) -> Result<Option<Vec<Vehicle>>>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    match api.load_stock() {
        Ok(stock) => Ok(Some(stock)),
        Err(e) => report_fetch_failure(p, e).map(|_| None),
    }
}

fn report_fetch_failure<R: BufRead, W: Write>(p: &mut Prompter<R, W>, err: GarageError) -> Result<()> {
    if !err.is_store_failure() {
        return Err(err);
    }
    warn!(error = %err, "could not read stock");
    let message = match err {
        GarageError::DataIntegrity { .. } => format!(
            "Unable to read stock data: {}. Please check the sheet contents.",
            err
        ),
        _ => format!(
            "Unable to retrieve stock data: {}. Please check your internet/API connection and try again.",
            err
        ),
    };
    say_message(p, &CmdMessage::error(message))
}

fn print_messages<R: BufRead, W: Write>(p: &mut Prompter<R, W>, result: &CmdResult) -> Result<()> {
    result.messages.iter().try_for_each(|message| say_message(p, message))
}

fn say_message<R: BufRead, W: Write>(p: &mut Prompter<R, W>, message: &CmdMessage) -> Result<()> {
    p.say(format!("\n{}", format_message(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use garageapp::model::COLUMNS;
    use garageapp::prompt::scripted;
    use garageapp::store::mem_backend::MemBackend;
    use garageapp::store::memory::fixtures::StockFixture;
    use garageapp::store::memory::InMemoryStore;
    use garageapp::store::sheet_store::SheetStore;

    fn years() -> YearRange {
        YearRange::new(2001, 2036)
    }

    fn output(p: Prompter<std::io::Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn view_all_on_empty_stock() {
        let api = GarageApi::new(InMemoryStore::new());
        let mut p = scripted(&[]);
        view_all(&api, &mut p).unwrap();
        assert!(output(p).contains("No vehicles in stock"));
    }

    #[test]
    fn view_all_prints_table() {
        let api = GarageApi::new(StockFixture::new().with_vehicle(1, "CN18 YGG").store);
        let mut p = scripted(&[]);
        view_all(&api, &mut p).unwrap();
        let out = output(p);
        assert!(out.contains("Current Stock:"));
        assert!(out.contains("CN18 YGG"));
    }

    #[test]
    fn view_all_reports_store_failure() {
        let store = InMemoryStore::new();
        store.backend().set_simulate_read_error(true);
        let api = GarageApi::new(store);
        let mut p = scripted(&[]);
        view_all(&api, &mut p).unwrap();
        assert!(output(p).contains("Unable to retrieve stock data"));
    }

    #[test]
    fn add_to_empty_stock() {
        let mut api = GarageApi::new(InMemoryStore::new());
        let mut p = scripted(&["cn18 ygg", "ford", "fiesta", "2018", "50000", "8000", "10000"]);

        assert!(add_vehicle(&mut api, &mut p, years()).unwrap());
        assert!(output(p).contains("Vehicle CN18 YGG added successfully!"));

        let stock = api.load_stock().unwrap();
        assert_eq!(stock.len(), 1);
        let v = &stock[0];
        assert_eq!(v.id, 1);
        assert_eq!(v.reg_number, "CN18 YGG");
        assert_eq!(v.make, "Ford");
        assert_eq!(v.model, "Fiesta");
        assert_eq!(v.sale_price, 10000.0);
        assert_eq!(v.status, "For Sale");
    }

    #[test]
    fn add_reprompts_bad_fields() {
        let mut api = GarageApi::new(StockFixture::new().with_vehicle(1, "CN18 YGG").store);
        let mut p = scripted(&[
            "CN18 YGG", // duplicate
            "bad",      // wrong format
            "LD21 XYZ",
            "",
            "vauxhall",
            "corsa",
            "1999",
            "2021",
            "-5",
            "12000",
            "abc",
            "7000",
            "9500.50",
        ]);

        assert!(add_vehicle(&mut api, &mut p, years()).unwrap());
        let out = output(p);
        assert!(out.contains("already exists"));
        assert!(out.contains("Invalid registration format"));
        assert!(out.contains("This field cannot be empty"));
        assert!(out.contains("Please enter a valid year between 2001 and 2036."));

        let stock = api.load_stock().unwrap();
        assert_eq!(stock[1].id, 2);
        assert_eq!(stock[1].make, "Vauxhall");
        assert_eq!(stock[1].mileage, 12000);
        assert_eq!(stock[1].sale_price, 9500.5);
    }

    #[test]
    fn oversized_mileage_is_reasked_and_stock_stays_readable() {
        let mut api = GarageApi::new(InMemoryStore::new());
        let mut p = scripted(&[
            "CN18 YGG",
            "ford",
            "fiesta",
            "2018",
            "18446744073709551615",
            "120000",
            "8000",
            "10000",
        ]);

        assert!(add_vehicle(&mut api, &mut p, years()).unwrap());
        assert!(output(p).contains("Please enter a number less than or equal to 9999999."));

        let stock = api.load_stock().unwrap();
        assert_eq!(stock[0].mileage, 120000);

        let mut p = scripted(&["1", "y"]);
        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Removed);
    }

    #[test]
    fn add_with_failing_write_keeps_sheet() {
        let fixture = StockFixture::new().with_vehicle(1, "CN18 YGG");
        fixture.store.backend().set_simulate_write_error(true);
        let mut api = GarageApi::new(fixture.store);
        let mut p = scripted(&["LD21 XYZ", "ford", "ka", "2019", "1000", "1", "2"]);

        assert!(!add_vehicle(&mut api, &mut p, years()).unwrap());
        assert!(output(p).contains("Failed to add vehicle"));
        assert_eq!(api.load_stock().unwrap().len(), 1);
    }

    #[test]
    fn add_stops_when_input_runs_out() {
        let mut api = GarageApi::new(InMemoryStore::new());
        let mut p = scripted(&["CN18 YGG", "Ford"]);
        let err = add_vehicle(&mut api, &mut p, years()).unwrap_err();
        assert!(matches!(err, GarageError::InputClosed));
        assert!(api.load_stock().unwrap().is_empty());
    }

    #[test]
    fn remove_confirmed() {
        let mut api = GarageApi::new(StockFixture::new().with_ids(&[1, 2]).store);
        let mut p = scripted(&["2", "y"]);

        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Removed);
        assert!(output(p).contains("Vehicle ID 2 (AB02 CDE) removed successfully!"));
        let ids: Vec<u32> = api.load_stock().unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn remove_declined_then_back() {
        let mut api = GarageApi::new(StockFixture::new().with_ids(&[1, 2]).store);
        let mut p = scripted(&["1", "n", ""]);

        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Backed);
        assert!(output(p).contains("Removal cancelled"));
        assert_eq!(api.load_stock().unwrap().len(), 2);
    }

    #[test]
    fn remove_unknown_and_non_numeric_reprompt() {
        let mut api = GarageApi::new(StockFixture::new().with_ids(&[1]).store);
        let mut p = scripted(&["abc", "99", "maybe", ""]);

        // "maybe" is read as an ID, not as a confirmation answer
        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Backed);
        let out = output(p);
        assert_eq!(out.matches("Invalid input. Please enter a valid numeric ID").count(), 2);
        assert!(out.contains("Vehicle ID 99 not found. Please try again."));
        assert_eq!(api.load_stock().unwrap().len(), 1);
    }

    #[test]
    fn remove_reprompts_confirmation() {
        let mut api = GarageApi::new(StockFixture::new().with_ids(&[1]).store);
        let mut p = scripted(&["1", "sure", "Y"]);

        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Removed);
        assert!(api.load_stock().unwrap().is_empty());
    }

    #[test]
    fn remove_on_empty_stock() {
        let mut api = GarageApi::new(InMemoryStore::new());
        let mut p = scripted(&[]);
        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Unavailable);
        assert!(output(p).contains("No vehicles in stock to remove."));
    }

    #[test]
    fn corrupt_sheet_is_reported() {
        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        let corrupt = vec!["oops".to_string(), "LD21 XYZ".to_string()];
        let store = SheetStore::with_backend(MemBackend::with_rows(vec![header, corrupt]));
        let mut api = GarageApi::new(store);
        let mut p = scripted(&[]);

        assert_eq!(remove_vehicle(&mut api, &mut p).unwrap(), RemoveOutcome::Unavailable);
        assert!(output(p).contains("Unable to read stock data"));
    }
}
