use super::handlers::{self, RemoveOutcome};
use console::Term;
use garageapp::api::GarageApi;
use garageapp::error::Result;
use garageapp::prompt::Prompter;
use garageapp::store::RecordStore;
use garageapp::validation::YearRange;
use std::io::{BufRead, Write};
use tracing::debug;

const CHOICES: [&str; 4] = ["1", "2", "3", "4"];
const PAUSE: &str = "\nPress Enter to return to the main menu...";

pub(super) struct Menu<S: RecordStore> {
    api: GarageApi<S>,
    years: YearRange,
    /// Present only when stdout is a terminal; piped sessions are never cleared.
    term: Option<Term>,
}

impl<S: RecordStore> Menu<S> {
    pub fn new(api: GarageApi<S>, years: YearRange, term: Option<Term>) -> Self {
        Self { api, years, term }
    }

    /// Show the menu until the user picks Exit.
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        loop {
            self.show(p)?;
            let choice = p.ask_choice("\nEnter your choice (1-4): ", &CHOICES)?;
            debug!(choice, "menu choice");

            match choice {
                "1" => {
                    handlers::view_all(&self.api, p)?;
                    p.pause(PAUSE)?;
                }
                "2" => {
                    self.clear()?;
                    if handlers::add_vehicle(&mut self.api, p, self.years)? {
                        self.show_updated(p)?;
                    }
                    p.pause(PAUSE)?;
                }
                "3" => {
                    self.clear()?;
                    match handlers::remove_vehicle(&mut self.api, p)? {
                        RemoveOutcome::Removed => {
                            self.show_updated(p)?;
                            p.pause(PAUSE)?;
                        }
                        RemoveOutcome::Unavailable => p.pause(PAUSE)?,
                        RemoveOutcome::Backed => {}
                    }
                }
                _ => {
                    p.say("\nExiting Garage Stock Manager. Goodbye!")?;
                    return Ok(());
                }
            }
            self.clear()?;
        }
    }

    fn show<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        p.say("\nWelcome to Garage Stock Manager")?;
        p.say("Please choose an option:")?;
        p.say("\n1. View all vehicles")?;
        p.say("2. Add a vehicle")?;
        p.say("3. Remove a vehicle")?;
        p.say("4. Exit")
    }

    fn show_updated<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        p.say("\nStock Updated:")?;
        handlers::view_all(&self.api, p)
    }

    fn clear(&self) -> Result<()> {
        if let Some(term) = &self.term {
            term.clear_screen()?;
        }
        Ok(())
    }
}
