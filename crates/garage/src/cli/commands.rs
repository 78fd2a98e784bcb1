//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into [`Cli`] via clap
//! 2. **Context Setup**: Load configuration and build the configured store
//! 3. **Dispatch**: Hand the store to the menu loop
//! 4. **Error Handling**: Startup failures become `Error: ...` and exit code 1

use super::menu::Menu;
use super::setup::{init_logging, Cli};
use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use garageapp::api::{today, GarageApi};
use garageapp::config::{BackendKind, GarageConfig};
use garageapp::prompt::Prompter;
use garageapp::store::json_backend::JsonBackend;
use garageapp::store::sheet_store::SheetStore;
use garageapp::store::sheets_backend::SheetsBackend;
use garageapp::store::RecordStore;
use garageapp::validation::YearRange;
use std::io::{self, BufRead, Write};
use tracing::info;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config =
        GarageConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = cli.data {
        config.backend = BackendKind::Json;
        config.data_file = Some(path);
    }

    let years = config.year_range(today());
    let term = Term::stdout();
    let term = term.is_term().then_some(term);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    match config.backend {
        BackendKind::Json => {
            let path = config.data_file();
            info!(path = %path.display(), "using JSON stock file");
            let store = SheetStore::with_backend(JsonBackend::new(path));
            run_menu(store, years, term, &mut prompter)
        }
        BackendKind::Sheets => {
            let backend = SheetsBackend::from_config(&config)
                .context("failed to set up the Google Sheets backend")?;
            info!(worksheet = %config.worksheet, "using Google Sheets");
            run_menu(SheetStore::with_backend(backend), years, term, &mut prompter)
        }
    }
}

fn run_menu<S, R, W>(
    store: S,
    years: YearRange,
    term: Option<Term>,
    prompter: &mut Prompter<R, W>,
) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let mut menu = Menu::new(GarageApi::new(store), years, term);
    menu.run(prompter)?;
    Ok(())
}
