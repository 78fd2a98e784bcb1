//! # CLI Behavior
//!
//! This is **one possible UI client** for the stock sheet, not the application
//! itself. The CLI is the only place that knows about the terminal, exit codes,
//! and output formatting.
//!
//! ## Session
//!
//! Running `garage` opens the main menu:
//!
//! ```text
//! 1. View all vehicles
//! 2. Add a vehicle
//! 3. Remove a vehicle
//! 4. Exit
//! ```
//!
//! Every action returns to the menu. Store problems are reported and the
//! action is abandoned; bad input is re-asked on the spot.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, logging
//! - `commands`: Config loading and backend wiring
//! - `menu`: The main menu loop
//! - `handlers`: Interactive list / add / remove flows
//! - `render`: Tables and colored messages

mod commands;
mod handlers;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
