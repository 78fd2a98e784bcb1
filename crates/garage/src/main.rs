//! # Garage CLI Architecture
//!
//! The `garage` binary is intentionally thin: the CLI lives in `src/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/garageapp/`: Core library: store adapter, vehicle model,
//!   validators, prompt loops, commands
//! - `crates/garage/`: This CLI tool, depends on `garageapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/garage/src/cli/)                         │
//! │  - clap argument parsing + logging setup (setup.rs)         │
//! │  - config + backend wiring (commands.rs)                    │
//! │  - menu loop (menu.rs) and interactive flows (handlers.rs)  │
//! │  - table and message rendering (render.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (garageapp::api)                                 │
//! │  - Owns the store handle                                    │
//! │  - Dispatches to command modules                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (garageapp::commands)                        │
//! │  - Pure business logic + data access                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Commands and validators** (`garageapp`): heavy unit testing against
//!   `InMemoryStore`.
//! - **Interactive flows** (`src/cli/`): scripted input lines drive the real
//!   prompt loops; captured output and the in-memory sheet are checked.
//! - **End to end** (`tests/`): the built binary runs against a temporary
//!   JSON stock file with stdin piped in.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
