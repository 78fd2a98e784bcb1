use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "garage",
    bin_name = "garage",
    version,
    about = "Interactive stock manager for a used-car garage",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: garage.toml in the OS config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a local JSON stock file instead of the configured backend
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Log level for a `-v` count.
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the stderr log subscriber. Stdout stays reserved for the session.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
