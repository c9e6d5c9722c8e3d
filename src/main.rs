//! Boat Manager CLI
//!
//! Loads a marina inventory file, runs the interactive menu on stdin/stdout,
//! and writes the inventory back to the same file on exit.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- BoatData.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use boat_manager::{persistence, Inventory, MarinaError, Result, Shell};
use log::warn;
use std::env;
use std::io;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args
            .first()
            .map(String::as_str)
            .unwrap_or("boat-manager")
            .to_string();
        return Err(MarinaError::Usage { program });
    }

    let path = Path::new(&args[1]);
    let mut inventory = match persistence::load_file(path) {
        Ok(outcome) => {
            if outcome.skipped > 0 {
                warn!("Skipped {} unreadable lines in {}", outcome.skipped, path.display());
            }
            Inventory::from_boats(outcome.boats)
        }
        Err(e) => {
            eprintln!("Failed to open file: {}", e);
            Inventory::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Shell::new(&mut inventory, stdin.lock(), stdout.lock()).run();
    if let Err(e) = &session {
        warn!("Command loop ended early: {}", e);
    }

    // the inventory is written back even when the session failed
    persistence::save_file(path, inventory.list())?;
    session
}
