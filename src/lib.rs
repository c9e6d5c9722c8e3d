//! # Boat Manager
//!
//! Keeps a marina's boat inventory: each boat's name, length, storage
//! location and outstanding balance, persisted as a headerless CSV file.
//!
//! ## Design Principles
//!
//! - **Fixed-point currency**: Balances use 2 decimal places via `rust_decimal`
//! - **Sorted store**: Boats stay ordered by case-insensitive name
//! - **Lenient load**: Unparseable lines are skipped and counted, never fatal
//! - **Typed locations**: Slip, land, trailer and storage each carry only their own data
//!
//! ## Example
//!
//! ```no_run
//! use boat_manager::{persistence, Inventory};
//! use std::path::Path;
//!
//! let path = Path::new("BoatData.csv");
//! let mut inventory = Inventory::from_boats(persistence::load_file(path).unwrap().boats);
//! inventory.charge_monthly();
//! persistence::save_file(path, inventory.list()).unwrap();
//! ```

pub mod boat;
pub mod error;
pub mod inventory;
pub mod money;
pub mod name;
pub mod persistence;
pub mod shell;

pub use boat::{Boat, Location};
pub use error::{MarinaError, Result};
pub use inventory::{Inventory, DEFAULT_CAPACITY};
pub use money::Money;
pub use persistence::{parse_line, serialize_line, LoadOutcome};
pub use shell::{Command, Shell};
