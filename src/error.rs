//! Error types for the boat manager.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for inventory and persistence operations
pub type Result<T> = std::result::Result<T, MarinaError>;

/// Errors that can occur while managing the marina inventory.
///
/// Apart from `Usage`, every variant is recoverable: the command loop reports
/// it and carries on with the inventory unchanged.
#[derive(Error, Debug)]
pub enum MarinaError {
    /// No boat matches the requested name
    #[error("No boat with that name")]
    NotFound { name: String },

    /// The inventory already holds its maximum number of boats
    #[error("Marina is full.")]
    CapacityExceeded { capacity: usize },

    /// A payment larger than the outstanding balance
    #[error("That is more than the amount owed, ${balance}")]
    PaymentExceedsBalance { balance: Money },

    /// A balance change whose result cannot be represented
    #[error("The balance for {name} is too large to change")]
    BalanceOverflow { name: String },

    /// A boat line that does not follow the five-field format
    #[error("Invalid boat data format: {message}")]
    Parse { message: String },

    /// Failed to open, read or write the inventory file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Wrong number of process arguments
    #[error("Usage: {program} BoatData.csv")]
    Usage { program: String },
}

impl MarinaError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        MarinaError::Parse {
            message: message.into(),
        }
    }
}
