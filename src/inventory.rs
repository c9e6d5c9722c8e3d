//! In-memory marina inventory.
//!
//! Boats are kept sorted by name (case-insensitive, stable for equal names)
//! after every insert, so listings and lookups always see the same order.

use crate::boat::Boat;
use crate::error::{MarinaError, Result};
use crate::money::Money;
use crate::name::{compare_names, names_match};
use log::{debug, info, warn};

/// Number of boats the marina holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 120;

/// The marina's boats, owned exclusively by the store.
///
/// # Duplicate Names
///
/// Inserting a boat whose name matches an existing one is allowed. Both are
/// kept, and name-based operations act on the first match in sorted order.
#[derive(Debug, Clone)]
pub struct Inventory {
    boats: Vec<Boat>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty inventory with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }

    /// Creates an empty inventory holding at most `capacity` boats.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Inventory {
            boats: Vec::new(),
            capacity,
        }
    }

    /// Builds an inventory from previously loaded boats.
    ///
    /// Boats beyond the default capacity are dropped and logged.
    pub fn from_boats(boats: impl IntoIterator<Item = Boat>) -> Self {
        let mut inventory = Self::new();
        inventory.extend(boats);
        inventory
    }

    /// Inserts every boat, dropping those that do not fit.
    pub fn extend(&mut self, boats: impl IntoIterator<Item = Boat>) {
        for boat in boats {
            if let Err(e) = self.insert(boat) {
                warn!("Dropping loaded boat: {}", e);
            }
        }
    }

    /// Adds a boat and restores name order.
    ///
    /// Fails with `CapacityExceeded` when the marina is full; the store is
    /// left untouched.
    pub fn insert(&mut self, boat: Boat) -> Result<()> {
        if self.boats.len() >= self.capacity {
            debug!("Rejecting {}: marina full at {} boats", boat.name, self.capacity);
            return Err(MarinaError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        debug!("Adding boat {}", boat.name);
        self.boats.push(boat);
        self.sort();
        Ok(())
    }

    /// Position of the first boat named `name`, ignoring case.
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.boats.iter().position(|b| names_match(&b.name, name))
    }

    /// Looks up a boat by name.
    pub fn get(&self, name: &str) -> Option<&Boat> {
        self.find_index(name).map(|i| &self.boats[i])
    }

    /// Removes and returns the boat named `name`.
    pub fn remove(&mut self, name: &str) -> Result<Boat> {
        let index = self.index_of(name)?;
        let boat = self.boats.remove(index);
        debug!("Removed boat {}", boat.name);
        Ok(boat)
    }

    /// Applies a payment against a boat's balance and returns what is still owed.
    ///
    /// A payment larger than the balance is rejected outright; nothing is
    /// credited.
    pub fn apply_payment(&mut self, name: &str, amount: Money) -> Result<Money> {
        let index = self.index_of(name)?;
        let boat = &mut self.boats[index];

        if amount > boat.amount_owed {
            debug!(
                "Rejecting payment of {} for {}: only {} owed",
                amount, boat.name, boat.amount_owed
            );
            return Err(MarinaError::PaymentExceedsBalance {
                balance: boat.amount_owed,
            });
        }

        boat.amount_owed = boat
            .amount_owed
            .checked_sub(amount)
            .ok_or_else(|| MarinaError::BalanceOverflow {
                name: boat.name.clone(),
            })?;
        debug!("Paid {} for {}, {} remaining", amount, boat.name, boat.amount_owed);
        Ok(boat.amount_owed)
    }

    /// Bills every boat one month at its location's rate.
    ///
    /// A boat whose charge or new balance would overflow keeps its balance
    /// unchanged; the names of those boats are returned.
    pub fn charge_monthly(&mut self) -> Vec<String> {
        let mut skipped = Vec::new();

        for boat in &mut self.boats {
            let charged = boat.monthly_charge().and_then(|charge| {
                boat.amount_owed
                    .checked_add(charge)
                    .map(|owed| (charge, owed))
            });

            match charged {
                Some((charge, owed)) => {
                    boat.amount_owed = owed;
                    debug!("Charged {} to {}", charge, boat.name);
                }
                None => {
                    warn!(
                        "Monthly charge for {} overflows, balance left at {}",
                        boat.name, boat.amount_owed
                    );
                    skipped.push(boat.name.clone());
                }
            }
        }

        info!(
            "Applied monthly charges to {} of {} boats",
            self.boats.len() - skipped.len(),
            self.boats.len()
        );
        skipped
    }

    /// The boats in name order.
    pub fn list(&self) -> &[Boat] {
        &self.boats
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.find_index(name).ok_or_else(|| {
            debug!("No boat named {}", name);
            MarinaError::NotFound {
                name: name.to_string(),
            }
        })
    }

    fn sort(&mut self) {
        // sort_by is stable, so equal names keep insertion order
        self.boats.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
