//! Boat records and their storage locations.

use crate::money::Money;
use rust_decimal::Decimal;
use std::fmt;

/// Longest name, in bytes, the persisted format can hold.
pub const MAX_NAME_LEN: usize = 127;

/// Longest trailer license tag, in bytes, the persisted format can hold.
pub const MAX_LICENSE_TAG_LEN: usize = 31;

/// Where a boat is kept. Each kind carries only its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Wet slip, identified by number.
    Slip { number: i32 },

    /// Dry land, identified by bay letter.
    Land { bay: char },

    /// On a trailer, identified by its license tag.
    Trailer { license_tag: String },

    /// Indoor storage, identified by number.
    Storage { number: i32 },
}

impl Location {
    /// The kind tag used in the CSV file.
    ///
    /// Trailers are written as `trailor`; existing inventory files depend on
    /// that spelling.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            Location::Slip { .. } => "slip",
            Location::Land { .. } => "land",
            Location::Trailer { .. } => "trailor",
            Location::Storage { .. } => "storage",
        }
    }

    /// The kind-specific value as it appears in the CSV file.
    pub fn value(&self) -> String {
        match self {
            Location::Slip { number } | Location::Storage { number } => number.to_string(),
            Location::Land { bay } => bay.to_string(),
            Location::Trailer { license_tag } => license_tag.clone(),
        }
    }

    /// Monthly charge per foot of boat length.
    pub fn monthly_rate(&self) -> Decimal {
        match self {
            Location::Slip { .. } => Decimal::new(125, 1),
            Location::Land { .. } => Decimal::new(140, 1),
            Location::Trailer { .. } => Decimal::new(250, 1),
            Location::Storage { .. } => Decimal::new(112, 1),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Slip { number } => write!(f, "slip     #{:<3}", number),
            Location::Land { bay } => write!(f, "land      {:<3}", bay),
            Location::Trailer { license_tag } => write!(f, "trailor {:<8}", license_tag),
            Location::Storage { number } => write!(f, "storage  #{:<3}", number),
        }
    }
}

/// A boat in the marina inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    /// Unique name, compared without regard to case.
    pub name: String,

    /// Length in feet. Fractions are kept in memory but not persisted.
    pub length: Decimal,

    pub location: Location,

    /// Outstanding balance.
    pub amount_owed: Money,
}

impl Boat {
    pub fn new(name: impl Into<String>, length: Decimal, location: Location, amount_owed: Money) -> Self {
        Boat {
            name: name.into(),
            length,
            location,
            amount_owed,
        }
    }

    /// Length truncated to whole feet, as written to disk and shown in listings.
    pub fn whole_feet(&self) -> String {
        format!("{:.0}", self.length.trunc())
    }

    /// One month's charge for this boat: `length * rate`, or `None` if the
    /// product does not fit in a decimal.
    pub fn monthly_charge(&self) -> Option<Money> {
        self.length
            .checked_mul(self.location.monthly_rate())
            .map(Money::new)
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:>3}'  {}   Owes ${:>7}",
            self.name,
            self.whole_feet(),
            self.location,
            self.amount_owed
        )
    }
}
