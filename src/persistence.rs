//! CSV persistence for the inventory.
//!
//! Each boat is one headerless line of exactly five fields:
//!
//! ```text
//! name,length,location_kind,location_value,amount_owed
//! ```
//!
//! Fields are never quoted, so names and tags cannot contain commas. Length is
//! written as whole feet and the balance with two decimal places.

use crate::boat::{Boat, Location, MAX_LICENSE_TAG_LEN, MAX_NAME_LEN};
use crate::error::{MarinaError, Result};
use crate::money::Money;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Number of fields in a boat line.
pub const FIELD_COUNT: usize = 5;

/// Raw boat line, matched to fields by position.
///
/// Text fields are kept exactly as read; conversion to a [`Boat`] happens in
/// [`BoatRecord::into_boat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatRecord {
    pub name: String,
    pub length: String,
    pub kind: String,
    pub value: String,
    pub amount_owed: Money,
}

impl BoatRecord {
    /// Validates the raw fields and builds a typed boat.
    pub fn into_boat(self) -> Result<Boat> {
        if self.name.is_empty() {
            return Err(MarinaError::parse("missing boat name"));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(MarinaError::parse(format!(
                "name longer than {} bytes",
                MAX_NAME_LEN
            )));
        }
        if self.value.is_empty() {
            return Err(MarinaError::parse("missing location value"));
        }

        let length = Decimal::from_str(self.length.trim())
            .map_err(|_| MarinaError::parse(format!("invalid length '{}'", self.length)))?;

        let location = match self.kind.as_str() {
            "slip" => Location::Slip {
                number: parse_number(&self.value)?,
            },
            "land" => match self.value.chars().next() {
                Some(bay) => Location::Land { bay },
                None => return Err(MarinaError::parse("missing bay letter")),
            },
            "trailor" => {
                if self.value.len() > MAX_LICENSE_TAG_LEN {
                    return Err(MarinaError::parse(format!(
                        "license tag longer than {} bytes",
                        MAX_LICENSE_TAG_LEN
                    )));
                }
                Location::Trailer {
                    license_tag: self.value,
                }
            }
            "storage" => Location::Storage {
                number: parse_number(&self.value)?,
            },
            other => {
                return Err(MarinaError::parse(format!(
                    "unknown location kind '{}'",
                    other
                )))
            }
        };

        Ok(Boat::new(self.name, length, location, self.amount_owed))
    }
}

impl From<&Boat> for BoatRecord {
    fn from(boat: &Boat) -> Self {
        BoatRecord {
            name: boat.name.clone(),
            length: boat.whole_feet(),
            kind: boat.location.kind_tag().to_string(),
            value: boat.location.value(),
            amount_owed: boat.amount_owed,
        }
    }
}

/// Boats read from a file, plus how many lines could not be used.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub boats: Vec<Boat>,
    pub skipped: usize,
}

/// Parses one boat line, as typed at the "add" prompt.
pub fn parse_line(line: &str) -> Result<Boat> {
    let mut reader = csv_reader(line.as_bytes());
    let mut record = StringRecord::new();

    if !reader.read_record(&mut record)? {
        return Err(MarinaError::parse("empty line"));
    }
    parse_record(&record)
}

/// Renders a boat as one line, without the trailing newline.
pub fn serialize_line(boat: &Boat) -> String {
    let record = BoatRecord::from(boat);
    format!(
        "{},{},{},{},{}",
        record.name, record.length, record.kind, record.value, record.amount_owed
    )
}

/// Reads every boat line from `reader`.
///
/// Lines that do not parse are skipped and counted. Only I/O failures abort
/// the load.
pub fn load_all<R: Read>(reader: R) -> Result<LoadOutcome> {
    let mut csv_reader = csv_reader(reader);
    let mut outcome = LoadOutcome::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable line: {}", e);
                outcome.skipped += 1;
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());
        match parse_record(&record) {
            Ok(boat) => {
                debug!("Line {}: loaded {}", line, boat.name);
                outcome.boats.push(boat);
            }
            Err(e) => {
                warn!("Line {}: {}, skipping", line, e);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Writes one line per boat, in the given order.
pub fn save_all<W: Write>(writer: W, boats: &[Boat]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for boat in boats {
        csv_writer.serialize(BoatRecord::from(boat))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Loads the inventory file at `path`.
pub fn load_file(path: &Path) -> Result<LoadOutcome> {
    let file = File::open(path)?;
    let outcome = load_all(BufReader::new(file))?;
    info!(
        "Loaded {} boats from {} ({} lines skipped)",
        outcome.boats.len(),
        path.display(),
        outcome.skipped
    );
    Ok(outcome)
}

/// Replaces the contents of `path` with `boats`.
pub fn save_file(path: &Path, boats: &[Boat]) -> Result<()> {
    let file = File::create(path)?;
    save_all(BufWriter::new(file), boats)?;
    info!("Saved {} boats to {}", boats.len(), path.display());
    Ok(())
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

fn parse_record(record: &StringRecord) -> Result<Boat> {
    if record.len() != FIELD_COUNT {
        return Err(MarinaError::parse(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let raw: BoatRecord = record
        .deserialize(None)
        .map_err(|e| MarinaError::parse(e.to_string()))?;
    raw.into_boat()
}

fn parse_number(value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| MarinaError::parse(format!("invalid location number '{}'", value)))
}
