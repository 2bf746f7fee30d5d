//! cronex — cron expression expander.
//!
//! Parses a single-line cron entry (five schedule fields plus a command)
//! and expands each field into the explicit list of values it matches.
//!
//! # Examples
//!
//! ```
//! use cronex::CronEntry;
//!
//! let entry: CronEntry = "*/15 0 1,15 * 1-5 /usr/bin/find".parse().unwrap();
//! assert_eq!(entry.minutes, vec![0, 15, 30, 45]);
//! println!("{entry}"); // six-row field table
//! ```

pub mod display;
pub mod entry;
pub mod error;
pub mod parser;

pub use entry::{CronEntry, Field};
pub use error::InvalidExpression;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

impl CronEntry {
    /// Parse a cron entry line.
    pub fn parse(input: &str) -> Result<Self, InvalidExpression> {
        parser::parse(input)
    }
}

impl FromStr for CronEntry {
    type Err = InvalidExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CronEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("minute", &self.minutes)?;
        map.serialize_entry("hour", &self.hours)?;
        map.serialize_entry("day_of_month", &self.days_of_month)?;
        map.serialize_entry("month", &self.months)?;
        map.serialize_entry("day_of_week", &self.days_of_week)?;
        map.serialize_entry("command", &self.command)?;
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CronEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the expression string
        let s = String::deserialize(deserializer)?;
        CronEntry::parse(&s).map_err(serde::de::Error::custom)
    }
}
