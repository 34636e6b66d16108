//! ICS file generation and parsing.
//!
//! Generation writes the reminder calendar by hand so the property order is
//! stable; parsing goes through the icalendar crate.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::{ParsedReminder, parse_reminder};
