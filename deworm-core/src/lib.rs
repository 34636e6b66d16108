//! Core of the deworm reminder tool.
//!
//! - `date` advances a last-dose date to the next due date
//! - `reminder` and `state` model a calculation session
//! - `ics` writes (and reads back) the calendar file
//! - `export` is the boundary to file saving and the clipboard

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod export;
pub mod ics;
pub mod reminder;
pub mod state;

pub use error::{DewormError, DewormResult};
pub use reminder::ReminderEvent;
pub use state::{Phase, ReminderState};
