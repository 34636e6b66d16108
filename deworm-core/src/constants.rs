//! Fixed values of the reminder and its calendar file.

/// Months between two deworming doses.
pub const REMINDER_INTERVAL_MONTHS: u32 = 3;

/// Domain part of every generated event UID.
pub const UID_DOMAIN: &str = "dewormreminder.com";

pub const PRODUCT_ID: &str = "-//Deworm Reminder//EN";

pub const EVENT_SUMMARY: &str = "Time to Deworm 💊";

pub const EVENT_DESCRIPTION: &str = "Reminder to take your deworming medication. \
WHO recommends deworming every 3 months in endemic areas.";

/// Suggested filename for the exported calendar file.
pub const EXPORT_FILENAME: &str = "deworm-reminder.ics";

pub const CALENDAR_MEDIA_TYPE: &str = "text/calendar";

/// UTC timestamp layout used by DTSTAMP and DTSTART.
pub const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
