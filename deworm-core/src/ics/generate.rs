//! ICS file generation.

use crate::constants::{EVENT_DESCRIPTION, EVENT_SUMMARY, ICS_UTC_FORMAT, PRODUCT_ID};
use crate::reminder::ReminderEvent;

/// Generate the .ics content for a reminder.
///
/// The property set and order are fixed; calendar importers accept this
/// exact layout. DTSTAMP carries the due instant, same as DTSTART.
pub fn generate_ics(reminder: &ReminderEvent) -> String {
    let due = reminder.due_at.format(ICS_UTC_FORMAT).to_string();

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODUCT_ID}"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", reminder.uid),
        format!("DTSTAMP:{due}"),
        format!("DTSTART:{due}"),
        format!("SUMMARY:{EVENT_SUMMARY}"),
        format!("DESCRIPTION:{EVENT_DESCRIPTION}"),
        "STATUS:CONFIRMED".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        output.push_str(line);
        output.push_str("\r\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn make_test_reminder() -> ReminderEvent {
        let due_date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let due_at = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
        let generated_at = Utc.with_ymd_and_hms(2024, 12, 5, 8, 15, 42).unwrap();
        ReminderEvent::new(due_date, due_at, generated_at)
    }

    #[test]
    fn test_generate_ics_exact_layout() {
        let ics = generate_ics(&make_test_reminder());

        let expected = "BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            PRODID:-//Deworm Reminder//EN\r\n\
            BEGIN:VEVENT\r\n\
            UID:1733386542000@dewormreminder.com\r\n\
            DTSTAMP:20250305T000000Z\r\n\
            DTSTART:20250305T000000Z\r\n\
            SUMMARY:Time to Deworm 💊\r\n\
            DESCRIPTION:Reminder to take your deworming medication. WHO recommends deworming every 3 months in endemic areas.\r\n\
            STATUS:CONFIRMED\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n";

        assert_eq!(ics, expected, "Unexpected ICS output:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_single_vevent() {
        let ics = generate_ics(&make_test_reminder());

        let begins = ics.lines().filter(|l| *l == "BEGIN:VEVENT").count();
        let ends = ics.lines().filter(|l| *l == "END:VEVENT").count();
        assert_eq!(begins, 1, "Should have one BEGIN:VEVENT. ICS:\n{}", ics);
        assert_eq!(ends, 1, "Should have one END:VEVENT. ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_dtstart_matches_dtstamp() {
        let ics = generate_ics(&make_test_reminder());

        let value_of = |name: &str| {
            ics.lines()
                .find_map(|l| l.strip_prefix(name))
                .map(str::to_string)
        };
        assert_eq!(value_of("DTSTART:"), Some("20250305T000000Z".to_string()));
        assert_eq!(value_of("DTSTART:"), value_of("DTSTAMP:"));
    }

    #[test]
    fn test_generate_ics_truncates_to_seconds() {
        let mut reminder = make_test_reminder();
        reminder.due_at = Utc.with_ymd_and_hms(2025, 3, 5, 4, 0, 7).unwrap()
            + Duration::milliseconds(999);

        let ics = generate_ics(&reminder);
        assert!(
            ics.contains("DTSTART:20250305T040007Z\r\n"),
            "DTSTART should drop fractional seconds. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_distinct_uids() {
        let first = make_test_reminder();
        let second = ReminderEvent::new(
            first.due_date,
            first.due_at,
            first.generated_at + Duration::milliseconds(1),
        );

        let uid = |ics: String| ics.lines().find(|l| l.starts_with("UID:")).map(str::to_string);
        assert_ne!(uid(generate_ics(&first)), uid(generate_ics(&second)));
    }
}
