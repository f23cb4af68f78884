//! Calendar-aware display formatting for message timestamps and separators.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate};

/// Formats the display time (hour:minute) for a message. Called once at
/// creation; the result is stored on the message and never recomputed.
/// Rendering is deliberately fixed to 24-hour HH:MM instead of following the
/// viewer's locale convention.
pub fn format_timestamp(date: &DateTime<Local>) -> String {
    date.format("%H:%M").to_string()
}

/// True if `current` starts a new calendar day relative to `previous`.
///
/// This is a day/month/year comparison, not an elapsed-time one: two messages
/// seconds apart across midnight still get a separator, while messages hours
/// apart on the same day do not. The very first message (no previous) always
/// gets one.
pub fn should_insert_date_separator(
    current: &DateTime<Local>,
    previous: Option<&DateTime<Local>>,
) -> bool {
    match previous {
        None => true,
        Some(previous) => current.date_naive() != previous.date_naive(),
    }
}

/// Display label for a date separator: "Today", "Yesterday", or a long
/// weekday + month + day string with the year appended when it differs from
/// the current year.
pub fn format_display_date(date: &DateTime<Local>) -> String {
    display_date_relative_to(date.date_naive(), Local::now().date_naive())
}

fn display_date_relative_to(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_owned();
    }
    if Some(date) == today.checked_sub_days(Days::new(1)) {
        return "Yesterday".to_owned();
    }
    if date.year() == today.year() {
        date.format("%A, %B %-d").to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn timestamp_is_hour_minute() {
        assert_eq!(format_timestamp(&at(2024, 1, 1, 9, 5)), "09:05");
        assert_eq!(format_timestamp(&at(2024, 1, 1, 23, 59)), "23:59");
    }

    #[test]
    fn separator_shown_for_first_message() {
        assert!(should_insert_date_separator(&at(2024, 1, 1, 10, 0), None));
    }

    #[test]
    fn separator_hidden_for_same_day_regardless_of_gap() {
        let morning = at(2024, 1, 1, 0, 5);
        let night = at(2024, 1, 1, 23, 50);

        assert!(!should_insert_date_separator(&night, Some(&morning)));
    }

    #[test]
    fn separator_shown_across_midnight_even_minutes_apart() {
        let before = at(2024, 1, 1, 23, 59);
        let after = at(2024, 1, 2, 0, 1);

        assert!(should_insert_date_separator(&after, Some(&before)));
    }

    #[test]
    fn separator_shown_across_year_boundary() {
        let before = at(2023, 12, 31, 23, 59);
        let after = at(2024, 1, 1, 0, 0);

        assert!(should_insert_date_separator(&after, Some(&before)));
    }

    #[test]
    fn display_date_is_today_for_same_day() {
        assert_eq!(
            display_date_relative_to(day(2024, 3, 15), day(2024, 3, 15)),
            "Today"
        );
    }

    #[test]
    fn display_date_is_yesterday_for_previous_calendar_day() {
        assert_eq!(
            display_date_relative_to(day(2024, 3, 14), day(2024, 3, 15)),
            "Yesterday"
        );
    }

    #[test]
    fn yesterday_crosses_month_boundary() {
        assert_eq!(
            display_date_relative_to(day(2024, 2, 29), day(2024, 3, 1)),
            "Yesterday"
        );
    }

    #[test]
    fn same_year_dates_omit_the_year() {
        // 2024-03-11 was a Monday.
        assert_eq!(
            display_date_relative_to(day(2024, 3, 11), day(2024, 3, 15)),
            "Monday, March 11"
        );
    }

    #[test]
    fn other_year_dates_include_the_year() {
        // 2023-06-02 was a Friday.
        assert_eq!(
            display_date_relative_to(day(2023, 6, 2), day(2024, 3, 15)),
            "Friday, June 2, 2023"
        );
    }
}
