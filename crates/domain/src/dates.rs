//! Date handling for the job screens: epoch seconds on the wire,
//! `d-m-yyyy` when shown, `mm-dd-yyyy` from the date picker.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

const DISPLAY_FORMAT: &str = "%-d-%-m-%Y";
const PICKER_FORMAT: &str = "%m-%d-%Y";

/// Render epoch seconds as `d-m-yyyy` in local time.
pub fn format_epoch_date(epoch: i64) -> String {
    format_epoch_date_in(epoch, &Local)
}

/// Render epoch seconds as `d-m-yyyy` in `tz`. Out-of-range values are
/// rendered as the raw number.
pub fn format_epoch_date_in<Tz>(epoch: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp(epoch, 0) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => epoch.to_string(),
    }
}

/// Parse a picker value (`mm-dd-yyyy`) as local midnight, in epoch seconds.
pub fn parse_picker_date(value: &str) -> Option<i64> {
    parse_picker_date_in(value, &Local)
}

pub fn parse_picker_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<i64> {
    let date = NaiveDate::parse_from_str(value.trim(), PICKER_FORMAT).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_has_no_padding() {
        // 2024-03-05T12:00:00Z
        assert_eq!(format_epoch_date_in(1_709_640_000, &Utc), "5-3-2024");
        // 2023-12-31T23:30:00Z
        assert_eq!(format_epoch_date_in(1_704_065_400, &Utc), "31-12-2023");
    }

    #[test]
    fn test_format_follows_timezone() {
        let athens = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_epoch_date_in(1_704_065_400, &athens), "1-1-2024");
    }

    #[test]
    fn test_format_out_of_range() {
        assert_eq!(format_epoch_date_in(i64::MAX, &Utc), i64::MAX.to_string());
    }

    #[test]
    fn test_parse_picker_date() {
        assert_eq!(parse_picker_date_in("03-05-2024", &Utc), Some(1_709_596_800));

        let athens = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            parse_picker_date_in("03-05-2024", &athens),
            Some(1_709_596_800 - 2 * 3600)
        );
    }

    #[test]
    fn test_parse_picker_date_rejects_garbage() {
        assert_eq!(parse_picker_date_in("2024-03-05", &Utc), None);
        assert_eq!(parse_picker_date_in("13-40-2024", &Utc), None);
        assert_eq!(parse_picker_date_in("", &Utc), None);
    }
}
