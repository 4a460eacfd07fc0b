/// Field parsers for inventory cells.
use chrono::{NaiveDate, NaiveDateTime};

/// Date-only layouts accepted in the `data` column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Date-time layouts; only the calendar date is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a record date. Returns `None` for empty or unrecognised text.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Parse a decimal number written with either `.` or `,` as separator.
/// Non-finite values are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

/// Split a photo cell into individual references.
pub fn split_photos(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_common_date_layouts() {
        assert_eq!(parse_date("2023-10-01"), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date("01/10/2023"), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date(" 2023-10-01 14:22:05 "), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date("2023-10-01T14:22:05"), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date("01/10/2023 08:00"), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date("2023-10-01T14:22:05-03:00"), Some(ymd(2023, 10, 1)));
    }

    #[test]
    fn rejects_bad_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("ontem"), None);
        assert_eq!(parse_date("2023-13-01"), None);
    }

    #[test]
    fn parses_decimal_point_and_comma() {
        assert_eq!(parse_decimal("-15.77972"), Some(-15.77972));
        assert_eq!(parse_decimal("-47,92972"), Some(-47.92972));
        assert_eq!(parse_decimal(" 3 "), Some(3.0));
    }

    #[test]
    fn rejects_bad_decimals() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("1,234.5"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn splits_photo_lists() {
        assert_eq!(split_photos("a.jpg, b.jpg|c.jpg"), vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert!(split_photos("  ").is_empty());
    }
}
