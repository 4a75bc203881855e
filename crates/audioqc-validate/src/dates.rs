//! Lenient calendar-date parsing for reconciling export and METS dates.
//!
//! Spreadsheet exports carry dates in whatever shape the cataloger typed
//! ("January 1, 2020", "1/1/2020"), while METS documents use ISO forms.
//! Parsing tries each known format in turn; anything unparsable is `None`,
//! the sentinel the reconciliation check treats as "no comparable date".

use chrono::NaiveDate;

/// Formats observed in metadata exports and METS documents. The basic ISO
/// form covers normalized spreadsheet dates, whose hyphens are stripped
/// during text canonicalization.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a loosely-formatted date string, trying each known format.
pub fn parse_flexible_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_iso_extended_and_basic() {
        assert_eq!(parse_flexible_date("2020-01-01"), Some(date(2020, 1, 1)));
        assert_eq!(parse_flexible_date("20200101"), Some(date(2020, 1, 1)));
    }

    #[test]
    fn parses_month_name_forms() {
        assert_eq!(
            parse_flexible_date("January 1, 2020"),
            Some(date(2020, 1, 1))
        );
        assert_eq!(parse_flexible_date("Jan 1 2020"), Some(date(2020, 1, 1)));
        assert_eq!(parse_flexible_date("1 January 2020"), Some(date(2020, 1, 1)));
    }

    #[test]
    fn parses_slash_form() {
        assert_eq!(parse_flexible_date("1/31/1968"), Some(date(1968, 1, 31)));
    }

    #[test]
    fn unparsable_input_is_none() {
        assert_eq!(parse_flexible_date("undated"), None);
        assert_eq!(parse_flexible_date("Undated"), None);
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("circa spring"), None);
    }
}
