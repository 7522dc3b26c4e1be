use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format of `date_added` in the upstream catalog, e.g. `"September 24, 2021"`.
pub const CATALOG_DATE_FORMAT: &str = "%B %d, %Y";

/// Extra date layouts accepted when strict parsing is disabled.
const LENIENT_DATE_FORMATS: [&str; 7] = [
    "%B %d %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%B-%Y",
    "%d-%B-%y",
];

const LENIENT_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// How strictly `date_added` values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    /// Only [`CATALOG_DATE_FORMAT`] is accepted: a full month name, one space,
    /// a 1-2 digit day, `", "` and a 4 digit year.
    Strict,
    /// The catalog format plus common ISO / numeric / RFC 3339 layouts.
    Lenient,
}

impl DatePolicy {
    pub fn from_strict_flag(strict_date_format: bool) -> Self {
        if strict_date_format {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Row-level date parser. Never fails a batch: unparseable input is `None`.
pub struct DateParser;

impl DateParser {
    /// Parse a single raw `date_added` value after trimming surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use netflix_insights::parsing::dates::{DateParser, DatePolicy};
    ///
    /// assert_eq!(
    ///     DateParser::parse(" January 5, 2020 ", DatePolicy::Strict),
    ///     NaiveDate::from_ymd_opt(2020, 1, 5)
    /// );
    /// assert_eq!(DateParser::parse("2020-01-05", DatePolicy::Strict), None);
    /// assert_eq!(DateParser::parse("Jan 5, 2020", DatePolicy::Strict), None);
    /// assert_eq!(
    ///     DateParser::parse("2020-01-05", DatePolicy::Lenient),
    ///     NaiveDate::from_ymd_opt(2020, 1, 5)
    /// );
    /// ```
    pub fn parse(raw: &str, policy: DatePolicy) -> Option<NaiveDate> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        if has_catalog_shape(value) {
            if let Ok(date) = NaiveDate::parse_from_str(value, CATALOG_DATE_FORMAT) {
                return Some(date);
            }
        }

        match policy {
            DatePolicy::Strict => None,
            DatePolicy::Lenient => Self::parse_lenient(value),
        }
    }

    fn parse_lenient(value: &str) -> Option<NaiveDate> {
        for format in LENIENT_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return Some(date);
            }
        }

        for format in LENIENT_DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
                return Some(datetime.date());
            }
        }

        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

/// `<Month> <d or dd>, <yyyy>` with a full month name in any case.
/// chrono's `%B %d, %Y` on its own is looser than this.
fn has_catalog_shape(value: &str) -> bool {
    let Some((month, rest)) = value.split_once(' ') else {
        return false;
    };
    if !MONTH_NAMES.iter().any(|name| name.eq_ignore_ascii_case(month)) {
        return false;
    }
    let Some((day, year)) = rest.split_once(", ") else {
        return false;
    };
    (1..=2).contains(&day.len())
        && day.bytes().all(|b| b.is_ascii_digit())
        && year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_strict_catalog_format() {
        assert_eq!(
            DateParser::parse("September 24, 2021", DatePolicy::Strict),
            ymd(2021, 9, 24)
        );
        assert_eq!(
            DateParser::parse("January 5, 2020", DatePolicy::Strict),
            ymd(2020, 1, 5)
        );
    }

    #[test]
    fn test_strict_rejects_other_layouts() {
        for raw in [
            "not a date",
            "2021-09-24",
            "09/24/2021",
            "24 September 2021",
            "",
            "Sep 24, 2021",
            "September 24,2021",
            "September24, 2021",
            "September 24, 21",
            "September  24, 2021",
            "September 024, 2021",
            "September 24, 20210",
        ] {
            assert_eq!(DateParser::parse(raw, DatePolicy::Strict), None, "{raw}");
        }
    }

    #[test]
    fn test_strict_month_name_is_case_insensitive() {
        assert_eq!(
            DateParser::parse("september 24, 2021", DatePolicy::Strict),
            ymd(2021, 9, 24)
        );
        assert_eq!(
            DateParser::parse("SEPTEMBER 24, 2021", DatePolicy::Strict),
            ymd(2021, 9, 24)
        );
        assert_eq!(
            DateParser::parse("May 01, 2019", DatePolicy::Strict),
            ymd(2019, 5, 1)
        );
    }

    #[test]
    fn test_strict_rejects_impossible_dates() {
        assert_eq!(DateParser::parse("February 30, 2021", DatePolicy::Strict), None);
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(
            DateParser::parse("\t September 24, 2021  ", DatePolicy::Strict),
            ymd(2021, 9, 24)
        );
    }

    #[test]
    fn test_lenient_layouts() {
        assert_eq!(DateParser::parse("2021-09-24", DatePolicy::Lenient), ymd(2021, 9, 24));
        assert_eq!(DateParser::parse("2021/09/24", DatePolicy::Lenient), ymd(2021, 9, 24));
        assert_eq!(DateParser::parse("09/24/2021", DatePolicy::Lenient), ymd(2021, 9, 24));
        assert_eq!(
            DateParser::parse("24 September 2021", DatePolicy::Lenient),
            ymd(2021, 9, 24)
        );
        assert_eq!(
            DateParser::parse("2021-09-24 10:30:00", DatePolicy::Lenient),
            ymd(2021, 9, 24)
        );
        assert_eq!(
            DateParser::parse("2021-09-24T10:30:00+02:00", DatePolicy::Lenient),
            ymd(2021, 9, 24)
        );
    }

    #[test]
    fn test_lenient_still_rejects_garbage() {
        assert_eq!(DateParser::parse("not a date", DatePolicy::Lenient), None);
        assert_eq!(DateParser::parse("2021-13-45", DatePolicy::Lenient), None);
    }
}
