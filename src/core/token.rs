use crate::domain::model::{MonthAnchor, TokenParse};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{3,9})\s+([0-9]{4})$").expect("month-year pattern compiles")
});

static YEAR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})$").expect("year pattern compiles"));

const MONTHS: [(&str, u32); 13] = [
    ("jan", 0),
    ("feb", 1),
    ("mar", 2),
    ("apr", 3),
    ("may", 4),
    ("jun", 5),
    ("jul", 6),
    ("aug", 7),
    ("sep", 8),
    ("sept", 8),
    ("oct", 9),
    ("nov", 10),
    ("dec", 11),
];

const FULL_DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

// Parsed with a synthetic day appended, since chrono needs one to build a date.
const MONTH_ONLY_FORMATS: [&str; 3] = ["%B %Y %d", "%Y-%m %d", "%Y/%m %d"];

/// Zero-based month index for an English abbreviation, case-insensitive.
pub fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(abbr, _)| *abbr == lower)
        .map(|(_, index)| *index)
}

/// Resolves one side of a period string to a calendar month.
///
/// Strategies are tried in order: `present`, `Mon YYYY`, `YYYY`, then a
/// best-effort calendar date parse. Failure is a value, never an error.
pub fn parse_token(token: &str, now: MonthAnchor) -> TokenParse {
    let t = token.trim();

    if t.eq_ignore_ascii_case("present") {
        return TokenParse::Resolved(now);
    }

    if let Some(anchor) = parse_month_year(t) {
        return TokenParse::Resolved(anchor);
    }

    if let Some(caps) = YEAR_ONLY.captures(t) {
        if let Ok(year) = caps[1].parse::<i32>() {
            return TokenParse::Resolved(MonthAnchor::january(year));
        }
    }

    match parse_calendar_date(t) {
        Some(anchor) => TokenParse::Resolved(anchor),
        None => {
            tracing::debug!("Unrecognized date token: {:?}", t);
            TokenParse::Failed
        }
    }
}

fn parse_month_year(t: &str) -> Option<MonthAnchor> {
    let caps = MONTH_YEAR.captures(t)?;
    let month = month_index(&caps[1])?;
    let year = caps[2].parse::<i32>().ok()?;
    MonthAnchor::new(year, month)
}

fn parse_calendar_date(t: &str) -> Option<MonthAnchor> {
    if t.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(MonthAnchor::from_date(&dt.naive_local()));
    }

    if let Some(date) = FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(t, fmt).ok())
    {
        return Some(MonthAnchor::from_date(&date));
    }

    let padded = format!("{} 1", t);
    MONTH_ONLY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&padded, fmt).ok())
        .map(|date| MonthAnchor::from_date(&date))
}
