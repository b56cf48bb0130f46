use crate::core::token::parse_token;
use crate::domain::model::{DurationResult, MonthAnchor, PeriodDiagnosis};

/// Rewrites en and em dashes to a plain hyphen.
pub fn normalize_dashes(period: &str) -> String {
    period.replace(['\u{2013}', '\u{2014}'], "-")
}

/// Splits at the first hyphen and trims both sides.
pub fn split_period(normalized: &str) -> Option<(&str, &str)> {
    normalized
        .split_once('-')
        .map(|(start, end)| (start.trim(), end.trim()))
}

/// Whole elapsed months between two anchors, floored at zero.
///
/// Any two `i32` years are less than 2^36 months apart, so the result is exact.
pub fn months_between(start: &MonthAnchor, end: &MonthAnchor) -> u64 {
    start.months_until(end).max(0).unsigned_abs()
}

/// Evaluates a free-text period. Malformed input yields zero months.
pub fn parse_period(period: &str, now: MonthAnchor) -> DurationResult {
    diagnose_period(period, now).duration()
}

/// Same evaluation as [`parse_period`], but reports which side failed.
pub fn diagnose_period(period: &str, now: MonthAnchor) -> PeriodDiagnosis {
    let normalized = normalize_dashes(period);
    let Some((start_token, end_token)) = split_period(&normalized) else {
        return PeriodDiagnosis::MissingSeparator;
    };

    let start = parse_token(start_token, now).anchor();
    let end = parse_token(end_token, now).anchor();

    match (start, end) {
        (Some(start), Some(end)) => PeriodDiagnosis::Resolved {
            start,
            end,
            duration: DurationResult::from_months(months_between(&start, &end)),
        },
        (None, Some(_)) => PeriodDiagnosis::UnparsedStart(start_token.to_string()),
        (Some(_), None) => PeriodDiagnosis::UnparsedEnd(end_token.to_string()),
        (None, None) => {
            PeriodDiagnosis::UnparsedBoth(start_token.to_string(), end_token.to_string())
        }
    }
}
