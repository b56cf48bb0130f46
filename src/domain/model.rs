use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved calendar month with no day component.
///
/// The month is a zero-based index (January = 0, December = 11); construction
/// goes through [`MonthAnchor::new`] or [`MonthAnchor::from_date`] so it stays in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthAnchor {
    year: i32,
    month: u32,
}

impl MonthAnchor {
    /// Returns `None` when `month` is outside `0..=11`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    pub fn january(year: i32) -> Self {
        Self { year, month: 0 }
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month
    }

    /// Months from `self` to `end`, start inclusive and end exclusive. Negative when `end` is earlier.
    pub fn months_until(&self, end: &MonthAnchor) -> i64 {
        let years = i64::from(end.year) - i64::from(self.year);
        let months = i64::from(end.month) - i64::from(self.month);
        years * 12 + months
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Outcome of resolving a single date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenParse {
    Resolved(MonthAnchor),
    Failed,
}

impl TokenParse {
    pub fn anchor(self) -> Option<MonthAnchor> {
        match self {
            TokenParse::Resolved(anchor) => Some(anchor),
            TokenParse::Failed => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, TokenParse::Resolved(_))
    }
}

/// Whole elapsed months and their display form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationResult {
    pub months: u64,
}

impl DurationResult {
    pub const ZERO: DurationResult = DurationResult { months: 0 };

    pub fn from_months(months: u64) -> Self {
        Self { months }
    }

    pub fn years(&self) -> u64 {
        self.months / 12
    }

    pub fn remainder_months(&self) -> u64 {
        self.months % 12
    }

    pub fn formatted(&self) -> String {
        crate::core::format::format_duration(self.months)
    }

    pub fn is_zero(&self) -> bool {
        self.months == 0
    }
}

/// Bullet points for an entry; profiles may give a single line or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Single(String),
    Points(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Description::Points(Vec::new())
    }
}

impl Description {
    pub fn points(&self) -> Vec<&str> {
        match self {
            Description::Single(line) => vec![line.as_str()],
            Description::Points(points) => points.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: Description,
}

impl ExperienceEntry {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            period: period.into(),
            description: Description::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub logo_url: Option<String>,
}

/// Per-entry durations in input order plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub total: DurationResult,
    pub per_entry: Vec<DurationResult>,
}

/// Which part of a period string could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodDiagnosis {
    Resolved {
        start: MonthAnchor,
        end: MonthAnchor,
        duration: DurationResult,
    },
    MissingSeparator,
    UnparsedStart(String),
    UnparsedEnd(String),
    UnparsedBoth(String, String),
}

impl PeriodDiagnosis {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PeriodDiagnosis::Resolved { .. })
    }

    pub fn duration(&self) -> DurationResult {
        match self {
            PeriodDiagnosis::Resolved { duration, .. } => *duration,
            _ => DurationResult::ZERO,
        }
    }
}

impl fmt::Display for PeriodDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodDiagnosis::Resolved { start, end, duration } => {
                write!(f, "{} to {} ({} months)", start, end, duration.months)
            }
            PeriodDiagnosis::MissingSeparator => write!(f, "no dash separating start and end"),
            PeriodDiagnosis::UnparsedStart(token) => write!(f, "unrecognized start '{}'", token),
            PeriodDiagnosis::UnparsedEnd(token) => write!(f, "unrecognized end '{}'", token),
            PeriodDiagnosis::UnparsedBoth(start, end) => {
                write!(f, "unrecognized start '{}' and end '{}'", start, end)
            }
        }
    }
}
