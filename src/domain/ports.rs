use crate::domain::model::{ExperienceEntry, MonthAnchor};
use chrono::Local;

/// Source of the "now" reference that `present` resolves to.
pub trait Clock: Send + Sync {
    fn current_month(&self) -> MonthAnchor;
}

/// Reads the machine's local calendar month on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> MonthAnchor {
        MonthAnchor::from_date(&Local::now().date_naive())
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub MonthAnchor);

impl FixedClock {
    /// `month` is one-based here, as written on a calendar.
    pub fn at(year: i32, month: u32) -> Option<Self> {
        month
            .checked_sub(1)
            .and_then(|month0| MonthAnchor::new(year, month0))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn current_month(&self) -> MonthAnchor {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_month(&self) -> MonthAnchor {
        (**self).current_month()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn current_month(&self) -> MonthAnchor {
        (**self).current_month()
    }
}

/// Anything carrying a free-text period string the engine can evaluate.
pub trait PeriodSource {
    fn period(&self) -> &str;
}

impl PeriodSource for ExperienceEntry {
    fn period(&self) -> &str {
        &self.period
    }
}

impl PeriodSource for str {
    fn period(&self) -> &str {
        self
    }
}

impl PeriodSource for String {
    fn period(&self) -> &str {
        self
    }
}

impl<T: PeriodSource + ?Sized> PeriodSource for &T {
    fn period(&self) -> &str {
        (**self).period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_uses_calendar_months() {
        let clock = FixedClock::at(2025, 1).unwrap();
        assert_eq!(clock.current_month(), MonthAnchor::january(2025));
        assert!(FixedClock::at(2025, 0).is_none());
        assert!(FixedClock::at(2025, 13).is_none());
    }

    #[test]
    fn test_system_clock_month_is_in_range() {
        let now = SystemClock.current_month();
        assert!(now.month0() < 12);
    }
}
