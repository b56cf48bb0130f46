use crate::core::{aggregate, period, token, Aggregate, Clock, DurationResult, MonthAnchor};
use crate::core::{PeriodDiagnosis, PeriodSource, TokenParse};

/// Binds the pure duration functions to a clock.
///
/// The clock is read once per call, so every entry in one `aggregate` run
/// sees the same "present".
pub struct PeriodDurationEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> PeriodDurationEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> MonthAnchor {
        self.clock.current_month()
    }

    pub fn parse_token(&self, token: &str) -> TokenParse {
        token::parse_token(token, self.now())
    }

    pub fn parse_period(&self, period: &str) -> DurationResult {
        period::parse_period(period, self.now())
    }

    pub fn diagnose_period(&self, period: &str) -> PeriodDiagnosis {
        period::diagnose_period(period, self.now())
    }

    pub fn aggregate<I>(&self, entries: I) -> Aggregate
    where
        I: IntoIterator,
        I::Item: PeriodSource,
    {
        let now = self.now();
        tracing::debug!("Aggregating periods as of {}", now);

        let result = aggregate::aggregate(entries, now);
        tracing::debug!(
            "Aggregated {} entries into {} months",
            result.per_entry.len(),
            result.total.months
        );
        result
    }
}
