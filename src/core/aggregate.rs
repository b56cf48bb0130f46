use crate::core::period::parse_period;
use crate::domain::model::{Aggregate, DurationResult, MonthAnchor};
use crate::domain::ports::PeriodSource;

/// Evaluates every entry against the same `now` and sums the results.
///
/// `per_entry[i]` always corresponds to the i-th input entry.
pub fn aggregate<I>(entries: I, now: MonthAnchor) -> Aggregate
where
    I: IntoIterator,
    I::Item: PeriodSource,
{
    let per_entry: Vec<DurationResult> = entries
        .into_iter()
        .map(|entry| parse_period(entry.period(), now))
        .collect();

    let total: u64 = per_entry.iter().map(|d| d.months).sum();

    Aggregate {
        total: DurationResult::from_months(total),
        per_entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExperienceEntry;

    fn jan_2025() -> MonthAnchor {
        MonthAnchor::january(2025)
    }

    fn site_experience() -> Vec<ExperienceEntry> {
        vec![
            ExperienceEntry::new("Software Engineer", "Exarta Labs", "Jul 2024 \u{2013} Present"),
            ExperienceEntry::new(
                "Trainee .NET Core Developer",
                "Seller Cloud Asia",
                "Feb 2024 \u{2013} Jun 2024",
            ),
            ExperienceEntry::new("AI Engineering Intern", "Exarta Labs", "Jun 2023 \u{2013} Sept 2023"),
        ]
    }

    #[test]
    fn test_aggregate_sums_in_order() {
        let entries = site_experience();
        let result = aggregate(&entries, jan_2025());

        let months: Vec<u64> = result.per_entry.iter().map(|d| d.months).collect();
        assert_eq!(months, vec![6, 4, 3]);
        assert_eq!(result.total.months, 13);
        assert_eq!(result.total.formatted(), "1 yr 1 mo");
    }

    #[test]
    fn test_unparsed_entries_contribute_zero() {
        let entries = vec![
            ExperienceEntry::new("A", "X", "2020 - 2021"),
            ExperienceEntry::new("B", "Y", "sometime - later"),
            ExperienceEntry::new("C", "Z", "2022 - 2020"),
        ];
        let result = aggregate(&entries, jan_2025());

        assert_eq!(result.per_entry.len(), 3);
        assert_eq!(result.per_entry[1], DurationResult::ZERO);
        assert_eq!(result.per_entry[2], DurationResult::ZERO);
        assert_eq!(result.total.months, 12);
    }

    #[test]
    fn test_aggregate_accepts_plain_strings() {
        let periods = ["2020-2024", "Jan 2021 - Mar 2023"];
        let result = aggregate(periods, jan_2025());
        assert_eq!(result.total.months, 74);
    }

    #[test]
    fn test_total_is_exact_for_far_future_now() {
        let now = MonthAnchor::january(i32::MAX);
        let result = aggregate(["2000 - Present", "2000 - Present"], now);

        let per_entry = u64::try_from(i64::from(i32::MAX) - 2000).unwrap() * 12;
        assert_eq!(result.per_entry[0].months, per_entry);
        assert_eq!(result.per_entry[1].months, per_entry);
        assert_eq!(result.total.months, per_entry * 2);
        assert!(result.total.months > u64::from(u32::MAX));
    }

    #[test]
    fn test_empty_input() {
        let entries: Vec<ExperienceEntry> = Vec::new();
        let result = aggregate(&entries, jan_2025());
        assert!(result.per_entry.is_empty());
        assert!(result.total.is_zero());
    }
}
