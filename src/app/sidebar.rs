use crate::config::profile::Profile;
use crate::core::aggregate::aggregate;
use crate::core::period::parse_period;
use crate::domain::model::{DurationResult, MonthAnchor};
use crate::utils::error::{Result, SpanError};
use serde::Serialize;

/// Shown in place of an empty duration.
pub const PLACEHOLDER: &str = "\u{2014}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarRow {
    pub company: String,
    pub title: String,
    pub period: String,
    pub months: u64,
    pub duration: String,
}

impl SidebarRow {
    fn new(company: &str, title: &str, period: &str, duration: DurationResult) -> Self {
        Self {
            company: company.to_string(),
            title: title.to_string(),
            period: period.to_string(),
            months: duration.months,
            duration: duration.formatted(),
        }
    }

    /// The formatted duration, or the placeholder when it is empty.
    pub fn display(&self) -> &str {
        if self.duration.is_empty() {
            PLACEHOLDER
        } else {
            &self.duration
        }
    }
}

/// The experience summary shown next to the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub as_of: MonthAnchor,
    pub rows: Vec<SidebarRow>,
    pub total: SidebarRow,
    pub education: Option<SidebarRow>,
}

impl Sidebar {
    pub fn build(profile: &Profile, now: MonthAnchor) -> Self {
        let result = aggregate(&profile.experience, now);

        let rows = profile
            .experience
            .iter()
            .zip(&result.per_entry)
            .map(|(entry, duration)| {
                SidebarRow::new(&entry.company, &entry.title, &entry.period, *duration)
            })
            .collect();

        // education is shown but not counted towards the total
        let education = profile.education.as_ref().and_then(|edu| {
            let period = edu.period.as_deref()?;
            Some(SidebarRow::new(
                edu.institution.as_deref().unwrap_or_default(),
                edu.degree.as_deref().unwrap_or_default(),
                period,
                parse_period(period, now),
            ))
        });

        tracing::debug!(
            "Built sidebar with {} rows, total {} months",
            profile.experience.len(),
            result.total.months
        );

        Self {
            as_of: now,
            rows,
            total: SidebarRow::new("Total experience", "", "", result.total),
            education,
        }
    }

    /// One row per ad-hoc period string, with the same totals as a profile.
    pub fn from_periods<S: AsRef<str>>(periods: &[S], now: MonthAnchor) -> Self {
        let periods: Vec<&str> = periods.iter().map(AsRef::as_ref).collect();
        let result = aggregate(&periods, now);

        let rows = periods
            .iter()
            .zip(&result.per_entry)
            .map(|(period, duration)| SidebarRow::new("", "", period, *duration))
            .collect();

        Self {
            as_of: now,
            rows,
            total: SidebarRow::new("Total", "", "", result.total),
            education: None,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("Experience as of {}\n", self.as_of);

        for row in &self.rows {
            let label = match (row.company.is_empty(), row.title.is_empty()) {
                (true, _) => row.period.clone(),
                (false, true) => row.company.clone(),
                (false, false) => format!("{} ({})", row.company, row.title),
            };
            out.push_str(&format!("  {:<48} {}\n", label, row.display()));
        }

        out.push_str(&format!(
            "  {:<48} {}\n",
            self.total.company,
            self.total.display()
        ));

        if let Some(edu) = &self.education {
            out.push_str("Education\n");
            out.push_str(&format!("  {} {}\n", edu.company, edu.title));
            out.push_str(&format!("  {:<48} {}\n", edu.period, edu.display()));
        }

        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Same rows as the text and JSON forms; `section` tells experience,
    /// total and education apart.
    pub fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["section", "company", "title", "period", "months", "duration"])?;

        let sections = self
            .rows
            .iter()
            .map(|row| ("experience", row))
            .chain(std::iter::once(("total", &self.total)))
            .chain(self.education.iter().map(|row| ("education", row)));

        for (section, row) in sections {
            writer.write_record([
                section,
                row.company.as_str(),
                row.title.as_str(),
                row.period.as_str(),
                row.months.to_string().as_str(),
                row.display(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SpanError::IoError(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| SpanError::config(format!("CSV output is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2025() -> MonthAnchor {
        MonthAnchor::january(2025)
    }

    fn profile() -> Profile {
        Profile::from_toml_str(
            r#"
[profile]
name = "Zawar Khan"

[[experience]]
title = "Software Engineer"
company = "Exarta Labs"
period = "Jul 2024 – Present"

[[experience]]
title = "Trainee .NET Core Developer"
company = "Seller Cloud Asia"
period = "Feb 2024 – Jun 2024"

[[experience]]
title = "Volunteer"
company = "Somewhere"
period = "TBD"

[education]
institution = "FAST NUCES"
degree = "BS (Computer Science)"
period = "2020 – 2024"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_follow_profile_order() {
        let sidebar = Sidebar::build(&profile(), jan_2025());

        let companies: Vec<&str> = sidebar.rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(companies, vec!["Exarta Labs", "Seller Cloud Asia", "Somewhere"]);
        assert_eq!(sidebar.rows[0].display(), "6 mos");
        assert_eq!(sidebar.rows[1].display(), "4 mos");
        assert_eq!(sidebar.rows[2].display(), PLACEHOLDER);
        assert_eq!(sidebar.total.months, 10);
    }

    #[test]
    fn test_education_is_not_counted() {
        let sidebar = Sidebar::build(&profile(), jan_2025());
        let edu = sidebar.education.as_ref().unwrap();
        assert_eq!(edu.months, 48);
        assert_eq!(edu.display(), "4 yrs");
        assert_eq!(sidebar.total.months, 10);
    }

    #[test]
    fn test_from_periods() {
        let sidebar = Sidebar::from_periods(&["2020-2024", "nope"], jan_2025());
        assert_eq!(sidebar.rows.len(), 2);
        assert_eq!(sidebar.total.months, 48);
        assert!(sidebar.render_text().contains("4 yrs"));
    }

    #[test]
    fn test_render_csv() {
        let csv = Sidebar::build(&profile(), jan_2025()).render_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "section,company,title,period,months,duration");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("experience,Exarta Labs,Software Engineer,"));
        assert_eq!(lines[3], "experience,Somewhere,Volunteer,TBD,0,\u{2014}");
        assert_eq!(lines[4], "total,Total experience,,,10,10 mos");
        assert_eq!(lines[5], "education,FAST NUCES,BS (Computer Science),2020 \u{2013} 2024,48,4 yrs");
    }

    #[test]
    fn test_render_json() {
        let json = Sidebar::build(&profile(), jan_2025()).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"]["months"], 10);
        assert_eq!(value["rows"][2]["duration"], "");
        assert_eq!(value["as_of"]["year"], 2025);
    }

    #[test]
    fn test_csv_without_education_has_no_education_section() {
        let sidebar = Sidebar::from_periods(&["2020-2024"], jan_2025());
        let csv = sidebar.render_csv().unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.contains("education,"));
    }

    #[test]
    fn test_render_text_uses_placeholder() {
        let text = Sidebar::build(&profile(), jan_2025()).render(OutputFormat::Text).unwrap();
        assert!(text.starts_with("Experience as of 2025-01"));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("FAST NUCES"));
    }
}
