use crate::core::period::diagnose_period;
use crate::domain::model::{Education, ExperienceEntry, MonthAnchor, PeriodDiagnosis};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

/// The site's biographical data: who, where they worked, where they studied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub profile: ProfileHeader,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    pub education: Option<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl Profile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Periods that evaluate to zero because they could not be read, by entry index.
    ///
    /// Unreadable periods are not errors; this only feeds warnings.
    pub fn audit_periods(&self, now: MonthAnchor) -> Vec<(usize, PeriodDiagnosis)> {
        self.experience
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, diagnose_period(&entry.period, now)))
            .filter(|(_, diagnosis)| !diagnosis.is_resolved())
            .collect()
    }

    pub fn warn_unparsed_periods(&self, now: MonthAnchor) -> usize {
        let unparsed = self.audit_periods(now);
        for (i, diagnosis) in &unparsed {
            let entry = &self.experience[*i];
            tracing::warn!(
                "experience[{}] ({} at {}): period {:?} counts as zero, {}",
                i,
                entry.title,
                entry.company,
                entry.period,
                diagnosis
            );
        }
        unparsed.len()
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;

        for (i, entry) in self.experience.iter().enumerate() {
            validate_non_empty_string(&format!("experience[{}].title", i), &entry.title)?;
            validate_non_empty_string(&format!("experience[{}].company", i), &entry.company)?;
            validate_non_empty_string(&format!("experience[{}].period", i), &entry.period)?;
        }

        if let Some(education) = &self.education {
            let institution =
                validate_required_field("education.institution", &education.institution)?;
            validate_non_empty_string("education.institution", institution)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Description;

    const SAMPLE: &str = r#"
[profile]
name = "Zawar Khan"
role = "Software Engineer"
location = "Lahore, Pakistan"

[[experience]]
title = "Software Engineer"
company = "Exarta Labs"
period = "Jul 2024 – Present"
description = [
    "Engineered data dashboards.",
    "Developed 3D ecommerce platforms.",
]

[[experience]]
title = "Trainee .NET Core Developer"
company = "Seller Cloud Asia"
period = "Feb 2024 – Jun 2024"
description = "Designed and optimized SQL databases."

[education]
institution = "FAST NUCES"
degree = "BS (Computer Science)"
period = "2020 – 2024"
"#;

    #[test]
    fn test_parse_sample_profile() {
        let profile = Profile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(profile.profile.name, "Zawar Khan");
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].description.points().len(), 2);
        assert_eq!(
            profile.experience[1].description,
            Description::Single("Designed and optimized SQL databases.".to_string())
        );
        assert_eq!(
            profile.education.as_ref().and_then(|e| e.period.as_deref()),
            Some("2020 – 2024")
        );
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let profile = Profile::from_toml_str(
            r#"
[profile]
name = "A"

[[experience]]
title = "T"
company = "C"
period = "2020 - 2021"
"#,
        )
        .unwrap();
        assert!(profile.experience[0].description.points().is_empty());
        assert!(profile.education.is_none());
    }

    #[test]
    fn test_validation_rejects_blank_title() {
        let mut profile = Profile::from_toml_str(SAMPLE).unwrap();
        profile.experience[1].title = "  ".to_string();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("experience[1].title"));
    }

    #[test]
    fn test_validation_requires_institution() {
        let mut profile = Profile::from_toml_str(SAMPLE).unwrap();
        if let Some(education) = profile.education.as_mut() {
            education.institution = None;
        }
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Profile::from_toml_str("[profile\nname = 1").is_err());
    }

    #[test]
    fn test_audit_reports_unparsed_periods_only() {
        let mut profile = Profile::from_toml_str(SAMPLE).unwrap();
        profile.experience[1].period = "a while - ago".to_string();
        let now = MonthAnchor::january(2025);

        let unparsed = profile.audit_periods(now);
        assert_eq!(unparsed.len(), 1);
        assert_eq!(unparsed[0].0, 1);
        assert_eq!(profile.warn_unparsed_periods(now), 1);
    }

    #[test]
    fn test_unknown_env_vars_are_left_alone() {
        let out = substitute_env_vars("name = \"${CAREER_SPAN_SURELY_UNSET_VAR}\"");
        assert_eq!(out, "name = \"${CAREER_SPAN_SURELY_UNSET_VAR}\"");
    }
}
