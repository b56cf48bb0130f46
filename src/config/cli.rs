use crate::app::OutputFormat;
use crate::domain::ports::FixedClock;
use crate::utils::error::{Result, SpanError};
use crate::utils::validation::{validate_profile_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "career-span")]
#[command(about = "Summarize employment periods into elapsed years and months")]
pub struct CliConfig {
    /// Path to the TOML profile
    #[arg(short, long, default_value = "profile.toml")]
    pub profile: String,

    /// Evaluate these period strings instead of a profile (repeatable)
    #[arg(long = "period")]
    pub periods: Vec<String>,

    /// Month that "Present" resolves to, as YYYY-MM (defaults to the current month)
    #[arg(long)]
    pub now: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// The pinned clock from `--now`, if one was given.
    pub fn clock_override(&self) -> Result<Option<FixedClock>> {
        self.now.as_deref().map(parse_month_arg).transpose()
    }
}

fn parse_month_arg(value: &str) -> Result<FixedClock> {
    let invalid = |reason: &str| SpanError::InvalidConfigValueError {
        field: "now".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (year, month) = value
        .trim()
        .split_once('-')
        .ok_or_else(|| invalid("expected YYYY-MM"))?;
    let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;
    let month: u32 = month.parse().map_err(|_| invalid("month is not a number"))?;

    FixedClock::at(year, month).ok_or_else(|| invalid("month must be between 1 and 12"))
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            validate_profile_path("profile", &self.profile)?;
        }
        self.clock_override()?;
        Ok(())
    }
}
