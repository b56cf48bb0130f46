pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{OutputFormat, Sidebar, SidebarRow};
pub use config::Profile;
pub use crate::core::aggregate::aggregate;
pub use crate::core::engine::PeriodDurationEngine;
pub use crate::core::format::format_duration;
pub use crate::core::period::{diagnose_period, parse_period};
pub use crate::core::token::parse_token;
pub use domain::model::{
    Aggregate, Description, DurationResult, Education, ExperienceEntry, MonthAnchor,
    PeriodDiagnosis, TokenParse,
};
pub use domain::ports::{Clock, FixedClock, PeriodSource, SystemClock};
pub use utils::error::{Result, SpanError};
