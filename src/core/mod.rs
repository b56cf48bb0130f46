pub mod aggregate;
pub mod engine;
pub mod format;
pub mod period;
pub mod token;

pub use crate::domain::model::{Aggregate, DurationResult, MonthAnchor, PeriodDiagnosis, TokenParse};
pub use crate::domain::ports::{Clock, FixedClock, PeriodSource, SystemClock};
pub use crate::utils::error::Result;
