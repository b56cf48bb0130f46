#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use profile::{Profile, ProfileHeader};
