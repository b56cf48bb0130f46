use anyhow::Context;
use career_span::utils::{logger, validation::Validate};
use career_span::{CliConfig, Clock, PeriodDurationEngine, Profile, Sidebar, SpanError, SystemClock};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Logging
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting career-span");
    tracing::debug!("CLI config: {:?}", config);

    // Validate arguments
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    // Pick the month "Present" resolves to
    let clock: Box<dyn Clock> = match config.clock_override() {
        Ok(Some(fixed)) => {
            tracing::info!("🔧 \"Present\" pinned to {}", fixed.current_month());
            Box::new(fixed)
        }
        Ok(None) => Box::new(SystemClock),
        Err(e) => exit_with(&e),
    };
    let engine = PeriodDurationEngine::new(clock);
    let now = engine.now();

    let source = if config.periods.is_empty() {
        config.profile.as_str()
    } else {
        "--period"
    };
    let _summary = tracing::info_span!("summary", as_of = %now, source).entered();

    // Compute durations
    let sidebar = if config.periods.is_empty() {
        let profile = match load_profile(&config.profile) {
            Ok(profile) => profile,
            Err(e) => exit_with(&e),
        };
        let unparsed = profile.warn_unparsed_periods(now);
        if unparsed > 0 {
            tracing::warn!("⚠️ {} period(s) could not be read and count as zero", unparsed);
        }
        Sidebar::build(&profile, now)
    } else {
        for period in &config.periods {
            let diagnosis = engine.diagnose_period(period);
            tracing::debug!("{:?}: {}", period, diagnosis);
        }
        Sidebar::from_periods(&config.periods, now)
    };

    // Render
    let mut rendered = sidebar
        .render(config.format)
        .with_context(|| format!("rendering sidebar as {:?}", config.format))?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    std::io::stdout()
        .write_all(rendered.as_bytes())
        .context("writing sidebar to stdout")?;

    tracing::info!("✅ Total experience: {} months", sidebar.total.months);
    Ok(())
}

fn load_profile(path: &str) -> career_span::Result<Profile> {
    tracing::info!("📁 Loading profile from: {}", path);
    let profile = Profile::from_file(path)?;
    profile.validate()?;
    tracing::info!(
        "Loaded profile for {} with {} experience entries",
        profile.profile.name,
        profile.experience.len()
    );
    Ok(profile)
}

fn exit_with(e: &SpanError) -> ! {
    // Detailed error for the logs
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // Short message for the user
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
