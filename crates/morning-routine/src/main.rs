//! Morning routine binary.
//!
//! Builds the routine tree, sets it up, ticks it the configured number of
//! times and shuts it down.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p morning-routine -- --ticks 5 --seed 7
//! RUST_LOG=behavior_tree=trace cargo run -p morning-routine -- --weekday sat
//! ```

use anyhow::Result;
use clap::Parser;
use morning_routine::{Args, Console, RoutineConfig, Sensors, run_routine};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RoutineConfig::from_env().with_args(&Args::parse());
    tracing::debug!(?config, "configuration loaded");

    let sensors = Sensors::from_config(&config);
    let statuses = run_routine(&config, sensors, &Console::Stdout)?;
    tracing::info!(?statuses, "routine finished");
    Ok(())
}
