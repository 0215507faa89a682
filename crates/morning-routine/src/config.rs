//! Routine configuration.
//!
//! Settings come from the environment (a `.env` file is honoured by the
//! binary) and can be overridden on the command line.
use std::env;

use chrono::Weekday;
use clap::Parser;

/// Command-line overrides. Unset flags keep the environment's value.
#[derive(Debug, Default, Parser)]
#[command(name = "morning-routine", version, about = "Run the robot's morning routine")]
pub struct Args {
    /// Number of times to tick the tree
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Probability (0..=1) that the alarm is ringing on a given tick
    #[arg(long)]
    pub alarm_probability: Option<f64>,

    /// Seed for the alarm's random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretend today is this day (e.g. `mon`, `saturday`)
    #[arg(long)]
    pub weekday: Option<Weekday>,

    /// Do not print the tree before and after the run
    #[arg(long)]
    pub no_tree: bool,
}

/// Settings for one run of the routine.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutineConfig {
    /// Number of `tick_once` calls.
    pub ticks: u32,
    pub alarm_probability: f64,
    /// Seed for reproducible alarm draws; entropy when `None`.
    pub seed: Option<u64>,
    /// Fixed day of the week; the local clock when `None`.
    pub weekday: Option<Weekday>,
    pub show_tree: bool,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            ticks: 3,
            alarm_probability: 0.7,
            seed: None,
            weekday: None,
            show_tree: true,
        }
    }
}

impl RoutineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROUTINE_TICKS` - Number of ticks (default: 3, minimum: 1)
    /// - `ROUTINE_ALARM_PROBABILITY` - Alarm probability (default: 0.7, clamped to 0..=1)
    /// - `ROUTINE_SEED` - RNG seed (default: unseeded)
    /// - `ROUTINE_WEEKDAY` - Fixed weekday (default: local clock)
    /// - `ROUTINE_SHOW_TREE` - Print the tree (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u32>("ROUTINE_TICKS") {
            config.ticks = ticks;
        }
        if let Some(probability) = read_env::<f64>("ROUTINE_ALARM_PROBABILITY") {
            config.alarm_probability = probability;
        }
        if let Some(seed) = read_env::<u64>("ROUTINE_SEED") {
            config.seed = Some(seed);
        }
        if let Some(day) = read_env::<Weekday>("ROUTINE_WEEKDAY") {
            config.weekday = Some(day);
        }
        if let Some(show) = read_env_bool("ROUTINE_SHOW_TREE") {
            config.show_tree = show;
        }

        config.normalized()
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(ticks) = args.ticks {
            self.ticks = ticks;
        }
        if let Some(probability) = args.alarm_probability {
            self.alarm_probability = probability;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.weekday.is_some() {
            self.weekday = args.weekday;
        }
        if args.no_tree {
            self.show_tree = false;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.ticks = self.ticks.max(1);
        self.alarm_probability = if self.alarm_probability.is_nan() {
            Self::default().alarm_probability
        } else {
            self.alarm_probability.clamp(0.0, 1.0)
        };
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
