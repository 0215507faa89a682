//! Robot morning routine.
//!
//! A small application of the `behavior_tree` engine: the robot decides
//! whether to snooze or get up, brews coffee on weekdays, and either starts
//! work or relaxes. Clock and randomness are injected through [`sources`] so
//! the routine can be replayed deterministically.

pub mod config;
pub mod console;
pub mod display;
pub mod leaves;
pub mod routine;
pub mod runner;
pub mod sources;

pub use config::{Args, RoutineConfig};
pub use console::Console;
pub use display::render_tree;
pub use routine::{Sensors, morning_routine};
pub use runner::run_routine;
