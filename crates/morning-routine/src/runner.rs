//! The driver loop: set up, tick, report, shut down.

use anyhow::{Context, Result};
use behavior_tree::{BehaviorTree, Status};

use crate::config::RoutineConfig;
use crate::console::Console;
use crate::display::render_tree;
use crate::routine::{Sensors, morning_routine};

const RULE: usize = 60;

/// Runs the routine for `config.ticks` cycles and returns the root status of
/// each cycle.
pub fn run_routine(config: &RoutineConfig, sensors: Sensors, console: &Console) -> Result<Vec<Status>> {
    console.say("=".repeat(RULE));
    console.say("Robot's Morning Routine Behavior Tree");
    console.say("=".repeat(RULE));
    console.say("");

    let mut tree = BehaviorTree::new(morning_routine(sensors, console));
    tree.setup_tree().context("failed to set up the morning routine")?;

    if config.show_tree {
        console.say(" Behavior Tree Structure:");
        console.say(render_tree(tree.root(), true));
    }

    console.say("Executing Behavior Tree:");
    console.say("-".repeat(RULE));

    let mut statuses = Vec::with_capacity(config.ticks as usize);
    for cycle in 1..=config.ticks {
        console.say("");
        console.say(format!("  Execution {cycle} time"));
        console.say("-".repeat(40));

        let status = tree.tick_once()?;
        tracing::debug!(cycle, %status, tip = tree.tip().map(|n| n.name()), "routine ticked");
        statuses.push(status);
        console.say("");
    }

    if config.show_tree {
        console.say(" Final Tree State:");
        console.say(render_tree(tree.root(), true));
    }

    tree.shutdown()?;

    console.say("=".repeat(RULE));
    console.say(" Robot's morning routine completed!");
    console.say("=".repeat(RULE));
    Ok(statuses)
}
