//! Assembly of the morning-routine tree.
//!
//! ```text
//! Morning Routine (sequence)
//!   Wake Up Routine (selector)
//!     Snooze Sequence: Is Alarm Ringing?, Hit Snooze
//!     Get Out of Bed
//!   Morning Preparation (sequence)
//!     Weekday Coffee (selector)
//!       Weekday Coffee Sequence: Is Weekday?, Brew Coffee
//!       Skip Coffee on Weekend
//!   Start Day (selector)
//!     Work Sequence: Is Weekday?, Start Work
//!     Relax on Weekend
//! ```
//!
//! Every composite runs without memory, so each cycle re-evaluates the whole
//! routine from the top.

use std::sync::Arc;

use behavior_tree::builder::{selector, sequence, success};
use behavior_tree::Behavior;

use crate::config::RoutineConfig;
use crate::console::Console;
use crate::leaves::{Announce, IsAlarmRinging, IsWeekday};
use crate::sources::{Calendar, Chance, FixedCalendar, RngChance, SystemCalendar};

/// External inputs of the routine's sensor leaves.
pub struct Sensors {
    pub calendar: Arc<dyn Calendar>,
    pub alarm: Box<dyn Chance>,
    pub alarm_probability: f64,
}

impl Sensors {
    /// Local clock (or the configured fixed day) and a seeded RNG.
    pub fn from_config(config: &RoutineConfig) -> Self {
        let calendar: Arc<dyn Calendar> = match config.weekday {
            Some(day) => Arc::new(FixedCalendar(day)),
            None => Arc::new(SystemCalendar),
        };
        Self {
            calendar,
            alarm: Box::new(RngChance::new(config.seed)),
            alarm_probability: config.alarm_probability,
        }
    }
}

pub fn morning_routine(sensors: Sensors, console: &Console) -> Box<dyn Behavior> {
    let Sensors {
        calendar,
        alarm,
        alarm_probability,
    } = sensors;

    // Snooze if the alarm is ringing, otherwise get up
    let wake_up = selector(
        "Wake Up Routine",
        false,
        vec![
            sequence(
                "Snooze Sequence",
                false,
                vec![
                    Box::new(IsAlarmRinging::new(alarm, alarm_probability, console.clone())),
                    Box::new(Announce::hit_snooze_button(console.clone())),
                ],
            ),
            Box::new(Announce::get_out_of_bed(console.clone())),
        ],
    );

    // Coffee only on weekdays
    let morning_prep = sequence(
        "Morning Preparation",
        false,
        vec![selector(
            "Weekday Coffee",
            false,
            vec![
                sequence(
                    "Weekday Coffee Sequence",
                    false,
                    vec![
                        Box::new(IsWeekday::new(calendar.clone(), console.clone())),
                        Box::new(Announce::brew_coffee(console.clone())),
                    ],
                ),
                success("Skip Coffee on Weekend"),
            ],
        )],
    );

    let start_day = selector(
        "Start Day",
        false,
        vec![
            sequence(
                "Work Sequence",
                false,
                vec![
                    Box::new(IsWeekday::new(calendar, console.clone())),
                    Box::new(Announce::start_work(console.clone())),
                ],
            ),
            Box::new(Announce::relax_on_weekend(console.clone())),
        ],
    );

    sequence("Morning Routine", false, vec![wake_up, morning_prep, start_day])
}
