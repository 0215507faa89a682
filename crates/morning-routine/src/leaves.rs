//! Leaf behaviors of the morning routine.
//!
//! Sensor leaves ([`IsAlarmRinging`], [`IsWeekday`]) read injected sources and
//! report `Success`/`Failure`. Action leaves ([`Announce`]) print a line and
//! succeed.

use std::sync::Arc;

use behavior_tree::{Behavior, NodeState, SetupError, Status};

use crate::console::Console;
use crate::sources::{Calendar, Chance, day_name, is_workday};

/// Succeeds when the alarm clock is ringing.
///
/// The alarm is simulated: each tick draws from `chance` and the alarm rings
/// when the draw falls below `probability`.
pub struct IsAlarmRinging {
    state: NodeState,
    chance: Box<dyn Chance>,
    probability: f64,
    console: Console,
}

impl IsAlarmRinging {
    pub const NAME: &'static str = "Is Alarm Ringing?";

    pub fn new(chance: Box<dyn Chance>, probability: f64, console: Console) -> Self {
        Self {
            state: NodeState::new(Self::NAME),
            chance,
            probability,
            console,
        }
    }
}

impl Behavior for IsAlarmRinging {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn setup(&mut self) -> Result<(), SetupError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(SetupError::new(
                self.name(),
                format!("alarm probability {} is outside [0, 1]", self.probability),
            ));
        }
        Ok(())
    }

    fn update(&mut self) -> Status {
        let ringing = self.chance.roll() < self.probability;
        let (feedback, status) = if ringing {
            ("Alarm is ringing!", Status::Success)
        } else {
            ("Alarm not ringing", Status::Failure)
        };
        self.console.say(format!(" {feedback}"));
        self.state.set_feedback(feedback);
        status
    }
}

/// Succeeds Monday through Friday, fails on the weekend.
pub struct IsWeekday {
    state: NodeState,
    calendar: Arc<dyn Calendar>,
    console: Console,
}

impl IsWeekday {
    pub const NAME: &'static str = "Is Weekday?";

    pub fn new(calendar: Arc<dyn Calendar>, console: Console) -> Self {
        Self {
            state: NodeState::new(Self::NAME),
            calendar,
            console,
        }
    }
}

impl Behavior for IsWeekday {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn update(&mut self) -> Status {
        let day = self.calendar.weekday();
        let (kind, status) = if is_workday(day) {
            ("Weekday", Status::Success)
        } else {
            ("Weekend", Status::Failure)
        };
        let feedback = format!("Today is {} ({kind})", day_name(day));
        self.console.say(format!(" {feedback}"));
        self.state.set_feedback(feedback);
        status
    }
}

/// Prints a fixed line, records it as feedback and succeeds.
pub struct Announce {
    state: NodeState,
    message: &'static str,
    console: Console,
}

impl Announce {
    pub fn new(name: impl Into<String>, message: &'static str, console: Console) -> Self {
        Self {
            state: NodeState::new(name),
            message,
            console,
        }
    }

    pub fn hit_snooze_button(console: Console) -> Self {
        Self::new("Hit Snooze", " Snoozing...", console)
    }

    pub fn get_out_of_bed(console: Console) -> Self {
        Self::new("Get Out of Bed", "  Getting up!", console)
    }

    pub fn brew_coffee(console: Console) -> Self {
        Self::new("Brew Coffee", " Brewing coffee...", console)
    }

    pub fn start_work(console: Console) -> Self {
        Self::new("Start Work", " Starting work", console)
    }

    pub fn relax_on_weekend(console: Console) -> Self {
        Self::new("Relax on Weekend", " Relaxing on the weekend!", console)
    }
}

impl Behavior for Announce {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn update(&mut self) -> Status {
        self.console.say(self.message);
        self.state.set_feedback(self.message.trim());
        Status::Success
    }
}
