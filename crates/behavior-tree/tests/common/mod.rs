//! Shared test leaves that record what the engine does to them.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use behavior_tree::{Behavior, NodeState, SetupError, Status};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Setup(String),
    Tick(String),
    Terminate(String, Status),
}

/// Append-only log shared by every probe in a test tree.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    /// Names of ticked probes, in tick order.
    pub fn ticks(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Tick(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn setups(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Setup(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Statuses passed to `name`'s terminate hook, in order.
    pub fn terminations(&self, name: &str) -> Vec<Status> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Terminate(node, status) if node == name => Some(status),
                _ => None,
            })
            .collect()
    }
}

/// A leaf that replays a script of statuses, repeating the last one.
pub struct Probe {
    state: NodeState,
    script: Vec<Status>,
    step: usize,
    journal: Journal,
    setup_error: Option<String>,
}

impl Probe {
    pub fn new(name: &str, journal: &Journal, script: &[Status]) -> Self {
        assert!(!script.is_empty(), "probe needs at least one status");
        Self {
            state: NodeState::new(name),
            script: script.to_vec(),
            step: 0,
            journal: journal.clone(),
            setup_error: None,
        }
    }

    pub fn failing_setup(mut self, reason: &str) -> Self {
        self.setup_error = Some(reason.to_owned());
        self
    }

    pub fn boxed(self) -> Box<dyn Behavior> {
        Box::new(self)
    }
}

impl Behavior for Probe {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn setup(&mut self) -> Result<(), SetupError> {
        self.journal.push(Event::Setup(self.name().to_owned()));
        match &self.setup_error {
            Some(reason) => Err(SetupError::new(self.name(), reason.clone())),
            None => Ok(()),
        }
    }

    fn update(&mut self) -> Status {
        self.journal.push(Event::Tick(self.name().to_owned()));
        let status = self.script[self.step.min(self.script.len() - 1)];
        self.step += 1;
        status
    }

    fn on_terminate(&mut self, new_status: Status) {
        self.journal
            .push(Event::Terminate(self.name().to_owned(), new_status));
    }
}

pub fn succeed(name: &str, journal: &Journal) -> Box<dyn Behavior> {
    Probe::new(name, journal, &[Status::Success]).boxed()
}

pub fn fail(name: &str, journal: &Journal) -> Box<dyn Behavior> {
    Probe::new(name, journal, &[Status::Failure]).boxed()
}

pub fn scripted(name: &str, journal: &Journal, script: &[Status]) -> Box<dyn Behavior> {
    Probe::new(name, journal, script).boxed()
}
