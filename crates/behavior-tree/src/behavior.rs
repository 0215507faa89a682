//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and [`NodeState`], the bookkeeping
//! every node carries (name, last status, feedback).
//!
//! Implementors supply the `update` step and a handful of optional hooks.
//! The lifecycle methods the engine drives (`tick`, `terminate`, `reset`,
//! `setup_with_descendants`) are provided by the trait so that status
//! bookkeeping is identical for leaves, decorators and composites.

use crate::{SetupError, Status, TreeError};

/// The structural role of a node, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    Sequence,
    Selector,
    Parallel,
    Decorator,
}

/// Name, last reported status and feedback of a single node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeState {
    name: String,
    status: Status,
    feedback: Option<String>,
}

impl NodeState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Invalid,
            feedback: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Records a human-readable explanation of the latest result.
    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = Some(feedback.into());
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// A behavior tree node.
///
/// # Lifecycle
///
/// 1. [`setup`](Behavior::setup) runs once before the first tick. Trees call
///    it through [`setup_with_descendants`](Behavior::setup_with_descendants),
///    which visits nodes in pre-order: a parent, then each child subtree in
///    insertion order.
/// 2. [`tick`](Behavior::tick) runs zero or more times. A node that is not
///    `Running` is (re)started with [`initialise`](Behavior::initialise)
///    before [`update`](Behavior::update) is called.
/// 3. [`on_terminate`](Behavior::on_terminate) runs when the node's execution
///    ends, either because `update` returned a terminal status or because a
///    parent abandoned it while it was `Running`.
///
/// Leaf faults are not caught: a panic inside `update` unwinds through every
/// ancestor.
pub trait Behavior: Send {
    fn state(&self) -> &NodeState;

    fn state_mut(&mut self) -> &mut NodeState;

    /// Evaluate one step of this node's logic.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if work is ongoing and must resume next tick
    fn update(&mut self) -> Status;

    fn kind(&self) -> NodeKind {
        NodeKind::Leaf
    }

    /// The memory flag of a composite; `None` for nodes without one.
    fn memory(&self) -> Option<bool> {
        None
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        &mut []
    }

    /// One-time initialisation of this node only.
    fn setup(&mut self) -> Result<(), SetupError> {
        Ok(())
    }

    /// Called before `update` whenever the node starts fresh (it was not
    /// `Running` after its previous tick).
    fn initialise(&mut self) {}

    /// Called when the node's execution ends with `new_status`.
    fn on_terminate(&mut self, _new_status: Status) {}

    #[inline]
    fn name(&self) -> &str {
        self.state().name()
    }

    #[inline]
    fn status(&self) -> Status {
        self.state().status()
    }

    #[inline]
    fn feedback(&self) -> Option<&str> {
        self.state().feedback()
    }

    /// Ticks this node once and records the result.
    fn tick(&mut self) -> Status {
        if !self.status().is_running() {
            self.initialise();
        }

        let status = self.update();
        debug_assert!(
            status != Status::Invalid,
            "'{}' returned INVALID from update",
            self.name()
        );
        self.state_mut().set_status(status);

        if status.is_terminal() {
            self.on_terminate(status);
        }
        status
    }

    /// Ends this node's execution and sets its status to `new_status`.
    ///
    /// A `Running` node has its `on_terminate` hook invoked and every
    /// `Running` descendant terminated with it. On any other node only the
    /// recorded status changes, so calling this repeatedly is harmless.
    fn terminate(&mut self, new_status: Status) {
        if self.status().is_running() {
            self.on_terminate(new_status);
            for child in self.children_mut() {
                if child.status().is_running() {
                    child.terminate(new_status);
                }
            }
        }
        self.state_mut().set_status(new_status);
    }

    /// Returns this node and its whole subtree to `Invalid`.
    fn reset(&mut self) {
        if self.status().is_running() {
            self.terminate(Status::Invalid);
        }
        for child in self.children_mut() {
            child.reset();
        }
        let state = self.state_mut();
        state.set_status(Status::Invalid);
        state.clear_feedback();
    }

    /// Runs [`setup`](Behavior::setup) on this node and then, in insertion
    /// order, on every descendant. Stops at the first failure.
    fn setup_with_descendants(&mut self) -> Result<(), TreeError> {
        if let Err(source) = self.setup() {
            return Err(TreeError::Setup {
                path: self.name().to_owned(),
                source,
            });
        }

        let name = self.name().to_owned();
        for child in self.children_mut() {
            child
                .setup_with_descendants()
                .map_err(|err| err.within(&name))?;
        }
        Ok(())
    }
}

/// Forwarding implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to be used wherever a `Behavior` is
/// expected. Every method forwards so that overrides on the inner node are
/// honoured.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn state(&self) -> &NodeState {
        (**self).state()
    }

    #[inline]
    fn state_mut(&mut self) -> &mut NodeState {
        (**self).state_mut()
    }

    #[inline]
    fn update(&mut self) -> Status {
        (**self).update()
    }

    fn kind(&self) -> NodeKind {
        (**self).kind()
    }

    fn memory(&self) -> Option<bool> {
        (**self).memory()
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        (**self).children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        (**self).children_mut()
    }

    fn setup(&mut self) -> Result<(), SetupError> {
        (**self).setup()
    }

    fn initialise(&mut self) {
        (**self).initialise()
    }

    fn on_terminate(&mut self, new_status: Status) {
        (**self).on_terminate(new_status)
    }

    #[inline]
    fn tick(&mut self) -> Status {
        (**self).tick()
    }

    fn terminate(&mut self, new_status: Status) {
        (**self).terminate(new_status)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn setup_with_descendants(&mut self) -> Result<(), TreeError> {
        (**self).setup_with_descendants()
    }
}
