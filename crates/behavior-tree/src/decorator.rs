//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`ForceSuccess`]
//! (failure suppression). A `Running` child keeps its decorator `Running`.

use crate::{Behavior, NodeKind, NodeState, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter {
    state: NodeState,
    child: Box<dyn Behavior>,
}

impl Inverter {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(name: impl Into<String>, child: Box<dyn Behavior>) -> Self {
        Self {
            state: NodeState::new(name),
            child,
        }
    }
}

impl Behavior for Inverter {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Decorator
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        std::slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        std::slice::from_mut(&mut self.child)
    }

    fn update(&mut self) -> Status {
        self.child.tick().invert()
    }
}

/// Returns `Success` whenever its child finishes, regardless of the result.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - If the child returns `Running`, returns `Running`
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Error suppression in non-critical paths
pub struct ForceSuccess {
    state: NodeState,
    child: Box<dyn Behavior>,
}

impl ForceSuccess {
    /// Creates a new force-success wrapper around the given child behavior.
    pub fn new(name: impl Into<String>, child: Box<dyn Behavior>) -> Self {
        Self {
            state: NodeState::new(name),
            child,
        }
    }
}

impl Behavior for ForceSuccess {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Decorator
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        std::slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        std::slice::from_mut(&mut self.child)
    }

    fn update(&mut self) -> Status {
        match self.child.tick() {
            Status::Failure => {
                self.state.set_feedback(format!("'{}' failed", self.child.name()));
                Status::Success
            }
            other => {
                self.state.clear_feedback();
                other
            }
        }
    }
}
