//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`Parallel`] (threshold logic).
//!
//! Children are ticked in insertion order. Each composite carries a `memory`
//! flag fixed at construction:
//!
//! - `memory = false`: every tick starts again from the first child.
//! - `memory = true`: a tick that follows a `Running` result resumes at the
//!   child that was running, without re-ticking the children before it.

use crate::{Behavior, NodeKind, NodeState, Result, SetupError, Status, TreeError};

/// Where an ordered traversal stopped.
enum Traversal {
    /// A child returned `Running` or the short-circuit status.
    Stopped { index: usize, status: Status },
    /// Every child returned the non-short-circuit status.
    Exhausted,
}

/// Ticks `children[start..]` in order until one returns `Running` or
/// `short_circuit`. Children after the stopping point are terminated so that
/// at most one child is left `Running` and none keeps a stale result.
fn traverse(children: &mut [Box<dyn Behavior>], start: usize, short_circuit: Status) -> Traversal {
    for index in start..children.len() {
        let status = children[index].tick();
        if status.is_running() || status == short_circuit {
            invalidate_from(children, index + 1);
            return Traversal::Stopped { index, status };
        }
    }
    Traversal::Exhausted
}

fn invalidate_from(children: &mut [Box<dyn Behavior>], from: usize) {
    for child in children.iter_mut().skip(from) {
        if child.status() != Status::Invalid {
            child.terminate(Status::Invalid);
        }
    }
}

fn attach(
    state: &NodeState,
    children: &mut Vec<Box<dyn Behavior>>,
    child: Box<dyn Behavior>,
) -> Result<()> {
    if state.status() != Status::Invalid {
        return Err(TreeError::AttachAfterStart {
            parent: state.name().to_owned(),
            child: child.name().to_owned(),
        });
    }
    children.push(child);
    Ok(())
}

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An empty
/// sequence succeeds.
pub struct Sequence {
    state: NodeState,
    memory: bool,
    children: Vec<Box<dyn Behavior>>,
    cursor: usize,
}

impl Sequence {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(name: impl Into<String>, memory: bool, children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            state: NodeState::new(name),
            memory,
            children,
            cursor: 0,
        }
    }

    /// Appends a child. Fails once the sequence has been ticked.
    pub fn add_child(&mut self, child: impl Behavior + 'static) -> Result<()> {
        attach(&self.state, &mut self.children, Box::new(child))
    }

    /// Index of the child the last tick stopped at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Behavior for Sequence {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn memory(&self) -> Option<bool> {
        Some(self.memory)
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        &mut self.children
    }

    fn update(&mut self) -> Status {
        let start = if self.memory && self.status().is_running() {
            self.cursor
        } else {
            0
        };

        match traverse(&mut self.children, start, Status::Failure) {
            Traversal::Stopped { index, status } => {
                self.cursor = index;
                status
            }
            Traversal::Exhausted => {
                self.cursor = 0;
                Status::Success
            }
        }
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An empty
/// selector fails.
pub struct Selector {
    state: NodeState,
    memory: bool,
    children: Vec<Box<dyn Behavior>>,
    cursor: usize,
}

impl Selector {
    /// Creates a new selector with the given child behaviors.
    pub fn new(name: impl Into<String>, memory: bool, children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            state: NodeState::new(name),
            memory,
            children,
            cursor: 0,
        }
    }

    /// Appends a child. Fails once the selector has been ticked.
    pub fn add_child(&mut self, child: impl Behavior + 'static) -> Result<()> {
        attach(&self.state, &mut self.children, Box::new(child))
    }

    /// Index of the child the last tick stopped at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Behavior for Selector {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn memory(&self) -> Option<bool> {
        Some(self.memory)
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        &mut self.children
    }

    fn update(&mut self) -> Status {
        let start = if self.memory && self.status().is_running() {
            self.cursor
        } else {
            0
        };

        match traverse(&mut self.children, start, Status::Success) {
            Traversal::Stopped { index, status } => {
                self.cursor = index;
                status
            }
            Traversal::Exhausted => {
                self.cursor = 0;
                Status::Failure
            }
        }
    }
}

/// Success policy of a [`Parallel`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallelPolicy {
    /// Succeed when every child succeeds; fail as soon as one fails.
    AllSucceed,
    /// Succeed as soon as one child succeeds; fail when all have failed.
    AnySucceeds,
    /// Succeed once at least this many children succeed; fail once so many
    /// have failed that the count can no longer be reached.
    AtLeast(usize),
}

impl ParallelPolicy {
    /// Number of successes required among `children` children.
    pub const fn threshold(self, children: usize) -> usize {
        match self {
            Self::AllSucceed => children,
            Self::AnySucceeds => 1,
            Self::AtLeast(n) => n,
        }
    }

    /// Combines child results tallied over one tick.
    ///
    /// `Success` once `successes` reaches the threshold, `Failure` once more
    /// than `children - threshold` children have failed, `Running` otherwise.
    pub const fn resolve(self, children: usize, successes: usize, failures: usize) -> Status {
        let threshold = self.threshold(children);
        if successes >= threshold {
            Status::Success
        } else if failures > children.saturating_sub(threshold) {
            Status::Failure
        } else {
            Status::Running
        }
    }
}

/// Ticks every child on every tick and aggregates their results under a
/// [`ParallelPolicy`].
///
/// Children are still evaluated one after another on the calling thread.
/// With `memory = true`, children that already finished while the parallel
/// is `Running` keep their result and are not ticked again until the
/// parallel itself completes.
pub struct Parallel {
    state: NodeState,
    memory: bool,
    policy: ParallelPolicy,
    children: Vec<Box<dyn Behavior>>,
}

impl Parallel {
    pub fn new(
        name: impl Into<String>,
        memory: bool,
        policy: ParallelPolicy,
        children: Vec<Box<dyn Behavior>>,
    ) -> Self {
        Self {
            state: NodeState::new(name),
            memory,
            policy,
            children,
        }
    }

    /// Appends a child. Fails once the parallel has been ticked.
    pub fn add_child(&mut self, child: impl Behavior + 'static) -> Result<()> {
        attach(&self.state, &mut self.children, Box::new(child))
    }

    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }
}

impl Behavior for Parallel {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Parallel
    }

    fn memory(&self) -> Option<bool> {
        Some(self.memory)
    }

    fn children(&self) -> &[Box<dyn Behavior>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Behavior>] {
        &mut self.children
    }

    fn setup(&mut self) -> std::result::Result<(), SetupError> {
        let count = self.children.len();
        let threshold = self.policy.threshold(count);
        if matches!(self.policy, ParallelPolicy::AtLeast(0)) || threshold > count {
            return Err(SetupError::new(
                self.name(),
                format!("success threshold {threshold} is unreachable with {count} children"),
            ));
        }
        Ok(())
    }

    fn update(&mut self) -> Status {
        let resuming = self.memory && self.status().is_running();
        let mut successes = 0;
        let mut failures = 0;

        for child in &mut self.children {
            let status = if resuming && child.status().is_terminal() {
                child.status()
            } else {
                child.tick()
            };
            match status {
                Status::Success => successes += 1,
                Status::Failure => failures += 1,
                Status::Running | Status::Invalid => {}
            }
        }

        let status = self
            .policy
            .resolve(self.children.len(), successes, failures);
        if status.is_terminal() {
            for child in &mut self.children {
                if child.status().is_running() {
                    child.terminate(Status::Invalid);
                }
            }
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlwaysFail, AlwaysRunning, AlwaysSucceed, RunningThenSuccess};

    fn boxed(node: impl Behavior + 'static) -> Box<dyn Behavior> {
        Box::new(node)
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(
            "seq",
            false,
            vec![boxed(AlwaysSucceed::new("a")), boxed(AlwaysSucceed::new("b"))],
        );

        assert_eq!(seq.tick(), Status::Success);
        assert!(seq.children().iter().all(|c| c.status().is_success()));
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(
            "seq",
            false,
            vec![
                boxed(AlwaysSucceed::new("a")),
                boxed(AlwaysFail::new("b")),
                boxed(AlwaysSucceed::new("c")), // Should not execute
            ],
        );

        assert_eq!(seq.tick(), Status::Failure);
        assert_eq!(seq.children()[2].status(), Status::Invalid);
        assert_eq!(seq.cursor(), 1);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(
            "sel",
            false,
            vec![
                boxed(AlwaysFail::new("a")),
                boxed(AlwaysSucceed::new("b")),
                boxed(AlwaysFail::new("c")), // Should not execute
            ],
        );

        assert_eq!(sel.tick(), Status::Success);
        assert_eq!(sel.children()[2].status(), Status::Invalid);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(
            "sel",
            false,
            vec![boxed(AlwaysFail::new("a")), boxed(AlwaysFail::new("b"))],
        );

        assert_eq!(sel.tick(), Status::Failure);
    }

    #[test]
    fn empty_composites_follow_their_identity() {
        assert_eq!(Sequence::new("s", false, vec![]).tick(), Status::Success);
        assert_eq!(Selector::new("s", false, vec![]).tick(), Status::Failure);
        assert_eq!(
            Parallel::new("p", false, ParallelPolicy::AllSucceed, vec![]).tick(),
            Status::Success
        );
    }

    #[test]
    fn running_child_suspends_sequence() {
        let mut seq = Sequence::new(
            "seq",
            true,
            vec![
                boxed(RunningThenSuccess::new("slow", 1)),
                boxed(AlwaysSucceed::new("after")),
            ],
        );

        assert_eq!(seq.tick(), Status::Running);
        assert_eq!(seq.children()[1].status(), Status::Invalid);
        assert_eq!(seq.tick(), Status::Success);
    }

    #[test]
    fn add_child_rejected_after_first_tick() {
        let mut seq = Sequence::new("seq", false, vec![]);
        seq.add_child(AlwaysSucceed::new("a")).unwrap();
        seq.tick();

        let err = seq.add_child(AlwaysSucceed::new("late")).unwrap_err();
        assert_eq!(
            err,
            TreeError::AttachAfterStart {
                parent: "seq".into(),
                child: "late".into(),
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn policy_resolution() {
        let policy = ParallelPolicy::AtLeast(2);
        assert_eq!(policy.resolve(3, 2, 0), Status::Success);
        assert_eq!(policy.resolve(3, 1, 1), Status::Running);
        assert_eq!(policy.resolve(3, 0, 2), Status::Failure);

        assert_eq!(ParallelPolicy::AllSucceed.resolve(2, 1, 1), Status::Failure);
        assert_eq!(ParallelPolicy::AnySucceeds.resolve(2, 0, 1), Status::Running);
        assert_eq!(ParallelPolicy::AnySucceeds.resolve(2, 0, 2), Status::Failure);
    }

    #[test]
    fn parallel_terminates_running_children_on_completion() {
        let mut par = Parallel::new(
            "par",
            false,
            ParallelPolicy::AnySucceeds,
            vec![boxed(AlwaysRunning::new("spin")), boxed(AlwaysSucceed::new("ok"))],
        );

        assert_eq!(par.tick(), Status::Success);
        assert_eq!(par.children()[0].status(), Status::Invalid);
    }

    #[test]
    fn parallel_setup_rejects_unreachable_threshold() {
        let mut par = Parallel::new(
            "par",
            false,
            ParallelPolicy::AtLeast(3),
            vec![boxed(AlwaysSucceed::new("a")), boxed(AlwaysSucceed::new("b"))],
        );
        let err = par.setup().unwrap_err();
        assert_eq!(err.node, "par");

        let mut zero = Parallel::new("zero", false, ParallelPolicy::AtLeast(0), vec![]);
        assert!(zero.setup().is_err());
    }
}
