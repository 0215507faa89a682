//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new(name, false, vec![...]))`, you can use shorter
//! functions like `sequence(name, false, vec![...])`.
//!
//! Every helper takes its children by value, so a node can only ever end up
//! under one parent.

use crate::{
    Action, AlwaysFail, AlwaysSucceed, Behavior, Condition, ForceSuccess, Inverter, NodeState,
    Parallel, ParallelPolicy, Selector, Sequence, Status,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(name, memory, children))`.
#[inline]
pub fn sequence(
    name: impl Into<String>,
    memory: bool,
    children: Vec<Box<dyn Behavior>>,
) -> Box<dyn Behavior> {
    Box::new(Sequence::new(name, memory, children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(name, memory, children))`.
#[inline]
pub fn selector(
    name: impl Into<String>,
    memory: bool,
    children: Vec<Box<dyn Behavior>>,
) -> Box<dyn Behavior> {
    Box::new(Selector::new(name, memory, children))
}

/// Creates a parallel node.
#[inline]
pub fn parallel(
    name: impl Into<String>,
    memory: bool,
    policy: ParallelPolicy,
    children: Vec<Box<dyn Behavior>>,
) -> Box<dyn Behavior> {
    Box::new(Parallel::new(name, memory, policy, children))
}

/// Creates an inverter node.
#[inline]
pub fn inverter(name: impl Into<String>, child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    Box::new(Inverter::new(name, child))
}

/// Creates a force-success node.
#[inline]
pub fn force_success(name: impl Into<String>, child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    Box::new(ForceSuccess::new(name, child))
}

/// Creates a leaf from a predicate.
#[inline]
pub fn condition<F>(name: impl Into<String>, predicate: F) -> Box<dyn Behavior>
where
    F: FnMut() -> bool + Send + 'static,
{
    Box::new(Condition::new(name, predicate))
}

/// Creates a leaf from a closure that does work and reports a status.
#[inline]
pub fn action<F>(name: impl Into<String>, work: F) -> Box<dyn Behavior>
where
    F: FnMut(&mut NodeState) -> Status + Send + 'static,
{
    Box::new(Action::new(name, work))
}

/// Creates a leaf that always succeeds.
#[inline]
pub fn success(name: impl Into<String>) -> Box<dyn Behavior> {
    Box::new(AlwaysSucceed::new(name))
}

/// Creates a leaf that always fails.
#[inline]
pub fn failure(name: impl Into<String>) -> Box<dyn Behavior> {
    Box::new(AlwaysFail::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn helpers_build_the_expected_shape() {
        let mut root = sequence(
            "root",
            true,
            vec![
                selector("choose", false, vec![failure("no"), success("yes")]),
                inverter("not", condition("never", || false)),
                force_success("optional", failure("flaky")),
                parallel(
                    "both",
                    false,
                    ParallelPolicy::AllSucceed,
                    vec![
                        success("left"),
                        action("right", |_: &mut NodeState| Status::Success),
                    ],
                ),
            ],
        );

        assert_eq!(root.kind(), NodeKind::Sequence);
        assert_eq!(root.memory(), Some(true));
        let kinds: Vec<_> = root.children().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Selector,
                NodeKind::Decorator,
                NodeKind::Decorator,
                NodeKind::Parallel
            ]
        );
        assert_eq!(root.tick(), Status::Success);
    }
}
