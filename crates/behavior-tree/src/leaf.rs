//! Built-in leaf behaviors.
//!
//! Fixed-outcome leaves are handy as placeholders and fallbacks (e.g. a
//! "skip" branch at the end of a selector). [`Condition`] and [`Action`] turn
//! plain closures into leaves so that small checks don't need their own type.

use crate::{Behavior, NodeState, Status};

macro_rules! fixed_leaf {
    ($(#[$doc:meta])* $ty:ident => $status:expr) => {
        $(#[$doc])*
        pub struct $ty {
            state: NodeState,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    state: NodeState::new(name),
                }
            }
        }

        impl Behavior for $ty {
            fn state(&self) -> &NodeState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut NodeState {
                &mut self.state
            }

            #[inline]
            fn update(&mut self) -> Status {
                $status
            }
        }
    };
}

fixed_leaf!(
    /// Always returns `Success`.
    AlwaysSucceed => Status::Success
);

fixed_leaf!(
    /// Always returns `Failure`.
    AlwaysFail => Status::Failure
);

fixed_leaf!(
    /// Always returns `Running`. Never finishes on its own.
    AlwaysRunning => Status::Running
);

/// Returns `Running` for a fixed number of ticks, then `Success`.
///
/// The count restarts whenever the leaf starts fresh, i.e. after it has
/// finished or been terminated.
pub struct RunningThenSuccess {
    state: NodeState,
    ticks: u32,
    remaining: u32,
}

impl RunningThenSuccess {
    pub fn new(name: impl Into<String>, ticks: u32) -> Self {
        Self {
            state: NodeState::new(name),
            ticks,
            remaining: ticks,
        }
    }
}

impl Behavior for RunningThenSuccess {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn initialise(&mut self) {
        self.remaining = self.ticks;
    }

    fn update(&mut self) -> Status {
        if self.remaining == 0 {
            self.state.clear_feedback();
            return Status::Success;
        }
        self.remaining -= 1;
        self.state
            .set_feedback(format!("{} tick(s) to go", self.remaining));
        Status::Running
    }
}

/// A leaf backed by a predicate: `true` is `Success`, `false` is `Failure`.
///
/// # Example
///
/// ```
/// use behavior_tree::{Behavior, Condition, Status};
///
/// let mut ready = Condition::new("Is Ready?", || true);
/// assert_eq!(ready.tick(), Status::Success);
/// ```
pub struct Condition<F> {
    state: NodeState,
    predicate: F,
}

impl<F> Condition<F>
where
    F: FnMut() -> bool + Send,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            state: NodeState::new(name),
            predicate,
        }
    }
}

impl<F> Behavior for Condition<F>
where
    F: FnMut() -> bool + Send,
{
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn update(&mut self) -> Status {
        if (self.predicate)() {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// A leaf backed by a closure that performs work and reports its status.
///
/// The closure receives the node's [`NodeState`] so it can leave feedback.
pub struct Action<F> {
    state: NodeState,
    work: F,
}

impl<F> Action<F>
where
    F: FnMut(&mut NodeState) -> Status + Send,
{
    pub fn new(name: impl Into<String>, work: F) -> Self {
        Self {
            state: NodeState::new(name),
            work,
        }
    }
}

impl<F> Behavior for Action<F>
where
    F: FnMut(&mut NodeState) -> Status + Send,
{
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn update(&mut self) -> Status {
        (self.work)(&mut self.state)
    }
}
