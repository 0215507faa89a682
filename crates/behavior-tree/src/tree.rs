//! Tree driver.
//!
//! [`BehaviorTree`] owns the root node and is the only way to advance a tree
//! by one cycle. It enforces the startup protocol:
//!
//! ```text
//! Uninitialized --setup_tree ok--> Ready --tick_once--> Ready
//!       |                            |
//!       +--setup_tree err--> Failed  +--shutdown--> Shutdown
//! ```
//!
//! There is no automatic retry after a failed setup.

use tracing::{debug, trace, warn};

use crate::{Behavior, NodeKind, Result, Status, TreeError};

/// Lifecycle state of a [`BehaviorTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TreeState {
    Uninitialized,
    Ready,
    Failed,
    Shutdown,
}

/// Owns a root behavior and drives it.
pub struct BehaviorTree {
    root: Box<dyn Behavior>,
    state: TreeState,
    count: u64,
}

impl BehaviorTree {
    pub fn new(root: impl Behavior + 'static) -> Self {
        Self {
            root: Box::new(root),
            state: TreeState::Uninitialized,
            count: 0,
        }
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    /// Read-only access to the root, for diagnostics.
    pub fn root(&self) -> &dyn Behavior {
        self.root.as_ref()
    }

    /// Number of completed `tick_once` calls.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Runs `setup` on every node, parent before children.
    ///
    /// On failure the tree moves to [`TreeState::Failed`] and the error names
    /// the path of the offending node.
    pub fn setup_tree(&mut self) -> Result<()> {
        match self.state {
            TreeState::Uninitialized => {}
            TreeState::Ready => return Err(TreeError::AlreadySetUp),
            TreeState::Failed => return Err(TreeError::SetupFailed),
            TreeState::Shutdown => return Err(TreeError::ShutDown),
        }

        debug!(root = self.root.name(), "setting up behavior tree");
        match self.root.setup_with_descendants() {
            Ok(()) => {
                self.state = TreeState::Ready;
                debug!(root = self.root.name(), "behavior tree ready");
                Ok(())
            }
            Err(err) => {
                self.state = TreeState::Failed;
                warn!(root = self.root.name(), error = %err, "behavior tree setup failed");
                Err(err)
            }
        }
    }

    /// Ticks the root exactly once and returns its status.
    pub fn tick_once(&mut self) -> Result<Status> {
        self.ensure_ready()?;

        let status = self.root.tick();
        self.count += 1;
        trace!(tick = self.count, status = %status, "behavior tree ticked");
        Ok(status)
    }

    /// Terminates every running node and retires the tree.
    ///
    /// Calling this on a tree that is already shut down, or whose setup
    /// failed, does nothing.
    pub fn shutdown(&mut self) -> Result<()> {
        match self.state {
            TreeState::Failed | TreeState::Shutdown => return Ok(()),
            TreeState::Uninitialized | TreeState::Ready => {}
        }

        if self.root.status().is_running() {
            self.root.terminate(Status::Invalid);
        }
        self.state = TreeState::Shutdown;
        debug!(root = self.root.name(), ticks = self.count, "behavior tree shut down");
        Ok(())
    }

    /// Returns every node to `Invalid` without leaving the `Ready` state.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.root.reset();
        Ok(())
    }

    /// Visits every node depth-first (pre-order) with its depth below the root.
    pub fn walk(&self, mut visitor: impl FnMut(usize, &dyn Behavior)) {
        walk(self.root.as_ref(), &mut visitor);
    }

    /// Owned copy of the tree's shape and current statuses.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::capture(self.root.as_ref())
    }

    /// The deepest node on the path taken by the most recent tick.
    ///
    /// `None` before the first tick or after a reset.
    pub fn tip(&self) -> Option<&dyn Behavior> {
        if self.root.status() == Status::Invalid {
            return None;
        }

        let mut node = self.root.as_ref();
        while let Some(child) = node
            .children()
            .iter()
            .rev()
            .find(|child| child.status() != Status::Invalid)
        {
            node = child.as_ref();
        }
        Some(node)
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            TreeState::Ready => Ok(()),
            TreeState::Uninitialized => Err(TreeError::NotSetUp),
            TreeState::Failed => Err(TreeError::SetupFailed),
            TreeState::Shutdown => Err(TreeError::ShutDown),
        }
    }
}

impl Drop for BehaviorTree {
    fn drop(&mut self) {
        if self.state == TreeState::Ready && self.root.status().is_running() {
            self.root.terminate(Status::Invalid);
        }
    }
}

/// Visits `node` and its descendants depth-first (pre-order).
pub fn walk(node: &dyn Behavior, visitor: &mut dyn FnMut(usize, &dyn Behavior)) {
    fn visit(node: &dyn Behavior, depth: usize, visitor: &mut dyn FnMut(usize, &dyn Behavior)) {
        visitor(depth, node);
        for child in node.children() {
            visit(child.as_ref(), depth + 1, visitor);
        }
    }
    visit(node, 0, visitor);
}

/// Owned, read-only view of a node and its subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSnapshot {
    pub name: String,
    pub kind: NodeKind,
    pub status: Status,
    pub feedback: Option<String>,
    pub memory: Option<bool>,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn capture(node: &dyn Behavior) -> Self {
        Self {
            name: node.name().to_owned(),
            kind: node.kind(),
            status: node.status(),
            feedback: node.feedback().map(str::to_owned),
            memory: node.memory(),
            children: node
                .children()
                .iter()
                .map(|child| Self::capture(child.as_ref()))
                .collect(),
        }
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NodeSnapshot::node_count)
            .sum::<usize>()
    }
}
