//! Behavior tree execution engine.
//!
//! Small decision-making units (leaves) are composed into control-flow
//! structures (sequence, selector, parallel) and the resulting tree is ticked
//! repeatedly by a driver.
//!
//! - **Single-threaded**: a tick is one synchronous depth-first pass
//! - **Running state**: long work returns `Running` and resumes next tick
//! - **Explicit cursors**: composites with memory store their resume index
//! - **Strict trees**: children are moved into their parent, so no node can
//!   have two parents
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure, Running, or Invalid (never ticked)
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`ForceSuccess`]
//! - Leaves: [`AlwaysSucceed`], [`AlwaysFail`], [`AlwaysRunning`],
//!   [`RunningThenSuccess`], [`Condition`], [`Action`]
//! - Driver: [`BehaviorTree`]
//!
//! # Example
//!
//! ```
//! use behavior_tree::builder::{failure, selector, sequence, success};
//! use behavior_tree::{BehaviorTree, Status};
//!
//! let root = sequence(
//!     "root",
//!     false,
//!     vec![
//!         selector("pick", false, vec![failure("first"), success("second")]),
//!         success("finish"),
//!     ],
//! );
//!
//! let mut tree = BehaviorTree::new(root);
//! tree.setup_tree().unwrap();
//! assert_eq!(tree.tick_once().unwrap(), Status::Success);
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, NodeKind, NodeState};
pub use composite::{Parallel, ParallelPolicy, Selector, Sequence};
pub use decorator::{ForceSuccess, Inverter};
pub use error::{Result, SetupError, TreeError};
pub use leaf::{Action, AlwaysFail, AlwaysRunning, AlwaysSucceed, Condition, RunningThenSuccess};
pub use status::Status;
pub use tree::{BehaviorTree, NodeSnapshot, TreeState};
