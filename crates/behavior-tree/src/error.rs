//! Error types raised while assembling and driving a tree.
//!
//! A leaf returning [`Status::Failure`](crate::Status::Failure) is a decision,
//! not an error, and never shows up here.

use thiserror::Error;

/// A node's one-time initialisation could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("setup of '{node}' failed: {reason}")]
pub struct SetupError {
    /// Name of the node that failed.
    pub node: String,
    /// Human-readable cause.
    pub reason: String,
}

impl SetupError {
    pub fn new(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the tree driver and the construction API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Setup failed somewhere in the tree. `path` is the slash-separated
    /// chain of node names from the root to the failing node.
    #[error("tree setup failed at '{path}': {source}")]
    Setup {
        path: String,
        #[source]
        source: SetupError,
    },

    #[error("tree must be set up before it can be ticked")]
    NotSetUp,

    #[error("tree has already been set up")]
    AlreadySetUp,

    #[error("tree setup failed earlier; it cannot be ticked or set up again")]
    SetupFailed,

    #[error("tree has been shut down")]
    ShutDown,

    /// A child was attached to a composite that has already been ticked.
    #[error("cannot attach '{child}' to '{parent}' after it has started ticking")]
    AttachAfterStart { parent: String, child: String },
}

impl TreeError {
    /// Returns true for errors caused by driving or wiring the tree
    /// incorrectly, as opposed to a node failing its own setup.
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::Setup { .. })
    }

    /// Prefixes the path of a setup failure with the name of an ancestor.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            Self::Setup { path, source } => Self::Setup {
                path: format!("{parent}/{path}"),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
