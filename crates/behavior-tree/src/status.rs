//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// `Success` and `Failure` are terminal. `Running` means the node has work in
/// progress and expects to be ticked again on a later cycle. `Invalid` is the
/// state of a node that has not been ticked since construction or its last
/// reset.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Not yet ticked, or reset.
    #[default]
    Invalid,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,

    /// The behavior is still working and must be resumed on the next tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` and `Invalid` are returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(Status::default(), Status::Invalid);
        assert!(!Status::default().is_terminal());
    }

    #[test]
    fn only_success_and_failure_are_terminal() {
        assert!(Status::Success.is_terminal());
        assert!(Status::Failure.is_terminal());
        assert!(!Status::Running.is_terminal());
        assert!(!Status::Invalid.is_terminal());
    }

    #[test]
    fn invert_leaves_non_terminal_alone() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
        assert_eq!(Status::Running.invert(), Status::Running);
        assert_eq!(Status::Invalid.invert(), Status::Invalid);
    }

    #[test]
    fn displays_in_upper_case() {
        assert_eq!(Status::Running.to_string(), "RUNNING");
        assert_eq!(Status::Failure.as_ref(), "FAILURE");
    }
}
