//! Error types for command tree operations.
//!
//! Construction problems surface as [`CommandError::InvalidConfiguration`]
//! carrying a [`ConfigurationIssue`]; execution problems surface as
//! [`CommandError::NoExecutor`] or [`CommandError::ExecutorFailed`]. The
//! remaining variants belong to the configuration file layer.

use thiserror::Error;

use crate::node::CommandPath;

/// Boxed error returned by an executor.
pub type ExecutorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A naming or delimiter problem detected while building a tree.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{CommandError, CommandNode, ConfigurationIssue};
///
/// let err = CommandNode::root("").unwrap_err();
/// assert!(matches!(
///     err,
///     CommandError::InvalidConfiguration(ConfigurationIssue::EmptyDelimiter)
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationIssue {
    /// The tree delimiter is the empty string.
    #[error("delimiter cannot be empty")]
    EmptyDelimiter,
    /// A child command was given an empty name.
    #[error("command name cannot be empty")]
    EmptyName,
    /// A child name contains the delimiter, so tokenization can never produce it.
    #[error("command name {name:?} contains the delimiter {delimiter:?}")]
    NameContainsDelimiter { name: String, delimiter: String },
    /// A sibling with the same name is already registered.
    #[error("duplicate command {name:?} under {parent}")]
    DuplicateChild { name: String, parent: CommandPath },
}

/// Errors that can occur while building, configuring or executing a tree.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationIssue),

    /// Resolution ended at a node without an executor.
    #[error("command {path} has no executor")]
    NoExecutor { path: CommandPath },

    /// The resolved executor reported an error.
    #[error("command {path} failed: {source}")]
    ExecutorFailed {
        path: CommandPath,
        #[source]
        source: ExecutorError,
    },

    /// Config file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns the configuration issue, if this is a construction error.
    pub fn configuration_issue(&self) -> Option<&ConfigurationIssue> {
        match self {
            Self::InvalidConfiguration(issue) => Some(issue),
            _ => None,
        }
    }

    /// Returns the path of the resolved command for execution errors.
    pub fn command_path(&self) -> Option<&CommandPath> {
        match self {
            Self::NoExecutor { path } | Self::ExecutorFailed { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience alias for results with [`CommandError`].
pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_failed_preserves_source() {
        let err = CommandError::ExecutorFailed {
            path: CommandPath::from_names(["help", "sqrt"]),
            source: "negative input".into(),
        };

        assert_eq!(err.to_string(), "command help sqrt failed: negative input");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "negative input");
    }

    #[test]
    fn test_configuration_issue_accessor() {
        let err = CommandError::from(ConfigurationIssue::EmptyName);
        assert_eq!(err.configuration_issue(), Some(&ConfigurationIssue::EmptyName));
        assert!(err.command_path().is_none());
    }

    #[test]
    fn test_no_executor_message_names_path() {
        let err = CommandError::NoExecutor {
            path: CommandPath::from_names(["", "remote"]),
        };
        assert_eq!(err.to_string(), "command remote has no executor");
    }
}
