//! Naming invariants enforced while a tree is built.
//!
//! A delimiter must be non-empty. A child name must be non-empty, must not
//! contain the delimiter (tokenization could never produce it), and must be
//! unique among its siblings.

use crate::error::ConfigurationIssue;
use crate::node::CommandNode;

/// Checks that a tree delimiter is usable.
pub fn validate_delimiter(delimiter: &str) -> Result<(), ConfigurationIssue> {
    if delimiter.is_empty() {
        return Err(ConfigurationIssue::EmptyDelimiter);
    }
    Ok(())
}

/// Checks that `name` can be registered as a child of `parent`.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{CommandNode, ConfigurationIssue, validate_child_name};
///
/// let root = CommandNode::root(" ").unwrap();
/// assert!(validate_child_name(&root, "remote").is_ok());
/// assert_eq!(
///     validate_child_name(&root, ""),
///     Err(ConfigurationIssue::EmptyName)
/// );
/// assert!(matches!(
///     validate_child_name(&root, "remote add"),
///     Err(ConfigurationIssue::NameContainsDelimiter { .. })
/// ));
/// ```
pub fn validate_child_name(parent: &CommandNode, name: &str) -> Result<(), ConfigurationIssue> {
    if name.is_empty() {
        return Err(ConfigurationIssue::EmptyName);
    }

    let delimiter = parent.delimiter();
    if name.contains(delimiter) {
        return Err(ConfigurationIssue::NameContainsDelimiter {
            name: name.to_string(),
            delimiter: delimiter.to_string(),
        });
    }

    if parent.child(name).is_some() {
        return Err(ConfigurationIssue::DuplicateChild {
            name: name.to_string(),
            parent: parent.path().clone(),
        });
    }

    Ok(())
}
