//! Textual and structural views of a command tree.
//!
//! [`render`] produces the indented text form used for help and
//! diagnostics: each node's name on its own line, children in attachment
//! order, one tab per depth level. [`TreeSnapshot`] is the same structure
//! as serializable data. Neither ever invokes an executor.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::CommandNode;

/// Indentation unit for one depth level.
pub const INDENT: &str = "\t";

/// Renders `node` and its descendants.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{CommandNode, render};
///
/// let mut root = CommandNode::root(" ").unwrap();
/// root.add_host("with").unwrap().add_host("life").unwrap();
/// root.add_host("deep").unwrap();
///
/// assert_eq!(render(root.child("with").unwrap()), "with\n\tlife\n");
/// assert_eq!(render(&root), "\n\twith\n\t\tlife\n\tdeep\n");
/// ```
pub fn render(node: &CommandNode) -> String {
    let mut out = String::new();
    render_into(&mut out, node, 0);
    out
}

fn render_into(out: &mut String, node: &CommandNode, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(node.name());
    out.push('\n');
    for child in node.children() {
        render_into(out, child, depth + 1);
    }
}

/// Serializable copy of a tree's structure.
///
/// # Examples
///
/// ```
/// use cmdtree_core::CommandNode;
///
/// let mut root = CommandNode::root(" ").unwrap();
/// root.add_host("remote").unwrap();
///
/// let snapshot = root.snapshot();
/// assert_eq!(snapshot.children[0].name, "remote");
/// assert!(!snapshot.executable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Node name (empty for an unnamed root).
    pub name: String,
    /// Whether the node carries an executor.
    pub executable: bool,
    /// Children in attachment order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    /// Captures the structure below `node`.
    pub fn capture(node: &CommandNode) -> Self {
        Self {
            name: node.name().to_string(),
            executable: node.is_executable(),
            children: node.children().iter().map(Self::capture).collect(),
        }
    }

    /// Total number of nodes in the snapshot.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Json`](crate::CommandError::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl CommandNode {
    /// Renders this node and its descendants. See [`render`].
    pub fn render(&self) -> String {
        render(self)
    }

    /// Captures a [`TreeSnapshot`] of this node and its descendants.
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::noop;

    fn sample() -> CommandNode {
        let mut root = CommandNode::command(" ", "help", Some(noop())).unwrap();
        let with = root.add_host("with").unwrap();
        for name in ["cmdtree", "life", "sleep"] {
            with.add_child(name, Some(noop())).unwrap();
        }
        root.add_child("deep", Some(noop())).unwrap();
        root
    }

    #[test]
    fn test_render_leaf_is_just_name() {
        let leaf = CommandNode::command(" ", "solo", Some(noop())).unwrap();
        assert_eq!(leaf.render(), "solo\n");
    }

    #[test]
    fn test_render_nested_attachment_order() {
        let tree = sample();
        assert_eq!(
            tree.render(),
            "help\n\twith\n\t\tcmdtree\n\t\tlife\n\t\tsleep\n\tdeep\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = sample();
        assert_eq!(tree.render(), tree.render());
    }

    #[test]
    fn test_render_does_not_invoke_executors() {
        let root = CommandNode::command(
            " ",
            "boom",
            Some(|_: &str| -> std::result::Result<(), String> { panic!("executor ran") }),
        )
        .unwrap();
        assert_eq!(root.render(), "boom\n");
        assert_eq!(root.snapshot().name, "boom");
    }

    #[test]
    fn test_snapshot_mirrors_tree() {
        let snapshot = sample().snapshot();
        assert_eq!(snapshot.node_count(), 6);
        assert!(snapshot.executable);
        assert!(!snapshot.children[0].executable);
        let names: Vec<&str> = snapshot.children[0]
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["cmdtree", "life", "sleep"]);
    }

    #[test]
    fn test_snapshot_json_omits_empty_children() {
        let leaf = CommandNode::command(" ", "solo", Some(noop())).unwrap();
        let json = leaf.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "solo");
        assert_eq!(value["executable"], true);
        assert!(value.get("children").is_none());
    }
}
