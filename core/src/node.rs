//! Command nodes and tree construction.
//!
//! A tree is rooted at one [`CommandNode`] that owns its children
//! transitively. The delimiter is fixed when the root is created and shared
//! by every node below it. Each node records its [`CommandPath`]; the
//! parent of a node is identified by that path's prefix rather than by a
//! pointer, so the tree never holds ownership cycles.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::executor::Executor;
use crate::validate::{validate_child_name, validate_delimiter};

/// Names from the root of a tree down to a node, root first.
///
/// The root's own name may be empty; it is skipped when the path is
/// displayed.
///
/// # Examples
///
/// ```
/// use cmdtree_core::CommandPath;
///
/// let path = CommandPath::from_names(["git", "remote", "add"]);
/// assert_eq!(path.to_string(), "git remote add");
/// assert_eq!(path.parent().unwrap().to_string(), "git remote");
///
/// let unnamed = CommandPath::from_names([""]);
/// assert_eq!(unnamed.to_string(), "<root>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    /// Creates a path from a sequence of names, root first.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Returns the names in this path, root first.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of nodes on the path; a root's path has depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns the last name of the path.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns the path of the parent node, or `None` for a root.
    pub fn parent(&self) -> Option<CommandPath> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Returns this path extended by one child name.
    pub fn join(&self, name: &str) -> CommandPath {
        let mut names = self.0.clone();
        names.push(name.to_string());
        Self(names)
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut named = self.0.iter().filter(|n| !n.is_empty()).peekable();
        if named.peek().is_none() {
            return f.write_str("<root>");
        }
        for (i, name) in named.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// A vertex in a command tree.
///
/// A node may be executable (it carries an [`Executor`]), a host for
/// sub-commands, or both. A node with neither is inert: resolution can
/// reach it but executing it always fails with
/// [`NoExecutor`](crate::CommandError::NoExecutor).
///
/// Nodes are only created through the root constructors
/// ([`root`](Self::root), [`host`](Self::host), [`command`](Self::command))
/// or by attaching to an existing node ([`add_child`](Self::add_child),
/// [`add_host`](Self::add_host)). After creation only the child registry
/// grows.
///
/// # Examples
///
/// ```
/// use cmdtree_core::CommandNode;
///
/// let mut root = CommandNode::root(" ").unwrap();
/// let remote = root.add_host("remote").unwrap();
/// remote
///     .add_child("add", Some(|_: &str| Ok::<(), std::io::Error>(())))
///     .unwrap();
///
/// assert_eq!(root.child_names(), vec!["remote"]);
/// assert!(root.find(&["remote", "add"]).unwrap().is_executable());
/// ```
pub struct CommandNode {
    name: String,
    delimiter: Arc<str>,
    path: CommandPath,
    executor: Option<Box<dyn Executor>>,
    children: Vec<CommandNode>,
    index: HashMap<String, usize>,
}

impl CommandNode {
    /// Creates a host-only root with an empty name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::CommandError::InvalidConfiguration)
    /// if `delimiter` is empty.
    pub fn root(delimiter: &str) -> Result<Self> {
        Self::new_root(delimiter, "", None)
    }

    /// Creates a host-only root named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::CommandError::InvalidConfiguration)
    /// if `delimiter` is empty.
    pub fn host(delimiter: &str, name: &str) -> Result<Self> {
        Self::new_root(delimiter, name, None)
    }

    /// Creates a root named `name` that may itself be executable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::CommandError::InvalidConfiguration)
    /// if `delimiter` is empty.
    pub fn command<E>(delimiter: &str, name: &str, executor: Option<E>) -> Result<Self>
    where
        E: Executor + 'static,
    {
        Self::new_root(delimiter, name, executor.map(boxed))
    }

    fn new_root(
        delimiter: &str,
        name: &str,
        executor: Option<Box<dyn Executor>>,
    ) -> Result<Self> {
        validate_delimiter(delimiter)?;
        Ok(Self {
            name: name.to_string(),
            delimiter: Arc::from(delimiter),
            path: CommandPath::from_names([name]),
            executor,
            children: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Attaches a child command and returns it for further chaining.
    ///
    /// The child inherits this tree's delimiter. Registering a name that is
    /// already taken is rejected and leaves the existing child untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::CommandError::InvalidConfiguration)
    /// if `name` is empty, contains the delimiter, or duplicates a sibling.
    pub fn add_child<E>(&mut self, name: &str, executor: Option<E>) -> Result<&mut CommandNode>
    where
        E: Executor + 'static,
    {
        self.attach(name, executor.map(boxed))
    }

    /// Attaches a child without an executor, a pure host for sub-commands.
    ///
    /// # Errors
    ///
    /// Same as [`add_child`](Self::add_child).
    pub fn add_host(&mut self, name: &str) -> Result<&mut CommandNode> {
        self.attach(name, None)
    }

    fn attach(
        &mut self,
        name: &str,
        executor: Option<Box<dyn Executor>>,
    ) -> Result<&mut CommandNode> {
        validate_child_name(self, name)?;

        let child = CommandNode {
            name: name.to_string(),
            delimiter: Arc::clone(&self.delimiter),
            path: self.path.join(name),
            executor,
            children: Vec::new(),
            index: HashMap::new(),
        };
        debug!(path = %child.path, executable = child.executor.is_some(), "attached command");

        let slot = self.children.len();
        self.index.insert(name.to_string(), slot);
        self.children.push(child);
        Ok(&mut self.children[slot])
    }

    /// The token this node matches as a child.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The delimiter shared by every node of this tree.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Path from the root to this node.
    pub fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Path of the parent node, or `None` for a root.
    pub fn parent_path(&self) -> Option<CommandPath> {
        self.path.parent()
    }

    /// Whether this node carries an executor.
    pub fn is_executable(&self) -> bool {
        self.executor.is_some()
    }

    /// Whether this node has neither an executor nor children.
    pub fn is_inert(&self) -> bool {
        self.executor.is_none() && self.children.is_empty()
    }

    /// Looks up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.index.get(name).map(|&slot| &self.children[slot])
    }

    /// Looks up a direct child by exact name for attaching more commands.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut CommandNode> {
        let slot = *self.index.get(name)?;
        Some(&mut self.children[slot])
    }

    /// Direct children in attachment order.
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Names of the direct children in attachment order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Follows an exact chain of child names below this node.
    ///
    /// An empty chain returns this node.
    pub fn find<S: AsRef<str>>(&self, names: &[S]) -> Option<&CommandNode> {
        names
            .iter()
            .try_fold(self, |node, name| node.child(name.as_ref()))
    }

    pub(crate) fn executor(&self) -> Option<&dyn Executor> {
        self.executor.as_deref()
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("delimiter", &self.delimiter)
            .field("path", &self.path)
            .field("executable", &self.executor.is_some())
            .field("children", &self.children)
            .finish()
    }
}

fn boxed<E: Executor + 'static>(executor: E) -> Box<dyn Executor> {
    Box::new(executor)
}
