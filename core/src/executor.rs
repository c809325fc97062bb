//! The executor capability attached to command nodes.
//!
//! Any `Fn(&str) -> Result<(), E>` closure is an [`Executor`]. Closures that
//! also need the command they were resolved to (to render its children, for
//! instance) are wrapped with [`with_node`].

use crate::error::ExecutorError;
use crate::node::CommandNode;

/// Behavior invoked with the unconsumed argument string of a resolution.
///
/// Implementations must be `Send + Sync` so a finished tree can be shared
/// across threads; the tree itself performs no locking around calls.
pub trait Executor: Send + Sync {
    /// Runs the command. `node` is the resolved command node.
    fn execute(&self, node: &CommandNode, argument: &str) -> Result<(), ExecutorError>;
}

impl<F, E> Executor for F
where
    F: Fn(&str) -> Result<(), E> + Send + Sync,
    E: Into<ExecutorError>,
{
    fn execute(&self, _node: &CommandNode, argument: &str) -> Result<(), ExecutorError> {
        self(argument).map_err(Into::into)
    }
}

/// Executor adapter that also receives the resolved node.
///
/// Created by [`with_node`].
pub struct NodeAware<F>(F);

impl<F, E> Executor for NodeAware<F>
where
    F: Fn(&CommandNode, &str) -> Result<(), E> + Send + Sync,
    E: Into<ExecutorError>,
{
    fn execute(&self, node: &CommandNode, argument: &str) -> Result<(), ExecutorError> {
        (self.0)(node, argument).map_err(Into::into)
    }
}

/// Wraps a closure that needs the resolved node as well as the argument.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{CommandNode, executor};
///
/// let mut root = CommandNode::root(" ").unwrap();
/// root.add_child(
///     "with",
///     Some(executor::with_node(|node: &CommandNode, _arg: &str| {
///         assert_eq!(node.name(), "with");
///         Ok::<(), std::io::Error>(())
///     })),
/// )
/// .unwrap();
///
/// root.execute("with").unwrap();
/// ```
pub fn with_node<F, E>(f: F) -> NodeAware<F>
where
    F: Fn(&CommandNode, &str) -> Result<(), E> + Send + Sync,
    E: Into<ExecutorError>,
{
    NodeAware(f)
}

/// Executor that accepts any argument and does nothing.
pub fn noop() -> impl Executor {
    |_: &str| Ok::<(), ExecutorError>(())
}
