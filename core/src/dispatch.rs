//! Executing input against a command tree.

use tracing::debug;

use crate::error::{CommandError, Result};
use crate::node::CommandNode;
use crate::resolve::resolve;

/// Resolves `input` from `node` and runs the matched command's executor.
///
/// The executor runs synchronously with the argument string and its result
/// is returned without retries.
///
/// # Errors
///
/// - [`CommandError::NoExecutor`] if the matched node has no executor.
/// - [`CommandError::ExecutorFailed`] wrapping the executor's own error.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use cmdtree_core::{CommandError, CommandNode, execute};
///
/// let seen = std::sync::Arc::new(Mutex::new(String::new()));
/// let sink = seen.clone();
/// let root = CommandNode::command(
///     " ",
///     "help",
///     Some(move |arg: &str| {
///         *sink.lock().unwrap() = format!("You requested help for \"{arg}\"");
///         Ok::<(), std::io::Error>(())
///     }),
/// )
/// .unwrap();
///
/// execute(&root, "cmdtree").unwrap();
/// assert_eq!(*seen.lock().unwrap(), "You requested help for \"cmdtree\"");
///
/// let host = CommandNode::root(" ").unwrap();
/// assert!(matches!(execute(&host, "anything"), Err(CommandError::NoExecutor { .. })));
/// ```
pub fn execute(node: &CommandNode, input: &str) -> Result<()> {
    let resolution = resolve(node, input);
    let matched = resolution.node;

    let Some(executor) = matched.executor() else {
        debug!(path = %matched.path(), "resolved command has no executor");
        return Err(CommandError::NoExecutor {
            path: matched.path().clone(),
        });
    };

    debug!(
        path = %matched.path(),
        argument = %resolution.argument,
        "executing command"
    );
    executor
        .execute(matched, &resolution.argument)
        .map_err(|source| CommandError::ExecutorFailed {
            path: matched.path().clone(),
            source,
        })
}

impl CommandNode {
    /// Resolves and executes `input` from this node.
    ///
    /// See [`execute`].
    pub fn execute(&self, input: &str) -> Result<()> {
        execute(self, input)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::ExecutorError;
    use crate::executor::noop;
    use crate::node::CommandPath;

    type Calls = Arc<Mutex<Vec<(String, String)>>>;

    fn recorder(
        calls: Calls,
        label: &'static str,
    ) -> impl Fn(&str) -> std::result::Result<(), ExecutorError> + Send + Sync + 'static {
        move |arg: &str| {
            calls.lock().unwrap().push((label.to_string(), arg.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_execute_runs_deepest_executor_once() {
        let calls = Calls::default();
        let help = recorder(Arc::clone(&calls), "help");
        let mut root = CommandNode::command(" ", "help", Some(help)).unwrap();
        root.add_child("deep", Some(recorder(Arc::clone(&calls), "deep")))
            .unwrap();

        root.execute("deep cmdtree  internals").unwrap();
        assert_eq!(
            *calls.lock().unwrap(),
            vec![("deep".to_string(), "cmdtree internals".to_string())]
        );
    }

    #[test]
    fn test_execute_host_reports_no_executor_path() {
        let mut root = CommandNode::root(" ").unwrap();
        root.add_host("remote").unwrap();

        let err = root.execute("remote list").unwrap_err();
        match err {
            CommandError::NoExecutor { path } => {
                assert_eq!(path, CommandPath::from_names(["", "remote"]));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_execute_inert_node_fails() {
        let mut root = CommandNode::command(" ", "app", Some(noop())).unwrap();
        root.add_host("empty").unwrap();

        assert!(matches!(
            root.execute("empty"),
            Err(CommandError::NoExecutor { .. })
        ));
    }

    #[test]
    fn test_execute_wraps_executor_error() {
        let root = CommandNode::command(
            " ",
            "fail",
            Some(|arg: &str| Err::<(), _>(format!("bad argument {arg}"))),
        )
        .unwrap();

        let err = root.execute("x").unwrap_err();
        assert_eq!(err.to_string(), "command fail failed: bad argument x");
        assert_eq!(err.command_path(), Some(&CommandPath::from_names(["fail"])));
    }
}
