//! Tokenization and greedy descent through a command tree.
//!
//! Input is split on the tree delimiter into non-empty tokens. Starting at
//! a node, the next token is compared with the names of the current node's
//! children; on an exact match the resolver descends and consumes it,
//! otherwise it stops. There is no backtracking. The starting node's own
//! name is never matched.

use tracing::debug;

use crate::node::CommandNode;

/// Splits `input` on `delimiter`, dropping empty tokens.
///
/// Consecutive, leading and trailing delimiters produce no tokens.
///
/// # Examples
///
/// ```
/// use cmdtree_core::tokenize;
///
/// assert_eq!(tokenize("  deep   cmdtree internals ", " "), vec!["deep", "cmdtree", "internals"]);
/// assert!(tokenize("", " ").is_empty());
/// ```
pub fn tokenize<'a>(input: &'a str, delimiter: &str) -> Vec<&'a str> {
    input
        .split(delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Joins tokens with exactly one delimiter between them.
pub fn join_tokens(tokens: &[&str], delimiter: &str) -> String {
    tokens.join(delimiter)
}

/// Outcome of resolving an input against a tree.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// Deepest node reached by descent.
    pub node: &'a CommandNode,
    /// Number of tokens consumed by descent.
    pub consumed: usize,
    /// Unconsumed tokens rejoined with single delimiters.
    pub argument: String,
}

/// Resolves `input` starting from `start`.
///
/// # Examples
///
/// ```
/// use cmdtree_core::{CommandNode, resolve};
///
/// let mut root = CommandNode::root(" ").unwrap();
/// root.add_host("remote").unwrap().add_host("add").unwrap();
///
/// let resolution = resolve(&root, "remote  add origin   https://example.invalid");
/// assert_eq!(resolution.node.name(), "add");
/// assert_eq!(resolution.consumed, 2);
/// assert_eq!(resolution.argument, "origin https://example.invalid");
/// ```
pub fn resolve<'a>(start: &'a CommandNode, input: &str) -> Resolution<'a> {
    let delimiter = start.delimiter();
    let tokens = tokenize(input, delimiter);

    let mut node = start;
    let mut consumed = 0;
    while let Some(next) = tokens.get(consumed).and_then(move |token| node.child(token)) {
        debug!(from = %node.path(), to = next.name(), "descending");
        node = next;
        consumed += 1;
    }

    Resolution {
        node,
        consumed,
        argument: join_tokens(&tokens[consumed..], delimiter),
    }
}

impl CommandNode {
    /// Resolves `input` from this node without executing anything.
    ///
    /// See [`resolve`].
    pub fn resolve(&self, input: &str) -> Resolution<'_> {
        resolve(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::noop;

    fn git_tree() -> CommandNode {
        let mut root = CommandNode::command(" ", "git", Some(noop())).unwrap();
        let remote = root.add_host("remote").unwrap();
        remote.add_child("add", Some(noop())).unwrap();
        remote.add_child("remove", Some(noop())).unwrap();
        root.add_child("commit", Some(noop())).unwrap();
        root
    }

    #[test]
    fn test_tokenize_collapses_delimiters() {
        assert_eq!(tokenize(",,a,,b,", ","), vec!["a", "b"]);
        assert_eq!(tokenize("a::b:c", "::"), vec!["a", "b:c"]);
        assert!(tokenize("   ", " ").is_empty());
    }

    #[test]
    fn test_resolve_empty_input_stays_at_start() {
        let tree = git_tree();
        let resolution = tree.resolve("");
        assert_eq!(resolution.node.name(), "git");
        assert_eq!(resolution.consumed, 0);
        assert_eq!(resolution.argument, "");
    }

    #[test]
    fn test_resolve_descends_greedily() {
        let tree = git_tree();
        let resolution = tree.resolve("remote add origin url");
        assert_eq!(resolution.node.path().to_string(), "git remote add");
        assert_eq!(resolution.argument, "origin url");
    }

    #[test]
    fn test_resolve_stops_at_first_non_matching_token() {
        let tree = git_tree();
        let resolution = tree.resolve("remote origin add");
        assert_eq!(resolution.node.name(), "remote");
        assert_eq!(resolution.consumed, 1);
        assert_eq!(resolution.argument, "origin add");

        let resolution = tree.resolve("push remote add");
        assert_eq!(resolution.node.name(), "git");
        assert_eq!(resolution.argument, "push remote add");
    }

    #[test]
    fn test_resolve_never_matches_own_name() {
        let tree = git_tree();
        let resolution = tree.resolve("git commit");
        assert_eq!(resolution.node.name(), "git");
        assert_eq!(resolution.argument, "git commit");
    }

    #[test]
    fn test_resolve_is_token_exact() {
        let tree = git_tree();
        assert_eq!(tree.resolve("commits").node.name(), "git");
        assert_eq!(tree.resolve("Commit").node.name(), "git");
        assert_eq!(tree.resolve("commit").node.name(), "commit");
    }

    #[test]
    fn test_resolve_exhausted_at_host() {
        let tree = git_tree();
        let resolution = tree.resolve("  remote  ");
        assert_eq!(resolution.node.name(), "remote");
        assert!(!resolution.node.is_executable());
        assert_eq!(resolution.argument, "");
    }

    #[test]
    fn test_argument_normalizes_delimiters() {
        let tree = git_tree();
        let resolution = tree.resolve("commit   -m    message  ");
        assert_eq!(resolution.argument, "-m message");
    }
}
