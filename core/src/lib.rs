//! Command tree construction, resolution and dispatch.
//!
//! This crate lets a caller build a hierarchy of named commands and run an
//! input string against it:
//!
//! - [`CommandNode`]: a tree vertex with a name, an optional [`Executor`],
//!   and uniquely named children. The delimiter is fixed at the root and
//!   shared by the whole tree.
//! - [`resolve`]: splits input on the delimiter and descends through
//!   exactly matching child names, greedily and without backtracking.
//! - [`execute`]: runs the deepest matched command with the remaining
//!   tokens, rejoined by single delimiters, as its argument.
//! - [`render`]: an indented, deterministic text form of a subtree.
//!
//! Construction is validated ([`ConfigurationIssue`]): delimiters and names
//! must be non-empty, names must not contain the delimiter, and sibling
//! names are unique. A duplicate registration is rejected.
//!
//! # Example
//!
//! ```
//! use cmdtree_core::*;
//!
//! let mut root = CommandNode::root(" ")?;
//! let remote = root.add_host("remote")?;
//! remote.add_child("add", Some(|arg: &str| {
//!     assert_eq!(arg, "origin https://example.invalid");
//!     Ok::<(), std::io::Error>(())
//! }))?;
//!
//! root.execute("remote add  origin https://example.invalid")?;
//! assert!(matches!(root.execute("remote"), Err(CommandError::NoExecutor { .. })));
//! assert_eq!(root.render(), "\n\tremote\n\t\tadd\n");
//! # Ok::<(), CommandError>(())
//! ```

mod config;
mod dispatch;
mod error;
pub mod executor;
mod node;
mod render;
mod resolve;
mod validate;

pub use config::{DEFAULT_DELIMITER, TreeConfig};
pub use dispatch::execute;
pub use error::{CommandError, ConfigurationIssue, ExecutorError, Result};
pub use executor::Executor;
pub use node::{CommandNode, CommandPath};
pub use render::{INDENT, TreeSnapshot, render};
pub use resolve::{Resolution, join_tokens, resolve, tokenize};
pub use validate::{validate_child_name, validate_delimiter};
