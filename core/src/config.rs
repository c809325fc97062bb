//! Tree configuration loaded from YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! delimiter: " "
//! name: help
//! ```
//!
//! Missing fields fall back to [`TreeConfig::default`]: a single-space
//! delimiter and an unnamed root.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::executor::Executor;
use crate::node::CommandNode;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = " ";

/// Settings for building a tree root.
///
/// # Examples
///
/// ```
/// use cmdtree_core::TreeConfig;
///
/// let config: TreeConfig = serde_yaml::from_str("delimiter: \"/\"").unwrap();
/// let root = config.root().unwrap();
/// assert_eq!(root.delimiter(), "/");
/// assert_eq!(root.name(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Token separator for the whole tree.
    pub delimiter: String,
    /// Name of the root command.
    pub name: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            name: String::new(),
        }
    }
}

impl TreeConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::CommandError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::CommandError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::CommandError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::CommandError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Builds a host-only root with the configured name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::CommandError::InvalidConfiguration)
    /// if the delimiter is empty.
    pub fn root(&self) -> Result<CommandNode> {
        CommandNode::host(&self.delimiter, &self.name)
    }

    /// Builds a root with the configured name and `executor`.
    ///
    /// # Errors
    ///
    /// Same as [`root`](Self::root).
    pub fn command<E>(&self, executor: Option<E>) -> Result<CommandNode>
    where
        E: Executor + 'static,
    {
        CommandNode::command(&self.delimiter, &self.name, executor)
    }
}
