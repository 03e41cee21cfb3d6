//! Builder for [`EnvTree`].
//!
//! The builder carries the filter pattern, the delimiter and, optionally, an
//! explicit snapshot. Without a snapshot, [`EnvTreeBuilder::build`] reads the
//! process environment.

use regex::Regex;

use super::EnvTree;
use crate::error::EnvResult;
use crate::snapshot::{Snapshot, process_vars};

/// Builder for [`EnvTree`].
///
/// # Examples
///
/// ```
/// use envtree::EnvTree;
///
/// let tree = EnvTree::builder("^SVC", "__")
///     .var("SVC__HTTP__PORT", "8080")
///     .var("OTHER__PORT", "1")
///     .build()?;
/// assert_eq!(tree.children_keys(&["SVC"])?, vec!["HTTP".to_owned()]);
/// # Ok::<(), envtree::EnvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnvTreeBuilder {
    filter: String,
    delimiter: String,
    vars: Option<Snapshot>,
}

impl EnvTreeBuilder {
    /// Creates a builder keeping keys that match `filter`, split on
    /// `delimiter`.
    #[must_use]
    pub fn new(filter: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            delimiter: delimiter.into(),
            vars: None,
        }
    }

    /// Uses `vars` instead of the process environment.
    ///
    /// Replaces any entries added before.
    #[must_use]
    pub fn vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Adds a single entry to the explicit snapshot, starting one if needed.
    #[must_use]
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars
            .get_or_insert_with(Snapshot::new)
            .insert(key.into(), value.into());
        self
    }

    /// Compiles the filter and builds the tree.
    ///
    /// The filter is compiled before the environment is read, so an invalid
    /// pattern never produces a partial tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvError::Regex`] for an invalid filter and
    /// [`crate::EnvError::DuplicateKey`] when two entries share a path.
    pub fn build(self) -> EnvResult<EnvTree> {
        let filter = Regex::new(&self.filter)?;
        let vars = self.vars.unwrap_or_else(process_vars);
        EnvTree::from_regex(&vars, &filter, &self.delimiter)
    }
}
