//! Hierarchical access to environment variables.
//!
//! [`EnvTree`] splits variable names on a delimiter so that `APP_DB_PORT`
//! can be read as `APP -> DB -> PORT`, the same way a nested configuration
//! file would be. A tree value is a cursor: [`EnvTree::sub_tree`] returns
//! another cursor over the same shared nodes rather than a copy.
//!
//! # Examples
//!
//! ```
//! use envtree::EnvTree;
//!
//! let vars = [("APP_DB_PORT", "5432"), ("APP_DB_HOST", "db"), ("HOME", "/root")];
//! let tree = EnvTree::from_vars(vars, "^APP_", "_")?;
//!
//! assert_eq!(tree.find_int(&["APP", "DB", "PORT"])?, 5432);
//!
//! let db = tree.sub_tree(&["APP", "DB"])?;
//! assert_eq!(db.find_string(&["HOST"])?, "db");
//! # Ok::<(), envtree::EnvError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{EnvError, EnvResult};
use crate::node::{Node, build};
use crate::scalar::{FromEnvValue, coerce};

mod builder;

pub use builder::EnvTreeBuilder;

/// A cursor over an immutable tree of environment variables.
///
/// Cloning is cheap and every clone, like every sub-tree, shares the nodes
/// of the tree it came from. Cursors are `Send` and `Sync`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvTree {
    node: Arc<Node>,
    delimiter: Arc<str>,
}

impl fmt::Debug for EnvTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvTree")
            .field("key", &self.node.key())
            .field("value", &self.node.value())
            .field("children", &self.node.children().len())
            .field("delimiter", &&*self.delimiter)
            .finish()
    }
}

impl EnvTree {
    /// Builds a tree from the process environment.
    ///
    /// Keys are kept when they match `filter` and are split on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Regex`] when `filter` is not a valid pattern and
    /// [`EnvError::DuplicateKey`] when two entries share a path.
    pub fn new(filter: &str, delimiter: &str) -> EnvResult<Self> {
        Self::builder(filter, delimiter).build()
    }

    /// Builds a tree from an explicit snapshot instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`EnvTree::new`].
    pub fn from_vars<I, K, V>(vars: I, filter: &str, delimiter: &str) -> EnvResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pattern = Regex::new(filter)?;
        Self::from_regex(vars, &pattern, delimiter)
    }

    /// Starts an [`EnvTreeBuilder`].
    #[must_use]
    pub fn builder(filter: impl Into<String>, delimiter: impl Into<String>) -> EnvTreeBuilder {
        EnvTreeBuilder::new(filter, delimiter)
    }

    pub(crate) fn from_regex<I, K, V>(vars: I, filter: &Regex, delimiter: &str) -> EnvResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let root = build::build_tree(vars, filter, delimiter)?;
        Ok(Self {
            node: Arc::new(root),
            delimiter: Arc::from(delimiter),
        })
    }

    fn cursor(&self, node: &Arc<Node>) -> Self {
        Self {
            node: Arc::clone(node),
            delimiter: Arc::clone(&self.delimiter),
        }
    }

    /// The node this cursor points at.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Key of the current node; empty for the root of a freshly built tree.
    #[must_use]
    pub fn key(&self) -> &str {
        self.node.key()
    }

    /// Delimiter the tree was built with.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn lookup<S: AsRef<str>>(&self, key_chain: &[S]) -> Option<&Arc<Node>> {
        self.node.find_node_by_key_chain(key_chain)
    }

    fn lookup_or_fail<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<&Arc<Node>> {
        self.lookup(key_chain)
            .ok_or_else(|| EnvError::node_not_found(key_chain))
    }

    /// Reads the value at `key_chain` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotFound`] when no node with a value sits at
    /// `key_chain`, and [`EnvError::WrongType`] when the value does not
    /// coerce to `T`.
    pub fn find<T: FromEnvValue, S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<T> {
        coerce(self.lookup(key_chain).and_then(|node| node.value()))
    }

    /// Reads the value at `key_chain` as a string.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::find`].
    pub fn find_string<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<String> {
        self.find(key_chain)
    }

    /// Reads the value at `key_chain` as an integer.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::find`].
    pub fn find_int<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<i64> {
        self.find(key_chain)
    }

    /// Reads the value at `key_chain` as a single-precision float.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::find`].
    pub fn find_float<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<f32> {
        self.find(key_chain)
    }

    /// Reads the value at `key_chain` as a boolean.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::find`].
    pub fn find_bool<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<bool> {
        self.find(key_chain)
    }

    /// Reads the current node's own value as `T`.
    ///
    /// Useful after [`EnvTree::sub_tree`] has already walked to a leaf.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotFound`] when the current node has no value and
    /// [`EnvError::WrongType`] when the value does not coerce to `T`.
    pub fn get<T: FromEnvValue>(&self) -> EnvResult<T> {
        coerce(self.node.value())
    }

    /// Reads the current node's own value as a string.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::get`].
    pub fn get_string(&self) -> EnvResult<String> {
        self.get()
    }

    /// Reads the current node's own value as an integer.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::get`].
    pub fn get_int(&self) -> EnvResult<i64> {
        self.get()
    }

    /// Reads the current node's own value as a single-precision float.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::get`].
    pub fn get_float(&self) -> EnvResult<f32> {
        self.get()
    }

    /// Reads the current node's own value as a boolean.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::get`].
    pub fn get_bool(&self) -> EnvResult<bool> {
        self.get()
    }

    /// Whether a node exists at `key_chain`, with or without a value.
    #[must_use]
    pub fn exists<S: AsRef<str>>(&self, key_chain: &[S]) -> bool {
        self.lookup(key_chain).is_some()
    }

    /// Whether the node at `key_chain` carries a value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NodeNotFound`] when there is no node at
    /// `key_chain`.
    pub fn has_value<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<bool> {
        self.lookup_or_fail(key_chain).map(|node| node.has_value())
    }

    /// Whether the current node carries a value.
    #[must_use]
    pub fn has_own_value(&self) -> bool {
        self.node.has_value()
    }

    /// Keys of the children of the node at `key_chain`, in tree order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NodeNotFound`] when there is no node at
    /// `key_chain`.
    pub fn children_keys<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<Vec<String>> {
        self.lookup_or_fail(key_chain).map(|node| child_keys(node))
    }

    /// Keys of the current node's children, in tree order.
    #[must_use]
    pub fn own_children_keys(&self) -> Vec<String> {
        child_keys(&self.node)
    }

    /// Returns a cursor positioned at `key_chain`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NodeNotFound`] when there is no node at
    /// `key_chain`.
    pub fn sub_tree<S: AsRef<str>>(&self, key_chain: &[S]) -> EnvResult<Self> {
        self.lookup_or_fail(key_chain)
            .map(|node| self.cursor(node))
    }

    /// Returns a cursor for every descendant keyed `key`, shallowest first.
    ///
    /// When `only_with_value` is set, nodes without a value are skipped.
    #[must_use]
    pub fn find_all(&self, key: &str, only_with_value: bool) -> Vec<Self> {
        self.node
            .find_all_nodes_by_key(key, only_with_value)
            .into_iter()
            .map(|node| self.cursor(node))
            .collect()
    }
}

fn child_keys(node: &Node) -> Vec<String> {
    node.children()
        .iter()
        .map(|child| child.key().to_owned())
        .collect()
}
