//! Immutable nodes of an environment tree.
//!
//! A node carries a key, an optional value and an ordered list of children
//! with pairwise-distinct keys. Nodes are assembled in a private
//! mutable form and frozen into [`Arc`]-shared values once, so every reader
//! sees the same graph and nothing can change it afterwards.

use std::collections::VecDeque;
use std::sync::Arc;

pub(crate) mod build;

/// A frozen tree node.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Node {
    key: String,
    value: Option<String>,
    children: Vec<Arc<Self>>,
}

impl Node {
    /// Key of this node; the root's key is empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value carried by this node, if any. The empty string is a value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this node carries a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Arc<Self>] {
        &self.children
    }

    /// Finds the immediate child keyed `key`.
    #[must_use]
    pub fn find_child_by_key(&self, key: &str) -> Option<&Arc<Self>> {
        self.children.iter().find(|child| child.key == key)
    }

    /// Follows `key_chain` one child at a time.
    ///
    /// Returns `None` as soon as a component is missing. An empty chain never
    /// resolves, not even to `self`.
    #[must_use]
    pub fn find_node_by_key_chain<S: AsRef<str>>(&self, key_chain: &[S]) -> Option<&Arc<Self>> {
        let (first, rest) = key_chain.split_first()?;
        rest.iter().try_fold(
            self.find_child_by_key(first.as_ref())?,
            |current, key| current.find_child_by_key(key.as_ref()),
        )
    }

    /// Collects every descendant keyed `key`, level by level.
    ///
    /// Matches at shallower depths come first; within a level, matches keep
    /// sibling order. `self` is never part of the result. When
    /// `only_with_value` is set, nodes without a value are skipped.
    #[must_use]
    pub fn find_all_nodes_by_key(&self, key: &str, only_with_value: bool) -> Vec<&Arc<Self>> {
        let mut found = Vec::new();
        let mut pending: VecDeque<&Arc<Self>> = self.children.iter().collect();
        while let Some(node) = pending.pop_front() {
            if node.key == key && (!only_with_value || node.has_value()) {
                found.push(node);
            }
            pending.extend(node.children.iter());
        }
        found
    }
}
