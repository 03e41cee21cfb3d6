//! Builds a frozen [`Node`] tree from a flat snapshot.

use std::sync::Arc;

use regex::Regex;

use super::Node;
use crate::error::{EnvError, EnvResult, owned_chain};

/// Mutable node used only while the tree is being assembled.
#[derive(Debug, Default)]
pub(crate) struct Draft {
    key: String,
    value: Option<String>,
    children: Vec<Self>,
}

impl Draft {
    fn named(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            ..Self::default()
        }
    }

    /// Returns the child keyed `key`, appending a new one when absent.
    #[expect(
        clippy::indexing_slicing,
        reason = "index comes from position() or from the push just above"
    )]
    fn child_mut(&mut self, key: &str) -> &mut Self {
        let index = if let Some(found) = self.children.iter().position(|child| child.key == key) {
            found
        } else {
            self.children.push(Self::named(key));
            self.children.len() - 1
        };
        &mut self.children[index]
    }

    /// Converts the draft into shared immutable nodes, bottom-up.
    pub(crate) fn freeze(self) -> Node {
        Node {
            key: self.key,
            value: self.value,
            children: self
                .children
                .into_iter()
                .map(|child| Arc::new(child.freeze()))
                .collect(),
        }
    }
}

/// Stores `value` at the node reached by `components`, creating
/// intermediate nodes on the way.
///
/// # Errors
///
/// Returns [`EnvError::DuplicateKey`] when the terminal node already carries
/// a value.
pub(crate) fn insert_path(root: &mut Draft, components: &[&str], value: &str) -> EnvResult<()> {
    let terminal = components
        .iter()
        .fold(root, |current, component| current.child_mut(component));
    if terminal.value.is_some() {
        return Err(EnvError::DuplicateKey {
            key_chain: owned_chain(components),
        });
    }
    terminal.value = Some(value.to_owned());
    Ok(())
}

/// Splits `key` on `delimiter`. An empty delimiter leaves the key whole.
pub(crate) fn split_key<'a>(key: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        vec![key]
    } else {
        key.split(delimiter).collect()
    }
}

/// Builds a tree from every entry of `vars` whose key matches `filter`.
///
/// Entries are inserted in key order so the shape of the result, and the
/// path reported by a duplicate, never depend on the iteration order of
/// `vars`.
///
/// # Errors
///
/// Returns [`EnvError::DuplicateKey`] when two entries share a path.
pub(crate) fn build_tree<I, K, V>(vars: I, filter: &Regex, delimiter: &str) -> EnvResult<Node>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut scanned = 0_usize;
    let mut entries: Vec<(K, V)> = vars
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|(key, _)| filter.is_match(key.as_ref()))
        .collect();
    entries.sort_by(|(left, _), (right, _)| left.as_ref().cmp(right.as_ref()));

    let mut root = Draft::default();
    for (key, value) in &entries {
        insert_path(&mut root, &split_key(key.as_ref(), delimiter), value.as_ref())?;
    }
    tracing::debug!(
        scanned,
        matched = entries.len(),
        filter = filter.as_str(),
        delimiter,
        "built environment tree"
    );
    Ok(root.freeze())
}
