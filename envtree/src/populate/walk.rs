//! Worklist-driven population of records.

use std::collections::VecDeque;

use super::{Field, FieldMut, Populate, RECORD_KIND, SUPPORTED_KINDS, Strictness, WalkAction};
use crate::error::{EnvError, EnvResult};
use crate::node::build::split_key;
use crate::tree::EnvTree;

type Hook<'h> = dyn FnMut(&EnvTree, &[String], &mut FieldMut<'_>) -> EnvResult<WalkAction> + 'h;

impl EnvTree {
    /// Fills every field of `target` from this tree.
    ///
    /// Field paths start with the record name, so a record named `APP` with
    /// a nested `db` record reads `APP -> DB -> PORT` for `db.port`. Names
    /// containing the tree's delimiter span several components: with `_`,
    /// a `usage_limit` field reads `USAGE -> LIMIT`. When the
    /// record opts in with `#[envtree(walker)]`, its
    /// [`super::StructWalker`] runs first for every field.
    ///
    /// Population is not transactional: on error, fields assigned earlier
    /// keep their new values.
    ///
    /// # Errors
    ///
    /// - [`EnvError::WrongType`] when a value does not coerce to its field.
    /// - [`EnvError::NotFound`] for a missing variable in
    ///   [`Strictness::Strict`] mode.
    /// - [`EnvError::UnsupportedType`] for a field of an unsupported kind.
    /// - Any error returned by the walk hook.
    pub fn populate<T: Populate>(&self, target: &mut T, mode: Strictness) -> EnvResult<()> {
        self.populate_own(target, mode)
    }

    /// Like [`EnvTree::populate`], with `hook` in place of the record's own
    /// walk hook.
    ///
    /// # Errors
    ///
    /// See [`EnvTree::populate`].
    pub fn populate_with<T, F>(&self, target: &mut T, mode: Strictness, mut hook: F) -> EnvResult<()>
    where
        T: Populate,
        F: FnMut(&Self, &[String], &mut FieldMut<'_>) -> EnvResult<WalkAction>,
    {
        self.populate_record(target, mode, &mut hook)
    }

    /// Populates whatever `target` refers to, rejecting anything that is not
    /// a record.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnsupportedType`] naming the kind of `target`
    /// when it is not a record, otherwise see [`EnvTree::populate`].
    pub fn populate_field(&self, target: FieldMut<'_>, mode: Strictness) -> EnvResult<()> {
        match target {
            FieldMut::Record(record) => self.populate_own(record, mode),
            other => Err(EnvError::UnsupportedType {
                actual: other.kind(),
                required: RECORD_KIND,
            }),
        }
    }

    /// Populates `record` using the record's own walk hook, if it has one.
    fn populate_own(&self, record: &mut dyn Populate, mode: Strictness) -> EnvResult<()> {
        let own_hook = record.walk_hook();
        self.populate_record(record, mode, &mut |tree, key_chain, field| {
            own_hook.map_or(Ok(WalkAction::Continue), |walk| walk(tree, key_chain, field))
        })
    }

    fn populate_record(
        &self,
        root: &mut dyn Populate,
        mode: Strictness,
        hook: &mut Hook<'_>,
    ) -> EnvResult<()> {
        let root_chain = self.components(root.record_name());
        let mut pending: VecDeque<(&mut dyn Populate, Vec<String>)> = VecDeque::new();
        pending.push_back((root, root_chain));

        while let Some((record, chain)) = pending.pop_front() {
            for Field { name, mut value } in record.fields() {
                let mut key_chain = chain.clone();
                key_chain.extend(self.components(name));

                if hook(self, &key_chain, &mut value)? == WalkAction::Bypass {
                    tracing::debug!(key_chain = %key_chain.join(" -> "), "walk hook bypassed field");
                    continue;
                }

                match value {
                    FieldMut::Record(nested) => pending.push_back((nested, key_chain)),
                    FieldMut::Str(slot) => *slot = settle(self.find_string(&key_chain), mode)?,
                    FieldMut::Int(slot) => *slot = settle(self.find_int(&key_chain), mode)?,
                    FieldMut::Float(slot) => *slot = settle(self.find_float(&key_chain), mode)?,
                    FieldMut::Bool(slot) => *slot = settle(self.find_bool(&key_chain), mode)?,
                    FieldMut::Unsupported(kind) => {
                        return Err(EnvError::UnsupportedType {
                            actual: kind,
                            required: SUPPORTED_KINDS,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn components(&self, name: &str) -> Vec<String> {
        split_key(name, self.delimiter())
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Applies the strictness policy to a lookup.
///
/// Wrong types always propagate. A missing value becomes the zero value
/// unless `mode` is strict.
fn settle<T: Default>(found: EnvResult<T>, mode: Strictness) -> EnvResult<T> {
    match found {
        Err(EnvError::NotFound) if mode == Strictness::Lenient => Ok(T::default()),
        other => other,
    }
}
