//! Flat access to environment variables.
//!
//! [`Env`] wraps a snapshot with typed getters and a regex-filtered search.
//! It does not build a tree; use [`crate::EnvTree`] for hierarchical access.

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::Regex;

use crate::error::EnvResult;
use crate::scalar::{FromEnvValue, coerce};
use crate::snapshot::{Snapshot, process_vars};

/// Typed flat lookup over an environment snapshot.
///
/// The snapshot is taken once, at construction; later changes to the process
/// environment are not observed. Clones share the snapshot.
///
/// # Examples
///
/// ```
/// use envtree::Env;
///
/// let env = Env::from_vars([("PORT", "8080"), ("DEBUG", "true")]);
/// assert_eq!(env.get_int("PORT")?, 8080);
/// assert!(env.get_bool("DEBUG")?);
/// assert!(env.get_string("MISSING").is_err());
/// # Ok::<(), envtree::EnvError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: Arc<Snapshot>,
}

impl Env {
    /// Captures the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(process_vars())
    }

    /// Wraps an explicit set of variables.
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_snapshot(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    fn from_snapshot(vars: Snapshot) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Reads `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvError::NotFound`] when `key` is absent and
    /// [`crate::EnvError::WrongType`] when its value does not coerce to `T`.
    pub fn get<T: FromEnvValue>(&self, key: &str) -> EnvResult<T> {
        coerce(self.vars.get(key).map(String::as_str))
    }

    /// Reads `key` as a string.
    ///
    /// # Errors
    ///
    /// See [`Env::get`].
    pub fn get_string(&self, key: &str) -> EnvResult<String> {
        self.get(key)
    }

    /// Reads `key` as an integer.
    ///
    /// # Errors
    ///
    /// See [`Env::get`].
    pub fn get_int(&self, key: &str) -> EnvResult<i64> {
        self.get(key)
    }

    /// Reads `key` as a single-precision float.
    ///
    /// # Errors
    ///
    /// See [`Env::get`].
    pub fn get_float(&self, key: &str) -> EnvResult<f32> {
        self.get(key)
    }

    /// Reads `key` as a boolean.
    ///
    /// # Errors
    ///
    /// See [`Env::get`].
    pub fn get_bool(&self, key: &str) -> EnvResult<bool> {
        self.get(key)
    }

    /// Whether `key` is present, whatever its value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Every entry whose key matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvError::Regex`] when `pattern` is invalid.
    pub fn find_entries(&self, pattern: &str) -> EnvResult<BTreeMap<String, String>> {
        let filter = Regex::new(pattern)?;
        Ok(self
            .vars
            .iter()
            .filter(|(key, _)| filter.is_match(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    /// Every variable name, in key order.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }

    /// Every variable value, in key order.
    #[must_use]
    pub fn all_values(&self) -> Vec<String> {
        self.vars.values().cloned().collect()
    }
}
