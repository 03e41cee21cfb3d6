//! Literal environment snapshots.
//!
//! Most tests build trees from a fixed mapping rather than the live process
//! environment. These helpers keep the fixtures terse.

use std::collections::BTreeMap;

/// Builds an owned snapshot from borrowed `(key, value)` pairs.
///
/// # Examples
///
/// ```
/// use envtree_test_helpers::vars::snapshot;
///
/// let vars = snapshot(&[("APP_DB_PORT", "5432")]);
/// assert_eq!(vars.get("APP_DB_PORT").map(String::as_str), Some("5432"));
/// ```
#[must_use]
pub fn snapshot(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// The database and mailer fixture used across the tree test suites.
///
/// Every key starts with `ENVH_`; a few unrelated keys are included so that
/// filters have something to reject.
#[must_use]
pub fn service_snapshot() -> BTreeMap<String, String> {
    snapshot(&[
        ("ENVH_DB_USERNAME", "foo"),
        ("ENVH_DB_PASSWORD", "bar"),
        ("ENVH_DB_PORT", "3306"),
        ("ENVH_DB_USAGE_LIMIT", "95.6"),
        ("ENVH_MAILER_HOST", "127.0.0.1"),
        ("ENVH_MAILER_USERNAME", "foo"),
        ("ENVH_MAILER_PASSWORD", "bar"),
        ("ENVH_MAILER_ENABLED", "true"),
        ("HOME", "/home/envh"),
        ("PATH", "/usr/bin"),
    ])
}
