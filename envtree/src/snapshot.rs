//! Reads the process environment into an owned snapshot.
//!
//! This is the only place the library touches the process environment, and
//! it only reads. Everything else works on the snapshot it returns, or on any
//! mapping the caller supplies.

use std::collections::BTreeMap;

/// An owned copy of environment variables, keyed by name.
pub type Snapshot = BTreeMap<String, String>;

/// Captures the current process environment.
///
/// Entries whose name or value is not valid Unicode cannot be represented and
/// are skipped with a warning.
#[must_use]
pub fn process_vars() -> Snapshot {
    let mut vars = Snapshot::new();
    for (key, value) in std::env::vars_os() {
        match (key.into_string(), value.into_string()) {
            (Ok(name), Ok(text)) => {
                vars.insert(name, text);
            }
            (Ok(name), Err(_)) => {
                tracing::warn!(key = %name, "skipping environment variable with non-Unicode value");
            }
            (Err(raw), _) => {
                tracing::warn!(key = ?raw, "skipping environment variable with non-Unicode name");
            }
        }
    }
    vars
}
