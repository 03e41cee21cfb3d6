//! Default-on-error adapter for fallible lookups.
//!
//! Any accessor returning [`EnvResult`] can be made infallible with
//! [`EnvResultExt::unsecured`], which trades the error for the zero value of
//! the result type: the empty string, `0`, `0.0`, `false`, an empty vector or
//! map, or an empty [`crate::EnvTree`].
//!
//! The error is dropped, so only use this where a missing or malformed
//! variable and its zero value mean the same thing to the caller.
//!
//! # Examples
//!
//! ```
//! use envtree::{EnvResultExt, EnvTree};
//!
//! let tree = EnvTree::from_vars([("APP_PORT", "oops")], "^APP", "_")?;
//! assert_eq!(tree.find_int(&["APP", "PORT"]).unsecured(), 0);
//! assert_eq!(tree.find_string(&["APP", "PORT"]).unsecured(), "oops");
//! assert!(tree.children_keys(&["NOPE"]).unsecured().is_empty());
//! # Ok::<(), envtree::EnvError>(())
//! ```

use crate::error::EnvResult;

/// Extension converting an [`EnvResult`] into its value or a zero value.
pub trait EnvResultExt<T> {
    /// Returns the value, or `T::default()` on any error.
    fn unsecured(self) -> T;
}

impl<T: Default> EnvResultExt<T> for EnvResult<T> {
    fn unsecured(self) -> T {
        self.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "discarding lookup error in favour of the zero value");
            T::default()
        })
    }
}
