//! Error types produced while building and reading environment trees.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type EnvResult<T> = Result<T, EnvError>;

/// Errors that can occur while building, navigating or populating from an
/// environment snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// A variable or key chain has no value.
    #[error("Variable not found")]
    NotFound,

    /// A value exists but cannot be coerced to the requested scalar type.
    #[error("Value \"{value}\" can't be converted to type \"{wanted}\"")]
    WrongType {
        /// Raw value as stored in the environment.
        value: String,
        /// Name of the type the caller asked for.
        wanted: &'static str,
    },

    /// Structural navigation reached a path with no node.
    #[error("No node found at path \"{}\"", .key_chain.join(" -> "))]
    NodeNotFound {
        /// Full chain the caller attempted to resolve.
        key_chain: Vec<String>,
    },

    /// The caller supplied an invalid filter pattern.
    #[error("invalid filter pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Two snapshot entries resolved to the same tree path.
    #[error("Variable was already defined before at path \"{}\"", .key_chain.join(" -> "))]
    DuplicateKey {
        /// Path shared by the colliding entries.
        key_chain: Vec<String>,
    },

    /// The populator met a field or argument kind it cannot fill.
    #[error("Type \"{actual}\" is not supported : you must provide \"{required}\"")]
    UnsupportedType {
        /// Kind that was encountered.
        actual: &'static str,
        /// Description of the accepted kinds.
        required: &'static str,
    },

    /// A walk hook rejected a value.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Key or joined key chain that failed validation.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },
}

impl EnvError {
    /// Builds a [`EnvError::NodeNotFound`] for `key_chain`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envtree::EnvError;
    /// let err = EnvError::node_not_found(&["APP", "DB"]);
    /// assert_eq!(err.to_string(), r#"No node found at path "APP -> DB""#);
    /// ```
    #[must_use]
    pub fn node_not_found<S: AsRef<str>>(key_chain: &[S]) -> Self {
        Self::NodeNotFound {
            key_chain: owned_chain(key_chain),
        }
    }

    /// Builds a [`EnvError::WrongType`] for `value`.
    #[must_use]
    pub fn wrong_type(value: &str, wanted: &'static str) -> Self {
        Self::WrongType {
            value: value.to_owned(),
            wanted,
        }
    }

    /// Builds a [`EnvError::Validation`] keyed by the joined `key_chain`.
    ///
    /// Walk hooks use this to report values that parse but are not
    /// acceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// use envtree::EnvError;
    /// let err = EnvError::validation(&["APP", "PORT"], "must be positive");
    /// assert_eq!(err.to_string(), "Validation failed for 'APP_PORT': must be positive");
    /// ```
    #[must_use]
    pub fn validation<S: AsRef<str>>(key_chain: &[S], message: impl Into<String>) -> Self {
        Self::Validation {
            key: owned_chain(key_chain).join("_"),
            message: message.into(),
        }
    }

    /// Returns `true` for [`EnvError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` for [`EnvError::WrongType`].
    #[must_use]
    pub const fn is_wrong_type(&self) -> bool {
        matches!(self, Self::WrongType { .. })
    }
}

pub(crate) fn owned_chain<S: AsRef<str>>(key_chain: &[S]) -> Vec<String> {
    key_chain.iter().map(|key| key.as_ref().to_owned()).collect()
}
