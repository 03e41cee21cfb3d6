//! Coercion of raw environment strings into scalar values.
//!
//! Every typed getter on [`crate::Env`] and [`crate::EnvTree`], and the
//! populator, funnel through [`FromEnvValue`] so that a given raw string
//! always coerces the same way whichever API reads it.

use crate::error::{EnvError, EnvResult};

/// A scalar type that can be read from a raw environment value.
pub trait FromEnvValue: Sized {
    /// Name reported in [`EnvError::WrongType`].
    const TYPE_NAME: &'static str;

    /// Parses `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::WrongType`] when `raw` is not a valid
    /// representation of `Self`.
    fn from_env_value(raw: &str) -> EnvResult<Self>;
}

impl FromEnvValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_env_value(raw: &str) -> EnvResult<Self> {
        Ok(raw.to_owned())
    }
}

impl FromEnvValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_env_value(raw: &str) -> EnvResult<Self> {
        raw.parse()
            .map_err(|_| EnvError::wrong_type(raw, Self::TYPE_NAME))
    }
}

impl FromEnvValue for f32 {
    const TYPE_NAME: &'static str = "float";

    /// Finite values that overflow single precision are rejected rather than
    /// read as infinity. Explicit `inf`, `infinity` and `nan` spellings pass.
    fn from_env_value(raw: &str) -> EnvResult<Self> {
        let parsed: Self = raw
            .parse()
            .map_err(|_| EnvError::wrong_type(raw, Self::TYPE_NAME))?;
        if parsed.is_finite() || names_non_finite(raw) {
            Ok(parsed)
        } else {
            Err(EnvError::wrong_type(raw, Self::TYPE_NAME))
        }
    }
}

fn names_non_finite(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| unsigned.eq_ignore_ascii_case(name))
}

impl FromEnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
    /// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
    fn from_env_value(raw: &str) -> EnvResult<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(EnvError::wrong_type(raw, Self::TYPE_NAME)),
        }
    }
}

/// Resolves an optional raw value into `T`.
///
/// `None` maps to [`EnvError::NotFound`]; a present value is coerced with
/// [`FromEnvValue::from_env_value`].
pub(crate) fn coerce<T: FromEnvValue>(raw: Option<&str>) -> EnvResult<T> {
    raw.map_or(Err(EnvError::NotFound), T::from_env_value)
}
