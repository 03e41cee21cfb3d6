//! Mapping of field types to [`FieldMut`] handles.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use super::FieldMut;

/// A type that may appear as a field of a [`super::Populate`] record.
///
/// Implemented for the supported scalars, for every derived record, and for
/// common standard types the populator rejects at runtime with
/// [`crate::EnvError::UnsupportedType`].
pub trait EnvField {
    /// Returns a handle on `self`.
    fn field_mut(&mut self) -> FieldMut<'_>;
}

impl EnvField for i64 {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Int(self)
    }
}

impl EnvField for f32 {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Float(self)
    }
}

impl EnvField for String {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Str(self)
    }
}

impl EnvField for bool {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Bool(self)
    }
}

macro_rules! unsupported_fields {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl EnvField for $ty {
                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Unsupported($kind)
                }
            }
        )+
    };
}

unsupported_fields!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f64 => "f64",
    char => "char",
    PathBuf => "PathBuf",
);

impl<T> EnvField for Option<T> {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Unsupported("Option")
    }
}

impl<T> EnvField for Vec<T> {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Unsupported("Vec")
    }
}

impl<K, V, S> EnvField for HashMap<K, V, S> {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Unsupported("HashMap")
    }
}

impl<K, V> EnvField for BTreeMap<K, V> {
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Unsupported("BTreeMap")
    }
}
