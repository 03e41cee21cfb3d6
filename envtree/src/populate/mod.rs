//! Populating nested structures from an [`EnvTree`].
//!
//! A structure takes part by deriving [`Populate`], which describes its
//! fields, in declaration order, as [`FieldMut`] handles. The populator walks
//! those handles with a worklist: scalar leaves are filled from the tree at
//! the path formed by the record name followed by each field name, and nested
//! records are queued and processed once every sibling at the current level
//! has been handled.
//!
//! ```
//! use envtree::{EnvTree, Populate, Strictness};
//!
//! #[derive(Debug, Default, Populate)]
//! struct Server {
//!     host: String,
//!     port: i64,
//! }
//!
//! #[derive(Debug, Default, Populate)]
//! #[envtree(name = "APP")]
//! struct Settings {
//!     debug: bool,
//!     server: Server,
//! }
//!
//! let vars = [
//!     ("APP_DEBUG", "true"),
//!     ("APP_SERVER_HOST", "localhost"),
//!     ("APP_SERVER_PORT", "8080"),
//! ];
//! let tree = EnvTree::from_vars(vars, "^APP_", "_")?;
//! let mut settings = Settings::default();
//! tree.populate(&mut settings, Strictness::Strict)?;
//!
//! assert!(settings.debug);
//! assert_eq!(settings.server.port, 8080);
//! # Ok::<(), envtree::EnvError>(())
//! ```
//!
//! A type annotated with `#[envtree(walker)]` routes every field through its
//! [`StructWalker`] implementation first. The walker may validate, transform
//! or fully take over a field by returning [`WalkAction::Bypass`].

use std::fmt;

use crate::error::EnvResult;
use crate::tree::EnvTree;

mod fields;
mod walk;

pub use fields::EnvField;

/// Kinds a record field may have, as reported in
/// [`crate::EnvError::UnsupportedType`].
pub const SUPPORTED_KINDS: &str = "i64, f32, String, bool or struct";

/// Argument kind [`EnvTree::populate_field`] requires.
pub const RECORD_KIND: &str = "pointer to struct";

/// How missing variables are treated while populating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// A missing variable leaves its field at the zero value.
    #[default]
    Lenient,
    /// A missing variable is an error.
    Strict,
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Outcome of a walk hook for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    /// Continue with default population of the field.
    Continue,
    /// Skip default population; the hook handled the field or left it alone.
    Bypass,
}

/// A mutable handle on a single field of a record.
#[non_exhaustive]
pub enum FieldMut<'a> {
    /// Signed integer field.
    Int(&'a mut i64),
    /// Single-precision float field.
    Float(&'a mut f32),
    /// String field.
    Str(&'a mut String),
    /// Boolean field.
    Bool(&'a mut bool),
    /// Nested record.
    Record(&'a mut dyn Populate),
    /// Any other kind, named for diagnostics.
    Unsupported(&'static str),
}

impl FieldMut<'_> {
    /// Name of the field's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match *self {
            Self::Int(_) => "i64",
            Self::Float(_) => "f32",
            Self::Str(_) => "String",
            Self::Bool(_) => "bool",
            Self::Record(ref record) => record.record_name(),
            Self::Unsupported(kind) => kind,
        }
    }
}

impl fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.record_name()).finish(),
            Self::Unsupported(kind) => f.debug_tuple("Unsupported").field(kind).finish(),
        }
    }
}

/// A named field handle, as listed by [`Populate::fields`].
#[derive(Debug)]
pub struct Field<'a> {
    /// Key-chain component for the field.
    pub name: &'static str,
    /// Handle on the field's storage.
    pub value: FieldMut<'a>,
}

impl<'a> Field<'a> {
    /// Pairs `name` with `value`.
    #[must_use]
    pub const fn new(name: &'static str, value: FieldMut<'a>) -> Self {
        Self { name, value }
    }
}

/// Signature shared by type-level walk hooks.
pub type WalkHook = fn(&EnvTree, &[String], &mut FieldMut<'_>) -> EnvResult<WalkAction>;

/// A record that can be filled from an [`EnvTree`].
///
/// Usually derived with `#[derive(Populate)]`.
pub trait Populate {
    /// First key-chain component for this record when it is the populate
    /// target.
    fn record_name(&self) -> &'static str;

    /// Handles on every field, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Hook consulted for every field path when this record is the populate
    /// target.
    fn walk_hook(&self) -> Option<WalkHook> {
        None
    }
}

/// Per-field override for records that opt in with `#[envtree(walker)]`.
///
/// `walk` runs before default population for every field path, nested
/// records included. Returning an error aborts populating; fields assigned
/// before the error keep their new values.
///
/// # Examples
///
/// ```
/// use envtree::{EnvError, EnvResult, EnvTree, FieldMut, Populate, StructWalker, WalkAction};
///
/// #[derive(Debug, Default, Populate)]
/// #[envtree(name = "SVC", walker)]
/// struct Service {
///     port: i64,
///     name: String,
/// }
///
/// impl StructWalker for Service {
///     fn walk(tree: &EnvTree, key_chain: &[String], field: &mut FieldMut<'_>) -> EnvResult<WalkAction> {
///         if let FieldMut::Str(name) = field {
///             **name = tree.find_string(key_chain)?.to_uppercase();
///             return Ok(WalkAction::Bypass);
///         }
///         let port = tree.find_int(key_chain)?;
///         if !(1..=65535).contains(&port) {
///             return Err(EnvError::validation(key_chain, "port out of range"));
///         }
///         Ok(WalkAction::Continue)
///     }
/// }
///
/// let tree = EnvTree::from_vars([("SVC_PORT", "80"), ("SVC_NAME", "api")], "^SVC", "_")?;
/// let mut service = Service::default();
/// tree.populate(&mut service, Default::default())?;
/// assert_eq!(service.name, "API");
/// # Ok::<(), EnvError>(())
/// ```
pub trait StructWalker {
    /// Inspects, and possibly fills, the field at `key_chain`.
    ///
    /// # Errors
    ///
    /// Any error aborts populating and is returned to the caller.
    fn walk(tree: &EnvTree, key_chain: &[String], field: &mut FieldMut<'_>)
    -> EnvResult<WalkAction>;
}
