//! Flat and hierarchical access to environment variables.
//!
//! - [`Env`] is a flat, typed view over a snapshot of the environment.
//! - [`EnvTree`] splits variable names on a delimiter and keeps those
//!   matching a filter, so `APP_DB_PORT` reads as `APP -> DB -> PORT`.
//! - [`Populate`], usually derived, fills a nested structure from a tree.
//!
//! Both views work on a snapshot taken once at construction; the library
//! never writes to the process environment.
//!
//! ```
//! use envtree::{EnvTree, Populate, Strictness};
//!
//! #[derive(Debug, Default, Populate)]
//! struct Db {
//!     host: String,
//!     port: i64,
//! }
//!
//! #[derive(Debug, Default, Populate)]
//! struct App {
//!     db: Db,
//! }
//!
//! let tree = EnvTree::from_vars(
//!     [("APP_DB_HOST", "localhost"), ("APP_DB_PORT", "5432")],
//!     "^APP_",
//!     "_",
//! )?;
//! assert_eq!(tree.children_keys(&["APP", "DB"])?, ["HOST", "PORT"]);
//!
//! let mut app = App::default();
//! tree.populate(&mut app, Strictness::Strict)?;
//! assert_eq!(app.db.port, 5432);
//! # Ok::<(), envtree::EnvError>(())
//! ```

extern crate self as envtree;

pub use envtree_macros::Populate;

mod env;
mod error;
pub mod node;
pub mod populate;
mod result_ext;
mod scalar;
pub mod snapshot;
mod tree;

pub use env::Env;
pub use error::{EnvError, EnvResult};
pub use node::Node;
pub use populate::{
    EnvField, Field, FieldMut, Populate, Strictness, StructWalker, WalkAction, WalkHook,
};
pub use result_ext::EnvResultExt;
pub use scalar::FromEnvValue;
pub use tree::{EnvTree, EnvTreeBuilder};
