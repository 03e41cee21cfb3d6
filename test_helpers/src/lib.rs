//! Test helpers shared across crates in the `envtree` workspace.
//!
//! - [`env`] serialises mutation of the process environment and restores it
//!   when guards drop.
//! - [`vars`] builds literal environment snapshots for tests that do not need
//!   to touch the process at all.

pub mod env;
pub mod vars;
