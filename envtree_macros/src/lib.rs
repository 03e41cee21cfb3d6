//! Procedural macros for `envtree`.
//!
//! `#[derive(Populate)]` describes a struct's fields to the runtime
//! populator. Each named field contributes its name in `SHOUTY_SNAKE_CASE`,
//! unless renamed, to the key chain, and the struct's own name leads the
//! chain when it is the populate target. The populator splits these names on
//! the tree's delimiter.
//!
//! Recognised attributes:
//!
//! - `#[envtree(name = "APP")]` on the struct overrides the record name.
//! - `#[envtree(walker)]` on the struct routes every field through the
//!   type's `StructWalker` implementation.
//! - `#[envtree(crate = "path")]` on the struct changes the path used to
//!   reach the runtime crate.
//! - `#[envtree(rename = "PORT")]` on a field overrides its component.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `envtree::Populate`.
#[proc_macro_derive(Populate, attributes(envtree))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
