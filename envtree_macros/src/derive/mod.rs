//! Expansion of `#[derive(Populate)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

/// Parses `input` and emits the `Populate` and `EnvField` impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let record = parse::parse_input(input)?;
    Ok(generate::populate_impl(&record, &input.generics))
}

#[cfg(test)]
mod tests;
